use desktop_app_contract::{dock_icon_dom_id, window_dom_id, AppId};
use leptos::{logging, spawn_local};
use platform_host::AnimationOutcome;

use crate::{
    host::DesktopHostContext,
    model::{WindowAnimation, WindowRect},
    reducer::DesktopAction,
    runtime_context::DesktopRuntimeContext,
    window_manager::{dock_animation_request, dock_target_rect, screen_rect},
};

/// DOM id of the dock container.
pub const DOCK_DOM_ID: &str = "dock";

pub(super) fn play_dock_animation(
    host: DesktopHostContext,
    runtime: DesktopRuntimeContext,
    app_id: AppId,
    animation: WindowAnimation,
    rect: WindowRect,
) {
    let motion = host.services().motion.clone();
    let element_id = window_dom_id(app_id);
    let window_bounds = motion
        .element_bounds(&element_id)
        .unwrap_or_else(|| screen_rect(rect));
    let target = dock_target_rect(
        motion.element_bounds(&dock_icon_dom_id(app_id)),
        motion.element_bounds(DOCK_DOM_ID),
        motion.viewport_size(),
    );
    let request = dock_animation_request(element_id, animation, window_bounds, target);

    spawn_local(async move {
        let outcome = match motion.play(request).await {
            Ok(outcome) => outcome,
            Err(err) => {
                logging::warn!("window animation failed: {err}");
                AnimationOutcome::Finished
            }
        };
        runtime.dispatch_action(DesktopAction::WindowAnimationFinished {
            app_id,
            animation,
            outcome,
        });
    });
}
