//! Runtime-effect dispatch for the desktop host boundary.

use crate::{
    host::{animation, host_ui, session_effects, wallpaper_effects, DesktopHostContext},
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

pub(super) fn run_runtime_effect(
    host: DesktopHostContext,
    runtime: DesktopRuntimeContext,
    effect: RuntimeEffect,
) {
    match effect {
        RuntimeEffect::PlayWindowAnimation {
            app_id,
            animation,
            rect,
        } => animation::play_dock_animation(host, runtime, app_id, animation, rect),
        RuntimeEffect::RequestLogin(credentials) => {
            session_effects::request_login(host, runtime, credentials)
        }
        RuntimeEffect::RequestRegistration(credentials) => {
            session_effects::request_registration(host, runtime, credentials)
        }
        RuntimeEffect::ScheduleDesktopReveal {
            delay_ms,
            generation,
        } => host_ui::dispatch_after(
            runtime,
            DesktopAction::RevealDesktop { generation },
            delay_ms,
        ),
        RuntimeEffect::FocusLoginUsername => {
            host_ui::focus_element_by_id(host_ui::LOGIN_USERNAME_DOM_ID)
        }
        RuntimeEffect::StartDynamicWallpaper { interval_ms } => {
            wallpaper_effects::start_dynamic(host, runtime, interval_ms)
        }
        RuntimeEffect::StopDynamicWallpaper => wallpaper_effects::stop_dynamic(host),
        RuntimeEffect::ScheduleWallpaperTransitionEnd { delay_ms } => {
            host_ui::dispatch_after(runtime, DesktopAction::EndWallpaperTransition, delay_ms)
        }
        RuntimeEffect::ShowNotice(message) => host_ui::show_notice(host, message),
    }
}
