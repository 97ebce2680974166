use std::time::Duration;

use leptos::{logging, set_interval_with_handle};

use crate::{
    host::DesktopHostContext, reducer::DesktopAction, runtime_context::DesktopRuntimeContext,
};

/// Replaces any running cycle interval with a fresh one.
pub(super) fn start_dynamic(
    host: DesktopHostContext,
    runtime: DesktopRuntimeContext,
    interval_ms: u32,
) {
    host.replace_dynamic_wallpaper_timer(None);
    match set_interval_with_handle(
        move || runtime.dispatch_action(DesktopAction::AdvanceDynamicWallpaper),
        Duration::from_millis(u64::from(interval_ms)),
    ) {
        Ok(handle) => host.replace_dynamic_wallpaper_timer(Some(handle)),
        Err(err) => logging::warn!("dynamic wallpaper timer failed: {err:?}"),
    }
}

pub(super) fn stop_dynamic(host: DesktopHostContext) {
    host.replace_dynamic_wallpaper_timer(None);
}
