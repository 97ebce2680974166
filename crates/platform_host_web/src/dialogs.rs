//! `window.confirm` / `window.alert` dialog adapter.

use platform_host::{DialogFuture, DialogService};

#[derive(Debug, Clone, Copy, Default)]
/// Browser dialog adapter backed by the blocking window dialogs.
pub struct WebDialogService;

impl DialogService for WebDialogService {
    fn confirm<'a>(&'a self, message: &'a str) -> DialogFuture<'a, bool> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                return web_sys::window()
                    .and_then(|window| window.confirm_with_message(message).ok())
                    .unwrap_or(false);
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = message;
                false
            }
        })
    }

    fn alert<'a>(&'a self, message: &'a str) -> DialogFuture<'a, ()> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }

            #[cfg(not(target_arch = "wasm32"))]
            let _ = message;
        })
    }
}
