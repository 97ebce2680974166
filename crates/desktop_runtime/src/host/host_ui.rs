use std::time::Duration;

use leptos::{logging, set_timeout, spawn_local};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{
    host::DesktopHostContext, reducer::DesktopAction, runtime_context::DesktopRuntimeContext,
};

/// DOM id of the login username field.
pub const LOGIN_USERNAME_DOM_ID: &str = "login-username";

pub(super) fn dispatch_after(runtime: DesktopRuntimeContext, action: DesktopAction, delay_ms: u32) {
    set_timeout(
        move || runtime.dispatch_action(action),
        Duration::from_millis(u64::from(delay_ms)),
    );
}

pub(super) fn show_notice(host: DesktopHostContext, message: String) {
    let dialogs = host.services().dialogs.clone();
    spawn_local(async move {
        dialogs.alert(&message).await;
        logging::log!("notice shown: {message}");
    });
}

pub(super) fn focus_element_by_id(element_id: &'static str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let Some(element) = document.get_element_by_id(element_id) else {
            return;
        };
        let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        let callback = Closure::once_into_js(move || {
            let _ = element.focus();
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = element_id;
}
