use leptos::{logging, spawn_local};
use platform_host::{authenticate_with, Credentials};

use crate::{
    host::DesktopHostContext, reducer::DesktopAction, runtime_context::DesktopRuntimeContext,
};

pub(super) fn request_login(
    host: DesktopHostContext,
    runtime: DesktopRuntimeContext,
    credentials: Credentials,
) {
    let backend = host.services().backend.clone();
    spawn_local(async move {
        match authenticate_with(backend.as_ref(), &credentials).await {
            Ok(username) => runtime.dispatch_action(DesktopAction::LoginSucceeded { username }),
            Err(error) => {
                logging::warn!("login failed: {error}");
                runtime.dispatch_action(DesktopAction::LoginFailed { error });
            }
        }
    });
}

pub(super) fn request_registration(
    host: DesktopHostContext,
    runtime: DesktopRuntimeContext,
    credentials: Credentials,
) {
    let backend = host.services().backend.clone();
    spawn_local(async move {
        match backend.register(&credentials).await {
            Ok(_) => runtime.dispatch_action(DesktopAction::RegistrationSucceeded),
            Err(error) => {
                logging::warn!("registration failed: {error}");
                runtime.dispatch_action(DesktopAction::RegistrationFailed { error });
            }
        }
    });
}
