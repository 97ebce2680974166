//! Desktop window manager and shell for the password-manager desktop.
//!
//! [`DesktopProvider`] owns the reducer state and runtime effect queue; [`DesktopShell`] renders
//! the login screen, menu bar, windows, and dock on top of it.

pub mod apps;
pub mod chrome;
pub mod components;
mod effect_executor;
pub mod host;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod wallpaper;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
