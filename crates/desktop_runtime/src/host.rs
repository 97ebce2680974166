//! Host-side runtime helpers for executing reducer effects against injected host services.
//!
//! Reducer transitions stay pure; everything that touches the network, timers, dialogs, or the
//! DOM runs here and reports back through [`DesktopAction`](crate::reducer::DesktopAction)
//! dispatch.

mod animation;
mod effects;
mod host_ui;
mod session_effects;
mod wallpaper_effects;

use std::{cell::Cell, rc::Rc};

use leptos::leptos_dom::helpers::IntervalHandle;
use platform_host::HostServices;

use crate::{reducer::RuntimeEffect, runtime_context::DesktopRuntimeContext};

pub use animation::DOCK_DOM_ID;
pub use host_ui::LOGIN_USERNAME_DOM_ID;

#[derive(Clone)]
/// Host service bundle plus the timer handles owned by the runtime.
pub struct DesktopHostContext {
    services: HostServices,
    dynamic_wallpaper_timer: Rc<Cell<Option<IntervalHandle>>>,
}

impl DesktopHostContext {
    /// Wraps the host services injected by the entry layer.
    pub fn new(services: HostServices) -> Self {
        Self {
            services,
            dynamic_wallpaper_timer: Rc::new(Cell::new(None)),
        }
    }

    /// Returns the injected host services.
    pub fn services(&self) -> &HostServices {
        &self.services
    }

    /// Returns whether the platform asks for reduced motion.
    pub fn prefers_reduced_motion(&self) -> bool {
        self.services.motion.prefers_reduced_motion()
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        effects::run_runtime_effect(self.clone(), runtime, effect);
    }

    fn replace_dynamic_wallpaper_timer(&self, next: Option<IntervalHandle>) {
        if let Some(previous) = self.dynamic_wallpaper_timer.replace(next) {
            previous.clear();
        }
    }
}

impl std::fmt::Debug for DesktopHostContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesktopHostContext")
            .field("services", &self.services)
            .finish_non_exhaustive()
    }
}
