//! Drains reducer-emitted runtime effects in the order they were queued.

use leptos::*;

use crate::runtime_context::DesktopRuntimeContext;

/// Installs the reactive drain for [`DesktopRuntimeContext::effects`].
pub fn install(runtime: DesktopRuntimeContext) {
    // Take the batch before running it; effects that dispatch again queue into a fresh batch.
    create_effect(move |_| {
        let batch = runtime.effects.get();
        if batch.is_empty() {
            return;
        }
        runtime.effects.set(Vec::new());

        let host = runtime.host.get_value();
        for effect in batch {
            host.run_runtime_effect(runtime, effect);
        }
    });
}
