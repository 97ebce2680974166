//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, and the service
//! bundle handed to mounted apps. UI composition stays in [`crate::components`].

use desktop_app_contract::{AppCommand, AppServiceSignals, AppServices, FetchSequencer};
use leptos::*;
use platform_host::HostServices;

use crate::{
    effect_executor,
    host::DesktopHostContext,
    model::{DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer/drag interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
    /// Service bundle passed to every mounted app.
    pub app_services: StoredValue<AppServices>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

fn app_service_signals(state: RwSignal<DesktopState>) -> AppServiceSignals {
    AppServiceSignals {
        current_user: create_memo(move |_| state.with(|s| s.session.current_user.clone())).into(),
        users: create_memo(move |_| state.with(|s| s.users.items.clone())).into(),
        history: create_memo(move |_| state.with(|s| s.history.items.clone())).into(),
        settings: create_memo(move |_| state.with(|s| s.settings)).into(),
        wallpaper: create_memo(move |_| state.with(|s| s.wallpaper.current())).into(),
        wallpapers: create_memo(move |_| state.with(|s| s.wallpaper.ordered_for_grid())).into(),
        dynamic_wallpaper: create_memo(move |_| state.with(|s| s.wallpaper.dynamic_enabled()))
            .into(),
        terminal_history: create_memo(move |_| state.with(|s| s.terminal_history.clone())).into(),
    }
}

fn install_runtime_orchestration(runtime: DesktopRuntimeContext) {
    let reduced_motion = runtime.host.with_value(|host| host.prefers_reduced_motion());
    runtime.dispatch_action(DesktopAction::SetReducedMotion {
        enabled: reduced_motion,
    });
    effect_executor::install(runtime);
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Injected browser host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let host = store_value(DesktopHostContext::new(host_services.clone()));
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        match reduce_desktop(&mut desktop, &mut ui, action) {
            Ok(new_effects) => {
                if desktop != previous_desktop {
                    state.set(desktop);
                }
                if ui != previous_ui {
                    interaction.set(ui);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let command_sender = Callback::new(move |command: AppCommand| {
        dispatch.call(DesktopAction::HandleAppCommand(command));
    });
    let app_services = store_value(AppServices::new(
        command_sender,
        app_service_signals(state),
        (FetchSequencer::default(), FetchSequencer::default()),
        host_services,
    ));

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        effects,
        dispatch,
        app_services,
    };

    provide_context(runtime);

    install_runtime_orchestration(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
