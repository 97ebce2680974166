//! Advanced settings panel: local security preferences and the clear-all-data action.
//!
//! Preferences live in desktop state only. Nothing here is sent to the backend.

#![warn(rustdoc::broken_intra_doc_links)]

use desktop_app_contract::{AppMountContext, AppServices, SecuritySettings, ValidationError};
use leptos::*;
use platform_host::DialogService;
use system_ui::prelude::*;

pub const SAVED_NOTICE: &str = "Settings saved successfully!";
pub const CLEAR_FIRST_PROMPT: &str =
    "Are you sure you want to clear ALL data? This action cannot be undone!";
pub const CLEAR_SECOND_PROMPT: &str = "This will delete all users and history. Continue?";
pub const CLEARED_NOTICE: &str = "All data cleared successfully!";

/// Parses the form, announcing success through a notice.
pub async fn save_settings(
    dialogs: &dyn DialogService,
    min_password_length: &str,
    session_timeout_minutes: &str,
    track_history: bool,
) -> Result<SecuritySettings, ValidationError> {
    let settings =
        SecuritySettings::from_form(min_password_length, session_timeout_minutes, track_history)?;
    dialogs.alert(SAVED_NOTICE).await;
    Ok(settings)
}

/// Runs both confirmations; `true` means the caller should wipe local data and log out.
pub async fn confirm_clear_all(dialogs: &dyn DialogService) -> bool {
    if !dialogs.confirm(CLEAR_FIRST_PROMPT).await {
        return false;
    }
    if !dialogs.confirm(CLEAR_SECOND_PROMPT).await {
        return false;
    }
    dialogs.alert(CLEARED_NOTICE).await;
    true
}

/// Mounts the advanced settings panel.
pub fn mount(context: AppMountContext) -> View {
    view! { <SettingsApp services=context.services /> }.into_view()
}

#[component]
fn SettingsApp(services: AppServices) -> impl IntoView {
    let initial = services.settings.current.get_untracked();
    let min_length = create_rw_signal(initial.min_password_length.to_string());
    let timeout = create_rw_signal(initial.session_timeout_minutes.to_string());
    let track_history = create_rw_signal(initial.track_history);
    let error = create_rw_signal::<Option<String>>(None);
    let services = store_value(services);

    let save = move || {
        let services = services.get_value();
        let (min, minutes, track) = (
            min_length.get_untracked(),
            timeout.get_untracked(),
            track_history.get_untracked(),
        );
        spawn_local(async move {
            match save_settings(services.host.dialogs.as_ref(), &min, &minutes, track).await {
                Ok(settings) => {
                    error.set(None);
                    services.settings.save(settings);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let clear_all = move || {
        let services = services.get_value();
        spawn_local(async move {
            if confirm_clear_all(services.host.dialogs.as_ref()).await {
                services.data.clear_local();
                services.session.logout();
            }
        });
    };

    view! {
        <div class="app-shell app-settings-shell">
            <Panel heading="Security" aria_label="Security settings">
                <ToggleRow title="Minimum password length">
                    <TextField
                        id="min-password-length"
                        input_type="number"
                        aria_label="Minimum password length"
                        value=min_length
                        on_value=Callback::new(move |value| min_length.set(value))
                    />
                </ToggleRow>
                <ToggleRow title="Session timeout (minutes)">
                    <TextField
                        id="session-timeout"
                        input_type="number"
                        aria_label="Session timeout in minutes"
                        value=timeout
                        on_value=Callback::new(move |value| timeout.set(value))
                    />
                </ToggleRow>
                <ToggleRow
                    title="Track login history"
                    description="Reported in the security audit"
                >
                    <Switch
                        id="track-history"
                        aria_label="Track login history"
                        checked=track_history
                        on_toggle=Callback::new(move |checked| track_history.set(checked))
                    />
                </ToggleRow>
                <InlineMessage
                    layout_class="settings-error"
                    message=Signal::derive(move || error.get().map(|text| (Tone::Danger, text)))
                />
                <Button
                    variant=ButtonVariant::Primary
                    id="save-settings"
                    on_click=Callback::new(move |_| save())
                >
                    "Save Settings"
                </Button>
            </Panel>
            <Panel heading="Danger Zone" aria_label="Data reset">
                <Button
                    variant=ButtonVariant::Danger
                    id="clear-all-data"
                    on_click=Callback::new(move |_| clear_all())
                >
                    "Clear All Data"
                </Button>
            </Panel>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{DialogPrompt, ScriptedDialogService};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clear_all_needs_both_confirmations() {
        let dialogs = ScriptedDialogService::answering([true, false]);
        assert!(!block_on(confirm_clear_all(&dialogs)));
        assert_eq!(
            dialogs.prompts(),
            vec![
                DialogPrompt::Confirm(CLEAR_FIRST_PROMPT.to_string()),
                DialogPrompt::Confirm(CLEAR_SECOND_PROMPT.to_string()),
            ]
        );

        let dialogs = ScriptedDialogService::answering([true, true]);
        assert!(block_on(confirm_clear_all(&dialogs)));
        assert_eq!(
            dialogs.prompts().last(),
            Some(&DialogPrompt::Alert(CLEARED_NOTICE.to_string()))
        );
    }

    #[test]
    fn first_decline_stops_immediately() {
        let dialogs = ScriptedDialogService::answering([false]);
        assert!(!block_on(confirm_clear_all(&dialogs)));
        assert_eq!(dialogs.prompts().len(), 1);
    }

    #[test]
    fn save_parses_form_and_announces() {
        let dialogs = ScriptedDialogService::default();
        let saved = block_on(save_settings(&dialogs, "12", "45", false)).expect("valid");
        assert_eq!(
            saved,
            SecuritySettings {
                min_password_length: 12,
                session_timeout_minutes: 45,
                track_history: false,
            }
        );
        assert_eq!(
            dialogs.prompts(),
            vec![DialogPrompt::Alert(SAVED_NOTICE.to_string())]
        );
    }

    #[test]
    fn invalid_form_is_not_saved() {
        let dialogs = ScriptedDialogService::default();
        assert!(block_on(save_settings(&dialogs, "abc", "30", true)).is_err());
        assert!(dialogs.prompts().is_empty());
    }
}
