//! Login, registration, reveal, and logout transitions.

use desktop_app_contract::{validate_credentials, validate_login};
use platform_host::ApiError;

use super::RuntimeEffect;
use crate::model::{
    AuthPhase, DesktopState, InteractionState, LoginForm, LoginMessage, READY_STATUS,
};

/// Delay between a successful login and the desktop reveal.
pub const DESKTOP_REVEAL_DELAY_MS: u32 = 1_000;

const CONNECTION_FAILED: &str = "Failed to connect to server";

pub(super) fn set_login_username(state: &mut DesktopState, username: String) {
    state.session.form.username = username;
    state.session.message = None;
}

pub(super) fn submit_login(state: &mut DesktopState, effects: &mut Vec<RuntimeEffect>) {
    if state.session.phase != AuthPhase::Anonymous {
        return;
    }
    let form = &state.session.form;
    match validate_login(&form.username, &form.password) {
        Ok(credentials) => {
            state.session.phase = AuthPhase::Pending;
            state.session.message = None;
            state.status_text = "Verifying credentials…".to_string();
            effects.push(RuntimeEffect::RequestLogin(credentials));
        }
        Err(err) => state.session.message = Some(LoginMessage::error(err.to_string())),
    }
}

pub(super) fn login_succeeded(
    state: &mut DesktopState,
    username: String,
    effects: &mut Vec<RuntimeEffect>,
) {
    if state.session.phase != AuthPhase::Pending {
        return;
    }
    state.session.phase = AuthPhase::Authenticated;
    state.session.message = Some(LoginMessage::success("Login successful!"));
    state.status_text = format!("Welcome, {username}");
    state.session.current_user = Some(username);
    state.login_generation += 1;
    effects.push(RuntimeEffect::ScheduleDesktopReveal {
        delay_ms: DESKTOP_REVEAL_DELAY_MS,
        generation: state.login_generation,
    });
}

pub(super) fn login_failed(state: &mut DesktopState, error: &ApiError) {
    if state.session.phase != AuthPhase::Pending {
        return;
    }
    state.session.phase = AuthPhase::Anonymous;
    let message = error.user_message(CONNECTION_FAILED);
    state.status_text = if error.is_server() {
        message.clone()
    } else {
        "Connection error".to_string()
    };
    state.session.message = Some(LoginMessage::error(message));
}

pub(super) fn submit_registration(state: &mut DesktopState, effects: &mut Vec<RuntimeEffect>) {
    if state.session.phase != AuthPhase::Anonymous {
        return;
    }
    let form = &state.session.form;
    match validate_credentials(&form.username, &form.password, &state.settings) {
        Ok(credentials) => {
            state.session.phase = AuthPhase::Pending;
            state.session.message = None;
            effects.push(RuntimeEffect::RequestRegistration(credentials));
        }
        Err(err) => state.session.message = Some(LoginMessage::error(err.to_string())),
    }
}

pub(super) fn registration_succeeded(state: &mut DesktopState) {
    if state.session.phase != AuthPhase::Pending {
        return;
    }
    state.session.phase = AuthPhase::Anonymous;
    state.session.form = LoginForm::default();
    state.session.message = Some(LoginMessage::success(
        "Registration successful! Please login.",
    ));
}

pub(super) fn registration_failed(state: &mut DesktopState, error: &ApiError) {
    if state.session.phase != AuthPhase::Pending {
        return;
    }
    state.session.phase = AuthPhase::Anonymous;
    state.session.message = Some(LoginMessage::error(error.user_message(CONNECTION_FAILED)));
}

/// Shows the desktop unless the session that scheduled the reveal has ended.
pub(super) fn reveal_desktop(state: &mut DesktopState, generation: u64) {
    if state.session.phase != AuthPhase::Authenticated
        || state.session.desktop_visible
        || generation != state.login_generation
    {
        return;
    }
    let Some(user) = state.session.current_user.clone() else {
        return;
    };
    state.session.desktop_visible = true;
    state.session.message = None;
    state.session.form.password.clear();
    state.status_text = format!("Signed in as {user}");
}

pub(super) fn logout(state: &mut DesktopState, interaction: &mut InteractionState) {
    state.session = Default::default();
    state.windows.clear();
    state.apple_menu_open = false;
    state.status_text = READY_STATUS.to_string();
    interaction.dragging = None;
}

pub(super) fn switch_user(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    effects: &mut Vec<RuntimeEffect>,
) {
    if state.session.current_user.is_none() {
        state.status_text = "No user signed in".to_string();
        return;
    }
    logout(state, interaction);
    effects.push(RuntimeEffect::FocusLoginUsername);
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::AppId;
    use platform_host::Credentials;
    use pretty_assertions::assert_eq;

    use crate::reducer::{reduce_desktop, DesktopAction};

    use super::*;

    fn reduce(state: &mut DesktopState, action: DesktopAction) -> Vec<RuntimeEffect> {
        let mut interaction = InteractionState::default();
        reduce_desktop(state, &mut interaction, action).expect("reduce")
    }

    fn fill(state: &mut DesktopState, username: &str, password: &str) {
        reduce(state, DesktopAction::SetLoginUsername(username.to_string()));
        reduce(state, DesktopAction::SetLoginPassword(password.to_string()));
    }

    #[test]
    fn login_success_reveals_desktop_after_delay() {
        let mut state = DesktopState::default();
        fill(&mut state, "alice", "secret123");

        let effects = reduce(&mut state, DesktopAction::SubmitLogin);
        assert_eq!(
            effects,
            vec![RuntimeEffect::RequestLogin(Credentials::new(
                "alice",
                "secret123"
            ))]
        );
        assert_eq!(state.session.phase, AuthPhase::Pending);

        let effects = reduce(
            &mut state,
            DesktopAction::LoginSucceeded {
                username: "alice".to_string(),
            },
        );
        assert_eq!(
            effects,
            vec![RuntimeEffect::ScheduleDesktopReveal {
                delay_ms: 1_000,
                generation: 1
            }]
        );
        assert_eq!(state.status_text, "Welcome, alice");
        assert_eq!(
            state.session.message,
            Some(LoginMessage::success("Login successful!"))
        );
        assert!(!state.session.desktop_visible);

        reduce(&mut state, DesktopAction::RevealDesktop { generation: 1 });
        assert!(state.session.desktop_visible);
        assert!(state.status_text.contains("alice"));
    }

    #[test]
    fn server_rejection_is_shown_verbatim() {
        let mut state = DesktopState::default();
        fill(&mut state, "alice", "wrong");
        reduce(&mut state, DesktopAction::SubmitLogin);
        reduce(
            &mut state,
            DesktopAction::LoginFailed {
                error: ApiError::Server {
                    status: 401,
                    message: "Invalid credentials".to_string(),
                },
            },
        );
        assert_eq!(state.session.phase, AuthPhase::Anonymous);
        assert_eq!(
            state.session.message,
            Some(LoginMessage::error("Invalid credentials"))
        );
        assert_eq!(state.status_text, "Invalid credentials");
    }

    #[test]
    fn transport_failure_maps_to_connection_message() {
        let mut state = DesktopState::default();
        fill(&mut state, "alice", "secret123");
        reduce(&mut state, DesktopAction::SubmitLogin);
        reduce(
            &mut state,
            DesktopAction::LoginFailed {
                error: ApiError::Transport("refused".to_string()),
            },
        );
        assert_eq!(
            state.session.message,
            Some(LoginMessage::error("Failed to connect to server"))
        );
        assert_eq!(state.status_text, "Connection error");
    }

    #[test]
    fn empty_login_is_rejected_without_request() {
        let mut state = DesktopState::default();
        fill(&mut state, "  ", "");
        let effects = reduce(&mut state, DesktopAction::SubmitLogin);
        assert!(effects.is_empty());
        assert_eq!(state.session.phase, AuthPhase::Anonymous);
        assert_eq!(
            state.session.message,
            Some(LoginMessage::error("Please enter username and password"))
        );
    }

    #[test]
    fn short_registration_password_is_rejected_without_request() {
        let mut state = DesktopState::default();
        fill(&mut state, "carol", "short");
        let effects = reduce(&mut state, DesktopAction::SubmitRegistration);
        assert!(effects.is_empty());
        assert_eq!(
            state.session.message,
            Some(LoginMessage::error("Password must be at least 8 characters"))
        );
    }

    #[test]
    fn registration_success_clears_form() {
        let mut state = DesktopState::default();
        fill(&mut state, "carol", "longenough");
        let effects = reduce(&mut state, DesktopAction::SubmitRegistration);
        assert_eq!(
            effects,
            vec![RuntimeEffect::RequestRegistration(Credentials::new(
                "carol",
                "longenough"
            ))]
        );
        reduce(&mut state, DesktopAction::RegistrationSucceeded);
        assert_eq!(state.session.form, LoginForm::default());
        assert_eq!(state.session.form.display_name(), "Guest");
        assert_eq!(
            state.session.message,
            Some(LoginMessage::success(
                "Registration successful! Please login."
            ))
        );
    }

    #[test]
    fn reveal_after_logout_is_ignored() {
        let mut state = DesktopState::default();
        fill(&mut state, "alice", "secret123");
        reduce(&mut state, DesktopAction::SubmitLogin);
        reduce(
            &mut state,
            DesktopAction::LoginSucceeded {
                username: "alice".to_string(),
            },
        );
        reduce(&mut state, DesktopAction::Logout);
        reduce(&mut state, DesktopAction::RevealDesktop { generation: 1 });

        assert!(!state.session.desktop_visible);
        assert_eq!(state.session.current_user, None);
        assert_eq!(state.status_text, "Ready");
    }

    #[test]
    fn reveal_from_previous_session_does_not_shorten_next_login() {
        let mut state = DesktopState::default();
        for username in ["alice", "bob"] {
            fill(&mut state, username, "secret123");
            reduce(&mut state, DesktopAction::SubmitLogin);
            reduce(
                &mut state,
                DesktopAction::LoginSucceeded {
                    username: username.to_string(),
                },
            );
            if username == "alice" {
                reduce(&mut state, DesktopAction::Logout);
            }
        }

        reduce(&mut state, DesktopAction::RevealDesktop { generation: 1 });
        assert!(!state.session.desktop_visible);

        reduce(&mut state, DesktopAction::RevealDesktop { generation: 2 });
        assert!(state.session.desktop_visible);
        assert_eq!(state.status_text, "Signed in as bob");
    }

    #[test]
    fn logout_closes_every_window() {
        let mut state = DesktopState::default();
        fill(&mut state, "alice", "secret123");
        reduce(&mut state, DesktopAction::SubmitLogin);
        reduce(
            &mut state,
            DesktopAction::LoginSucceeded {
                username: "alice".to_string(),
            },
        );
        reduce(&mut state, DesktopAction::RevealDesktop { generation: 1 });
        reduce(
            &mut state,
            DesktopAction::OpenApp {
                app_id: AppId::Terminal,
            },
        );
        reduce(
            &mut state,
            DesktopAction::OpenApp {
                app_id: AppId::UserManager,
            },
        );

        let effects = reduce(&mut state, DesktopAction::SwitchUser);
        assert_eq!(effects, vec![RuntimeEffect::FocusLoginUsername]);
        assert!(state.windows.is_empty());
        assert_eq!(state.session.menu_user_label(), "Guest");
        assert_eq!(state.status_text, "Ready");
    }

    #[test]
    fn switch_user_without_session_only_reports() {
        let mut state = DesktopState::default();
        let effects = reduce(&mut state, DesktopAction::SwitchUser);
        assert!(effects.is_empty());
        assert_eq!(state.status_text, "No user signed in");
    }

    #[test]
    fn typing_username_clears_message() {
        let mut state = DesktopState::default();
        reduce(&mut state, DesktopAction::SubmitLogin);
        assert!(state.session.message.is_some());
        reduce(&mut state, DesktopAction::SetLoginUsername("al".to_string()));
        assert_eq!(state.session.message, None);
        assert_eq!(state.session.form.display_name(), "al");
    }
}
