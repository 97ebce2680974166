//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

mod appearance;
mod session;

use desktop_app_contract::{AppCommand, AppId, FetchTicket, SecuritySettings};
use platform_host::{
    AnimationOutcome, ApiError, Credentials, HistoryEntry, UserRecord, Wallpaper,
};
use thiserror::Error;

use crate::{
    chrome::MenuAction,
    model::{
        DesktopState, DragSession, InteractionState, PointerPosition, WindowAnimation,
        WindowRecord, WindowRect, TERMINAL_HISTORY_LIMIT,
    },
    window_manager::{bring_to_front, cascade_rect, dragged_rect},
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open an app window, or raise/restore the existing one.
    OpenApp {
        /// App to open.
        app_id: AppId,
    },
    /// Close an app window.
    CloseApp {
        /// App whose window closes.
        app_id: AppId,
    },
    /// Raise a window above every other window.
    BringToFront {
        /// Window to raise.
        app_id: AppId,
    },
    /// Start minimizing a window into the dock.
    MinimizeWindow {
        /// Window to minimize.
        app_id: AppId,
    },
    /// Bring a minimized window back out of the dock.
    RestoreWindow {
        /// Window to restore.
        app_id: AppId,
    },
    /// Completion signal of a dock animation started by [`RuntimeEffect::PlayWindowAnimation`].
    WindowAnimationFinished {
        /// Animated window.
        app_id: AppId,
        /// Which animation ended.
        animation: WindowAnimation,
        /// Whether it ran to completion.
        outcome: AnimationOutcome,
    },
    /// Toggle the maximized layout flag.
    ToggleMaximize {
        /// Window to toggle.
        app_id: AppId,
    },
    /// Begin dragging a window by its title bar.
    BeginMove {
        /// Window being dragged.
        app_id: AppId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag.
    EndMove,
    /// Record the platform reduced-motion preference.
    SetReducedMotion {
        /// Whether dock animations are skipped.
        enabled: bool,
    },
    /// Login username field changed.
    SetLoginUsername(String),
    /// Login password field changed.
    SetLoginPassword(String),
    /// Submit the login form.
    SubmitLogin,
    /// Backend accepted the login.
    LoginSucceeded {
        /// Username echoed by the backend.
        username: String,
    },
    /// Backend or transport rejected the login.
    LoginFailed {
        /// Failure reported by the backend client.
        error: ApiError,
    },
    /// Submit the login form as a registration.
    SubmitRegistration,
    /// Backend created the account.
    RegistrationSucceeded,
    /// Backend or transport rejected the registration.
    RegistrationFailed {
        /// Failure reported by the backend client.
        error: ApiError,
    },
    /// Post-login delay elapsed; show the desktop.
    RevealDesktop {
        /// Login generation that scheduled the reveal.
        generation: u64,
    },
    /// End the session.
    Logout,
    /// Log out and return focus to the login username field.
    SwitchUser,
    /// Open or close the Apple menu.
    ToggleAppleMenu,
    /// Close the Apple menu if open.
    CloseAppleMenu,
    /// Run an Apple menu entry.
    MenuAction(MenuAction),
    /// Replace the menu bar status text.
    SetStatus(String),
    /// Show a dialog notice, optionally updating the status text.
    ShowNotice {
        /// New status text.
        status: Option<String>,
        /// Dialog text.
        notice: String,
    },
    /// Apply a wallpaper without touching dynamic mode.
    ApplyWallpaper(Wallpaper),
    /// Apply a registry wallpaper chosen by the user; disables dynamic mode.
    SelectWallpaper {
        /// Registry id.
        wallpaper_id: String,
    },
    /// Register and apply a custom wallpaper; disables dynamic mode.
    ApplyCustomWallpaper(Wallpaper),
    /// Turn dynamic cycling on or off.
    SetDynamicWallpaper {
        /// Requested mode.
        enabled: bool,
    },
    /// One dynamic cycle tick elapsed.
    AdvanceDynamicWallpaper,
    /// Login-screen user switcher: apply the next registry entry.
    CycleLoginWallpaper,
    /// Reseed the built-in wallpapers.
    SyncWallpapers,
    /// The wallpaper transition period elapsed.
    EndWallpaperTransition,
    /// Offer a fetched user snapshot to the cache.
    UsersLoaded {
        /// Ticket taken before the request was issued.
        ticket: FetchTicket,
        /// Fetched users.
        users: Vec<UserRecord>,
    },
    /// Offer a fetched history snapshot to the cache.
    HistoryLoaded {
        /// Ticket taken before the request was issued.
        ticket: FetchTicket,
        /// Fetched history.
        history: Vec<HistoryEntry>,
    },
    /// Wipe cached users, history, and terminal recall.
    ClearLocalData {
        /// Users responses at or below this ticket are refused afterwards.
        users_floor: FetchTicket,
        /// History responses at or below this ticket are refused afterwards.
        history_floor: FetchTicket,
    },
    /// Replace the security preferences.
    SaveSettings(SecuritySettings),
    /// Record a terminal command for recall.
    PushTerminalHistory(String),
    /// Command sent by a mounted app.
    HandleAppCommand(AppCommand),
}

impl From<AppCommand> for DesktopAction {
    fn from(command: AppCommand) -> Self {
        match command {
            AppCommand::OpenApp(app_id) => Self::OpenApp { app_id },
            AppCommand::CloseApp(app_id) => Self::CloseApp { app_id },
            AppCommand::SetStatus(text) => Self::SetStatus(text),
            AppCommand::Logout => Self::Logout,
            AppCommand::UsersLoaded { ticket, users } => Self::UsersLoaded { ticket, users },
            AppCommand::HistoryLoaded { ticket, history } => {
                Self::HistoryLoaded { ticket, history }
            }
            AppCommand::ClearLocalData {
                users_floor,
                history_floor,
            } => Self::ClearLocalData {
                users_floor,
                history_floor,
            },
            AppCommand::SaveSettings(settings) => Self::SaveSettings(settings),
            AppCommand::SelectWallpaper { wallpaper_id } => Self::SelectWallpaper { wallpaper_id },
            AppCommand::ApplyCustomWallpaper(wallpaper) => Self::ApplyCustomWallpaper(wallpaper),
            AppCommand::SetDynamicWallpaper(enabled) => Self::SetDynamicWallpaper { enabled },
            AppCommand::SyncWallpapers => Self::SyncWallpapers,
            AppCommand::PushTerminalHistory(command) => Self::PushTerminalHistory(command),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Animate a window toward or away from its dock icon, then report
    /// [`DesktopAction::WindowAnimationFinished`].
    PlayWindowAnimation {
        /// Animated window.
        app_id: AppId,
        /// Direction.
        animation: WindowAnimation,
        /// Layout rect used when the element cannot be measured.
        rect: WindowRect,
    },
    /// Post credentials to `/login`.
    RequestLogin(Credentials),
    /// Post credentials to `/register`.
    RequestRegistration(Credentials),
    /// Dispatch [`DesktopAction::RevealDesktop`] after a delay.
    ScheduleDesktopReveal {
        /// Delay in milliseconds.
        delay_ms: u32,
        /// Login generation echoed back in the reveal.
        generation: u64,
    },
    /// Move keyboard focus to the login username field.
    FocusLoginUsername,
    /// (Re)start the dynamic wallpaper interval.
    StartDynamicWallpaper {
        /// Cycle period.
        interval_ms: u32,
    },
    /// Cancel the dynamic wallpaper interval.
    StopDynamicWallpaper,
    /// Dispatch [`DesktopAction::EndWallpaperTransition`] after a delay.
    ScheduleWallpaperTransitionEnd {
        /// Delay in milliseconds.
        delay_ms: u32,
    },
    /// Show a dialog notice.
    ShowNotice(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid actions.
pub enum ReducerError {
    /// The action references an app without an open window.
    #[error("no open window for {0:?}")]
    WindowNotFound(AppId),
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when a window action targets an app that has no
/// open window. Late animation completions for closed windows are not errors.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenApp { app_id } => {
            state.apple_menu_open = false;
            match state.window(app_id).map(|w| w.minimized) {
                Some(true) => restore_window(state, app_id, &mut effects)?,
                Some(false) => {
                    bring_to_front(state, app_id);
                }
                None => {
                    let rect = cascade_rect(app_id, state.windows.len());
                    state.windows.push(WindowRecord {
                        app_id,
                        rect,
                        z_index: 0,
                        minimized: false,
                        maximized: false,
                        animation: None,
                    });
                    bring_to_front(state, app_id);
                }
            }
        }
        DesktopAction::CloseApp { app_id } => {
            let before_len = state.windows.len();
            state.windows.retain(|w| w.app_id != app_id);
            if state.windows.len() == before_len {
                return Err(ReducerError::WindowNotFound(app_id));
            }
            if interaction
                .dragging
                .as_ref()
                .is_some_and(|drag| drag.app_id == app_id)
            {
                interaction.dragging = None;
            }
        }
        DesktopAction::BringToFront { app_id } => {
            if !bring_to_front(state, app_id) {
                return Err(ReducerError::WindowNotFound(app_id));
            }
        }
        DesktopAction::MinimizeWindow { app_id } => {
            let reduced_motion = state.reduced_motion;
            let window = find_window_mut(state, app_id)?;
            if window.minimized || window.is_animating() {
                return Ok(effects);
            }
            if reduced_motion {
                window.minimized = true;
            } else {
                window.animation = Some(WindowAnimation::Minimizing);
                effects.push(RuntimeEffect::PlayWindowAnimation {
                    app_id,
                    animation: WindowAnimation::Minimizing,
                    rect: window.rect,
                });
            }
        }
        DesktopAction::RestoreWindow { app_id } => {
            restore_window(state, app_id, &mut effects)?;
        }
        DesktopAction::WindowAnimationFinished {
            app_id,
            animation,
            outcome,
        } => {
            let Some(window) = state.windows.iter_mut().find(|w| w.app_id == app_id) else {
                return Ok(effects);
            };
            if window.animation != Some(animation) {
                return Ok(effects);
            }
            window.animation = None;
            if animation == WindowAnimation::Minimizing && outcome == AnimationOutcome::Finished {
                window.minimized = true;
            }
        }
        DesktopAction::ToggleMaximize { app_id } => {
            let window = find_window_mut(state, app_id)?;
            window.maximized = !window.maximized;
            bring_to_front(state, app_id);
        }
        DesktopAction::BeginMove { app_id, pointer } => {
            let window = find_window_mut(state, app_id)?;
            let maximized = window.maximized;
            let rect_start = window.rect;
            bring_to_front(state, app_id);
            if !maximized {
                interaction.dragging = Some(DragSession {
                    app_id,
                    pointer_start: pointer,
                    rect_start,
                });
            }
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging.clone() {
                match state
                    .windows
                    .iter_mut()
                    .find(|w| w.app_id == session.app_id)
                {
                    Some(window) if !window.maximized => {
                        window.rect =
                            dragged_rect(session.rect_start, session.pointer_start, pointer);
                    }
                    Some(_) => {}
                    None => interaction.dragging = None,
                }
            }
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::SetReducedMotion { enabled } => {
            state.reduced_motion = enabled;
        }
        DesktopAction::SetLoginUsername(username) => {
            session::set_login_username(state, username);
        }
        DesktopAction::SetLoginPassword(password) => {
            state.session.form.password = password;
        }
        DesktopAction::SubmitLogin => session::submit_login(state, &mut effects),
        DesktopAction::LoginSucceeded { username } => {
            session::login_succeeded(state, username, &mut effects);
        }
        DesktopAction::LoginFailed { error } => session::login_failed(state, &error),
        DesktopAction::SubmitRegistration => session::submit_registration(state, &mut effects),
        DesktopAction::RegistrationSucceeded => session::registration_succeeded(state),
        DesktopAction::RegistrationFailed { error } => {
            session::registration_failed(state, &error);
        }
        DesktopAction::RevealDesktop { generation } => {
            session::reveal_desktop(state, generation)
        }
        DesktopAction::Logout => session::logout(state, interaction),
        DesktopAction::SwitchUser => session::switch_user(state, interaction, &mut effects),
        DesktopAction::ToggleAppleMenu => {
            state.apple_menu_open = !state.apple_menu_open;
        }
        DesktopAction::CloseAppleMenu => {
            state.apple_menu_open = false;
        }
        DesktopAction::MenuAction(action) => {
            state.apple_menu_open = false;
            state.status_text = action.status_text().to_string();
            if let Some(notice) = action.notice() {
                effects.push(RuntimeEffect::ShowNotice(notice.to_string()));
            }
            if action == MenuAction::Logout {
                session::logout(state, interaction);
            }
        }
        DesktopAction::SetStatus(text) => {
            state.status_text = text;
        }
        DesktopAction::ShowNotice { status, notice } => {
            if let Some(status) = status {
                state.status_text = status;
            }
            effects.push(RuntimeEffect::ShowNotice(notice));
        }
        DesktopAction::ApplyWallpaper(wallpaper) => {
            appearance::apply_wallpaper(state, wallpaper, &mut effects);
        }
        DesktopAction::SelectWallpaper { wallpaper_id } => {
            appearance::select_wallpaper(state, &wallpaper_id, &mut effects);
        }
        DesktopAction::ApplyCustomWallpaper(wallpaper) => {
            appearance::apply_custom_wallpaper(state, wallpaper, &mut effects);
        }
        DesktopAction::SetDynamicWallpaper { enabled } => {
            appearance::set_dynamic_wallpaper(state, enabled, &mut effects);
        }
        DesktopAction::AdvanceDynamicWallpaper => {
            appearance::advance_dynamic_wallpaper(state, &mut effects);
        }
        DesktopAction::CycleLoginWallpaper => {
            appearance::cycle_login_wallpaper(state, &mut effects);
        }
        DesktopAction::SyncWallpapers => appearance::sync_wallpapers(state, &mut effects),
        DesktopAction::EndWallpaperTransition => {
            state.wallpaper_transitioning = false;
        }
        DesktopAction::UsersLoaded { ticket, users } => {
            state.users.accept(ticket, users);
        }
        DesktopAction::HistoryLoaded { ticket, history } => {
            state.history.accept(ticket, history);
        }
        DesktopAction::ClearLocalData {
            users_floor,
            history_floor,
        } => {
            state.users.clear_through(users_floor);
            state.history.clear_through(history_floor);
            state.terminal_history.clear();
        }
        DesktopAction::SaveSettings(settings) => {
            state.settings = settings;
        }
        DesktopAction::PushTerminalHistory(command) => {
            let command = command.trim();
            if !command.is_empty() {
                state.terminal_history.push(command.to_string());
                let overflow = state
                    .terminal_history
                    .len()
                    .saturating_sub(TERMINAL_HISTORY_LIMIT);
                state.terminal_history.drain(..overflow);
            }
        }
        DesktopAction::HandleAppCommand(command) => {
            return reduce_desktop(state, interaction, command.into());
        }
    }
    Ok(effects)
}

fn find_window_mut(
    state: &mut DesktopState,
    app_id: AppId,
) -> Result<&mut WindowRecord, ReducerError> {
    state
        .windows
        .iter_mut()
        .find(|w| w.app_id == app_id)
        .ok_or(ReducerError::WindowNotFound(app_id))
}

fn restore_window(
    state: &mut DesktopState,
    app_id: AppId,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), ReducerError> {
    let reduced_motion = state.reduced_motion;
    let window = find_window_mut(state, app_id)?;
    if !window.minimized || window.is_animating() {
        return Ok(());
    }
    window.minimized = false;
    if !reduced_motion {
        window.animation = Some(WindowAnimation::Restoring);
        effects.push(RuntimeEffect::PlayWindowAnimation {
            app_id,
            animation: WindowAnimation::Restoring,
            rect: window.rect,
        });
    }
    bring_to_front(state, app_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::FetchSequencer;
    use platform_host::HistoryAction;
    use pretty_assertions::assert_eq;

    use super::*;

    fn reduce(state: &mut DesktopState, action: DesktopAction) -> Vec<RuntimeEffect> {
        let mut interaction = InteractionState::default();
        reduce_desktop(state, &mut interaction, action).expect("reduce")
    }

    fn open(state: &mut DesktopState, app_id: AppId) {
        reduce(state, DesktopAction::OpenApp { app_id });
    }

    fn finish(state: &mut DesktopState, app_id: AppId, animation: WindowAnimation) {
        reduce(
            state,
            DesktopAction::WindowAnimationFinished {
                app_id,
                animation,
                outcome: AnimationOutcome::Finished,
            },
        );
    }

    #[test]
    fn open_cascades_new_windows_and_stacks_them() {
        let mut state = DesktopState::default();
        open(&mut state, AppId::UserManager);
        open(&mut state, AppId::Terminal);

        assert_eq!(state.windows.len(), 2);
        assert_eq!((state.windows[0].rect.x, state.windows[0].rect.y), (100, 100));
        assert_eq!((state.windows[1].rect.x, state.windows[1].rect.y), (130, 130));
        assert_eq!(state.windows[0].z_index, 101);
        assert_eq!(state.windows[1].z_index, 102);
        assert_eq!(state.front_window(), Some(AppId::Terminal));
    }

    #[test]
    fn reopening_any_open_app_raises_without_duplicating() {
        for app_id in AppId::ALL {
            let mut state = DesktopState::default();
            open(&mut state, app_id);
            open(&mut state, AppId::ExportData);
            open(&mut state, app_id);

            let count = state.windows.iter().filter(|w| w.app_id == app_id).count();
            assert_eq!(count, 1, "{app_id:?}");
            assert_eq!(state.front_window(), Some(app_id));
        }
    }

    #[test]
    fn minimize_then_restore_returns_to_prior_rect() {
        let mut state = DesktopState::default();
        open(&mut state, AppId::HistoryViewer);
        let before = state.windows[0].rect;

        let effects = reduce(
            &mut state,
            DesktopAction::MinimizeWindow {
                app_id: AppId::HistoryViewer,
            },
        );
        assert_eq!(
            effects,
            vec![RuntimeEffect::PlayWindowAnimation {
                app_id: AppId::HistoryViewer,
                animation: WindowAnimation::Minimizing,
                rect: before,
            }]
        );
        finish(&mut state, AppId::HistoryViewer, WindowAnimation::Minimizing);
        assert!(state.windows[0].minimized);

        reduce(
            &mut state,
            DesktopAction::RestoreWindow {
                app_id: AppId::HistoryViewer,
            },
        );
        finish(&mut state, AppId::HistoryViewer, WindowAnimation::Restoring);

        let window = &state.windows[0];
        assert!(!window.minimized);
        assert_eq!(window.animation, None);
        assert_eq!(window.rect, before);
    }

    #[test]
    fn animating_window_ignores_further_requests() {
        let mut state = DesktopState::default();
        open(&mut state, AppId::Terminal);
        reduce(
            &mut state,
            DesktopAction::MinimizeWindow {
                app_id: AppId::Terminal,
            },
        );
        let again = reduce(
            &mut state,
            DesktopAction::MinimizeWindow {
                app_id: AppId::Terminal,
            },
        );
        assert!(again.is_empty());
        assert_eq!(
            state.windows[0].animation,
            Some(WindowAnimation::Minimizing)
        );
    }

    #[test]
    fn cancelled_minimize_leaves_window_visible() {
        let mut state = DesktopState::default();
        open(&mut state, AppId::Terminal);
        reduce(
            &mut state,
            DesktopAction::MinimizeWindow {
                app_id: AppId::Terminal,
            },
        );
        reduce(
            &mut state,
            DesktopAction::WindowAnimationFinished {
                app_id: AppId::Terminal,
                animation: WindowAnimation::Minimizing,
                outcome: AnimationOutcome::Cancelled,
            },
        );
        assert!(!state.windows[0].minimized);
        assert!(!state.windows[0].is_animating());
    }

    #[test]
    fn reduced_motion_skips_animation() {
        let mut state = DesktopState::default();
        reduce(&mut state, DesktopAction::SetReducedMotion { enabled: true });
        open(&mut state, AppId::ReportGenerator);

        let effects = reduce(
            &mut state,
            DesktopAction::MinimizeWindow {
                app_id: AppId::ReportGenerator,
            },
        );
        assert!(effects.is_empty());
        assert!(state.windows[0].minimized);

        open(&mut state, AppId::ReportGenerator);
        assert!(!state.windows[0].minimized);
        assert_eq!(state.windows.len(), 1);
    }

    #[test]
    fn late_animation_completion_for_closed_window_is_ignored() {
        let mut state = DesktopState::default();
        open(&mut state, AppId::Terminal);
        reduce(
            &mut state,
            DesktopAction::MinimizeWindow {
                app_id: AppId::Terminal,
            },
        );
        reduce(
            &mut state,
            DesktopAction::CloseApp {
                app_id: AppId::Terminal,
            },
        );
        finish(&mut state, AppId::Terminal, WindowAnimation::Minimizing);
        assert!(state.windows.is_empty());
    }

    #[test]
    fn closing_missing_window_reports_error() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let err = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseApp {
                app_id: AppId::ExportData,
            },
        )
        .expect_err("missing window");
        assert_eq!(err, ReducerError::WindowNotFound(AppId::ExportData));
    }

    #[test]
    fn drag_moves_window_and_respects_menu_bar_and_maximize() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, AppId::Terminal);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                app_id: AppId::Terminal,
                pointer: PointerPosition { x: 200, y: 110 },
            },
        )
        .expect("begin");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 260, y: 0 },
            },
        )
        .expect("move");
        assert_eq!((state.windows[0].rect.x, state.windows[0].rect.y), (160, 28));
        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndMove).expect("end");
        assert_eq!(interaction.dragging, None);

        reduce(
            &mut state,
            DesktopAction::ToggleMaximize {
                app_id: AppId::Terminal,
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                app_id: AppId::Terminal,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        )
        .expect("begin maximized");
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn stale_user_snapshot_is_dropped() {
        let mut state = DesktopState::default();
        let sequence = FetchSequencer::default();
        let older = sequence.issue();
        let newer = sequence.issue();
        let user = |name: &str| UserRecord {
            username: name.to_string(),
            salt: None,
            hashed_password: "x".repeat(64),
            registered_at: "2026-01-01T09:00:00".to_string(),
        };

        reduce(
            &mut state,
            DesktopAction::UsersLoaded {
                ticket: newer,
                users: vec![user("alice")],
            },
        );
        reduce(
            &mut state,
            DesktopAction::UsersLoaded {
                ticket: older,
                users: vec![user("alice"), user("bob")],
            },
        );
        assert_eq!(state.users.items.len(), 1);
    }

    #[test]
    fn clear_local_data_wipes_caches() {
        let mut state = DesktopState::default();
        let sequence = FetchSequencer::default();
        reduce(
            &mut state,
            DesktopAction::HistoryLoaded {
                ticket: sequence.issue(),
                history: vec![HistoryEntry {
                    timestamp: "2026-01-01T09:00:00".to_string(),
                    username: "alice".to_string(),
                    action: HistoryAction::Login,
                }],
            },
        );
        reduce(&mut state, DesktopAction::PushTerminalHistory("help".into()));
        reduce(
            &mut state,
            DesktopAction::ClearLocalData {
                users_floor: FetchSequencer::default().issue(),
                history_floor: sequence.issue(),
            },
        );
        assert!(state.history.items.is_empty());
        assert!(state.terminal_history.is_empty());
    }

    #[test]
    fn response_in_flight_during_clear_does_not_refill_cache() {
        let mut state = DesktopState::default();
        let users = FetchSequencer::default();
        let history = FetchSequencer::default();
        let in_flight = users.issue();

        reduce(
            &mut state,
            DesktopAction::HandleAppCommand(AppCommand::ClearLocalData {
                users_floor: users.issue(),
                history_floor: history.issue(),
            }),
        );
        reduce(&mut state, DesktopAction::Logout);
        reduce(
            &mut state,
            DesktopAction::UsersLoaded {
                ticket: in_flight,
                users: vec![UserRecord {
                    username: "bob".to_string(),
                    salt: None,
                    hashed_password: "x".repeat(64),
                    registered_at: "2026-01-01T09:00:00".to_string(),
                }],
            },
        );
        assert!(state.users.items.is_empty());
    }

    #[test]
    fn terminal_history_is_capped() {
        let mut state = DesktopState::default();
        for index in 0..(TERMINAL_HISTORY_LIMIT + 5) {
            reduce(
                &mut state,
                DesktopAction::PushTerminalHistory(format!("cmd {index}")),
            );
        }
        reduce(&mut state, DesktopAction::PushTerminalHistory("   ".into()));
        assert_eq!(state.terminal_history.len(), TERMINAL_HISTORY_LIMIT);
        assert_eq!(state.terminal_history[0], "cmd 5");
    }

    #[test]
    fn apple_menu_demo_entries_report_and_notify() {
        let mut state = DesktopState::default();
        reduce(&mut state, DesktopAction::ToggleAppleMenu);
        let effects = reduce(&mut state, DesktopAction::MenuAction(MenuAction::Restart));
        assert!(!state.apple_menu_open);
        assert_eq!(state.status_text, "Restart is unavailable in demo mode");
        assert_eq!(
            effects,
            vec![RuntimeEffect::ShowNotice(
                "Restart is not available in this demo.".to_string()
            )]
        );
    }

    #[test]
    fn app_commands_route_through_reducer() {
        let mut state = DesktopState::default();
        reduce(
            &mut state,
            DesktopAction::HandleAppCommand(AppCommand::OpenApp(AppId::UserManager)),
        );
        reduce(
            &mut state,
            DesktopAction::HandleAppCommand(AppCommand::SetStatus("Loading users".into())),
        );
        assert!(state.is_open(AppId::UserManager));
        assert_eq!(state.status_text, "Loading users");
    }
}
