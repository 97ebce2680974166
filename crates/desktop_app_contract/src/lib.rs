//! Shared contract types between the desktop window manager runtime and managed apps.
//!
//! Apps never touch desktop state directly. They read it through the signals exposed by
//! [`AppServices`] and change it by sending [`AppCommand`] values back to the runtime, which
//! reduces them like any other desktop action.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod display;
pub mod loading;
pub mod sequencing;
pub mod settings;
pub mod validation;

use leptos::{Callable, Callback, Signal, View};
use platform_host::{ApiError, HistoryEntry, HostServices, UserRecord, Wallpaper};
use serde::{Deserialize, Serialize};

pub use loading::LoadState;
pub use sequencing::{FetchSequencer, FetchTicket, SequencedCache};
pub use settings::SecuritySettings;
pub use validation::{validate_credentials, validate_login, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Panels hosted by the desktop. At most one window exists per app.
pub enum AppId {
    /// Registered account table.
    UserManager,
    /// Command terminal.
    Terminal,
    /// Activity history table.
    HistoryViewer,
    /// Canned text reports.
    ReportGenerator,
    /// CSV and JSON exports.
    ExportData,
    /// Security preferences and data reset.
    AdvancedSettings,
    /// Wallpaper picker.
    WallpaperSettings,
}

impl AppId {
    /// Every app, in dock order.
    pub const ALL: [AppId; 7] = [
        AppId::UserManager,
        AppId::Terminal,
        AppId::HistoryViewer,
        AppId::ReportGenerator,
        AppId::ExportData,
        AppId::AdvancedSettings,
        AppId::WallpaperSettings,
    ];

    /// Stable kebab-case token, also used in DOM ids.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::UserManager => "user-manager",
            Self::Terminal => "terminal",
            Self::HistoryViewer => "history-viewer",
            Self::ReportGenerator => "report-generator",
            Self::ExportData => "export-data",
            Self::AdvancedSettings => "advanced-settings",
            Self::WallpaperSettings => "wallpaper-settings",
        }
    }

    /// Window title.
    pub const fn title(self) -> &'static str {
        match self {
            Self::UserManager => "User Manager",
            Self::Terminal => "Terminal",
            Self::HistoryViewer => "History Viewer",
            Self::ReportGenerator => "Report Generator",
            Self::ExportData => "Export Data",
            Self::AdvancedSettings => "Advanced Settings",
            Self::WallpaperSettings => "Wallpaper Settings",
        }
    }

    /// Parses a [`AppId::slug`] token.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|app| app.slug() == slug)
    }
}

/// DOM id of the window element for `app_id`.
pub fn window_dom_id(app_id: AppId) -> String {
    format!("window-{}", app_id.slug())
}

/// DOM id of the dock icon for `app_id`.
pub fn dock_icon_dom_id(app_id: AppId) -> String {
    format!("dock-icon-{}", app_id.slug())
}

#[derive(Debug, Clone, PartialEq)]
/// App-to-runtime command.
pub enum AppCommand {
    /// Open (or focus/restore) another app's window.
    OpenApp(AppId),
    /// Close an app's window.
    CloseApp(AppId),
    /// Replace the menu bar status text.
    SetStatus(String),
    /// End the session and return to the login screen.
    Logout,
    /// Apply a fetched user list if its ticket is current.
    UsersLoaded {
        /// Ticket taken before the request was issued.
        ticket: FetchTicket,
        /// Fetched snapshot.
        users: Vec<UserRecord>,
    },
    /// Apply a fetched history list if its ticket is current.
    HistoryLoaded {
        /// Ticket taken before the request was issued.
        ticket: FetchTicket,
        /// Fetched snapshot.
        history: Vec<HistoryEntry>,
    },
    /// Wipe cached users and history, refusing responses to requests issued before the wipe.
    ClearLocalData {
        /// Last user ticket issued before the wipe.
        users_floor: FetchTicket,
        /// Last history ticket issued before the wipe.
        history_floor: FetchTicket,
    },
    /// Replace the security preferences.
    SaveSettings(SecuritySettings),
    /// Apply a registry wallpaper chosen by the user; disables dynamic mode.
    SelectWallpaper {
        /// Registry id.
        wallpaper_id: String,
    },
    /// Register and apply a freshly loaded custom wallpaper; disables dynamic mode.
    ApplyCustomWallpaper(Wallpaper),
    /// Enable or disable dynamic wallpaper cycling.
    SetDynamicWallpaper(bool),
    /// Reseed the built-in wallpapers and drop the custom entry.
    SyncWallpapers,
    /// Record a terminal command for Up/Down recall.
    PushTerminalHistory(String),
}

#[derive(Clone, Copy)]
/// Window integration service.
pub struct WindowService {
    sender: Callback<AppCommand>,
}

impl WindowService {
    /// Opens or focuses `app_id`.
    pub fn open(&self, app_id: AppId) {
        self.sender.call(AppCommand::OpenApp(app_id));
    }

    /// Closes `app_id`.
    pub fn close(&self, app_id: AppId) {
        self.sender.call(AppCommand::CloseApp(app_id));
    }
}

#[derive(Clone, Copy)]
/// Authenticated-session service.
pub struct SessionService {
    sender: Callback<AppCommand>,
    /// Signed-in username.
    pub current_user: Signal<Option<String>>,
}

impl SessionService {
    /// Replaces the menu bar status text.
    pub fn set_status(&self, text: impl Into<String>) {
        self.sender.call(AppCommand::SetStatus(text.into()));
    }

    /// Ends the session.
    pub fn logout(&self) {
        self.sender.call(AppCommand::Logout);
    }
}

#[derive(Clone)]
/// Cached backend collections shared by every panel.
pub struct DataService {
    sender: Callback<AppCommand>,
    /// Latest accepted user snapshot.
    pub users: Signal<Vec<UserRecord>>,
    /// Latest accepted history snapshot.
    pub history: Signal<Vec<HistoryEntry>>,
    /// Ticket counter for user fetches.
    pub users_sequence: FetchSequencer,
    /// Ticket counter for history fetches.
    pub history_sequence: FetchSequencer,
}

impl DataService {
    /// Offers a fetched user snapshot to the cache.
    pub fn apply_users(&self, ticket: FetchTicket, users: Vec<UserRecord>) {
        self.sender.call(AppCommand::UsersLoaded { ticket, users });
    }

    /// Offers a fetched history snapshot to the cache.
    pub fn apply_history(&self, ticket: FetchTicket, history: Vec<HistoryEntry>) {
        self.sender
            .call(AppCommand::HistoryLoaded { ticket, history });
    }

    /// Wipes both caches.
    pub fn clear_local(&self) {
        self.sender.call(AppCommand::ClearLocalData {
            users_floor: self.users_sequence.issue(),
            history_floor: self.history_sequence.issue(),
        });
    }
}

#[derive(Clone, Copy)]
/// Security preference service.
pub struct SettingsService {
    sender: Callback<AppCommand>,
    /// Active preferences.
    pub current: Signal<SecuritySettings>,
}

impl SettingsService {
    /// Replaces the active preferences.
    pub fn save(&self, settings: SecuritySettings) {
        self.sender.call(AppCommand::SaveSettings(settings));
    }
}

#[derive(Clone, Copy)]
/// Wallpaper query and selection service.
pub struct WallpaperService {
    sender: Callback<AppCommand>,
    /// Active wallpaper.
    pub current: Signal<Wallpaper>,
    /// Registry entries with the active one first.
    pub ordered: Signal<Vec<Wallpaper>>,
    /// Whether dynamic cycling is on.
    pub dynamic_enabled: Signal<bool>,
}

impl WallpaperService {
    /// Applies a registry wallpaper.
    pub fn select(&self, wallpaper_id: impl Into<String>) {
        self.sender.call(AppCommand::SelectWallpaper {
            wallpaper_id: wallpaper_id.into(),
        });
    }

    /// Registers and applies a custom wallpaper.
    pub fn apply_custom(&self, wallpaper: Wallpaper) {
        self.sender.call(AppCommand::ApplyCustomWallpaper(wallpaper));
    }

    /// Toggles dynamic cycling.
    pub fn set_dynamic(&self, enabled: bool) {
        self.sender.call(AppCommand::SetDynamicWallpaper(enabled));
    }

    /// Restores the built-in registry.
    pub fn sync_defaults(&self) {
        self.sender.call(AppCommand::SyncWallpapers);
    }
}

#[derive(Clone, Copy)]
/// Terminal command recall service.
pub struct TerminalService {
    sender: Callback<AppCommand>,
    /// Previously entered commands, oldest first.
    pub history: Signal<Vec<String>>,
}

impl TerminalService {
    /// Records an entered command.
    pub fn push(&self, command: impl Into<String>) {
        self.sender
            .call(AppCommand::PushTerminalHistory(command.into()));
    }
}

/// Reactive inputs used to build [`AppServices`].
pub struct AppServiceSignals {
    /// Signed-in username.
    pub current_user: Signal<Option<String>>,
    /// Cached users.
    pub users: Signal<Vec<UserRecord>>,
    /// Cached history.
    pub history: Signal<Vec<HistoryEntry>>,
    /// Active preferences.
    pub settings: Signal<SecuritySettings>,
    /// Active wallpaper.
    pub wallpaper: Signal<Wallpaper>,
    /// Registry with the active wallpaper first.
    pub wallpapers: Signal<Vec<Wallpaper>>,
    /// Dynamic cycling flag.
    pub dynamic_wallpaper: Signal<bool>,
    /// Terminal recall list.
    pub terminal_history: Signal<Vec<String>>,
}

#[derive(Clone)]
/// Runtime service bundle handed to every mounted app.
pub struct AppServices {
    /// Window integration service.
    pub window: WindowService,
    /// Session service.
    pub session: SessionService,
    /// Cached backend collections.
    pub data: DataService,
    /// Security preferences.
    pub settings: SettingsService,
    /// Wallpaper service.
    pub wallpaper: WallpaperService,
    /// Terminal recall.
    pub terminal: TerminalService,
    /// Host adapters (backend, dialogs, downloads, files).
    pub host: HostServices,
    sender: Callback<AppCommand>,
}

impl AppServices {
    /// Creates service handles from the runtime command callback.
    pub fn new(
        sender: Callback<AppCommand>,
        signals: AppServiceSignals,
        sequences: (FetchSequencer, FetchSequencer),
        host: HostServices,
    ) -> Self {
        let (users_sequence, history_sequence) = sequences;
        Self {
            window: WindowService { sender },
            session: SessionService {
                sender,
                current_user: signals.current_user,
            },
            data: DataService {
                sender,
                users: signals.users,
                history: signals.history,
                users_sequence,
                history_sequence,
            },
            settings: SettingsService {
                sender,
                current: signals.settings,
            },
            wallpaper: WallpaperService {
                sender,
                current: signals.wallpaper,
                ordered: signals.wallpapers,
                dynamic_enabled: signals.dynamic_wallpaper,
            },
            terminal: TerminalService {
                sender,
                history: signals.terminal_history,
            },
            host,
            sender,
        }
    }

    /// Fetches the user list and offers it to the shared cache under a fresh ticket.
    ///
    /// Returns the fetched snapshot even when a newer request has already superseded it.
    pub async fn refresh_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        let ticket = self.data.users_sequence.issue();
        let users = self.host.backend.list_users().await?;
        self.data.apply_users(ticket, users.clone());
        Ok(users)
    }

    /// Fetches the history list and offers it to the shared cache under a fresh ticket.
    pub async fn refresh_history(&self) -> Result<Vec<HistoryEntry>, ApiError> {
        let ticket = self.data.history_sequence.issue();
        let history = self.host.backend.list_history().await?;
        self.data.apply_history(ticket, history.clone());
        Ok(history)
    }

    /// Low-level transport send for exceptional app/runtime flows.
    pub fn send(&self, command: AppCommand) {
        self.sender.call(command);
    }
}

#[derive(Clone)]
/// Context passed to an app's mount function.
pub struct AppMountContext {
    /// App being mounted.
    pub app_id: AppId,
    /// Runtime service bundle.
    pub services: AppServices,
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mounted app module descriptor used by the runtime app registry.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn slugs_round_trip_for_every_app() {
        for app in AppId::ALL {
            assert_eq!(AppId::from_slug(app.slug()), Some(app));
        }
        assert_eq!(AppId::from_slug("paint"), None);
    }

    #[test]
    fn dom_ids_are_slug_based() {
        assert_eq!(window_dom_id(AppId::ExportData), "window-export-data");
        assert_eq!(dock_icon_dom_id(AppId::Terminal), "dock-icon-terminal");
    }
}
