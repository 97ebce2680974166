//! Desktop state owned by the runtime provider and mutated only by the reducer.

use desktop_app_contract::{AppId, SecuritySettings, SequencedCache};
use platform_host::{HistoryEntry, UserRecord};
use serde::{Deserialize, Serialize};
use system_ui::Tone;

use crate::wallpaper::WallpaperRegistry;

/// Height of the top menu bar; windows cannot be dragged above it.
pub const MENU_BAR_HEIGHT_PX: i32 = 28;
/// First stacking value handed out by the window manager.
pub const INITIAL_Z_INDEX: u32 = 100;
/// Maximum remembered terminal commands.
pub const TERMINAL_HISTORY_LIMIT: usize = 100;
/// Menu bar status text when nothing else is happening.
pub const READY_STATUS: &str = "Ready";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Direction of an in-flight dock animation.
pub enum WindowAnimation {
    /// Shrinking toward the dock icon.
    Minimizing,
    /// Growing back out of the dock icon.
    Restoring,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub app_id: AppId,
    pub rect: WindowRect,
    pub z_index: u32,
    pub minimized: bool,
    pub maximized: bool,
    pub animation: Option<WindowAnimation>,
}

impl WindowRecord {
    pub fn title(&self) -> &'static str {
        self.app_id.title()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Authentication lifecycle.
pub enum AuthPhase {
    #[default]
    /// Login screen, waiting for input.
    Anonymous,
    /// A login or registration request is in flight.
    Pending,
    /// Backend accepted the credentials.
    Authenticated,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// Name shown under the login avatar.
    pub fn display_name(&self) -> String {
        let trimmed = self.username.trim();
        if trimmed.is_empty() {
            "Guest".to_string()
        } else {
            trimmed.to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Inline message under the login form.
pub struct LoginMessage {
    pub tone: Tone,
    pub text: String,
}

impl LoginMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Danger,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub phase: AuthPhase,
    pub current_user: Option<String>,
    /// Set once the post-login display delay elapses.
    pub desktop_visible: bool,
    pub form: LoginForm,
    pub message: Option<LoginMessage>,
}

impl SessionState {
    /// Menu bar user label.
    pub fn menu_user_label(&self) -> String {
        self.current_user
            .clone()
            .unwrap_or_else(|| "Guest".to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Authoritative desktop runtime state.
pub struct DesktopState {
    /// Open windows in creation order.
    pub windows: Vec<WindowRecord>,
    pub next_z_index: u32,
    pub session: SessionState,
    /// Bumped on every successful login so a reveal scheduled by an earlier session is ignored.
    pub login_generation: u64,
    pub status_text: String,
    pub apple_menu_open: bool,
    pub wallpaper: WallpaperRegistry,
    /// True for a short period after the background changes.
    pub wallpaper_transitioning: bool,
    pub settings: SecuritySettings,
    pub users: SequencedCache<UserRecord>,
    pub history: SequencedCache<HistoryEntry>,
    pub terminal_history: Vec<String>,
    /// Platform reduced-motion preference; dock animations are skipped when set.
    pub reduced_motion: bool,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            next_z_index: INITIAL_Z_INDEX,
            session: SessionState::default(),
            login_generation: 0,
            status_text: READY_STATUS.to_string(),
            apple_menu_open: false,
            wallpaper: WallpaperRegistry::default(),
            wallpaper_transitioning: false,
            settings: SecuritySettings::default(),
            users: SequencedCache::default(),
            history: SequencedCache::default(),
            terminal_history: Vec::new(),
            reduced_motion: false,
        }
    }
}

impl DesktopState {
    pub fn window(&self, app_id: AppId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.app_id == app_id)
    }

    pub fn is_open(&self, app_id: AppId) -> bool {
        self.window(app_id).is_some()
    }

    /// Topmost visible window.
    pub fn front_window(&self) -> Option<AppId> {
        self.windows
            .iter()
            .filter(|w| !w.minimized)
            .max_by_key(|w| w.z_index)
            .map(|w| w.app_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragSession {
    pub app_id: AppId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Pointer interaction state kept apart from [`DesktopState`].
pub struct InteractionState {
    pub dragging: Option<DragSession>,
}
