//! Menu bar, Apple menu, dock, and clock behavior that does not depend on the DOM.

use chrono::{DateTime, TimeZone};

/// Clock refresh period.
pub const CLOCK_TICK_MS: u64 = 1_000;
/// Distance over which dock magnification falls off.
pub const DOCK_MAGNIFICATION_RADIUS_PX: f64 = 150.0;
/// Scale of an icon directly under the pointer.
pub const DOCK_MAX_SCALE: f64 = 1.8;

/// Notice shown when Trash is clicked.
pub const TRASH_NOTICE: &str = "Trash is empty";
/// Status shown when the login-screen power button is clicked.
pub const LOGIN_OPTIONS_STATUS: &str = "Power controls are unavailable in demo mode";
/// Dialog shown when the login-screen power button is clicked.
pub const LOGIN_OPTIONS_NOTICE: &str =
    "Simulated Shutdown Options:\nSleep, Restart, Shut Down are not available in demo mode.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Apple menu entries.
pub enum MenuAction {
    /// About this desktop.
    About,
    /// Sleep (unavailable).
    Sleep,
    /// Restart (unavailable).
    Restart,
    /// Shut down (unavailable).
    ShutDown,
    /// End the session.
    Logout,
}

impl MenuAction {
    /// Entries in menu order.
    pub const ALL: [MenuAction; 5] = [
        MenuAction::About,
        MenuAction::Sleep,
        MenuAction::Restart,
        MenuAction::ShutDown,
        MenuAction::Logout,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::About => "About This Mac",
            Self::Sleep => "Sleep",
            Self::Restart => "Restart…",
            Self::ShutDown => "Shut Down…",
            Self::Logout => "Log Out…",
        }
    }

    pub const fn dom_id(self) -> &'static str {
        match self {
            Self::About => "apple-menu-about",
            Self::Sleep => "apple-menu-sleep",
            Self::Restart => "apple-menu-restart",
            Self::ShutDown => "apple-menu-shutdown",
            Self::Logout => "apple-menu-logout",
        }
    }

    /// Whether a separator precedes this entry.
    pub const fn starts_group(self) -> bool {
        matches!(self, Self::Sleep | Self::Logout)
    }

    /// Menu bar status text set when the entry is chosen.
    pub const fn status_text(self) -> &'static str {
        match self {
            Self::About => "About panel opened",
            Self::Sleep => "Sleep is unavailable in demo mode",
            Self::Restart => "Restart is unavailable in demo mode",
            Self::ShutDown => "Shut Down is unavailable in demo mode",
            Self::Logout => "Logging out…",
        }
    }

    /// Dialog text shown for the entry, if any.
    pub const fn notice(self) -> Option<&'static str> {
        match self {
            Self::About => Some("macOS Password Manager\nVersion 1.0 · mac-inspired interface"),
            Self::Sleep => Some("Sleep mode is not available in this demo."),
            Self::Restart => Some("Restart is not available in this demo."),
            Self::ShutDown => Some("Shut Down is not available in this demo."),
            Self::Logout => None,
        }
    }
}

/// Dock icon scale for a pointer `distance` px from the icon centre.
pub fn dock_magnification(distance: f64) -> f64 {
    (DOCK_MAX_SCALE - distance.abs() / DOCK_MAGNIFICATION_RADIUS_PX).max(1.0)
}

/// Menu bar clock text.
pub fn clock_text<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn magnification_peaks_under_pointer_and_floors_at_one() {
        assert_eq!(dock_magnification(0.0), 1.8);
        assert!((dock_magnification(60.0) - 1.4).abs() < 1e-9);
        assert!((dock_magnification(-60.0) - 1.4).abs() < 1e-9);
        assert_eq!(dock_magnification(500.0), 1.0);
    }

    #[test]
    fn demo_menu_entries_pair_status_with_notice() {
        assert_eq!(
            MenuAction::Sleep.status_text(),
            "Sleep is unavailable in demo mode"
        );
        assert_eq!(
            MenuAction::ShutDown.notice(),
            Some("Shut Down is not available in this demo.")
        );
        assert_eq!(MenuAction::Logout.notice(), None);
    }

    #[test]
    fn clock_uses_24_hour_minutes() {
        let now = Utc
            .with_ymd_and_hms(2026, 3, 4, 7, 5, 59)
            .single()
            .expect("valid time");
        assert_eq!(clock_text(&now), "07:05");
    }
}
