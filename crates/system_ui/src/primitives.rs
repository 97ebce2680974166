//! Shared control, data display, overlay, and terminal primitives.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

mod controls;
mod data_display;
mod overlays;
mod terminal;

pub use controls::{Button, SelectField, Switch, TextField, ToggleRow};
pub use data_display::{Badge, DataTable, InlineMessage, Panel, PlaceholderRow, StatusLine};
pub use overlays::{MenuItem, MenuSeparator, MenuSurface, Modal};
pub use terminal::{TerminalLine, TerminalSurface};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Standard action button.
    #[default]
    Standard,
    /// Primary emphasized action button.
    Primary,
    /// Quiet/toolbar style button.
    Quiet,
    /// Danger/destructive button.
    Danger,
}

impl ButtonVariant {
    fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Quiet => "quiet",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    #[default]
    Md,
}

impl ButtonSize {
    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Semantic tone for badges and inline messages.
pub enum Tone {
    /// Neutral text.
    #[default]
    Neutral,
    /// Successful outcome.
    Success,
    /// Informational.
    Info,
    /// Needs attention.
    Warning,
    /// Failure.
    Danger,
}

impl Tone {
    /// Stable DOM token, also used as the `status--<tone>` class suffix.
    pub fn token(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "error",
        }
    }
}

fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
