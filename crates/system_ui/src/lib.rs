//! Shared UI primitive library for the desktop shell and its panels.
//!
//! The crate owns reusable Leptos primitives and the stable `data-ui-*` DOM contract consumed
//! by the desktop stylesheet. Panels compose these primitives instead of emitting ad hoc
//! control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    Badge, Button, ButtonSize, ButtonVariant, DataTable, InlineMessage, MenuItem, MenuSeparator,
    MenuSurface, Modal, Panel, PlaceholderRow, SelectField, StatusLine, Switch, TerminalLine,
    TerminalSurface, TextField, ToggleRow, Tone,
};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Badge, Button, ButtonSize, ButtonVariant, DataTable, InlineMessage, MenuItem,
        MenuSeparator, MenuSurface, Modal, Panel, PlaceholderRow, SelectField, StatusLine, Switch,
        TerminalLine, TerminalSurface, TextField, ToggleRow, Tone,
    };
}
