//! Table load status shared by the list panels.

use platform_host::ApiError;

/// Placeholder shown while a list request is in flight.
pub const LOADING_TEXT: &str = "Loading...";
/// Placeholder shown when the request never produced a usable response.
pub const CONNECTION_ERROR_TEXT: &str = "Connection error";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Status of the most recent list fetch started by one panel.
pub enum LoadState {
    #[default]
    /// Request in flight.
    Loading,
    /// Rows come from the shared cache.
    Ready,
    /// Placeholder text replacing the rows.
    Failed(String),
}

impl LoadState {
    /// Maps a fetch error to its placeholder.
    ///
    /// Server rejections show `server_text`; transport and decode failures show
    /// [`CONNECTION_ERROR_TEXT`].
    pub fn from_error(error: &ApiError, server_text: &str) -> Self {
        if error.is_server() {
            Self::Failed(server_text.to_string())
        } else {
            Self::Failed(CONNECTION_ERROR_TEXT.to_string())
        }
    }

    /// Placeholder row text, or `None` when rows should render.
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            Self::Loading => Some(LOADING_TEXT),
            Self::Ready => None,
            Self::Failed(text) => Some(text),
        }
    }
}
