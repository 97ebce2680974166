//! Records exchanged with the backend API and the shared error taxonomy.

use serde::{Deserialize, Serialize};

/// Username/password pair posted to `/login` and `/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account name.
    pub username: String,
    /// Plain-text password; hashing happens server side.
    pub password: String,
}

impl Credentials {
    /// Builds credentials with a trimmed username.
    pub fn new(username: impl AsRef<str>, password: impl Into<String>) -> Self {
        Self {
            username: username.as_ref().trim().to_string(),
            password: password.into(),
        }
    }
}

/// Successful `/login` or `/register` acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthAck {
    /// Account the backend accepted; empty when the backend omits it.
    #[serde(default)]
    pub username: String,
    /// Optional server message (`"Login successful"`).
    #[serde(default)]
    pub message: Option<String>,
}

impl AuthAck {
    /// Reads a 2xx `/register` body. Any body counts as success; unknown shapes decode empty.
    pub fn from_register_body(body: &str, credentials: &Credentials) -> Self {
        let ack = serde_json::from_str::<Self>(body).unwrap_or_default();
        if ack.username.trim().is_empty() {
            Self {
                username: credentials.username.clone(),
                ..ack
            }
        } else {
            ack
        }
    }
}

/// Registered account as listed by `GET /users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique account name.
    pub username: String,
    /// Per-user salt when the backend exposes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salt: Option<String>,
    /// Salted password hash.
    #[serde(default)]
    pub hashed_password: String,
    /// Registration timestamp as sent by the backend.
    #[serde(default)]
    pub registered_at: String,
}

impl UserRecord {
    /// Returns the hash shortened for table display (`first 20 chars...`).
    pub fn hash_preview(&self) -> String {
        let prefix: String = self.hashed_password.chars().take(20).collect();
        format!("{prefix}...")
    }
}

/// Kind of account activity recorded by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HistoryAction {
    /// Successful sign-in.
    Login,
    /// Sign-out.
    Logout,
    /// Account creation.
    Register,
    /// Any action token this client does not know.
    Other(String),
}

impl HistoryAction {
    /// Returns the wire token for this action.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Login => "login",
            Self::Logout => "logout",
            Self::Register => "register",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for HistoryAction {
    fn from(value: String) -> Self {
        match value.as_str() {
            "login" => Self::Login,
            "logout" => Self::Logout,
            "register" => Self::Register,
            _ => Self::Other(value),
        }
    }
}

impl From<HistoryAction> for String {
    fn from(value: HistoryAction) -> Self {
        value.as_str().to_string()
    }
}

/// One append-only activity row from `GET /history`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Event timestamp as sent by the backend.
    pub timestamp: String,
    /// Account the event belongs to.
    pub username: String,
    /// Recorded action.
    pub action: HistoryAction,
}

/// `GET /users` response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersEnvelope {
    /// Listed accounts.
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

/// `GET /history` response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEnvelope {
    /// Listed activity rows, newest first.
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

/// Server-rendered CSV exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CsvExport {
    /// `GET /export/users`.
    Users,
    /// `GET /export/history`.
    History,
}

impl CsvExport {
    /// Endpoint path relative to the API base URL.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Users => "/export/users",
            Self::History => "/export/history",
        }
    }

    /// Fixed download file name.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Users => "users.csv",
            Self::History => "history.csv",
        }
    }
}

/// Failure of one backend request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Server-provided `error` text, or a generic status description.
        message: String,
    },
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// A 2xx response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Maps the error to user-facing text.
    ///
    /// Server errors are surfaced verbatim; transport and decode failures collapse to
    /// `connection_message`.
    pub fn user_message(&self, connection_message: &str) -> String {
        match self {
            Self::Server { message, .. } => message.clone(),
            Self::Transport(_) | Self::Decode(_) => connection_message.to_string(),
        }
    }

    /// Returns whether the backend itself rejected the request.
    pub const fn is_server(&self) -> bool {
        matches!(self, Self::Server { .. })
    }
}

/// Builds an [`ApiError::Server`] from a non-2xx status and its raw body.
///
/// JSON bodies contribute their `error` (or `message`) field; anything else falls back to
/// `HTTP error: <status>`.
pub fn server_error_from_body(status: u16, body: &str) -> ApiError {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    let message = parsed
        .as_ref()
        .and_then(|json| {
            json.get("error")
                .or_else(|| json.get("message"))
                .and_then(|value| value.as_str())
        })
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP error: {status}"));
    ApiError::Server { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn history_action_keeps_unknown_tokens() {
        let entries: HistoryEnvelope = serde_json::from_str(
            r#"{"history":[
                {"timestamp":"2026-03-01T10:00:00","username":"alice","action":"login"},
                {"timestamp":"2026-03-01T10:05:00","username":"alice","action":"password_reset"}
            ]}"#,
        )
        .expect("decode");

        assert_eq!(entries.history[0].action, HistoryAction::Login);
        assert_eq!(
            entries.history[1].action,
            HistoryAction::Other("password_reset".to_string())
        );
        assert_eq!(
            serde_json::to_value(&entries.history[1].action).expect("encode"),
            serde_json::json!("password_reset")
        );
    }

    #[test]
    fn users_envelope_tolerates_missing_optional_fields() {
        let envelope: UsersEnvelope =
            serde_json::from_str(r#"{"users":[{"username":"bob"}]}"#).expect("decode");
        assert_eq!(envelope.users[0].salt, None);
        assert_eq!(envelope.users[0].hashed_password, "");
    }

    #[test]
    fn hash_preview_truncates_to_twenty_chars() {
        let user = UserRecord {
            username: "alice".to_string(),
            salt: None,
            hashed_password: "0123456789abcdef0123456789abcdef".to_string(),
            registered_at: String::new(),
        };
        assert_eq!(user.hash_preview(), "0123456789abcdef0123...");
    }

    #[test]
    fn server_error_prefers_error_field() {
        assert_eq!(
            server_error_from_body(401, r#"{"error":"Invalid credentials"}"#),
            ApiError::Server {
                status: 401,
                message: "Invalid credentials".to_string()
            }
        );
        assert_eq!(
            server_error_from_body(502, "<html>bad gateway</html>").to_string(),
            "HTTP error: 502"
        );
    }

    #[test]
    fn user_message_follows_error_taxonomy() {
        let server = ApiError::Server {
            status: 400,
            message: "Username already exists".to_string(),
        };
        let transport = ApiError::Transport("fetch rejected".to_string());

        assert_eq!(server.user_message("Connection error"), "Username already exists");
        assert_eq!(transport.user_message("Connection error"), "Connection error");
        assert!(!ApiError::Decode("eof".to_string()).is_server());
    }

    #[test]
    fn register_succeeds_without_username_in_body() {
        let credentials = Credentials::new("carol", "longenough");

        let bare = AuthAck::from_register_body("", &credentials);
        assert_eq!(bare.username, "carol");
        assert_eq!(bare.message, None);

        let message_only =
            AuthAck::from_register_body(r#"{"message":"User registered"}"#, &credentials);
        assert_eq!(message_only.username, "carol");
        assert_eq!(message_only.message.as_deref(), Some("User registered"));
    }

    #[test]
    fn credentials_trim_username_only() {
        let credentials = Credentials::new("  alice ", " secret ");
        assert_eq!(credentials.username, "alice");
        assert_eq!(credentials.password, " secret ");
    }
}
