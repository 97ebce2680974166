//! Add and delete flows behind the user table.

use desktop_app_contract::{validate_credentials, SecuritySettings, ValidationError};
use platform_host::{ApiError, HostServices};

/// Notice shown instead of deleting the signed-in account.
pub const SELF_DELETE_NOTICE: &str = "Cannot delete currently logged in user";
/// Notice for a delete the backend rejected.
pub const DELETE_FAILED_NOTICE: &str = "Failed to delete user";
/// Notice for a delete that never reached the backend.
pub const CONNECTION_NOTICE: &str = "Failed to connect to server";
const MISSING_FIELDS: &str = "Please enter both username and password";

/// Confirmation text asked before deleting `username`.
pub fn delete_prompt(username: &str) -> String {
    format!("Are you sure you want to delete user \"{username}\"?")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Result of one delete attempt.
pub enum DeleteOutcome {
    /// Target is the signed-in account; nothing was sent.
    BlockedSelf,
    /// The confirmation was declined.
    Cancelled,
    Deleted,
    /// The backend or transport failed; a notice was shown.
    Failed,
}

impl DeleteOutcome {
    /// Whether the table should re-fetch.
    pub const fn changed(self) -> bool {
        matches!(self, Self::Deleted)
    }
}

/// Confirms and deletes `username`, reporting refusals and failures through host notices.
pub async fn delete_account(
    host: &HostServices,
    current_user: Option<&str>,
    username: &str,
) -> DeleteOutcome {
    if current_user == Some(username) {
        host.dialogs.alert(SELF_DELETE_NOTICE).await;
        return DeleteOutcome::BlockedSelf;
    }
    if !host.dialogs.confirm(&delete_prompt(username)).await {
        return DeleteOutcome::Cancelled;
    }
    match host.backend.delete_user(username).await {
        Ok(()) => DeleteOutcome::Deleted,
        Err(err) => {
            let notice = if err.is_server() {
                DELETE_FAILED_NOTICE
            } else {
                CONNECTION_NOTICE
            };
            host.dialogs.alert(notice).await;
            DeleteOutcome::Failed
        }
    }
}

fn validation_message(error: &ValidationError) -> String {
    match error {
        ValidationError::MissingCredentials => MISSING_FIELDS.to_string(),
        other => other.to_string(),
    }
}

fn add_failure_message(error: &ApiError) -> String {
    match error {
        ApiError::Server { message, .. } => format!("Failed to add user: {message}"),
        ApiError::Transport(_) | ApiError::Decode(_) => CONNECTION_NOTICE.to_string(),
    }
}

/// Validates the add-user form and registers the account.
///
/// The error is the inline text for the modal. Validation failures never reach the backend.
pub async fn add_account(
    host: &HostServices,
    settings: &SecuritySettings,
    username: &str,
    password: &str,
) -> Result<(), String> {
    let credentials = validate_credentials(username, password, settings)
        .map_err(|err| validation_message(&err))?;
    host.backend
        .register(&credentials)
        .await
        .map(|_| ())
        .map_err(|err| add_failure_message(&err))
}
