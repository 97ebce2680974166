//! Client-side validation that runs before any request is issued.

use platform_host::Credentials;

use crate::settings::SecuritySettings;

/// Input rejected before reaching the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Username or password left empty.
    #[error("Please enter username and password")]
    MissingCredentials,
    /// Password shorter than the configured minimum.
    #[error("Password must be at least {min} characters")]
    PasswordTooShort {
        /// Configured minimum length.
        min: usize,
    },
    /// Numeric setting outside its accepted range.
    #[error("{field} must be a whole number between {min} and {max}")]
    OutOfRange {
        /// Field label.
        field: &'static str,
        /// Lowest accepted value.
        min: u32,
        /// Highest accepted value.
        max: u32,
    },
}

/// Validates a username/password pair against the active policy.
pub fn validate_credentials(
    username: &str,
    password: &str,
    settings: &SecuritySettings,
) -> Result<Credentials, ValidationError> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    if password.chars().count() < settings.min_password_length {
        return Err(ValidationError::PasswordTooShort {
            min: settings.min_password_length,
        });
    }
    Ok(Credentials::new(username, password))
}

/// Validates login input, which only requires both fields to be present.
pub fn validate_login(username: &str, password: &str) -> Result<Credentials, ValidationError> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(Credentials::new(username, password))
}
