//! Local-only security preferences shared by the shell and panels.

use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Security preferences edited in Advanced Settings. Never sent to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySettings {
    /// Minimum accepted password length for registration and add-user.
    pub min_password_length: usize,
    /// Displayed session timeout in minutes.
    #[serde(rename = "sessionTimeout")]
    pub session_timeout_minutes: u32,
    /// Whether activity history tracking is reported as enabled.
    pub track_history: bool,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            min_password_length: 8,
            session_timeout_minutes: 30,
            track_history: true,
        }
    }
}

impl SecuritySettings {
    /// Parses the Advanced Settings form fields.
    pub fn from_form(
        min_password_length: &str,
        session_timeout_minutes: &str,
        track_history: bool,
    ) -> Result<Self, ValidationError> {
        let min_password_length =
            parse_bounded("Minimum password length", min_password_length, 1, 128)?;
        let session_timeout_minutes =
            parse_bounded("Session timeout", session_timeout_minutes, 1, 1440)?;
        Ok(Self {
            min_password_length: min_password_length as usize,
            session_timeout_minutes,
            track_history,
        })
    }
}

fn parse_bounded(field: &'static str, raw: &str, min: u32, max: u32) -> Result<u32, ValidationError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|value| (min..=max).contains(value))
        .ok_or(ValidationError::OutOfRange { field, min, max })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_shipped_policy() {
        let settings = SecuritySettings::default();
        assert_eq!(settings.min_password_length, 8);
        assert_eq!(settings.session_timeout_minutes, 30);
        assert!(settings.track_history);
    }

    #[test]
    fn form_parsing_rejects_out_of_range_values() {
        assert_eq!(
            SecuritySettings::from_form("12", " 45 ", false),
            Ok(SecuritySettings {
                min_password_length: 12,
                session_timeout_minutes: 45,
                track_history: false,
            })
        );
        assert_eq!(
            SecuritySettings::from_form("0", "30", true),
            Err(ValidationError::OutOfRange {
                field: "Minimum password length",
                min: 1,
                max: 128,
            })
        );
        assert!(SecuritySettings::from_form("8", "soon", true).is_err());
    }

    #[test]
    fn serializes_with_export_field_names() {
        let value = serde_json::to_value(SecuritySettings::default()).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({
                "minPasswordLength": 8,
                "sessionTimeout": 30,
                "trackHistory": true,
            })
        );
    }
}
