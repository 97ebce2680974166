//! Terminal command parsing and output rendering over the cached collections.

use desktop_app_contract::{
    display::{format_date, format_timestamp},
    AppId,
};
use platform_host::{HistoryEntry, UserRecord};

/// Prompt shown before every command line.
pub const PROMPT: &str = "macOS-pwdmgr:~ user$";
pub const CLEARED_TEXT: &str = "Terminal cleared";

const HELP_TEXT: &str = "Available commands:
  load users    - Display all registered users
  load history  - Show login/activity history
  manage users  - Open user management
  export data   - Export data to file
  adv settings  - Open advanced settings
  clear         - Clear terminal screen
  help          - Show this help message";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalCommand {
    Help,
    LoadUsers,
    LoadHistory,
    ManageUsers,
    ExportData,
    AdvancedSettings,
    Clear,
    Unknown(String),
}

impl TerminalCommand {
    /// Matches case-insensitively after trimming; `Unknown` keeps the raw input.
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "help" => Self::Help,
            "load users" => Self::LoadUsers,
            "load history" => Self::LoadHistory,
            "manage users" => Self::ManageUsers,
            "export data" => Self::ExportData,
            "adv settings" => Self::AdvancedSettings,
            "clear" => Self::Clear,
            _ => Self::Unknown(input.to_string()),
        }
    }

    /// App opened as a side effect of the command.
    pub fn opens(&self) -> Option<AppId> {
        match self {
            Self::ManageUsers => Some(AppId::UserManager),
            Self::ExportData => Some(AppId::ExportData),
            Self::AdvancedSettings => Some(AppId::AdvancedSettings),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalOutput {
    Text(String),
    /// Transcript is replaced by a single "cleared" line.
    Cleared,
}

/// Renders `command` against the cached collections.
pub fn execute(
    command: &TerminalCommand,
    users: &[UserRecord],
    history: &[HistoryEntry],
) -> TerminalOutput {
    let text = match command {
        TerminalCommand::Help => HELP_TEXT.to_string(),
        TerminalCommand::LoadUsers => {
            if users.is_empty() {
                "No registered users found.".to_string()
            } else {
                users
                    .iter()
                    .map(|user| {
                        format!(
                            "{} (registered: {})",
                            user.username,
                            format_date(&user.registered_at)
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        TerminalCommand::LoadHistory => {
            if history.is_empty() {
                "No activity recorded yet.".to_string()
            } else {
                history
                    .iter()
                    .map(|entry| {
                        format!(
                            "{} - {} {}",
                            format_timestamp(&entry.timestamp),
                            entry.username,
                            entry.action.as_str()
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        TerminalCommand::ManageUsers => "Opening User Manager...".to_string(),
        TerminalCommand::ExportData => "Opening Export Data...".to_string(),
        TerminalCommand::AdvancedSettings => "Opening Advanced Settings...".to_string(),
        TerminalCommand::Clear => return TerminalOutput::Cleared,
        TerminalCommand::Unknown(raw) => {
            format!("Command not found: {raw}. Type 'help' for available commands.")
        }
    };
    TerminalOutput::Text(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform_host::HistoryAction;
    use pretty_assertions::assert_eq;

    fn user(name: &str) -> UserRecord {
        UserRecord {
            username: name.to_string(),
            salt: None,
            hashed_password: "ffff".to_string(),
            registered_at: "2026-03-04T09:15:00".to_string(),
        }
    }

    #[test]
    fn parsing_ignores_case_and_padding() {
        assert_eq!(TerminalCommand::parse("  LOAD Users "), TerminalCommand::LoadUsers);
        assert_eq!(TerminalCommand::parse("Adv Settings"), TerminalCommand::AdvancedSettings);
        assert_eq!(
            TerminalCommand::parse("ls -la"),
            TerminalCommand::Unknown("ls -la".to_string())
        );
    }

    #[test]
    fn unknown_command_echoes_input() {
        assert_eq!(
            execute(&TerminalCommand::parse("rm -rf"), &[], &[]),
            TerminalOutput::Text(
                "Command not found: rm -rf. Type 'help' for available commands.".to_string()
            )
        );
    }

    #[test]
    fn empty_collections_have_dedicated_text() {
        assert_eq!(
            execute(&TerminalCommand::LoadUsers, &[], &[]),
            TerminalOutput::Text("No registered users found.".to_string())
        );
        assert_eq!(
            execute(&TerminalCommand::LoadHistory, &[], &[]),
            TerminalOutput::Text("No activity recorded yet.".to_string())
        );
    }

    #[test]
    fn load_users_lists_one_line_per_user() {
        let output = execute(&TerminalCommand::LoadUsers, &[user("alice"), user("bob")], &[]);
        assert_eq!(
            output,
            TerminalOutput::Text(
                "alice (registered: 03/04/2026)\nbob (registered: 03/04/2026)".to_string()
            )
        );
    }

    #[test]
    fn load_history_formats_timestamp_user_and_action() {
        let history = vec![HistoryEntry {
            timestamp: "2026-03-04T21:05:09".to_string(),
            username: "alice".to_string(),
            action: HistoryAction::Logout,
        }];
        assert_eq!(
            execute(&TerminalCommand::LoadHistory, &[], &history),
            TerminalOutput::Text("03/04/2026, 09:05:09 PM - alice logout".to_string())
        );
    }

    #[test]
    fn navigation_commands_open_panels() {
        assert_eq!(
            TerminalCommand::parse("manage users").opens(),
            Some(AppId::UserManager)
        );
        assert_eq!(TerminalCommand::parse("export data").opens(), Some(AppId::ExportData));
        assert_eq!(TerminalCommand::Clear.opens(), None);
        assert_eq!(execute(&TerminalCommand::Clear, &[], &[]), TerminalOutput::Cleared);
        assert!(matches!(
            execute(&TerminalCommand::Help, &[], &[]),
            TerminalOutput::Text(text) if text.starts_with("Available commands:")
        ));
    }
}
