//! Canned plain-text reports over the cached users and history.

use std::fmt::Write;

use desktop_app_contract::{
    display::{format_timestamp, timestamp_sort_key},
    SecuritySettings,
};
use platform_host::{HistoryAction, HistoryEntry, UserRecord};

const RECENT_ACTIVITY_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Canned report selectable in the panel.
pub enum ReportKind {
    Users,
    Activity,
    SecurityAudit,
}

impl ReportKind {
    /// Button order.
    pub const ALL: [ReportKind; 3] = [Self::Users, Self::Activity, Self::SecurityAudit];

    /// Button caption.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Users => "Users Report",
            Self::Activity => "Activity Report",
            Self::SecurityAudit => "Security Audit",
        }
    }

    /// Fixed download name.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Users => "users_report.txt",
            Self::Activity => "activity_report.txt",
            Self::SecurityAudit => "security_report.txt",
        }
    }

    const fn title(self) -> &'static str {
        match self {
            Self::Users => "USERS REPORT",
            Self::Activity => "ACTIVITY REPORT",
            Self::SecurityAudit => "SECURITY AUDIT REPORT",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Rendered report text ready for preview or download.
pub struct Report {
    pub kind: ReportKind,
    pub content: String,
}

/// Inputs shared by every report kind.
#[derive(Debug, Clone, Copy)]
pub struct ReportInputs<'a> {
    pub users: &'a [UserRecord],
    pub history: &'a [HistoryEntry],
    pub settings: &'a SecuritySettings,
    /// Pre-rendered generation time.
    pub generated_at: &'a str,
}

fn newest_first(history: &[HistoryEntry]) -> Vec<&HistoryEntry> {
    let mut entries: Vec<&HistoryEntry> = history.iter().collect();
    entries.sort_by(|a, b| timestamp_sort_key(&b.timestamp).cmp(&timestamp_sort_key(&a.timestamp)));
    entries
}

fn activity_line(entry: &HistoryEntry) -> String {
    format!(
        "{} - {} ({})",
        format_timestamp(&entry.timestamp),
        entry.username,
        entry.action.as_str()
    )
}

fn count(history: &[HistoryEntry], action: &HistoryAction) -> usize {
    history.iter().filter(|entry| &entry.action == action).count()
}

fn enabled(flag: bool) -> &'static str {
    if flag {
        "Enabled"
    } else {
        "Disabled"
    }
}

/// Renders `kind` over the cached collections.
pub fn generate(kind: ReportKind, inputs: ReportInputs<'_>) -> Report {
    let mut out = String::new();
    let _ = writeln!(out, "PASSWORD MANAGER - {}", kind.title());
    let _ = writeln!(out, "Generated: {}", inputs.generated_at);
    out.push('\n');

    match kind {
        ReportKind::Users => {
            let _ = writeln!(out, "Total Users: {}", inputs.users.len());
            out.push('\n');
            out.push_str("USER DETAILS:\n");
            let details: Vec<String> = inputs
                .users
                .iter()
                .map(|user| {
                    format!(
                        "Username: {}\nRegistered: {}\nSalt: {}\nHash: {}\n",
                        user.username,
                        format_timestamp(&user.registered_at),
                        user.salt.as_deref().unwrap_or("-"),
                        user.hashed_password
                    )
                })
                .collect();
            out.push_str(&details.join("\n"));
            out.push('\n');
        }
        ReportKind::Activity => {
            let _ = writeln!(out, "Total Activities: {}", inputs.history.len());
            out.push('\n');
            out.push_str("ACTIVITY LOG:\n");
            for entry in newest_first(inputs.history) {
                out.push_str(&activity_line(entry));
                out.push('\n');
            }
        }
        ReportKind::SecurityAudit => {
            let history = inputs.history;
            out.push_str("SECURITY OVERVIEW:\n");
            let _ = writeln!(out, "Total Users: {}", inputs.users.len());
            let _ = writeln!(
                out,
                "Total Login Attempts: {}",
                count(history, &HistoryAction::Login)
            );
            let _ = writeln!(out, "Total Logouts: {}", count(history, &HistoryAction::Logout));
            let _ = writeln!(
                out,
                "Total Registrations: {}",
                count(history, &HistoryAction::Register)
            );
            out.push('\n');
            out.push_str("PASSWORD POLICY:\n");
            let settings = inputs.settings;
            let _ = writeln!(
                out,
                "Minimum Length: {} characters",
                settings.min_password_length
            );
            let _ = writeln!(
                out,
                "Session Timeout: {} minutes",
                settings.session_timeout_minutes
            );
            let _ = writeln!(out, "History Tracking: {}", enabled(settings.track_history));
            out.push('\n');
            out.push_str("RECENT ACTIVITY:\n");
            for entry in newest_first(history).into_iter().take(RECENT_ACTIVITY_LIMIT) {
                out.push_str(&activity_line(entry));
                out.push('\n');
            }
        }
    }

    Report { kind, content: out }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(minute: u32, username: &str, action: HistoryAction) -> HistoryEntry {
        HistoryEntry {
            timestamp: format!("2026-03-04T10:{minute:02}:00"),
            username: username.to_string(),
            action,
        }
    }

    fn user(name: &str) -> UserRecord {
        UserRecord {
            username: name.to_string(),
            salt: Some(format!("salt-{name}")),
            hashed_password: "abc123".to_string(),
            registered_at: "2026-03-04T09:00:00".to_string(),
        }
    }

    fn inputs<'a>(
        users: &'a [UserRecord],
        history: &'a [HistoryEntry],
        settings: &'a SecuritySettings,
    ) -> ReportInputs<'a> {
        ReportInputs {
            users,
            history,
            settings,
            generated_at: "03/04/2026, 11:00:00 AM",
        }
    }

    #[test]
    fn security_audit_counts_each_action() {
        let history = vec![
            entry(1, "alice", HistoryAction::Register),
            entry(2, "bob", HistoryAction::Register),
            entry(3, "alice", HistoryAction::Login),
            entry(4, "bob", HistoryAction::Login),
            entry(5, "alice", HistoryAction::Logout),
            entry(6, "alice", HistoryAction::Login),
        ];
        let settings = SecuritySettings::default();
        let report = generate(ReportKind::SecurityAudit, inputs(&[], &history, &settings));
        assert!(report.content.contains("Total Login Attempts: 3"));
        assert!(report.content.contains("Total Logouts: 1"));
        assert!(report.content.contains("Total Registrations: 2"));
        assert!(report.content.contains("Minimum Length: 8 characters"));
        assert!(report.content.contains("Session Timeout: 30 minutes"));
        assert!(report.content.contains("History Tracking: Enabled"));
    }

    #[test]
    fn security_audit_lists_ten_most_recent() {
        let history: Vec<_> = (0..12)
            .map(|minute| entry(minute, "alice", HistoryAction::Login))
            .collect();
        let settings = SecuritySettings {
            track_history: false,
            ..SecuritySettings::default()
        };
        let report = generate(ReportKind::SecurityAudit, inputs(&[], &history, &settings));
        let recent: Vec<&str> = report
            .content
            .split("RECENT ACTIVITY:\n")
            .nth(1)
            .expect("recent section")
            .lines()
            .collect();
        assert_eq!(recent.len(), 10);
        assert!(recent[0].starts_with("03/04/2026, 10:11:00 AM"));
        assert!(report.content.contains("History Tracking: Disabled"));
    }

    #[test]
    fn activity_report_sorts_newest_first() {
        let history = vec![
            entry(1, "alice", HistoryAction::Register),
            entry(9, "bob", HistoryAction::Login),
            entry(5, "alice", HistoryAction::Logout),
        ];
        let settings = SecuritySettings::default();
        let report = generate(ReportKind::Activity, inputs(&[], &history, &settings));
        let log: Vec<&str> = report
            .content
            .split("ACTIVITY LOG:\n")
            .nth(1)
            .expect("log section")
            .lines()
            .collect();
        assert_eq!(
            log,
            vec![
                "03/04/2026, 10:09:00 AM - bob (login)",
                "03/04/2026, 10:05:00 AM - alice (logout)",
                "03/04/2026, 10:01:00 AM - alice (register)",
            ]
        );
        assert!(report.content.contains("Total Activities: 3"));
    }

    #[test]
    fn users_report_has_header_and_details() {
        let users = vec![user("alice"), user("bob")];
        let settings = SecuritySettings::default();
        let report = generate(ReportKind::Users, inputs(&users, &[], &settings));
        assert!(report
            .content
            .starts_with("PASSWORD MANAGER - USERS REPORT\nGenerated: 03/04/2026, 11:00:00 AM\n"));
        assert!(report.content.contains("Total Users: 2"));
        assert!(report.content.contains("Username: bob\nRegistered: 03/04/2026, 09:00:00 AM"));
        assert!(report.content.contains("Salt: salt-alice"));
        assert!(report
            .content
            .ends_with(&format!("Hash: {}\n\n", users[1].hashed_password)));
        assert_eq!(report.kind.file_name(), "users_report.txt");
    }
}
