//! CSV passthrough and full JSON snapshot exports.

use desktop_app_contract::SecuritySettings;
use platform_host::{CsvExport, DownloadFile, HistoryEntry, HostServices, UserRecord};
use serde::Serialize;

/// Fixed name of the full snapshot download.
pub const DATABASE_FILE_NAME: &str = "database.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Export buttons offered by the panel.
pub enum ExportKind {
    UsersCsv,
    HistoryCsv,
    FullJson,
}

impl ExportKind {
    /// Button order.
    pub const ALL: [ExportKind; 3] = [Self::UsersCsv, Self::HistoryCsv, Self::FullJson];

    /// Button caption.
    pub const fn label(self) -> &'static str {
        match self {
            Self::UsersCsv => "Export Users (CSV)",
            Self::HistoryCsv => "Export History (CSV)",
            Self::FullJson => "Export Full Database (JSON)",
        }
    }

    /// Button element id.
    pub const fn dom_id(self) -> &'static str {
        match self {
            Self::UsersCsv => "export-users-csv",
            Self::HistoryCsv => "export-history-csv",
            Self::FullJson => "export-full-json",
        }
    }

    const fn noun(self) -> &'static str {
        match self {
            Self::UsersCsv => "users",
            Self::HistoryCsv => "history",
            Self::FullJson => "database",
        }
    }

    /// Status shown after the download starts.
    pub fn success_text(self) -> String {
        let noun = self.noun();
        let mut title = noun.to_string();
        if let Some(first) = title.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        format!("{title} exported successfully!")
    }

    /// Status shown when the export fails.
    pub fn failure_text(self) -> String {
        format!("Failed to export {}", self.noun())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DatabaseSnapshot<'a> {
    users: &'a [UserRecord],
    login_history: &'a [HistoryEntry],
    settings: &'a SecuritySettings,
    exported_at: &'a str,
}

/// Pretty-printed `{users, loginHistory, settings, exportedAt}` document.
pub fn database_snapshot(
    users: &[UserRecord],
    history: &[HistoryEntry],
    settings: &SecuritySettings,
    exported_at: &str,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&DatabaseSnapshot {
        users,
        login_history: history,
        settings,
        exported_at,
    })
}

/// Fetches a server-rendered CSV and saves it untouched.
pub async fn export_csv(host: &HostServices, export: CsvExport) -> Result<(), String> {
    let csv = host
        .backend
        .export_csv(export)
        .await
        .map_err(|err| err.to_string())?;
    host.downloads
        .save(DownloadFile::csv(export.file_name(), csv))
        .await
}

/// Saves an already rendered snapshot as `database.json`.
pub async fn export_snapshot(host: &HostServices, snapshot: String) -> Result<(), String> {
    host.downloads
        .save(DownloadFile::json(DATABASE_FILE_NAME, snapshot))
        .await
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use futures::executor::block_on;
    use platform_host::{BackendRequest, HistoryAction, MemoryBackendApi, MemoryDownloadService};
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;

    #[test]
    fn snapshot_uses_wire_field_names() {
        let users = vec![UserRecord {
            username: "alice".to_string(),
            salt: None,
            hashed_password: "abc".to_string(),
            registered_at: "2026-03-04T09:00:00".to_string(),
        }];
        let history = vec![HistoryEntry {
            timestamp: "2026-03-04T09:01:00".to_string(),
            username: "alice".to_string(),
            action: HistoryAction::Login,
        }];
        let json = database_snapshot(
            &users,
            &history,
            &SecuritySettings::default(),
            "2026-03-04T09:02:00+00:00",
        )
        .expect("serialize");
        let value: Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["users"][0]["username"], "alice");
        assert_eq!(value["loginHistory"][0]["action"], "login");
        assert_eq!(value["settings"]["minPasswordLength"], 8);
        assert_eq!(value["settings"]["sessionTimeout"], 30);
        assert_eq!(value["exportedAt"], "2026-03-04T09:02:00+00:00");
        assert!(json.contains("\n  \"users\""));
    }

    #[test]
    fn csv_export_saves_server_body_under_fixed_name() {
        let backend = Rc::new(MemoryBackendApi::default().with_user("alice", "secret123"));
        let downloads = Rc::new(MemoryDownloadService::default());
        let host = HostServices::noop()
            .with_backend(backend.clone())
            .with_downloads(downloads.clone());

        block_on(export_csv(&host, CsvExport::Users)).expect("export");
        let saved = downloads.saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].file_name, "users.csv");
        assert_eq!(saved[0].mime_type, "text/csv");
        assert!(saved[0].contents.starts_with("username,"));
        assert_eq!(
            backend.requests(),
            vec![BackendRequest::ExportCsv(CsvExport::Users)]
        );
    }

    #[test]
    fn offline_csv_export_saves_nothing() {
        let backend = Rc::new(MemoryBackendApi::default());
        backend.set_offline(true);
        let downloads = Rc::new(MemoryDownloadService::default());
        let host = HostServices::noop()
            .with_backend(backend.clone())
            .with_downloads(downloads.clone());

        assert!(block_on(export_csv(&host, CsvExport::History)).is_err());
        assert!(downloads.saved().is_empty());
    }

    #[test]
    fn status_texts_name_the_export() {
        assert_eq!(ExportKind::UsersCsv.success_text(), "Users exported successfully!");
        assert_eq!(ExportKind::FullJson.success_text(), "Database exported successfully!");
        assert_eq!(ExportKind::HistoryCsv.failure_text(), "Failed to export history");
    }
}
