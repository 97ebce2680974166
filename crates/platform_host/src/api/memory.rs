//! In-memory backend adapter that mirrors the HTTP service semantics for tests and demos.

use std::{
    cell::{Cell, RefCell},
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use super::{
    service::{BackendApi, BackendFuture},
    types::{ApiError, AuthAck, Credentials, CsvExport, HistoryAction, HistoryEntry, UserRecord},
};

/// One request observed by [`MemoryBackendApi`], in issue order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendRequest {
    /// `POST /login`.
    Login {
        /// Submitted account name.
        username: String,
    },
    /// `POST /register`.
    Register {
        /// Submitted account name.
        username: String,
    },
    /// `GET /users`.
    ListUsers,
    /// `DELETE /users/{username}`.
    DeleteUser {
        /// Target account.
        username: String,
    },
    /// `GET /history`.
    ListHistory,
    /// `GET /export/...`.
    ExportCsv(CsvExport),
}

#[derive(Debug, Clone)]
struct StoredAccount {
    record: UserRecord,
    password: String,
}

#[derive(Debug, Default)]
/// In-memory [`BackendApi`] with request recording and a switchable transport failure.
pub struct MemoryBackendApi {
    accounts: RefCell<Vec<StoredAccount>>,
    history: RefCell<Vec<HistoryEntry>>,
    requests: RefCell<Vec<BackendRequest>>,
    offline: Cell<bool>,
    clock: Cell<u32>,
}

impl MemoryBackendApi {
    /// Seeds one registered account.
    pub fn with_user(self, username: &str, password: &str) -> Self {
        self.insert_account(username, password);
        self
    }

    /// Seeds one history row.
    pub fn with_history(self, username: &str, action: HistoryAction) -> Self {
        self.record_history(username, action);
        self
    }

    /// Makes every subsequent request fail as a transport error.
    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    /// Returns the requests issued so far.
    pub fn requests(&self) -> Vec<BackendRequest> {
        self.requests.borrow().clone()
    }

    /// Returns the currently stored usernames.
    pub fn usernames(&self) -> Vec<String> {
        self.accounts
            .borrow()
            .iter()
            .map(|account| account.record.username.clone())
            .collect()
    }

    fn next_timestamp(&self) -> String {
        let tick = self.clock.get();
        self.clock.set(tick + 1);
        format!("2026-01-01T09:{:02}:{:02}", tick / 60 % 60, tick % 60)
    }

    fn insert_account(&self, username: &str, password: &str) -> UserRecord {
        let salt = format!("salt-{username}");
        let mut hasher = DefaultHasher::new();
        (salt.as_str(), password).hash(&mut hasher);
        let digest = hasher.finish();
        let record = UserRecord {
            username: username.to_string(),
            hashed_password: format!("{digest:016x}{:016x}", digest.rotate_left(17)),
            salt: Some(salt),
            registered_at: self.next_timestamp(),
        };
        self.accounts.borrow_mut().push(StoredAccount {
            record: record.clone(),
            password: password.to_string(),
        });
        record
    }

    fn record_history(&self, username: &str, action: HistoryAction) {
        let entry = HistoryEntry {
            timestamp: self.next_timestamp(),
            username: username.to_string(),
            action,
        };
        self.history.borrow_mut().push(entry);
    }

    fn begin(&self, request: BackendRequest) -> Result<(), ApiError> {
        self.requests.borrow_mut().push(request);
        if self.offline.get() {
            return Err(ApiError::Transport("memory backend is offline".to_string()));
        }
        Ok(())
    }

    fn users_csv(&self) -> String {
        let mut csv = String::from("username,salt,hashed_password,registered_at\n");
        for account in self.accounts.borrow().iter() {
            let record = &account.record;
            csv.push_str(&format!(
                "{},{},{},{}\n",
                record.username,
                record.salt.as_deref().unwrap_or_default(),
                record.hashed_password,
                record.registered_at
            ));
        }
        csv
    }

    fn history_csv(&self) -> String {
        let mut csv = String::from("username,action,timestamp\n");
        for entry in self.history.borrow().iter().rev() {
            csv.push_str(&format!(
                "{},{},{}\n",
                entry.username,
                entry.action.as_str(),
                entry.timestamp
            ));
        }
        csv
    }
}

fn bad_request(message: &str) -> ApiError {
    ApiError::Server {
        status: 400,
        message: message.to_string(),
    }
}

impl BackendApi for MemoryBackendApi {
    fn login<'a>(
        &'a self,
        credentials: &'a Credentials,
    ) -> BackendFuture<'a, Result<AuthAck, ApiError>> {
        Box::pin(async move {
            self.begin(BackendRequest::Login {
                username: credentials.username.clone(),
            })?;
            let accepted = self.accounts.borrow().iter().any(|account| {
                account.record.username == credentials.username
                    && account.password == credentials.password
            });
            if !accepted {
                return Err(ApiError::Server {
                    status: 401,
                    message: "Invalid credentials".to_string(),
                });
            }
            self.record_history(&credentials.username, HistoryAction::Login);
            Ok(AuthAck {
                username: credentials.username.clone(),
                message: Some("Login successful".to_string()),
            })
        })
    }

    fn register<'a>(
        &'a self,
        credentials: &'a Credentials,
    ) -> BackendFuture<'a, Result<AuthAck, ApiError>> {
        Box::pin(async move {
            self.begin(BackendRequest::Register {
                username: credentials.username.clone(),
            })?;
            if credentials.username.is_empty() || credentials.password.is_empty() {
                return Err(bad_request("Username and password required"));
            }
            if self
                .accounts
                .borrow()
                .iter()
                .any(|account| account.record.username == credentials.username)
            {
                return Err(bad_request("Username already exists"));
            }
            self.insert_account(&credentials.username, &credentials.password);
            self.record_history(&credentials.username, HistoryAction::Register);
            Ok(AuthAck {
                username: credentials.username.clone(),
                message: Some("User registered successfully".to_string()),
            })
        })
    }

    fn list_users<'a>(&'a self) -> BackendFuture<'a, Result<Vec<UserRecord>, ApiError>> {
        Box::pin(async move {
            self.begin(BackendRequest::ListUsers)?;
            Ok(self
                .accounts
                .borrow()
                .iter()
                .map(|account| account.record.clone())
                .collect())
        })
    }

    fn delete_user<'a>(&'a self, username: &'a str) -> BackendFuture<'a, Result<(), ApiError>> {
        Box::pin(async move {
            self.begin(BackendRequest::DeleteUser {
                username: username.to_string(),
            })?;
            let mut accounts = self.accounts.borrow_mut();
            let before = accounts.len();
            accounts.retain(|account| account.record.username != username);
            if accounts.len() == before {
                return Err(ApiError::Server {
                    status: 404,
                    message: "User not found".to_string(),
                });
            }
            Ok(())
        })
    }

    fn list_history<'a>(&'a self) -> BackendFuture<'a, Result<Vec<HistoryEntry>, ApiError>> {
        Box::pin(async move {
            self.begin(BackendRequest::ListHistory)?;
            Ok(self.history.borrow().iter().rev().cloned().collect())
        })
    }

    fn export_csv<'a>(
        &'a self,
        export: CsvExport,
    ) -> BackendFuture<'a, Result<String, ApiError>> {
        Box::pin(async move {
            self.begin(BackendRequest::ExportCsv(export))?;
            Ok(match export {
                CsvExport::Users => self.users_csv(),
                CsvExport::History => self.history_csv(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    #[test]
    fn login_rejects_wrong_password_with_server_message() {
        let backend = MemoryBackendApi::default().with_user("alice", "secret123");
        let err = block_on(backend.login(&Credentials::new("alice", "nope"))).expect_err("reject");
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[test]
    fn register_then_list_includes_new_account_and_history() {
        let backend = MemoryBackendApi::default();
        block_on(backend.register(&Credentials::new("carol", "longenough"))).expect("register");

        let users = block_on(backend.list_users()).expect("users");
        let history = block_on(backend.list_history()).expect("history");
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "carol");
        assert_eq!(history[0].action, HistoryAction::Register);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let backend = MemoryBackendApi::default().with_user("alice", "secret123");
        let err = block_on(backend.register(&Credentials::new("alice", "another1")))
            .expect_err("duplicate");
        assert_eq!(err.user_message("Connection error"), "Username already exists");
    }

    #[test]
    fn deleting_unknown_user_is_not_found() {
        let backend = MemoryBackendApi::default();
        let err = block_on(backend.delete_user("ghost")).expect_err("missing");
        assert!(matches!(err, ApiError::Server { status: 404, .. }));
    }

    #[test]
    fn offline_backend_still_records_the_attempt() {
        let backend = MemoryBackendApi::default();
        backend.set_offline(true);
        let err = block_on(backend.export_csv(CsvExport::Users)).expect_err("offline");
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(
            backend.requests(),
            vec![BackendRequest::ExportCsv(CsvExport::Users)]
        );
    }

    #[test]
    fn history_csv_lists_newest_first() {
        let backend = MemoryBackendApi::default()
            .with_history("alice", HistoryAction::Login)
            .with_history("alice", HistoryAction::Logout);
        let csv = block_on(backend.export_csv(CsvExport::History)).expect("csv");
        let rows: Vec<&str> = csv.lines().collect();
        assert_eq!(rows[0], "username,action,timestamp");
        assert!(rows[1].starts_with("alice,logout,"));
        assert!(rows[2].starts_with("alice,login,"));
    }
}
