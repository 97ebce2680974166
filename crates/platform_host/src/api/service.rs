//! Backend API service contract and no-op adapter.

use std::{future::Future, pin::Pin};

use super::types::{ApiError, AuthAck, Credentials, CsvExport, HistoryEntry, UserRecord};

/// Object-safe boxed future used by [`BackendApi`].
pub type BackendFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for the remote account/history backend.
///
/// Requests carry no session token. Every call issues exactly one HTTP request and is never
/// retried.
pub trait BackendApi {
    /// `POST /login`.
    fn login<'a>(&'a self, credentials: &'a Credentials)
        -> BackendFuture<'a, Result<AuthAck, ApiError>>;

    /// `POST /register`.
    fn register<'a>(
        &'a self,
        credentials: &'a Credentials,
    ) -> BackendFuture<'a, Result<AuthAck, ApiError>>;

    /// `GET /users`.
    fn list_users<'a>(&'a self) -> BackendFuture<'a, Result<Vec<UserRecord>, ApiError>>;

    /// `DELETE /users/{username}`.
    fn delete_user<'a>(&'a self, username: &'a str) -> BackendFuture<'a, Result<(), ApiError>>;

    /// `GET /history`.
    fn list_history<'a>(&'a self) -> BackendFuture<'a, Result<Vec<HistoryEntry>, ApiError>>;

    /// `GET /export/users` or `GET /export/history`, returning the CSV body untouched.
    fn export_csv<'a>(&'a self, export: CsvExport)
        -> BackendFuture<'a, Result<String, ApiError>>;
}

/// Signs in and returns the username the backend accepted.
///
/// Falls back to the submitted name when the acknowledgement omits it.
pub async fn authenticate_with<B: BackendApi + ?Sized>(
    backend: &B,
    credentials: &Credentials,
) -> Result<String, ApiError> {
    let ack = backend.login(credentials).await?;
    if ack.username.trim().is_empty() {
        Ok(credentials.username.clone())
    } else {
        Ok(ack.username)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Backend adapter for targets without network access; every call fails as a transport error.
pub struct NoopBackendApi;

fn unavailable<T: 'static>() -> BackendFuture<'static, Result<T, ApiError>> {
    Box::pin(async {
        Err(ApiError::Transport(
            "backend api is unavailable on this target".to_string(),
        ))
    })
}

impl BackendApi for NoopBackendApi {
    fn login<'a>(
        &'a self,
        _credentials: &'a Credentials,
    ) -> BackendFuture<'a, Result<AuthAck, ApiError>> {
        unavailable()
    }

    fn register<'a>(
        &'a self,
        _credentials: &'a Credentials,
    ) -> BackendFuture<'a, Result<AuthAck, ApiError>> {
        unavailable()
    }

    fn list_users<'a>(&'a self) -> BackendFuture<'a, Result<Vec<UserRecord>, ApiError>> {
        unavailable()
    }

    fn delete_user<'a>(&'a self, _username: &'a str) -> BackendFuture<'a, Result<(), ApiError>> {
        unavailable()
    }

    fn list_history<'a>(&'a self) -> BackendFuture<'a, Result<Vec<HistoryEntry>, ApiError>> {
        unavailable()
    }

    fn export_csv<'a>(
        &'a self,
        _export: CsvExport,
    ) -> BackendFuture<'a, Result<String, ApiError>> {
        unavailable()
    }
}
