//! HTTP backend adapter over `gloo-net`.

use gloo_net::http::{Request, Response};
use platform_host::{
    server_error_from_body, ApiConfig, ApiError, AuthAck, BackendApi, BackendFuture, Credentials,
    CsvExport, HistoryEntry, HistoryEnvelope, UserRecord, UsersEnvelope,
};
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, Default)]
/// Backend client that talks to the configured HTTP API.
pub struct WebBackendApi {
    config: ApiConfig,
}

impl WebBackendApi {
    /// Creates a client for `config`.
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    async fn send_credentials(
        &self,
        path: &str,
        credentials: &Credentials,
    ) -> Result<Response, ApiError> {
        Request::post(&self.config.url(path))
            .json(credentials)
            .map_err(|err| ApiError::Transport(format!("failed to encode request: {err}")))?
            .send()
            .await
            .map_err(transport)
    }

    async fn post_credentials(
        &self,
        path: &str,
        credentials: &Credentials,
    ) -> Result<AuthAck, ApiError> {
        let response = self.send_credentials(path, credentials).await?;
        decode_json(checked(response).await?).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.config.url(path))
            .send()
            .await
            .map_err(transport)?;
        decode_json(checked(response).await?).await
    }
}

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

async fn checked(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(server_error_from_body(status, &body))
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

impl BackendApi for WebBackendApi {
    fn login<'a>(
        &'a self,
        credentials: &'a Credentials,
    ) -> BackendFuture<'a, Result<AuthAck, ApiError>> {
        Box::pin(self.post_credentials("/login", credentials))
    }

    fn register<'a>(
        &'a self,
        credentials: &'a Credentials,
    ) -> BackendFuture<'a, Result<AuthAck, ApiError>> {
        Box::pin(async move {
            let response = self.send_credentials("/register", credentials).await?;
            let body = checked(response).await?.text().await.unwrap_or_default();
            Ok(AuthAck::from_register_body(&body, credentials))
        })
    }

    fn list_users<'a>(&'a self) -> BackendFuture<'a, Result<Vec<UserRecord>, ApiError>> {
        Box::pin(async move {
            let envelope: UsersEnvelope = self.get_json("/users").await?;
            Ok(envelope.users)
        })
    }

    fn delete_user<'a>(&'a self, username: &'a str) -> BackendFuture<'a, Result<(), ApiError>> {
        Box::pin(async move {
            let encoded = String::from(js_sys::encode_uri_component(username));
            let path = format!("/users/{encoded}");
            let response = Request::delete(&self.config.url(&path))
                .send()
                .await
                .map_err(transport)?;
            checked(response).await.map(|_| ())
        })
    }

    fn list_history<'a>(&'a self) -> BackendFuture<'a, Result<Vec<HistoryEntry>, ApiError>> {
        Box::pin(async move {
            let envelope: HistoryEnvelope = self.get_json("/history").await?;
            Ok(envelope.history)
        })
    }

    fn export_csv<'a>(
        &'a self,
        export: CsvExport,
    ) -> BackendFuture<'a, Result<String, ApiError>> {
        Box::pin(async move {
            let response = Request::get(&self.config.url(export.path()))
                .send()
                .await
                .map_err(transport)?;
            checked(response)
                .await?
                .text()
                .await
                .map_err(|err| ApiError::Decode(err.to_string()))
        })
    }
}
