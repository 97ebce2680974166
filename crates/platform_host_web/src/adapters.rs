use std::rc::Rc;

use platform_host::{
    ApiConfig, ApiError, AuthAck, BackendApi, BackendFuture, Credentials, CsvExport,
    HistoryAction, HistoryEntry, HostServices, MemoryBackendApi, UserRecord,
};

use crate::{
    WebBackendApi, WebDialogService, WebDownloadService, WebMotionService, WebWallpaperFileService,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected backend strategy.
pub enum BackendStrategy {
    /// HTTP API at [`ApiConfig`]'s base URL.
    Http,
    /// Seeded in-memory backend for running the shell without a server.
    Memory,
}

/// Returns the compile-time selected backend strategy for the active build.
pub const fn selected_backend_strategy() -> BackendStrategy {
    #[cfg(feature = "memory-backend")]
    {
        BackendStrategy::Memory
    }

    #[cfg(not(feature = "memory-backend"))]
    {
        BackendStrategy::Http
    }
}

/// Returns the selected backend strategy as a stable string token.
pub fn backend_strategy_name() -> &'static str {
    match selected_backend_strategy() {
        BackendStrategy::Http => "http",
        BackendStrategy::Memory => "memory",
    }
}

/// Adapter enum that erases the concrete backend behind [`BackendApi`].
#[derive(Debug)]
pub enum BackendApiAdapter {
    /// `gloo-net` HTTP client.
    Http(WebBackendApi),
    /// In-process backend.
    Memory(MemoryBackendApi),
}

impl BackendApi for BackendApiAdapter {
    fn login<'a>(
        &'a self,
        credentials: &'a Credentials,
    ) -> BackendFuture<'a, Result<AuthAck, ApiError>> {
        match self {
            Self::Http(api) => api.login(credentials),
            Self::Memory(api) => api.login(credentials),
        }
    }

    fn register<'a>(
        &'a self,
        credentials: &'a Credentials,
    ) -> BackendFuture<'a, Result<AuthAck, ApiError>> {
        match self {
            Self::Http(api) => api.register(credentials),
            Self::Memory(api) => api.register(credentials),
        }
    }

    fn list_users<'a>(&'a self) -> BackendFuture<'a, Result<Vec<UserRecord>, ApiError>> {
        match self {
            Self::Http(api) => api.list_users(),
            Self::Memory(api) => api.list_users(),
        }
    }

    fn delete_user<'a>(&'a self, username: &'a str) -> BackendFuture<'a, Result<(), ApiError>> {
        match self {
            Self::Http(api) => api.delete_user(username),
            Self::Memory(api) => api.delete_user(username),
        }
    }

    fn list_history<'a>(&'a self) -> BackendFuture<'a, Result<Vec<HistoryEntry>, ApiError>> {
        match self {
            Self::Http(api) => api.list_history(),
            Self::Memory(api) => api.list_history(),
        }
    }

    fn export_csv<'a>(
        &'a self,
        export: CsvExport,
    ) -> BackendFuture<'a, Result<String, ApiError>> {
        match self {
            Self::Http(api) => api.export_csv(export),
            Self::Memory(api) => api.export_csv(export),
        }
    }
}

fn seeded_memory_backend() -> MemoryBackendApi {
    MemoryBackendApi::default()
        .with_user("demo", "demo1234")
        .with_history("demo", HistoryAction::Register)
}

/// Builds the backend adapter for the selected strategy.
pub fn backend_api(config: ApiConfig) -> BackendApiAdapter {
    match selected_backend_strategy() {
        BackendStrategy::Http => BackendApiAdapter::Http(WebBackendApi::new(config)),
        BackendStrategy::Memory => BackendApiAdapter::Memory(seeded_memory_backend()),
    }
}

/// Assembles the browser host bundle handed to the desktop runtime.
pub fn build_host_services() -> HostServices {
    HostServices {
        backend: Rc::new(backend_api(ApiConfig::default())),
        dialogs: Rc::new(WebDialogService),
        downloads: Rc::new(WebDownloadService),
        wallpaper_files: Rc::new(WebWallpaperFileService),
        motion: Rc::new(WebMotionService),
    }
}
