//! Typed host-domain contracts and shared models used across runtime and browser adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the backend API
//! contract and its record types, dialog/download/motion services, wallpaper records and the
//! custom-wallpaper loader contract, plus configuration and time helpers. Concrete browser
//! adapters live in `platform_host_web`; in-memory adapters here back native tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod api;
pub mod config;
pub mod dialogs;
pub mod downloads;
pub mod host;
pub mod motion;
pub mod time;
pub mod wallpaper;

pub use api::memory::{BackendRequest, MemoryBackendApi};
pub use api::service::{authenticate_with, BackendApi, BackendFuture, NoopBackendApi};
pub use api::types::{
    server_error_from_body, ApiError, AuthAck, Credentials, CsvExport, HistoryAction,
    HistoryEntry, HistoryEnvelope, UserRecord, UsersEnvelope,
};
pub use config::{ApiConfig, DEFAULT_API_BASE_URL};
pub use dialogs::{DialogFuture, DialogPrompt, DialogService, NoopDialogService, ScriptedDialogService};
pub use downloads::{
    DownloadFile, DownloadFuture, DownloadService, MemoryDownloadService, NoopDownloadService,
};
pub use host::HostServices;
pub use motion::{
    AnimationKeyframe, AnimationOutcome, AnimationRequest, MotionFuture, MotionService,
    NoopMotionService, ScreenRect,
};
pub use time::{next_monotonic_timestamp_ms, unix_time_ms_now};
pub use wallpaper::{
    background_style, custom_wallpaper_from_data_url, login_palette_style, thumbnail_style,
    NoopWallpaperFileService, Wallpaper, WallpaperFileFuture,
    WallpaperFileService, WallpaperKind, WallpaperLoadError, WallpaperPalette,
};
