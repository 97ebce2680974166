//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate wires the HTTP backend client, window dialogs, Blob downloads, the custom
//! wallpaper file picker, and Web Animations motion into a [`platform_host::HostServices`]
//! bundle. Non-wasm builds compile to inert fallbacks so native tests can link the crate.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time backend selection and host bundle assembly.
pub mod adapters;
pub mod api;
pub mod dialogs;
pub mod downloads;
pub mod motion;
pub mod wallpaper;

pub use adapters::{
    backend_api, backend_strategy_name, build_host_services, selected_backend_strategy,
    BackendApiAdapter, BackendStrategy,
};
pub use api::WebBackendApi;
pub use dialogs::WebDialogService;
pub use downloads::WebDownloadService;
pub use motion::WebMotionService;
pub use wallpaper::WebWallpaperFileService;
