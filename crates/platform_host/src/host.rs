//! Shared host-service bundle for runtime composition.

use std::rc::Rc;

use crate::{
    BackendApi, DialogService, DownloadService, MotionService, NoopBackendApi, NoopDialogService,
    NoopDownloadService, NoopMotionService, NoopWallpaperFileService, WallpaperFileService,
};

#[derive(Clone)]
/// Reference-counted bundle of every host service the desktop uses.
pub struct HostServices {
    /// Remote account/history backend.
    pub backend: Rc<dyn BackendApi>,
    /// Confirmation and notice dialogs.
    pub dialogs: Rc<dyn DialogService>,
    /// Local file downloads.
    pub downloads: Rc<dyn DownloadService>,
    /// Custom wallpaper file loading.
    pub wallpaper_files: Rc<dyn WallpaperFileService>,
    /// Motion preference, geometry, and animations.
    pub motion: Rc<dyn MotionService>,
}

impl HostServices {
    /// Bundle of no-op adapters for headless targets.
    pub fn noop() -> Self {
        Self {
            backend: Rc::new(NoopBackendApi),
            dialogs: Rc::new(NoopDialogService),
            downloads: Rc::new(NoopDownloadService),
            wallpaper_files: Rc::new(NoopWallpaperFileService),
            motion: Rc::new(NoopMotionService),
        }
    }

    /// Replaces the backend adapter.
    pub fn with_backend(mut self, backend: Rc<dyn BackendApi>) -> Self {
        self.backend = backend;
        self
    }

    /// Replaces the dialog adapter.
    pub fn with_dialogs(mut self, dialogs: Rc<dyn DialogService>) -> Self {
        self.dialogs = dialogs;
        self
    }

    /// Replaces the download adapter.
    pub fn with_downloads(mut self, downloads: Rc<dyn DownloadService>) -> Self {
        self.downloads = downloads;
        self
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices").finish_non_exhaustive()
    }
}
