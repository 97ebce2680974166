//! Local file download contracts.

use std::{cell::RefCell, future::Future, pin::Pin};

/// Object-safe boxed future used by [`DownloadService`].
pub type DownloadFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Text payload saved to the user's machine under a fixed name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadFile {
    /// Suggested file name (`users_report.txt`).
    pub file_name: String,
    /// MIME type of `contents`.
    pub mime_type: String,
    /// File body.
    pub contents: String,
}

impl DownloadFile {
    /// Plain-text file.
    pub fn text(file_name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self::with_mime(file_name, "text/plain", contents)
    }

    /// CSV file.
    pub fn csv(file_name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self::with_mime(file_name, "text/csv", contents)
    }

    /// JSON file.
    pub fn json(file_name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self::with_mime(file_name, "application/json", contents)
    }

    fn with_mime(
        file_name: impl Into<String>,
        mime_type: &str,
        contents: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.to_string(),
            contents: contents.into(),
        }
    }
}

/// Host service for saving generated files.
pub trait DownloadService {
    /// Hands `file` to the platform download mechanism.
    fn save<'a>(&'a self, file: DownloadFile) -> DownloadFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Download service for targets without a download mechanism.
pub struct NoopDownloadService;

impl DownloadService for NoopDownloadService {
    fn save<'a>(&'a self, file: DownloadFile) -> DownloadFuture<'a, Result<(), String>> {
        Box::pin(async move {
            Err(format!(
                "downloads are unavailable on this target ({})",
                file.file_name
            ))
        })
    }
}

#[derive(Debug, Default)]
/// Download service that keeps saved files in memory.
pub struct MemoryDownloadService {
    saved: RefCell<Vec<DownloadFile>>,
}

impl MemoryDownloadService {
    /// Returns every file saved so far.
    pub fn saved(&self) -> Vec<DownloadFile> {
        self.saved.borrow().clone()
    }
}

impl DownloadService for MemoryDownloadService {
    fn save<'a>(&'a self, file: DownloadFile) -> DownloadFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.saved.borrow_mut().push(file);
            Ok(())
        })
    }
}
