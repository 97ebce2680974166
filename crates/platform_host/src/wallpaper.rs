//! Wallpaper records and the custom-wallpaper file loading contract.

use std::{future::Future, pin::Pin};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`WallpaperFileService`].
pub type WallpaperFileFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// How a wallpaper's `value` is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallpaperKind {
    /// `value` is a CSS gradient expression.
    Gradient,
    /// `value` is an image URL or data URI.
    Image,
}

/// Accent colors applied to the login card while a wallpaper is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallpaperPalette {
    /// `--login-glow` value.
    pub glow: String,
    /// `--login-blur` value.
    pub blur: String,
}

/// One background in the wallpaper registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallpaper {
    /// Unique registry id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Rendering kind for `value`.
    pub kind: WallpaperKind,
    /// Gradient expression or image source.
    pub value: String,
    /// Smaller image used in grids and trays.
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Optional accent palette.
    #[serde(default)]
    pub palette: Option<WallpaperPalette>,
    /// Whether this entry came from a user-selected file.
    #[serde(default)]
    pub is_custom: bool,
    /// Whether this entry is the startup default.
    #[serde(default)]
    pub is_default: bool,
}

impl Wallpaper {
    /// Returns whether this is a user-supplied image.
    pub fn is_custom_image(&self) -> bool {
        self.is_custom && self.kind == WallpaperKind::Image
    }
}

/// CSS declarations that paint `wallpaper` on a background surface.
pub fn background_style(wallpaper: &Wallpaper) -> String {
    match wallpaper.kind {
        WallpaperKind::Gradient => format!("background:{};", wallpaper.value),
        WallpaperKind::Image => format!(
            "background-image:url(\"{}\");background-size:cover;background-position:center;",
            wallpaper.value
        ),
    }
}

/// CSS custom properties carrying the login-card accent colors, if the wallpaper has any.
pub fn login_palette_style(wallpaper: &Wallpaper) -> String {
    wallpaper
        .palette
        .as_ref()
        .map(|palette| {
            format!(
                "--login-glow:{};--login-blur:{};",
                palette.glow, palette.blur
            )
        })
        .unwrap_or_default()
}

/// Small preview for grids and trays; gradients preview as themselves.
pub fn thumbnail_style(wallpaper: &Wallpaper) -> String {
    match (&wallpaper.kind, &wallpaper.thumbnail) {
        (WallpaperKind::Image, Some(thumbnail)) => format!(
            "background-image:url(\"{thumbnail}\");background-size:cover;background-position:center;"
        ),
        _ => background_style(wallpaper),
    }
}

/// Failure while loading a custom wallpaper from a local file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WallpaperLoadError {
    /// The target cannot open local files.
    #[error("custom wallpapers are unavailable on this target")]
    Unsupported,
    /// The picker closed without a file.
    #[error("no wallpaper file selected")]
    NoFileSelected,
    /// The selected file is not an image.
    #[error("`{file_name}` is not an image ({mime_type})")]
    NotAnImage {
        /// Selected file name.
        file_name: String,
        /// Reported MIME type.
        mime_type: String,
    },
    /// The file could not be read.
    #[error("failed to read wallpaper file: {0}")]
    Read(String),
}

/// Builds the session-only custom wallpaper record for a loaded file.
pub fn custom_wallpaper_from_data_url(
    file_name: &str,
    mime_type: &str,
    data_url: String,
    issued_at_ms: u64,
) -> Result<Wallpaper, WallpaperLoadError> {
    let mime_type = mime_type.trim().to_ascii_lowercase();
    let declared_image = mime_type.starts_with("image/");
    let encoded_image = data_url.starts_with("data:image/");
    if !declared_image && !encoded_image {
        return Err(WallpaperLoadError::NotAnImage {
            file_name: file_name.to_string(),
            mime_type,
        });
    }
    if !data_url.starts_with("data:") {
        return Err(WallpaperLoadError::Read(
            "file reader did not produce a data URL".to_string(),
        ));
    }

    let name = file_name.trim();
    Ok(Wallpaper {
        id: format!("custom-{issued_at_ms}"),
        name: if name.is_empty() {
            "Custom Wallpaper".to_string()
        } else {
            name.to_string()
        },
        kind: WallpaperKind::Image,
        value: data_url,
        thumbnail: None,
        palette: None,
        is_custom: true,
        is_default: false,
    })
}

/// Host service that lets the user pick a local image and loads it as a wallpaper.
///
/// Loading is cancel-free: once a file is chosen the read runs to completion.
pub trait WallpaperFileService {
    /// Opens a picker and resolves to a data-URI-backed custom wallpaper.
    fn pick_custom_wallpaper<'a>(
        &'a self,
    ) -> WallpaperFileFuture<'a, Result<Wallpaper, WallpaperLoadError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Wallpaper file service for targets without file access.
pub struct NoopWallpaperFileService;

impl WallpaperFileService for NoopWallpaperFileService {
    fn pick_custom_wallpaper<'a>(
        &'a self,
    ) -> WallpaperFileFuture<'a, Result<Wallpaper, WallpaperLoadError>> {
        Box::pin(async { Err(WallpaperLoadError::Unsupported) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn custom_wallpaper_uses_timestamp_id_and_file_name() {
        let wallpaper = custom_wallpaper_from_data_url(
            "beach.png",
            "image/png",
            "data:image/png;base64,AAAA".to_string(),
            1_700_000_000_000,
        )
        .expect("image");

        assert_eq!(wallpaper.id, "custom-1700000000000");
        assert_eq!(wallpaper.name, "beach.png");
        assert_eq!(wallpaper.kind, WallpaperKind::Image);
        assert!(wallpaper.is_custom_image());
    }

    #[test]
    fn non_image_files_are_rejected() {
        let err = custom_wallpaper_from_data_url(
            "notes.txt",
            "text/plain",
            "data:text/plain;base64,AAAA".to_string(),
            1,
        )
        .expect_err("not an image");
        assert!(matches!(err, WallpaperLoadError::NotAnImage { .. }));
    }

    #[test]
    fn missing_mime_type_falls_back_to_data_url_sniffing() {
        let wallpaper =
            custom_wallpaper_from_data_url(" ", "", "data:image/jpeg;base64,AA".to_string(), 2)
                .expect("image");
        assert_eq!(wallpaper.name, "Custom Wallpaper");
    }
}
