//! Built-in wallpaper catalog and the session wallpaper registry.

use std::sync::OnceLock;

pub use platform_host::wallpaper::{background_style, login_palette_style, thumbnail_style};
use platform_host::Wallpaper;
use serde::{Deserialize, Serialize};

include!(concat!(env!("OUT_DIR"), "/wallpaper_catalog_generated.rs"));

/// Dynamic wallpaper cycle period.
pub const DYNAMIC_WALLPAPER_INTERVAL_MS: u32 = 15_000;
/// How long the desktop background keeps its transition class after a change.
pub const WALLPAPER_TRANSITION_MS: u32 = 600;
/// Maximum number of entries in the login-screen tray.
pub const LOGIN_TRAY_LIMIT: usize = 5;

fn builtin_catalog() -> &'static [Wallpaper] {
    static CATALOG: OnceLock<Vec<Wallpaper>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        serde_json::from_str(BUILTIN_WALLPAPER_CATALOG_JSON)
            .expect("generated built-in wallpaper catalog should parse")
    })
}

/// Returns the generated built-in wallpaper catalog JSON payload.
pub fn builtin_wallpaper_catalog_json() -> &'static str {
    BUILTIN_WALLPAPER_CATALOG_JSON
}

/// Returns fresh copies of the built-in wallpapers in catalog order.
pub fn builtin_wallpapers() -> Vec<Wallpaper> {
    builtin_catalog().to_vec()
}

fn default_builtin() -> Wallpaper {
    let catalog = builtin_catalog();
    catalog
        .iter()
        .find(|wallpaper| wallpaper.is_default)
        .or_else(|| catalog.first())
        .cloned()
        .expect("built-in wallpaper catalog is never empty")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Wallpapers known to the session plus the active selection and dynamic-mode cursor.
///
/// The active wallpaper is always a registry entry, and at most one entry is custom.
pub struct WallpaperRegistry {
    entries: Vec<Wallpaper>,
    current_id: String,
    dynamic_enabled: bool,
    dynamic_cursor: usize,
}

impl Default for WallpaperRegistry {
    fn default() -> Self {
        Self {
            entries: builtin_wallpapers(),
            current_id: default_builtin().id,
            dynamic_enabled: false,
            dynamic_cursor: 0,
        }
    }
}

impl WallpaperRegistry {
    /// Registry entries, built-ins first.
    pub fn entries(&self) -> &[Wallpaper] {
        &self.entries
    }

    /// Looks up an entry by id.
    pub fn get(&self, wallpaper_id: &str) -> Option<&Wallpaper> {
        self.entries.iter().find(|entry| entry.id == wallpaper_id)
    }

    /// The active wallpaper.
    pub fn current(&self) -> Wallpaper {
        self.get(&self.current_id)
            .cloned()
            .unwrap_or_else(default_builtin)
    }

    /// Id of the active wallpaper.
    pub fn current_id(&self) -> &str {
        &self.current_id
    }

    /// The session's custom entry, if one was registered.
    pub fn custom(&self) -> Option<&Wallpaper> {
        self.entries.iter().find(|entry| entry.is_custom)
    }

    /// Whether dynamic cycling is on.
    pub fn dynamic_enabled(&self) -> bool {
        self.dynamic_enabled
    }

    /// Adds `wallpaper` as the single custom entry, dropping any previous one.
    pub fn register_custom(&mut self, wallpaper: Wallpaper) {
        self.entries.retain(|entry| !entry.is_custom);
        self.entries.push(Wallpaper {
            is_custom: true,
            ..wallpaper
        });
    }

    /// Makes `wallpaper` active, registering it first when it is custom or unknown.
    ///
    /// Returns `false` when it was already active, so repeated calls leave state unchanged.
    pub fn apply(&mut self, wallpaper: Wallpaper) -> bool {
        if wallpaper.is_custom {
            let already_registered = self.get(&wallpaper.id) == Some(&wallpaper);
            if !already_registered {
                self.register_custom(wallpaper.clone());
            }
        } else if self.get(&wallpaper.id).is_none() {
            self.entries.push(wallpaper.clone());
        }

        if self.current_id == wallpaper.id {
            return false;
        }
        self.current_id = wallpaper.id;
        true
    }

    /// Applies a registry entry by id. Unknown ids are ignored.
    pub fn apply_id(&mut self, wallpaper_id: &str) -> Option<bool> {
        let wallpaper = self.get(wallpaper_id)?.clone();
        Some(self.apply(wallpaper))
    }

    /// Turns dynamic cycling on when more than one entry exists.
    ///
    /// Returns whether cycling is now running. The cursor starts at the active entry.
    pub fn start_dynamic(&mut self) -> bool {
        if self.entries.len() <= 1 {
            self.dynamic_enabled = false;
            return false;
        }
        self.dynamic_cursor = self
            .entries
            .iter()
            .position(|entry| entry.id == self.current_id)
            .unwrap_or(0);
        self.dynamic_enabled = true;
        true
    }

    /// Turns dynamic cycling off.
    pub fn stop_dynamic(&mut self) {
        self.dynamic_enabled = false;
    }

    /// Advances the dynamic cursor one step.
    ///
    /// Returns the entry to apply, or `None` when cycling is off or the step lands on a custom
    /// image.
    pub fn next_dynamic(&mut self) -> Option<Wallpaper> {
        if !self.dynamic_enabled || self.entries.is_empty() {
            return None;
        }
        self.dynamic_cursor = (self.dynamic_cursor + 1) % self.entries.len();
        let next = &self.entries[self.dynamic_cursor];
        if next.is_custom_image() {
            return None;
        }
        Some(next.clone())
    }

    /// Entry after the active one, wrapping around.
    pub fn next_for_login(&self) -> Option<Wallpaper> {
        if self.entries.is_empty() {
            return None;
        }
        let index = self
            .entries
            .iter()
            .position(|entry| entry.id == self.current_id)
            .map(|index| (index + 1) % self.entries.len())
            .unwrap_or(0);
        self.entries.get(index).cloned()
    }

    /// Active wallpaper first, then the remaining entries in registry order.
    pub fn ordered_for_grid(&self) -> Vec<Wallpaper> {
        let mut ordered = vec![self.current()];
        ordered.extend(
            self.entries
                .iter()
                .filter(|entry| entry.id != self.current_id)
                .cloned(),
        );
        ordered
    }

    /// Login tray contents: active first, de-duplicated by id, capped at `limit`.
    pub fn tray_selection(&self, limit: usize) -> Vec<Wallpaper> {
        let mut tray: Vec<Wallpaper> = Vec::with_capacity(limit);
        for wallpaper in std::iter::once(self.current()).chain(self.entries.iter().cloned()) {
            if tray.len() == limit {
                break;
            }
            if tray.iter().all(|existing| existing.id != wallpaper.id) {
                tray.push(wallpaper);
            }
        }
        tray
    }

    /// Reseeds the built-ins, drops the custom entry, and stops cycling.
    ///
    /// Keeps the active id when it is still a built-in, otherwise falls back to the first
    /// built-in. Returns the wallpaper that is now active.
    pub fn reset_to_builtins(&mut self) -> Wallpaper {
        self.entries = builtin_wallpapers();
        self.dynamic_enabled = false;
        self.dynamic_cursor = 0;
        if self.get(&self.current_id).is_none() {
            if let Some(first) = self.entries.first() {
                self.current_id = first.id.clone();
            }
        }
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use platform_host::WallpaperKind;
    use pretty_assertions::assert_eq;

    use super::*;

    fn custom(id: &str) -> Wallpaper {
        Wallpaper {
            id: id.to_string(),
            name: format!("{id}.png"),
            kind: WallpaperKind::Image,
            value: "data:image/png;base64,AAAA".to_string(),
            thumbnail: None,
            palette: None,
            is_custom: true,
            is_default: false,
        }
    }

    fn ids(wallpapers: &[Wallpaper]) -> Vec<&str> {
        wallpapers.iter().map(|w| w.id.as_str()).collect()
    }

    #[test]
    fn catalog_seeds_five_builtins_with_ventura_default() {
        let registry = WallpaperRegistry::default();
        assert_eq!(
            ids(registry.entries()),
            vec![
                "ventura-sky",
                "monterey-waves",
                "sonoma-dunes",
                "night-nebula",
                "aurora"
            ]
        );
        assert_eq!(registry.current_id(), "ventura-sky");
        let ventura = registry.current();
        assert_eq!(ventura.kind, WallpaperKind::Image);
        assert_eq!(
            ventura.value,
            "https://images.unsplash.com/photo-1527515637462-cff94eecc1ac?auto=format&fit=crop&w=1920&q=80"
        );
        assert_eq!(
            registry.get("aurora").map(|w| w.kind),
            Some(WallpaperKind::Gradient)
        );
        assert!(builtin_wallpaper_catalog_json().contains("night-nebula"));
    }

    #[test]
    fn apply_is_idempotent() {
        let mut registry = WallpaperRegistry::default();
        let aurora = registry.get("aurora").cloned().expect("aurora");

        assert!(registry.apply(aurora.clone()));
        let after_first = registry.clone();
        assert!(!registry.apply(aurora));
        assert_eq!(registry, after_first);
    }

    #[test]
    fn registering_second_custom_replaces_first() {
        let mut registry = WallpaperRegistry::default();
        registry.apply(custom("custom-1"));
        registry.apply(custom("custom-2"));

        let customs: Vec<_> = registry.entries().iter().filter(|w| w.is_custom).collect();
        assert_eq!(customs.len(), 1);
        assert_eq!(customs[0].id, "custom-2");
        assert_eq!(registry.current_id(), "custom-2");
        assert_eq!(registry.entries().len(), 6);
    }

    #[test]
    fn dynamic_cycle_skips_custom_images_and_wraps() {
        let mut registry = WallpaperRegistry::default();
        registry.register_custom(custom("custom-9"));
        registry.apply_id("aurora");
        assert!(registry.start_dynamic());

        assert_eq!(registry.next_dynamic(), None);
        assert_eq!(
            registry.next_dynamic().map(|w| w.id),
            Some("ventura-sky".to_string())
        );
    }

    #[test]
    fn dynamic_mode_requires_more_than_one_entry() {
        let mut registry = WallpaperRegistry {
            entries: vec![default_builtin()],
            ..WallpaperRegistry::default()
        };
        assert!(!registry.start_dynamic());
        assert!(!registry.dynamic_enabled());
        assert_eq!(registry.next_dynamic(), None);
    }

    #[test]
    fn tray_puts_current_first_and_caps_at_five() {
        let mut registry = WallpaperRegistry::default();
        registry.apply(custom("custom-3"));
        let tray = registry.tray_selection(LOGIN_TRAY_LIMIT);
        assert_eq!(
            ids(&tray),
            vec![
                "custom-3",
                "ventura-sky",
                "monterey-waves",
                "sonoma-dunes",
                "night-nebula"
            ]
        );
    }

    #[test]
    fn grid_orders_current_first_without_duplicates() {
        let mut registry = WallpaperRegistry::default();
        registry.apply_id("sonoma-dunes");
        assert_eq!(
            ids(&registry.ordered_for_grid()),
            vec![
                "sonoma-dunes",
                "ventura-sky",
                "monterey-waves",
                "night-nebula",
                "aurora"
            ]
        );
    }

    #[test]
    fn login_cycle_wraps_to_first_entry() {
        let mut registry = WallpaperRegistry::default();
        registry.apply_id("aurora");
        assert_eq!(
            registry.next_for_login().map(|w| w.id),
            Some("ventura-sky".to_string())
        );
    }

    #[test]
    fn reset_keeps_builtin_selection_and_drops_custom() {
        let mut registry = WallpaperRegistry::default();
        registry.apply_id("night-nebula");
        registry.register_custom(custom("custom-4"));
        registry.start_dynamic();

        let active = registry.reset_to_builtins();
        assert_eq!(active.id, "night-nebula");
        assert!(registry.custom().is_none());
        assert!(!registry.dynamic_enabled());

        registry.apply(custom("custom-5"));
        assert_eq!(registry.reset_to_builtins().id, "ventura-sky");
    }

    #[test]
    fn background_style_matches_kind() {
        let registry = WallpaperRegistry::default();
        let aurora = registry.get("aurora").cloned().expect("aurora");
        assert!(background_style(&aurora).starts_with("background:linear-gradient"));
        assert!(background_style(&registry.current()).contains("background-size:cover"));
        assert!(login_palette_style(&aurora).contains("--login-glow:"));
        assert_eq!(login_palette_style(&custom("custom-6")), "");
    }
}
