use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const UNSPLASH_BASE: &str = "https://images.unsplash.com";

#[derive(Debug, Deserialize)]
struct CatalogFile {
    schema_version: u32,
    default: String,
    wallpaper: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    id: String,
    name: String,
    kind: String,
    photo: Option<String>,
    gradient: Option<String>,
    glow: String,
    blur: String,
}

#[derive(Debug, Serialize)]
struct Palette {
    glow: String,
    blur: String,
}

#[derive(Debug, Serialize)]
struct BuiltinWallpaper {
    id: String,
    name: String,
    kind: String,
    value: String,
    thumbnail: Option<String>,
    palette: Palette,
    is_custom: bool,
    is_default: bool,
}

fn resolve(entry: CatalogEntry, default_id: &str) -> BuiltinWallpaper {
    let (value, thumbnail) = match entry.kind.as_str() {
        "image" => {
            let photo = entry
                .photo
                .unwrap_or_else(|| panic!("image wallpaper `{}` is missing `photo`", entry.id));
            (
                format!("{UNSPLASH_BASE}/{photo}?auto=format&fit=crop&w=1920&q=80"),
                Some(format!(
                    "{UNSPLASH_BASE}/{photo}?auto=format&fit=crop&w=600&q=60"
                )),
            )
        }
        "gradient" => (
            entry.gradient.unwrap_or_else(|| {
                panic!("gradient wallpaper `{}` is missing `gradient`", entry.id)
            }),
            None,
        ),
        other => panic!("wallpaper `{}` has unknown kind `{other}`", entry.id),
    };

    BuiltinWallpaper {
        is_default: entry.id == default_id,
        id: entry.id,
        name: entry.name,
        kind: entry.kind,
        value,
        thumbnail,
        palette: Palette {
            glow: entry.glow,
            blur: entry.blur,
        },
        is_custom: false,
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("wallpapers").join("catalog.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: CatalogFile = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if catalog.schema_version != 1 {
        panic!(
            "wallpaper catalog schema mismatch in {}: expected 1 found {}",
            path.display(),
            catalog.schema_version
        );
    }

    let mut seen = BTreeSet::new();
    for entry in &catalog.wallpaper {
        if !seen.insert(entry.id.clone()) {
            panic!("duplicate wallpaper id `{}` in {}", entry.id, path.display());
        }
    }
    if !seen.contains(&catalog.default) {
        panic!(
            "default wallpaper `{}` is not defined in {}",
            catalog.default,
            path.display()
        );
    }

    let default_id = catalog.default.clone();
    let wallpapers: Vec<BuiltinWallpaper> = catalog
        .wallpaper
        .into_iter()
        .map(|entry| resolve(entry, &default_id))
        .collect();
    let json = serde_json::to_string_pretty(&wallpapers).expect("serialize wallpaper catalog");
    let generated = format!(
        "/// Build-time generated built-in wallpaper catalog JSON.\n\
pub const BUILTIN_WALLPAPER_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("wallpaper_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
