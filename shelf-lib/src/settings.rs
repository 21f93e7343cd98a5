//! Persistent settings: catalog location and the last browsing position.
//!
//! Stored as `~/.config/shelf/settings.toml`. Missing or unreadable files
//! fall back to defaults so a broken config never prevents browsing.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ShelfSettings {
    #[serde(default)]
    pub library: LibrarySettings,
    #[serde(default)]
    pub memory: MemorySettings,
    #[serde(default)]
    pub general: GeneralSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LibrarySettings {
    pub catalog_path: Option<PathBuf>,
}

/// Where the user was when the shelf was last closed or a game was launched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MemorySettings {
    /// Filter slug, e.g. `"favorites"`.
    pub last_filter: Option<String>,
    /// Catalog index of the last selected game.
    pub last_game_index: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralSettings {
    #[serde(default = "default_true")]
    pub restore_last_filter: bool,
}

fn default_true() -> bool {
    true
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            restore_last_filter: true,
        }
    }
}

/// Canonical path to the settings file: `~/.config/shelf/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("shelf").join("settings.toml")
}

/// Load settings from [`settings_path`].
pub fn load_settings() -> ShelfSettings {
    load_settings_from(&settings_path())
}

/// Load settings from `path`, returning defaults if missing or corrupt.
pub fn load_settings_from(path: &Path) -> ShelfSettings {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            log::warn!("Failed to parse settings at {}: {}", path.display(), e);
            ShelfSettings::default()
        }),
        Err(_) => ShelfSettings::default(),
    }
}

/// Save settings to [`settings_path`].
pub fn save_settings(settings: &ShelfSettings) -> io::Result<()> {
    save_settings_to(&settings_path(), settings)
}

/// Save settings to `path` atomically (write to temp, then rename).
pub fn save_settings_to(path: &Path, settings: &ShelfSettings) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(settings).map_err(io::Error::other)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, contents)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

/// Resolve the catalog path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `library.catalog_path`
/// 3. `catalog.yaml` in the current directory
pub fn resolve_catalog_path(cli_override: Option<PathBuf>, settings: &ShelfSettings) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = &settings.library.catalog_path {
        return p.clone();
    }
    PathBuf::from("catalog.yaml")
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
