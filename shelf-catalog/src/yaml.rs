//! YAML loading for game catalogs.
//!
//! A catalog is either a single file:
//! ```yaml
//! collections: [SNES, Genesis]
//! games:
//!   - title: "Super Game (USA) (Rev 1) [!]"
//!     sort_key: super game
//!     favorite: true
//!     play_count: 3
//!     play_time: 5400
//!     last_played: 2024-05-01T12:00:00Z
//!     collections: [SNES]
//! ```
//! or a directory of `.yaml`/`.yml` files, each holding a list of games.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Catalog;
use crate::types::{Collection, GameRecord};

#[derive(Debug, Error)]
pub enum YamlError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
    #[error("Catalog not found: {0}")]
    NotFound(String),
}

/// On-disk shape of a single-file catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub collections: Vec<Collection>,
    #[serde(default)]
    pub games: Vec<GameRecord>,
}

impl CatalogFile {
    pub fn into_catalog(self) -> Catalog {
        let mut catalog = Catalog::new();
        for collection in self.collections {
            catalog.add_collection(collection);
        }
        for game in self.games {
            catalog.push(game);
        }
        catalog
    }
}

/// Parse a single-file catalog from a YAML string.
pub fn parse_catalog(contents: &str) -> Result<Catalog, serde_yml::Error> {
    let file: CatalogFile = serde_yml::from_str(contents)?;
    Ok(file.into_catalog())
}

/// Load a catalog from a YAML file or a directory of YAML files.
///
/// A directory that does not exist yields an empty catalog; a missing file
/// is an error.
pub fn load_catalog(path: &Path) -> Result<Catalog, YamlError> {
    if path.is_dir() {
        return load_catalog_dir(path);
    }
    if !path.exists() {
        if path.extension().is_none() {
            return Ok(Catalog::new());
        }
        return Err(YamlError::NotFound(path.display().to_string()));
    }

    let contents = read(path)?;
    let file: CatalogFile = serde_yml::from_str(&contents).map_err(|e| YamlError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;
    log::debug!(
        "Loaded {} games from {}",
        file.games.len(),
        path.display()
    );
    Ok(file.into_catalog())
}

/// Load every `.yaml`/`.yml` file in `dir` (sorted by name), each holding a
/// list of games, into one catalog.
fn load_catalog_dir(dir: &Path) -> Result<Catalog, YamlError> {
    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .map_err(|e| YamlError::Io {
            path: dir.display().to_string(),
            source: e,
        })?
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
        })
        .collect();
    entries.sort_by_key(|e| e.file_name());

    let mut catalog = Catalog::new();
    for entry in entries {
        let path = entry.path();
        let contents = read(&path)?;
        let games: Vec<GameRecord> =
            serde_yml::from_str(&contents).map_err(|e| YamlError::Parse {
                path: path.display().to_string(),
                source: e,
            })?;
        log::debug!("Loaded {} games from {}", games.len(), path.display());
        for game in games {
            catalog.push(game);
        }
    }

    Ok(catalog)
}

fn read(path: &Path) -> Result<String, YamlError> {
    std::fs::read_to_string(path).map_err(|e| YamlError::Io {
        path: path.display().to_string(),
        source: e,
    })
}
