//! User settings for the field guide tools.
//!
//! Settings live in a small JSON file (`~/.config/fieldguide/settings.json` on most platforms,
//! or wherever `FIELDGUIDE_CONFIG_PATH` points). A missing file means defaults; a malformed file
//! is reported and ignored so the guides keep working.

use std::{fs, path::PathBuf};

use fieldguide_util::{config_file_path, expand_tilde};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{catalog::GuideCatalog, error::CatalogError};

/// Environment variable allowing callers to override the settings file path.
pub const SETTINGS_PATH_ENV: &str = "FIELDGUIDE_CONFIG_PATH";

/// Default filename for the JSON payload.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideSettings {
    /// Extra catalogs layered over the built-in one, in order. Later files win.
    #[serde(default)]
    pub overlay_catalogs: Vec<String>,
    /// Column width used when rendering guides in a terminal.
    #[serde(default)]
    pub wrap_width: Option<usize>,
}

impl GuideSettings {
    /// Loads settings from [`default_settings_path`].
    pub fn load() -> Self {
        Self::load_from(default_settings_path())
    }

    /// Loads settings from an explicit path, falling back to defaults on any problem.
    pub fn load_from(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let Ok(content) = fs::read_to_string(&path) else {
            debug!(path = %path.display(), "no guide settings file; using defaults");
            return Self::default();
        };
        match serde_json::from_str(&content) {
            Ok(settings) => settings,
            Err(error) => {
                warn!(path = %path.display(), %error, "ignoring malformed guide settings");
                Self::default()
            }
        }
    }

    /// Overlay catalog paths with `~` expanded.
    pub fn overlay_paths(&self) -> Vec<PathBuf> {
        self.overlay_catalogs.iter().map(|path| expand_tilde(path)).collect()
    }

    /// Builds the effective catalog: the built-in catalog with every overlay merged in order.
    pub fn load_catalog(&self) -> Result<GuideCatalog, CatalogError> {
        let mut catalog = GuideCatalog::builtin().clone();
        for path in self.overlay_paths() {
            let overlay = GuideCatalog::from_path(&path).map_err(|source| CatalogError::Overlay {
                path: path.clone(),
                source: Box::new(source),
            })?;
            debug!(path = %path.display(), entries = overlay.len(), "merged overlay catalog");
            catalog.merge(overlay);
        }
        Ok(catalog)
    }
}

/// Get the default path for the settings file.
pub fn default_settings_path() -> PathBuf {
    config_file_path(SETTINGS_PATH_ENV, "fieldguide", SETTINGS_FILE_NAME)
}
