use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::matrix::MatrixVariant;
use crate::text::INITIAL_CAPACITY;

/// Returns the path to the settings file: `~/.config/lab-figures/settings.json`
pub fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("lab-figures");
    path.push("settings.json");
    path
}

/// Optional tool settings.
///
/// Read as JSON from the platform config directory; never written back.
/// Fields use `#[serde(default)]` so a partial file only overrides
/// the keys it names.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    // Matrix
    pub matrix_variant: MatrixVariant,

    // Text
    pub line_capacity: usize,

    // Figures report
    pub precision: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            matrix_variant: MatrixVariant::Spiral,
            line_capacity: INITIAL_CAPACITY,
            precision: 3,
        }
    }
}

impl AppSettings {
    /// Load settings from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        Self::load_from(&settings_path())
    }

    /// Load settings from `path`, falling back to defaults on any error.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Failed to parse settings ({}), using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Parse settings from JSON text, clamping out-of-range values.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.line_capacity = settings.line_capacity.max(1);
        Ok(settings)
    }
}
