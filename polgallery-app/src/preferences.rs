use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

/// Narrowest and widest gallery card, in points.
pub const THUMBNAIL_WIDTH_RANGE: std::ops::RangeInclusive<f32> = 96.0..=320.0;

/// Settings that survive restarts.
///
/// Filter values and the comparison selection are deliberately absent: every
/// session starts with an unfiltered gallery and an empty panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppPreferences {
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
    /// Directory holding the `I/`, `lp/`, `cp/` and `evpa/` folders.
    /// When empty, the current working directory is used.
    #[serde(default)]
    pub asset_root: String,
    #[serde(default = "default_thumbnail_width")]
    pub thumbnail_width: f32,
}

fn default_window_width() -> f32 {
    1400.0
}
fn default_window_height() -> f32 {
    900.0
}
fn default_thumbnail_width() -> f32 {
    160.0
}

impl Default for AppPreferences {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            asset_root: String::new(),
            thumbnail_width: default_thumbnail_width(),
        }
    }
}

impl AppPreferences {
    /// Load preferences from the OS config directory, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(json) => match Self::from_json(&json) {
                    Ok(prefs) => {
                        info!("Loaded preferences from {}", path.display());
                        return prefs;
                    }
                    Err(e) => {
                        error!("Failed to parse preferences: {e}");
                    }
                },
                Err(e) => {
                    error!("Failed to read preferences file: {e}");
                }
            }
        } else {
            debug!("No preferences file at {}", path.display());
        }
        Self::default()
    }

    /// Persist preferences to disk.
    pub fn save(&self) {
        let path = config_path();
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                error!("Failed to create config directory: {e}");
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(&path, &json) {
                    error!("Failed to write preferences: {e}");
                } else {
                    debug!("Saved preferences");
                }
            }
            Err(e) => error!("Failed to serialize preferences: {e}"),
        }
    }

    fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut prefs: Self = serde_json::from_str(json)?;
        prefs.thumbnail_width = prefs
            .thumbnail_width
            .clamp(*THUMBNAIL_WIDTH_RANGE.start(), *THUMBNAIL_WIDTH_RANGE.end());
        Ok(prefs)
    }

    /// The asset root as a path, resolving the empty default.
    pub fn asset_root_path(&self) -> PathBuf {
        let trimmed = self.asset_root.trim();
        if trimmed.is_empty() {
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
        } else {
            PathBuf::from(trimmed)
        }
    }
}

fn config_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "PolGallery")
        .map(|d| d.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
        .join("preferences.json")
}
