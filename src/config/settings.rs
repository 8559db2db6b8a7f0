//! User settings for Archive Our Youth
//!
//! Manages display preferences, gallery defaults and the consent form link
//! shown on the review screen.

use serde::{Deserialize, Serialize};

use super::paths::ArchivePaths;
use crate::error::ArchiveError;
use crate::models::GallerySort;

/// Default link to the full research consent form
pub const DEFAULT_CONSENT_FORM_URL: &str =
    "https://docs.google.com/document/d/185IyM9Cic-vpMK7yqYLXR0s-YfJrhaSY/edit";

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Sort order used by the gallery when none is given
    #[serde(default)]
    pub default_sort: GallerySort,

    /// Maximum number of posts listed by the gallery
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Link to the full consent form
    #[serde(default = "default_consent_form_url")]
    pub consent_form_url: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_page_size() -> usize {
    50
}

fn default_consent_form_url() -> String {
    DEFAULT_CONSENT_FORM_URL.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            date_format: default_date_format(),
            default_sort: GallerySort::default(),
            page_size: default_page_size(),
            consent_form_url: default_consent_form_url(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ArchivePaths) -> Result<Self, ArchiveError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ArchiveError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ArchiveError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Not persisted until the caller decides to save
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ArchivePaths) -> Result<(), ArchiveError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ArchiveError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ArchiveError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
