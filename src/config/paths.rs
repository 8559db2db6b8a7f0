//! Path management for Archive Our Youth
//!
//! Provides XDG-compliant path resolution for configuration, data, and uploads.
//!
//! ## Path Resolution Order
//!
//! 1. `ARCHIVE_OUR_YOUTH_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/archive-our-youth` or `~/.config/archive-our-youth`
//! 3. Windows: `%APPDATA%\archive-our-youth`

use std::path::PathBuf;

use crate::error::ArchiveError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "ARCHIVE_OUR_YOUTH_DATA_DIR";

/// Manages all paths used by the archive
#[derive(Debug, Clone)]
pub struct ArchivePaths {
    /// Base directory for all archive data
    base_dir: PathBuf,
}

impl ArchivePaths {
    /// Create a new ArchivePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ArchiveError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ArchivePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the uploads directory (`<base>/uploads/`)
    pub fn uploads_dir(&self) -> PathBuf {
        self.base_dir.join("uploads")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to posts.json
    pub fn posts_file(&self) -> PathBuf {
        self.data_dir().join("posts.json")
    }

    /// Get the path to users.json
    pub fn users_file(&self) -> PathBuf {
        self.data_dir().join("users.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), ArchiveError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ArchiveError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| ArchiveError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.uploads_dir()).map_err(|e| {
            ArchiveError::Io(format!("Failed to create uploads directory: {}", e))
        })?;

        Ok(())
    }

    /// Check if the archive has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, ArchiveError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                ArchiveError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("archive-our-youth"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, ArchiveError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| ArchiveError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("archive-our-youth"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ArchivePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.uploads_dir(), temp_dir.path().join("uploads"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        std::env::set_var(DATA_DIR_ENV, custom_path);
        let paths = ArchivePaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        std::env::remove_var(DATA_DIR_ENV);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ArchivePaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(paths.uploads_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ArchivePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.posts_file(),
            temp_dir.path().join("data").join("posts.json")
        );
        assert_eq!(
            paths.users_file(),
            temp_dir.path().join("data").join("users.json")
        );
    }
}
