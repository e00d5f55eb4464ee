//! Configuration store for loading and saving application configuration
//!
//! The configuration file sits beside the running executable under the fixed
//! name [`CONFIG_FILE_NAME`]. Saves are atomic: the JSON is written to a
//! temporary file in the same directory, then persisted over the destination.

use crate::config::models::AppConfig;
use crate::error::{KardooError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Fixed configuration filename, kept for compatibility with existing installs
pub const CONFIG_FILE_NAME: &str = "Kardoo.appconfig";

/// Configuration store bound to a single file path
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Resolve the configuration path beside the running executable
    ///
    /// # Errors
    ///
    /// Returns `KardooError::PathResolution` if the executable location cannot
    /// be determined.
    pub fn config_path() -> Result<PathBuf> {
        let exe = std::env::current_exe().map_err(KardooError::PathResolution)?;
        let dir = exe.parent().ok_or_else(|| {
            KardooError::PathResolution(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "executable has no parent directory",
            ))
        })?;
        Ok(dir.join(CONFIG_FILE_NAME))
    }

    /// Create a store at the default location beside the executable
    ///
    /// # Errors
    ///
    /// Returns `KardooError::PathResolution` if the executable location cannot
    /// be determined.
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: Self::config_path()?,
        })
    }

    /// Create a store pinned to an explicit file path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing configuration file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load configuration from the default location, never failing
    ///
    /// Falls back to [`AppConfig::default`] when the path cannot be resolved.
    pub fn load_or_default() -> AppConfig {
        match Self::new() {
            Ok(store) => store.load(),
            Err(e) => {
                warn!("Configuration path unavailable, using defaults: {}", e);
                AppConfig::default()
            }
        }
    }

    /// Load configuration from disk
    ///
    /// A missing, unreadable or corrupt file yields the default configuration.
    pub fn load(&self) -> AppConfig {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("Configuration file not found, using defaults");
                return AppConfig::default();
            }
            Err(e) => {
                warn!(
                    "Failed to read configuration {}, using defaults: {}",
                    self.path.display(),
                    e
                );
                return AppConfig::default();
            }
        };

        match serde_json::from_str(&json) {
            Ok(config) => {
                debug!("Configuration loaded from {}", self.path.display());
                config
            }
            Err(e) => {
                warn!("Failed to parse configuration, using defaults: {}", e);
                AppConfig::default()
            }
        }
    }

    /// Save configuration to disk, replacing any prior content
    ///
    /// # Errors
    ///
    /// Returns `KardooError::Io` if the directory cannot be created or the file
    /// cannot be written, and `KardooError::Json` if encoding fails.
    pub fn save(&self, config: &AppConfig) -> Result<()> {
        let config_dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&config_dir).map_err(|e| KardooError::io(&config_dir, e))?;

        let json = serde_json::to_string_pretty(config)?;

        let mut temp =
            NamedTempFile::new_in(&config_dir).map_err(|e| KardooError::io(&config_dir, e))?;
        if let Err(e) = temp.write_all(json.as_bytes()) {
            return Err(KardooError::io(temp.path(), e));
        }
        temp.persist(&self.path)
            .map_err(|e| KardooError::io(&self.path, e.error))?;

        info!("Configuration saved to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        tempfile::tempdir().expect("Failed to create temp directory")
    }

    fn sample_config() -> AppConfig {
        AppConfig {
            window_x: 120,
            window_y: 45,
            window_width: 1440,
            window_height: 900,
            backup_on_save: true,
            backup_dir: "/home/user/backups".to_string(),
            language: "fr".to_string(),
        }
    }

    #[test]
    fn test_config_path_beside_executable() {
        let path = ConfigStore::config_path().unwrap();
        let exe = std::env::current_exe().unwrap();
        assert_eq!(path.parent(), exe.parent());
        assert!(path.ends_with(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_load_missing_config() {
        let dir = create_test_dir();
        let store = ConfigStore::with_path(dir.path().join(CONFIG_FILE_NAME));
        assert_eq!(store.load(), AppConfig::default());
    }

    #[test]
    fn test_load_corrupt_config() {
        let dir = create_test_dir();
        let path = dir.path().join(CONFIG_FILE_NAME);
        for garbage in ["", "{", "not json", "null", "42", r#"{"windowWidth":"wide"}"#] {
            std::fs::write(&path, garbage).unwrap();
            let store = ConfigStore::with_path(&path);
            assert_eq!(store.load(), AppConfig::default(), "input: {garbage:?}");
        }
    }

    #[test]
    fn test_load_unreadable_path_is_default() {
        let dir = create_test_dir();
        // A directory in place of the file cannot be read as text
        let store = ConfigStore::with_path(dir.path());
        assert_eq!(store.load(), AppConfig::default());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = create_test_dir();
        let store = ConfigStore::with_path(dir.path().join(CONFIG_FILE_NAME));
        let config = sample_config();
        store.save(&config).unwrap();
        assert_eq!(store.load(), config);
    }

    #[test]
    fn test_save_replaces_previous_content() {
        let dir = create_test_dir();
        let store = ConfigStore::with_path(dir.path().join(CONFIG_FILE_NAME));
        store.save(&sample_config()).unwrap();
        store.save(&AppConfig::default()).unwrap();
        assert_eq!(store.load(), AppConfig::default());
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let dir = create_test_dir();
        let path = dir.path().join("nested").join("deeper").join(CONFIG_FILE_NAME);
        let store = ConfigStore::with_path(&path);
        store.save(&sample_config()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_is_indented_json() {
        let dir = create_test_dir();
        let path = dir.path().join(CONFIG_FILE_NAME);
        ConfigStore::with_path(&path)
            .save(&AppConfig::default())
            .unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n  \"windowWidth\": 1200"));
        assert!(text.contains("\"backupOnSave\": false"));
    }

    #[test]
    fn test_save_fails_when_directory_is_a_file() {
        let dir = create_test_dir();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let store = ConfigStore::with_path(blocker.join(CONFIG_FILE_NAME));
        let err = store.save(&AppConfig::default()).unwrap_err();
        assert!(matches!(err, KardooError::Io { .. }));
    }

    // Property-based tests using proptest
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any file content loads without panicking
            #[test]
            fn load_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
                let dir = create_test_dir();
                let path = dir.path().join(CONFIG_FILE_NAME);
                std::fs::write(&path, &bytes).unwrap();
                let _config = ConfigStore::with_path(&path).load();
            }

            /// Property: saved configurations load back unchanged
            #[test]
            fn save_then_load_is_identity(
                x in any::<i32>(),
                y in any::<i32>(),
                width in any::<i32>(),
                height in any::<i32>(),
                backup_on_save in any::<bool>(),
                backup_dir in "[a-zA-Z0-9/_ .-]{0,24}",
                language in "[a-z]{0,3}",
            ) {
                let dir = create_test_dir();
                let store = ConfigStore::with_path(dir.path().join(CONFIG_FILE_NAME));
                let config = AppConfig {
                    window_x: x,
                    window_y: y,
                    window_width: width,
                    window_height: height,
                    backup_on_save,
                    backup_dir,
                    language,
                };
                store.save(&config).unwrap();
                prop_assert_eq!(store.load(), config);
            }
        }
    }
}
