//! Configuration data models
//!
//! This module defines the record persisted in `Kardoo.appconfig`.

use serde::{Deserialize, Serialize};

/// Default window width used when nothing has been persisted
pub const DEFAULT_WINDOW_WIDTH: i32 = 1200;
/// Default window height used when nothing has been persisted
pub const DEFAULT_WINDOW_HEIGHT: i32 = 800;

/// Top-level application configuration
///
/// Keys missing from an otherwise valid file decode to zero values, matching
/// what older releases wrote. Only a missing or corrupt file yields
/// [`AppConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Window X position
    #[serde(default)]
    pub window_x: i32,
    /// Window Y position
    #[serde(default)]
    pub window_y: i32,
    /// Window width
    #[serde(default)]
    pub window_width: i32,
    /// Window height
    #[serde(default)]
    pub window_height: i32,
    /// Copy the previous file aside before each vCard save
    #[serde(default)]
    pub backup_on_save: bool,
    /// Backup directory; empty means "next to the saved file"
    #[serde(default)]
    pub backup_dir: String,
    /// UI language tag
    #[serde(default)]
    pub language: String,
}

/// Window position and size as reported by the window manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    /// X position
    pub x: i32,
    /// Y position
    pub y: i32,
    /// Window width
    pub width: i32,
    /// Window height
    pub height: i32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_x: 0,
            window_y: 0,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            backup_on_save: false,
            backup_dir: String::new(),
            language: String::new(),
        }
    }
}

impl AppConfig {
    /// Persisted window geometry
    pub fn geometry(&self) -> WindowGeometry {
        WindowGeometry {
            x: self.window_x,
            y: self.window_y,
            width: self.window_width,
            height: self.window_height,
        }
    }

    /// Replace the persisted window geometry
    pub fn set_geometry(&mut self, geometry: WindowGeometry) {
        self.window_x = geometry.x;
        self.window_y = geometry.y;
        self.window_width = geometry.width;
        self.window_height = geometry.height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window_width, 1200);
        assert_eq!(config.window_height, 800);
        assert_eq!(config.window_x, 0);
        assert_eq!(config.window_y, 0);
        assert!(!config.backup_on_save);
        assert!(config.backup_dir.is_empty());
        assert!(config.language.is_empty());
    }

    #[test]
    fn test_serialized_keys() {
        let json = serde_json::to_value(AppConfig::default()).unwrap();
        let object = json.as_object().unwrap();
        for key in [
            "windowX",
            "windowY",
            "windowWidth",
            "windowHeight",
            "backupOnSave",
            "backupDir",
            "language",
        ] {
            assert!(object.contains_key(key), "missing key {key}");
        }
        assert_eq!(object.len(), 7);
    }

    #[test]
    fn test_missing_keys_decode_to_zero() {
        let config: AppConfig = serde_json::from_str(r#"{"language":"fr"}"#).unwrap();
        assert_eq!(config.window_width, 0);
        assert_eq!(config.window_height, 0);
        assert_eq!(config.language, "fr");
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config: AppConfig =
            serde_json::from_str(r#"{"windowWidth":900,"theme":"dark"}"#).unwrap();
        assert_eq!(config.window_width, 900);
    }

    #[test]
    fn test_geometry_round_trip() {
        let mut config = AppConfig::default();
        let geometry = WindowGeometry {
            x: 10,
            y: 20,
            width: 640,
            height: 480,
        };
        config.set_geometry(geometry);
        assert_eq!(config.geometry(), geometry);
    }
}
