//! Window state tracking across sessions
//!
//! On shutdown the live geometry is captured and saved, unless the size is
//! outside sane bounds (a minimised or collapsed window reports sizes that
//! must not be restored next session). On startup the saved position is
//! reapplied.

use crate::config::{
    AppConfig, ConfigStore, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, WindowGeometry,
};
use crate::error::Result;
use crate::window::WindowManager;
use tracing::{debug, info};

/// Sizes must be strictly greater than this
const MIN_DIMENSION: i32 = 100;
/// Widths must be strictly less than this
const MAX_WIDTH: i32 = 5000;
/// Heights must be strictly less than this
const MAX_HEIGHT: i32 = 3000;

/// Validate a live geometry for persistence
///
/// Returns `None` when width is outside `(100, 5000)` or height outside
/// `(100, 3000)`; the previously persisted geometry is then kept.
pub fn capture(geometry: WindowGeometry) -> Option<WindowGeometry> {
    let width_ok = geometry.width > MIN_DIMENSION && geometry.width < MAX_WIDTH;
    let height_ok = geometry.height > MIN_DIMENSION && geometry.height < MAX_HEIGHT;
    (width_ok && height_ok).then_some(geometry)
}

/// Initial window size for a loaded configuration
///
/// Non-positive persisted dimensions fall back to 1200x800 individually.
pub fn initial_window_size(config: &AppConfig) -> (i32, i32) {
    let width = if config.window_width > 0 {
        config.window_width
    } else {
        DEFAULT_WINDOW_WIDTH
    };
    let height = if config.window_height > 0 {
        config.window_height
    } else {
        DEFAULT_WINDOW_HEIGHT
    };
    (width, height)
}

/// Persists window geometry into a [`ConfigStore`]
#[derive(Debug, Clone)]
pub struct WindowStateTracker {
    store: ConfigStore,
}

impl WindowStateTracker {
    /// Create a tracker saving into `store`
    pub fn new(store: ConfigStore) -> Self {
        Self { store }
    }

    /// Read the live geometry from the window manager
    pub fn current_geometry(window: &impl WindowManager) -> WindowGeometry {
        let (x, y) = window.position();
        let (width, height) = window.size();
        WindowGeometry {
            x,
            y,
            width,
            height,
        }
    }

    /// Load the configuration and move the window to the saved position
    ///
    /// The position is only applied when both coordinates are positive.
    pub fn restore(&self, window: &impl WindowManager) -> AppConfig {
        let config = self.store.load();
        if config.window_x > 0 && config.window_y > 0 {
            debug!(
                "Restoring window position ({}, {})",
                config.window_x, config.window_y
            );
            window.set_position(config.window_x, config.window_y);
        }
        config
    }

    /// Capture the live geometry and save it, at application teardown
    ///
    /// Returns `Ok(false)` when the geometry was rejected and nothing was
    /// saved. Callers at teardown usually discard the result.
    ///
    /// # Errors
    ///
    /// Returns the store's save error.
    pub fn persist_on_shutdown(&self, window: &impl WindowManager) -> Result<bool> {
        let live = Self::current_geometry(window);
        let Some(geometry) = capture(live) else {
            info!(
                "Window size {}x{} out of bounds, keeping saved geometry",
                live.width, live.height
            );
            return Ok(false);
        };

        let mut config = self.store.load();
        config.set_geometry(geometry);
        self.store.save(&config)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG_FILE_NAME;
    use std::cell::Cell;
    use tempfile::TempDir;

    struct FakeWindow {
        position: Cell<(i32, i32)>,
        size: Cell<(i32, i32)>,
        moved: Cell<bool>,
    }

    impl FakeWindow {
        fn new(position: (i32, i32), size: (i32, i32)) -> Self {
            Self {
                position: Cell::new(position),
                size: Cell::new(size),
                moved: Cell::new(false),
            }
        }
    }

    impl WindowManager for FakeWindow {
        fn position(&self) -> (i32, i32) {
            self.position.get()
        }
        fn size(&self) -> (i32, i32) {
            self.size.get()
        }
        fn set_position(&self, x: i32, y: i32) {
            self.position.set((x, y));
            self.moved.set(true);
        }
        fn set_size(&self, width: i32, height: i32) {
            self.size.set((width, height));
        }
        fn minimise(&self) {}
        fn toggle_maximise(&self) {}
        fn quit(&self) {}
    }

    fn create_test_dir() -> TempDir {
        tempfile::tempdir().expect("Failed to create temp directory")
    }

    fn geometry(width: i32, height: i32) -> WindowGeometry {
        WindowGeometry {
            x: 5,
            y: 5,
            width,
            height,
        }
    }

    #[test]
    fn test_capture_bounds() {
        assert!(capture(geometry(1024, 768)).is_some());
        assert!(capture(geometry(101, 101)).is_some());
        assert!(capture(geometry(4999, 2999)).is_some());
        assert!(capture(geometry(100, 768)).is_none());
        assert!(capture(geometry(40, 768)).is_none());
        assert!(capture(geometry(5000, 768)).is_none());
        assert!(capture(geometry(1024, 100)).is_none());
        assert!(capture(geometry(1024, 3000)).is_none());
        assert!(capture(geometry(0, 0)).is_none());
    }

    #[test]
    fn test_initial_window_size() {
        assert_eq!(initial_window_size(&AppConfig::default()), (1200, 800));
        let config = AppConfig {
            window_width: 0,
            window_height: 640,
            ..AppConfig::default()
        };
        assert_eq!(initial_window_size(&config), (1200, 640));
    }

    #[test]
    fn test_persist_on_shutdown_saves_geometry() {
        let dir = create_test_dir();
        let store = ConfigStore::with_path(dir.path().join(CONFIG_FILE_NAME));
        let tracker = WindowStateTracker::new(store.clone());
        let window = FakeWindow::new((30, 60), (1024, 700));

        assert!(tracker.persist_on_shutdown(&window).unwrap());
        let config = store.load();
        assert_eq!(
            config.geometry(),
            WindowGeometry {
                x: 30,
                y: 60,
                width: 1024,
                height: 700
            }
        );
    }

    #[test]
    fn test_persist_on_shutdown_keeps_other_settings() {
        let dir = create_test_dir();
        let store = ConfigStore::with_path(dir.path().join(CONFIG_FILE_NAME));
        let previous = AppConfig {
            backup_on_save: true,
            language: "de".to_string(),
            ..AppConfig::default()
        };
        store.save(&previous).unwrap();

        let tracker = WindowStateTracker::new(store.clone());
        tracker
            .persist_on_shutdown(&FakeWindow::new((1, 2), (800, 600)))
            .unwrap();
        let config = store.load();
        assert!(config.backup_on_save);
        assert_eq!(config.language, "de");
        assert_eq!(config.window_width, 800);
    }

    #[test]
    fn test_small_width_keeps_persisted_width() {
        let dir = create_test_dir();
        let store = ConfigStore::with_path(dir.path().join(CONFIG_FILE_NAME));
        let previous = AppConfig {
            window_x: 10,
            window_y: 10,
            window_width: 1300,
            window_height: 900,
            ..AppConfig::default()
        };
        store.save(&previous).unwrap();

        let tracker = WindowStateTracker::new(store.clone());
        let saved = tracker
            .persist_on_shutdown(&FakeWindow::new((50, 50), (40, 900)))
            .unwrap();
        assert!(!saved);
        assert_eq!(store.load(), previous);
    }

    #[test]
    fn test_restore_applies_positive_position() {
        let dir = create_test_dir();
        let store = ConfigStore::with_path(dir.path().join(CONFIG_FILE_NAME));
        store
            .save(&AppConfig {
                window_x: 200,
                window_y: 150,
                ..AppConfig::default()
            })
            .unwrap();

        let window = FakeWindow::new((0, 0), (1200, 800));
        let config = WindowStateTracker::new(store).restore(&window);
        assert_eq!(config.window_x, 200);
        assert_eq!(window.position(), (200, 150));
    }

    #[test]
    fn test_restore_ignores_non_positive_position() {
        let dir = create_test_dir();
        let store = ConfigStore::with_path(dir.path().join(CONFIG_FILE_NAME));
        store
            .save(&AppConfig {
                window_x: 200,
                window_y: 0,
                ..AppConfig::default()
            })
            .unwrap();

        let window = FakeWindow::new((0, 0), (1200, 800));
        WindowStateTracker::new(store).restore(&window);
        assert!(!window.moved.get());
    }
}
