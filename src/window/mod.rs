//! Window geometry persistence
//!
//! The window manager is a capability handed in by the GUI shell; the tracker
//! reads geometry from it on shutdown and restores it on startup.

pub mod tracker;

pub use tracker::{WindowStateTracker, capture, initial_window_size};

/// Window control supplied by the presentation layer
pub trait WindowManager {
    /// Current window position as `(x, y)`
    fn position(&self) -> (i32, i32);

    /// Current window size as `(width, height)`
    fn size(&self) -> (i32, i32);

    /// Move the window
    fn set_position(&self, x: i32, y: i32);

    /// Resize the window
    fn set_size(&self, width: i32, height: i32);

    /// Minimise the window
    fn minimise(&self);

    /// Toggle between maximised and normal size
    fn toggle_maximise(&self);

    /// Ask the application to quit
    fn quit(&self);
}
