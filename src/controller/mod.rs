//! Application controller module
//!
//! The controller is the surface the GUI shell binds to. It forwards user
//! actions to the persistence layer:
//!
//! ```text
//! GUI action → AppController → FileDialogs (choose path)
//!                   ↓
//!   FileWriter / BatchExporter / ConfigStore → disk
//! ```
//!
//! Dialog cancellation is reported as `Ok(None)`, never as an error.

pub mod app_controller;

pub use app_controller::{AppController, DEFAULT_VCARD_FILE_NAME, OpenedFile};
