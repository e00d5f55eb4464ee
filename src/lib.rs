//! `Kardoo` - persistence backend of a desktop contact-card manager
//!
//! Loads and saves the application configuration beside the executable,
//! backs up vCard files before they are overwritten, and exports contact data
//! to single files or whole directories. Content is always an opaque payload:
//! nothing here parses vCard, JSON, CSV or XML.
//!
//! Dialogs and window control are capabilities ([`dialogs::FileDialogs`],
//! [`window::WindowManager`]) passed to [`controller::AppController`] by the
//! GUI shell. All operations are synchronous and run on the calling thread.

// Module declarations
pub mod config;
pub mod controller;
pub mod dialogs;
pub mod error;
pub mod export;
pub mod files;
pub mod utils;
pub mod window;

// Re-export commonly used types
pub use error::{KardooError, Result};
