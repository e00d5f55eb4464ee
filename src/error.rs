//! Error types for the `Kardoo` persistence backend
//!
//! Configuration loading and backups never surface errors to the caller; the
//! variants below are what explicit save, export and open operations return.
//! Dialog cancellation is not an error: those operations return `Ok(None)`.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for the `Kardoo` backend
#[derive(Debug, Error)]
pub enum KardooError {
    /// The running executable's location (and so the config path) is unknown
    #[error("Cannot resolve configuration path: {0}")]
    PathResolution(#[source] std::io::Error),

    /// Configuration JSON could not be decoded or encoded
    #[error("Configuration JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Read, write or mkdir failure on a specific path
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        /// File or directory the operation was acting on
        path: PathBuf,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },

    /// A data-URI payload did not contain valid base64
    #[error("Invalid base64 payload: {0}")]
    InvalidPayload(#[from] base64::DecodeError),

    /// Logging subscriber or file appender could not be installed
    #[error("Failed to initialize logging: {0}")]
    Logging(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl KardooError {
    /// Wrap an IO error together with the path it occurred on
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Path named by an `Io` error, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Result type alias for `Kardoo` operations
pub type Result<T> = std::result::Result<T, KardooError>;

/// Convert an error to a message suitable for a GUI error box
pub fn get_user_friendly_error(error: &KardooError) -> String {
    match error {
        KardooError::PathResolution(_) => "Unable to locate the application folder.\n\n\
             Settings cannot be saved next to the program.\n\
             Default settings will be used for this session."
            .to_string(),
        KardooError::Json(e) => {
            format!(
                "The settings file could not be read or written:\n\n{e}\n\n\
                 Default settings will be used."
            )
        }
        KardooError::Io { path, source } => {
            format!(
                "A file system error occurred on:\n{}\n\n{source}\n\n\
                 Please check file permissions and disk space.",
                path.display()
            )
        }
        KardooError::InvalidPayload(_) => "The media data is corrupted.\n\n\
             Try selecting the picture or sound again."
            .to_string(),
        KardooError::Logging(_) => "Logging could not be started.\n\n\
             The application keeps working but no log file is written."
            .to_string(),
    }
}
