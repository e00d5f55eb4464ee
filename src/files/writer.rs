//! Single-file writes with optional backup of the previous content

use crate::error::{KardooError, Result};
use crate::files::backup::{self, BackupDirective, BackupOutcome};
use std::path::Path;
use tracing::{debug, info};

/// Writes user files verbatim, replacing existing content
pub struct FileWriter;

impl FileWriter {
    /// Write `content` to `path`
    ///
    /// An empty path is a no-op: it means no destination was chosen.
    ///
    /// # Errors
    ///
    /// Returns `KardooError::Io` on any OS-level write failure.
    pub fn write(path: &Path, content: &[u8]) -> Result<()> {
        if path.as_os_str().is_empty() {
            debug!("No destination chosen, nothing written");
            return Ok(());
        }
        std::fs::write(path, content).map_err(|e| KardooError::io(path, e))?;
        info!("Wrote {} bytes to {}", content.len(), path.display());
        Ok(())
    }

    /// Back up the existing file per `directive`, then write `content`
    ///
    /// The backup outcome is returned for inspection; a failed backup never
    /// prevents the write.
    ///
    /// # Errors
    ///
    /// Returns `KardooError::Io` if the write itself fails.
    pub fn write_with_backup(
        path: &Path,
        content: &[u8],
        directive: &BackupDirective,
    ) -> Result<BackupOutcome> {
        if path.as_os_str().is_empty() {
            return Ok(BackupOutcome::Skipped);
        }
        let outcome = backup::maybe_backup(path, directive);
        Self::write(path, content)?;
        Ok(outcome)
    }
}
