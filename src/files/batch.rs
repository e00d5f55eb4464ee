//! Batch export of many files into one directory
//!
//! Entries are written in filename order and the first failure stops the
//! batch. Files already written stay on disk; the returned error names the
//! file that failed.

use crate::error::{KardooError, Result};
use std::collections::BTreeMap;
use std::path::{Component, Path};
use tracing::{debug, info};

/// Relative filename to content, written into a single directory
pub type BatchExportSet = BTreeMap<String, Vec<u8>>;

/// Writes a [`BatchExportSet`] into a destination directory
pub struct BatchExporter;

impl BatchExporter {
    /// Write every entry of `files` under `dest_dir`
    ///
    /// Returns the number of files written.
    ///
    /// # Errors
    ///
    /// Returns `KardooError::Io` for the first entry that cannot be written,
    /// including names that are absolute or climb out of `dest_dir`.
    pub fn export_all(dest_dir: &Path, files: &BatchExportSet) -> Result<usize> {
        let mut written = 0;
        for (name, content) in files {
            let path = dest_dir.join(name);
            if !is_contained(Path::new(name)) {
                return Err(KardooError::io(
                    &path,
                    std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        "export name must stay inside the destination directory",
                    ),
                ));
            }
            std::fs::write(&path, content).map_err(|e| KardooError::io(&path, e))?;
            debug!("Exported {}", path.display());
            written += 1;
        }
        info!("Exported {} files to {}", written, dest_dir.display());
        Ok(written)
    }
}

/// Whether a relative name resolves inside the directory it is joined to
fn is_contained(name: &Path) -> bool {
    !name.as_os_str().is_empty()
        && name
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}
