//! Backup-before-write policy
//!
//! Before a vCard file is overwritten, the previous content can be copied to
//! `<stem>_backup_<YYYYMMDD_HHMMSS><ext>` in a backup directory. Backups are
//! advisory: every failure is reported through [`BackupOutcome`] and never
//! turned into an error for the save that triggered it.
//!
//! Timestamps have one-second granularity, so two saves within the same
//! second write to the same backup name and the second one wins.

use crate::config::AppConfig;
use crate::error::KardooError;
use chrono::{Local, NaiveDateTime};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// `chrono` format of the timestamp embedded in backup filenames
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Whether and where a pre-overwrite copy is made
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackupDirective {
    /// Make a backup at all
    pub enabled: bool,
    /// Backup directory; `None` means the directory of the target file
    pub target_dir: Option<PathBuf>,
}

impl BackupDirective {
    /// Directive that never backs up
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Directive that backs up next to the target file
    pub fn beside_target() -> Self {
        Self {
            enabled: true,
            target_dir: None,
        }
    }

    /// Directive that backs up into `dir`
    pub fn into_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            enabled: true,
            target_dir: Some(dir.into()),
        }
    }

    /// Derive the directive from the persisted settings
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            enabled: config.backup_on_save,
            target_dir: (!config.backup_dir.is_empty()).then(|| PathBuf::from(&config.backup_dir)),
        }
    }

    /// Directory the backup of `target` goes into
    pub fn resolve_dir(&self, target: &Path) -> PathBuf {
        match &self.target_dir {
            Some(dir) if !dir.as_os_str().is_empty() => dir.clone(),
            _ => target
                .parent()
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf),
        }
    }
}

/// Result of a best-effort backup attempt
#[derive(Debug)]
pub enum BackupOutcome {
    /// Backup disabled or no target path given
    Skipped,
    /// Target does not exist yet, nothing to back up
    SourceMissing,
    /// Backup written to the contained path
    Created(PathBuf),
    /// Backup abandoned; the save itself must still proceed
    Failed(KardooError),
}

impl BackupOutcome {
    /// Path of the backup file, if one was written
    pub fn created_path(&self) -> Option<&Path> {
        match self {
            Self::Created(path) => Some(path),
            _ => None,
        }
    }
}

/// Split a file name into stem and extension the way backups name them
///
/// The extension is everything from the last `.` (inclusive); a name
/// without a dot has an empty extension.
fn split_extension(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(idx) => file_name.split_at(idx),
        None => (file_name, ""),
    }
}

/// Compute the backup path for `target` inside `backup_dir` at `timestamp`
pub fn backup_path(target: &Path, backup_dir: &Path, timestamp: NaiveDateTime) -> PathBuf {
    let file_name = target
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let (stem, ext) = split_extension(&file_name);
    backup_dir.join(format!(
        "{stem}_backup_{}{ext}",
        timestamp.format(BACKUP_TIMESTAMP_FORMAT)
    ))
}

/// Back up `target` according to `directive` using the local clock
pub fn maybe_backup(target: &Path, directive: &BackupDirective) -> BackupOutcome {
    maybe_backup_at(target, directive, Local::now().naive_local())
}

/// Back up `target` according to `directive` with an explicit clock reading
pub fn maybe_backup_at(
    target: &Path,
    directive: &BackupDirective,
    now: NaiveDateTime,
) -> BackupOutcome {
    if !directive.enabled || target.as_os_str().is_empty() {
        return BackupOutcome::Skipped;
    }

    let dir = directive.resolve_dir(target);
    if let Err(e) = std::fs::create_dir_all(&dir) {
        warn!("Backup directory {} unavailable: {}", dir.display(), e);
        return BackupOutcome::Failed(KardooError::io(&dir, e));
    }

    let data = match std::fs::read(target) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No previous {} to back up", target.display());
            return BackupOutcome::SourceMissing;
        }
        Err(e) => {
            warn!("Cannot read {} for backup: {}", target.display(), e);
            return BackupOutcome::Failed(KardooError::io(target, e));
        }
    };

    let path = backup_path(target, &dir, now);
    match std::fs::write(&path, data) {
        Ok(()) => {
            info!("Backup written to {}", path.display());
            BackupOutcome::Created(path)
        }
        Err(e) => {
            warn!("Failed to write backup {}: {}", path.display(), e);
            BackupOutcome::Failed(KardooError::io(&path, e))
        }
    }
}
