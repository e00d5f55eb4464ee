//! File persistence for user data
//!
//! Provides the backup-before-write policy, single-file writes and batch
//! export into a directory. Content is treated as opaque bytes throughout.

pub mod backup;
pub mod batch;
pub mod writer;

pub use backup::{BackupDirective, BackupOutcome, backup_path, maybe_backup, maybe_backup_at};
pub use batch::{BatchExportSet, BatchExporter};
pub use writer::FileWriter;
