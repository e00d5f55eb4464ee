//! File-choice dialog capability
//!
//! The backend never prompts on its own: the GUI shell hands in a
//! [`FileDialogs`] implementation at construction. Every method returns
//! `None` when the user cancels, which callers treat as a successful no-op.

#[cfg(windows)]
pub mod native;

#[cfg(windows)]
pub use native::RfdDialogs;

use std::path::PathBuf;

/// Extension filter shown in a file dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    /// Label, e.g. `vCard (*.vcf)`
    pub name: String,
    /// Extensions without the leading dot
    pub extensions: Vec<String>,
}

impl FileFilter {
    /// Build a filter from a label and dot-less extensions
    pub fn new(name: impl Into<String>, extensions: &[&str]) -> Self {
        Self {
            name: name.into(),
            extensions: extensions.iter().map(|ext| (*ext).to_string()).collect(),
        }
    }

    /// Glob pattern for the filter, e.g. `*.jpg;*.png`
    pub fn pattern(&self) -> String {
        self.extensions
            .iter()
            .map(|ext| format!("*.{ext}"))
            .collect::<Vec<_>>()
            .join(";")
    }
}

/// Open/save/directory dialogs supplied by the presentation layer
pub trait FileDialogs {
    /// Ask for an existing file to open
    fn open_file(&self, title: &str, filters: &[FileFilter]) -> Option<PathBuf>;

    /// Ask for a destination file, pre-filled with `default_name`
    fn save_file(&self, title: &str, default_name: &str, filters: &[FileFilter])
    -> Option<PathBuf>;

    /// Ask for a directory
    fn choose_directory(&self, title: &str) -> Option<PathBuf>;
}
