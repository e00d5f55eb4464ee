//! Export naming policy
//!
//! Maps a logical export kind to the file extension and dialog label used
//! when exporting contacts to a single file.

use crate::dialogs::FileFilter;

/// Document format of a contact export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExportKind {
    /// vCard (`.vcf`)
    #[default]
    VCard,
    /// JSON (`.json`)
    Json,
    /// CSV (`.csv`)
    Csv,
    /// XML (`.xml`)
    Xml,
}

impl ExportKind {
    /// Parse an extension such as `.json` or `csv`
    ///
    /// Anything unrecognized maps to [`ExportKind::VCard`].
    pub fn from_extension(ext: &str) -> Self {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "csv" => Self::Csv,
            "xml" => Self::Xml,
            _ => Self::VCard,
        }
    }

    /// Extension including the leading dot
    pub fn extension(self) -> &'static str {
        match self {
            Self::VCard => ".vcf",
            Self::Json => ".json",
            Self::Csv => ".csv",
            Self::Xml => ".xml",
        }
    }

    /// Short label shown in the save dialog filter
    pub fn label(self) -> &'static str {
        match self {
            Self::VCard => "VCF",
            Self::Json => "JSON",
            Self::Csv => "CSV",
            Self::Xml => "XML",
        }
    }
}

/// Resolved destination name for a single-file export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportName {
    /// Suggested filename, `<default name><extension>`
    pub file_name: String,
    /// Label such as `JSON`
    pub filter_label: &'static str,
    /// Extension including the leading dot
    pub extension: &'static str,
}

impl ExportName {
    /// Dialog filter for this export, e.g. `JSON (*.json)`
    pub fn filter(&self) -> FileFilter {
        FileFilter::new(
            format!("{} (*{})", self.filter_label, self.extension),
            &[self.extension.trim_start_matches('.')],
        )
    }
}

/// Resolve the suggested filename and dialog label for an export
pub fn resolve_export_name(default_name: &str, kind: ExportKind) -> ExportName {
    ExportName {
        file_name: format!("{default_name}{}", kind.extension()),
        filter_label: kind.label(),
        extension: kind.extension(),
    }
}
