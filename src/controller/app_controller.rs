//! Backend facade bound by the GUI shell
//!
//! Every action the presentation layer can trigger goes through
//! [`AppController`]. It owns the dialog and window capabilities handed in at
//! construction and the configuration store; nothing is looked up from
//! ambient state.

use crate::config::{AppConfig, ConfigStore, WindowGeometry};
use crate::dialogs::{FileDialogs, FileFilter};
use crate::error::{KardooError, Result};
use crate::export::{
    AudioKind, ExportKind, ImageKind, decode_data_uri, detect_image_kind, encode_data_uri,
    resolve_export_name,
};
use crate::files::{BackupDirective, BatchExportSet, BatchExporter, FileWriter};
use crate::window::{WindowManager, WindowStateTracker};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default filename offered when saving or creating a vCard file
pub const DEFAULT_VCARD_FILE_NAME: &str = "contacts.vcf";

/// A text file picked through the open dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedFile {
    /// Chosen path
    pub path: PathBuf,
    /// File content
    pub content: String,
}

fn vcard_filter() -> FileFilter {
    FileFilter::new("vCard (*.vcf)", &["vcf"])
}

/// Coordinates dialogs, window control and persistence for the GUI
pub struct AppController<D, W> {
    dialogs: D,
    window: W,
    store: ConfigStore,
}

impl<D: FileDialogs, W: WindowManager> AppController<D, W> {
    /// Create a controller from its capabilities
    pub fn new(dialogs: D, window: W, store: ConfigStore) -> Self {
        Self {
            dialogs,
            window,
            store,
        }
    }

    /// Configuration store in use
    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    fn tracker(&self) -> WindowStateTracker {
        WindowStateTracker::new(self.store.clone())
    }

    /// Restore the saved window position and return the loaded configuration
    pub fn startup(&self) -> AppConfig {
        self.tracker().restore(&self.window)
    }

    /// Persist the window geometry at teardown
    ///
    /// # Errors
    ///
    /// Returns the configuration save error; teardown callers may discard it.
    pub fn shutdown(&self) -> Result<bool> {
        self.tracker().persist_on_shutdown(&self.window)
    }

    /// Load the configuration, falling back to defaults
    pub fn load_config(&self) -> AppConfig {
        self.store.load()
    }

    /// Save the configuration
    ///
    /// # Errors
    ///
    /// Returns `KardooError::Io` or `KardooError::Json` from the store.
    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        self.store.save(config)
    }

    /// Pick a vCard file and read it as text
    ///
    /// # Errors
    ///
    /// Returns `KardooError::Io` if the chosen file cannot be read.
    pub fn open_vcard_file(&self) -> Result<Option<OpenedFile>> {
        let Some(path) = self
            .dialogs
            .open_file("Open vCard file", &[vcard_filter()])
        else {
            return Ok(None);
        };
        let content = std::fs::read_to_string(&path).map_err(|e| KardooError::io(&path, e))?;
        info!("Opened {}", path.display());
        Ok(Some(OpenedFile { path, content }))
    }

    /// Pick an image and return it as a data-URI
    ///
    /// # Errors
    ///
    /// Returns `KardooError::Io` if the chosen file cannot be read.
    pub fn open_image_file(&self) -> Result<Option<String>> {
        let filter = FileFilter::new("Images (*.jpg, *.jpeg, *.png)", &["jpg", "jpeg", "png"]);
        let Some(path) = self.dialogs.open_file("Choose a photo", &[filter]) else {
            return Ok(None);
        };
        let bytes = std::fs::read(&path).map_err(|e| KardooError::io(&path, e))?;
        let kind = ImageKind::from_path(&path);
        Ok(Some(encode_data_uri(kind.mime_type(), &bytes)))
    }

    /// Pick a sound file and return it as a data-URI
    ///
    /// # Errors
    ///
    /// Returns `KardooError::Io` if the chosen file cannot be read.
    pub fn open_sound_file(&self) -> Result<Option<String>> {
        let filter = FileFilter::new("Audio (*.ogg, *.mp3, *.wav)", &["ogg", "mp3", "wav"]);
        let Some(path) = self.dialogs.open_file("Choose a sound file", &[filter]) else {
            return Ok(None);
        };
        let bytes = std::fs::read(&path).map_err(|e| KardooError::io(&path, e))?;
        let kind = AudioKind::from_path(&path);
        Ok(Some(encode_data_uri(kind.mime_type(), &bytes)))
    }

    /// Save vCard text, backing up the previous file per `directive`
    ///
    /// With no `path` the save dialog is consulted; cancelling it returns
    /// `Ok(None)`. Otherwise returns the path written.
    ///
    /// # Errors
    ///
    /// Returns `KardooError::Io` if the file cannot be written.
    pub fn save_vcard_file(
        &self,
        path: Option<&Path>,
        content: &str,
        directive: &BackupDirective,
    ) -> Result<Option<PathBuf>> {
        let path = match path.filter(|p| !p.as_os_str().is_empty()) {
            Some(path) => {
                FileWriter::write_with_backup(path, content.as_bytes(), directive)?;
                path.to_path_buf()
            }
            None => {
                let Some(path) = self.dialogs.save_file(
                    "Save vCard file",
                    DEFAULT_VCARD_FILE_NAME,
                    &[vcard_filter()],
                ) else {
                    return Ok(None);
                };
                FileWriter::write(&path, content.as_bytes())?;
                path
            }
        };
        Ok(Some(path))
    }

    /// Ask where a new vCard file should live, without writing it
    pub fn new_vcard_file(&self) -> Option<PathBuf> {
        self.dialogs.save_file(
            "Create a new vCard file",
            DEFAULT_VCARD_FILE_NAME,
            &[vcard_filter()],
        )
    }

    /// Ask for a backup directory
    pub fn choose_directory(&self) -> Option<PathBuf> {
        self.dialogs.choose_directory("Choose the backup folder")
    }

    /// Decode a photo data-URI and save it where the user chooses
    ///
    /// The payload is decoded before any dialog is shown.
    ///
    /// # Errors
    ///
    /// Returns `KardooError::InvalidPayload` for bad base64 and
    /// `KardooError::Io` if the file cannot be written.
    pub fn save_contact_photo(&self, payload: &str, default_name: &str) -> Result<Option<PathBuf>> {
        let kind = detect_image_kind(payload);
        let bytes = decode_data_uri(payload)?;
        let ext = kind.extension();
        let filter = FileFilter::new("Images", &[ext.trim_start_matches('.')]);
        let Some(path) = self.dialogs.save_file(
            "Save photo",
            &format!("{default_name}{ext}"),
            &[filter],
        ) else {
            return Ok(None);
        };
        FileWriter::write(&path, &bytes)?;
        Ok(Some(path))
    }

    /// Export one contact as a vCard file
    ///
    /// # Errors
    ///
    /// Returns `KardooError::Io` if the file cannot be written.
    pub fn export_contact(&self, content: &str, default_name: &str) -> Result<Option<PathBuf>> {
        self.export_to_file(content, default_name, ExportKind::VCard)
    }

    /// Export contacts to a single file of the given kind
    ///
    /// # Errors
    ///
    /// Returns `KardooError::Io` if the file cannot be written.
    pub fn export_to_file(
        &self,
        content: &str,
        default_name: &str,
        kind: ExportKind,
    ) -> Result<Option<PathBuf>> {
        let name = resolve_export_name(default_name, kind);
        let Some(path) =
            self.dialogs
                .save_file("Export contacts", &name.file_name, &[name.filter()])
        else {
            debug!("Export cancelled");
            return Ok(None);
        };
        FileWriter::write(&path, content.as_bytes())?;
        Ok(Some(path))
    }

    /// Export many files into a directory chosen by the user
    ///
    /// Returns the chosen directory, or `None` if the user cancelled.
    ///
    /// # Errors
    ///
    /// Returns the first `KardooError::Io` hit while writing.
    pub fn export_to_folder(&self, files: &BatchExportSet) -> Result<Option<PathBuf>> {
        let Some(dir) = self.dialogs.choose_directory("Choose the export folder") else {
            debug!("Folder export cancelled");
            return Ok(None);
        };
        BatchExporter::export_all(&dir, files)?;
        Ok(Some(dir))
    }

    /// Live window geometry
    pub fn window_geometry(&self) -> WindowGeometry {
        WindowStateTracker::current_geometry(&self.window)
    }

    /// Move and resize the window
    pub fn set_window_geometry(&self, geometry: WindowGeometry) {
        self.window.set_position(geometry.x, geometry.y);
        self.window.set_size(geometry.width, geometry.height);
    }

    /// Minimise the window
    pub fn window_minimise(&self) {
        self.window.minimise();
    }

    /// Toggle the maximised state
    pub fn window_toggle_maximise(&self) {
        self.window.toggle_maximise();
    }

    /// Quit the application
    pub fn window_close(&self) {
        self.window.quit();
    }
}
