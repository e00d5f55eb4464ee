//! Native file dialogs backed by `rfd`

use crate::dialogs::{FileDialogs, FileFilter};
use rfd::FileDialog;
use std::path::PathBuf;
use tracing::debug;

/// [`FileDialogs`] implementation using the platform's native dialogs
#[derive(Debug, Default, Clone, Copy)]
pub struct RfdDialogs;

fn with_filters(mut dialog: FileDialog, filters: &[FileFilter]) -> FileDialog {
    for filter in filters {
        dialog = dialog.add_filter(filter.name.as_str(), filter.extensions.as_slice());
    }
    dialog
}

impl FileDialogs for RfdDialogs {
    fn open_file(&self, title: &str, filters: &[FileFilter]) -> Option<PathBuf> {
        let chosen = with_filters(FileDialog::new().set_title(title), filters).pick_file();
        debug!("Open dialog '{}' returned {:?}", title, chosen);
        chosen
    }

    fn save_file(
        &self,
        title: &str,
        default_name: &str,
        filters: &[FileFilter],
    ) -> Option<PathBuf> {
        let dialog = FileDialog::new()
            .set_title(title)
            .set_file_name(default_name);
        let chosen = with_filters(dialog, filters).save_file();
        debug!("Save dialog '{}' returned {:?}", title, chosen);
        chosen
    }

    fn choose_directory(&self, title: &str) -> Option<PathBuf> {
        let chosen = FileDialog::new().set_title(title).pick_folder();
        debug!("Directory dialog '{}' returned {:?}", title, chosen);
        chosen
    }
}
