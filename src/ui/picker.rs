//! Native file dialogs for import and export

use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

/// The dialog could not be opened at all. Distinct from cancellation,
/// which is an `Ok(None)` and never surfaces to the user.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct PickerError(pub String);

/// File dialogs behind a trait so the app can be driven by a scripted
/// picker in tests.
pub trait FilePicker {
    /// Pick the profile files to import; `Ok(None)` means cancelled.
    fn pick_import_files(&self) -> Result<Option<Vec<PathBuf>>, PickerError>;

    /// Pick the directory to export into; `Ok(None)` means cancelled.
    fn pick_export_directory(&self) -> Result<Option<PathBuf>, PickerError>;
}

/// rfd-backed picker used in production.
pub struct NativePicker;

impl FilePicker for NativePicker {
    fn pick_import_files(&self) -> Result<Option<Vec<PathBuf>>, PickerError> {
        let picked = rfd::FileDialog::new()
            .set_title("Import Profiles")
            .add_filter("Profile files", &["conf"])
            .pick_files();
        if picked.is_none() {
            debug!("Import picker cancelled");
        }
        Ok(picked)
    }

    fn pick_export_directory(&self) -> Result<Option<PathBuf>, PickerError> {
        let picked = rfd::FileDialog::new()
            .set_title("Export Profiles")
            .pick_folder();
        if picked.is_none() {
            debug!("Export picker cancelled");
        }
        Ok(picked)
    }
}
