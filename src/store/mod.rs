//! Profile store boundary - The external store the core synchronizes against

mod dir_store;

pub use dir_store::DirStore;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Profile;

/// Errors from the backing store. Always surfaced as a notification, never
/// silently dropped.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid profile name: '{0}'")]
    InvalidName(String),
    #[error("profile not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// One failed item of an import batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportFailure {
    pub file_name: String,
    pub error: String,
}

/// Atomic terminal result of one import invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOutcome {
    pub success: Vec<String>,
    pub failed: Vec<ImportFailure>,
}

/// One failed item of an export batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportFailure {
    pub profile_name: String,
    pub error: String,
}

/// Atomic terminal result of one export invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOutcome {
    pub success: Vec<String>,
    pub failed: Vec<ExportFailure>,
}

/// The external profile store. The core only ever talks to this trait;
/// item-level batch failures are aggregated into the outcome, a returned
/// `Err` is an invocation-level fault.
pub trait ProfileStore: Send + Sync {
    fn list_profiles(&self) -> Result<Vec<Profile>, StoreError>;

    fn create_or_update_profile(&self, name: &str, content: &str) -> Result<Profile, StoreError>;

    fn delete_profile(&self, name: &str) -> Result<(), StoreError>;

    fn import_profiles(&self, paths: &[PathBuf]) -> Result<ImportOutcome, StoreError>;

    fn export_profiles(&self, directory: &Path) -> Result<ExportOutcome, StoreError>;
}
