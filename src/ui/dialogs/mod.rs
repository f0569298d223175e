//! Dialog windows

pub mod confirm;
pub mod profile_form;

pub use profile_form::ProfileForm;

/// State for dialog windows
#[derive(Debug, Clone, Default)]
pub enum DialogState {
    #[default]
    None,
    /// Create or edit form; the active edit session decides which.
    ProfileForm,
    ConfirmDelete(String),
}
