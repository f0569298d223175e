//! Core module - Collection state, filtering, projection, and batch reconciliation

mod app_state;
mod collection;
mod filter;
mod profile;
mod projection;
mod reconciler;
mod session;
pub mod settings;

pub use app_state::{AppState, CoreEvent};
pub use collection::ProfileCollection;
pub use filter::{DebouncedFilter, DEFAULT_DEBOUNCE};
pub use profile::{is_valid_profile_name, Profile};
pub use projection::project;
pub use reconciler::{BatchKind, BatchReport, BatchSeverity};
pub use session::EditSession;
pub use settings::Settings;
