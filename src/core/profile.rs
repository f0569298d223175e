//! Profile type - A named configuration payload managed as a unit

use serde::{Deserialize, Serialize};

/// A named configuration profile. The name is the identity key; the content
/// is an opaque payload the application never parses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name, unique within the collection
    pub name: String,
    /// Opaque configuration payload
    pub content: String,
}

impl Profile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Check whether a name is acceptable as a profile identity: non-empty,
/// alphanumeric or underscore only (underscore is what the store uses for
/// collision suffixes).
pub fn is_valid_profile_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_')
}
