//! Edit session - Binds the profile form dialog to an entry of the projected list

use super::collection::ProfileCollection;
use super::profile::Profile;

/// The optional edit target. `Some(name)` binds the dialog to that profile;
/// `None` is create mode. Both are projections of the same option, so the
/// two can never be active at once.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    target: Option<String>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_edit(&mut self, name: impl Into<String>) {
        self.target = Some(name.into());
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.target.is_some()
    }

    /// Look the target up in the projected (filtered/sorted) list, not the
    /// raw collection, so the dialog binds to exactly what the user sees.
    /// A target that does not resolve means create mode, not an error.
    pub fn resolve<'a>(&self, projection: &'a [Profile]) -> Option<&'a Profile> {
        let target = self.target.as_deref()?;
        projection.iter().find(|p| p.name == target)
    }

    /// Merge the dialog's submitted profile back into the collection: an
    /// active target replaces by name, otherwise the profile is appended.
    /// The target is consumed either way.
    pub fn apply(&mut self, collection: &mut ProfileCollection, submitted: Profile) {
        match self.target.take() {
            Some(target) => collection.replace(&target, submitted),
            None => collection.upsert(submitted),
        }
    }

    /// Dismissal without submission.
    pub fn clear(&mut self) {
        self.target = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_resolves_against_projection_only() {
        let mut session = EditSession::new();
        session.request_edit("hidden");

        // "hidden" exists in the collection but was filtered out of the
        // projection; the dialog must open in create mode.
        let projection = vec![Profile::new("visible", "")];
        assert!(session.resolve(&projection).is_none());

        session.request_edit("visible");
        assert_eq!(session.resolve(&projection).unwrap().name, "visible");
    }

    #[test]
    fn apply_with_target_replaces_by_name() {
        let mut collection = ProfileCollection::new();
        collection.upsert(Profile::new("a", "old"));
        collection.upsert(Profile::new("b", "keep"));

        let mut session = EditSession::new();
        session.request_edit("a");
        session.apply(&mut collection, Profile::new("a", "new"));

        assert_eq!(collection.get("a").unwrap().content, "new");
        assert_eq!(collection.len(), 2);
        assert!(!session.is_editing());
    }

    #[test]
    fn apply_without_target_appends() {
        let mut collection = ProfileCollection::new();
        collection.upsert(Profile::new("a", ""));

        let mut session = EditSession::new();
        session.apply(&mut collection, Profile::new("b", "fresh"));

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.get("b").unwrap().content, "fresh");
    }

    #[test]
    fn clear_returns_to_create_mode() {
        let mut session = EditSession::new();
        session.request_edit("a");
        session.clear();
        assert!(!session.is_editing());
    }
}
