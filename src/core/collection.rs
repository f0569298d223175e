//! Profile collection - In-memory source of truth for the list view

use std::collections::HashSet;

use super::profile::Profile;

/// The in-memory profile list. Every mutation keeps the primary invariant:
/// no two profiles share a name.
#[derive(Debug, Clone, Default)]
pub struct ProfileCollection {
    profiles: Vec<Profile>,
}

impl ProfileCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection with a freshly fetched list. Duplicate
    /// names coming from the store are dropped, first occurrence wins.
    pub fn replace_all(&mut self, profiles: Vec<Profile>) {
        let mut seen = HashSet::new();
        self.profiles = profiles
            .into_iter()
            .filter(|p| seen.insert(p.name.clone()))
            .collect();
    }

    /// Optimistic local mutation: replace the profile with a matching name,
    /// or append when the name is new.
    pub fn upsert(&mut self, profile: Profile) {
        match self.profiles.iter_mut().find(|p| p.name == profile.name) {
            Some(existing) => *existing = profile,
            None => self.profiles.push(profile),
        }
    }

    /// Replace the entry named `old_name` with `profile`, preserving its
    /// position. Falls back to `upsert` when `old_name` is not present.
    pub fn replace(&mut self, old_name: &str, profile: Profile) {
        // Renaming onto an existing name must not create a duplicate.
        if profile.name != old_name {
            self.profiles.retain(|p| p.name != profile.name);
        }
        match self.profiles.iter_mut().find(|p| p.name == old_name) {
            Some(existing) => *existing = profile,
            None => self.upsert(profile),
        }
    }

    pub fn remove(&mut self, name: &str) {
        self.profiles.retain(|p| p.name != name);
    }

    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn as_slice(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
