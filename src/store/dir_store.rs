//! Directory-backed profile store - One `.conf` file per profile

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{
    ExportFailure, ExportOutcome, ImportFailure, ImportOutcome, ProfileStore, StoreError,
};
use crate::core::{is_valid_profile_name, Profile};

const PROFILE_EXT: &str = ".conf";

/// Minimum payload size accepted on import; anything shorter is junk.
const MIN_IMPORT_LEN: usize = 8;

/// Stores each profile as `<name>.conf` under a single directory. Payloads
/// are copied verbatim and never parsed.
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn profile_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}{}", name, PROFILE_EXT))
    }

    /// Resolve an import name against existing profiles: `name`, then
    /// `name_1`, `name_2`, ... until one is free.
    fn free_name(&self, base: &str) -> String {
        let mut candidate = base.to_string();
        let mut counter = 1;
        while self.profile_path(&candidate).exists() {
            candidate = format!("{}_{}", base, counter);
            counter += 1;
        }
        candidate
    }

    fn import_one(&self, path: &Path) -> Result<String, ImportFailure> {
        let failure = |file_name: &str, error: String| ImportFailure {
            file_name: file_name.to_string(),
            error,
        };

        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            return Err(failure(
                &path.to_string_lossy(),
                "Invalid file name".to_string(),
            ));
        };

        if !file_name.ends_with(PROFILE_EXT) {
            return Err(failure(
                file_name,
                format!("File must have {} extension", PROFILE_EXT),
            ));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| failure(file_name, format!("Failed to read file: {}", e)))?;

        if content.len() < MIN_IMPORT_LEN {
            return Err(failure(
                file_name,
                format!("File content must be at least {} characters", MIN_IMPORT_LEN),
            ));
        }

        let base_name: String = file_name
            .trim_end_matches(PROFILE_EXT)
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();
        if base_name.is_empty() {
            return Err(failure(
                file_name,
                "Profile name must contain at least one alphanumeric character".to_string(),
            ));
        }

        let final_name = self.free_name(&base_name);
        fs::write(self.profile_path(&final_name), content)
            .map_err(|e| failure(file_name, format!("Failed to write profile: {}", e)))?;

        Ok(final_name)
    }

    fn conf_entries(&self) -> Result<Vec<(String, PathBuf)>, std::io::Error> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let path = entry.path();
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if let Some(name) = file_name.strip_suffix(PROFILE_EXT) {
                entries.push((name.to_string(), path));
            }
        }
        // read_dir order is platform-dependent; keep listings stable.
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(entries)
    }
}

impl ProfileStore for DirStore {
    fn list_profiles(&self) -> Result<Vec<Profile>, StoreError> {
        let mut profiles = Vec::new();
        for (name, path) in self.conf_entries()? {
            let content = fs::read_to_string(&path).unwrap_or_default();
            profiles.push(Profile { name, content });
        }
        debug!("Listed {} profiles from {}", profiles.len(), self.root.display());
        Ok(profiles)
    }

    fn create_or_update_profile(&self, name: &str, content: &str) -> Result<Profile, StoreError> {
        if !is_valid_profile_name(name) {
            return Err(StoreError::InvalidName(name.to_string()));
        }
        fs::write(self.profile_path(name), content)?;
        info!("Saved profile '{}'", name);
        Ok(Profile::new(name, content))
    }

    fn delete_profile(&self, name: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.profile_path(name)) {
            Ok(()) => {
                info!("Deleted profile '{}'", name);
                Ok(())
            }
            // Deleting a profile that is already gone is not an error.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn import_profiles(&self, paths: &[PathBuf]) -> Result<ImportOutcome, StoreError> {
        let mut outcome = ImportOutcome::default();
        for path in paths {
            match self.import_one(path) {
                Ok(name) => outcome.success.push(name),
                Err(failure) => outcome.failed.push(failure),
            }
        }
        info!(
            "Import finished: {} succeeded, {} failed",
            outcome.success.len(),
            outcome.failed.len()
        );
        Ok(outcome)
    }

    fn export_profiles(&self, directory: &Path) -> Result<ExportOutcome, StoreError> {
        // An unreadable profiles directory fails the whole invocation;
        // per-profile copy errors are aggregated instead.
        let entries = self.conf_entries()?;

        let mut outcome = ExportOutcome::default();
        for (name, path) in entries {
            let target = directory.join(format!("{}{}", name, PROFILE_EXT));
            match fs::copy(&path, &target) {
                Ok(_) => outcome.success.push(name),
                Err(e) => outcome.failed.push(ExportFailure {
                    profile_name: name,
                    error: format!("Failed to export: {}", e),
                }),
            }
        }
        info!(
            "Export finished: {} succeeded, {} failed",
            outcome.success.len(),
            outcome.failed.len()
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, DirStore) {
        let dir = TempDir::new().unwrap();
        let store = DirStore::new(dir.path().join("profiles")).unwrap();
        (dir, store)
    }

    fn write_source(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn save_list_roundtrip() {
        let (_dir, store) = store();
        store.create_or_update_profile("office", "[Interface]\nkey=1").unwrap();
        store.create_or_update_profile("home", "[Interface]\nkey=2").unwrap();

        let listed = store.list_profiles().unwrap();
        let names: Vec<&str> = listed.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["home", "office"]);
        assert_eq!(listed[1].content, "[Interface]\nkey=1");
    }

    #[test]
    fn save_rejects_invalid_name() {
        let (_dir, store) = store();
        let err = store.create_or_update_profile("../evil", "payload").unwrap_err();
        assert!(matches!(err, StoreError::InvalidName(_)));
    }

    #[test]
    fn delete_missing_profile_is_ok() {
        let (_dir, store) = store();
        store.delete_profile("ghost").unwrap();
    }

    #[test]
    fn import_aggregates_item_failures() {
        let (dir, store) = store();
        let good = write_source(&dir, "office.conf", "[Interface]\nPrivateKey=x");
        let short = write_source(&dir, "tiny.conf", "abc");
        let wrong_ext = write_source(&dir, "notes.txt", "[Interface]\nPrivateKey=x");
        let missing = dir.path().join("gone.conf");

        let outcome = store
            .import_profiles(&[good, short, wrong_ext, missing])
            .unwrap();

        assert_eq!(outcome.success, vec!["office"]);
        assert_eq!(outcome.failed.len(), 3);
        let failed_files: Vec<&str> =
            outcome.failed.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(failed_files, vec!["tiny.conf", "notes.txt", "gone.conf"]);
    }

    #[test]
    fn import_resolves_name_collisions_with_suffix() {
        let (dir, store) = store();
        store.create_or_update_profile("office", "existing payload").unwrap();
        let src = write_source(&dir, "office.conf", "imported payload");

        let outcome = store
            .import_profiles(&[src.clone(), src])
            .unwrap();

        assert_eq!(outcome.success, vec!["office_1", "office_2"]);
        assert_eq!(store.list_profiles().unwrap().len(), 3);
    }

    #[test]
    fn import_sanitizes_file_names() {
        let (dir, store) = store();
        let src = write_source(&dir, "my office (2).conf", "[Interface]\nkey=x");

        let outcome = store.import_profiles(&[src]).unwrap();
        assert_eq!(outcome.success, vec!["myoffice2"]);
    }

    #[test]
    fn export_copies_every_profile() {
        let (dir, store) = store();
        store.create_or_update_profile("a", "payload a").unwrap();
        store.create_or_update_profile("b", "payload b").unwrap();
        let target = dir.path().join("exported");
        fs::create_dir_all(&target).unwrap();

        let outcome = store.export_profiles(&target).unwrap();

        assert_eq!(outcome.success, vec!["a", "b"]);
        assert!(outcome.failed.is_empty());
        assert_eq!(fs::read_to_string(target.join("a.conf")).unwrap(), "payload a");
    }

    #[test]
    fn export_to_missing_directory_aggregates_failures() {
        let (dir, store) = store();
        store.create_or_update_profile("a", "payload a").unwrap();

        let outcome = store
            .export_profiles(&dir.path().join("does/not/exist"))
            .unwrap();

        assert!(outcome.success.is_empty());
        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(outcome.failed[0].profile_name, "a");
    }
}
