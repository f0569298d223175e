//! Application state - Central state container for ProfileDeck
//!
//! Owns the in-memory profile collection and every operation that mutates
//! it. Fetch/import/export run on the tokio runtime and report back through
//! an event channel drained once per frame, so all mutations apply in event
//! order on the UI thread; racing completions are last-write-wins.

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info, warn};

use super::collection::ProfileCollection;
use super::filter::DebouncedFilter;
use super::profile::Profile;
use super::projection::project;
use super::reconciler::{import_needs_refetch, BatchKind, BatchReconciler, BatchReport, BatchSeverity};
use super::session::EditSession;
use crate::store::{ExportOutcome, ImportOutcome, ProfileStore, StoreError};

/// Completion of an asynchronous store operation.
pub enum CoreEvent {
    FetchFinished(Result<Vec<Profile>, StoreError>),
    ImportFinished(Result<ImportOutcome, StoreError>),
    ExportFinished(Result<ExportOutcome, StoreError>),
}

/// Central application state
pub struct AppState {
    /// The external profile store
    store: Arc<dyn ProfileStore>,
    /// Runtime handle for background store calls
    runtime: tokio::runtime::Handle,
    events_tx: Sender<CoreEvent>,
    events_rx: Receiver<CoreEvent>,
    /// In-memory profile list, single source of truth for the view
    pub collection: ProfileCollection,
    /// Search filter (raw + debounced)
    pub filter: DebouncedFilter,
    /// Edit dialog binding
    pub session: EditSession,
    reconciler: BatchReconciler,
    /// Name of the currently connected profile, supplied externally
    current: Option<String>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProfileStore>, runtime: tokio::runtime::Handle) -> Self {
        let (events_tx, events_rx) = channel();
        Self {
            store,
            runtime,
            events_tx,
            events_rx,
            collection: ProfileCollection::new(),
            filter: DebouncedFilter::default(),
            session: EditSession::new(),
            reconciler: BatchReconciler::new(),
            current: None,
        }
    }

    // ==================== Reactive values ====================

    /// The ordered, filtered rows to render, current profile pinned first.
    pub fn projection(&self) -> Vec<Profile> {
        project(
            self.collection.as_slice(),
            self.filter.debounced(),
            self.current.as_deref(),
        )
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn set_current(&mut self, name: Option<String>) {
        self.current = name;
    }

    pub fn batch_in_flight(&self) -> bool {
        self.reconciler.is_in_flight()
    }

    // ==================== Filter ====================

    pub fn set_filter(&mut self, text: impl Into<String>, now: Instant) {
        self.filter.set(text, now);
    }

    /// Advance the debounce clock; true when the committed filter changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.filter.tick(now)
    }

    // ==================== Async store operations ====================

    /// Replace the collection with a fresh listing. Used on startup and
    /// after any operation whose local effect is not known with certainty
    /// (import, delete).
    pub fn start_fetch(&self) {
        let store = Arc::clone(&self.store);
        let tx = self.events_tx.clone();
        self.runtime.spawn_blocking(move || {
            let _ = tx.send(CoreEvent::FetchFinished(store.list_profiles()));
        });
    }

    /// Import the picked files. An empty selection is a no-op and the
    /// reconciler never leaves Idle.
    pub fn start_import(&mut self, paths: Vec<PathBuf>) {
        if paths.is_empty() {
            return;
        }
        self.reconciler.begin(BatchKind::Import);
        info!("Importing {} file(s)", paths.len());
        let store = Arc::clone(&self.store);
        let tx = self.events_tx.clone();
        self.runtime.spawn_blocking(move || {
            let _ = tx.send(CoreEvent::ImportFinished(store.import_profiles(&paths)));
        });
    }

    /// Export every profile into the picked directory.
    pub fn start_export(&mut self, directory: PathBuf) {
        self.reconciler.begin(BatchKind::Export);
        info!("Exporting profiles to {}", directory.display());
        let store = Arc::clone(&self.store);
        let tx = self.events_tx.clone();
        self.runtime.spawn_blocking(move || {
            let _ = tx.send(CoreEvent::ExportFinished(store.export_profiles(&directory)));
        });
    }

    // ==================== Synchronous store operations ====================

    /// Persist the dialog's profile, then merge the store's returned value
    /// into the collection optimistically: the write that just happened
    /// produced it, so no refetch is needed. Replaces by name when an edit
    /// target is active, appends otherwise.
    pub fn submit_edit(&mut self, name: &str, content: &str) -> Result<Profile, StoreError> {
        let profile = self.store.create_or_update_profile(name, content)?;
        self.session.apply(&mut self.collection, profile.clone());
        Ok(profile)
    }

    /// Delete a profile, then refetch: the store may hold state the client
    /// cannot reconstruct locally.
    pub fn request_delete(&mut self, name: &str) -> Result<(), StoreError> {
        self.store.delete_profile(name)?;
        if self.current.as_deref() == Some(name) {
            self.current = None;
        }
        self.start_fetch();
        Ok(())
    }

    pub fn request_edit(&mut self, name: impl Into<String>) {
        self.session.request_edit(name);
    }

    // ==================== Event pump ====================

    /// Drain completed store operations and return the reports to surface
    /// as notifications. Called once per frame.
    pub fn pump_events(&mut self) -> Vec<BatchReport> {
        let mut reports = Vec::new();
        while let Ok(event) = self.events_rx.try_recv() {
            if let Some(report) = self.apply_event(event) {
                reports.push(report);
            }
        }
        reports
    }

    fn apply_event(&mut self, event: CoreEvent) -> Option<BatchReport> {
        match event {
            CoreEvent::FetchFinished(Ok(profiles)) => {
                info!("Fetched {} profiles", profiles.len());
                self.collection.replace_all(profiles);
                None
            }
            CoreEvent::FetchFinished(Err(e)) => {
                error!("Failed to load profiles: {}", e);
                Some(BatchReport {
                    severity: BatchSeverity::Failure,
                    headline: "Failed to load profiles".to_string(),
                    detail: Some(e.to_string()),
                })
            }
            CoreEvent::ImportFinished(Ok(outcome)) => {
                let report = self.reconciler.finish_import(&outcome);
                // The success-name list alone does not pin down the new
                // collection (the store resolves collisions silently).
                if import_needs_refetch(&outcome) {
                    self.start_fetch();
                }
                Some(report)
            }
            CoreEvent::ImportFinished(Err(e)) => {
                warn!("Import fault: {}", e);
                Some(self.reconciler.fault(BatchKind::Import, &e.to_string()))
            }
            CoreEvent::ExportFinished(Ok(outcome)) => Some(self.reconciler.finish_export(&outcome)),
            CoreEvent::ExportFinished(Err(e)) => {
                warn!("Export fault: {}", e);
                Some(self.reconciler.fault(BatchKind::Export, &e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ImportFailure, ProfileStore};
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    /// In-memory store double; `import_result` scripts the next import.
    struct MockStore {
        profiles: Mutex<Vec<Profile>>,
        import_result: Mutex<Result<ImportOutcome, StoreError>>,
        list_calls: AtomicUsize,
    }

    impl MockStore {
        fn with_profiles(profiles: Vec<Profile>) -> Self {
            Self {
                profiles: Mutex::new(profiles),
                import_result: Mutex::new(Ok(ImportOutcome::default())),
                list_calls: AtomicUsize::new(0),
            }
        }

        fn script_import(&self, result: Result<ImportOutcome, StoreError>) {
            *self.import_result.lock().unwrap() = result;
        }

        fn list_calls(&self) -> usize {
            self.list_calls.load(Ordering::SeqCst)
        }
    }

    impl ProfileStore for MockStore {
        fn list_profiles(&self) -> Result<Vec<Profile>, StoreError> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.profiles.lock().unwrap().clone())
        }

        fn create_or_update_profile(
            &self,
            name: &str,
            content: &str,
        ) -> Result<Profile, StoreError> {
            let profile = Profile::new(name, content);
            let mut profiles = self.profiles.lock().unwrap();
            match profiles.iter_mut().find(|p| p.name == name) {
                Some(existing) => *existing = profile.clone(),
                None => profiles.push(profile.clone()),
            }
            Ok(profile)
        }

        fn delete_profile(&self, name: &str) -> Result<(), StoreError> {
            self.profiles.lock().unwrap().retain(|p| p.name != name);
            Ok(())
        }

        fn import_profiles(&self, _paths: &[PathBuf]) -> Result<ImportOutcome, StoreError> {
            std::mem::replace(
                &mut *self.import_result.lock().unwrap(),
                Ok(ImportOutcome::default()),
            )
        }

        fn export_profiles(&self, _directory: &Path) -> Result<ExportOutcome, StoreError> {
            Ok(ExportOutcome {
                success: self
                    .profiles
                    .lock()
                    .unwrap()
                    .iter()
                    .map(|p| p.name.clone())
                    .collect(),
                failed: Vec::new(),
            })
        }
    }

    fn app_with(store: Arc<MockStore>, runtime: &tokio::runtime::Runtime) -> AppState {
        AppState::new(store, runtime.handle().clone())
    }

    /// Drain events until `done` holds or the deadline passes.
    fn pump_until(
        app: &mut AppState,
        reports: &mut Vec<BatchReport>,
        mut done: impl FnMut(&AppState, &[BatchReport]) -> bool,
    ) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !done(app, reports) {
            assert!(Instant::now() < deadline, "timed out waiting for events");
            reports.extend(app.pump_events());
            std::thread::sleep(Duration::from_millis(2));
        }
    }

    #[test]
    fn fetch_replaces_collection() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let store = Arc::new(MockStore::with_profiles(vec![
            Profile::new("b", "2"),
            Profile::new("a", "1"),
        ]));
        let mut app = app_with(Arc::clone(&store), &runtime);

        app.start_fetch();
        let mut reports = Vec::new();
        pump_until(&mut app, &mut reports, |a, _| !a.collection.is_empty());

        assert_eq!(app.collection.len(), 2);
        assert!(reports.is_empty());
    }

    #[test]
    fn refetch_is_idempotent_on_projection_order() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let store = Arc::new(MockStore::with_profiles(vec![
            Profile::new("c", ""),
            Profile::new("a", ""),
            Profile::new("b", ""),
        ]));
        let mut app = app_with(Arc::clone(&store), &runtime);
        app.set_current(Some("b".to_string()));

        app.start_fetch();
        pump_until(&mut app, &mut Vec::new(), |a, _| !a.collection.is_empty());
        let first = app.projection();

        let calls = store.list_calls();
        app.start_fetch();
        pump_until(&mut app, &mut Vec::new(), |_, _| store.list_calls() > calls);
        // One extra pump so the second completion is applied.
        app.pump_events();

        assert_eq!(app.projection(), first);
    }

    #[test]
    fn submit_edit_is_optimistic_without_refetch() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let store = Arc::new(MockStore::with_profiles(vec![Profile::new("a", "old")]));
        let mut app = app_with(Arc::clone(&store), &runtime);
        app.collection.replace_all(vec![Profile::new("a", "old")]);

        app.request_edit("a");
        app.submit_edit("a", "new").unwrap();

        assert_eq!(app.collection.get("a").unwrap().content, "new");
        assert!(!app.session.is_editing());
        assert_eq!(store.list_calls(), 0);
    }

    #[test]
    fn submit_without_target_appends() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let store = Arc::new(MockStore::with_profiles(Vec::new()));
        let mut app = app_with(store, &runtime);

        app.submit_edit("fresh", "payload").unwrap();
        assert_eq!(app.collection.len(), 1);
    }

    #[test]
    fn delete_clears_current_and_refetches() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let store = Arc::new(MockStore::with_profiles(vec![
            Profile::new("a", ""),
            Profile::new("b", ""),
        ]));
        let mut app = app_with(Arc::clone(&store), &runtime);
        app.collection.replace_all(vec![Profile::new("a", ""), Profile::new("b", "")]);
        app.set_current(Some("a".to_string()));

        app.request_delete("a").unwrap();
        assert_eq!(app.current(), None);
        pump_until(&mut app, &mut Vec::new(), |a, _| a.collection.len() == 1);
        assert!(!app.collection.contains("a"));
    }

    #[test]
    fn import_success_reports_and_refetches() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let store = Arc::new(MockStore::with_profiles(vec![Profile::new("new", "x")]));
        store.script_import(Ok(ImportOutcome {
            success: vec!["new".to_string()],
            failed: Vec::new(),
        }));
        let mut app = app_with(Arc::clone(&store), &runtime);

        app.start_import(vec![PathBuf::from("new.conf")]);
        assert!(app.batch_in_flight());

        let mut reports = Vec::new();
        pump_until(&mut app, &mut reports, |a, _| a.collection.contains("new"));

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].severity, BatchSeverity::Success);
        assert!(!app.batch_in_flight());
        assert_eq!(store.list_calls(), 1);
    }

    #[test]
    fn import_with_no_successes_does_not_refetch() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let store = Arc::new(MockStore::with_profiles(Vec::new()));
        store.script_import(Ok(ImportOutcome {
            success: Vec::new(),
            failed: vec![ImportFailure {
                file_name: "bad.conf".to_string(),
                error: "too short".to_string(),
            }],
        }));
        let mut app = app_with(Arc::clone(&store), &runtime);

        app.start_import(vec![PathBuf::from("bad.conf")]);
        let mut reports = Vec::new();
        pump_until(&mut app, &mut reports, |_, r| !r.is_empty());

        assert_eq!(reports[0].severity, BatchSeverity::Failure);
        assert_eq!(store.list_calls(), 0);
    }

    #[test]
    fn empty_import_selection_is_a_no_op() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let store = Arc::new(MockStore::with_profiles(Vec::new()));
        let mut app = app_with(store, &runtime);

        app.start_import(Vec::new());
        assert!(!app.batch_in_flight());
        assert!(app.pump_events().is_empty());
    }

    #[test]
    fn export_reports_without_refetch() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let store = Arc::new(MockStore::with_profiles(vec![Profile::new("a", "")]));
        let mut app = app_with(Arc::clone(&store), &runtime);

        app.start_export(PathBuf::from("/tmp/out"));
        let mut reports = Vec::new();
        pump_until(&mut app, &mut reports, |_, r| !r.is_empty());

        assert_eq!(reports[0].severity, BatchSeverity::Success);
        assert_eq!(store.list_calls(), 0);
    }
}
