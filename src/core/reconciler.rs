//! Batch operation reconciler - Turns per-item import/export results into
//! a single user-facing report

use crate::store::{ExportOutcome, ImportOutcome};

/// Names are listed inline in the success headline up to this many items;
/// beyond that only the count is shown.
const INLINE_NAME_LIMIT: usize = 3;

/// Which batch operation a report describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchKind {
    Import,
    Export,
}

impl BatchKind {
    fn verb_past(&self) -> &'static str {
        match self {
            Self::Import => "imported",
            Self::Export => "exported",
        }
    }

    fn verb_past_title(&self) -> &'static str {
        match self {
            Self::Import => "Imported",
            Self::Export => "Exported",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Import => "Import",
            Self::Export => "Export",
        }
    }
}

/// Severity of a terminal batch report, mapped onto notification levels by
/// the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchSeverity {
    /// Every item succeeded
    Success,
    /// Some items succeeded, some failed
    PartialFailure,
    /// Nothing succeeded, or the invocation itself faulted
    Failure,
}

/// The classified terminal result of one batch invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub severity: BatchSeverity,
    pub headline: String,
    /// One `"<identifier>: <error>"` line per failed item, or the fault
    /// description for an invocation-level failure.
    pub detail: Option<String>,
}

/// Tracks whether a batch operation is outstanding. Deliberately not a
/// guard: a second invocation before the first resolves simply replaces the
/// in-flight marker (last-write-wins, matching the collection semantics).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BatchPhase {
    #[default]
    Idle,
    InFlight(BatchKind),
}

#[derive(Debug, Default)]
pub struct BatchReconciler {
    phase: BatchPhase,
}

impl BatchReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, kind: BatchKind) {
        if let BatchPhase::InFlight(prev) = self.phase {
            tracing::warn!(
                "{} started while {} still in flight",
                kind.label(),
                prev.label()
            );
        }
        self.phase = BatchPhase::InFlight(kind);
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.phase, BatchPhase::InFlight(_))
    }

    pub fn finish_import(&mut self, outcome: &ImportOutcome) -> BatchReport {
        self.phase = BatchPhase::Idle;
        let failures: Vec<(&str, &str)> = outcome
            .failed
            .iter()
            .map(|f| (f.file_name.as_str(), f.error.as_str()))
            .collect();
        classify(BatchKind::Import, &outcome.success, &failures)
    }

    pub fn finish_export(&mut self, outcome: &ExportOutcome) -> BatchReport {
        self.phase = BatchPhase::Idle;
        let failures: Vec<(&str, &str)> = outcome
            .failed
            .iter()
            .map(|f| (f.profile_name.as_str(), f.error.as_str()))
            .collect();
        classify(BatchKind::Export, &outcome.success, &failures)
    }

    /// The whole invocation failed before producing a structured outcome.
    /// Distinct from a partial failure: one detail line, no counts.
    pub fn fault(&mut self, kind: BatchKind, error: &str) -> BatchReport {
        self.phase = BatchPhase::Idle;
        BatchReport {
            severity: BatchSeverity::Failure,
            headline: format!("{} failed", kind.label()),
            detail: Some(error.to_string()),
        }
    }
}

fn classify(kind: BatchKind, success: &[String], failures: &[(&str, &str)]) -> BatchReport {
    let s = success.len();
    let f = failures.len();

    if s > 0 && f == 0 {
        let name_list = if s <= INLINE_NAME_LIMIT {
            format!(": {}", success.join(", "))
        } else {
            String::new()
        };
        BatchReport {
            severity: BatchSeverity::Success,
            headline: format!("Successfully {} {} profile(s){}", kind.verb_past(), s, name_list),
            detail: None,
        }
    } else if s > 0 {
        BatchReport {
            severity: BatchSeverity::PartialFailure,
            headline: format!("{} {} profile(s), {} failed", kind.verb_past_title(), s, f),
            detail: Some(detail_lines(failures)),
        }
    } else {
        BatchReport {
            severity: BatchSeverity::Failure,
            headline: format!("{} failed", kind.label()),
            detail: Some(detail_lines(failures)),
        }
    }
}

fn detail_lines(failures: &[(&str, &str)]) -> String {
    failures
        .iter()
        .map(|(id, err)| format!("{}: {}", id, err))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Whether the collection must be refetched after this import outcome. The
/// success-name list alone does not identify the resulting collection (the
/// store may have resolved name collisions silently), so any import that
/// created something forces a refetch. Exports never touch the collection.
pub fn import_needs_refetch(outcome: &ImportOutcome) -> bool {
    !outcome.success.is_empty()
}
