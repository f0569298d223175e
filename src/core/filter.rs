//! Debounced search filter - Rate-limits keystrokes before they reach filtering

use std::time::{Duration, Instant};

/// Default quiet window before a raw value commits.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Two-stage filter value: `raw` follows every keystroke, `debounced` commits
/// only after input has been quiet for the window. Only `debounced` feeds the
/// view projection.
#[derive(Debug, Clone)]
pub struct DebouncedFilter {
    raw: String,
    debounced: String,
    window: Duration,
    /// Time of the last keystroke while a commit is still pending. A newer
    /// keystroke restarts the window, so only the most recent value can
    /// ever commit.
    last_input_at: Option<Instant>,
}

impl DebouncedFilter {
    pub fn new(window: Duration) -> Self {
        Self {
            raw: String::new(),
            debounced: String::new(),
            window,
            last_input_at: None,
        }
    }

    /// Raw value, updated synchronously on every keystroke.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Mutable access for the search box widget.
    pub fn raw_mut(&mut self) -> &mut String {
        &mut self.raw
    }

    /// Committed value; lags `raw` by at most the window.
    pub fn debounced(&self) -> &str {
        &self.debounced
    }

    /// Record a keystroke at `now`.
    pub fn set(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        if text == self.raw {
            return;
        }
        self.raw = text;
        self.mark_input(now);
    }

    /// Restart the quiet window; used when the widget mutated `raw` in place.
    pub fn mark_input(&mut self, now: Instant) {
        self.last_input_at = Some(now);
    }

    /// Commit the raw value once the quiet window has elapsed. Returns true
    /// when the debounced value changed owners this tick.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.last_input_at {
            Some(last) if now.duration_since(last) >= self.window => {
                self.last_input_at = None;
                self.debounced = self.raw.clone();
                true
            }
            _ => false,
        }
    }

    /// Whether a commit is still pending.
    pub fn is_pending(&self) -> bool {
        self.last_input_at.is_some()
    }

    /// Time until the pending commit fires, for repaint scheduling.
    pub fn time_to_commit(&self, now: Instant) -> Option<Duration> {
        self.last_input_at
            .map(|last| (last + self.window).saturating_duration_since(now))
    }
}

impl Default for DebouncedFilter {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    #[test]
    fn commits_once_after_quiet_window() {
        let base = Instant::now();
        let mut f = DebouncedFilter::new(Duration::from_millis(500));

        f.set("o", at(base, 0));
        f.set("of", at(base, 100));
        f.set("off", at(base, 200));

        // Raw follows immediately, debounced has not moved yet.
        assert_eq!(f.raw(), "off");
        assert_eq!(f.debounced(), "");

        assert!(!f.tick(at(base, 300)));
        assert!(!f.tick(at(base, 699)));
        assert!(f.tick(at(base, 700)));
        assert_eq!(f.debounced(), "off");

        // Exactly once: nothing further commits without new input.
        assert!(!f.tick(at(base, 1500)));
    }

    #[test]
    fn newer_keystroke_supersedes_pending_value() {
        let base = Instant::now();
        let mut f = DebouncedFilter::new(Duration::from_millis(500));

        f.set("alpha", at(base, 0));
        f.set("beta", at(base, 450));

        // The window restarted; the "alpha" commit never fires.
        assert!(!f.tick(at(base, 500)));
        assert!(f.tick(at(base, 950)));
        assert_eq!(f.debounced(), "beta");
    }

    #[test]
    fn unchanged_text_does_not_restart_window() {
        let base = Instant::now();
        let mut f = DebouncedFilter::new(Duration::from_millis(500));

        f.set("x", at(base, 0));
        f.set("x", at(base, 400));
        assert!(f.tick(at(base, 500)));
        assert_eq!(f.debounced(), "x");
    }
}
