// TUI application state
//
// Owns the current spell snapshot, the search field, selection, and fetch
// bookkeeping. This is the single writer of the displayed list: fetch
// outcomes only land here, via apply_outcome, and stale generations are
// dropped on the floor.

use crate::events::{FetchOutcome, FetchRequest, Stats};
use crate::logging::LogBuffer;
use crate::spell::SpellRecord;
use std::time::Instant;
use tokio::sync::mpsc;

/// Different views the TUI can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Spells, // Searchable list with detail
    Logs, // System log buffer
    Help, // Keybindings
}

impl View {
    /// Get the next view in cycle
    pub fn next(self) -> Self {
        match self {
            View::Spells => View::Logs,
            View::Logs => View::Help,
            View::Help => View::Spells,
        }
    }

    /// Get display name for the status bar
    pub fn name(&self) -> &'static str {
        match self {
            View::Spells => "Spells",
            View::Logs => "Logs",
            View::Help => "Help",
        }
    }
}

/// Main application state for the TUI
pub struct App {
    /// Current spell snapshot (replaced wholesale on each successful fetch)
    pub spells: Vec<SpellRecord>,

    /// Index of the selected spell within the current snapshot
    pub selected: usize,

    /// Live search query (name filter)
    pub search: String,

    /// Whether keystrokes currently edit the search field
    pub search_active: bool,

    /// Last fetch error, shown as a banner until the next success
    pub error: Option<String>,

    /// Whether a fetch is in flight or pending
    pub loading: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Current view being displayed
    pub view: View,

    /// Accumulated statistics
    pub stats: Stats,

    /// When the app started (for uptime display)
    pub start_time: Instant,

    /// Log buffer for the logs view
    pub log_buffer: LogBuffer,

    /// Demo-mode badge in the title bar
    pub demo_mode: bool,

    /// Channel to the fetch worker
    request_tx: mpsc::Sender<FetchRequest>,

    /// Generation of the newest request issued. Outcomes with an older
    /// generation were superseded while in flight and are ignored.
    newest_generation: u64,
}

impl App {
    pub fn new(request_tx: mpsc::Sender<FetchRequest>, log_buffer: LogBuffer, demo_mode: bool) -> Self {
        Self {
            spells: Vec::new(),
            selected: 0,
            search: String::new(),
            search_active: false,
            error: None,
            loading: false,
            should_quit: false,
            view: View::default(),
            stats: Stats::default(),
            start_time: Instant::now(),
            log_buffer,
            demo_mode,
            request_tx,
            newest_generation: 0,
        }
    }

    /// Issue a fetch for the current query. Called on startup, on every
    /// search edit, and on manual refresh.
    pub fn issue_fetch(&mut self) {
        self.newest_generation += 1;
        self.loading = true;

        let request = FetchRequest {
            generation: self.newest_generation,
            query: self.search.clone(),
        };
        // The worker coalesces to the newest request, so a full channel just
        // means there is already a newer one queued than whatever gets lost.
        if self.request_tx.try_send(request).is_err() {
            tracing::warn!("fetch request channel full, dropping request");
        }
    }

    /// Apply a fetch outcome. Stale generations (superseded by a newer
    /// query while in flight) are ignored; failures keep the previous
    /// snapshot and raise the error banner.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) {
        if outcome.generation < self.newest_generation {
            tracing::debug!(
                "ignoring stale fetch outcome (generation {} < {})",
                outcome.generation,
                self.newest_generation
            );
            return;
        }

        self.loading = false;
        self.stats
            .record_fetch(outcome.duration, outcome.result.is_err());

        match outcome.result {
            Ok(spells) => {
                self.error = None;
                self.spells = spells;
                self.stats.record_count = self.spells.len();
                // Clamp the selection when the snapshot shrinks
                if self.selected >= self.spells.len() {
                    self.selected = self.spells.len().saturating_sub(1);
                }
            }
            Err(e) => {
                // Previous snapshot stays on screen
                self.error = Some(e.to_string());
            }
        }
    }

    /// The record currently shown in the detail panel
    pub fn selected_spell(&self) -> Option<&SpellRecord> {
        self.spells.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.spells.is_empty() && self.selected + 1 < self.spells.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.spells.len().saturating_sub(1);
    }

    /// Append to the search query and refetch
    pub fn search_push(&mut self, c: char) {
        self.search.push(c);
        self.issue_fetch();
    }

    /// Delete the last search character and refetch
    pub fn search_pop(&mut self) {
        if self.search.pop().is_some() {
            self.issue_fetch();
        }
    }

    /// Clear the search query and refetch the unfiltered catalog
    pub fn search_clear(&mut self) {
        if !self.search.is_empty() {
            self.search.clear();
            self.issue_fetch();
        }
    }

    /// Switch to the next view
    pub fn next_view(&mut self) {
        self.view = self.view.next();
    }

    /// Uptime as h:mm:ss for the status bar
    pub fn uptime(&self) -> String {
        let secs = self.start_time.elapsed().as_secs();
        format!("{}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchError;
    use std::time::Duration;

    fn test_app() -> (App, mpsc::Receiver<FetchRequest>) {
        let (tx, rx) = mpsc::channel(16);
        (App::new(tx, LogBuffer::new(), false), rx)
    }

    fn spell(name: &str) -> SpellRecord {
        SpellRecord {
            name: name.to_string(),
            incantation: None,
            can_be_verbal: None,
            effect: None,
            kind: None,
            light: None,
            creator: None,
        }
    }

    fn ok_outcome(generation: u64, names: &[&str]) -> FetchOutcome {
        FetchOutcome {
            generation,
            query: String::new(),
            duration: Duration::from_millis(10),
            result: Ok(names.iter().map(|n| spell(n)).collect()),
        }
    }

    #[test]
    fn successful_outcome_replaces_the_snapshot() {
        let (mut app, _rx) = test_app();
        app.issue_fetch();
        app.apply_outcome(ok_outcome(1, &["Accio", "Lumos"]));

        assert_eq!(app.spells.len(), 2);
        assert!(!app.loading);
        assert!(app.error.is_none());
        assert_eq!(app.stats.record_count, 2);
    }

    #[test]
    fn stale_outcome_is_ignored() {
        let (mut app, _rx) = test_app();
        app.issue_fetch(); // generation 1
        app.issue_fetch(); // generation 2

        // Generation 1 completes after 2 was issued - must not land.
        app.apply_outcome(ok_outcome(1, &["Stale"]));
        assert!(app.spells.is_empty());
        assert!(app.loading);

        app.apply_outcome(ok_outcome(2, &["Fresh"]));
        assert_eq!(app.spells[0].name, "Fresh");
        assert!(!app.loading);
    }

    #[test]
    fn failed_fetch_keeps_the_previous_snapshot() {
        let (mut app, _rx) = test_app();
        app.issue_fetch();
        app.apply_outcome(ok_outcome(1, &["Accio"]));

        app.issue_fetch();
        app.apply_outcome(FetchOutcome {
            generation: 2,
            query: "x".to_string(),
            duration: Duration::from_millis(5),
            result: Err(FetchError::Status(503)),
        });

        // List unchanged, error banner raised.
        assert_eq!(app.spells.len(), 1);
        assert_eq!(app.spells[0].name, "Accio");
        assert!(app.error.as_deref().unwrap().contains("503"));
        assert_eq!(app.stats.failed_fetches, 1);
    }

    #[test]
    fn selection_is_clamped_when_the_snapshot_shrinks() {
        let (mut app, _rx) = test_app();
        app.issue_fetch();
        app.apply_outcome(ok_outcome(1, &["a", "b", "c"]));
        app.select_last();
        assert_eq!(app.selected, 2);

        app.issue_fetch();
        app.apply_outcome(ok_outcome(2, &["a"]));
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn search_edits_issue_fetches() {
        let (mut app, mut rx) = test_app();
        app.search_push('l');
        app.search_push('u');

        let first = rx.try_recv().unwrap();
        let second = rx.try_recv().unwrap();
        assert_eq!(first.query, "l");
        assert_eq!(second.query, "lu");
        assert!(second.generation > first.generation);
    }

    #[test]
    fn clearing_an_empty_search_does_not_refetch() {
        let (mut app, mut rx) = test_app();
        app.search_clear();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn selection_does_not_move_past_the_ends() {
        let (mut app, _rx) = test_app();
        app.select_prev();
        assert_eq!(app.selected, 0);

        app.apply_outcome(ok_outcome(0, &["a", "b"]));
        app.select_next();
        app.select_next();
        app.select_next();
        assert_eq!(app.selected, 1);
    }
}
