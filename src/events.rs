// Messages that flow between the fetch worker and the TUI
//
// The fetch worker and the presenter never share mutable state: the worker
// receives FetchRequests over one mpsc channel and delivers FetchOutcomes
// over another. Each request carries a generation stamp so the presenter can
// discard outcomes that were superseded by a newer query while in flight.

use crate::fetch::FetchError;
use crate::spell::SpellRecord;
use std::time::Duration;

/// A request for the fetch worker: load the catalog, optionally filtered by
/// a name query.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// Monotonically increasing stamp. The presenter only applies the
    /// outcome whose generation matches the newest request it issued.
    pub generation: u64,
    /// Free-text name filter, possibly empty (empty = unfiltered catalog).
    pub query: String,
}

/// The result of one request/decode cycle.
#[derive(Debug)]
pub struct FetchOutcome {
    pub generation: u64,
    /// The query this outcome answers, echoed back for logging.
    pub query: String,
    /// Wall time from request start to decoded response.
    pub duration: Duration,
    pub result: Result<Vec<SpellRecord>, FetchError>,
}

/// Summary statistics for the status bar.
#[derive(Debug, Clone, Default)]
pub struct Stats {
    pub total_fetches: usize,
    pub failed_fetches: usize,
    pub total_duration: Duration,
    /// Records currently displayed (size of the last successful snapshot).
    pub record_count: usize,
}

impl Stats {
    /// Record a completed fetch (successful or not).
    pub fn record_fetch(&mut self, duration: Duration, failed: bool) {
        self.total_fetches += 1;
        if failed {
            self.failed_fetches += 1;
        }
        self.total_duration += duration;
    }

    pub fn avg_duration(&self) -> Duration {
        if self.total_fetches == 0 {
            Duration::default()
        } else {
            self.total_duration / self.total_fetches as u32
        }
    }
}
