use crate::digest::DigestCounters;
use crate::emit::BatchOutcome;
use serde::Serialize;

/// Totals for one `run_digest` call.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub files: usize,
    pub lines: u64,
    pub started: u64,
    pub completed: u64,
    pub unmatched_completions: u64,
    pub parse_misses: u64,
    pub abandoned_in_flight: usize,
    pub responses: BatchOutcome,
    pub summaries: BatchOutcome,
}

impl RunReport {
    pub(crate) fn record_counters(&mut self, counters: DigestCounters, abandoned_in_flight: usize) {
        self.lines = counters.lines;
        self.started = counters.started;
        self.completed = counters.completed;
        self.unmatched_completions = counters.unmatched_completions;
        self.parse_misses = counters.parse_misses;
        self.abandoned_in_flight = abandoned_in_flight;
    }
}
