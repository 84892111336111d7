use crate::digest::aggregate::ResourceAggregator;
use crate::digest::classify::{LineKind, classify};
use crate::digest::correlate::Correlator;
use crate::digest::parse::{parse_request_end, parse_request_start};
use crate::digest::types::{CompletedResponse, CorrelationId, ResourceStat};
use serde::Serialize;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DigestCounters {
    pub lines: u64,
    pub started: u64,
    pub completed: u64,
    pub unmatched_completions: u64,
    pub parse_misses: u64,
}

/// Correlation and aggregation state for a single run.
///
/// Lines must be pushed in file order, then line order.
#[derive(Debug, Default)]
pub struct DigestEngine {
    correlator: Correlator,
    aggregator: ResourceAggregator,
    counters: DigestCounters,
}

/// What is left once every file has been scanned.
#[derive(Debug)]
pub struct DigestSummary {
    pub stats: Vec<ResourceStat>,
    pub counters: DigestCounters,
    /// Started requests that never saw a completion line.
    pub abandoned_in_flight: usize,
}

impl DigestEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one line through classify -> correlate -> aggregate.
    ///
    /// Returns the completed response when the line closes a request.
    pub fn push_line(&mut self, line: &str) -> Option<CompletedResponse> {
        self.counters.lines += 1;

        match classify(line) {
            LineKind::Start { id } => {
                match parse_request_start(id, line) {
                    Some(pending) => {
                        self.counters.started += 1;
                        self.correlator.start(pending);
                    }
                    None => self.parse_miss(line),
                }
                None
            }

            LineKind::End { id } => {
                let Some(end) = parse_request_end(line) else {
                    self.parse_miss(line);
                    return None;
                };

                let response = self.correlator.complete(CorrelationId::from(id), end);

                self.counters.completed += 1;
                if !response.is_matched() {
                    self.counters.unmatched_completions += 1;
                }

                self.aggregator.record(&response);
                Some(response)
            }

            LineKind::Irrelevant => None,
        }
    }

    fn parse_miss(&mut self, line: &str) {
        self.counters.parse_misses += 1;
        tracing::trace!(line, "skipping line with missing fields");
    }

    pub fn counters(&self) -> DigestCounters {
        self.counters
    }

    pub fn correlator(&self) -> &Correlator {
        &self.correlator
    }

    pub fn aggregator(&self) -> &ResourceAggregator {
        &self.aggregator
    }

    pub fn finish(self) -> DigestSummary {
        DigestSummary {
            abandoned_in_flight: self.correlator.in_flight_len(),
            counters: self.counters,
            stats: self.aggregator.into_stats(),
        }
    }
}
