//! Log Digest Engine
//!
//! This module turns raw access-log lines into request/response records and
//! per-resource statistics.
//!
//! A request shows up in the log twice: once when it starts and once when it
//! completes. Both lines carry the same bracketed correlation ID, and any number
//! of unrelated lines may sit between them. The engine remembers every started
//! request until its completion line arrives, then merges the two halves into a
//! single record.
//!
//! Every completed record is also folded into a running summary for its resource
//! (the request path, without the query, lower-cased): how many calls, how many
//! succeeded or failed, and the average response time so far.
//!
//! The overall data processing architecture is:
//!
//! ```text
//! line
//!   |
//!   v
//! classify --> LineKind::{Start, End, Irrelevant}
//!   |
//!   v
//! Correlator (in-flight by ID) --End--> CompletedResponse
//!                                          |
//!                                          v
//!                                  ResourceAggregator --> ResourceStat
//! ```

mod aggregate;
mod classify;
mod correlate;
mod engine;
mod parse;
mod types;

#[cfg(test)]
mod tests;

pub use aggregate::{ResourceAggregator, update_resource};
pub use classify::{LineKind, classify, correlation_id};
pub use correlate::Correlator;
pub use engine::{DigestCounters, DigestEngine, DigestSummary};
pub use parse::{extract_duration_ms, normalize_resource, parse_request_end, parse_request_start};
pub use types::*;
