//! Batch Emission
//!
//! Records are handed to the persistence gateway one at a time. Two rules apply:
//!
//! - **Rate limit**: at most `rate_limit` puts may *start* within any rolling
//!   window (1s by default). How long each put takes does not matter.
//! - **Fan-out**: a put is spawned and not awaited before the next one is
//!   scheduled, so several writes can be in flight at once.
//!
//! Scheduling a batch returns an [`InFlightBatch`]. Calling
//! [`InFlightBatch::drain`] waits until every write of that batch has settled and
//! reports how many succeeded. A failed write is logged and counted, never retried.

mod batch;
mod rate_limit;

#[cfg(test)]
mod tests;

pub use batch::{BatchOutcome, Emitter, InFlightBatch};
pub use rate_limit::RateLimiter;
