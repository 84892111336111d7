use crate::conf::EmitConfig;
use crate::emit::rate_limit::RateLimiter;
use crate::gateway::{PersistenceGateway, Record};
use serde::Serialize;
use std::ops::AddAssign;
use std::sync::Arc;
use tokio::task::JoinSet;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    pub scheduled: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl AddAssign for BatchOutcome {
    fn add_assign(&mut self, rhs: Self) {
        self.scheduled += rhs.scheduled;
        self.succeeded += rhs.succeeded;
        self.failed += rhs.failed;
    }
}

/// Schedules records onto a gateway under a shared rate limit.
pub struct Emitter {
    gateway: Arc<dyn PersistenceGateway>,
    limiter: RateLimiter,
}

impl Emitter {
    pub fn new(gateway: Arc<dyn PersistenceGateway>, config: &EmitConfig) -> Self {
        Self::with_limiter(gateway, RateLimiter::new(config.rate_limit, config.window))
    }

    pub fn with_limiter(gateway: Arc<dyn PersistenceGateway>, limiter: RateLimiter) -> Self {
        Self { gateway, limiter }
    }

    /// Starts a put for every record, in order, waiting only on the rate limit.
    ///
    /// Returns once the last record has been scheduled; the writes themselves
    /// may still be running.
    pub async fn emit<I>(&mut self, records: I) -> InFlightBatch
    where
        I: IntoIterator<Item = Record>,
    {
        let mut writes = JoinSet::new();
        let mut scheduled = 0;

        for record in records {
            self.limiter.acquire().await;

            let gateway = self.gateway.clone();
            writes.spawn(async move {
                let table = record.table();
                let key = record.key();

                match gateway.put(record).await {
                    Ok(()) => true,
                    Err(e) => {
                        tracing::error!(error = %e, %table, key = %key, "unable to persist record");
                        false
                    }
                }
            });
            scheduled += 1;
        }

        InFlightBatch { writes, scheduled }
    }
}

/// The outstanding writes of one scheduled batch.
pub struct InFlightBatch {
    writes: JoinSet<bool>,
    scheduled: usize,
}

impl InFlightBatch {
    pub fn scheduled(&self) -> usize {
        self.scheduled
    }

    /// Writes that have not been collected by `drain` yet.
    pub fn outstanding(&self) -> usize {
        self.writes.len()
    }

    /// Waits for every write of the batch to settle.
    pub async fn drain(mut self) -> BatchOutcome {
        let mut outcome = BatchOutcome {
            scheduled: self.scheduled,
            ..BatchOutcome::default()
        };

        while let Some(result) = self.writes.join_next().await {
            match result {
                Ok(true) => outcome.succeeded += 1,
                Ok(false) => outcome.failed += 1,
                Err(e) => {
                    tracing::error!(error = %e, "persist task did not complete");
                    outcome.failed += 1;
                }
            }
        }

        outcome
    }
}
