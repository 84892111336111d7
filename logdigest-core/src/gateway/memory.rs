use crate::digest::{CompletedResponse, ResourceStat};
use crate::gateway::{PersistError, PersistenceGateway, Record};
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;

type RejectFn = Box<dyn Fn(&Record) -> bool + Send + Sync>;

/// Keeps every stored record in memory, in the order `put` was called.
#[derive(Default)]
pub struct MemoryGateway {
    records: Mutex<Vec<Record>>,
    reject: Option<RejectFn>,
    latency: Option<Duration>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails every record matching `reject` instead of storing it.
    pub fn rejecting(reject: impl Fn(&Record) -> bool + Send + Sync + 'static) -> Self {
        Self {
            reject: Some(Box::new(reject)),
            ..Self::default()
        }
    }

    /// Delays completion of every put by `latency` after it has been recorded.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn records(&self) -> Vec<Record> {
        self.lock().clone()
    }

    pub fn responses(&self) -> Vec<CompletedResponse> {
        self.lock()
            .iter()
            .filter_map(|r| match r {
                Record::Response(r) => Some(r.clone()),
                Record::Resource(_) => None,
            })
            .collect()
    }

    pub fn summaries(&self) -> Vec<ResourceStat> {
        self.lock()
            .iter()
            .filter_map(|r| match r {
                Record::Resource(s) => Some(s.clone()),
                Record::Response(_) => None,
            })
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Record>> {
        // A panic while holding the lock leaves the Vec intact.
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl PersistenceGateway for MemoryGateway {
    async fn put(&self, record: Record) -> Result<(), PersistError> {
        if let Some(reject) = &self.reject {
            if reject(&record) {
                return Err(PersistError::Rejected {
                    reason: format!("{} {}", record.table(), record.key()),
                });
            }
        }

        self.lock().push(record);

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        Ok(())
    }
}
