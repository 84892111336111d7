//! Persistence gateways.
//!
//! The pipeline hands records over one at a time and does not care what stores
//! them. Two logical tables exist: one for individual request/response records
//! and one for per-resource summaries.

mod error;
mod jsonl;
mod memory;
mod record;
mod stdout;

#[cfg(test)]
mod tests;

pub use error::PersistError;
pub use jsonl::JsonLinesGateway;
pub use memory::MemoryGateway;
pub use record::{Record, Table, TableNames};
pub use stdout::StdoutGateway;

use async_trait::async_trait;

#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// Stores a single record.
    async fn put(&self, record: Record) -> Result<(), PersistError>;
}
