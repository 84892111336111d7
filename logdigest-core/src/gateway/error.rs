use crate::gateway::Table;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to open {table} table at {path}: {source}")]
    Open {
        table: Table,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write to {table} table: {source}")]
    Write {
        table: Table,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("record rejected by gateway: {reason}")]
    Rejected { reason: String },
}
