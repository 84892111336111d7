use crate::gateway::{PersistError, PersistenceGateway, Record, TableNames};
use async_trait::async_trait;
use serde::Serialize;
use std::io::{self, Write};
use std::sync::Mutex;

type Sink = Box<dyn Write + Send>;

/// Prints each record as a JSON line instead of storing it.
pub struct StdoutGateway {
    tables: TableNames,
    out: Mutex<Sink>,
}

#[derive(Serialize)]
struct StdoutItem<'a> {
    table: &'a str,
    item: &'a Record,
}

impl StdoutGateway {
    pub fn new(tables: TableNames) -> Self {
        Self::with_writer(tables, io::stdout())
    }

    /// Writes the lines to `out` instead of stdout.
    pub fn with_writer(tables: TableNames, out: impl Write + Send + 'static) -> Self {
        Self {
            tables,
            out: Mutex::new(Box::new(out)),
        }
    }
}

#[async_trait]
impl PersistenceGateway for StdoutGateway {
    async fn put(&self, record: Record) -> Result<(), PersistError> {
        let table = record.table();
        let mut line = serde_json::to_vec(&StdoutItem {
            table: self.tables.name(table),
            item: &record,
        })?;
        line.push(b'\n');

        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        out.write_all(&line)
            .and_then(|()| out.flush())
            .map_err(|source| PersistError::Write { table, source })
    }
}
