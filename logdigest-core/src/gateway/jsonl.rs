use crate::gateway::{PersistError, PersistenceGateway, Record, Table, TableNames};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Appends each record as one JSON line to `<dir>/<table name>.jsonl`.
pub struct JsonLinesGateway {
    requests: TableFile,
    summaries: TableFile,
}

struct TableFile {
    path: PathBuf,
    file: Mutex<File>,
}

impl JsonLinesGateway {
    pub async fn create(dir: &Path, tables: &TableNames) -> Result<Self, PersistError> {
        Ok(Self {
            requests: TableFile::open(dir, tables, Table::Requests).await?,
            summaries: TableFile::open(dir, tables, Table::Summaries).await?,
        })
    }

    pub fn path(&self, table: Table) -> &Path {
        match table {
            Table::Requests => &self.requests.path,
            Table::Summaries => &self.summaries.path,
        }
    }
}

impl TableFile {
    async fn open(dir: &Path, tables: &TableNames, table: Table) -> Result<Self, PersistError> {
        let path = dir.join(format!("{}.jsonl", tables.name(table)));

        let open_err = |source| PersistError::Open {
            table,
            path: path.clone(),
            source,
        };

        tokio::fs::create_dir_all(dir).await.map_err(open_err)?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(open_err)?;

        tracing::debug!(%table, path = %path.display(), "opened table file");

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }
}

#[async_trait]
impl PersistenceGateway for JsonLinesGateway {
    async fn put(&self, record: Record) -> Result<(), PersistError> {
        let table = record.table();
        let target = match table {
            Table::Requests => &self.requests,
            Table::Summaries => &self.summaries,
        };

        let mut line = serde_json::to_vec(&record)?;
        line.push(b'\n');

        let mut file = target.file.lock().await;
        file.write_all(&line)
            .await
            .map_err(|source| PersistError::Write { table, source })?;
        file.flush()
            .await
            .map_err(|source| PersistError::Write { table, source })?;

        Ok(())
    }
}
