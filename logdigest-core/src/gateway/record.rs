use crate::digest::{CompletedResponse, ResourceStat};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Requests,
    Summaries,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Table::Requests => f.write_str("requests"),
            Table::Summaries => f.write_str("summaries"),
        }
    }
}

/// Physical names of the two logical tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableNames {
    pub requests: String,
    pub summaries: String,
}

impl TableNames {
    pub fn name(&self, table: Table) -> &str {
        match table {
            Table::Requests => &self.requests,
            Table::Summaries => &self.summaries,
        }
    }
}

impl Default for TableNames {
    fn default() -> Self {
        Self {
            requests: "log-micro-service-logs-dev".to_string(),
            summaries: "log-micro-service-summaries-dev".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Response(CompletedResponse),
    Resource(ResourceStat),
}

impl Record {
    pub fn table(&self) -> Table {
        match self {
            Record::Response(_) => Table::Requests,
            Record::Resource(_) => Table::Summaries,
        }
    }

    /// Identifies the record in log output.
    pub fn key(&self) -> String {
        match self {
            Record::Response(r) => r.id.to_string(),
            Record::Resource(s) => s.resource.clone().unwrap_or_else(|| "<unmatched>".to_string()),
        }
    }
}

impl From<CompletedResponse> for Record {
    fn from(r: CompletedResponse) -> Self {
        Record::Response(r)
    }
}

impl From<ResourceStat> for Record {
    fn from(s: ResourceStat) -> Self {
        Record::Resource(s)
    }
}
