use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CorrelationId(pub String);

impl From<String> for CorrelationId {
    fn from(s: String) -> Self {
        CorrelationId(s)
    }
}

impl From<&str> for CorrelationId {
    fn from(s: &str) -> Self {
        CorrelationId(s.to_owned())
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

const REQUEST_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Start time of a request, exactly as written in the log (`<date>T<time><zone>`).
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RequestDate(String);

impl RequestDate {
    pub fn new(date: &str, time: &str, zone: &str) -> Self {
        RequestDate(format!("{date}T{time}{zone}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interprets the raw value with a numeric offset, e.g. `+0000`.
    pub fn to_datetime(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_str(&self.0, REQUEST_DATE_FORMAT).ok()
    }
}

impl fmt::Display for RequestDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A request whose start line has been seen but whose completion has not.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRequest {
    pub id: CorrelationId,
    pub request_date: Option<RequestDate>,
    pub request_type: String,
    pub request_origin: Option<String>,
    pub request_resource: String,
    pub request_resource_query: Option<String>,
}

/// Fields taken from a completion line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseEnd {
    pub response_status: String,
    pub response_success: bool,
    pub response_duration: Option<u64>,
}

/// A start line merged with its completion line.
///
/// When the completion arrived without a recorded start, every `request_*`
/// field is `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedResponse {
    pub id: CorrelationId,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_date: Option<RequestDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_origin: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_resource: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_resource_query: Option<String>,

    pub response_status: String,
    pub response_success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_duration: Option<u64>,
}

impl CompletedResponse {
    pub fn merge(id: CorrelationId, pending: Option<PendingRequest>, end: ResponseEnd) -> Self {
        let ResponseEnd {
            response_status,
            response_success,
            response_duration,
        } = end;

        match pending {
            Some(p) => Self {
                id,
                request_date: p.request_date,
                request_type: Some(p.request_type),
                request_origin: p.request_origin,
                request_resource: Some(p.request_resource),
                request_resource_query: p.request_resource_query,
                response_status,
                response_success,
                response_duration,
            },
            None => Self {
                id,
                request_date: None,
                request_type: None,
                request_origin: None,
                request_resource: None,
                request_resource_query: None,
                response_status,
                response_success,
                response_duration,
            },
        }
    }

    /// Whether a start line was found for this completion.
    pub fn is_matched(&self) -> bool {
        self.request_resource.is_some()
    }
}

/// Running statistics for one resource identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceStat {
    /// `None` collects completions that never had a start line.
    pub resource: Option<String>,
    pub total_count: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_duration: Option<f64>,

    pub success_count: u64,
    pub failure_count: u64,
}
