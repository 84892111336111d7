use crate::digest::types::{CompletedResponse, CorrelationId, PendingRequest, ResponseEnd};
use ahash::RandomState;
use std::collections::HashMap;

/// Holds started requests until their completion line shows up.
///
/// Entries are only ever removed by a matching completion. Requests that never
/// complete stay until the correlator is dropped.
#[derive(Debug, Default)]
pub struct Correlator {
    in_flight: HashMap<CorrelationId, PendingRequest, RandomState>,
}

impl Correlator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a started request, replacing any earlier start with the same ID.
    /// Returns the replaced entry.
    pub fn start(&mut self, pending: PendingRequest) -> Option<PendingRequest> {
        let replaced = self.in_flight.insert(pending.id.clone(), pending);

        if let Some(old) = &replaced {
            tracing::debug!(id = %old.id, resource = %old.request_resource, "start line replaced an in-flight request");
        }

        replaced
    }

    /// Closes the request with `id`, merging whatever start fields were recorded.
    pub fn complete(&mut self, id: CorrelationId, end: ResponseEnd) -> CompletedResponse {
        let pending = self.in_flight.remove(&id);

        if pending.is_none() {
            tracing::debug!(%id, status = %end.response_status, "completion without a recorded start");
        }

        CompletedResponse::merge(id, pending, end)
    }

    pub fn is_in_flight(&self, id: &CorrelationId) -> bool {
        self.in_flight.contains_key(id)
    }

    pub fn in_flight_len(&self) -> usize {
        self.in_flight.len()
    }
}
