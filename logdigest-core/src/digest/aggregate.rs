use crate::digest::types::{CompletedResponse, ResourceStat};
use std::collections::BTreeMap;

/// Folds one completed response into the statistic for its resource.
///
/// The prior total is recomputed as `success_count + failure_count`, and the
/// average denominator advances by one for every response, including those
/// without a duration. Consumers of the stored summaries rely on these exact
/// values.
pub fn update_resource(existing: Option<&ResourceStat>, response: &CompletedResponse) -> ResourceStat {
    let success = u64::from(response.response_success);
    let failure = u64::from(!response.response_success);

    let Some(prior) = existing else {
        return ResourceStat {
            resource: response.request_resource.clone(),
            total_count: 1,
            average_duration: response.response_duration.map(|d| d as f64),
            success_count: success,
            failure_count: failure,
        };
    };

    let total_count = prior.success_count + prior.failure_count;

    let average_duration = match response.response_duration {
        Some(duration) => {
            // An earlier response without a duration left no average; count it as zero.
            let prior_average = prior.average_duration.unwrap_or(0.0);
            let total_duration = total_count as f64 * prior_average + duration as f64;
            Some(total_duration / (total_count + 1) as f64)
        }
        None => prior.average_duration,
    };

    ResourceStat {
        resource: response.request_resource.clone(),
        total_count: total_count + 1,
        average_duration,
        success_count: prior.success_count + success,
        failure_count: prior.failure_count + failure,
    }
}

/// Per-resource statistics for one run, keyed by resource identifier.
#[derive(Debug, Default)]
pub struct ResourceAggregator {
    stats: BTreeMap<Option<String>, ResourceStat>,
}

impl ResourceAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, response: &CompletedResponse) {
        let key = response.request_resource.clone();
        let updated = update_resource(self.stats.get(&key), response);
        self.stats.insert(key, updated);
    }

    pub fn get(&self, resource: Option<&str>) -> Option<&ResourceStat> {
        self.stats.get(&resource.map(str::to_owned))
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Consumes the aggregator, yielding stats in ascending resource order.
    pub fn into_stats(self) -> Vec<ResourceStat> {
        self.stats.into_values().collect()
    }
}
