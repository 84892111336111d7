use crate::digest::{
    CompletedResponse, CorrelationId, ResourceAggregator, ResourceStat, update_resource,
};
use pretty_assertions::assert_eq;

fn response(resource: Option<&str>, success: bool, duration: Option<u64>) -> CompletedResponse {
    CompletedResponse {
        id: CorrelationId::from("id"),
        request_date: None,
        request_type: resource.map(|_| "GET".to_string()),
        request_origin: None,
        request_resource: resource.map(str::to_string),
        request_resource_query: None,
        response_status: if success { "200" } else { "500" }.to_string(),
        response_success: success,
        response_duration: duration,
    }
}

#[test]
fn first_response_initializes_stat() {
    // Act
    let stat = update_resource(None, &response(Some("/x"), true, Some(5)));

    // Assert
    assert_eq!(
        stat,
        ResourceStat {
            resource: Some("/x".to_string()),
            total_count: 1,
            average_duration: Some(5.0),
            success_count: 1,
            failure_count: 0,
        }
    );
}

#[test]
fn first_failed_response_without_duration() {
    let stat = update_resource(None, &response(Some("/x"), false, None));

    assert_eq!(stat.total_count, 1);
    assert_eq!(stat.success_count, 0);
    assert_eq!(stat.failure_count, 1);
    assert_eq!(stat.average_duration, None);
}

#[test]
fn running_average_skips_missing_durations_but_advances_count() {
    // Arrange
    let durations = [Some(100), Some(200), None, Some(300)];
    let expected = [100.0, 150.0, 150.0, 187.5];
    let mut stat: Option<ResourceStat> = None;

    // Act / Assert
    for (duration, want) in durations.into_iter().zip(expected) {
        let next = update_resource(stat.as_ref(), &response(Some("/x"), true, duration));
        assert_eq!(next.average_duration, Some(want));
        stat = Some(next);
    }

    let stat = stat.unwrap();
    assert_eq!(stat.total_count, 4);
    assert_eq!(stat.success_count + stat.failure_count, 4);
}

#[test]
fn total_count_is_recomputed_from_success_and_failure() {
    // Arrange: a prior stat whose stored total disagrees with its counts.
    let prior = ResourceStat {
        resource: Some("/x".to_string()),
        total_count: 99,
        average_duration: Some(10.0),
        success_count: 1,
        failure_count: 1,
    };

    // Act
    let next = update_resource(Some(&prior), &response(Some("/x"), false, Some(40)));

    // Assert
    assert_eq!(next.total_count, 3);
    assert_eq!(next.failure_count, 2);
    assert_eq!(next.average_duration, Some(20.0));
}

#[test]
fn missing_prior_average_counts_as_zero() {
    let first = update_resource(None, &response(Some("/x"), true, None));
    let second = update_resource(Some(&first), &response(Some("/x"), true, Some(50)));

    assert_eq!(second.average_duration, Some(25.0));
    assert_eq!(second.total_count, 2);
}

#[test]
fn aggregator_keeps_one_stat_per_resource() {
    // Arrange
    let mut agg = ResourceAggregator::new();

    // Act
    agg.record(&response(Some("/b"), true, Some(10)));
    agg.record(&response(Some("/a"), false, Some(30)));
    agg.record(&response(Some("/b"), false, Some(20)));

    // Assert
    assert_eq!(agg.len(), 2);

    let b = agg.get(Some("/b")).unwrap();
    assert_eq!(b.total_count, 2);
    assert_eq!(b.success_count, 1);
    assert_eq!(b.failure_count, 1);
    assert_eq!(b.average_duration, Some(15.0));

    let order: Vec<_> = agg.into_stats().into_iter().map(|s| s.resource).collect();
    assert_eq!(order, vec![Some("/a".to_string()), Some("/b".to_string())]);
}

#[test]
fn aggregator_groups_unmatched_completions() {
    let mut agg = ResourceAggregator::new();

    agg.record(&response(None, true, Some(1)));
    agg.record(&response(None, true, Some(3)));

    let stat = agg.get(None).unwrap();
    assert_eq!(stat.resource, None);
    assert_eq!(stat.total_count, 2);
    assert_eq!(stat.average_duration, Some(2.0));
}
