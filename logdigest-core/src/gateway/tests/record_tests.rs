use crate::digest::{CompletedResponse, CorrelationId, RequestDate, ResourceStat};
use crate::gateway::{Record, Table, TableNames};
use pretty_assertions::assert_eq;
use serde_json::json;

fn matched_response() -> CompletedResponse {
    CompletedResponse {
        id: CorrelationId::from("a"),
        request_date: Some(RequestDate::new("2020-01-01", "00:00:00", "+0000")),
        request_type: Some("GET".to_string()),
        request_origin: Some("1.2.3.4".to_string()),
        request_resource: Some("/x".to_string()),
        request_resource_query: Some("page=2".to_string()),
        response_status: "200".to_string(),
        response_success: true,
        response_duration: Some(5),
    }
}

#[test]
fn response_record_serializes_with_camel_case_fields() {
    // Arrange
    let record = Record::from(matched_response());

    // Act
    let value = serde_json::to_value(&record).unwrap();

    // Assert
    assert_eq!(
        value,
        json!({
            "id": "a",
            "requestDate": "2020-01-01T00:00:00+0000",
            "requestType": "GET",
            "requestOrigin": "1.2.3.4",
            "requestResource": "/x",
            "requestResourceQuery": "page=2",
            "responseStatus": "200",
            "responseSuccess": true,
            "responseDuration": 5
        })
    );
    assert_eq!(record.table(), Table::Requests);
    assert_eq!(record.key(), "a");
}

#[test]
fn unmatched_response_omits_request_fields() {
    let record = Record::from(CompletedResponse::merge(
        CorrelationId::from("z"),
        None,
        crate::digest::ResponseEnd {
            response_status: "404".to_string(),
            response_success: false,
            response_duration: None,
        },
    ));

    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(
        value,
        json!({
            "id": "z",
            "responseStatus": "404",
            "responseSuccess": false
        })
    );
}

#[test]
fn resource_record_serializes_summary_shape() {
    let record = Record::from(ResourceStat {
        resource: Some("/x".to_string()),
        total_count: 4,
        average_duration: Some(187.5),
        success_count: 3,
        failure_count: 1,
    });

    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(
        value,
        json!({
            "resource": "/x",
            "totalCount": 4,
            "averageDuration": 187.5,
            "successCount": 3,
            "failureCount": 1
        })
    );
    assert_eq!(record.table(), Table::Summaries);
    assert_eq!(record.key(), "/x");
}

#[test]
fn table_names_resolve_per_table() {
    let names = TableNames {
        requests: "logs".to_string(),
        summaries: "sums".to_string(),
    };

    assert_eq!(names.name(Table::Requests), "logs");
    assert_eq!(names.name(Table::Summaries), "sums");
}
