mod common;

use integration_tests::harness::{captured_events, init_test_tracing};
use logdigest_core::gateway::{MemoryGateway, Record};
use logdigest_core::run::run_digest;
use std::sync::Arc;
use tempfile::tempdir;
use tracing::Level;

/// A rejected put is logged with its table and key, and the run carries on.
#[tokio::test(start_paused = true)]
async fn rejected_puts_are_logged_and_counted() {
    // Arrange
    init_test_tracing();
    let out = tempdir().unwrap();
    let cfg = common::fixture_config(out.path());
    let gateway = Arc::new(MemoryGateway::rejecting(|r| {
        matches!(r, Record::Response(res) if res.id.0 == "a3")
            || matches!(r, Record::Resource(s) if s.resource.as_deref() == Some("/orders"))
    }));

    // Act
    let report = run_digest(&cfg, gateway.clone()).await.unwrap();

    // Assert
    assert_eq!(report.responses.failed, 1);
    assert_eq!(report.responses.succeeded, 4);
    assert_eq!(report.summaries.failed, 1);
    assert_eq!(report.summaries.succeeded, 2);

    let failures: Vec<_> = captured_events()
        .into_iter()
        .filter(|e| e.level == Level::ERROR)
        .filter(|e| e.message() == Some("unable to persist record"))
        .collect();

    assert_eq!(failures.len(), 2);
    assert_eq!(failures[0].field("table"), Some("requests"));
    assert_eq!(failures[0].field("key"), Some("a3"));
    assert_eq!(failures[1].field("table"), Some("summaries"));
    assert_eq!(failures[1].field("key"), Some("/orders"));
}

/// Requests that never complete are reported once the last file is read.
#[tokio::test(start_paused = true)]
async fn abandoned_requests_are_warned_about() {
    init_test_tracing();
    let out = tempdir().unwrap();
    let cfg = common::fixture_config(out.path());

    run_digest(&cfg, Arc::new(MemoryGateway::new()))
        .await
        .unwrap();

    let warned = captured_events().into_iter().any(|e| {
        e.level == Level::WARN
            && e.message() == Some("requests started but never completed")
            && e.field("count") == Some("1")
    });
    assert!(warned);
}
