use crate::digest::{LineKind, classify, correlation_id};
use pretty_assertions::assert_eq;

#[test]
fn correlation_id_is_text_inside_leading_brackets() {
    assert_eq!(correlation_id("[abc-123] Started GET"), Some("abc-123"));
    assert_eq!(correlation_id("[] Completed 200"), Some(""));
    assert_eq!(correlation_id("[a] [b] Completed"), Some("a"));
}

#[test]
fn correlation_id_requires_prefix() {
    assert_eq!(correlation_id("Started GET \"/x\""), None);
    assert_eq!(correlation_id(" [a] Started GET"), None);
    assert_eq!(correlation_id("[unterminated Started GET"), None);
}

#[test]
fn classify_start_line() {
    let line = "[a] Started GET \"/x\" for 1.2.3.4 at 2020-01-01 00:00:00 +0000";

    assert_eq!(classify(line), LineKind::Start { id: "a" });
}

#[test]
fn classify_end_line() {
    let line = "[a] Completed 200 OK in 5ms";

    assert_eq!(classify(line), LineKind::End { id: "a" });
}

#[test]
fn classify_ignores_lines_without_correlation_id() {
    assert_eq!(classify("Started GET \"/x\" for 1.2.3.4"), LineKind::Irrelevant);
    assert_eq!(classify("Completed 200 OK in 5ms"), LineKind::Irrelevant);
}

#[test]
fn classify_ignores_lines_without_markers() {
    let line = "[a]   Rendering layout layouts/application.html.erb";

    assert_eq!(classify(line), LineKind::Irrelevant);
}

#[test]
fn classify_excludes_asset_start_lines() {
    let line = "[a] Started GET \"/assets/app.css\" for 1.2.3.4 at 2020-01-01 00:00:00 +0000";

    assert_eq!(classify(line), LineKind::Irrelevant);
}

#[test]
fn classify_does_not_exclude_asset_end_lines() {
    let line = "[a] Completed 200 OK in 1ms (/assets/app.css)";

    assert_eq!(classify(line), LineKind::End { id: "a" });
}

#[test]
fn classify_prefers_start_over_end() {
    let line = "[a] Started GET \"/x\" Completed";

    assert_eq!(classify(line), LineKind::Start { id: "a" });
}

#[test]
fn classify_is_idempotent() {
    let lines = [
        "[a] Started GET \"/x\" for 1.2.3.4 at 2020-01-01 00:00:00 +0000",
        "[a] Completed 200 OK in 5ms",
        "[b] Started GET \"/assets/x.js\" for 1.2.3.4",
        "[c] Processing by HomeController#index as HTML",
        "no id here",
    ];

    for line in lines {
        assert_eq!(classify(line), classify(line));
    }
}
