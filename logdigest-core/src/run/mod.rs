//! Drives a full digest over an input directory.
//!
//! ```text
//! discover(dir, pattern)
//!      |
//!      v
//! for each file (sorted):
//!     scan_file --lines--> DigestEngine --responses--> Emitter --puts--> gateway
//!                                                         |
//!                                                      drain()
//!      |
//!      v
//! DigestEngine::finish --stats--> Emitter --puts--> gateway
//!                                    |
//!                                 drain()
//! ```

mod gateway;
mod report;
mod scan;


pub use gateway::build_gateway;
pub use report::RunReport;
pub use scan::scan_file;

use crate::conf::{RuntimeConfig, discover};
use crate::digest::DigestEngine;
use crate::emit::Emitter;
use crate::gateway::{PersistenceGateway, Record};
use anyhow::Context;
use std::sync::Arc;

/// Digests every matching file under the configured input directory.
///
/// Each file's responses are fully persisted before the next file is opened.
/// Summaries are emitted once, after the last file. Only file-read failures
/// abort the run; gateway failures are logged and counted.
pub async fn run_digest(
    config: &RuntimeConfig,
    gateway: Arc<dyn PersistenceGateway>,
) -> anyhow::Result<RunReport> {
    let files = discover(&config.input.dir, &config.input.pattern)?;
    tracing::info!(
        dir = %config.input.dir.display(),
        files = files.len(),
        "starting digest"
    );

    let mut engine = DigestEngine::new();
    let mut emitter = Emitter::new(gateway, &config.emit);
    let mut report = RunReport {
        files: files.len(),
        ..RunReport::default()
    };

    for path in &files {
        let mut responses = Vec::new();
        scan_file(path, |line| {
            if let Some(response) = engine.push_line(line) {
                responses.push(Record::from(response));
            }
        })
        .await
        .with_context(|| format!("failed to read log file {}", path.display()))?;

        tracing::info!(
            file = %path.display(),
            entries = responses.len(),
            "scanned log file"
        );

        let batch = emitter.emit(responses).await;
        tracing::debug!(
            file = %path.display(),
            scheduled = batch.scheduled(),
            outstanding = batch.outstanding(),
            "waiting for writes to settle"
        );
        report.responses += batch.drain().await;
    }

    let summary = engine.finish();
    if summary.abandoned_in_flight > 0 {
        tracing::warn!(
            count = summary.abandoned_in_flight,
            "requests started but never completed"
        );
    }

    tracing::info!(resources = summary.stats.len(), "emitting resource summaries");
    let batch = emitter
        .emit(summary.stats.into_iter().map(Record::from))
        .await;
    report.summaries = batch.drain().await;

    report.record_counters(summary.counters, summary.abandoned_in_flight);

    tracing::info!(
        completed = report.completed,
        responses_failed = report.responses.failed,
        summaries_failed = report.summaries.failed,
        "digest finished"
    );

    Ok(report)
}
