use std::io;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Streams a log file line by line into `on_line`.
///
/// Invalid UTF-8 is replaced, a trailing `\r` is dropped, and whitespace-only
/// lines are skipped.
pub async fn scan_file<F>(path: &Path, mut on_line: F) -> io::Result<()>
where
    F: FnMut(&str),
{
    let file = File::open(path).await?;
    let mut chunks = BufReader::new(file).split(b'\n');

    while let Some(chunk) = chunks.next_segment().await? {
        let line = String::from_utf8_lossy(&chunk);
        let line = line.strip_suffix('\r').unwrap_or(&line);

        if line.trim().is_empty() {
            continue;
        }

        on_line(line);
    }

    Ok(())
}
