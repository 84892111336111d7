use crate::conf::error::ConfigError;
use glob::glob;
use std::path::{Path, PathBuf};

/// Discovers log files matching a glob pattern under `root`.
///
/// Only regular files are returned, sorted by path. Since every match lives under
/// the same root, this is file-name order for flat directories. Unreadable
/// entries are silently filtered out.
///
/// # Errors
///
/// Returns `ConfigError::Glob` if the pattern is malformed or cannot be parsed.
pub fn discover(root: &Path, glob_pattern: &str) -> Result<Vec<PathBuf>, ConfigError> {
    let pattern = &resolve_glob(root, glob_pattern);
    let mut paths: Vec<_> = glob(pattern)
        .map_err(|e| ConfigError::Glob {
            pattern: pattern.to_string(),
            source: e,
        })?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect();

    paths.sort();
    Ok(paths)
}

/// Joins a glob pattern onto a root directory.
pub fn resolve_glob(root: &Path, pattern: &str) -> String {
    root.join(pattern).to_string_lossy().into_owned()
}
