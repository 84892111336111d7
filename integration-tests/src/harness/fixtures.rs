use logdigest_core::conf::{RuntimeConfig, load_config};
use std::path::PathBuf;

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

pub fn load_fixture_config(file: &str) -> RuntimeConfig {
    load_config(&fixture_path(file))
        .expect("failed to load fixture config")
        .config
}
