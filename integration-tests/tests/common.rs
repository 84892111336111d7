use integration_tests::harness::load_fixture_config;
use logdigest_core::conf::RuntimeConfig;
use std::path::Path;

pub const CONFIG: &str = "logdigest.hcl";

/// Fixture config with output redirected into `out`.
pub fn fixture_config(out: &Path) -> RuntimeConfig {
    let mut cfg = load_fixture_config(CONFIG);
    cfg.gateway.output_dir = out.to_path_buf();
    cfg
}
