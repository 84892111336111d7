use crate::conf::types::GatewayKind;
use crate::gateway::TableNames;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Fully resolved configuration the pipeline runs with.
#[derive(Debug, Clone, Serialize)]
pub struct RuntimeConfig {
    pub input: InputConfig,
    pub emit: EmitConfig,
    pub gateway: GatewayConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputConfig {
    pub dir: PathBuf,
    pub pattern: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmitConfig {
    pub rate_limit: usize,
    pub window: Duration,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            rate_limit: 2,
            window: Duration::from_secs(1),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GatewayConfig {
    pub kind: GatewayKind,
    pub output_dir: PathBuf,
    pub tables: TableNames,
}
