use crate::gateway::TableNames;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_VERSION: u32 = 1;

/// The config file as written by the operator.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DigestSpec {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub input: InputSpec,

    #[serde(default)]
    pub emit: EmitSpec,

    #[serde(default)]
    pub gateway: GatewaySpec,

    /// Path of the file this spec was parsed from. Relative paths resolve against its directory.
    #[serde(skip)]
    pub source: PathBuf,
}

impl DigestSpec {
    pub fn root(&self) -> &Path {
        self.source.parent().unwrap_or(Path::new("."))
    }
}

impl Default for DigestSpec {
    fn default() -> Self {
        Self {
            version: default_version(),
            input: InputSpec::default(),
            emit: EmitSpec::default(),
            gateway: GatewaySpec::default(),
            source: PathBuf::from(crate::conf::DEFAULT_CONFIG_FILE),
        }
    }
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct InputSpec {
    #[serde(default = "default_input_dir")]
    pub dir: PathBuf,

    /// Glob matched against file names inside `dir`.
    #[serde(default = "default_pattern")]
    pub pattern: String,
}

impl Default for InputSpec {
    fn default() -> Self {
        Self {
            dir: default_input_dir(),
            pattern: default_pattern(),
        }
    }
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_pattern() -> String {
    "*".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EmitSpec {
    /// Maximum puts started per window.
    #[serde(default = "default_rate_limit")]
    pub rate_limit: u32,

    #[serde(default = "default_window_ms")]
    pub window_ms: u64,
}

impl Default for EmitSpec {
    fn default() -> Self {
        Self {
            rate_limit: default_rate_limit(),
            window_ms: default_window_ms(),
        }
    }
}

fn default_rate_limit() -> u32 {
    2
}

fn default_window_ms() -> u64 {
    1000
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GatewayKind {
    #[default]
    Jsonl,
    Stdout,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySpec {
    #[serde(default)]
    pub kind: GatewayKind,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_requests_table")]
    pub requests_table: String,

    #[serde(default = "default_summaries_table")]
    pub summaries_table: String,
}

impl Default for GatewaySpec {
    fn default() -> Self {
        Self {
            kind: GatewayKind::default(),
            output_dir: default_output_dir(),
            requests_table: default_requests_table(),
            summaries_table: default_summaries_table(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("out")
}

fn default_requests_table() -> String {
    TableNames::default().requests
}

fn default_summaries_table() -> String {
    TableNames::default().summaries
}
