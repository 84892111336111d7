use crate::conf::types::{
    DigestSpec, EmitConfig, GatewayConfig, InputConfig, RuntimeConfig,
};
use crate::gateway::TableNames;
use std::time::Duration;

/// Lowers a validated spec into the runtime config, resolving relative paths
/// against the directory of the config file.
pub fn lower_spec(spec: DigestSpec) -> RuntimeConfig {
    let root = spec.root().to_path_buf();

    RuntimeConfig {
        input: InputConfig {
            dir: root.join(&spec.input.dir),
            pattern: spec.input.pattern,
        },
        emit: EmitConfig {
            rate_limit: spec.emit.rate_limit as usize,
            window: Duration::from_millis(spec.emit.window_ms),
        },
        gateway: GatewayConfig {
            kind: spec.gateway.kind,
            output_dir: root.join(&spec.gateway.output_dir),
            tables: TableNames {
                requests: spec.gateway.requests_table,
                summaries: spec.gateway.summaries_table,
            },
        },
    }
}
