use crate::conf::{GatewayConfig, GatewayKind};
use crate::gateway::{JsonLinesGateway, PersistenceGateway, StdoutGateway};
use anyhow::Context;
use std::sync::Arc;

/// Builds the gateway selected in the config.
pub async fn build_gateway(config: &GatewayConfig) -> anyhow::Result<Arc<dyn PersistenceGateway>> {
    let gateway: Arc<dyn PersistenceGateway> = match config.kind {
        GatewayKind::Jsonl => Arc::new(
            JsonLinesGateway::create(&config.output_dir, &config.tables)
                .await
                .with_context(|| {
                    format!("failed to open output in {}", config.output_dir.display())
                })?,
        ),
        GatewayKind::Stdout => Arc::new(StdoutGateway::new(config.tables.clone())),
    };

    Ok(gateway)
}
