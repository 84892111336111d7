use crate::conf::{DEFAULT_CONFIG_FILE, GatewayKind, load_spec_or_default, resolve_spec};
use crate::run::{build_gateway, run_digest};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Path to the config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory of log files, overriding the config
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Puts started per window, overriding the config
    #[arg(long)]
    pub rate_limit: Option<u32>,

    /// Print records to stdout instead of storing them
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: RunArgs) -> anyhow::Result<()> {
    let explicit = args.config.is_some();
    let path = args
        .config
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    let mut spec = load_spec_or_default(&path, explicit)?;

    // Command-line paths are relative to the working directory, not the config file.
    if let Some(dir) = args.dir {
        spec.input.dir = std::path::absolute(dir)?;
    }
    if let Some(rate_limit) = args.rate_limit {
        spec.emit.rate_limit = rate_limit;
    }
    if args.dry_run {
        spec.gateway.kind = GatewayKind::Stdout;
    }

    let cfg = resolve_spec(spec)?.config;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let report = runtime.block_on(async {
        let gateway = build_gateway(&cfg.gateway).await?;
        run_digest(&cfg, gateway).await
    })?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
