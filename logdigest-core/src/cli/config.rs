use crate::conf::{ConfigError, DEFAULT_CONFIG_FILE, load_config};
use clap::Subcommand;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        /// Path to the config file
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Print issues without colors
        #[arg(short, long, default_value = "false")]
        plain: bool,
    },

    /// Print resolved configuration as JSON
    Dump {
        /// Path to the config file
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { config, plain } => check(&config, plain),
        ConfigCmd::Dump { config } => dump(&config),
    }
}

pub fn check(path: &Path, plain: bool) -> anyhow::Result<()> {
    match load_config(path) {
        Ok(validated) => {
            let cfg = &validated.config;
            println!("✔ Config loaded successfully");
            println!("✔ input {} ({})", cfg.input.dir.display(), cfg.input.pattern);
            println!(
                "✔ {} puts per {}ms",
                cfg.emit.rate_limit,
                cfg.emit.window.as_millis()
            );
            println!(
                "✔ gateway {:?} -> {}, {}",
                cfg.gateway.kind, cfg.gateway.tables.requests, cfg.gateway.tables.summaries
            );

            if validated.validation.has_violations() {
                println!();
                render(&validated.validation, plain);
            }
            Ok(())
        }
        Err(ConfigError::Validation { report }) => {
            render(&report, plain);
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn render(report: &crate::conf::ValidationReport, plain: bool) {
    if plain {
        report.render_plain();
    } else {
        report.render_pretty();
    }
}

pub fn dump(path: &Path) -> anyhow::Result<()> {
    let cfg = load_config(path)?;
    dump_json(&cfg.config)
}

fn dump_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}
