use clap::{Parser, Subcommand};
use logdigest_core::cli;
use logdigest_core::cli::{ConfigCmd, RunArgs};
use logdigest_core::logging::init_logging;

#[derive(Parser, Debug)]
#[command(
    name = "logdigest",
    version,
    about = "logdigest: correlate request logs and summarize them per resource"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Digest a directory of log files (default)
    Run(RunArgs),

    /// Config tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging();

    let result = match cli.command {
        Some(Command::Run(args)) => cli::run::run(args),
        Some(Command::Config { cmd }) => cli::config::run(cmd),
        None => cli::run::run(RunArgs::default()),
    };

    if let Err(e) = result {
        tracing::error!(error = format!("{e:#}"), "logdigest failed");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
