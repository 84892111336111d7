pub mod config;
pub mod run;

pub use config::ConfigCmd;
pub use run::RunArgs;
