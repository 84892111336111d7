mod discover;
mod error;
mod loader;
mod lower;
pub mod types;
pub mod validation;

pub use discover::{discover, resolve_glob};
pub use error::ConfigError;
pub use loader::{DEFAULT_CONFIG_FILE, load_config, load_spec, load_spec_or_default, resolve_spec};
pub use lower::lower_spec;
pub use types::{EmitConfig, GatewayConfig, GatewayKind, InputConfig, RuntimeConfig};
pub use validation::{ValidatedConfig, ValidationReport, validate_spec};
