use crate::conf::error::ConfigError;
use crate::conf::lower::lower_spec;
use crate::conf::types::DigestSpec;
use crate::conf::validation::{ValidatedConfig, validate_spec};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "logdigest.hcl";

pub fn load_config(path: &Path) -> Result<ValidatedConfig, ConfigError> {
    resolve_spec(load_spec(path)?)
}

pub fn load_spec(path: &Path) -> Result<DigestSpec, ConfigError> {
    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;

    let mut spec: DigestSpec = hcl::from_str(&s).map_err(|e| ConfigError::parse(path, e))?;
    spec.source = path.to_path_buf();

    Ok(spec)
}

/// Loads `path`, or the built-in defaults when `path` does not exist and was
/// not asked for explicitly.
pub fn load_spec_or_default(path: &Path, explicit: bool) -> Result<DigestSpec, ConfigError> {
    if !explicit && !path.exists() {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(DigestSpec {
            source: path.to_path_buf(),
            ..DigestSpec::default()
        });
    }

    load_spec(path)
}

/// Validates a spec and lowers it into the runtime config.
pub fn resolve_spec(spec: DigestSpec) -> Result<ValidatedConfig, ConfigError> {
    //--------------------------------------------------------------------------
    // Semantic validation (aggregate all errors)
    //--------------------------------------------------------------------------
    let validation = validate_spec(&spec);
    if validation.has_errors() {
        return Err(ConfigError::Validation { report: validation });
    }

    for warning in &validation.warnings {
        tracing::warn!(origin = %warning.origin, "{}", warning.message);
    }

    Ok(ValidatedConfig {
        config: lower_spec(spec),
        validation,
    })
}
