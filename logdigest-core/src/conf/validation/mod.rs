mod report;
mod validate;

pub use report::{Severity, ValidationIssue, ValidationReport};
pub use validate::{validate_emit, validate_gateway, validate_input, validate_spec, validate_version};

use crate::conf::types::RuntimeConfig;

#[derive(Debug)]
pub struct ValidatedConfig {
    pub config: RuntimeConfig,
    /// Warnings only; any error aborts loading.
    pub validation: ValidationReport,
}
