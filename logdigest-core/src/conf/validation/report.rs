use crate::conf::types::Origin;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub message: String,
    pub origin: Origin,
    pub help: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_violations(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty()
    }

    pub(crate) fn error(&mut self, message: String, origin: &Origin, help: Option<String>) {
        self.errors.push(ValidationIssue {
            severity: Severity::Error,
            message,
            origin: origin.clone(),
            help,
        });
    }

    fn warning(&mut self, message: String, origin: &Origin, help: Option<String>) {
        self.warnings.push(ValidationIssue {
            severity: Severity::Warning,
            message,
            origin: origin.clone(),
            help,
        });
    }

    pub fn render_plain(&self) {
        for issue in self.errors.iter().chain(self.warnings.iter()) {
            let severity = match issue.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };

            println!("{}:{}: {}", issue.origin.file().display(), severity, issue.message);

            if let Some(help) = &issue.help {
                println!("  help: {}", help);
            }
        }
    }

    pub fn render_pretty(&self) {
        let errors = self.errors.len();
        let warnings = self.warnings.len();

        if errors > 0 {
            println!(
                "configuration validation failed ({} errors, {} warnings)\n",
                errors, warnings
            );
        }

        for issue in self.errors.iter().chain(self.warnings.iter()) {
            let label = match issue.severity {
                Severity::Error => "error".red().bold().to_string(),
                Severity::Warning => "warning".yellow().bold().to_string(),
            };

            println!("{}", issue.origin);
            println!("  {}: {}", label, issue.message);
            if let Some(help) = &issue.help {
                println!("  {}: {}", "help".cyan(), help);
            }
            println!();
        }
    }
}

/// Version Validation
impl ValidationReport {
    pub fn invalid_config_version(&mut self, version: u32, origin: &Origin) {
        self.error(
            format!("invalid config version: {}", version),
            origin,
            Some("Set `version = 1`.".to_string()),
        )
    }
}

/// Input Spec Validation
impl ValidationReport {
    pub fn input_dir_does_not_exist(&mut self, dir: &Path, origin: &Origin) {
        self.error(
            format!("input directory does not exist: {}", dir.display()),
            origin,
            None,
        )
    }

    pub fn input_dir_not_a_dir(&mut self, dir: &Path, origin: &Origin) {
        self.error(
            format!("input path is not a directory: {}", dir.display()),
            origin,
            None,
        )
    }

    pub fn empty_input_pattern(&mut self, origin: &Origin) {
        self.error(
            "input pattern is empty".to_string(),
            origin,
            Some("Use `pattern = \"*\"` to read every file in the directory.".to_string()),
        )
    }
}

/// Emit Spec Validation
impl ValidationReport {
    pub fn invalid_rate_limit(&mut self, rate_limit: u32, origin: &Origin) {
        self.error(
            format!("invalid rate limit: {}", rate_limit),
            origin,
            Some("At least one put per window must be allowed.".to_string()),
        )
    }

    pub fn invalid_window(&mut self, window_ms: u64, origin: &Origin) {
        self.error(format!("invalid window: {}ms", window_ms), origin, None)
    }
}

/// Gateway Spec Validation
impl ValidationReport {
    pub fn empty_table_name(&mut self, field: &str, origin: &Origin) {
        self.error(format!("table name is empty: {}", field), origin, None)
    }

    pub fn shared_table_name(&mut self, name: &str, origin: &Origin) {
        self.warning(
            format!("requests and summaries share the table name: {}", name),
            origin,
            Some("Both record kinds will be written to the same table.".to_string()),
        )
    }
}
