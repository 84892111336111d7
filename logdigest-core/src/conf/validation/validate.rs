use crate::conf::types::{
    CONFIG_VERSION, DigestSpec, EmitSpec, GatewaySpec, InputSpec, Origin,
};
use crate::conf::validation::report::ValidationReport;
use std::path::Path;

/// Validate everything in a parsed config file.
pub fn validate_spec(spec: &DigestSpec) -> ValidationReport {
    let mut report = ValidationReport::default();

    if validate_version(spec, &mut report) {
        validate_input(&spec.input, spec.root(), &Origin::new(&spec.source, "input"), &mut report);
        validate_emit(&spec.emit, &Origin::new(&spec.source, "emit"), &mut report);
        validate_gateway(&spec.gateway, &Origin::new(&spec.source, "gateway"), &mut report);
    }

    report
}

pub fn validate_version(spec: &DigestSpec, report: &mut ValidationReport) -> bool {
    if spec.version != CONFIG_VERSION {
        report.invalid_config_version(spec.version, &Origin::new(&spec.source, "version"));
        return false;
    }
    true
}

pub fn validate_input(input: &InputSpec, root: &Path, origin: &Origin, report: &mut ValidationReport) {
    if input.pattern.trim().is_empty() {
        report.empty_input_pattern(origin);
    }

    let dir = root.join(&input.dir);
    if !dir.exists() {
        report.input_dir_does_not_exist(&dir, origin);
    } else if !dir.is_dir() {
        report.input_dir_not_a_dir(&dir, origin);
    }
}

pub fn validate_emit(emit: &EmitSpec, origin: &Origin, report: &mut ValidationReport) {
    if emit.rate_limit == 0 {
        report.invalid_rate_limit(emit.rate_limit, origin);
    }

    if emit.window_ms == 0 {
        report.invalid_window(emit.window_ms, origin);
    }
}

pub fn validate_gateway(gateway: &GatewaySpec, origin: &Origin, report: &mut ValidationReport) {
    if gateway.requests_table.trim().is_empty() {
        report.empty_table_name("requests_table", origin);
    }

    if gateway.summaries_table.trim().is_empty() {
        report.empty_table_name("summaries_table", origin);
    }

    if !gateway.requests_table.is_empty() && gateway.requests_table == gateway.summaries_table {
        report.shared_table_name(&gateway.requests_table, origin);
    }
}
