//! JSON Output

use crate::report::Report;

/// Generate a prettified JSON report.
///
/// This is the serialized surface handed to external collaborators that
/// interpret the raw result records (e.g. a narrative-analysis service).
pub fn generate_json_report(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
