//! Text report rendering and persistence.

use std::path::Path;

use super::{AuditResult, AuditStatus, StatusCounts};
use crate::lib::{errors::OutputError, fs::write_atomic};

pub(crate) const RULE_WIDTH: usize = 60;
const REPORT_GENERATOR: &str = env!("CARGO_PKG_NAME");
const NOT_FOUND: &str = "NOT FOUND";

/// Render the full report. Lines are joined by `\n` without a trailing newline.
pub fn render_report(results: &[AuditResult], source_file: &Path) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let mut lines = vec![
        heavy.clone(),
        "FACT-CHECK AUDIT REPORT".to_string(),
        heavy.clone(),
        format!("Source File: {}", source_file.display()),
        format!("Report Generated: {REPORT_GENERATOR}"),
        heavy.clone(),
        String::new(),
    ];

    let critical = results
        .iter()
        .filter(|result| result.status == AuditStatus::CriticalWarning)
        .collect::<Vec<_>>();
    if !critical.is_empty() {
        lines.push("!!! CRITICAL WARNINGS DETECTED !!!".to_string());
        lines.push(heavy.clone());
        for warning in critical {
            lines.push(format!(
                "⚠️  {}: {}",
                warning.category,
                warning.actual_upper()
            ));
            lines.push(format!("    Expected: {}", warning.expected));
        }
        lines.push(heavy.clone());
        lines.push(String::new());
    }

    lines.push("VALIDATION RESULTS:".to_string());
    lines.push(light.clone());
    for result in results {
        lines.push(String::new());
        lines.push(format!("Category: {}", result.category));
        lines.push(format!("Expected Value: {}", result.expected));
        lines.push(format!(
            "Actual Value: {}",
            result.actual.as_deref().unwrap_or(NOT_FOUND)
        ));
        lines.push(format!("Status: {}", result.status));
        lines.push(light.clone());
    }

    let counts = StatusCounts::from_results(results);
    lines.push(String::new());
    lines.push("SUMMARY:".to_string());
    lines.push(format!("  MATCH: {}", counts.matches));
    lines.push(format!("  MISMATCH: {}", counts.mismatches));
    lines.push(format!("  CRITICAL WARNING: {}", counts.critical_warnings));
    lines.push(format!("  DATA MISSING: {}", counts.data_missing));
    lines.push(String::new());
    lines.push(heavy);

    lines.join("\n")
}

/// Atomically replace the report file.
pub fn write_report(path: &Path, contents: &str) -> Result<(), OutputError> {
    write_atomic(path, contents).map_err(|source| OutputError::Report {
        path: path.to_path_buf(),
        source,
    })
}
