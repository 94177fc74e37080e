//! Append-only audit history log.

use std::path::Path;

use chrono::NaiveDateTime;

use super::{report::RULE_WIDTH, AuditResult, AuditStatus};
use crate::lib::{
    errors::OutputError,
    fs::{append_with_banner, AppendStatus},
};

/// Timestamp layout used in `AUDIT RUN:` lines.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Summary of one run as recorded in the history log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub timestamp: NaiveDateTime,
    pub total_matches: usize,
    pub critical_warnings: Vec<AuditResult>,
    pub mismatches: Vec<AuditResult>,
    pub missing: Vec<AuditResult>,
}

impl HistoryEntry {
    pub fn from_results(timestamp: NaiveDateTime, results: &[AuditResult]) -> Self {
        let with_status = |status: AuditStatus| {
            results
                .iter()
                .filter(|result| result.status == status)
                .cloned()
                .collect::<Vec<_>>()
        };

        Self {
            timestamp,
            total_matches: results
                .iter()
                .filter(|result| result.status == AuditStatus::Match)
                .count(),
            critical_warnings: with_status(AuditStatus::CriticalWarning),
            mismatches: with_status(AuditStatus::Mismatch),
            missing: with_status(AuditStatus::DataMissing),
        }
    }

    /// Render the entry block, ending with a newline.
    pub fn render(&self) -> String {
        let rule = "-".repeat(RULE_WIDTH);
        let mut lines = vec![
            rule.clone(),
            format!("AUDIT RUN: {}", self.timestamp.format(TIMESTAMP_FORMAT)),
            format!("Total Matches: {}", self.total_matches),
        ];

        if !self.critical_warnings.is_empty() {
            lines.push(format!(
                "⚠️  CRITICAL WARNINGS: {}",
                self.critical_warnings.len()
            ));
            for warning in &self.critical_warnings {
                lines.push(format!(
                    "  - {}: Expected '{}', Found '{}'",
                    warning.category,
                    warning.expected,
                    warning.actual_upper()
                ));
            }
        }

        if !self.mismatches.is_empty() {
            lines.push(format!("Mismatches Found: {}", self.mismatches.len()));
            for mismatch in &self.mismatches {
                lines.push(format!(
                    "  - {}: Expected '{}', Found '{}'",
                    mismatch.category,
                    mismatch.expected,
                    mismatch.actual.as_deref().unwrap_or_default()
                ));
            }
        } else if self.critical_warnings.is_empty() {
            lines.push("Mismatches Found: None".to_string());
        }

        if !self.missing.is_empty() {
            lines.push(format!("Data Missing: {}", self.missing.len()));
            for missing in &self.missing {
                lines.push(format!("  - {}: {}", missing.category, missing.expected));
            }
        }

        lines.push(rule);
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Banner written once, when the log file is created.
pub fn history_banner() -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("{rule}\nAUDIT HISTORY LOG\n{rule}\n\n")
}

/// Append an entry, creating the log with its banner when absent.
pub fn append_entry(path: &Path, entry: &HistoryEntry) -> Result<AppendStatus, OutputError> {
    append_with_banner(path, &history_banner(), &entry.render()).map_err(|source| {
        OutputError::History {
            path: path.to_path_buf(),
            source,
        }
    })
}
