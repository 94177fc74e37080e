//! Fact-check audit: load, extract, classify, report, and log history.
use std::{fmt, path::PathBuf};

use chrono::{Local, NaiveDateTime};
use serde::{Serialize, Serializer};
use tracing::{debug, error, info, warn};

use crate::{
    config::AuditorConfig,
    lib::{
        errors::{AuditError, OutputError},
        fs::{read_text_file, AppendStatus},
        telemetry::{emit_audit_summary, AuditTelemetry, RunSpan},
    },
};

pub mod classify;
pub mod extract;
pub mod history;
pub mod report;

pub use classify::{classify, ELEVATED_RISK_LEVELS};
pub use extract::Extractor;
pub use history::{append_entry, history_banner, HistoryEntry, TIMESTAMP_FORMAT};
pub use report::{render_report, write_report};

/// Tracked fact types, in audit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Deadline,
    Lead,
    Budget,
    #[serde(rename = "Risk Level")]
    RiskLevel,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Deadline,
        Category::Lead,
        Category::Budget,
        Category::RiskLevel,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            Category::Deadline => "Deadline",
            Category::Lead => "Lead",
            Category::Budget => "Budget",
            Category::RiskLevel => "Risk Level",
        }
    }

    /// Search pattern applied to lowercased content; group 1 holds the value.
    pub const fn pattern(&self) -> &'static str {
        match self {
            Category::Deadline => r"deadline is ([^.]+)",
            Category::Lead => r"lead engineer is ([^.]+)",
            Category::Budget => r"budget is ([^.]+)",
            Category::RiskLevel => r"risk level:\s*([^.]+)",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub const DEFAULT_DEADLINE: &str = "January 15th";
pub const DEFAULT_LEAD: &str = "Sarah Chen";
pub const DEFAULT_BUDGET: &str = "$50,000";
pub const DEFAULT_RISK_LEVEL: &str = "Low";

/// Expected value per category. Immutable for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedValues {
    pub deadline: String,
    pub lead: String,
    pub budget: String,
    pub risk_level: String,
}

impl Default for ExpectedValues {
    fn default() -> Self {
        Self {
            deadline: DEFAULT_DEADLINE.to_string(),
            lead: DEFAULT_LEAD.to_string(),
            budget: DEFAULT_BUDGET.to_string(),
            risk_level: DEFAULT_RISK_LEVEL.to_string(),
        }
    }
}

impl ExpectedValues {
    pub fn for_category(&self, category: Category) -> &str {
        match category {
            Category::Deadline => &self.deadline,
            Category::Lead => &self.lead,
            Category::Budget => &self.budget,
            Category::RiskLevel => &self.risk_level,
        }
    }
}

/// Outcome of comparing one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditStatus {
    Match,
    Mismatch,
    CriticalWarning,
    DataMissing,
}

impl AuditStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AuditStatus::Match => "MATCH",
            AuditStatus::Mismatch => "MISMATCH",
            AuditStatus::CriticalWarning => "CRITICAL WARNING",
            AuditStatus::DataMissing => "DATA MISSING",
        }
    }
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AuditStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditResult {
    pub category: Category,
    pub expected: String,
    pub actual: Option<String>,
    pub status: AuditStatus,
}

impl AuditResult {
    /// Actual value upper-cased, as shown for critical warnings.
    pub fn actual_upper(&self) -> String {
        self.actual
            .as_deref()
            .map(str::to_uppercase)
            .unwrap_or_default()
    }
}

/// Per-status counts; always sums to the number of results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub matches: usize,
    pub mismatches: usize,
    pub critical_warnings: usize,
    pub data_missing: usize,
}

impl StatusCounts {
    pub fn from_results(results: &[AuditResult]) -> Self {
        results
            .iter()
            .fold(Self::default(), |mut counts, result| {
                match result.status {
                    AuditStatus::Match => counts.matches += 1,
                    AuditStatus::Mismatch => counts.mismatches += 1,
                    AuditStatus::CriticalWarning => counts.critical_warnings += 1,
                    AuditStatus::DataMissing => counts.data_missing += 1,
                }
                counts
            })
    }

    pub fn total(&self) -> usize {
        self.matches + self.mismatches + self.critical_warnings + self.data_missing
    }
}

/// Everything a completed audit run produced.
///
/// Output failures are carried here instead of aborting the run.
#[derive(Debug)]
pub struct AuditOutcome {
    pub source_file: PathBuf,
    pub content: String,
    pub results: Vec<AuditResult>,
    pub counts: StatusCounts,
    pub report: Result<PathBuf, OutputError>,
    pub history: Result<(PathBuf, AppendStatus), OutputError>,
}

/// Runs the audit flow against a fixed configuration.
#[derive(Debug, Clone)]
pub struct Auditor {
    config: AuditorConfig,
    extractor: Extractor,
}

impl Auditor {
    pub fn new(config: AuditorConfig) -> Result<Self, AuditError> {
        Ok(Self {
            config,
            extractor: Extractor::new()?,
        })
    }

    /// Classify every category of already-loaded content.
    pub fn audit(&self, content: &str) -> Vec<AuditResult> {
        self.extractor
            .extract_all(content)
            .into_iter()
            .map(|(category, actual)| {
                let expected = self.config.expected.for_category(category).to_string();
                let status = classify(category, &expected, actual.as_deref());
                debug!(
                    target: "factcheck::audit",
                    category = category.label(),
                    status = status.as_str(),
                    "Classified category"
                );
                if status == AuditStatus::CriticalWarning {
                    warn!(
                        target: "factcheck::audit",
                        category = category.label(),
                        actual = actual.as_deref().unwrap_or_default(),
                        "Elevated risk level detected"
                    );
                }
                AuditResult {
                    category,
                    expected,
                    actual,
                    status,
                }
            })
            .collect()
    }

    /// Run the full flow stamped with the current local time.
    pub fn run(&self) -> Result<AuditOutcome, AuditError> {
        self.run_at(Local::now().naive_local())
    }

    /// Run the full flow with an explicit history timestamp.
    pub fn run_at(&self, timestamp: NaiveDateTime) -> Result<AuditOutcome, AuditError> {
        let paths = &self.config.audit;
        let run_span = RunSpan::start("audit", &paths.source_file);
        let outcome = {
            let _entered = run_span.span().enter();
            self.run_steps(timestamp)
        };
        run_span.finish(if outcome.is_ok() { "completed" } else { "failed" });
        outcome
    }

    fn run_steps(&self, timestamp: NaiveDateTime) -> Result<AuditOutcome, AuditError> {
        let paths = &self.config.audit;
        let content = read_text_file(&paths.source_file).map_err(|err| {
            error!(target: "factcheck::audit", reason = %err, "Failed to load source file");
            err
        })?;
        info!(
            target: "factcheck::audit",
            path = %paths.source_file.display(),
            bytes = content.len(),
            "Loaded source file"
        );

        let results = self.audit(&content);
        let counts = StatusCounts::from_results(&results);

        let report = write_report(
            &paths.report_file,
            &render_report(&results, &paths.source_file),
        )
        .map(|()| paths.report_file.clone());
        if let Err(err) = &report {
            error!(target: "factcheck::audit", reason = %err, "Failed to write report");
        }

        let entry = HistoryEntry::from_results(timestamp, &results);
        let history = append_entry(&paths.history_log, &entry)
            .map(|status| (paths.history_log.clone(), status));
        if let Err(err) = &history {
            error!(target: "factcheck::audit", reason = %err, "Failed to append history");
        }

        emit_audit_summary(&AuditTelemetry {
            source_file: &paths.source_file,
            categories: counts.total(),
            matches: counts.matches,
            mismatches: counts.mismatches,
            critical_warnings: counts.critical_warnings,
            data_missing: counts.data_missing,
            report_written: report.is_ok(),
            history_logged: history.is_ok(),
        });

        Ok(AuditOutcome {
            source_file: paths.source_file.clone(),
            content,
            results,
            counts,
            report,
            history,
        })
    }
}
