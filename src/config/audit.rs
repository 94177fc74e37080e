use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub const DEFAULT_SOURCE_FILE: &str = "project_specs.txt";
pub const DEFAULT_REPORT_FILE: &str = "audit_report.txt";
pub const DEFAULT_HISTORY_LOG: &str = "audit_history.log";

/// Input and output file locations, relative to the working directory unless absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditSection {
    pub source_file: PathBuf,
    pub report_file: PathBuf,
    pub history_log: PathBuf,
}

impl Default for AuditSection {
    fn default() -> Self {
        Self {
            source_file: PathBuf::from(DEFAULT_SOURCE_FILE),
            report_file: PathBuf::from(DEFAULT_REPORT_FILE),
            history_log: PathBuf::from(DEFAULT_HISTORY_LOG),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawAuditSection {
    pub source_file: Option<PathBuf>,
    pub report_file: Option<PathBuf>,
    pub history_log: Option<PathBuf>,
}

pub fn parse_audit_section(
    raw: Option<RawAuditSection>,
    path: &Path,
) -> Result<AuditSection, ConfigError> {
    let raw = raw.unwrap_or_default();
    let defaults = AuditSection::default();

    let source_file = raw.source_file.unwrap_or(defaults.source_file);
    validate_file_path(path, "audit.source_file", &source_file)?;
    let report_file = raw.report_file.unwrap_or(defaults.report_file);
    validate_file_path(path, "audit.report_file", &report_file)?;
    let history_log = raw.history_log.unwrap_or(defaults.history_log);
    validate_file_path(path, "audit.history_log", &history_log)?;

    if report_file == history_log {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "audit.history_log",
            message: "history log must differ from the report file".into(),
        });
    }

    Ok(AuditSection {
        source_file,
        report_file,
        history_log,
    })
}

fn validate_file_path(path: &Path, field: &'static str, value: &Path) -> Result<(), ConfigError> {
    if value.as_os_str().is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field,
            message: "Specify a non-empty file path".into(),
        });
    }
    Ok(())
}
