//! Load and validate auditor configuration.
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{error, info};

use crate::{audit::ExpectedValues, lib::errors::ConfigError};

pub mod audit;
pub mod expected;
pub mod telemetry;

pub use audit::{
    parse_audit_section, AuditSection, RawAuditSection, DEFAULT_HISTORY_LOG, DEFAULT_REPORT_FILE,
    DEFAULT_SOURCE_FILE,
};
pub use expected::{parse_expected_section, RawExpectedSection};

pub const CONFIG_ENV_KEY: &str = "FACTCHECK_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "factcheck.toml";

/// Top-level configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditorConfig {
    pub audit: AuditSection,
    pub expected: ExpectedValues,
    /// File the values were read from; `None` for built-in defaults.
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawAuditorConfig {
    audit: Option<RawAuditSection>,
    expected: Option<RawExpectedSection>,
}

impl AuditorConfig {
    /// Load `path` when it exists, otherwise fall back to built-in defaults.
    pub fn load_or_default(path: PathBuf) -> Result<Self, ConfigError> {
        if !path.exists() {
            telemetry::log_defaults_used(&path);
            return Ok(Self::default());
        }
        Self::load_from_path(path)
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "factcheck::config",
            path = %path.display(),
            "Starting configuration load"
        );

        let builder = config::Config::builder().add_source(config::File::from(path.clone()));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "factcheck::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawAuditorConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "factcheck::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "factcheck::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawAuditorConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let audit = parse_audit_section(raw.audit, &path)?;
        let expected = parse_expected_section(raw.expected, &path)?;

        Ok(Self {
            audit,
            expected,
            source_path: Some(path),
        })
    }
}
