use std::path::Path;

use serde::Deserialize;

use crate::{audit::ExpectedValues, lib::errors::ConfigError};

#[derive(Debug, Deserialize, Default)]
pub struct RawExpectedSection {
    pub deadline: Option<String>,
    pub lead: Option<String>,
    pub budget: Option<String>,
    pub risk_level: Option<String>,
}

pub fn parse_expected_section(
    raw: Option<RawExpectedSection>,
    path: &Path,
) -> Result<ExpectedValues, ConfigError> {
    let raw = raw.unwrap_or_default();
    let defaults = ExpectedValues::default();

    Ok(ExpectedValues {
        deadline: expected_value(path, "expected.deadline", raw.deadline, defaults.deadline)?,
        lead: expected_value(path, "expected.lead", raw.lead, defaults.lead)?,
        budget: expected_value(path, "expected.budget", raw.budget, defaults.budget)?,
        risk_level: expected_value(
            path,
            "expected.risk_level",
            raw.risk_level,
            defaults.risk_level,
        )?,
    })
}

fn expected_value(
    path: &Path,
    field: &'static str,
    raw: Option<String>,
    default: String,
) -> Result<String, ConfigError> {
    let Some(value) = raw else {
        return Ok(default);
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field,
            message: "Expected values must not be blank".into(),
        });
    }
    Ok(trimmed.to_string())
}
