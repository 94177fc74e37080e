//! RunProfile and config path resolution.
use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::config::{AuditorConfig, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

/// Console output format.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

/// Where the config path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Cli,
    Env,
    Default,
}

/// Resolved settings for one invocation.
#[derive(Debug, Clone)]
pub struct RunProfile {
    pub config_path: PathBuf,
    pub config_source: ConfigSource,
    pub format: OutputFormat,
}

impl RunProfile {
    /// Load the auditor configuration this profile points at.
    ///
    /// Only the implicit default file may be absent.
    pub fn load_config(&self) -> Result<AuditorConfig> {
        let config = match self.config_source {
            ConfigSource::Default => AuditorConfig::load_or_default(self.config_path.clone()),
            ConfigSource::Cli | ConfigSource::Env => {
                AuditorConfig::load_from_path(self.config_path.clone())
            }
        };
        Ok(config?)
    }
}

/// Resolve config path in the order: CLI override → env var → default.
pub fn resolve_config_path(override_path: Option<PathBuf>) -> Result<(PathBuf, ConfigSource)> {
    let (path, source) = match override_path {
        Some(path) => (path, ConfigSource::Cli),
        None => match env::var_os(CONFIG_ENV_KEY).filter(|value| !value.is_empty()) {
            Some(value) => (PathBuf::from(value), ConfigSource::Env),
            None => (PathBuf::from(DEFAULT_CONFIG_PATH), ConfigSource::Default),
        },
    };

    if path.is_absolute() {
        return Ok((path, source));
    }

    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok((cwd.join(path), source))
}
