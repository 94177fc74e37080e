use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Failures that abort an audit run before any output is written.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("File '{path}' does not exist.")]
    FileNotFound { path: PathBuf },
    #[error("Error reading file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to compile extraction pattern for {category}: {source}")]
    InvalidPattern {
        category: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// Failures while persisting audit output. Recorded, never fatal.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Error generating report {path}: {source}")]
    Report {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error logging to history {path}: {source}")]
    History {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors returned by the directory scanner.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Directory '{path}' does not exist.")]
    NotFound { path: PathBuf },
    #[error("'{path}' is not a directory.")]
    NotADirectory { path: PathBuf },
    #[error("Failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
