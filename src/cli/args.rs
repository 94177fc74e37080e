//! CLI argument definitions and `RunProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use super::{resolve_config_path, OutputFormat, RunProfile};

/// Parsed command intent from CLI.
#[derive(Debug, Clone)]
pub enum ParsedCommand {
    Audit(RunProfile),
    Scan {
        directory: PathBuf,
        format: OutputFormat,
    },
}

/// Top-level subcommands. Without one, `audit` runs.
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Check the source file against expected values and write report/history.
    #[command(about = "Check the source file against expected values (default)")]
    Audit,
    /// List files of a directory with human-readable sizes.
    #[command(about = "List files of a directory with human-readable sizes")]
    Scan(ScanArgs),
}

/// Arguments for `scan`.
#[derive(Debug, Clone, Args)]
pub struct ScanArgs {
    /// Directory to scan.
    #[arg(value_name = "DIR", default_value = ".")]
    pub directory: PathBuf,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "factcheck",
    author,
    version,
    about = "Fact-check auditor and directory scanner",
    long_about = None,
    after_help = "Hint: run `factcheck` in the directory holding project_specs.txt to audit it."
)]
pub struct FactcheckArgs {
    /// Path to factcheck.toml (overrides FACTCHECK_CONFIG_PATH).
    #[arg(long = "config", global = true)]
    pub config_override: Option<PathBuf>,
    /// Console output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
    /// Optional subcommand; defaults to `audit`.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl FactcheckArgs {
    /// Build a `RunProfile` from CLI args and environment variables.
    pub fn build(self) -> Result<RunProfile> {
        let (config_path, config_source) = resolve_config_path(self.config_override)?;
        Ok(RunProfile {
            config_path,
            config_source,
            format: self.format,
        })
    }

    pub fn into_command(self) -> Result<ParsedCommand> {
        match self.command.clone() {
            Some(CliCommand::Scan(args)) => Ok(ParsedCommand::Scan {
                directory: args.directory,
                format: self.format,
            }),
            Some(CliCommand::Audit) | None => Ok(ParsedCommand::Audit(self.build()?)),
        }
    }
}
