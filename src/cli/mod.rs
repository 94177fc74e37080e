//! CLI entrypoint module structure.
use std::path::Path;

use anyhow::Result;
use tracing::debug;

use crate::{audit::Auditor, scanner::scan_directory};

pub mod args;
pub mod exit;
pub mod profile;
pub mod render;

pub use args::{CliCommand, FactcheckArgs, ParsedCommand, ScanArgs};
pub use exit::RunExit;
pub use profile::{resolve_config_path, ConfigSource, OutputFormat, RunProfile};

/// Execute a parsed command and return the user-facing output.
pub fn execute_command(command: ParsedCommand) -> Result<String> {
    match command {
        ParsedCommand::Audit(profile) => run_audit(&profile),
        ParsedCommand::Scan { directory, format } => run_scan(&directory, format),
    }
}

fn run_audit(profile: &RunProfile) -> Result<String> {
    debug!(
        target: "factcheck::config",
        path = %profile.config_path.display(),
        source = ?profile.config_source,
        format = profile.format.as_str(),
        "Resolved run profile"
    );
    let config = profile.load_config()?;
    let auditor = Auditor::new(config)?;
    let outcome = auditor.run()?;

    match profile.format {
        OutputFormat::Text => Ok(render::audit_transcript(&outcome)),
        OutputFormat::Json => render::audit_json(&outcome),
    }
}

fn run_scan(directory: &Path, format: OutputFormat) -> Result<String> {
    let listing = scan_directory(directory)?;
    match format {
        OutputFormat::Text => Ok(listing.render()),
        OutputFormat::Json => render::scan_json(&listing),
    }
}
