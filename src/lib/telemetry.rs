//! Telemetry initialization and run span helpers.

use std::{path::Path, time::Instant};

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset. Stdout carries the console transcript.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Initialize `tracing` and format developer logs on stderr.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper recording start and finish of an audit or scan.
pub struct RunSpan {
    span: Span,
    started_at: Instant,
    run_kind: &'static str,
}

impl RunSpan {
    /// Start a run span for `subject` (input file or scanned directory).
    pub fn start(run_kind: &'static str, subject: &Path) -> Self {
        let span = info_span!(
            target: "factcheck::run",
            "factcheck_run",
            run_kind,
            subject = %subject.display()
        );
        Self {
            span,
            started_at: Instant::now(),
            run_kind,
        }
    }

    /// Enter the span for the rest of the run.
    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Close the span while recording the final status.
    pub fn finish(self, status: &'static str) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "factcheck::run",
            run_kind = self.run_kind,
            status = status,
            elapsed_ms = elapsed_ms,
            "Completed run"
        );
    }
}

/// Payload for logging an audit summary as structured telemetry.
#[derive(Debug)]
pub struct AuditTelemetry<'a> {
    pub source_file: &'a Path,
    pub categories: usize,
    pub matches: usize,
    pub mismatches: usize,
    pub critical_warnings: usize,
    pub data_missing: usize,
    pub report_written: bool,
    pub history_logged: bool,
}

/// Emit the audit summary to `tracing`.
pub fn emit_audit_summary(telemetry: &AuditTelemetry<'_>) {
    info!(
        target: "factcheck::audit",
        source_file = %telemetry.source_file.display(),
        categories = telemetry.categories,
        matches = telemetry.matches,
        mismatches = telemetry.mismatches,
        critical_warnings = telemetry.critical_warnings,
        data_missing = telemetry.data_missing,
        report_written = telemetry.report_written,
        history_logged = telemetry.history_logged,
        "Audit finished"
    );
}
