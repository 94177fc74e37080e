//! Console transcripts and JSON payloads for CLI output.
use anyhow::Result;
use serde_json::{json, Value};

use crate::{
    audit::{AuditOutcome, AuditStatus},
    lib::fs::AppendStatus,
    scanner::{format_size, ScanListing},
};

const RULE_WIDTH: usize = 60;

/// Step-by-step transcript of a completed audit.
pub fn audit_transcript(outcome: &AuditOutcome) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let mut lines = vec![
        String::new(),
        heavy.clone(),
        "FACT-CHECK AUDITOR".to_string(),
        heavy.clone(),
        String::new(),
        format!("✓ Loaded: {}", outcome.source_file.display()),
        format!("Content: {}", outcome.content),
        String::new(),
        heavy.clone(),
        "AUDIT IN PROGRESS".to_string(),
        heavy.clone(),
    ];

    for result in &outcome.results {
        let line = match result.status {
            AuditStatus::DataMissing => format!("{}: {}", result.category, result.status),
            AuditStatus::Match => {
                format!("{}: {} ({})", result.category, result.status, result.expected)
            }
            AuditStatus::CriticalWarning => format!(
                "{}: {} (Expected: {}, Found: {})",
                result.category,
                result.status,
                result.expected,
                result.actual_upper()
            ),
            AuditStatus::Mismatch => format!(
                "{}: {} (Expected: {}, Found: {})",
                result.category,
                result.status,
                result.expected,
                result.actual.as_deref().unwrap_or_default()
            ),
        };
        lines.push(line);
    }
    lines.push(heavy);
    lines.push(String::new());

    match &outcome.report {
        Ok(path) => lines.push(format!("✓ Report generated: {}", path.display())),
        Err(err) => lines.push(err.to_string()),
    }
    match &outcome.history {
        Ok((path, _)) => lines.push(format!("✓ History logged: {}", path.display())),
        Err(err) => lines.push(err.to_string()),
    }

    lines.push(String::new());
    lines.push("Audit complete!".to_string());
    lines.join("\n")
}

/// Machine-readable audit payload.
pub fn audit_json(outcome: &AuditOutcome) -> Result<String> {
    let report = match &outcome.report {
        Ok(path) => json!({ "status": "written", "path": path.to_string_lossy() }),
        Err(err) => json!({ "status": "failed", "error": err.to_string() }),
    };
    let history = match &outcome.history {
        Ok((path, status)) => {
            let status = match status {
                AppendStatus::Created => "created",
                AppendStatus::Appended => "appended",
            };
            json!({ "status": status, "path": path.to_string_lossy() })
        }
        Err(err) => json!({ "status": "failed", "error": err.to_string() }),
    };

    let payload = json!({
        "source_file": outcome.source_file.to_string_lossy(),
        "results": outcome.results,
        "summary": outcome.counts,
        "report": report,
        "history": history,
    });
    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Machine-readable scan payload.
pub fn scan_json(listing: &ScanListing) -> Result<String> {
    let files = listing
        .entries
        .iter()
        .map(|entry| {
            json!({
                "name": entry.name,
                "size_bytes": entry.size,
                "size": entry.size.map(format_size),
                "error": entry.error,
            })
        })
        .collect::<Vec<Value>>();

    let payload = json!({
        "directory": listing.directory.to_string_lossy(),
        "files": files,
        "file_count": listing.file_count(),
        "total_bytes": listing.total_bytes,
        "total": format_size(listing.total_bytes),
    });
    Ok(serde_json::to_string_pretty(&payload)?)
}
