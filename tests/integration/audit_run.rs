use std::fs;

use serde_json::Value;

use crate::common::{run_in, stderr_of, stdout_of, workspace_with_specs};

#[test]
fn example_document_produces_documented_statuses() {
    let workspace = workspace_with_specs("project_specs_example.txt");

    let output = run_in(workspace.path(), &[]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Deadline: MISMATCH (Expected: January 15th, Found: march 3rd)"));
    assert!(stdout.contains("Lead: MATCH (Sarah Chen)"));
    assert!(stdout.contains("Budget: MATCH ($50,000)"));
    assert!(stdout.contains("Risk Level: CRITICAL WARNING (Expected: Low, Found: HIGH)"));
    assert!(stdout.contains("✓ Report generated: audit_report.txt"));
    assert!(stdout.contains("✓ History logged: audit_history.log"));
    assert!(stdout.trim_end().ends_with("Audit complete!"));

    let report = fs::read_to_string(workspace.path().join("audit_report.txt"))
        .expect("report should be written");
    assert!(report.contains("!!! CRITICAL WARNINGS DETECTED !!!"));
    assert!(report.contains("⚠️  Risk Level: HIGH"));
    assert!(report.contains(
        "SUMMARY:\n  MATCH: 2\n  MISMATCH: 1\n  CRITICAL WARNING: 1\n  DATA MISSING: 0\n"
    ));
}

#[test]
fn history_is_append_only_across_runs() {
    let workspace = workspace_with_specs("project_specs_example.txt");
    let log_path = workspace.path().join("audit_history.log");

    let first = run_in(workspace.path(), &[]);
    assert!(first.status.success(), "stderr: {}", stderr_of(&first));
    let after_first = fs::read(&log_path).expect("history exists after first run");

    let second = run_in(workspace.path(), &["audit"]);
    assert!(second.status.success(), "stderr: {}", stderr_of(&second));
    let after_second = fs::read(&log_path).expect("history exists after second run");

    assert!(after_second.len() > after_first.len());
    assert_eq!(&after_second[..after_first.len()], after_first.as_slice());

    let text = String::from_utf8(after_second).expect("history is UTF-8");
    assert_eq!(text.matches("AUDIT HISTORY LOG").count(), 1);
    assert_eq!(text.matches("AUDIT RUN: ").count(), 2);
}

#[test]
fn clean_document_logs_no_mismatches() {
    let workspace = workspace_with_specs("project_specs_clean.txt");

    let output = run_in(workspace.path(), &[]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let report = fs::read_to_string(workspace.path().join("audit_report.txt"))
        .expect("report should be written");
    assert!(!report.contains("CRITICAL WARNINGS DETECTED"));
    assert!(report.contains("  MATCH: 4\n"));
    let history = fs::read_to_string(workspace.path().join("audit_history.log"))
        .expect("history should be written");
    assert!(history.contains("Total Matches: 4\nMismatches Found: None\n"));
}

#[test]
fn missing_source_file_is_fatal_and_writes_nothing() {
    let workspace = tempfile::tempdir().expect("can create workspace");

    let output = run_in(workspace.path(), &[]);

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("File 'project_specs.txt' does not exist."));
    assert!(!workspace.path().join("audit_report.txt").exists());
    assert!(!workspace.path().join("audit_history.log").exists());
}

#[test]
fn report_write_failure_is_not_fatal() {
    let workspace = workspace_with_specs("project_specs_example.txt");
    // A directory in the report's place makes the rename fail.
    fs::create_dir(workspace.path().join("audit_report.txt")).expect("can block report path");

    let output = run_in(workspace.path(), &[]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Error generating report"), "stdout: {stdout}");
    assert!(stdout.contains("✓ History logged: audit_history.log"));
    assert!(workspace.path().join("audit_history.log").is_file());
}

#[test]
fn history_append_failure_is_not_fatal() {
    let workspace = workspace_with_specs("project_specs_example.txt");
    // A directory in the log's place makes the append fail.
    fs::create_dir(workspace.path().join("audit_history.log")).expect("can block history path");

    let output = run_in(workspace.path(), &[]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Error logging to history"), "stdout: {stdout}");
    assert!(stdout.contains("✓ Report generated: audit_report.txt"));
    assert!(stdout.trim_end().ends_with("Audit complete!"));
    let report = fs::read_to_string(workspace.path().join("audit_report.txt"))
        .expect("report should be written");
    assert!(report.contains("SUMMARY:"));
}

#[test]
fn json_format_emits_machine_readable_summary() {
    let workspace = workspace_with_specs("project_specs_example.txt");

    let output = run_in(workspace.path(), &["--format", "json"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let payload: Value = serde_json::from_str(&stdout_of(&output)).expect("stdout is JSON");
    assert_eq!(payload["summary"]["matches"], 2);
    assert_eq!(payload["summary"]["critical_warnings"], 1);
    assert_eq!(payload["results"][3]["category"], "Risk Level");
    assert_eq!(payload["results"][3]["actual"], "high");
    assert_eq!(payload["results"][3]["status"], "CRITICAL WARNING");
    assert_eq!(payload["history"]["status"], "created");
}
