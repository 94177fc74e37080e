use std::fs;

use serde_json::Value;

use crate::common::{run_in, stderr_of, stdout_of};

#[test]
fn scan_lists_files_alphabetically_with_total() {
    let workspace = tempfile::tempdir().expect("can create workspace");
    fs::write(workspace.path().join("zeta.log"), vec![0u8; 2048]).expect("can write zeta.log");
    fs::write(workspace.path().join("Alpha.txt"), vec![0u8; 500]).expect("can write Alpha.txt");
    fs::create_dir(workspace.path().join("subdir")).expect("can create subdir");

    let output = run_in(workspace.path(), &["scan"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    let alpha_at = stdout.find("Alpha.txt").expect("Alpha.txt listed");
    let zeta_at = stdout.find("zeta.log").expect("zeta.log listed");
    assert!(alpha_at < zeta_at, "stdout: {stdout}");
    assert!(stdout.contains(&format!("{:<40} {:>15}", "Alpha.txt", "500.00 B")));
    assert!(stdout.contains(&format!("{:<40} {:>15}", "zeta.log", "2.00 KB")));
    assert!(stdout.contains(&format!("{:<40} {:>15}", "Total:", "2.49 KB")));
    assert!(stdout.contains("Total files: 2"));
    assert!(!stdout.contains("subdir"));
}

#[test]
fn scan_accepts_explicit_directory() {
    let workspace = tempfile::tempdir().expect("can create workspace");
    let target = workspace.path().join("data");
    fs::create_dir(&target).expect("can create data dir");

    let output = run_in(workspace.path(), &["scan", "data"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Scanning: "));
    assert!(stdout.contains("No files found in this directory."));
}

#[test]
fn scan_of_missing_directory_prints_no_listing() {
    let workspace = tempfile::tempdir().expect("can create workspace");

    let output = run_in(workspace.path(), &["scan", "absent"]);

    assert!(!output.status.success());
    assert!(stdout_of(&output).is_empty());
    assert!(stderr_of(&output).contains("Directory 'absent' does not exist."));
}

#[test]
fn scan_json_reports_sizes() {
    let workspace = tempfile::tempdir().expect("can create workspace");
    fs::write(workspace.path().join("a.bin"), vec![0u8; 1024]).expect("can write a.bin");

    let output = run_in(workspace.path(), &["scan", "--format", "json"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let payload: Value = serde_json::from_str(&stdout_of(&output)).expect("stdout is JSON");
    assert_eq!(payload["file_count"], 1);
    assert_eq!(payload["files"][0]["name"], "a.bin");
    assert_eq!(payload["total"], "1.00 KB");
}
