use std::fs;

use crate::common::{fixture, run_in, stderr_of, stdout_of, workspace_with_specs};

#[test]
fn default_config_file_in_workspace_is_picked_up() {
    let workspace = workspace_with_specs("project_specs_example.txt");
    fs::write(
        workspace.path().join("factcheck.toml"),
        "[expected]\ndeadline = \"March 3rd\"\n",
    )
    .expect("can write factcheck.toml");

    let output = run_in(workspace.path(), &[]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("Deadline: MATCH (March 3rd)"));
}

#[test]
fn explicit_config_redirects_files() {
    let workspace = tempfile::tempdir().expect("can create workspace");
    fs::create_dir_all(workspace.path().join("notes")).expect("can create notes dir");
    fs::create_dir_all(workspace.path().join("out")).expect("can create out dir");
    fs::copy(
        fixture("project_specs_example.txt"),
        workspace.path().join("notes/specs.txt"),
    )
    .expect("can seed specs");
    let config = fixture("config_valid.toml");

    let output = run_in(
        workspace.path(),
        &["--config", config.to_str().expect("fixture path is UTF-8")],
    );

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Deadline: MATCH (March 3rd)"));
    assert!(stdout.contains("Budget: MISMATCH (Expected: $75,000, Found: $50,000)"));
    assert!(stdout.contains("Risk Level: CRITICAL WARNING (Expected: Medium, Found: HIGH)"));
    assert!(workspace.path().join("out/report.txt").is_file());
    assert!(workspace.path().join("out/history.log").is_file());
    assert!(!workspace.path().join("audit_report.txt").exists());
}

#[test]
fn missing_explicit_config_is_fatal() {
    let workspace = workspace_with_specs("project_specs_example.txt");

    let output = run_in(workspace.path(), &["--config", "absent.toml"]);

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("Failed to read configuration file"));
    assert!(!workspace.path().join("audit_report.txt").exists());
}

#[test]
fn invalid_config_names_the_field() {
    let workspace = workspace_with_specs("project_specs_example.txt");
    let config = fixture("config_blank_expected.toml");

    let output = run_in(
        workspace.path(),
        &["--config", config.to_str().expect("fixture path is UTF-8")],
    );

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("`expected.lead`"));
}
