use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use tempfile::TempDir;

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_factcheck");

pub fn fixture(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(relative)
}

/// Temporary working directory seeded with `project_specs.txt` from a fixture.
pub fn workspace_with_specs(fixture_name: &str) -> TempDir {
    let workspace = tempfile::tempdir().expect("can create workspace");
    fs::copy(
        fixture(fixture_name),
        workspace.path().join("project_specs.txt"),
    )
    .expect("can seed project_specs.txt");
    workspace
}

/// Run the binary inside `cwd` without inheriting config or log overrides.
pub fn run_in(cwd: &Path, args: &[&str]) -> Output {
    Command::new(BINARY_PATH)
        .args(args)
        .current_dir(cwd)
        .env_remove("FACTCHECK_CONFIG_PATH")
        .env_remove("RUST_LOG")
        .output()
        .expect("factcheck binary should run")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
