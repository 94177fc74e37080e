use crate::repo;
use anyhow::Result;
use std::path::Path;
use std::process::{Command, Stdio};

const STEPS: &[(&str, &[&str])] = &[
    ("cargo fetch", &["fetch"]),
    ("cargo check --all-targets", &["check", "--all-targets"]),
    ("cargo test --workspace", &["test", "--workspace"]),
    ("cargo fmt --all -- --check", &["fmt", "--all", "--", "--check"]),
    (
        "cargo clippy --all-targets -- -D warnings",
        &["clippy", "--all-targets", "--", "-D", "warnings"],
    ),
];

pub fn run() -> Result<()> {
    let root = repo::repo_root()?;
    for (label, args) in STEPS {
        run_step(&root, label, args)?;
    }
    eprintln!("==> preflight passed");
    Ok(())
}

fn run_step(root: &Path, label: &str, args: &[&str]) -> Result<()> {
    eprintln!("==> {label}");
    let status = Command::new("cargo")
        .args(args)
        .current_dir(root)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    if !status.success() {
        anyhow::bail!("{label} failed (status {status})");
    }
    Ok(())
}
