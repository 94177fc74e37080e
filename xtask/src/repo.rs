use std::env;
use std::path::{Path, PathBuf};

/// Nearest ancestor of the working directory whose Cargo.toml declares the workspace.
pub fn repo_root() -> anyhow::Result<PathBuf> {
    let start = env::current_dir()?;
    start
        .ancestors()
        .find(|dir| declares_workspace(dir))
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            anyhow::anyhow!(
                "failed to find workspace root above {} (no Cargo.toml with [workspace])",
                start.display()
            )
        })
}

fn declares_workspace(dir: &Path) -> bool {
    std::fs::read_to_string(dir.join("Cargo.toml"))
        .map(|manifest| manifest.lines().any(|line| line.trim() == "[workspace]"))
        .unwrap_or(false)
}

pub fn rel_from(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}
