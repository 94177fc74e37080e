use crate::{fs, repo};
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const DEFAULT_MAX_LINES: usize = 500;

pub fn run(root: &Path, max_lines: usize) -> Result<()> {
    let counts = line_counts(root)?;
    let violations = counts
        .iter()
        .filter(|(count, _)| *count > max_lines)
        .collect::<Vec<_>>();

    for (count, rel) in &violations {
        eprintln!("FAIL: {} has {} lines (>{max_lines})", rel.display(), count);
    }
    if !violations.is_empty() {
        anyhow::bail!("LOC guard failed: {} file(s) over {max_lines} lines", violations.len());
    }

    println!(
        "PASS: {} Rust file(s) under src/ are within {max_lines} lines.",
        counts.len()
    );
    Ok(())
}

/// Line counts of every `src/**/*.rs`, longest first.
fn line_counts(root: &Path) -> Result<Vec<(usize, PathBuf)>> {
    let src = root.join("src");
    if !src.is_dir() {
        anyhow::bail!("no src/ directory under {}", root.display());
    }

    let mut counts = Vec::new();
    for path in fs::rust_sources(&src)? {
        let text = std::fs::read_to_string(&path)?;
        counts.push((text.lines().count(), repo::rel_from(root, &path)));
    }
    counts.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
    Ok(counts)
}
