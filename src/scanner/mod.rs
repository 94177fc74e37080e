//! Directory listing with human-readable file sizes.
use std::{
    env, fs,
    path::{Component, Path, PathBuf},
};

use serde::Serialize;
use tracing::{info, warn};

use crate::lib::{errors::ScanError, telemetry::RunSpan};

mod size;

pub use size::format_size;

const RULE_WIDTH: usize = 60;
const NAME_WIDTH: usize = 40;
const SIZE_WIDTH: usize = 15;

/// One regular file found by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanEntry {
    pub name: String,
    /// `None` when the file's metadata could not be read.
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Sorted listing of a directory's regular files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanListing {
    pub directory: PathBuf,
    pub entries: Vec<ScanEntry>,
    pub total_bytes: u64,
}

impl ScanListing {
    pub fn file_count(&self) -> usize {
        self.entries.len()
    }

    /// Render the console table.
    pub fn render(&self) -> String {
        let heavy = "=".repeat(RULE_WIDTH);
        let mut lines = vec![
            String::new(),
            heavy.clone(),
            format!("Scanning: {}", self.directory.display()),
            heavy.clone(),
            String::new(),
        ];

        if self.entries.is_empty() {
            lines.push("No files found in this directory.".to_string());
            return lines.join("\n");
        }

        let rule = format!("{} {}", "-".repeat(NAME_WIDTH), "-".repeat(SIZE_WIDTH));
        lines.push(format!(
            "{:<NAME_WIDTH$} {:>SIZE_WIDTH$}",
            "File Name", "Size"
        ));
        lines.push(rule.clone());
        for entry in &self.entries {
            let size = entry
                .size
                .map(format_size)
                .unwrap_or_else(|| "Error".to_string());
            lines.push(format!(
                "{:<NAME_WIDTH$} {:>SIZE_WIDTH$}",
                entry.name, size
            ));
        }
        lines.push(rule);
        lines.push(format!(
            "{:<NAME_WIDTH$} {:>SIZE_WIDTH$}",
            "Total:",
            format_size(self.total_bytes)
        ));
        lines.push(String::new());
        lines.push(format!("Total files: {}", self.file_count()));
        lines.push(heavy);
        lines.join("\n")
    }
}

/// List the regular files directly inside `directory`.
pub fn scan_directory(directory: &Path) -> Result<ScanListing, ScanError> {
    let run_span = RunSpan::start("scan", directory);
    let listing = {
        let _entered = run_span.span().enter();
        collect_listing(directory)
    };
    run_span.finish(if listing.is_ok() { "completed" } else { "failed" });
    listing
}

fn collect_listing(directory: &Path) -> Result<ScanListing, ScanError> {
    if !directory.exists() {
        return Err(ScanError::NotFound {
            path: directory.to_path_buf(),
        });
    }
    if !directory.is_dir() {
        return Err(ScanError::NotADirectory {
            path: directory.to_path_buf(),
        });
    }

    let read_dir_error = |source| ScanError::ReadDir {
        path: directory.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(directory).map_err(read_dir_error)? {
        let path = entry.map_err(read_dir_error)?.path();
        if path.is_file() {
            files.push(path);
        }
    }

    let mut entries = files
        .iter()
        .map(|path| {
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            match fs::metadata(path) {
                Ok(metadata) => ScanEntry {
                    name,
                    size: Some(metadata.len()),
                    error: None,
                },
                Err(err) => {
                    warn!(
                        target: "factcheck::scan",
                        path = %path.display(),
                        reason = %err,
                        "Failed to read file size"
                    );
                    ScanEntry {
                        name,
                        size: None,
                        error: Some(err.to_string()),
                    }
                }
            }
        })
        .collect::<Vec<_>>();
    entries.sort_by_key(|entry| entry.name.to_lowercase());

    let total_bytes: u64 = entries.iter().filter_map(|entry| entry.size).sum();
    info!(
        target: "factcheck::scan",
        directory = %directory.display(),
        files = entries.len(),
        total_bytes,
        "Scanned directory"
    );

    Ok(ScanListing {
        directory: absolute_path(directory),
        entries,
        total_bytes,
    })
}

fn absolute_path(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };
    joined
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}
