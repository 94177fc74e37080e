//! File helpers for loading audit input and persisting report/history output.

use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::Path,
};

use tempfile::Builder;

use crate::lib::errors::AuditError;

/// Outcome of `append_with_banner`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendStatus {
    /// File did not exist; banner written before the contents.
    Created,
    /// Contents appended after existing bytes.
    Appended,
}

/// Read the whole file as UTF-8 text.
///
/// A missing path maps to `FileNotFound`; every other failure (including
/// invalid UTF-8) maps to `ReadError`.
pub fn read_text_file(path: &Path) -> Result<String, AuditError> {
    if !path.exists() {
        return Err(AuditError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    fs::read_to_string(path).map_err(|source| AuditError::ReadError {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace `path` with `contents` through a temp file in the same directory.
///
/// Readers see either the previous file or the complete new one. An existing
/// file keeps its permissions; a new one gets the umask-derived default.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), io::Error> {
    let existing = fs::metadata(path).ok().map(|metadata| metadata.permissions());
    let mut temp = temp_builder().tempfile_in(parent_dir(path))?;
    temp.write_all(contents.as_bytes())?;
    temp.flush()?;
    if let Some(permissions) = existing {
        temp.as_file().set_permissions(permissions)?;
    }
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|err| err.error)?;
    Ok(())
}

/// Append `contents`, writing `banner` first when the file is new.
///
/// Existing bytes are never rewritten.
pub fn append_with_banner(
    path: &Path,
    banner: &str,
    contents: &str,
) -> Result<AppendStatus, io::Error> {
    let is_new = !path.exists();
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if is_new {
        file.write_all(banner.as_bytes())?;
    }
    file.write_all(contents.as_bytes())?;
    file.flush()?;

    Ok(if is_new {
        AppendStatus::Created
    } else {
        AppendStatus::Appended
    })
}

#[cfg(unix)]
fn temp_builder() -> Builder<'static, 'static> {
    use std::os::unix::fs::PermissionsExt;

    // open(2) masks this with the process umask, matching a plain create.
    let mut builder = Builder::new();
    builder.permissions(fs::Permissions::from_mode(0o666));
    builder
}

#[cfg(not(unix))]
fn temp_builder() -> Builder<'static, 'static> {
    Builder::new()
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
