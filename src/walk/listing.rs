//! One-level directory listing.

use std::path::Path;

use crate::error::{Result, WalkError};
use crate::path::FilePath;

/// An entry directly inside a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    /// True for real directories. Symbolic links are not followed, so a link
    /// to a directory reports `false`.
    pub is_dir: bool,
}

/// List the entries directly inside `dir`.
///
/// An empty path lists the current directory. Fails when the directory
/// cannot be opened at all; entries that vanish, cannot be typed, or whose
/// names are not valid UTF-8 are skipped. `.` and `..` are never returned.
pub fn list_directory(dir: &FilePath, sorted: bool) -> Result<Vec<DirEntryInfo>> {
    let target = if dir.is_empty() {
        Path::new(".")
    } else {
        dir.as_path()
    };

    let read_dir = std::fs::read_dir(target).map_err(|e| WalkError::io(target, e))?;

    let mut entries: Vec<DirEntryInfo> = read_dir
        .filter_map(|e| e.ok())
        .filter_map(|entry| {
            let file_type = match entry.file_type() {
                Ok(t) => t,
                Err(err) => {
                    tracing::trace!(path = %entry.path().display(), %err, "skipping untyped entry");
                    return None;
                }
            };
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    tracing::debug!(name = ?raw, dir = %dir, "skipping entry with non-UTF-8 name");
                    return None;
                }
            };
            Some(DirEntryInfo {
                name,
                is_dir: file_type.is_dir(),
            })
        })
        .collect();

    if sorted {
        entries.sort_by(|a, b| a.name.cmp(&b.name));
    }

    Ok(entries)
}
