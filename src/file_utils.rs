//! File size lookup and formatting.

use std::path::Path;

use crate::error::{Result, WalkError};

/// Size of the file at `path` in bytes, following symlinks.
pub fn file_size(path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();
    path.metadata()
        .map(|meta| meta.len())
        .map_err(|e| WalkError::io(path, e))
}

/// Size of the file at `path`, or 0 if it cannot be queried.
///
/// A failed lookup is indistinguishable from an empty file here; use
/// [`file_size`] when that matters.
pub fn file_size_or_zero(path: impl AsRef<Path>) -> u64 {
    file_size(path).unwrap_or(0)
}

/// Format a size in bytes to human-readable format.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1}G", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1}M", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1}K", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}
