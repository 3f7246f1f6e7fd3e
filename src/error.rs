//! Error types for listing and file queries.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by directory listing and file-size queries.
///
/// The default traversal swallows these (a missing directory is walked as an
/// empty one); they are visible through [`crate::DirectoryWalker::try_traverse`]
/// and the lower-level helpers.
#[derive(Debug, Error)]
pub enum WalkError {
    /// Path not found.
    #[error("No such file or directory: {path}")]
    NotFound { path: PathBuf },

    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path exists but is not a directory.
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WalkError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotADirectory => Self::NotADirectory { path },
            _ => Self::Io { path, source },
        }
    }

    /// The path the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path }
            | Self::PermissionDenied { path }
            | Self::NotADirectory { path }
            | Self::Io { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, WalkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_error_io_not_found() {
        let err = WalkError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, WalkError::NotFound { .. }));
        assert_eq!(err.path(), std::path::Path::new("/test/path"));
    }

    #[test]
    fn test_walk_error_io_permission_denied() {
        let err = WalkError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, WalkError::PermissionDenied { .. }));
        assert!(err.to_string().contains("Permission denied"));
    }

    #[test]
    fn test_walk_error_io_other_keeps_source() {
        let err = WalkError::io("/x", std::io::Error::other("boom"));
        assert!(matches!(err, WalkError::Io { .. }));
        assert!(err.to_string().contains("boom"));
    }
}
