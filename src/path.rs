//! Slash-agnostic path value used throughout the walker.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

const EXTENSION_CHAR: u8 = b'.';

fn is_any_slash(c: u8) -> bool {
    c == b'/' || c == b'\\'
}

/// A filesystem path held as a plain string.
///
/// Both `/` and `\` are accepted as separators and may be mixed until
/// [`FilePath::normalize`] rewrites them to `/`. Relative and absolute paths
/// are both fine. A path is *valid* when it is empty or does not end in a
/// separator; [`FilePath::append`] and [`FilePath::extension`] expect a valid
/// path and only check that in debug builds.
///
/// Construction stores the input verbatim, no normalization or validation
/// happens.
///
/// # Examples
///
/// ```
/// use twig::FilePath;
///
/// let mut path = FilePath::from("src\\walk");
/// path.append("walker.rs");
/// path.normalize();
/// assert_eq!(path.as_str(), "src/walk/walker.rs");
/// assert_eq!(path.extension(), "rs");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilePath {
    path: String,
}

impl FilePath {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    pub fn into_string(self) -> String {
        self.path
    }

    /// View as a `Path` for use with `std::fs`.
    pub fn as_path(&self) -> &Path {
        Path::new(&self.path)
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Byte offset of the first extension character, if a `.` follows the
    /// last separator.
    fn extension_start(&self) -> Option<usize> {
        let mut start = None;
        for (i, &c) in self.path.as_bytes().iter().enumerate() {
            if is_any_slash(c) {
                // a dot in a directory name is not an extension
                start = None;
            } else if c == EXTENSION_CHAR {
                start = Some(i + 1);
            }
        }
        start
    }

    /// Text after the last `.` of the final segment.
    ///
    /// Returns an empty slice (positioned at the end of the path) when the
    /// final segment has no `.`, and also for a trailing `.` with nothing
    /// after it.
    pub fn extension(&self) -> &str {
        debug_assert!(self.is_valid(), "extension() on invalid path {:?}", self.path);
        let start = self.extension_start().unwrap_or(self.path.len());
        &self.path[start..]
    }

    /// Remove the final extension together with its `.`.
    ///
    /// Returns `true` if the path changed, so all extensions can be stripped
    /// with `while path.remove_extension() {}`.
    pub fn remove_extension(&mut self) -> bool {
        if self.path.is_empty() {
            return false;
        }
        debug_assert!(self.is_valid(), "remove_extension() on invalid path {:?}", self.path);

        match self.extension_start() {
            Some(start) => {
                self.path.truncate(start - 1);
                true
            }
            None => false,
        }
    }

    /// Change every `\` into `/`.
    pub fn normalize(&mut self) {
        if self.path.contains('\\') {
            self.path = self.path.replace('\\', "/");
        }
    }

    /// Append `rhs`, inserting a single `/` unless the path is empty.
    ///
    /// `rhs` may itself carry relative directories or an extension. The
    /// current path must be valid; appending to a path that already ends in a
    /// separator is a caller error (checked in debug builds only).
    pub fn append(&mut self, rhs: &str) {
        debug_assert!(self.is_valid(), "append() on invalid path {:?}", self.path);

        if !self.path.is_empty() {
            self.path.push('/');
        }
        self.path.push_str(rhs);
    }

    /// Like [`FilePath::append`] but returns a new path.
    pub fn joined(&self, rhs: &str) -> FilePath {
        let mut child = self.clone();
        child.append(rhs);
        child
    }

    /// The final segment (the whole path when there is no separator).
    pub fn file_name(&self) -> &str {
        match self.path.bytes().rposition(is_any_slash) {
            Some(i) => &self.path[i + 1..],
            None => &self.path,
        }
    }

    /// Empty, or not ending in a separator.
    pub fn is_valid(&self) -> bool {
        self.path.bytes().last().is_none_or(|c| !is_any_slash(c))
    }
}

impl From<&str> for FilePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for FilePath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&Path> for FilePath {
    fn from(p: &Path) -> Self {
        Self::new(p.to_string_lossy().into_owned())
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl AsRef<str> for FilePath {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

impl AsRef<Path> for FilePath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}
