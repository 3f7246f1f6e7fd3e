//! File name filtering for tree walking

/// Case-insensitive file name suffix filter.
///
/// An empty suffix matches every name. A suffix longer than the name never
/// matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixFilter(String);

impl SuffixFilter {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self(suffix.into())
    }

    /// Filter that accepts every file.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn suffix(&self) -> &str {
        &self.0
    }

    /// Check if a file name passes the filter.
    pub fn matches(&self, name: &str) -> bool {
        ends_with_ignore_case(name, &self.0)
    }
}

impl From<&str> for SuffixFilter {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SuffixFilter {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// `ends_with` ignoring ASCII case. `ends_with_ignore_case("Any", "")` is true.
pub fn ends_with_ignore_case(name: &str, end: &str) -> bool {
    let (name, end) = (name.as_bytes(), end.as_bytes());
    if name.len() < end.len() {
        return false;
    }
    name[name.len() - end.len()..].eq_ignore_ascii_case(end)
}
