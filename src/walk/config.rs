//! Configuration types for the directory walker

/// Configuration for walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// How many levels below the root get listed. `Some(0)` lists only the
    /// root: its subdirectories are still reported to the observer but never
    /// entered. `None` means unlimited.
    pub max_depth: Option<usize>,
    /// Visit the entries of each directory in name order rather than the
    /// order the OS returns them.
    pub sort_entries: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            sort_entries: true,
        }
    }
}

impl WalkerConfig {
    /// Check if we're at maximum depth
    pub fn at_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth >= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unlimited_and_sorted() {
        let config = WalkerConfig::default();
        assert_eq!(config.max_depth, None);
        assert!(config.sort_entries);
        assert!(!config.at_max_depth(1_000));
    }

    #[test]
    fn test_at_max_depth() {
        let config = WalkerConfig {
            max_depth: Some(1),
            ..Default::default()
        };
        assert!(!config.at_max_depth(0));
        assert!(config.at_max_depth(1));
        assert!(config.at_max_depth(2));
    }
}
