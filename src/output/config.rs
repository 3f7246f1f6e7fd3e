//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Look up and show the size of each file.
    pub show_size: bool,
    /// Print file names with every extension removed.
    pub strip_extensions: bool,
}
