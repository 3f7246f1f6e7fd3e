//! Twig - path values and an observer-driven recursive directory walker

pub mod error;
pub mod file_utils;
pub mod logging;
pub mod output;
pub mod path;
pub mod string_utils;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, WalkError};
pub use output::{Listing, OutputConfig, print_json, print_listing};
pub use path::FilePath;
pub use walk::{
    DirectoryObserver, DirectoryWalker, FileCollector, SuffixFilter, WalkSummary, WalkerConfig,
    traverse,
};
