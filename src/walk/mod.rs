//! Directory tree walking
//!
//! [`DirectoryWalker`] lists one directory at a time with
//! [`list_directory`], reports each subdirectory to a [`DirectoryObserver`]
//! (which decides whether to descend) and each file whose name passes a
//! [`SuffixFilter`].

mod config;
mod filter;
mod listing;
mod observer;
mod walker;

// Re-export public types
pub use config::WalkerConfig;
pub use filter::{SuffixFilter, ends_with_ignore_case};
pub use listing::{DirEntryInfo, list_directory};
pub use observer::{DirectoryObserver, FileCollector};
pub use walker::{DirectoryWalker, WalkSummary, traverse};
