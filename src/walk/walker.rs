//! DirectoryWalker - depth-first, pre-order directory traversal

use serde::Serialize;

use crate::error::Result;
use crate::path::FilePath;

use super::config::WalkerConfig;
use super::filter::SuffixFilter;
use super::listing::{DirEntryInfo, list_directory};
use super::observer::DirectoryObserver;

/// Counts gathered during one traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WalkSummary {
    /// Directories reported through `on_directory`.
    pub directories: usize,
    /// Files reported through `on_file`.
    pub files: usize,
    /// Directories that could not be listed and were walked as empty.
    pub unreadable: usize,
}

/// Recursive walker that reports to a [`DirectoryObserver`].
///
/// The observer sees `on_start` once, then every directory (which it may
/// decline to enter) and every file whose name passes the suffix filter,
/// then `on_end` once. Subdirectories are walked as soon as they are
/// approved, before the remaining siblings.
#[derive(Debug, Clone, Default)]
pub struct DirectoryWalker {
    config: WalkerConfig,
}

impl DirectoryWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Walk `root`, treating any directory that cannot be listed as empty.
    ///
    /// A missing root therefore produces only `on_start` and `on_end`.
    pub fn traverse<O: DirectoryObserver + ?Sized>(
        &self,
        observer: &mut O,
        root: &FilePath,
        filter: &SuffixFilter,
    ) -> WalkSummary {
        let mut summary = WalkSummary::default();
        observer.on_start();
        self.walk_dir(observer, root, filter, 0, &mut summary);
        observer.on_end();
        summary
    }

    /// Like [`DirectoryWalker::traverse`], but fails without calling the
    /// observer at all when `root` itself cannot be listed.
    ///
    /// Unlistable subdirectories are still walked as empty and counted in
    /// [`WalkSummary::unreadable`].
    pub fn try_traverse<O: DirectoryObserver + ?Sized>(
        &self,
        observer: &mut O,
        root: &FilePath,
        filter: &SuffixFilter,
    ) -> Result<WalkSummary> {
        let entries = list_directory(root, self.config.sort_entries)?;

        let mut summary = WalkSummary::default();
        observer.on_start();
        self.visit_entries(observer, root, entries, filter, 0, &mut summary);
        observer.on_end();
        Ok(summary)
    }

    fn walk_dir<O: DirectoryObserver + ?Sized>(
        &self,
        observer: &mut O,
        dir: &FilePath,
        filter: &SuffixFilter,
        depth: usize,
        summary: &mut WalkSummary,
    ) {
        let entries = match list_directory(dir, self.config.sort_entries) {
            Ok(e) => e,
            Err(err) => {
                tracing::debug!(path = %dir, %err, "cannot list directory, treating as empty");
                summary.unreadable += 1;
                return;
            }
        };
        self.visit_entries(observer, dir, entries, filter, depth, summary);
    }

    fn visit_entries<O: DirectoryObserver + ?Sized>(
        &self,
        observer: &mut O,
        dir: &FilePath,
        entries: Vec<DirEntryInfo>,
        filter: &SuffixFilter,
        depth: usize,
        summary: &mut WalkSummary,
    ) {
        tracing::trace!(path = %dir, depth, entries = entries.len(), "listing directory");

        for entry in entries {
            if entry.is_dir {
                let child = dir.joined(&entry.name);
                summary.directories += 1;

                if !observer.on_directory(&child, &entry.name) {
                    tracing::trace!(path = %child, "observer declined directory");
                    continue;
                }
                if self.config.at_max_depth(depth) {
                    tracing::trace!(path = %child, depth, "max depth reached");
                    continue;
                }
                self.walk_dir(observer, &child, filter, depth + 1, summary);
            } else if filter.matches(&entry.name) {
                summary.files += 1;
                observer.on_file(dir, &entry.name);
            }
        }
    }
}

/// Walk `root` with the default configuration, reporting files whose names
/// end in `suffix` (case-insensitive, empty matches everything).
pub fn traverse<O: DirectoryObserver + ?Sized>(
    observer: &mut O,
    root: &FilePath,
    suffix: &str,
) -> WalkSummary {
    DirectoryWalker::default().traverse(observer, root, &SuffixFilter::new(suffix))
}
