//! Callbacks the walker reports to.

use crate::path::FilePath;

/// Receives directories and files found during a walk.
///
/// `on_directory` decides whether the walker descends into a directory;
/// there is no sensible default, so it must be implemented. `on_start` and
/// `on_end` bracket the whole walk exactly once and default to no-ops.
pub trait DirectoryObserver {
    fn on_start(&mut self) {}

    /// `path` includes the directory itself, `name` is its last segment.
    /// Return `true` to recurse into it.
    fn on_directory(&mut self, path: &FilePath, name: &str) -> bool;

    /// `dir` is the directory holding the file, `name` carries the extension.
    /// Only called for names that pass the suffix filter.
    fn on_file(&mut self, dir: &FilePath, name: &str);

    fn on_end(&mut self) {}
}

impl<O: DirectoryObserver + ?Sized> DirectoryObserver for &mut O {
    fn on_start(&mut self) {
        (**self).on_start()
    }

    fn on_directory(&mut self, path: &FilePath, name: &str) -> bool {
        (**self).on_directory(path, name)
    }

    fn on_file(&mut self, dir: &FilePath, name: &str) {
        (**self).on_file(dir, name)
    }

    fn on_end(&mut self) {
        (**self).on_end()
    }
}

/// Observer that enters every directory and keeps the full path of each
/// matched file, in the order found.
#[derive(Debug, Default)]
pub struct FileCollector {
    files: Vec<FilePath>,
}

impl FileCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[FilePath] {
        &self.files
    }

    pub fn into_files(self) -> Vec<FilePath> {
        self.files
    }
}

impl DirectoryObserver for FileCollector {
    fn on_directory(&mut self, _path: &FilePath, _name: &str) -> bool {
        true
    }

    fn on_file(&mut self, dir: &FilePath, name: &str) {
        self.files.push(dir.joined(name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_collector_joins_dir_and_name() {
        let mut collector = FileCollector::new();
        assert!(collector.on_directory(&FilePath::from("root/sub"), "sub"));
        collector.on_file(&FilePath::from("root/sub"), "b.cpp");
        collector.on_file(&FilePath::default(), "top.cpp");
        let files: Vec<_> = collector.files().iter().map(|f| f.as_str()).collect();
        assert_eq!(files, vec!["root/sub/b.cpp", "top.cpp"]);
    }

    #[test]
    fn test_default_lifecycle_hooks_are_no_ops() {
        let mut collector = FileCollector::new();
        collector.on_start();
        collector.on_end();
        assert!(collector.into_files().is_empty());
    }
}
