//! CLI entry point for twig

use std::io::IsTerminal;
use std::path::Path;
use std::process;

use clap::{Parser, ValueEnum};
use twig::{
    DirectoryObserver, DirectoryWalker, FileCollector, FilePath, Listing, OutputConfig,
    SuffixFilter, WalkerConfig, print_json, print_listing,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "twig")]
#[command(about = "List the files in a directory tree whose names end in a suffix")]
#[command(version)]
struct Args {
    /// Directory to walk
    #[arg(default_value = ".")]
    path: String,

    /// Only list files ending in SUFFIX (case-insensitive, e.g. ".rs")
    #[arg(short = 'e', long = "suffix", default_value = "")]
    suffix: String,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Do not descend into directories with this name (can be used multiple times)
    #[arg(short = 'x', long = "no-recurse", value_name = "NAME")]
    no_recurse: Vec<String>,

    /// Show file sizes next to filenames
    #[arg(short = 's', long = "size")]
    size: bool,

    /// Print names with all extensions removed
    #[arg(long = "strip-ext")]
    strip_ext: bool,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

/// Collects every matched file, skipping directories named on the command line.
struct PruningCollector<'a> {
    skip: &'a [String],
    files: FileCollector,
}

impl DirectoryObserver for PruningCollector<'_> {
    fn on_directory(&mut self, path: &FilePath, name: &str) -> bool {
        !self.skip.iter().any(|s| s == name) && self.files.on_directory(path, name)
    }

    fn on_file(&mut self, dir: &FilePath, name: &str) {
        self.files.on_file(dir, name);
    }
}

/// Turn the PATH argument into a walkable root.
///
/// `.` and the empty string become the empty path so results print as bare relative names.
/// Trailing separators are dropped since appending to them is invalid.
fn root_from_arg(arg: &str) -> FilePath {
    if arg.is_empty() || Path::new(arg) == Path::new(".") {
        return FilePath::default();
    }
    let trimmed = arg.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() {
        // filesystem root: "/" -> "/." keeps the path valid
        return FilePath::new(format!("{}.", &arg[..1]));
    }
    FilePath::from(trimmed)
}

fn main() {
    twig::logging::init_tracing();
    let args = Args::parse();

    let walker = DirectoryWalker::new(WalkerConfig {
        max_depth: args.level,
        ..Default::default()
    });
    let root = root_from_arg(&args.path);
    let filter = SuffixFilter::new(args.suffix.as_str());

    let mut collector = PruningCollector {
        skip: &args.no_recurse,
        files: FileCollector::new(),
    };

    let summary = match walker.try_traverse(&mut collector, &root, &filter) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("twig: cannot access '{}': {}", args.path, e);
            process::exit(1);
        }
    };
    if summary.unreadable > 0 {
        tracing::warn!(count = summary.unreadable, "some directories could not be read");
    }

    let output_config = OutputConfig {
        use_color: !args.json && should_use_color(args.color),
        show_size: args.size,
        strip_extensions: args.strip_ext,
    };
    let listing = Listing::new(collector.files.into_files(), summary, &output_config);

    let result = if args.json {
        print_json(&listing)
    } else {
        print_listing(&listing, &output_config)
    };

    if let Err(e) = result {
        eprintln!("twig: error writing output: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_from_arg() {
        assert_eq!(root_from_arg("."), FilePath::default());
        assert_eq!(root_from_arg(""), FilePath::default());
        assert_eq!(root_from_arg("src"), FilePath::from("src"));
        assert_eq!(root_from_arg("src/"), FilePath::from("src"));
        assert_eq!(root_from_arg("a\\b\\"), FilePath::from("a\\b"));
        assert_eq!(root_from_arg("/"), FilePath::from("/."));
        assert!(root_from_arg("/").is_valid());
    }

    #[test]
    fn test_pruning_collector() {
        let skip = vec!["target".to_string()];
        let mut collector = PruningCollector {
            skip: &skip,
            files: FileCollector::new(),
        };
        assert!(!collector.on_directory(&FilePath::from("target"), "target"));
        assert!(collector.on_directory(&FilePath::from("src"), "src"));
    }
}
