//! Listing formatting and display
//!
//! - `config` - Output configuration types
//! - `json` - JSON output
//!
//! Plain output writes one matched file per line, the directory part in
//! blue, followed by a summary line.

mod config;
mod json;

use std::io::{self, Write};

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::file_utils::{file_size, format_size};
use crate::path::FilePath;
use crate::walk::WalkSummary;

pub use config::OutputConfig;
pub use json::print_json;

/// A matched file ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct ListedFile {
    pub path: FilePath,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_human: Option<String>,
}

/// Everything one run prints.
#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub files: Vec<ListedFile>,
    pub directories: usize,
    pub files_count: usize,
}

impl Listing {
    /// Build a listing from collected file paths.
    ///
    /// Paths are normalized to forward slashes. Sizes are looked up before
    /// extensions are stripped; a file whose size cannot be read gets none.
    pub fn new(files: Vec<FilePath>, summary: WalkSummary, config: &OutputConfig) -> Self {
        let files = files
            .into_iter()
            .map(|mut path| {
                path.normalize();
                let size_bytes = if config.show_size {
                    file_size(&path).ok()
                } else {
                    None
                };
                if config.strip_extensions {
                    // a leading dot names the file, it is not an extension
                    while path.file_name().rfind('.').is_some_and(|i| i > 0)
                        && path.remove_extension()
                    {}
                }
                ListedFile {
                    path,
                    size_bytes,
                    size_human: size_bytes.map(format_size),
                }
            })
            .collect();

        Self {
            files,
            directories: summary.directories,
            files_count: summary.files,
        }
    }
}

/// Print the plain listing to stdout, colored when `config.use_color` is set
/// and stdout supports it.
pub fn print_listing(listing: &Listing, config: &OutputConfig) -> io::Result<()> {
    let choice = if config.use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    write_listing(&mut stdout, listing)?;
    stdout.flush()
}

/// Write the plain listing.
pub fn write_listing<W: WriteColor>(out: &mut W, listing: &Listing) -> io::Result<()> {
    for file in &listing.files {
        let full = file.path.as_str();
        let name = file.path.file_name();
        let dir = &full[..full.len() - name.len()];

        out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(out, "{}", dir)?;
        out.reset()?;
        write!(out, "{}", name)?;
        if let Some(ref size) = file.size_human {
            write!(out, "  [{}]", size)?;
        }
        writeln!(out)?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "{} {}, {} {}",
        listing.directories,
        if listing.directories == 1 { "directory" } else { "directories" },
        listing.files_count,
        if listing.files_count == 1 { "file" } else { "files" },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::Buffer;

    fn summary(directories: usize, files: usize) -> WalkSummary {
        WalkSummary {
            directories,
            files,
            unreadable: 0,
        }
    }

    fn render(listing: &Listing) -> String {
        let mut buf = Buffer::no_color();
        write_listing(&mut buf, listing).unwrap();
        String::from_utf8(buf.into_inner()).unwrap()
    }

    #[test]
    fn test_listing_normalizes_paths() {
        let files = vec![FilePath::from("root\\sub\\b.cpp")];
        let listing = Listing::new(files, summary(1, 1), &OutputConfig::default());
        assert_eq!(listing.files[0].path.as_str(), "root/sub/b.cpp");
        assert!(listing.files[0].size_bytes.is_none());
    }

    #[test]
    fn test_listing_strips_all_extensions() {
        let config = OutputConfig {
            strip_extensions: true,
            ..Default::default()
        };
        let files = vec![FilePath::from("out.d/archive.tar.gz")];
        let listing = Listing::new(files, summary(0, 1), &config);
        assert_eq!(listing.files[0].path.as_str(), "out.d/archive");
    }

    #[test]
    fn test_listing_strip_keeps_dotfile_names() {
        let config = OutputConfig {
            strip_extensions: true,
            ..Default::default()
        };
        let files = vec![
            FilePath::from("r/.gitignore"),
            FilePath::from("r/.config.toml"),
            FilePath::from(".env"),
        ];
        let listing = Listing::new(files, summary(0, 3), &config);
        let paths: Vec<_> = listing.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["r/.gitignore", "r/.config", ".env"]);
        assert!(listing.files.iter().all(|f| f.path.is_valid()));
    }

    #[test]
    fn test_listing_missing_file_has_no_size() {
        let config = OutputConfig {
            show_size: true,
            ..Default::default()
        };
        let files = vec![FilePath::from("/nonexistent/dir/file.txt")];
        let listing = Listing::new(files, summary(0, 1), &config);
        assert!(listing.files[0].size_bytes.is_none());
        assert!(listing.files[0].size_human.is_none());
    }

    #[test]
    fn test_write_listing_plain() {
        let files = vec![FilePath::from("root/a.cpp"), FilePath::from("root/sub/b.cpp")];
        let listing = Listing::new(files, summary(1, 2), &OutputConfig::default());
        assert_eq!(
            render(&listing),
            "root/a.cpp\nroot/sub/b.cpp\n\n1 directory, 2 files\n"
        );
    }

    #[test]
    fn test_write_listing_with_size() {
        let listing = Listing {
            files: vec![ListedFile {
                path: FilePath::from("big.bin"),
                size_bytes: Some(2048),
                size_human: Some(format_size(2048)),
            }],
            directories: 0,
            files_count: 1,
        };
        assert_eq!(render(&listing), "big.bin  [2.0K]\n\n0 directories, 1 file\n");
    }

    #[test]
    fn test_json_shape() {
        let listing = Listing::new(
            vec![FilePath::from("a.txt")],
            summary(2, 1),
            &OutputConfig::default(),
        );
        let value = serde_json::to_value(&listing).unwrap();
        assert_eq!(value["files"][0]["path"], "a.txt");
        assert!(value["files"][0].get("size_bytes").is_none());
        assert_eq!(value["directories"], 2);
        assert_eq!(value["files_count"], 1);
    }
}
