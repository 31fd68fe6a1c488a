//! Plain-text report
//!
//! Fixed-width columns: a 15-character type column, a padded name column and
//! a right-aligned size column (`value` in 8 characters, unit in 3).

use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{ReportError, Result};
use crate::tree::ChildRecord;

use super::config::TextLayout;
use super::report::{DirectoryBlock, ReportHeader, ReportSink};
use super::utils::{EMPTY_DIRECTORY_MARKER, NAME_HEADING, SIZE_HEADING, TYPE_HEADING, rule_for};

const TYPE_WIDTH: usize = 15;
/// `{:8.2}` value plus `{:>3}` unit
const SIZE_WIDTH: usize = 11;
/// Extra width of the header rule over the root path, for the "Directory: " label
const HEADER_RULE_EXTRA: usize = 11;

/// Text report sink writing line by line to `W`.
pub struct TextReport<W: Write> {
    out: W,
    layout: TextLayout,
    destination: PathBuf,
}

impl TextReport<BufWriter<File>> {
    /// Create (or truncate) the report file at `path`.
    pub fn create(path: &Path, layout: TextLayout) -> Result<Self> {
        let file = File::create(path).map_err(|e| ReportError::write(path, e))?;
        Ok(Self {
            out: BufWriter::new(file),
            layout,
            destination: path.to_path_buf(),
        })
    }
}

impl<W: Write> TextReport<W> {
    /// Write into an arbitrary writer; `destination` is only used in error messages.
    pub fn new(out: W, destination: impl Into<PathBuf>, layout: TextLayout) -> Self {
        Self {
            out,
            layout,
            destination: destination.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.out, "{}", text).map_err(|e| ReportError::write(&self.destination, e))
    }

    fn format_child(&self, child: &ChildRecord) -> String {
        let width = self.layout.name_width;
        match child {
            ChildRecord::Directory { name } => {
                format!("{:<TYPE_WIDTH$}{:<width$}", child.kind_label(), name)
            }
            ChildRecord::File { name, size, .. } => format!(
                "{:<TYPE_WIDTH$}{:<width$}{:8.2}{:>3}",
                child.kind_label(),
                name,
                size.value,
                size.unit.label()
            ),
        }
    }
}

impl<W: Write> ReportSink for TextReport<W> {
    fn write_header(&mut self, header: &ReportHeader) -> Result<()> {
        let root = header.root_display();
        let rule = rule_for(&root, HEADER_RULE_EXTRA);
        let width = self.layout.name_width;
        let identity = &header.identity;

        self.line("")?;
        self.line(&rule)?;
        self.line(format_args!("Directory: {}", root))?;
        self.line(format_args!("Creation Time: {}", header.timestamp()))?;
        self.line(&rule)?;
        self.line(&identity.title)?;
        self.line(&identity.version)?;
        self.line(format_args!("Created by {}", identity.author))?;
        self.line(&identity.website)?;
        self.line(&identity.email)?;
        self.line(&rule)?;
        self.line(format_args!(
            "{:<TYPE_WIDTH$}{:<width$}{:>SIZE_WIDTH$}",
            TYPE_HEADING, NAME_HEADING, SIZE_HEADING
        ))?;
        self.line("")
    }

    fn write_directory(&mut self, block: &DirectoryBlock<'_>) -> Result<()> {
        let path = block.path.display().to_string();
        let rule = rule_for(&path, 0);

        self.line(&rule)?;
        self.line(&path)?;
        self.line(&rule)?;

        if block.listing.is_empty() {
            self.line(EMPTY_DIRECTORY_MARKER)?;
        } else {
            for child in block.listing.children() {
                let text = self.format_child(child);
                self.line(text)?;
            }
        }
        self.line("")
    }

    fn finish(&mut self) -> Result<()> {
        self.out
            .flush()
            .map_err(|e| ReportError::write(&self.destination, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size::{DivisorLadder, format_size};
    use crate::tree::DirectoryListing;
    use crate::output::config::ReportIdentity;
    use chrono::NaiveDate;

    /// Lines written by `write_header`, leading and trailing blanks included
    const HEADER_LINES: usize = 13;

    fn header(root: &str) -> ReportHeader {
        ReportHeader {
            identity: ReportIdentity {
                version: "Version 1.0".to_string(),
                ..Default::default()
            },
            root: PathBuf::from(root),
            generated: NaiveDate::from_ymd_opt(2017, 1, 31)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        }
    }

    fn render(layout: TextLayout, blocks: &[(&str, DirectoryListing)]) -> String {
        let mut report = TextReport::new(Vec::new(), "<memory>", layout);
        report.write_header(&header("/tmp/root")).unwrap();
        for (path, listing) in blocks {
            report
                .write_directory(&DirectoryBlock {
                    path: Path::new(path),
                    listing,
                })
                .unwrap();
        }
        report.finish().unwrap();
        String::from_utf8(report.into_inner()).unwrap()
    }

    fn file(name: &str, bytes: u64) -> ChildRecord {
        ChildRecord::File {
            name: name.to_string(),
            bytes,
            size: format_size(bytes, DivisorLadder::Decimal),
        }
    }

    fn dir(name: &str) -> ChildRecord {
        ChildRecord::Directory {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_header_layout() {
        let output = render(TextLayout { name_width: 10 }, &[]);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), HEADER_LINES);
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "=".repeat("/tmp/root".len() + 11));
        assert_eq!(lines[2], "Directory: /tmp/root");
        assert_eq!(lines[3], "Creation Time: 31/01/2017 12:00:00");
        assert_eq!(lines[5], "Directory Tree Lister");
        assert_eq!(lines[6], "Version 1.0");
        assert_eq!(lines[7], "Created by (Author)");
        assert_eq!(lines[8], "(Website)");
        assert_eq!(lines[9], "(Email)");
        assert_eq!(lines[11], "Type           Title       File Size");
        assert_eq!(lines[12], "");
    }

    #[test]
    fn test_block_layout() {
        let listing = DirectoryListing::from_records(vec![file("b.txt", 2048), dir("a")]);
        let output = render(TextLayout { name_width: 10 }, &[("/tmp/root", listing)]);
        let block: Vec<&str> = output.lines().skip(HEADER_LINES).collect();

        assert_eq!(
            block,
            vec![
                "=========",
                "/tmp/root",
                "=========",
                "Directory      a         ",
                "File           b.txt         2.05 KB",
                "",
            ]
        );
    }

    #[test]
    fn test_empty_directory_marker() {
        let output = render(
            TextLayout::default(),
            &[("/tmp/root/a", DirectoryListing::default())],
        );
        assert!(output.contains("/tmp/root/a\n===========\n-- Empty Directory --\n\n"));
    }

    #[test]
    fn test_long_names_overflow_the_column() {
        let long = "x".repeat(20);
        let listing = DirectoryListing::from_records(vec![file(&long, 5)]);
        let output = render(TextLayout { name_width: 10 }, &[("/r", listing)]);
        assert!(output.contains(&format!("File           {}    5.00  B", long)));
    }

    #[test]
    fn test_default_columns_match_header_width() {
        let listing = DirectoryListing::from_records(vec![file("a", 1)]);
        let output = render(TextLayout::default(), &[("/r", listing)]);
        let heading = output.lines().nth(HEADER_LINES - 2).unwrap();
        let file_line = output.lines().find(|l| l.starts_with("File")).unwrap();
        assert_eq!(heading.len(), file_line.len());
        assert_eq!(heading.len(), 15 + 120 + 11);
    }

    #[test]
    fn test_create_in_missing_directory_is_an_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("missing").join("report.txt");

        let err = TextReport::create(&path, TextLayout::default())
            .err()
            .expect("create should fail");
        assert!(matches!(err, ReportError::Write { path: p, .. } if p == path));
    }

    #[test]
    fn test_directory_lines_fill_the_name_column() {
        let listing = DirectoryListing::from_records(vec![dir("sub")]);
        let output = render(TextLayout::default(), &[("/r", listing)]);
        let dir_line = output.lines().find(|l| l.starts_with("Directory ")).unwrap();
        assert_eq!(dir_line.len(), 15 + 120);
        assert_eq!(dir_line.trim_end(), "Directory      sub");
    }
}
