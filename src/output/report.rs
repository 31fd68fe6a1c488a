//! Format-agnostic report orchestration
//!
//! `ReportWriter` drives the walker and the lister and hands each directory
//! to a `ReportSink`, which owns serialization and the output file.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tracing::info;

use crate::error::{ReportError, Result};
use crate::tree::{DirectoryListing, DirectoryWalker, base_name, list_directory};

use super::config::{OutputFormat, ReportIdentity, ReportOptions};
use super::spreadsheet::SpreadsheetReport;
use super::text::TextReport;
use super::utils::format_timestamp;

/// Metadata written once at the top of a report.
#[derive(Debug, Clone)]
pub struct ReportHeader {
    pub identity: ReportIdentity,
    pub root: PathBuf,
    pub generated: NaiveDateTime,
}

impl ReportHeader {
    pub fn root_display(&self) -> String {
        self.root.display().to_string()
    }

    pub fn timestamp(&self) -> String {
        format_timestamp(&self.generated)
    }
}

/// One directory and its children, as handed to a sink.
#[derive(Debug, Clone, Copy)]
pub struct DirectoryBlock<'a> {
    pub path: &'a Path,
    pub listing: &'a DirectoryListing,
}

/// Totals for a finished report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Directory blocks written, root included
    pub directories: usize,
    /// File records written across all blocks
    pub files: usize,
    /// Raw size of those files
    pub bytes: u64,
    /// Blocks rendered as empty
    pub empty_directories: usize,
}

impl ReportSummary {
    fn record(&mut self, listing: &DirectoryListing) {
        self.directories += 1;
        self.files += listing.file_count();
        self.bytes += listing.total_bytes();
        if listing.is_empty() {
            self.empty_directories += 1;
        }
    }
}

/// Destination for a report. Called in order: header once, one block per
/// directory, then `finish`.
pub trait ReportSink {
    fn write_header(&mut self, header: &ReportHeader) -> Result<()>;

    fn write_directory(&mut self, block: &DirectoryBlock<'_>) -> Result<()>;

    fn finish(&mut self) -> Result<()>;
}

/// Walks a tree and streams it into a sink.
#[derive(Debug, Clone, Default)]
pub struct ReportWriter {
    options: ReportOptions,
    generated: Option<NaiveDateTime>,
}

impl ReportWriter {
    pub fn new(options: ReportOptions) -> Self {
        Self {
            options,
            generated: None,
        }
    }

    /// Pin the header timestamp instead of using the current local time.
    pub fn with_timestamp(mut self, generated: NaiveDateTime) -> Self {
        self.generated = Some(generated);
        self
    }

    /// Write a full report for `root` into `sink`.
    pub fn write<S: ReportSink>(&self, root: &Path, sink: &mut S) -> Result<ReportSummary> {
        // Validates the root before anything reaches the sink
        let walker = DirectoryWalker::new(root, &self.options.scan)?;

        let header = ReportHeader {
            identity: self.options.identity.clone(),
            root: root.to_path_buf(),
            generated: self
                .generated
                .unwrap_or_else(|| Local::now().naive_local()),
        };
        sink.write_header(&header)?;

        let mut summary = ReportSummary::default();
        for entry in walker {
            let entry = entry?;
            let listing = list_directory(&entry.path, &self.options.scan, self.options.ladder)?;
            summary.record(&listing);
            sink.write_directory(&DirectoryBlock {
                path: &entry.path,
                listing: &listing,
            })?;
        }

        sink.finish()?;
        info!(
            root = %root.display(),
            directories = summary.directories,
            files = summary.files,
            bytes = summary.bytes,
            empty = summary.empty_directories,
            "report complete"
        );
        Ok(summary)
    }
}

/// Report file name for `root`: `directory-tree-<base name>.<ext>`.
pub fn output_file_name(root: &Path, format: OutputFormat) -> String {
    format!("directory-tree-{}.{}", base_name(root), format.extension())
}

/// Check that `path` exists and is a directory.
pub fn ensure_directory(path: &Path) -> Result<()> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        _ => Err(ReportError::NotADirectory(path.to_path_buf())),
    }
}

/// Scan `root` and save the report into `output_dir`.
///
/// Returns the path of the written file. On failure a partial file may remain.
pub fn generate_report(
    root: &Path,
    output_dir: &Path,
    format: OutputFormat,
    options: &ReportOptions,
) -> Result<PathBuf> {
    ensure_directory(root)?;
    ensure_directory(output_dir)?;

    let destination = output_dir.join(output_file_name(root, format));
    let writer = ReportWriter::new(options.clone());

    match format {
        OutputFormat::Text => {
            let mut sink = TextReport::create(&destination, options.layout.clone())?;
            writer.write(root, &mut sink)?;
        }
        OutputFormat::Spreadsheet => {
            let mut sink = SpreadsheetReport::new(&destination);
            writer.write(root, &mut sink)?;
        }
    }

    info!(path = %destination.display(), "report saved");
    Ok(destination)
}
