//! Immediate children of a single directory
//!
//! The walker only says *which* directories to report; the lister reads each
//! one on demand and turns its entries into sorted `ChildRecord`s.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{ReportError, Result};
use crate::size::{DivisorLadder, FormattedSize, format_size};

use super::config::ScanConfig;
use super::utils::{entry_name, should_skip_entry};

/// One child of a listed directory.
#[derive(Debug, Clone, PartialEq)]
pub enum ChildRecord {
    Directory {
        name: String,
    },
    File {
        name: String,
        bytes: u64,
        size: FormattedSize,
    },
}

impl ChildRecord {
    pub fn name(&self) -> &str {
        match self {
            ChildRecord::Directory { name } => name,
            ChildRecord::File { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, ChildRecord::Directory { .. })
    }

    /// Label used in the report's type column.
    pub fn kind_label(&self) -> &'static str {
        match self {
            ChildRecord::Directory { .. } => "Directory",
            ChildRecord::File { .. } => "File",
        }
    }
}

/// Visible children of one directory: directories first, then files,
/// each group sorted ascending by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryListing {
    children: Vec<ChildRecord>,
}

impl DirectoryListing {
    /// Build a listing from unordered records.
    pub fn from_records(records: Vec<ChildRecord>) -> Self {
        let (mut dirs, mut files): (Vec<_>, Vec<_>) =
            records.into_iter().partition(ChildRecord::is_dir);
        dirs.sort_by(|a, b| a.name().cmp(b.name()));
        files.sort_by(|a, b| a.name().cmp(b.name()));
        dirs.extend(files);
        Self { children: dirs }
    }

    /// True when nothing visible is left (no entries, or hidden ones only).
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn children(&self) -> &[ChildRecord] {
        &self.children
    }

    pub fn directories(&self) -> impl Iterator<Item = &ChildRecord> {
        self.children.iter().filter(|c| c.is_dir())
    }

    pub fn files(&self) -> impl Iterator<Item = &ChildRecord> {
        self.children.iter().filter(|c| !c.is_dir())
    }

    pub fn file_count(&self) -> usize {
        self.files().count()
    }

    /// Sum of the raw file sizes in this listing.
    pub fn total_bytes(&self) -> u64 {
        self.children
            .iter()
            .map(|c| match c {
                ChildRecord::File { bytes, .. } => *bytes,
                ChildRecord::Directory { .. } => 0,
            })
            .sum()
    }
}

fn is_symlink(entry: &fs::DirEntry) -> bool {
    entry.file_type().is_ok_and(|t| t.is_symlink())
}

/// List the visible children of `dir`.
///
/// Classification follows symbolic links, so a link to a directory is listed
/// as a directory even though the walker never descends into it. A link whose
/// target cannot be resolved (dangling, or a loop) is listed as a file sized
/// by the link itself.
pub fn list_directory(
    dir: &Path,
    config: &ScanConfig,
    ladder: DivisorLadder,
) -> Result<DirectoryListing> {
    let entries = fs::read_dir(dir).map_err(|e| ReportError::read(dir, e))?;

    let mut records = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ReportError::read(dir, e))?;
        let name = entry_name(&entry.file_name());
        if should_skip_entry(&name, config) {
            continue;
        }

        let path = entry.path();
        let meta = match fs::metadata(&path) {
            Ok(meta) => meta,
            Err(e) if is_symlink(&entry) => {
                warn!(path = %path.display(), error = %e, "unresolvable link, using link metadata");
                entry.metadata().map_err(|e| ReportError::read(&path, e))?
            }
            Err(e) => return Err(ReportError::read(&path, e)),
        };

        if meta.is_dir() {
            records.push(ChildRecord::Directory { name });
        } else {
            let bytes = meta.len();
            records.push(ChildRecord::File {
                name,
                bytes,
                size: format_size(bytes, ladder),
            });
        }
    }

    let listing = DirectoryListing::from_records(records);
    debug!(
        dir = %dir.display(),
        children = listing.children().len(),
        "listed directory"
    );
    Ok(listing)
}
