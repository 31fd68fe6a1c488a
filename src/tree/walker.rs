//! DirectoryWalker - lazy pre-order enumeration of directories

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ReportError, Result};

use super::config::ScanConfig;
use super::utils::{entry_name, is_ignored};

/// A directory reached by the walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub path: PathBuf,
    /// Distance from the root (root = 0)
    pub depth: usize,
}

/// Depth-first walker yielding every reachable directory, root first.
///
/// Uses an explicit stack instead of recursion, so deep trees cannot exhaust
/// the call stack. Subdirectories are visited in the order the filesystem
/// returns them. Symbolic links are never followed. Hidden directories are
/// walked like any other; only ignore patterns prune a subtree.
///
/// A directory is read only when it is about to be yielded. If that read
/// fails, the error is yielded and the walk ends.
#[derive(Debug)]
pub struct DirectoryWalker {
    config: ScanConfig,
    stack: Vec<DirectoryEntry>,
}

impl DirectoryWalker {
    /// Start a walk at `root`, which must be an existing directory.
    pub fn new(root: &Path, config: &ScanConfig) -> Result<Self> {
        let meta = fs::metadata(root).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ReportError::NotADirectory(root.to_path_buf()),
            _ => ReportError::read(root, e),
        })?;
        if !meta.is_dir() {
            return Err(ReportError::NotADirectory(root.to_path_buf()));
        }

        Ok(Self {
            config: config.clone(),
            stack: vec![DirectoryEntry {
                path: root.to_path_buf(),
                depth: 0,
            }],
        })
    }

    /// Subdirectories of `dir` in enumeration order, links and ignored names excluded.
    fn child_directories(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(dir).map_err(|e| ReportError::read(dir, e))?;

        let mut dirs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ReportError::read(dir, e))?;
            let file_type = entry
                .file_type()
                .map_err(|e| ReportError::read(entry.path(), e))?;

            // file_type() does not follow links, so a link to a directory is not a dir here
            if !file_type.is_dir() {
                continue;
            }
            if is_ignored(&entry_name(&entry.file_name()), &self.config) {
                continue;
            }
            dirs.push(entry.path());
        }
        Ok(dirs)
    }
}

impl Iterator for DirectoryWalker {
    type Item = Result<DirectoryEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;

        // Children past the depth limit are never reported, so skip the read
        if !self.config.beyond_max_depth(current.depth + 1) {
            match self.child_directories(&current.path) {
                Ok(children) => {
                    // Reversed so the first enumerated child is popped first
                    self.stack
                        .extend(children.into_iter().rev().map(|path| DirectoryEntry {
                            path,
                            depth: current.depth + 1,
                        }));
                }
                Err(e) => {
                    self.stack.clear();
                    return Some(Err(e));
                }
            }
        }

        Some(Ok(current))
    }
}
