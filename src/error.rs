//! Error types shared by the walker, the lister and the report sinks

use std::io;
use std::path::PathBuf;

use rust_xlsxwriter::XlsxError;
use thiserror::Error;

/// Everything that can abort a report run.
///
/// None of these are retried: the first failure ends the run and a partially
/// written output file may be left behind.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The path does not exist or is not a directory.
    #[error("'{}' is not a valid directory", .0.display())]
    NotADirectory(PathBuf),

    /// A directory or entry could not be read while scanning.
    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The report file could not be created or written.
    #[error("cannot write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The workbook could not be built or saved.
    #[error("cannot save workbook '{}': {source}", path.display())]
    Workbook {
        path: PathBuf,
        #[source]
        source: XlsxError,
    },
}

impl ReportError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_a_directory_message() {
        let err = ReportError::NotADirectory(PathBuf::from("/no/such/dir"));
        assert_eq!(err.to_string(), "'/no/such/dir' is not a valid directory");
    }

    #[test]
    fn test_read_error_keeps_source() {
        let err = ReportError::read(
            "/tmp/x",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("cannot read '/tmp/x'"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
