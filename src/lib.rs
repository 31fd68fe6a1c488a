//! dtlister - recursive directory listing with file sizes, saved as a text or Excel report

pub mod error;
pub mod output;
pub mod prompt;
pub mod size;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{ReportError, Result};
pub use output::{
    OutputFormat, ReportIdentity, ReportOptions, ReportSink, ReportSummary, ReportWriter,
    SpreadsheetReport, TextLayout, TextReport, generate_report, output_file_name,
};
pub use prompt::Prompter;
pub use size::{DivisorLadder, FormattedSize, SizeUnit, format_size};
pub use tree::{
    ChildRecord, DirectoryEntry, DirectoryListing, DirectoryWalker, ScanConfig, list_directory,
};
