//! Report generation
//!
//! This module turns a scanned tree into a report file:
//! - Plain text with fixed-width columns
//! - Excel workbook with one row per header line and per child
//!
//! # Module Structure
//!
//! - `config` - Output format and report options
//! - `report` - `ReportWriter` orchestration and the `ReportSink` trait
//! - `text` - Plain-text sink
//! - `spreadsheet` - Workbook sink
//! - `utils` - Shared headings, markers and timestamp formatting

mod config;
mod report;
mod spreadsheet;
mod text;
mod utils;

pub use config::{OutputFormat, ReportIdentity, ReportOptions, TextLayout};
pub use report::{
    DirectoryBlock, ReportHeader, ReportSink, ReportSummary, ReportWriter, ensure_directory,
    generate_report, output_file_name,
};
pub use spreadsheet::{Cell, SheetRow, SpreadsheetReport};
pub use text::TextReport;
pub use utils::{EMPTY_DIRECTORY_MARKER, format_timestamp};
