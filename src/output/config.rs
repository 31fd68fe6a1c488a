//! Report configuration types

use crate::size::DivisorLadder;
use crate::tree::ScanConfig;

const DEFAULT_NAME_WIDTH: usize = 120;

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Spreadsheet,
}

impl OutputFormat {
    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Spreadsheet => "xlsx",
        }
    }

    /// Human name used in status messages.
    pub fn description(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Spreadsheet => "excel",
        }
    }
}

/// Identity lines printed in every report header.
#[derive(Debug, Clone)]
pub struct ReportIdentity {
    pub title: String,
    pub version: String,
    pub author: String,
    pub website: String,
    pub email: String,
}

impl Default for ReportIdentity {
    fn default() -> Self {
        Self {
            title: "Directory Tree Lister".to_string(),
            version: format!("Version {}", env!("CARGO_PKG_VERSION")),
            author: "(Author)".to_string(),
            website: "(Website)".to_string(),
            email: "(Email)".to_string(),
        }
    }
}

/// Column layout for the text report.
#[derive(Debug, Clone)]
pub struct TextLayout {
    /// Width of the name column; longer names overflow rather than being cut.
    pub name_width: usize,
}

impl Default for TextLayout {
    fn default() -> Self {
        Self {
            name_width: DEFAULT_NAME_WIDTH,
        }
    }
}

/// Everything that shapes a report run.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    pub scan: ScanConfig,
    pub ladder: DivisorLadder,
    pub layout: TextLayout,
    pub identity: ReportIdentity,
}
