//! Shared utility functions for report sinks

use chrono::NaiveDateTime;

/// Marker written in place of a listing when a directory has no visible children.
pub const EMPTY_DIRECTORY_MARKER: &str = "-- Empty Directory --";

/// Column headings shared by both formats.
pub const TYPE_HEADING: &str = "Type";
pub const NAME_HEADING: &str = "Title";
pub const SIZE_HEADING: &str = "File Size";
pub const UNIT_HEADING: &str = "Size Unit";

/// Format a generation timestamp as `dd/mm/YYYY HH:MM:SS`.
pub fn format_timestamp(time: &NaiveDateTime) -> String {
    time.format("%d/%m/%Y %H:%M:%S").to_string()
}

/// A horizontal rule of `=` as wide as `text` (in characters) plus `extra`.
pub fn rule_for(text: &str, extra: usize) -> String {
    "=".repeat(text.chars().count() + extra)
}
