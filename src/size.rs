//! Human-readable file sizes
//!
//! A byte count is mapped onto a unit by walking a fixed threshold ladder
//! (B, KB, MB, GB, TB). Two ladders exist: decimal (1000-based, the default,
//! matching what macOS and most Linux file managers show) and binary
//! (1024-based, matching Windows Explorer). One run uses exactly one ladder.

use std::fmt;

/// Unit label attached to a formatted size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SizeUnit {
    B,
    KB,
    MB,
    GB,
    TB,
}

impl SizeUnit {
    /// Ladder order, smallest first.
    pub const ALL: [SizeUnit; 5] = [
        SizeUnit::B,
        SizeUnit::KB,
        SizeUnit::MB,
        SizeUnit::GB,
        SizeUnit::TB,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SizeUnit::B => "B",
            SizeUnit::KB => "KB",
            SizeUnit::MB => "MB",
            SizeUnit::GB => "GB",
            SizeUnit::TB => "TB",
        }
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Divisor convention used to pick a unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DivisorLadder {
    /// 1 KB = 1000 bytes
    #[default]
    Decimal,
    /// 1 KB = 1024 bytes
    Binary,
}

impl DivisorLadder {
    fn base(self) -> u64 {
        match self {
            DivisorLadder::Decimal => 1000,
            DivisorLadder::Binary => 1024,
        }
    }

    /// Divisor for `unit` under this ladder (B = 1).
    pub fn divisor(self, unit: SizeUnit) -> u64 {
        let exp = SizeUnit::ALL
            .iter()
            .position(|u| *u == unit)
            .unwrap_or_default() as u32;
        self.base().pow(exp)
    }
}

/// A byte count expressed in its best-fitting unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormattedSize {
    /// Rounded to two decimal places.
    pub value: f64,
    pub unit: SizeUnit,
}

impl fmt::Display for FormattedSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.value, self.unit)
    }
}

/// Format a byte count for readability.
pub fn format_size(bytes: u64, ladder: DivisorLadder) -> FormattedSize {
    // Largest unit whose divisor does not exceed the byte count; TB is the cap.
    let unit = SizeUnit::ALL
        .iter()
        .rev()
        .copied()
        .find(|unit| bytes >= ladder.divisor(*unit))
        .unwrap_or(SizeUnit::B);

    let scaled = bytes as f64 / ladder.divisor(unit) as f64;
    FormattedSize {
        value: round2(scaled),
        unit,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decimal(bytes: u64) -> (f64, &'static str) {
        let size = format_size(bytes, DivisorLadder::Decimal);
        (size.value, size.unit.label())
    }

    fn binary(bytes: u64) -> (f64, &'static str) {
        let size = format_size(bytes, DivisorLadder::Binary);
        (size.value, size.unit.label())
    }

    #[test]
    fn test_decimal_thresholds() {
        assert_eq!(decimal(0), (0.0, "B"));
        assert_eq!(decimal(999), (999.0, "B"));
        assert_eq!(decimal(1000), (1.0, "KB"));
        assert_eq!(decimal(1_500_000), (1.5, "MB"));
        assert_eq!(decimal(999_999_999), (1000.0, "MB"));
        assert_eq!(decimal(1_000_000_000), (1.0, "GB"));
        assert_eq!(decimal(1_000_000_000_000), (1.0, "TB"));
    }

    #[test]
    fn test_decimal_rounds_to_two_places() {
        assert_eq!(decimal(2048), (2.05, "KB"));
        assert_eq!(decimal(1234), (1.23, "KB"));
        assert_eq!(decimal(999_990), (999.99, "KB"));
    }

    #[test]
    fn test_binary_thresholds() {
        assert_eq!(binary(1023), (1023.0, "B"));
        assert_eq!(binary(1024), (1.0, "KB"));
        assert_eq!(binary(2048), (2.0, "KB"));
        assert_eq!(binary(1_048_576), (1.0, "MB"));
        assert_eq!(binary(1_073_741_824), (1.0, "GB"));
        assert_eq!(binary(1_099_511_627_776), (1.0, "TB"));
    }

    #[test]
    fn test_terabytes_do_not_overflow_into_a_larger_unit() {
        let size = format_size(5_000_000_000_000_000, DivisorLadder::Decimal);
        assert_eq!(size.unit, SizeUnit::TB);
        assert_eq!(size.value, 5000.0);
    }

    #[test]
    fn test_divisor_table() {
        assert_eq!(DivisorLadder::Decimal.divisor(SizeUnit::B), 1);
        assert_eq!(DivisorLadder::Decimal.divisor(SizeUnit::MB), 1_000_000);
        assert_eq!(DivisorLadder::Binary.divisor(SizeUnit::GB), 1 << 30);
    }

    #[test]
    fn test_display() {
        let size = format_size(1_500_000, DivisorLadder::Decimal);
        assert_eq!(size.to_string(), "1.50 MB");
    }
}
