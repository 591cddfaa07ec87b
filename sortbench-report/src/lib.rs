#![warn(missing_docs)]
//! SortBench Report - Result Model and Output Formats
//!
//! Generates machine-readable output from a benchmark run:
//! - JSON (full report, pretty-printed)
//! - CSV (one row per algorithm and dataset size)
//!
//! Human-readable tables are rendered by the CLI.

mod csv;
mod json;
mod report;

pub use csv::generate_csv_report;
pub use json::{SCHEMA_VERSION, generate_json_report};
pub use report::{AlgorithmResult, FailureInfo, Report, ReportMeta, ReportSummary, RunStatus};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON with full schema
    Json,
    /// CSV for spreadsheets
    Csv,
    /// Human-readable terminal table
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "human" | "text" | "table" => Ok(OutputFormat::Human),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Format a duration given in milliseconds with an appropriate unit
pub fn format_duration(ms: f64) -> String {
    if ms < 0.001 {
        format!("{:.0} ns", ms * 1_000_000.0)
    } else if ms < 1.0 {
        format!("{:.2} us", ms * 1000.0)
    } else if ms < 1000.0 {
        format!("{:.3} ms", ms)
    } else {
        format!("{:.3} s", ms / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("CSV".parse::<OutputFormat>(), Ok(OutputFormat::Csv));
        assert_eq!("table".parse::<OutputFormat>(), Ok(OutputFormat::Human));
        assert!("html".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(0.0005), "500 ns");
        assert_eq!(format_duration(0.25), "250.00 us");
        assert_eq!(format_duration(12.5), "12.500 ms");
        assert_eq!(format_duration(2500.0), "2.500 s");
    }
}
