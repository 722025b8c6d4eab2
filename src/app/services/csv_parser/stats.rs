//! Parsing statistics and result structures for CSV ingestion
//!
//! This module provides types for tracking row-shape anomalies and coercion
//! counts, and for handing parsed rows to the field normalizer.

use super::row::RawRow;

/// Parsing result with rows and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Header cells in file order
    pub headers: Vec<String>,

    /// Parsed data rows
    pub rows: Vec<RawRow>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of lines in the input, blank ones included
    pub total_lines: usize,

    /// Number of data rows produced
    pub rows_parsed: usize,

    /// Number of blank lines dropped
    pub blank_lines_skipped: usize,

    /// Rows with fewer fields than the header (padded with empty text)
    pub short_rows: usize,

    /// Rows with more fields than the header (extra fields dropped)
    pub long_rows: usize,

    /// Cells coerced to numbers
    pub numeric_fields: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_lines: 0,
            rows_parsed: 0,
            blank_lines_skipped: 0,
            short_rows: 0,
            long_rows: 0,
            numeric_fields: 0,
        }
    }

    /// Rows whose field count differed from the header
    pub fn mismatched_rows(&self) -> usize {
        self.short_rows + self.long_rows
    }

    /// Percentage of rows whose shape matched the header
    pub fn well_formed_rate(&self) -> f64 {
        if self.rows_parsed == 0 {
            100.0
        } else {
            ((self.rows_parsed - self.mismatched_rows()) as f64 / self.rows_parsed as f64) * 100.0
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "{} rows from {} lines ({} blank, {} short, {} long, {} numeric cells)",
            self.rows_parsed,
            self.total_lines,
            self.blank_lines_skipped,
            self.short_rows,
            self.long_rows,
            self.numeric_fields
        )
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
