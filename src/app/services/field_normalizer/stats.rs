//! Normalization statistics and result structures

use crate::app::models::CanonicalRecord;

/// Records produced from one source with their statistics
#[derive(Debug, Clone)]
pub struct NormalizeResult {
    /// One record per input row, in input order
    pub records: Vec<CanonicalRecord>,

    pub stats: NormalizeStats,
}

impl NormalizeResult {
    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

/// Lossy-coercion counters for a normalization pass
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NormalizeStats {
    /// Rows handed to the normalizer
    pub rows_seen: usize,

    /// Records produced (always equal to `rows_seen`)
    pub records_produced: usize,

    /// Rows without an id column value; the row number was used instead
    pub generated_ids: usize,

    /// City or barangay replaced by the configured default
    pub defaulted_locations: usize,

    /// Dates kept as raw text because they did not parse
    pub unparsed_dates: usize,

    /// Numeric cells that held text
    pub non_numeric_values: usize,

    /// Records with no primary value
    pub missing_values: usize,
}

impl NormalizeStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge counters from another pass
    pub fn merge(&mut self, other: &NormalizeStats) {
        self.rows_seen += other.rows_seen;
        self.records_produced += other.records_produced;
        self.generated_ids += other.generated_ids;
        self.defaulted_locations += other.defaulted_locations;
        self.unparsed_dates += other.unparsed_dates;
        self.non_numeric_values += other.non_numeric_values;
        self.missing_values += other.missing_values;
    }

    /// Percentage of records whose date parsed
    pub fn date_parse_rate(&self) -> f64 {
        if self.records_produced == 0 {
            100.0
        } else {
            ((self.records_produced - self.unparsed_dates) as f64 / self.records_produced as f64)
                * 100.0
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "{} records ({} generated ids, {} defaulted locations, {} unparsed dates, {} non-numeric cells, {} without value)",
            self.records_produced,
            self.generated_ids,
            self.defaulted_locations,
            self.unparsed_dates,
            self.non_numeric_values,
            self.missing_values
        )
    }
}
