//! Field reading helpers for normalized rows
//!
//! These helpers never fail. A value that cannot be read degrades to `None`
//! and is counted so a load summary can report how lossy it was.

use super::aliases::{AliasTable, LogicalField};
use super::stats::NormalizeStats;
use crate::app::services::csv_parser::RawRow;
use tracing::debug;

/// Read an optional trimmed text field
pub fn optional_text(row: &RawRow, table: &AliasTable, field: LogicalField) -> Option<String> {
    table
        .lookup(row, field)
        .map(|value| value.to_text().trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Read a text field, substituting `default` when absent
pub fn text_or(row: &RawRow, table: &AliasTable, field: LogicalField, default: &str) -> String {
    optional_text(row, table, field).unwrap_or_else(|| default.to_string())
}

/// Read an optional numeric field
///
/// Text that is not a numeric literal becomes `None`; the miss is logged at
/// debug level and counted in `stats`.
pub fn optional_number(
    row: &RawRow,
    table: &AliasTable,
    field: LogicalField,
    stats: &mut NormalizeStats,
) -> Option<f64> {
    let value = table.lookup(row, field)?;
    match value.to_number() {
        Some(number) => Some(number),
        None => {
            debug!(
                "Line {}: non-numeric {} value '{}' treated as missing",
                row.line_number(),
                field,
                value
            );
            stats.non_numeric_values += 1;
            None
        }
    }
}

/// Read a text field that must be present, counting a default substitution
pub fn text_or_count(
    row: &RawRow,
    table: &AliasTable,
    field: LogicalField,
    default: &str,
    counter: &mut usize,
) -> String {
    match optional_text(row, table, field) {
        Some(text) => text,
        None => {
            *counter += 1;
            default.to_string()
        }
    }
}
