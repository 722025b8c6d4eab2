//! CSV export of record sets
//!
//! This module serializes records back to spreadsheet-friendly CSV and builds
//! the downloadable reports offered by the reports view.
//!
//! # Architecture
//!
//! - [`columns`] - Exportable columns, their headers and cell rendering
//! - [`exporter`] - The [`CsvExporter`] and field escaping
//! - [`report`] - Report requests, public anonymisation and file naming
//!
//! # Output Format
//!
//! - A field is quoted only when it contains a comma, a line break or a quote
//! - Embedded quotes are doubled
//! - Missing values render as `""` so every row has the same column count
//! - Dates render as `YYYY-MM-DD`; unparsable dates render empty
//! - Lines are separated by `\r\n`
//!
//! # Usage
//!
//! ```rust
//! use health_climate::app::services::csv_exporter::{CsvExporter, ExportColumn};
//!
//! let exporter = CsvExporter::new(vec![ExportColumn::RecordId, ExportColumn::Value]);
//! assert_eq!(exporter.export(&[]), "Record ID,Value");
//! ```

pub mod columns;
pub mod exporter;
pub mod report;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use columns::{Cell, ExportColumn, REPORT_COLUMNS};
pub use exporter::{CsvExporter, escape_field};
pub use report::{Audience, Report, ReportRequest, generate_report, report_file_name};
