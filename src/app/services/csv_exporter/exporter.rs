//! CSV serialization

use super::columns::{Cell, ExportColumn, REPORT_COLUMNS};
use crate::app::models::CanonicalRecord;
use crate::constants::CSV_LINE_SEPARATOR;
use std::borrow::Cow;
use tracing::debug;

/// Serializes records with a fixed column layout
#[derive(Debug, Clone)]
pub struct CsvExporter {
    columns: Vec<ExportColumn>,
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::report()
    }
}

impl CsvExporter {
    pub fn new(columns: Vec<ExportColumn>) -> Self {
        Self { columns }
    }

    /// Exporter using the report layout
    pub fn report() -> Self {
        Self::new(REPORT_COLUMNS.to_vec())
    }

    pub fn columns(&self) -> &[ExportColumn] {
        &self.columns
    }

    /// Header line followed by one line per record, joined with `\r\n`
    pub fn export(&self, records: &[CanonicalRecord]) -> String {
        let mut lines = Vec::with_capacity(records.len() + 1);

        let header: Vec<String> = self
            .columns
            .iter()
            .map(|column| escape_field(&column.header()).into_owned())
            .collect();
        lines.push(header.join(","));

        for record in records {
            let row: Vec<String> = self
                .columns
                .iter()
                .map(|column| render(column.cell(record)))
                .collect();
            lines.push(row.join(","));
        }

        debug!(
            "Exported {} records across {} columns",
            records.len(),
            self.columns.len()
        );
        lines.join(CSV_LINE_SEPARATOR)
    }
}

fn render(cell: Cell) -> String {
    match cell {
        Cell::Missing => "\"\"".to_string(),
        Cell::Text(text) => escape_field(&text).into_owned(),
    }
}

/// Quote `text` only when it holds a comma, a line break or a quote
pub fn escape_field(text: &str) -> Cow<'_, str> {
    if text.contains([',', '\n', '\r', '"']) {
        Cow::Owned(format!("\"{}\"", text.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(text)
    }
}
