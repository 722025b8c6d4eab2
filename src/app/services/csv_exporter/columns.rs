//! Exportable columns

use crate::app::models::{CanonicalRecord, ValueField};
use serde::{Deserialize, Serialize};

/// One cell before escaping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// No value; renders as `""`
    Missing,
    Text(String),
}

impl Cell {
    fn from_option(value: Option<String>) -> Self {
        value.map_or(Cell::Missing, Cell::Text)
    }
}

/// A column of the export layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExportColumn {
    RecordId,
    RecordType,
    City,
    Barangay,
    Category,
    Value,
    Date,
    Source,
    Notes,
    CreatedAt,
    ModifiedAt,
    ImportedFrom,
    /// A climate metric or the primary value
    Metric(ValueField),
}

/// Layout of downloadable reports
pub const REPORT_COLUMNS: [ExportColumn; 10] = [
    ExportColumn::RecordId,
    ExportColumn::RecordType,
    ExportColumn::City,
    ExportColumn::Barangay,
    ExportColumn::Category,
    ExportColumn::Value,
    ExportColumn::Date,
    ExportColumn::Source,
    ExportColumn::Notes,
    ExportColumn::CreatedAt,
];

impl ExportColumn {
    pub fn header(&self) -> String {
        let name = match self {
            ExportColumn::RecordId => "Record ID",
            ExportColumn::RecordType => "Record Type",
            ExportColumn::City => "City",
            ExportColumn::Barangay => "Barangay",
            ExportColumn::Category => "Category",
            ExportColumn::Value => "Value",
            ExportColumn::Date => "Date",
            ExportColumn::Source => "Source",
            ExportColumn::Notes => "Notes",
            ExportColumn::CreatedAt => "Created At",
            ExportColumn::ModifiedAt => "Modified At",
            ExportColumn::ImportedFrom => "Imported From",
            ExportColumn::Metric(field) => return field.as_str().to_string(),
        };
        name.to_string()
    }

    /// Render this column for `record`
    pub fn cell(&self, record: &CanonicalRecord) -> Cell {
        match self {
            ExportColumn::RecordId => Cell::Text(record.id.to_string()),
            ExportColumn::RecordType => Cell::Text(record.record_type().to_string()),
            ExportColumn::City => Cell::Text(record.location.city.clone()),
            ExportColumn::Barangay => Cell::Text(record.location.barangay.clone()),
            ExportColumn::Category => Cell::Text(record.category.clone()),
            ExportColumn::Value => Cell::from_option(record.value.map(format_number)),
            ExportColumn::Date => Cell::Text(record.date.iso().unwrap_or_default()),
            ExportColumn::Source => Cell::Text(record.source.clone()),
            ExportColumn::Notes => Cell::from_option(record.notes.clone()),
            ExportColumn::CreatedAt => Cell::from_option(
                record
                    .metadata
                    .created_at
                    .map(|at| at.format("%Y-%m-%d").to_string()),
            ),
            ExportColumn::ModifiedAt => Cell::from_option(
                record
                    .metadata
                    .modified_at
                    .map(|at| at.format("%Y-%m-%d").to_string()),
            ),
            ExportColumn::ImportedFrom => Cell::from_option(record.metadata.imported_from.clone()),
            ExportColumn::Metric(field) => {
                Cell::from_option(record.field_value(*field).map(format_number))
            }
        }
    }
}

/// Shortest decimal form (`12`, `28.4`)
fn format_number(value: f64) -> String {
    value.to_string()
}
