//! Downloadable reports
//!
//! A report selects records by inclusive date range, optional record type
//! and optional barangay, orders them by date, and exports them with the
//! report layout. Public reports hide provenance detail.

use super::exporter::CsvExporter;
use crate::app::models::{CanonicalRecord, DateRange, FilterSpec, RecordType};
use crate::app::services::record_repository::RecordRepository;
use crate::constants::{
    PUBLIC_NOTES_PLACEHOLDER, PUBLIC_REPORT_PREFIX, PUBLIC_SOURCE_LABEL, REPORT_FILE_STEM,
};
use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Who the report is for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    /// Anonymised; produced when no user is signed in
    #[default]
    Public,
    Internal,
}

/// Report selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub record_type: Option<RecordType>,
    pub barangay: Option<String>,
    pub audience: Audience,
}

impl ReportRequest {
    /// Public report of every record in `start..=end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            record_type: None,
            barangay: None,
            audience: Audience::Public,
        }
    }

    pub fn with_type(mut self, record_type: RecordType) -> Self {
        self.record_type = Some(record_type);
        self
    }

    pub fn with_barangay(mut self, barangay: impl Into<String>) -> Self {
        self.barangay = Some(barangay.into());
        self
    }

    pub fn internal(mut self) -> Self {
        self.audience = Audience::Internal;
        self
    }

    /// Equivalent repository query
    pub fn filter(&self) -> FilterSpec {
        let mut spec = FilterSpec::new().with_date_range(DateRange::between(self.start, self.end));
        if let Some(record_type) = self.record_type {
            spec = spec.with_type(record_type);
        }
        if let Some(barangay) = &self.barangay {
            spec = spec.with_barangay(barangay.clone());
        }
        spec
    }

    fn validate(&self) -> Result<()> {
        if self.start > self.end {
            return Err(Error::validation(
                "dateRange",
                format!("start {} is after end {}", self.start, self.end),
            ));
        }
        Ok(())
    }
}

/// A generated report ready for download
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub file_name: String,
    pub content: String,
    pub record_count: usize,
    pub audience: Audience,
}

/// `{public_|}health_climate_report_{start}_to_{end}.csv`
pub fn report_file_name(request: &ReportRequest) -> String {
    let prefix = match request.audience {
        Audience::Public => PUBLIC_REPORT_PREFIX,
        Audience::Internal => "",
    };
    format!(
        "{}{}_{}_to_{}.csv",
        prefix,
        REPORT_FILE_STEM,
        request.start.format("%Y-%m-%d"),
        request.end.format("%Y-%m-%d")
    )
}

/// Build a report from the repository
///
/// Fails with a validation error when the range is inverted and with
/// `Error::EmptyReport` when nothing matches.
pub fn generate_report(repository: &RecordRepository, request: &ReportRequest) -> Result<Report> {
    request.validate()?;

    let mut records = repository.query(&request.filter());
    if records.is_empty() {
        return Err(Error::empty_report(format!(
            "no records between {} and {}",
            request.start, request.end
        )));
    }

    // Stable: records on the same date keep insertion order
    records.sort_by(|a, b| a.date.chronological_cmp(&b.date));

    if request.audience == Audience::Public {
        records.iter_mut().for_each(anonymize);
    }

    let content = CsvExporter::report().export(&records);
    let file_name = report_file_name(request);
    info!("Generated report {} with {} records", file_name, records.len());

    Ok(Report {
        file_name,
        content,
        record_count: records.len(),
        audience: request.audience,
    })
}

/// Hide provenance: generic source, placeholder notes, record date as creation date
pub fn anonymize(record: &mut CanonicalRecord) {
    record.source = PUBLIC_SOURCE_LABEL.to_string();
    if record.notes.is_some() {
        record.notes = Some(PUBLIC_NOTES_PLACEHOLDER.to_string());
    }
    record.metadata.created_at = record
        .date
        .parsed()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|at| at.and_utc());
}
