//! Tests for disease row mapping

use super::*;
use crate::app::models::{DatasetKind, RecordId, RecordType};
use crate::app::services::csv_parser::RawRow;
use crate::app::services::field_normalizer::FieldNormalizer;
use chrono::NaiveDate;

#[test]
fn test_disease_row_uses_positional_us_date() {
    let rows = disease_rows();
    let record = FieldNormalizer::default().normalize_health(&rows[0], 1);

    assert_eq!(record.id, RecordId::new(DatasetKind::Health, "1"));
    assert_eq!(record.record_type(), RecordType::Health);
    assert_eq!(record.category, "Dengue Cases");
    assert_eq!(record.value, Some(12.0));
    assert_eq!(record.source, "PIDSR");
    // 01/05 is January 5th, never May 1st
    assert_eq!(record.date.parsed(), NaiveDate::from_ymd_opt(2024, 1, 5));
    assert_eq!(record.location.city, "Sample City");
    assert_eq!(record.location.barangay, "Citywide");
}

#[test]
fn test_rows_map_one_to_one_with_lossy_fields() {
    let rows = disease_rows();
    let result = FieldNormalizer::default().normalize_rows(DatasetKind::Health, &rows, "sampledDiseaseDataset.csv");

    assert_eq!(result.records.len(), rows.len());
    assert_eq!(result.stats.rows_seen, 3);
    assert_eq!(result.stats.records_produced, 3);

    let invalid_date = &result.records[1];
    assert!(!invalid_date.date.is_parsed());
    assert_eq!(invalid_date.date.raw(), "13/45/2024");
    assert_eq!(invalid_date.value, None);
    assert_eq!(invalid_date.source, "PIDSR");

    let third = &result.records[2];
    assert_eq!(third.id.key, "3");
    assert_eq!(third.category, "Unknown Disease");
    assert_eq!(third.value, None);
    assert_eq!(third.source, "DOH");

    assert_eq!(result.stats.unparsed_dates, 1);
    assert_eq!(result.stats.non_numeric_values, 1);
    assert_eq!(result.stats.missing_values, 2);
    assert_eq!(result.stats.generated_ids, 1);
}

#[test]
fn test_demographics_are_preserved() {
    let row = RawRow::new(2)
        .with("Disease", "Dengue Cases")
        .with("Cases", 3.0)
        .with("Date", "2024-02-10")
        .with("Barangay", "Matina")
        .with("AgeGroup", "5-14")
        .with("sex", "F");

    let record = FieldNormalizer::default().normalize_health(&row, 1);
    let details = record.details.health().unwrap();
    assert_eq!(details.age_group.as_deref(), Some("5-14"));
    assert_eq!(details.gender.as_deref(), Some("F"));
    assert_eq!(details.severity, None);
    assert_eq!(record.location.barangay, "Matina");
    assert_eq!(
        record.metadata.imported_from.as_deref(),
        Some("sampledDiseaseDataset.csv")
    );
}

#[test]
fn test_manual_kind_yields_nothing() {
    let result = FieldNormalizer::default().normalize_rows(DatasetKind::Manual, &disease_rows(), "x.csv");
    assert!(result.records.is_empty());
}
