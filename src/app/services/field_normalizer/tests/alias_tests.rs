//! Tests for alias resolution

use crate::app::services::csv_parser::{FieldValue, RawRow};
use crate::app::services::field_normalizer::{AliasTable, LogicalField};
use std::collections::HashMap;

#[test]
fn test_lookup_is_case_insensitive() {
    let row = RawRow::new(2).with("BARANGAY", "Talomo").with("RH", 80.0);
    let table = AliasTable::builtin();

    assert_eq!(
        table.lookup(&row, LogicalField::Barangay),
        Some(&FieldValue::Text("Talomo".to_string()))
    );
    assert_eq!(
        table.lookup(&row, LogicalField::Humidity),
        Some(&FieldValue::Number(80.0))
    );
}

#[test]
fn test_first_non_empty_alias_wins() {
    // `tave` outranks `temperature`, but an empty cell falls through
    let row = RawRow::new(2).with("tave", "").with("temperature", 29.0);
    let table = AliasTable::builtin();
    assert_eq!(
        table.lookup(&row, LogicalField::Temperature),
        Some(&FieldValue::Number(29.0))
    );

    let row = RawRow::new(2).with("temperature", 29.0).with("tave", 27.0);
    assert_eq!(
        table.lookup(&row, LogicalField::Temperature),
        Some(&FieldValue::Number(27.0))
    );
}

#[test]
fn test_missing_field_is_none() {
    let row = RawRow::new(2).with("unrelated", "x");
    assert!(AliasTable::builtin().lookup(&row, LogicalField::City).is_none());
}

#[test]
fn test_extra_aliases_extend_builtin_list() {
    let mut extras = HashMap::new();
    extras.insert("barangay".to_string(), vec!["brgy".to_string()]);
    extras.insert("no_such_field".to_string(), vec!["x".to_string()]);

    let table = AliasTable::with_extras(&extras);
    let barangay = table.aliases(LogicalField::Barangay);
    assert_eq!(barangay.last().map(String::as_str), Some("brgy"));
    assert_eq!(barangay[0], "Barangay");

    let row = RawRow::new(2).with("Brgy", "Matina");
    assert_eq!(
        table.lookup(&row, LogicalField::Barangay).map(|v| v.to_text()),
        Some("Matina".to_string())
    );
}

#[test]
fn test_resolve_column_reports_header_name() {
    let headers = vec!["uuid".to_string(), "RH".to_string()];
    let table = AliasTable::builtin();
    assert_eq!(table.resolve_column(&headers, LogicalField::Humidity), Some("RH"));
    assert_eq!(table.resolve_column(&headers, LogicalField::Id), Some("uuid"));
    assert_eq!(table.resolve_column(&headers, LogicalField::Rainfall), None);
}

#[test]
fn test_logical_field_names_round_trip() {
    for field in LogicalField::ALL {
        assert_eq!(field.as_str().parse::<LogicalField>().unwrap(), field);
    }
    assert!("Soil_Moisture".parse::<LogicalField>().is_ok());
}
