//! Tests for input validation order and rules

use super::*;
use crate::app::models::{HealthDetails, LocationInput, RecordDetails, RecordType};
use crate::app::services::record_repository::validate_input;

fn field_of(input: &NewRecord) -> Option<String> {
    validate_input(input)
        .err()
        .and_then(|e| e.field().map(str::to_string))
}

#[test]
fn test_valid_input() {
    let validated = validate_input(&flu_input()).unwrap();
    assert_eq!(validated.record_type, RecordType::Health);
    assert_eq!(validated.location.barangay, "Y");
    assert_eq!(validated.value, 5.0);
    assert_eq!(
        validated.details,
        RecordDetails::Health(HealthDetails::default())
    );
}

#[test]
fn test_first_offending_field_is_named() {
    assert_eq!(field_of(&NewRecord::default()).as_deref(), Some("type"));

    let mut input = flu_input();
    input.location = None;
    input.date = None;
    assert_eq!(field_of(&input).as_deref(), Some("location.city"));

    let mut input = flu_input();
    input.location = Some(LocationInput {
        city: Some("X".to_string()),
        barangay: Some("   ".to_string()),
    });
    assert_eq!(field_of(&input).as_deref(), Some("location.barangay"));

    let mut input = flu_input();
    input.date = Some("".to_string());
    assert_eq!(field_of(&input).as_deref(), Some("date"));

    let mut input = flu_input();
    input.category = None;
    input.value = None;
    assert_eq!(field_of(&input).as_deref(), Some("category"));

    let mut input = flu_input();
    input.value = None;
    assert_eq!(field_of(&input).as_deref(), Some("value"));
}

#[test]
fn test_type_is_case_sensitive() {
    let mut input = flu_input();
    input.record_type = Some("health".to_string());
    assert_eq!(field_of(&input).as_deref(), Some("type"));
}

#[test]
fn test_unparsable_date_is_rejected() {
    let mut input = flu_input();
    input.date = Some("31/12/2024".to_string());
    assert_eq!(field_of(&input).as_deref(), Some("date"));
}

#[test]
fn test_zero_is_a_value_but_nan_is_not() {
    let mut input = flu_input();
    input.value = Some(0.0);
    assert!(validate_input(&input).is_ok());

    input.value = Some(f64::NAN);
    assert_eq!(field_of(&input).as_deref(), Some("value"));
}

#[test]
fn test_details_must_match_type() {
    let input = flu_input().with_details(RecordDetails::Intervention);
    assert_eq!(field_of(&input).as_deref(), Some("details"));
}

#[test]
fn test_blank_optional_text_is_dropped() {
    let validated = validate_input(&flu_input().with_source(" ").with_notes("  follow up ")).unwrap();
    assert_eq!(validated.source, None);
    assert_eq!(validated.notes.as_deref(), Some("follow up"));
}
