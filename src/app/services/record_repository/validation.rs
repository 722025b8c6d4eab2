//! Record input validation
//!
//! Checks run in a fixed order and stop at the first failure, so the error
//! always names the first offending field: `type`, `location.city`,
//! `location.barangay`, `date`, `category`, `value`, then `details`.

use crate::app::models::{
    CanonicalRecord, Location, LocationInput, NewRecord, RecordDate, RecordDetails, RecordPatch,
    RecordType,
};
use crate::{Error, Result};

/// Input that passed every check
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRecord {
    pub record_type: RecordType,
    pub location: Location,
    pub date: RecordDate,
    pub category: String,
    pub value: f64,
    pub source: Option<String>,
    pub notes: Option<String>,
    pub details: RecordDetails,
}

/// Validate a new or merged record
pub fn validate_input(input: &NewRecord) -> Result<ValidatedRecord> {
    let type_text = required_text(input.record_type.as_deref(), "type")?;
    let record_type: RecordType = type_text.parse()?;

    let location = input.location.as_ref();
    let city = required_text(location.and_then(|l| l.city.as_deref()), "location.city")?;
    let barangay = required_text(
        location.and_then(|l| l.barangay.as_deref()),
        "location.barangay",
    )?;

    let date_text = required_text(input.date.as_deref(), "date")?;
    let date = RecordDate::parse(date_text);
    if !date.is_parsed() {
        return Err(Error::validation(
            "date",
            format!("Unrecognised date '{}': use YYYY-MM-DD or MM/DD/YYYY", date_text),
        ));
    }

    let category = required_text(input.category.as_deref(), "category")?;

    let value = input
        .value
        .ok_or_else(|| Error::validation("value", "value is required"))?;
    if !value.is_finite() {
        return Err(Error::validation("value", "value must be a finite number"));
    }

    let details = match &input.details {
        Some(details) if details.record_type() != record_type => {
            return Err(Error::validation(
                "details",
                format!(
                    "{} details cannot be attached to a {} record",
                    details.record_type(),
                    record_type
                ),
            ));
        }
        Some(details) => details.clone(),
        None => RecordDetails::empty(record_type),
    };

    Ok(ValidatedRecord {
        record_type,
        location: Location::new(city, barangay),
        date,
        category: category.to_string(),
        value,
        source: optional_text(input.source.as_deref()),
        notes: optional_text(input.notes.as_deref()),
        details,
    })
}

/// Input form of a stored record, used as the base of an update
pub fn draft_from_record(record: &CanonicalRecord) -> NewRecord {
    NewRecord {
        record_type: Some(record.record_type().to_string()),
        location: Some(LocationInput::new(
            record.location.city.clone(),
            record.location.barangay.clone(),
        )),
        date: Some(record.date.raw().to_string()),
        category: Some(record.category.clone()),
        value: record.value,
        source: Some(record.source.clone()),
        notes: record.notes.clone(),
        details: Some(record.details.clone()),
    }
}

/// Shallow merge: populated patch fields replace the draft's
///
/// A type change without new details resets the payload to the empty
/// payload of the new type.
pub fn apply_patch(draft: &mut NewRecord, patch: &RecordPatch) {
    if let Some(record_type) = &patch.record_type {
        if draft.record_type.as_deref() != Some(record_type.trim()) && patch.details.is_none() {
            draft.details = None;
        }
        draft.record_type = Some(record_type.clone());
    }
    if let Some(location) = &patch.location {
        draft.location = Some(location.clone());
    }
    if let Some(date) = &patch.date {
        draft.date = Some(date.clone());
    }
    if let Some(category) = &patch.category {
        draft.category = Some(category.clone());
    }
    if let Some(value) = patch.value {
        draft.value = Some(value);
    }
    if let Some(source) = &patch.source {
        draft.source = Some(source.clone());
    }
    if let Some(notes) = &patch.notes {
        draft.notes = notes.clone();
    }
    if let Some(details) = &patch.details {
        draft.details = Some(details.clone());
    }
}

fn required_text<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(Error::validation(field, format!("{} is required", field))),
    }
}

fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
