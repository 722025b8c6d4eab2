//! Untrusted record input from the records view
//!
//! Form and JSON payloads arrive with every field optional and the record type
//! as free text. The repository validates these before anything is stored.

use super::RecordDetails;
use serde::{Deserialize, Deserializer, Serialize};

/// Location as entered; either part may be missing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationInput {
    pub city: Option<String>,
    pub barangay: Option<String>,
}

impl LocationInput {
    pub fn new(city: impl Into<String>, barangay: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            barangay: Some(barangay.into()),
        }
    }
}

/// Payload for `RecordRepository::add`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewRecord {
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    pub location: Option<LocationInput>,
    pub date: Option<String>,
    pub category: Option<String>,
    pub value: Option<f64>,
    pub source: Option<String>,
    pub notes: Option<String>,
    pub details: Option<RecordDetails>,
}

impl NewRecord {
    /// Input with every required field populated
    pub fn new(
        record_type: impl Into<String>,
        location: LocationInput,
        date: impl Into<String>,
        category: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            record_type: Some(record_type.into()),
            location: Some(location),
            date: Some(date.into()),
            category: Some(category.into()),
            value: Some(value),
            ..Self::default()
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_details(mut self, details: RecordDetails) -> Self {
        self.details = Some(details);
        self
    }
}

/// Shallow patch for `RecordRepository::update`
///
/// Populated top-level fields replace the stored ones wholesale (a patched
/// `location` replaces both city and barangay); unset fields are preserved.
/// `notes` is the one clearable field: `Some(None)`, or JSON `null`, removes
/// the stored notes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordPatch {
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    pub location: Option<LocationInput>,
    pub date: Option<String>,
    pub category: Option<String>,
    pub value: Option<f64>,
    pub source: Option<String>,
    #[serde(
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<Option<String>>,
    pub details: Option<RecordDetails>,
}

/// An absent key stays `None` via `#[serde(default)]`; a present key,
/// `null` included, becomes `Some`
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl RecordPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_type(mut self, record_type: impl Into<String>) -> Self {
        self.record_type = Some(record_type.into());
        self
    }

    pub fn location(mut self, location: LocationInput) -> Self {
        self.location = Some(location);
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(Some(notes.into()));
        self
    }

    pub fn clear_notes(mut self) -> Self {
        self.notes = Some(None);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
