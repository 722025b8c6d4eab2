//! Filter matching for repository queries

use crate::app::models::{CanonicalRecord, FilterSpec};

impl FilterSpec {
    /// True when `record` satisfies every populated field
    ///
    /// An active date range excludes records whose date did not parse.
    pub fn matches(&self, record: &CanonicalRecord) -> bool {
        if self
            .record_type
            .is_some_and(|record_type| record.record_type() != record_type)
        {
            return false;
        }

        if let Some(range) = self.date_range.filter(|range| !range.is_open()) {
            match record.date.parsed() {
                Some(date) if range.contains(date) => {}
                _ => return false,
            }
        }

        if let Some(location) = &self.location {
            if location
                .city
                .as_ref()
                .is_some_and(|city| *city != record.location.city)
            {
                return false;
            }
            if location
                .barangay
                .as_ref()
                .is_some_and(|barangay| *barangay != record.location.barangay)
            {
                return false;
            }
        }

        if self
            .category
            .as_ref()
            .is_some_and(|category| *category != record.category)
        {
            return false;
        }

        match self.search.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => matches_search(record, &needle.to_lowercase()),
            _ => true,
        }
    }
}

/// Case-insensitive substring test over the searchable text of a record
fn matches_search(record: &CanonicalRecord, needle: &str) -> bool {
    let value = record.value.map(|v| v.to_string());
    [
        Some(record.record_type().as_str()),
        Some(record.category.as_str()),
        Some(record.location.barangay.as_str()),
        Some(record.location.city.as_str()),
        Some(record.source.as_str()),
        record.notes.as_deref(),
        value.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|text| text.to_lowercase().contains(needle))
}
