//! Test utilities and fixtures for CSV exporter testing

use crate::app::models::{
    CanonicalRecord, DatasetKind, HealthDetails, Location, RecordDate, RecordDetails, RecordId,
    RecordMetadata,
};
use chrono::{TimeZone, Utc};


pub fn record(key: &str, barangay: &str, date: &str, value: Option<f64>) -> CanonicalRecord {
    CanonicalRecord {
        id: RecordId::new(DatasetKind::Health, key),
        location: Location::new("Davao City", barangay),
        date: RecordDate::parse(date),
        category: "Dengue Cases".to_string(),
        value,
        source: "PIDSR".to_string(),
        notes: None,
        details: RecordDetails::Health(HealthDetails::default()),
        metadata: RecordMetadata {
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).single(),
            ..RecordMetadata::default()
        },
    }
}
