//! Test utilities and fixtures for record repository testing

use crate::app::models::{
    CanonicalRecord, ClimateMetrics, DatasetKind, HealthDetails, Location, LocationInput,
    NewRecord, RecordDate, RecordDetails, RecordId, RecordMetadata, TemperatureMetrics,
};

mod validation_tests;

/// Imported health record
pub fn health_record(key: &str, barangay: &str, date: &str, disease: &str, cases: f64) -> CanonicalRecord {
    CanonicalRecord {
        id: RecordId::new(DatasetKind::Health, key),
        location: Location::new("Davao City", barangay),
        date: RecordDate::parse(date),
        category: disease.to_string(),
        value: Some(cases),
        source: "PIDSR".to_string(),
        notes: None,
        details: RecordDetails::Health(HealthDetails::default()),
        metadata: RecordMetadata::imported("sampledDiseaseDataset.csv"),
    }
}

/// Imported climate temperature record
pub fn climate_record(key: &str, barangay: &str, date: &str, temperature: f64) -> CanonicalRecord {
    CanonicalRecord {
        id: RecordId::new(DatasetKind::Climate, key),
        location: Location::new("Davao City", barangay),
        date: RecordDate::parse(date),
        category: "Temperature (°C)".to_string(),
        value: Some(temperature),
        source: "Weather Station".to_string(),
        notes: None,
        details: RecordDetails::Climate(ClimateMetrics {
            temperature: TemperatureMetrics {
                average: Some(temperature),
                ..TemperatureMetrics::default()
            },
            ..ClimateMetrics::default()
        }),
        metadata: RecordMetadata::imported("sampledDataset.csv"),
    }
}

/// Mixed collection; health and climate ids deliberately share key "1"
pub fn sample_records() -> Vec<CanonicalRecord> {
    vec![
        climate_record("1", "Poblacion", "2024-01-05", 28.4),
        health_record("1", "Talomo", "01/05/2024", "Dengue Cases", 12.0),
        health_record("2", "Poblacion", "2024-02-03", "Respiratory Cases", 7.0),
        climate_record("2", "Talomo", "2024-02-03", 30.1),
        health_record("3", "Buhangin", "not recorded", "Dengue Cases", 4.0),
    ]
}

/// Valid manual health input
pub fn flu_input() -> NewRecord {
    NewRecord::new(
        "Health",
        LocationInput::new("X", "Y"),
        "2024-01-01",
        "Flu",
        5.0,
    )
}
