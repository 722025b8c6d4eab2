//! Test utilities and fixtures for aggregation testing

use crate::app::models::{
    CanonicalRecord, ClimateMetrics, DatasetKind, HealthDetails, Location, RecordDate,
    RecordDetails, RecordId, RecordMetadata, TemperatureMetrics,
};

mod engine_tests;
mod risk_tests;

pub fn health(key: &str, barangay: &str, date: &str, disease: &str, cases: Option<f64>) -> CanonicalRecord {
    CanonicalRecord {
        id: RecordId::new(DatasetKind::Health, key),
        location: Location::new("Davao City", barangay),
        date: RecordDate::parse(date),
        category: disease.to_string(),
        value: cases,
        source: "PIDSR".to_string(),
        notes: None,
        details: RecordDetails::Health(HealthDetails::default()),
        metadata: RecordMetadata::default(),
    }
}

/// Climate reading with temperature as the primary value
pub fn reading(
    key: &str,
    barangay: &str,
    date: &str,
    temperature: Option<f64>,
    humidity: Option<f64>,
    rainfall: Option<f64>,
) -> CanonicalRecord {
    CanonicalRecord {
        id: RecordId::new(DatasetKind::Climate, key),
        location: Location::new("Davao City", barangay),
        date: RecordDate::parse(date),
        category: "Temperature (°C)".to_string(),
        value: temperature,
        source: "Weather Station".to_string(),
        notes: None,
        details: RecordDetails::Climate(ClimateMetrics {
            temperature: TemperatureMetrics {
                average: temperature,
                ..TemperatureMetrics::default()
            },
            humidity,
            rainfall,
            ..ClimateMetrics::default()
        }),
        metadata: RecordMetadata::default(),
    }
}

/// Climate record with a named metric category
pub fn metric(key: &str, barangay: &str, date: &str, category: &str, value: f64) -> CanonicalRecord {
    let mut record = reading(key, barangay, date, None, None, None);
    record.category = category.to_string();
    record.value = Some(value);
    record
}

pub fn sample_health() -> Vec<CanonicalRecord> {
    vec![
        health("1", "Talomo", "01/05/2024", "Dengue Cases", Some(12.0)),
        health("2", "Poblacion", "2024-01-05", "Respiratory Cases", Some(7.0)),
        health("3", "Talomo", "01/20/2024", "Dengue Cases", Some(3.0)),
        health("4", "Talomo", "02/03/2024", "Respiratory Cases", None),
        health("5", "Poblacion", "12/30/2023", "Dengue Cases", Some(5.0)),
    ]
}

pub fn sample_climate() -> Vec<CanonicalRecord> {
    vec![
        reading("1", "Talomo", "2024-01-05", Some(28.0), Some(80.0), Some(10.0)),
        reading("2", "Talomo", "2024-01-05", Some(30.0), None, Some(5.5)),
        reading("3", "Talomo", "2024-02-03", Some(26.0), Some(90.0), None),
        reading("4", "Poblacion", "2024-01-29", Some(31.0), Some(70.0), Some(40.0)),
    ]
}
