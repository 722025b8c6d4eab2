//! Data models for health/climate records
//!
//! This module contains the canonical record structure shared by every
//! service: the merged health and climate datasets, manual entries from the
//! records view, and the filter and input types consumers pass in.

use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod filter;
pub mod input;
pub mod record_date;

pub use filter::{DateRange, FilterSpec, LocationFilter};
pub use input::{LocationInput, NewRecord, RecordPatch};
pub use record_date::{RecordDate, parse_calendar_date};

// =============================================================================
// Record Type and Identity
// =============================================================================

/// Enumerated record variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RecordType {
    Health,
    Climate,
    Intervention,
}

impl RecordType {
    /// All variants in display order
    pub const ALL: [RecordType; 3] = [
        RecordType::Health,
        RecordType::Climate,
        RecordType::Intervention,
    ];

    /// Canonical string form ("Health", "Climate", "Intervention")
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Health => "Health",
            RecordType::Climate => "Climate",
            RecordType::Intervention => "Intervention",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = Error;

    /// Exact, case-sensitive match against the three variants
    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "Health" => Ok(RecordType::Health),
            "Climate" => Ok(RecordType::Climate),
            "Intervention" => Ok(RecordType::Intervention),
            other => Err(Error::validation(
                "type",
                format!(
                    "Invalid record type '{}': must be one of Health, Climate, Intervention",
                    other
                ),
            )),
        }
    }
}

/// Origin of a record, the first half of its composite identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    Climate,
    Health,
    Manual,
}

impl DatasetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKind::Climate => "climate",
            DatasetKind::Health => "health",
            DatasetKind::Manual => "manual",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "climate" => Ok(DatasetKind::Climate),
            "health" => Ok(DatasetKind::Health),
            "manual" => Ok(DatasetKind::Manual),
            other => Err(Error::validation(
                "id",
                format!("Unknown dataset kind '{}'", other),
            )),
        }
    }
}

/// Composite record identity: dataset kind plus the key that kind assigned
///
/// Source datasets assign ids independently, so the bare key is only unique
/// within one kind. Display form is `kind:key`, e.g. `health:17`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId {
    pub kind: DatasetKind,
    pub key: String,
}

impl RecordId {
    pub fn new(kind: DatasetKind, key: impl Into<String>) -> Self {
        Self {
            kind,
            key: key.into(),
        }
    }

    /// Id minted by the repository counter for a manual entry
    pub fn manual(sequence: u64) -> Self {
        Self::new(DatasetKind::Manual, sequence.to_string())
    }

    /// Numeric counter value of a manual id
    pub fn manual_sequence(&self) -> Option<u64> {
        match self.kind {
            DatasetKind::Manual => self.key.parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.key)
    }
}

impl FromStr for RecordId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (kind, key) = s
            .split_once(':')
            .ok_or_else(|| Error::validation("id", format!("Malformed record id '{}'", s)))?;
        if key.is_empty() {
            return Err(Error::validation("id", format!("Malformed record id '{}'", s)));
        }
        Ok(Self::new(kind.parse()?, key))
    }
}

// =============================================================================
// Location
// =============================================================================

/// Denormalized location; both parts are non-empty after normalization
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub barangay: String,
}

impl Location {
    pub fn new(city: impl Into<String>, barangay: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            barangay: barangay.into(),
        }
    }

    /// "Barangay, City" label used by tables and map markers
    pub fn label(&self) -> String {
        format!("{}, {}", self.barangay, self.city)
    }
}

// =============================================================================
// Type-Specific Payloads
// =============================================================================

/// Temperature readings in degrees Celsius
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemperatureMetrics {
    pub average: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub heat_index: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindMetrics {
    pub speed: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RadiationMetrics {
    pub solar: Option<f64>,
    pub uv: Option<f64>,
}

/// Per-metric climate measurements; every reading is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClimateMetrics {
    pub temperature: TemperatureMetrics,
    pub wind: WindMetrics,
    pub humidity: Option<f64>,
    pub radiation: RadiationMetrics,
    pub rainfall: Option<f64>,
    pub soil_moisture: Option<f64>,
    pub soil_temperature: Option<f64>,
    /// Observation time of day as published, if any
    pub time: Option<String>,
}

/// Optional demographic detail carried by disease rows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthDetails {
    pub age_group: Option<String>,
    pub gender: Option<String>,
    pub severity: Option<String>,
}

/// Type-specific payload; the variant determines the record type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum RecordDetails {
    Health(HealthDetails),
    Climate(ClimateMetrics),
    Intervention,
}

impl RecordDetails {
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordDetails::Health(_) => RecordType::Health,
            RecordDetails::Climate(_) => RecordType::Climate,
            RecordDetails::Intervention => RecordType::Intervention,
        }
    }

    /// Empty payload for a record type
    pub fn empty(record_type: RecordType) -> Self {
        match record_type {
            RecordType::Health => RecordDetails::Health(HealthDetails::default()),
            RecordType::Climate => RecordDetails::Climate(ClimateMetrics::default()),
            RecordType::Intervention => RecordDetails::Intervention,
        }
    }

    pub fn climate(&self) -> Option<&ClimateMetrics> {
        match self {
            RecordDetails::Climate(metrics) => Some(metrics),
            _ => None,
        }
    }

    pub fn health(&self) -> Option<&HealthDetails> {
        match self {
            RecordDetails::Health(details) => Some(details),
            _ => None,
        }
    }
}

/// Provenance metadata; additive and never required by the repository
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imported_from: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,

    /// Free-form additions
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RecordMetadata {
    pub fn imported(file_name: impl Into<String>) -> Self {
        Self {
            imported_from: Some(file_name.into()),
            ..Self::default()
        }
    }
}

// =============================================================================
// Numeric Fields
// =============================================================================

/// Numeric fields a record can contribute to aggregation or export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueField {
    /// The record's primary value (case count or measurement)
    Value,
    Temperature,
    TemperatureMin,
    TemperatureMax,
    HeatIndex,
    WindSpeed,
    Humidity,
    SolarRadiation,
    UvRadiation,
    Rainfall,
    SoilMoisture,
    SoilTemperature,
}

impl ValueField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueField::Value => "value",
            ValueField::Temperature => "temperature",
            ValueField::TemperatureMin => "temperature_min",
            ValueField::TemperatureMax => "temperature_max",
            ValueField::HeatIndex => "heat_index",
            ValueField::WindSpeed => "wind_speed",
            ValueField::Humidity => "humidity",
            ValueField::SolarRadiation => "solar_radiation",
            ValueField::UvRadiation => "uv_radiation",
            ValueField::Rainfall => "rainfall",
            ValueField::SoilMoisture => "soil_moisture",
            ValueField::SoilTemperature => "soil_temperature",
        }
    }
}

impl fmt::Display for ValueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Canonical Record
// =============================================================================

/// The unified entity stored by the record repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    pub id: RecordId,
    pub location: Location,
    pub date: RecordDate,
    /// Disease name for health records, metric name for climate records
    pub category: String,
    /// Case count or measurement; `None` when the source had no usable number
    pub value: Option<f64>,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub details: RecordDetails,
    #[serde(default)]
    pub metadata: RecordMetadata,
}

impl CanonicalRecord {
    pub fn record_type(&self) -> RecordType {
        self.details.record_type()
    }

    /// Primary value with missing treated as zero (presentation boundary)
    pub fn value_or_zero(&self) -> f64 {
        self.value.unwrap_or(0.0)
    }

    /// Read one numeric field; climate metrics are `None` on other record types
    pub fn field_value(&self, field: ValueField) -> Option<f64> {
        if field == ValueField::Value {
            return self.value;
        }

        let metrics = self.details.climate()?;
        match field {
            ValueField::Value => self.value,
            ValueField::Temperature => metrics.temperature.average,
            ValueField::TemperatureMin => metrics.temperature.min,
            ValueField::TemperatureMax => metrics.temperature.max,
            ValueField::HeatIndex => metrics.temperature.heat_index,
            ValueField::WindSpeed => metrics.wind.speed,
            ValueField::Humidity => metrics.humidity,
            ValueField::SolarRadiation => metrics.radiation.solar,
            ValueField::UvRadiation => metrics.radiation.uv,
            ValueField::Rainfall => metrics.rainfall,
            ValueField::SoilMoisture => metrics.soil_moisture,
            ValueField::SoilTemperature => metrics.soil_temperature,
        }
    }
}
