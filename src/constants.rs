//! Application constants for the health/climate core
//!
//! This module contains default values, column alias tables, severity
//! weights and export layouts used throughout the library.

// =============================================================================
// Dataset Defaults
// =============================================================================

/// Default climate (weather station) dataset file
pub const DEFAULT_CLIMATE_DATASET: &str = "sampledDataset.csv";

/// Default disease (health) dataset file
pub const DEFAULT_HEALTH_DATASET: &str = "sampledDiseaseDataset.csv";

/// Default directory the static datasets are served from
pub const DEFAULT_DATA_DIR: &str = "public";

/// Location and provenance defaults applied during normalization
pub mod defaults {
    /// Fallback city for climate rows without a city column
    pub const CLIMATE_CITY: &str = "Davao City";

    /// Fallback city for disease rows without a city column
    pub const HEALTH_CITY: &str = "Sample City";

    /// Fallback barangay for climate rows
    pub const CLIMATE_BARANGAY: &str = "Unknown";

    /// Fallback barangay for disease rows (dataset is city-level)
    pub const HEALTH_BARANGAY: &str = "Citywide";

    /// Source tag for climate rows without a source column
    pub const CLIMATE_SOURCE: &str = "Weather Station";

    /// Source tag for disease rows without a source column
    pub const HEALTH_SOURCE: &str = "PIDSR";

    /// Category for climate rows that do not name a metric
    pub const CLIMATE_CATEGORY: &str = "Temperature (°C)";

    /// Category for disease rows that do not name a disease
    pub const HEALTH_CATEGORY: &str = "Unknown Disease";

    /// Source tag for records entered through the records view
    pub const MANUAL_SOURCE: &str = "Manual Entry";
}

// =============================================================================
// Column Alias Table
// =============================================================================

/// Logical field names and the source columns that feed them, in priority order
///
/// Lookups are case-insensitive; the first alias holding a non-empty value wins.
/// The lists track the column names published by the external datasets.
pub mod aliases {
    pub const ID: &[&str] = &["uuid", "id", "record_id"];
    pub const CITY: &[&str] = &["City", "municipality"];
    pub const BARANGAY: &[&str] = &["Barangay", "location"];
    pub const DATE: &[&str] = &["date", "observation_date", "report_date"];
    pub const TIME: &[&str] = &["time"];
    pub const SOURCE: &[&str] = &["Source"];
    pub const NOTES: &[&str] = &["notes", "remarks"];

    // Climate metrics
    pub const CATEGORY: &[&str] = &["category", "metric"];
    pub const VALUE: &[&str] = &["value"];
    pub const TEMPERATURE: &[&str] = &["tave", "temperature", "temp", "t_ave"];
    pub const TEMPERATURE_MIN: &[&str] = &["tmin", "temperature_min", "min_temp"];
    pub const TEMPERATURE_MAX: &[&str] = &["tmax", "temperature_max", "max_temp"];
    pub const HEAT_INDEX: &[&str] = &["heat_index", "heatindex"];
    pub const WIND_SPEED: &[&str] = &["wind_speed", "windspeed", "wind"];
    pub const HUMIDITY: &[&str] = &["rh", "humidity", "relative_humidity"];
    pub const SOLAR_RADIATION: &[&str] = &["solar_rad", "solar_radiation"];
    pub const UV_RADIATION: &[&str] = &["uv_rad", "uv_radiation", "uv"];
    pub const RAINFALL: &[&str] = &["rainfall", "rain", "precipitation"];
    pub const SOIL_MOISTURE: &[&str] = &["soil_moisture"];
    pub const SOIL_TEMPERATURE: &[&str] = &["soil_temperature", "soil_temp"];

    // Disease dataset
    pub const DISEASE: &[&str] = &["Disease", "category", "illness"];
    pub const CASES: &[&str] = &["Cases", "value", "count"];
    pub const AGE_GROUP: &[&str] = &["ageGroup", "age_group", "AgeGroup"];
    pub const GENDER: &[&str] = &["gender", "sex"];
    pub const SEVERITY: &[&str] = &["severity"];
}

// =============================================================================
// Risk Scoring
// =============================================================================

/// Disease severity weights used by the barangay risk index
pub mod severity {
    /// Weight applied to diseases not listed below
    pub const DEFAULT_HEALTH_WEIGHT: f64 = 0.5;

    /// Per-disease weights keyed by category name
    pub const HEALTH_WEIGHTS: &[(&str, f64)] = &[
        ("Dengue Cases", 0.8),
        ("Respiratory Cases", 0.6),
        ("Gastroenteritis Cases", 0.5),
        ("Leptospirosis Cases", 0.7),
    ];

    /// Severity for climate categories without thresholds
    pub const DEFAULT_CLIMATE_SEVERITY: f64 = 0.5;

    /// Risk index at or above which a barangay is high risk
    pub const HIGH_RISK_THRESHOLD: f64 = 0.7;

    /// Risk index at or above which a barangay is moderate risk
    pub const MODERATE_RISK_THRESHOLD: f64 = 0.4;
}

/// Climate categories with threshold-based severity
pub mod climate_categories {
    pub const RAINFALL: &str = "Rainfall (mm)";
    pub const TEMPERATURE: &str = "Temperature (°C)";
    pub const HUMIDITY: &str = "Humidity (%)";
    pub const FLOOD_LEVEL: &str = "Flood Level (cm)";
}

// =============================================================================
// Export
// =============================================================================

/// Line separator for exported CSV (spreadsheet compatible)
pub const CSV_LINE_SEPARATOR: &str = "\r\n";

/// File name prefix for reports exported without a signed-in user
pub const PUBLIC_REPORT_PREFIX: &str = "public_";

/// File name stem for exported reports
pub const REPORT_FILE_STEM: &str = "health_climate_report";

/// Source label substituted into public reports
pub const PUBLIC_SOURCE_LABEL: &str = "Official Health Department Data";

/// Notes placeholder substituted into public reports
pub const PUBLIC_NOTES_PLACEHOLDER: &str = "Available to authorized personnel only";

// =============================================================================
// Dashboard
// =============================================================================

/// Default look-back window for "recent records" in days
pub const DEFAULT_RECENT_DAYS: u32 = 30;

/// Environment variable overriding the dataset directory
pub const ENV_DATA_DIR: &str = "HEALTH_CLIMATE_DATA_DIR";

/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "HEALTH_CLIMATE_LOG";
