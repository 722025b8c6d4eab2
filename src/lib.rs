//! Health/Climate Correlation Core
//!
//! A Rust library for ingesting regional health-incident and climate
//! measurement datasets from CSV, merging them into one record collection,
//! and preparing filtered, aggregated and exported views of that collection.
//!
//! This library provides tools for:
//! - Tokenizing CSV text with quoted fields and escaped quotes
//! - Normalizing heterogeneous climate and disease column names to one record schema
//! - Holding the merged collection with validated CRUD and filter queries
//! - Grouping records into daily, weekly, monthly, category and location buckets
//! - Exporting filtered subsets back to spreadsheet-friendly CSV reports

pub mod config;
pub mod constants;
pub mod logging;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregation;
        pub mod csv_exporter;
        pub mod csv_parser;
        pub mod dataset_loader;
        pub mod field_normalizer;
        pub mod record_repository;
    }
}

// Re-export commonly used types
pub use app::models::{CanonicalRecord, FilterSpec, Location, RecordDate, RecordId, RecordType};
pub use app::services::record_repository::RecordRepository;
pub use config::Config;

/// Result type alias for the health/climate core
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for ingestion, repository and export operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV input could not be parsed
    #[error("CSV parse error in '{source_name}': {message}")]
    CsvParse {
        source_name: String,
        message: String,
    },

    /// A record failed required-field or enumerated-type checks
    #[error("Validation error on field '{field}': {message}")]
    Validation { field: String, message: String },

    /// Update or delete referenced an unknown record
    #[error("Record not found: {id}")]
    NotFound { id: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A required dataset could not be loaded
    #[error("Dataset load error for '{source_name}': {message}")]
    DatasetLoad {
        source_name: String,
        message: String,
    },

    /// A report request matched no records
    #[error("No records match the report criteria: {message}")]
    EmptyReport { message: String },

    /// JSON (de)serialization failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parse error
    pub fn csv_parse(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CsvParse {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Create a validation error naming the offending field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        Self::NotFound { id: id.to_string() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a dataset load error
    pub fn dataset_load(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DatasetLoad {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Create an empty report error
    pub fn empty_report(message: impl Into<String>) -> Self {
        Self::EmptyReport {
            message: message.into(),
        }
    }

    /// Name of the offending field for validation errors
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }

    /// True for errors the UI layer should show as a message and leave state unchanged
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::NotFound { .. } | Self::EmptyReport { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            message: format!("Invalid TOML configuration: {}", error),
        }
    }
}

impl From<glob::PatternError> for Error {
    fn from(error: glob::PatternError) -> Self {
        Self::Configuration {
            message: format!("Invalid dataset pattern: {}", error),
        }
    }
}
