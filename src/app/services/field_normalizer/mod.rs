//! Field normalization for heterogeneous dataset rows
//!
//! This module maps parsed CSV rows from the climate and disease datasets onto
//! the canonical record schema. Source column names vary between publishers
//! and releases, so every logical field is read through an alias table that
//! tries several column names case-insensitively in a fixed priority order.
//!
//! # Architecture
//!
//! - [`aliases`] - Logical field names and the alias table (built-in plus configured extras)
//! - [`field_parsers`] - Optional text/number readers with lossy-coercion logging
//! - [`climate`] - Weather-station and alternate climate schema mapping
//! - [`health`] - Disease dataset mapping
//! - [`normalizer`] - The [`FieldNormalizer`] entry point
//! - [`stats`] - Normalization statistics and result structures
//!
//! # Coercion Policy
//!
//! Normalization never fails on a malformed cell. Non-numeric values in
//! numeric fields become `None`, unparsable dates are kept as raw text and
//! flagged unparsed, and missing locations fall back to configured defaults.
//! Each input row produces exactly one record.
//!
//! # Usage
//!
//! ```rust
//! use health_climate::app::services::csv_parser::CsvParser;
//! use health_climate::app::services::field_normalizer::FieldNormalizer;
//! use health_climate::app::models::DatasetKind;
//!
//! let rows = CsvParser::default().parse("Id,Date,Disease,Cases\n1,01/05/2024,Dengue Cases,12\n");
//! let result = FieldNormalizer::default().normalize_rows(DatasetKind::Health, &rows, "disease.csv");
//!
//! assert_eq!(result.records.len(), 1);
//! assert_eq!(result.records[0].location.barangay, "Citywide");
//! ```

pub mod aliases;
pub mod climate;
pub mod field_parsers;
pub mod health;
pub mod normalizer;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use aliases::{AliasTable, LogicalField};
pub use normalizer::FieldNormalizer;
pub use stats::{NormalizeResult, NormalizeStats};
