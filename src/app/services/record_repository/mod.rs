//! In-memory record repository
//!
//! This module holds the merged record collection and exposes the only
//! mutation and query surface the views use. The repository is an explicit
//! instance owned by the application entry point and passed to consumers.
//!
//! # Architecture
//!
//! - [`repository`] - The [`RecordRepository`] with load, CRUD and query operations
//! - [`validation`] - Required-field and enumerated-type checks for add and update
//! - [`query`] - [`FilterSpec`](crate::app::models::FilterSpec) matching
//! - [`stats`] - Load statistics
//!
//! # Guarantees
//!
//! - `load` replaces the collection wholesale and can be repeated
//! - Failed `add`/`update` calls leave the collection untouched
//! - `query` returns owned copies in insertion order
//!
//! # Usage
//!
//! ```rust
//! use health_climate::app::models::{FilterSpec, LocationInput, NewRecord, RecordType};
//! use health_climate::RecordRepository;
//!
//! # fn example() -> health_climate::Result<()> {
//! let mut repository = RecordRepository::new();
//! let stored = repository.add(NewRecord::new(
//!     "Health",
//!     LocationInput::new("Davao City", "Talomo"),
//!     "2024-01-01",
//!     "Flu",
//!     5.0,
//! ))?;
//!
//! let health = repository.query(&FilterSpec::new().with_type(RecordType::Health));
//! assert_eq!(health[0].id, stored.id);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod query;
pub mod repository;
pub mod stats;
pub mod validation;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use repository::RecordRepository;
pub use stats::LoadStats;
pub use validation::{ValidatedRecord, validate_input};
