//! CSV parser for climate and disease dataset files
//!
//! This module turns raw CSV text into [`RawRow`]s: header-keyed rows of
//! string or numeric cells, ready for field normalization.
//!
//! ## Architecture
//!
//! - [`parser`] - Line splitting, header handling and row assembly
//! - [`tokenizer`] - Character-level field tokenizing with quote handling
//! - [`coercion`] - Permissive numeric literal detection
//! - [`row`] - Raw row and cell value types
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use health_climate::app::services::csv_parser::CsvParser;
//!
//! let rows = CsvParser::default().parse("a,b\n1,\"x,y\"\n");
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].get("a").and_then(|v| v.as_number()), Some(1.0));
//! assert_eq!(rows[0].get("b").map(|v| v.to_text()), Some("x,y".to_string()));
//! ```

pub mod coercion;
pub mod parser;
pub mod row;
pub mod stats;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::{CsvParser, RowLengthPolicy};
pub use row::{FieldValue, RawRow};
pub use stats::{ParseResult, ParseStats};
