//! Core CSV parser implementation
//!
//! This module splits input text into lines, reads the header, and assembles
//! header-keyed rows from tokenized lines with numeric coercion.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::coercion::coerce_number;
use super::row::{FieldValue, RawRow};
use super::stats::{ParseResult, ParseStats};
use super::tokenizer::{Token, tokenize_line};
use crate::{Error, Result};

/// How rows whose field count differs from the header are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowLengthPolicy {
    /// Missing trailing fields read as empty text, extra fields are dropped
    #[default]
    Lenient,
    /// Any mismatch fails the parse with the offending line number
    Strict,
}

/// CSV parser for dataset files
///
/// This parser focuses on the dataset shapes the dashboard ingests:
/// - Blank lines anywhere are ignored
/// - The first non-blank line is the header
/// - Quoted fields may contain commas and doubled quotes
/// - Unquoted numeric literals become numbers
#[derive(Debug, Clone, Default)]
pub struct CsvParser {
    row_length_policy: RowLengthPolicy,
}

impl CsvParser {
    /// Create a parser with an explicit row-length policy
    pub fn new(row_length_policy: RowLengthPolicy) -> Self {
        Self { row_length_policy }
    }

    /// Parser that rejects rows whose length differs from the header
    pub fn strict() -> Self {
        Self::new(RowLengthPolicy::Strict)
    }

    pub fn row_length_policy(&self) -> RowLengthPolicy {
        self.row_length_policy
    }

    /// Parse CSV text, degrading to an empty sequence on failure
    pub fn parse(&self, text: &str) -> Vec<RawRow> {
        self.parse_named("<input>", text)
    }

    /// Parse CSV text from a named source, degrading to an empty sequence on failure
    pub fn parse_named(&self, source_name: &str, text: &str) -> Vec<RawRow> {
        match self.try_parse(source_name, text) {
            Ok(result) => result.rows,
            Err(e) => {
                warn!("Discarding CSV input: {}", e);
                Vec::new()
            }
        }
    }

    /// Parse CSV text and return rows with statistics
    ///
    /// Fails when the input has no header line, or under the strict policy
    /// when a row's field count differs from the header.
    pub fn try_parse(&self, source_name: &str, text: &str) -> Result<ParseResult> {
        let mut stats = ParseStats::new();
        let mut headers: Option<Vec<String>> = None;
        let mut rows = Vec::new();

        for (index, line) in text.split('\n').enumerate() {
            let line_number = index + 1;
            let line = line.strip_suffix('\r').unwrap_or(line);
            stats.total_lines += 1;

            if line.trim().is_empty() {
                stats.blank_lines_skipped += 1;
                continue;
            }

            let tokens = tokenize_line(line);
            match &headers {
                None => {
                    let names: Vec<String> = tokens.into_iter().map(|t| t.text).collect();
                    debug!("Header for '{}': {:?}", source_name, names);
                    headers = Some(names);
                }
                Some(names) => {
                    let row = self.build_row(source_name, names, tokens, line_number, &mut stats)?;
                    rows.push(row);
                    stats.rows_parsed += 1;
                }
            }
        }

        let headers = headers
            .ok_or_else(|| Error::csv_parse(source_name, "input has no header line"))?;

        debug!("Parsed '{}': {}", source_name, stats.summary());

        Ok(ParseResult {
            headers,
            rows,
            stats,
        })
    }

    /// Assemble one row, looking fields up by header index
    fn build_row(
        &self,
        source_name: &str,
        headers: &[String],
        tokens: Vec<Token>,
        line_number: usize,
        stats: &mut ParseStats,
    ) -> Result<RawRow> {
        if tokens.len() != headers.len() {
            if self.row_length_policy == RowLengthPolicy::Strict {
                return Err(Error::csv_parse(
                    source_name,
                    format!(
                        "line {}: expected {} fields, found {}",
                        line_number,
                        headers.len(),
                        tokens.len()
                    ),
                ));
            }

            if tokens.len() < headers.len() {
                stats.short_rows += 1;
            } else {
                stats.long_rows += 1;
            }
            debug!(
                "Line {} of '{}' has {} fields for {} headers",
                line_number,
                source_name,
                tokens.len(),
                headers.len()
            );
        }

        let mut row = RawRow::new(line_number);
        let mut tokens = tokens.into_iter();
        for header in headers {
            let value = match tokens.next() {
                Some(token) => coerce_token(token, stats),
                None => FieldValue::Text(String::new()),
            };
            row.insert(header.clone(), value);
        }

        Ok(row)
    }
}

/// Quoted cells always stay text; unquoted numeric literals become numbers
fn coerce_token(token: Token, stats: &mut ParseStats) -> FieldValue {
    if !token.quoted {
        if let Some(number) = coerce_number(&token.text) {
            stats.numeric_fields += 1;
            return FieldValue::Number(number);
        }
    }
    FieldValue::Text(token.text)
}
