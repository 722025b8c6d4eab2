//! Raw row and cell value types
//!
//! A [`RawRow`] maps header names (case as found in the file) to cell values
//! in header order. Rows are ephemeral: the field normalizer consumes them
//! immediately after parsing.

use serde::Serialize;
use std::fmt;

/// A single CSV cell after numeric coercion
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Numeric value of a coerced cell
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(_) => None,
        }
    }

    /// Text of an uncoerced cell
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Number(_) => None,
            FieldValue::Text(s) => Some(s),
        }
    }

    /// Number from either form; text must be a numeric literal
    pub fn to_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) => super::coercion::coerce_number(s.trim()),
        }
    }

    /// Cell rendered as text; numbers use their shortest decimal form
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// True for an empty text cell
    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s.is_empty())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

/// Header-keyed row of cells
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawRow {
    columns: Vec<String>,
    values: Vec<FieldValue>,
    /// 1-based line number in the source text
    line_number: usize,
}

impl RawRow {
    pub fn new(line_number: usize) -> Self {
        Self {
            line_number,
            ..Self::default()
        }
    }

    /// Set a column; a repeated header name replaces the earlier value
    pub fn insert(&mut self, column: impl Into<String>, value: FieldValue) {
        let column = column.into();
        match self.columns.iter().position(|c| *c == column) {
            Some(index) => self.values[index] = value,
            None => {
                self.columns.push(column);
                self.values.push(value);
            }
        }
    }

    /// Builder form of [`RawRow::insert`]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(column, value.into());
        self
    }

    /// Exact-case lookup
    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|index| &self.values[index])
    }

    /// Exact-case lookup first, then the first case-insensitive match
    pub fn get_ignore_case(&self, column: &str) -> Option<&FieldValue> {
        self.get(column).or_else(|| {
            self.columns
                .iter()
                .position(|c| c.eq_ignore_ascii_case(column))
                .map(|index| &self.values[index])
        })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }
}
