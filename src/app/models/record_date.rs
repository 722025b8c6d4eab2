//! Record dates with positional calendar parsing
//!
//! Source datasets mix ISO `YYYY-MM-DD` and US-style `MM/DD/YYYY` dates in the
//! same field. The original text is kept for display and daily bucketing while
//! the calendar date is parsed once, positionally, at ingestion. Text that is
//! neither form stays unparsed instead of being guessed at.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A date as published by the source plus its parsed calendar day
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct RecordDate {
    raw: String,
    parsed: Option<NaiveDate>,
}

impl RecordDate {
    /// Keep `raw` and parse it with [`parse_calendar_date`]
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into().trim().to_string();
        let parsed = parse_calendar_date(&raw);
        Self { raw, parsed }
    }

    /// Date entered as a calendar value; raw text is its ISO form
    pub fn from_naive(date: NaiveDate) -> Self {
        Self {
            raw: date.format("%Y-%m-%d").to_string(),
            parsed: Some(date),
        }
    }

    /// Original text
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Parsed calendar date, `None` when the text was not a recognised form
    pub fn parsed(&self) -> Option<NaiveDate> {
        self.parsed
    }

    pub fn is_parsed(&self) -> bool {
        self.parsed.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// `YYYY-MM-DD` rendering of the parsed date
    pub fn iso(&self) -> Option<String> {
        self.parsed.map(|d| d.format("%Y-%m-%d").to_string())
    }

    /// Chronological order; unparsed dates sort after every parsed date
    pub fn chronological_cmp(&self, other: &Self) -> Ordering {
        match (self.parsed, other.parsed) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    /// Calendar year, when parsed
    pub fn year(&self) -> Option<i32> {
        self.parsed.map(|d| d.year())
    }
}

impl fmt::Display for RecordDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<String> for RecordDate {
    fn from(raw: String) -> Self {
        Self::parse(raw)
    }
}

impl From<&str> for RecordDate {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<RecordDate> for String {
    fn from(date: RecordDate) -> Self {
        date.raw
    }
}

impl From<NaiveDate> for RecordDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_naive(date)
    }
}

/// Parse `YYYY-MM-DD` (time suffix after `T` or a space ignored) or `MM/DD/YYYY`
///
/// Slash dates are read positionally as month, day, year. Two-digit years,
/// out-of-range components and any other layout return `None`.
pub fn parse_calendar_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if text.contains('/') {
        let parts: Vec<&str> = text.split('/').collect();
        let [month, day, year] = parts.as_slice() else {
            return None;
        };
        return build_date(year, month, day);
    }

    let date_part = text
        .split(['T', ' '])
        .next()
        .unwrap_or(text);
    let parts: Vec<&str> = date_part.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return None;
    };
    build_date(year, month, day)
}

fn build_date(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let year = year.trim();
    if year.len() != 4 {
        return None;
    }
    let year: i32 = parse_component(year)?;
    let month: u32 = parse_component(month.trim())?;
    let day: u32 = parse_component(day.trim())?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_component<T: std::str::FromStr>(part: &str) -> Option<T> {
    if part.is_empty() || part.len() > 4 || !part.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_date() {
        assert_eq!(
            parse_calendar_date("2024-01-05"),
            NaiveDate::from_ymd_opt(2024, 1, 5)
        );
    }

    #[test]
    fn test_iso_datetime_suffix_ignored() {
        assert_eq!(
            parse_calendar_date("2024-03-09T14:30:00Z"),
            NaiveDate::from_ymd_opt(2024, 3, 9)
        );
        assert_eq!(
            parse_calendar_date("2024-03-09 14:30"),
            NaiveDate::from_ymd_opt(2024, 3, 9)
        );
    }

    #[test]
    fn test_slash_date_is_month_first() {
        // 03/04 is March 4th, never April 3rd
        assert_eq!(
            parse_calendar_date("03/04/2024"),
            NaiveDate::from_ymd_opt(2024, 3, 4)
        );
        assert_eq!(
            parse_calendar_date("1/5/2024"),
            NaiveDate::from_ymd_opt(2024, 1, 5)
        );
    }

    #[test]
    fn test_day_first_slash_date_is_rejected() {
        // 25/12/2024 has no month 25
        assert_eq!(parse_calendar_date("25/12/2024"), None);
    }

    #[test]
    fn test_unrecognised_forms() {
        assert_eq!(parse_calendar_date(""), None);
        assert_eq!(parse_calendar_date("yesterday"), None);
        assert_eq!(parse_calendar_date("01/05/24"), None);
        assert_eq!(parse_calendar_date("2024-02-30"), None);
        assert_eq!(parse_calendar_date("2024/01/05"), None);
    }

    #[test]
    fn test_record_date_keeps_raw_text() {
        let date = RecordDate::parse(" 01/05/2024 ");
        assert_eq!(date.raw(), "01/05/2024");
        assert_eq!(date.iso(), Some("2024-01-05".to_string()));
    }

    #[test]
    fn test_chronological_order_puts_unparsed_last() {
        let mut dates = vec![
            RecordDate::parse("bad"),
            RecordDate::parse("02/01/2024"),
            RecordDate::parse("2024-01-15"),
        ];
        dates.sort_by(|a, b| a.chronological_cmp(b));
        let raw: Vec<&str> = dates.iter().map(|d| d.raw()).collect();
        assert_eq!(raw, vec!["2024-01-15", "02/01/2024", "bad"]);
    }

    #[test]
    fn test_serde_round_trip_uses_raw_text() {
        let date = RecordDate::parse("03/04/2024");
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"03/04/2024\"");
        let back: RecordDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }
}
