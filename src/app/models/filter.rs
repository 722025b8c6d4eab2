//! Record query configuration
//!
//! A [`FilterSpec`] describes a repository query. Every populated field is
//! AND-combined; an empty filter matches every record.

use super::RecordType;
use super::record_date::parse_calendar_date;
use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive calendar date range; either bound may be open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Both bounds closed
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(Some(start), Some(end))
    }

    /// Parse form inputs; blank text leaves that bound open
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self::new(
            parse_bound(start, "dateRange.start")?,
            parse_bound(end, "dateRange.end")?,
        ))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }

    pub fn is_open(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

fn parse_bound(text: &str, field: &str) -> Result<Option<NaiveDate>> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    parse_calendar_date(text)
        .map(Some)
        .ok_or_else(|| Error::validation(field, format!("Unrecognised date '{}'", text.trim())))
}

/// Exact-match location filter; unset parts match anything
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationFilter {
    pub city: Option<String>,
    pub barangay: Option<String>,
}

/// Record query description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(rename = "type")]
    pub record_type: Option<RecordType>,
    pub date_range: Option<DateRange>,
    pub location: Option<LocationFilter>,
    /// Case-insensitive substring searched across text fields and the value
    pub search: Option<String>,
    pub category: Option<String>,
}

impl FilterSpec {
    /// Filter that matches every record
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, record_type: RecordType) -> Self {
        self.record_type = Some(record_type);
        self
    }

    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.location.get_or_insert_with(LocationFilter::default).city = Some(city.into());
        self
    }

    pub fn with_barangay(mut self, barangay: impl Into<String>) -> Self {
        self.location
            .get_or_insert_with(LocationFilter::default)
            .barangay = Some(barangay.into());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// True when no field restricts the result
    pub fn is_empty(&self) -> bool {
        self.record_type.is_none()
            && self.date_range.is_none_or(|r| r.is_open())
            && self
                .location
                .as_ref()
                .is_none_or(|l| l.city.is_none() && l.barangay.is_none())
            && self.search.as_deref().is_none_or(|s| s.trim().is_empty())
            && self.category.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range_inclusive_bounds() {
        let range = DateRange::between(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        );
        assert!(range.contains(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
        assert!(range.contains(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()));
        assert!(!range.contains(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
    }

    #[test]
    fn test_date_range_parse_open_and_invalid() {
        let range = DateRange::parse("", "03/31/2024").unwrap();
        assert_eq!(range.start, None);
        assert_eq!(range.end, NaiveDate::from_ymd_opt(2024, 3, 31));

        let err = DateRange::parse("not a date", "").unwrap_err();
        assert_eq!(err.field(), Some("dateRange.start"));
    }

    #[test]
    fn test_builder_and_emptiness() {
        assert!(FilterSpec::new().is_empty());
        assert!(FilterSpec::new().with_search("   ").is_empty());

        let spec = FilterSpec::new()
            .with_type(RecordType::Health)
            .with_barangay("Poblacion");
        assert!(!spec.is_empty());
        assert_eq!(
            spec.location.unwrap().barangay.as_deref(),
            Some("Poblacion")
        );
    }
}
