//! Bucket keys and grouping strategies
//!
//! Weekly buckets number weeks within the calendar month, `ceil(day / 7)`,
//! so day 29 to 31 form a fifth week. Their label is `Week N, YYYY`, but the
//! key also carries the month so the same week number in different months
//! never shares a bucket. Monthly labels are `YYYY-M` with an unpadded month.

use crate::app::models::CanonicalRecord;
use crate::{Error, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Key of one aggregation bucket
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BucketKey {
    /// The record's date string as published
    Day {
        date: Option<NaiveDate>,
        raw: String,
    },
    Week {
        year: i32,
        month: u32,
        week: u32,
    },
    Month {
        year: i32,
        month: u32,
    },
    /// Category, barangay, city or other text grouping
    Label(String),
}

impl BucketKey {
    pub fn day(date: Option<NaiveDate>, raw: impl Into<String>) -> Self {
        BucketKey::Day {
            date,
            raw: raw.into(),
        }
    }

    /// Week-of-month bucket containing `date`
    pub fn week_of(date: NaiveDate) -> Self {
        BucketKey::Week {
            year: date.year(),
            month: date.month(),
            week: date.day().div_ceil(7),
        }
    }

    pub fn month_of(date: NaiveDate) -> Self {
        BucketKey::Month {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn label(text: impl Into<String>) -> Self {
        BucketKey::Label(text.into())
    }

    /// Display label used by charts and report previews
    pub fn display_label(&self) -> String {
        self.to_string()
    }

    /// Calendar year and month of a temporal key
    ///
    /// Weekly labels omit the month, so this is what tells week 1 of January
    /// from week 1 of February. Unparsed days and labels have none.
    pub fn year_month(&self) -> Option<(i32, u32)> {
        match self {
            BucketKey::Day { date, .. } => date.map(|d| (d.year(), d.month())),
            BucketKey::Week { year, month, .. } | BucketKey::Month { year, month } => {
                Some((*year, *month))
            }
            BucketKey::Label(_) => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            BucketKey::Day { .. } => 0,
            BucketKey::Week { .. } => 1,
            BucketKey::Month { .. } => 2,
            BucketKey::Label(_) => 3,
        }
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BucketKey::Day { raw, .. } => f.write_str(raw),
            BucketKey::Week { year, week, .. } => write!(f, "Week {}, {}", week, year),
            BucketKey::Month { year, month } => write!(f, "{}-{}", year, month),
            BucketKey::Label(text) => f.write_str(text),
        }
    }
}

impl Ord for BucketKey {
    /// Chronological for temporal keys; unparsed days sort after parsed ones
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (
                BucketKey::Day { date: a, raw: ra },
                BucketKey::Day { date: b, raw: rb },
            ) => match (a, b) {
                (Some(a), Some(b)) => a.cmp(b).then_with(|| ra.cmp(rb)),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => ra.cmp(rb),
            },
            (
                BucketKey::Week {
                    year: ya,
                    month: ma,
                    week: wa,
                },
                BucketKey::Week {
                    year: yb,
                    month: mb,
                    week: wb,
                },
            ) => (ya, ma, wa).cmp(&(yb, mb, wb)),
            (
                BucketKey::Month { year: ya, month: ma },
                BucketKey::Month { year: yb, month: mb },
            ) => (ya, ma).cmp(&(yb, mb)),
            (BucketKey::Label(a), BucketKey::Label(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for BucketKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Temporal bucketing strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Timeframe {
    /// Bucket for a record
    ///
    /// Daily buckets use the date text as published, so even unparsed dates
    /// get a bucket. Weekly and monthly buckets need a calendar date.
    pub fn key(&self, record: &CanonicalRecord) -> Option<BucketKey> {
        match self {
            Timeframe::Daily => Some(BucketKey::day(record.date.parsed(), record.date.raw())),
            Timeframe::Weekly => record.date.parsed().map(BucketKey::week_of),
            Timeframe::Monthly => record.date.parsed().map(BucketKey::month_of),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Daily => "daily",
            Timeframe::Weekly => "weekly",
            Timeframe::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Timeframe::Daily),
            "weekly" => Ok(Timeframe::Weekly),
            "monthly" => Ok(Timeframe::Monthly),
            other => Err(Error::validation(
                "timeframe",
                format!("Unknown timeframe '{}': expected daily, weekly or monthly", other),
            )),
        }
    }
}

/// Built-in grouping strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupBy {
    Date(Timeframe),
    Category,
    Barangay,
    City,
    RecordType,
}

impl GroupBy {
    pub fn key(&self, record: &CanonicalRecord) -> Option<BucketKey> {
        match self {
            GroupBy::Date(timeframe) => timeframe.key(record),
            GroupBy::Category => Some(BucketKey::label(&record.category)),
            GroupBy::Barangay => Some(BucketKey::label(&record.location.barangay)),
            GroupBy::City => Some(BucketKey::label(&record.location.city)),
            GroupBy::RecordType => Some(BucketKey::label(record.record_type().as_str())),
        }
    }
}
