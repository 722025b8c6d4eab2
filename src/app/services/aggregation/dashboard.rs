//! Dashboard-level aggregates
//!
//! Summary counts, chart series and the climate time series the dashboard
//! renders. All functions take a record slice (usually a repository query
//! result) and never mutate it.

use super::buckets::{BucketKey, GroupBy, Timeframe};
use super::engine::aggregate;
use super::reducers::FieldReduction;
use crate::app::models::{CanonicalRecord, RecordType, ValueField};
use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Headline counts for the dashboard cards
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total_records: usize,
    pub health_records: usize,
    pub climate_records: usize,
    pub intervention_records: usize,
    /// Distinct barangays
    pub barangays: usize,
    /// Records dated within `recent_days` before the reference date
    pub recent_records: usize,
}

/// Count records by type, barangay and recency
pub fn summarize(records: &[CanonicalRecord], reference: NaiveDate, recent_days: u32) -> DashboardSummary {
    let cutoff = reference
        .checked_sub_days(Days::new(u64::from(recent_days)))
        .unwrap_or(NaiveDate::MIN);

    let mut summary = DashboardSummary {
        total_records: records.len(),
        ..DashboardSummary::default()
    };
    let mut barangays = BTreeSet::new();

    for record in records {
        match record.record_type() {
            RecordType::Health => summary.health_records += 1,
            RecordType::Climate => summary.climate_records += 1,
            RecordType::Intervention => summary.intervention_records += 1,
        }
        barangays.insert(record.location.barangay.as_str());
        if record
            .date
            .parsed()
            .is_some_and(|date| date >= cutoff && date <= reference)
        {
            summary.recent_records += 1;
        }
    }

    summary.barangays = barangays.len();
    summary
}

/// Records within `days` of the latest parsed date in the set
///
/// Records with unparsed dates are dropped. The window is anchored on the
/// data rather than today, so historical datasets still show a full window.
pub fn window_from_latest(records: &[CanonicalRecord], days: u32) -> Vec<CanonicalRecord> {
    let Some(latest) = records.iter().filter_map(|r| r.date.parsed()).max() else {
        return Vec::new();
    };
    let cutoff = latest
        .checked_sub_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MIN);

    records
        .iter()
        .filter(|r| r.date.parsed().is_some_and(|date| date >= cutoff))
        .cloned()
        .collect()
}

/// Series behind the dashboard bar, pie and line charts
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    /// Summed value per category
    pub by_category: BTreeMap<String, f64>,

    /// Summed value per barangay
    pub by_location: BTreeMap<String, f64>,

    /// Summed value per date string and category, dates in chronological order
    pub by_date: Vec<(String, BTreeMap<String, f64>)>,

    /// Categories in first-seen order
    pub metrics: Vec<String>,

    /// Date strings in chronological order
    pub dates: Vec<String>,
}

/// Build chart series; missing values count as zero
pub fn chart_series(records: &[CanonicalRecord]) -> ChartSeries {
    let sum_value = [FieldReduction::sum(ValueField::Value)];

    let labelled = |group: GroupBy| -> BTreeMap<String, f64> {
        aggregate(records, |r| group.key(r), &sum_value)
            .into_iter()
            .map(|(key, summary)| (key.to_string(), summary.get(ValueField::Value)))
            .collect()
    };
    let by_category = labelled(GroupBy::Category);
    let by_location = labelled(GroupBy::Barangay);

    let per_day = aggregate(
        records,
        |r| Timeframe::Daily.key(r).map(|day| (day, r.category.clone())),
        &sum_value,
    );
    let mut by_date: Vec<(String, BTreeMap<String, f64>)> = Vec::new();
    let mut current: Option<BucketKey> = None;
    for ((day, category), summary) in per_day {
        if current.as_ref() != Some(&day) {
            by_date.push((day.to_string(), BTreeMap::new()));
            current = Some(day);
        }
        if let Some((_, categories)) = by_date.last_mut() {
            categories.insert(category, summary.get(ValueField::Value));
        }
    }

    let mut metrics: Vec<String> = Vec::new();
    for record in records {
        if !metrics.contains(&record.category) {
            metrics.push(record.category.clone());
        }
    }

    let dates = by_date.iter().map(|(date, _)| date.clone()).collect();

    ChartSeries {
        by_category,
        by_location,
        by_date,
        metrics,
        dates,
    }
}

/// One bucket of the climate time series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClimatePoint {
    pub label: String,
    /// Calendar position of the bucket; weekly labels alone repeat every month
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub records: usize,
    pub temperature: f64,
    pub humidity: f64,
    pub soil_moisture: f64,
    pub soil_temperature: f64,
    /// Summed, unlike the averaged readings
    pub rainfall: f64,
}

/// Climate readings bucketed by `timeframe`, in chronological order
pub fn climate_series(records: &[CanonicalRecord], timeframe: Timeframe) -> Vec<ClimatePoint> {
    let reductions = [
        FieldReduction::mean(ValueField::Temperature),
        FieldReduction::mean(ValueField::Humidity),
        FieldReduction::mean(ValueField::SoilMoisture),
        FieldReduction::mean(ValueField::SoilTemperature),
        FieldReduction::sum(ValueField::Rainfall),
    ];

    aggregate(
        records,
        |r| match r.record_type() {
            RecordType::Climate => timeframe.key(r),
            _ => None,
        },
        &reductions,
    )
    .into_iter()
    .map(|(key, summary)| ClimatePoint {
        label: key.to_string(),
        year: key.year_month().map(|(year, _)| year),
        month: key.year_month().map(|(_, month)| month),
        records: summary.record_count,
        temperature: summary.get(ValueField::Temperature),
        humidity: summary.get(ValueField::Humidity),
        soil_moisture: summary.get(ValueField::SoilMoisture),
        soil_temperature: summary.get(ValueField::SoilTemperature),
        rainfall: summary.get(ValueField::Rainfall),
    })
    .collect()
}

/// Record counts and date coverage of a collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DataOverview {
    pub counts: BTreeMap<RecordType, usize>,
    pub earliest: Option<NaiveDate>,
    pub latest: Option<NaiveDate>,
    pub unparsed_dates: usize,
}

pub fn data_overview(records: &[CanonicalRecord]) -> DataOverview {
    let mut overview = DataOverview::default();
    for record in records {
        *overview.counts.entry(record.record_type()).or_insert(0) += 1;
        match record.date.parsed() {
            Some(date) => {
                overview.earliest = Some(overview.earliest.map_or(date, |e| e.min(date)));
                overview.latest = Some(overview.latest.map_or(date, |l| l.max(date)));
            }
            None => overview.unparsed_dates += 1,
        }
    }
    overview
}

/// Two-decimal rendering for charts and report previews; non-finite input renders as zero
pub fn format_two_decimals(value: f64) -> String {
    if value.is_finite() {
        format!("{:.2}", value)
    } else {
        "0.00".to_string()
    }
}
