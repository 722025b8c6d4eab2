//! Barangay risk index
//!
//! Health risk is the mean of case count times disease severity weight.
//! Climate risk is the mean threshold severity of the barangay's climate
//! readings. The combined index averages the two.

use crate::app::models::{CanonicalRecord, RecordType};
use crate::constants::{climate_categories, severity};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Which index to report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskMetric {
    Health,
    Climate,
    #[default]
    Combined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn from_index(index: f64) -> Self {
        if index >= severity::HIGH_RISK_THRESHOLD {
            RiskLevel::High
        } else if index >= severity::MODERATE_RISK_THRESHOLD {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk of one barangay over a time window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub barangay: String,
    pub health_risk: f64,
    pub climate_risk: f64,
    pub health_records: usize,
    pub climate_records: usize,
    /// Index for the requested metric
    pub index: f64,
    pub level: RiskLevel,
}

/// Severity weight of a disease category
pub fn health_severity(category: &str) -> f64 {
    severity::HEALTH_WEIGHTS
        .iter()
        .find(|(name, _)| *name == category)
        .map_or(severity::DEFAULT_HEALTH_WEIGHT, |(_, weight)| *weight)
}

/// Threshold severity of one climate reading
pub fn climate_severity(category: &str, value: f64) -> f64 {
    match category {
        climate_categories::RAINFALL => match value {
            v if v > 150.0 => 0.9,
            v if v > 100.0 => 0.6,
            v if v > 50.0 => 0.3,
            _ => 0.1,
        },
        climate_categories::TEMPERATURE => match value {
            v if v > 35.0 => 0.8,
            v if v > 30.0 => 0.5,
            v if v > 25.0 => 0.3,
            _ => 0.1,
        },
        climate_categories::HUMIDITY => match value {
            v if v > 85.0 => 0.7,
            v if v > 70.0 => 0.4,
            _ => 0.2,
        },
        climate_categories::FLOOD_LEVEL => match value {
            v if v > 100.0 => 1.0,
            v if v > 50.0 => 0.7,
            v if v > 20.0 => 0.4,
            _ => 0.2,
        },
        _ => severity::DEFAULT_CLIMATE_SEVERITY,
    }
}

/// Assess one barangay using records dated within `days` before `reference`
///
/// A barangay with no records of a kind has zero risk for that kind.
pub fn assess_barangay(
    records: &[CanonicalRecord],
    barangay: &str,
    metric: RiskMetric,
    reference: NaiveDate,
    days: u32,
) -> RiskAssessment {
    let cutoff = reference
        .checked_sub_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MIN);

    let in_window = records.iter().filter(|r| {
        r.location.barangay == barangay && r.date.parsed().is_some_and(|date| date >= cutoff)
    });

    let (mut health_total, mut health_records) = (0.0, 0usize);
    let (mut climate_total, mut climate_records) = (0.0, 0usize);
    for record in in_window {
        match record.record_type() {
            RecordType::Health => {
                health_total += record.value_or_zero() * health_severity(&record.category);
                health_records += 1;
            }
            RecordType::Climate => {
                climate_total += climate_severity(&record.category, record.value_or_zero());
                climate_records += 1;
            }
            RecordType::Intervention => {}
        }
    }

    let health_risk = health_total / health_records.max(1) as f64;
    let climate_risk = climate_total / climate_records.max(1) as f64;
    let index = match metric {
        RiskMetric::Health => health_risk,
        RiskMetric::Climate => climate_risk,
        RiskMetric::Combined => (health_risk + climate_risk) / 2.0,
    };

    RiskAssessment {
        barangay: barangay.to_string(),
        health_risk,
        climate_risk,
        health_records,
        climate_records,
        index,
        level: RiskLevel::from_index(index),
    }
}

/// Assess every barangay present in `records`, sorted by barangay name
pub fn assess_barangays(
    records: &[CanonicalRecord],
    metric: RiskMetric,
    reference: NaiveDate,
    days: u32,
) -> Vec<RiskAssessment> {
    records
        .iter()
        .map(|r| r.location.barangay.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|barangay| assess_barangay(records, barangay, metric, reference, days))
        .collect()
}
