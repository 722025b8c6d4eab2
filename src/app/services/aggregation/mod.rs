//! Record aggregation for charts and reports
//!
//! This module groups records into buckets and reduces the numeric fields of
//! each bucket with a per-field reducer. Rainfall and case counts are summed;
//! temperature, humidity and the other intensity metrics are averaged.
//!
//! # Architecture
//!
//! - [`buckets`] - Bucket keys, temporal timeframes and non-temporal groupings
//! - [`reducers`] - Mean, sum and count reducers with per-field defaults
//! - [`engine`] - The generic [`aggregate`] function and [`AggregationEngine`]
//! - [`dashboard`] - Summary counts, chart series, time windows and climate series
//! - [`risk`] - Barangay risk index from disease severity and climate thresholds
//!
//! Every reducer returns `0.0` for an empty bucket. Results keep full
//! precision; [`format_two_decimals`] is the presentation helper.
//!
//! # Usage
//!
//! ```rust
//! use health_climate::app::models::ValueField;
//! use health_climate::app::services::aggregation::{AggregationEngine, GroupBy, Timeframe};
//!
//! let engine = AggregationEngine::new();
//! let monthly = engine.group_by(&[], GroupBy::Date(Timeframe::Monthly), &[ValueField::Value]);
//! assert!(monthly.is_empty());
//! ```

pub mod buckets;
pub mod dashboard;
pub mod engine;
pub mod reducers;
pub mod risk;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use buckets::{BucketKey, GroupBy, Timeframe};
pub use dashboard::{
    ChartSeries, ClimatePoint, DashboardSummary, DataOverview, chart_series, climate_series,
    data_overview, format_two_decimals, summarize, window_from_latest,
};
pub use engine::{AggregationEngine, BucketSummary, aggregate};
pub use reducers::{FieldReduction, Reducer, default_reducer};
pub use risk::{RiskAssessment, RiskLevel, RiskMetric, assess_barangay, assess_barangays};
