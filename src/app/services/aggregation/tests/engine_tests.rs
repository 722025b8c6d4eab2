//! Tests for the aggregation engine

use super::*;
use crate::app::models::ValueField;
use crate::app::services::aggregation::{
    AggregationEngine, BucketKey, FieldReduction, GroupBy, Reducer, Timeframe, aggregate,
    default_reducer,
};

#[test]
fn test_empty_bucket_reduces_to_zero() {
    for reducer in [Reducer::Mean, Reducer::Sum, Reducer::Count] {
        let value = reducer.reduce(&[]);
        assert_eq!(value, 0.0);
        assert!(!value.is_nan());
    }
}

#[test]
fn test_bucket_with_only_missing_values_is_zero() {
    let records = vec![health("1", "A", "2024-01-05", "Flu", None)];
    let result = aggregate(
        &records,
        |r| GroupBy::Category.key(r),
        &[FieldReduction::mean(ValueField::Value)],
    );

    let summary = &result[&BucketKey::label("Flu")];
    assert_eq!(summary.record_count, 1);
    assert_eq!(summary.get(ValueField::Value), 0.0);
    assert_eq!(summary.contributions(ValueField::Value), 0);
}

#[test]
fn test_reducers_are_chosen_per_field() {
    assert_eq!(default_reducer(ValueField::Rainfall), Reducer::Sum);
    assert_eq!(default_reducer(ValueField::Value), Reducer::Sum);
    assert_eq!(default_reducer(ValueField::Temperature), Reducer::Mean);
    assert_eq!(default_reducer(ValueField::Humidity), Reducer::Mean);

    let engine = AggregationEngine::new();
    let result = engine.group_by(
        &sample_climate(),
        GroupBy::Date(Timeframe::Daily),
        &[ValueField::Temperature, ValueField::Rainfall, ValueField::Humidity],
    );

    let jan5 = result
        .iter()
        .find(|(key, _)| key.to_string() == "2024-01-05")
        .map(|(_, summary)| summary)
        .unwrap();
    assert_eq!(jan5.record_count, 2);
    assert_eq!(jan5.get(ValueField::Temperature), 29.0);
    assert_eq!(jan5.get(ValueField::Rainfall), 15.5);
    // One reading had no humidity; the mean uses the one that did
    assert_eq!(jan5.get(ValueField::Humidity), 80.0);
}

#[test]
fn test_reducer_override() {
    let engine = AggregationEngine::new().with_reducer(ValueField::Temperature, Reducer::Sum);
    assert_eq!(engine.reducer_for(ValueField::Temperature), Reducer::Sum);

    let result = engine.group_by(&sample_climate(), GroupBy::Barangay, &[ValueField::Temperature]);
    assert_eq!(result[&BucketKey::label("Talomo")].get(ValueField::Temperature), 84.0);
}

#[test]
fn test_monthly_grouping_skips_unparsed_and_sorts() {
    let mut records = sample_health();
    records.push(health("6", "A", "unknown", "Flu", Some(100.0)));

    let result = AggregationEngine::new().group_by(
        &records,
        GroupBy::Date(Timeframe::Monthly),
        &[ValueField::Value],
    );

    let labels: Vec<String> = result.keys().map(|k| k.to_string()).collect();
    assert_eq!(labels, vec!["2023-12", "2024-1", "2024-2"]);
    let totals: Vec<f64> = result.values().map(|s| s.get(ValueField::Value)).collect();
    assert_eq!(totals, vec![5.0, 22.0, 0.0]);
}

#[test]
fn test_custom_key_function() {
    let result = AggregationEngine::new().aggregate(
        &sample_health(),
        |r| Some((r.location.barangay.clone(), r.category.clone())),
        &[ValueField::Value],
    );
    assert_eq!(
        result[&("Talomo".to_string(), "Dengue Cases".to_string())].get(ValueField::Value),
        15.0
    );
    assert_eq!(result.len(), 4);
}

#[test]
fn test_input_is_not_mutated() {
    let records = sample_health();
    let before = records.clone();
    let _ = AggregationEngine::new().group_by(&records, GroupBy::Category, &[ValueField::Value]);
    assert_eq!(records, before);
}
