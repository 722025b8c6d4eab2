//! Tests for the barangay risk index

use super::*;
use crate::app::services::aggregation::risk::{climate_severity, health_severity};
use crate::app::services::aggregation::{RiskLevel, RiskMetric, assess_barangay, assess_barangays};
use chrono::NaiveDate;

fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

#[test]
fn test_health_severity_weights() {
    assert_eq!(health_severity("Dengue Cases"), 0.8);
    assert_eq!(health_severity("Leptospirosis Cases"), 0.7);
    assert_eq!(health_severity("Flu"), 0.5);
}

#[test]
fn test_climate_thresholds() {
    assert_eq!(climate_severity("Rainfall (mm)", 151.0), 0.9);
    assert_eq!(climate_severity("Rainfall (mm)", 150.0), 0.6);
    assert_eq!(climate_severity("Temperature (°C)", 36.0), 0.8);
    assert_eq!(climate_severity("Temperature (°C)", 25.0), 0.1);
    assert_eq!(climate_severity("Humidity (%)", 71.0), 0.4);
    assert_eq!(climate_severity("Flood Level (cm)", 101.0), 1.0);
    assert_eq!(climate_severity("Wind", 99.0), 0.5);
}

#[test]
fn test_risk_levels() {
    assert_eq!(RiskLevel::from_index(0.7), RiskLevel::High);
    assert_eq!(RiskLevel::from_index(0.4), RiskLevel::Moderate);
    assert_eq!(RiskLevel::from_index(0.39), RiskLevel::Low);
}

#[test]
fn test_combined_index_averages_health_and_climate() {
    let records = vec![
        health("1", "Talomo", "2024-02-20", "Dengue Cases", Some(1.0)),
        health("2", "Talomo", "2024-02-21", "Flu", Some(1.0)),
        metric("1", "Talomo", "2024-02-20", "Rainfall (mm)", 160.0),
        metric("2", "Talomo", "2024-02-21", "Humidity (%)", 60.0),
        // Outside the window
        health("3", "Talomo", "2023-06-01", "Dengue Cases", Some(100.0)),
        // Other barangay
        health("4", "Poblacion", "2024-02-20", "Dengue Cases", Some(50.0)),
    ];

    let assessment = assess_barangay(&records, "Talomo", RiskMetric::Combined, reference(), 30);
    assert_eq!(assessment.health_records, 2);
    assert_eq!(assessment.climate_records, 2);
    assert!((assessment.health_risk - 0.65).abs() < 1e-9);
    assert!((assessment.climate_risk - 0.55).abs() < 1e-9);
    assert!((assessment.index - 0.6).abs() < 1e-9);
    assert_eq!(assessment.level, RiskLevel::Moderate);

    let health_only = assess_barangay(&records, "Talomo", RiskMetric::Health, reference(), 30);
    assert!((health_only.index - 0.65).abs() < 1e-9);
}

#[test]
fn test_barangay_without_records_is_low_risk() {
    let assessment = assess_barangay(&[], "Matina", RiskMetric::Combined, reference(), 30);
    assert_eq!(assessment.index, 0.0);
    assert_eq!(assessment.level, RiskLevel::Low);
}

#[test]
fn test_assess_all_barangays() {
    let records = vec![
        health("1", "Talomo", "2024-02-20", "Dengue Cases", Some(2.0)),
        health("2", "Buhangin", "2024-02-20", "Flu", Some(1.0)),
    ];
    let assessments = assess_barangays(&records, RiskMetric::Health, reference(), 30);
    let names: Vec<&str> = assessments.iter().map(|a| a.barangay.as_str()).collect();
    assert_eq!(names, vec!["Buhangin", "Talomo"]);
    assert_eq!(assessments[1].level, RiskLevel::High);
}
