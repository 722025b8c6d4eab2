//! Climate dataset mapping
//!
//! Two published layouts are covered by the alias table:
//! - weather station: `uuid,City,Barangay,date,tave,tmin,tmax,heat_index,wind_speed,rh,solar_rad,uv_rad`
//! - barangay sensors: `barangay,date,time,temperature,humidity,soil_moisture,soil_temperature,rainfall`
//!
//! Climate rows carry no single measurement column, so the primary value is
//! the `value` column when present and the average temperature otherwise.

use super::aliases::{AliasTable, LogicalField};
use super::field_parsers::{optional_number, optional_text, text_or, text_or_count};
use super::stats::NormalizeStats;
use crate::app::models::{
    CanonicalRecord, ClimateMetrics, DatasetKind, Location, RadiationMetrics, RecordDetails,
    RecordMetadata, TemperatureMetrics, WindMetrics,
};
use crate::app::services::csv_parser::RawRow;
use crate::config::NormalizerConfig;

/// Map one climate row onto a canonical record
pub fn climate_record(
    row: &RawRow,
    row_number: usize,
    table: &AliasTable,
    config: &NormalizerConfig,
    stats: &mut NormalizeStats,
) -> CanonicalRecord {
    let metrics = climate_metrics(row, table, stats);

    let value = optional_number(row, table, LogicalField::Value, stats)
        .or(metrics.temperature.average);

    let location = Location::new(
        text_or_count(
            row,
            table,
            LogicalField::City,
            &config.climate_city,
            &mut stats.defaulted_locations,
        ),
        text_or_count(
            row,
            table,
            LogicalField::Barangay,
            &config.climate_barangay,
            &mut stats.defaulted_locations,
        ),
    );

    CanonicalRecord {
        id: super::normalizer::record_id(row, row_number, table, DatasetKind::Climate, stats),
        location,
        date: super::normalizer::record_date(row, table, stats),
        category: text_or(row, table, LogicalField::Category, &config.climate_category),
        value,
        source: text_or(row, table, LogicalField::Source, &config.climate_source),
        notes: optional_text(row, table, LogicalField::Notes),
        details: RecordDetails::Climate(metrics),
        metadata: RecordMetadata::default(),
    }
}

/// Per-metric readings; absent columns stay `None`
fn climate_metrics(row: &RawRow, table: &AliasTable, stats: &mut NormalizeStats) -> ClimateMetrics {
    let mut number = |field| optional_number(row, table, field, stats);

    let temperature = TemperatureMetrics {
        average: number(LogicalField::Temperature),
        min: number(LogicalField::TemperatureMin),
        max: number(LogicalField::TemperatureMax),
        heat_index: number(LogicalField::HeatIndex),
    };
    let wind = WindMetrics {
        speed: number(LogicalField::WindSpeed),
    };
    let humidity = number(LogicalField::Humidity);
    let radiation = RadiationMetrics {
        solar: number(LogicalField::SolarRadiation),
        uv: number(LogicalField::UvRadiation),
    };
    let rainfall = number(LogicalField::Rainfall);
    let soil_moisture = number(LogicalField::SoilMoisture);
    let soil_temperature = number(LogicalField::SoilTemperature);

    ClimateMetrics {
        temperature,
        wind,
        humidity,
        radiation,
        rainfall,
        soil_moisture,
        soil_temperature,
        time: optional_text(row, table, LogicalField::Time),
    }
}
