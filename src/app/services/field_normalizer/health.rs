//! Disease dataset mapping
//!
//! The published disease dataset (`Id,Date,Disease,Cases,Source`) is
//! city-level with no location columns, so city and barangay usually come
//! from the configured defaults. Demographic columns are kept when present.

use super::aliases::{AliasTable, LogicalField};
use super::field_parsers::{optional_number, optional_text, text_or, text_or_count};
use super::stats::NormalizeStats;
use crate::app::models::{
    CanonicalRecord, DatasetKind, HealthDetails, Location, RecordDetails, RecordMetadata,
};
use crate::app::services::csv_parser::RawRow;
use crate::config::NormalizerConfig;

/// Map one disease row onto a canonical record
pub fn health_record(
    row: &RawRow,
    row_number: usize,
    table: &AliasTable,
    config: &NormalizerConfig,
    stats: &mut NormalizeStats,
) -> CanonicalRecord {
    let location = Location::new(
        text_or_count(
            row,
            table,
            LogicalField::City,
            &config.health_city,
            &mut stats.defaulted_locations,
        ),
        text_or_count(
            row,
            table,
            LogicalField::Barangay,
            &config.health_barangay,
            &mut stats.defaulted_locations,
        ),
    );

    let details = HealthDetails {
        age_group: optional_text(row, table, LogicalField::AgeGroup),
        gender: optional_text(row, table, LogicalField::Gender),
        severity: optional_text(row, table, LogicalField::Severity),
    };

    CanonicalRecord {
        id: super::normalizer::record_id(row, row_number, table, DatasetKind::Health, stats),
        location,
        date: super::normalizer::record_date(row, table, stats),
        category: text_or(row, table, LogicalField::Disease, &config.health_category),
        value: optional_number(row, table, LogicalField::Cases, stats),
        source: text_or(row, table, LogicalField::Source, &config.health_source),
        notes: optional_text(row, table, LogicalField::Notes),
        details: RecordDetails::Health(details),
        metadata: RecordMetadata::default(),
    }
}
