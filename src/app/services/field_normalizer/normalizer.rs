//! Main field normalizer
//!
//! Ties the alias table and configured defaults to the per-kind mappers.

use super::aliases::{AliasTable, LogicalField};
use super::climate::climate_record;
use super::field_parsers::optional_text;
use super::health::health_record;
use super::stats::{NormalizeResult, NormalizeStats};
use crate::app::models::{CanonicalRecord, DatasetKind, RecordDate, RecordId, RecordMetadata};
use crate::app::services::csv_parser::RawRow;
use crate::config::NormalizerConfig;
use crate::constants::{DEFAULT_CLIMATE_DATASET, DEFAULT_HEALTH_DATASET};
use tracing::{debug, info, warn};

/// Maps parsed rows onto canonical records
#[derive(Debug, Clone)]
pub struct FieldNormalizer {
    config: NormalizerConfig,
    aliases: AliasTable,
}

impl Default for FieldNormalizer {
    fn default() -> Self {
        Self::new(NormalizerConfig::default())
    }
}

impl FieldNormalizer {
    /// Create a normalizer; configured extra aliases extend the built-in table
    pub fn new(config: NormalizerConfig) -> Self {
        let aliases = AliasTable::with_extras(&config.extra_aliases);
        Self { config, aliases }
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Normalize one climate row; `row_number` is the fallback id
    ///
    /// Provenance is the default climate dataset file.
    pub fn normalize_climate(&self, row: &RawRow, row_number: usize) -> CanonicalRecord {
        let mut stats = NormalizeStats::new();
        let mut record = climate_record(row, row_number, &self.aliases, &self.config, &mut stats);
        record.metadata = RecordMetadata::imported(DEFAULT_CLIMATE_DATASET);
        record
    }

    /// Normalize one disease row; `row_number` is the fallback id
    ///
    /// Provenance is the default disease dataset file.
    pub fn normalize_health(&self, row: &RawRow, row_number: usize) -> CanonicalRecord {
        let mut stats = NormalizeStats::new();
        let mut record = health_record(row, row_number, &self.aliases, &self.config, &mut stats);
        record.metadata = RecordMetadata::imported(DEFAULT_HEALTH_DATASET);
        record
    }

    /// Normalize every row of one source, stamping import provenance
    ///
    /// Row numbers start at 1. Manual is not a dataset kind and yields no records.
    pub fn normalize_rows(
        &self,
        kind: DatasetKind,
        rows: &[RawRow],
        source_name: &str,
    ) -> NormalizeResult {
        let mut stats = NormalizeStats::new();

        let mapper = match kind {
            DatasetKind::Climate => climate_record,
            DatasetKind::Health => health_record,
            DatasetKind::Manual => {
                warn!("'{}': manual records are not loaded from files", source_name);
                return NormalizeResult {
                    records: Vec::new(),
                    stats,
                };
            }
        };

        let mut records = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            stats.rows_seen += 1;
            let mut record = mapper(row, index + 1, &self.aliases, &self.config, &mut stats);
            record.metadata = RecordMetadata::imported(source_name);
            if record.value.is_none() {
                stats.missing_values += 1;
            }
            records.push(record);
            stats.records_produced += 1;
        }

        if stats.unparsed_dates > 0 {
            warn!(
                "'{}': {} of {} dates did not parse and are flagged unparsed",
                source_name, stats.unparsed_dates, stats.records_produced
            );
        }
        info!("Normalized {} data from '{}': {}", kind, source_name, stats.summary());

        NormalizeResult { records, stats }
    }
}

/// Composite id from the id column, or the row number when it is absent
pub(super) fn record_id(
    row: &RawRow,
    row_number: usize,
    table: &AliasTable,
    kind: DatasetKind,
    stats: &mut NormalizeStats,
) -> RecordId {
    match optional_text(row, table, LogicalField::Id) {
        Some(key) => RecordId::new(kind, key),
        None => {
            stats.generated_ids += 1;
            RecordId::new(kind, row_number.to_string())
        }
    }
}

/// Date kept raw and parsed once; failures are flagged, never guessed
pub(super) fn record_date(row: &RawRow, table: &AliasTable, stats: &mut NormalizeStats) -> RecordDate {
    let raw = optional_text(row, table, LogicalField::Date).unwrap_or_default();
    let date = RecordDate::parse(raw);
    if !date.is_parsed() {
        debug!(
            "Line {}: date '{}' is not ISO or MM/DD/YYYY",
            row.line_number(),
            date.raw()
        );
        stats.unparsed_dates += 1;
    }
    date
}
