//! Generic aggregation engine

use super::buckets::{BucketKey, GroupBy};
use super::reducers::{FieldReduction, Reducer, default_reducer};
use crate::app::models::{CanonicalRecord, ValueField};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Reduced values of one bucket
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BucketSummary {
    /// Records assigned to the bucket
    pub record_count: usize,

    /// Reduced value per requested field
    pub values: BTreeMap<ValueField, f64>,

    /// Records that contributed a value, per field
    pub contributions: BTreeMap<ValueField, usize>,
}

impl BucketSummary {
    /// Reduced value of a field; `0.0` when the field was not requested
    pub fn get(&self, field: ValueField) -> f64 {
        self.values.get(&field).copied().unwrap_or(0.0)
    }

    pub fn contributions(&self, field: ValueField) -> usize {
        self.contributions.get(&field).copied().unwrap_or(0)
    }
}

/// Group `records` by `key_fn` and reduce each requested field
///
/// Records for which `key_fn` returns `None` are skipped. Missing field
/// values do not contribute, so a bucket where every value is missing
/// reduces to `0.0`.
pub fn aggregate<K, F>(
    records: &[CanonicalRecord],
    key_fn: F,
    reductions: &[FieldReduction],
) -> BTreeMap<K, BucketSummary>
where
    K: Ord,
    F: Fn(&CanonicalRecord) -> Option<K>,
{
    let mut collected: BTreeMap<K, (usize, Vec<Vec<f64>>)> = BTreeMap::new();
    let mut skipped = 0usize;

    for record in records {
        let Some(key) = key_fn(record) else {
            skipped += 1;
            continue;
        };
        let (count, values) = collected
            .entry(key)
            .or_insert_with(|| (0, vec![Vec::new(); reductions.len()]));
        *count += 1;
        for (slot, reduction) in values.iter_mut().zip(reductions) {
            if let Some(value) = record.field_value(reduction.field) {
                slot.push(value);
            }
        }
    }

    if skipped > 0 {
        debug!("Aggregation skipped {} records without a bucket key", skipped);
    }

    collected
        .into_iter()
        .map(|(key, (record_count, values))| {
            let mut summary = BucketSummary {
                record_count,
                ..BucketSummary::default()
            };
            for (slot, reduction) in values.iter().zip(reductions) {
                summary
                    .values
                    .insert(reduction.field, reduction.reducer.reduce(slot));
                summary.contributions.insert(reduction.field, slot.len());
            }
            (key, summary)
        })
        .collect()
}

/// Aggregation with a per-field reducer table
///
/// Fields without an explicit reducer use [`default_reducer`].
#[derive(Debug, Clone, Default)]
pub struct AggregationEngine {
    overrides: HashMap<ValueField, Reducer>,
}

impl AggregationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `reducer` for `field` instead of its default
    pub fn with_reducer(mut self, field: ValueField, reducer: Reducer) -> Self {
        self.overrides.insert(field, reducer);
        self
    }

    pub fn reducer_for(&self, field: ValueField) -> Reducer {
        self.overrides
            .get(&field)
            .copied()
            .unwrap_or_else(|| default_reducer(field))
    }

    /// Reductions for `fields` using this engine's reducer table
    pub fn reductions(&self, fields: &[ValueField]) -> Vec<FieldReduction> {
        fields
            .iter()
            .map(|field| FieldReduction::new(*field, self.reducer_for(*field)))
            .collect()
    }

    /// Group by a caller-supplied key
    pub fn aggregate<K, F>(
        &self,
        records: &[CanonicalRecord],
        key_fn: F,
        fields: &[ValueField],
    ) -> BTreeMap<K, BucketSummary>
    where
        K: Ord,
        F: Fn(&CanonicalRecord) -> Option<K>,
    {
        aggregate(records, key_fn, &self.reductions(fields))
    }

    /// Group by a built-in strategy
    pub fn group_by(
        &self,
        records: &[CanonicalRecord],
        group_by: GroupBy,
        fields: &[ValueField],
    ) -> BTreeMap<BucketKey, BucketSummary> {
        self.aggregate(records, |record| group_by.key(record), fields)
    }
}
