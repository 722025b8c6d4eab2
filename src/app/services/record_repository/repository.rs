//! Record repository implementation

use super::stats::LoadStats;
use super::validation::{ValidatedRecord, apply_patch, draft_from_record, validate_input};
use crate::app::models::{
    CanonicalRecord, DatasetKind, FilterSpec, NewRecord, RecordId, RecordMetadata, RecordPatch,
    RecordType,
};
use crate::constants::defaults;
use crate::{Error, Result};
use chrono::Utc;
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, info};

/// Holds the merged record collection
///
/// Every mutation goes through `load`, `add`, `update`, `delete` or `clear`.
/// Reads hand out owned copies.
#[derive(Debug, Clone)]
pub struct RecordRepository {
    records: Vec<CanonicalRecord>,
    /// Next manual id; never reused within the collection's lifetime
    next_manual_id: u64,
}

impl Default for RecordRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordRepository {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_manual_id: 1,
        }
    }

    /// Repository loaded with `records`
    pub fn with_records(records: Vec<CanonicalRecord>) -> Self {
        let mut repository = Self::new();
        repository.load(records);
        repository
    }

    /// Replace the entire collection
    ///
    /// Composite ids repeated within `records` are re-keyed `key~n` so every
    /// stored id is unique. The manual id counter restarts above the highest
    /// manual id present.
    pub fn load(&mut self, records: Vec<CanonicalRecord>) -> LoadStats {
        let mut stats = LoadStats::new();
        let mut seen: HashSet<RecordId> = HashSet::with_capacity(records.len());
        let mut loaded = Vec::with_capacity(records.len());

        for mut record in records {
            if seen.contains(&record.id) {
                let original = record.id.clone();
                record.id = next_free_id(&original, &seen);
                debug!("Duplicate id {} re-keyed to {}", original, record.id);
                stats.rekeyed_ids += 1;
            }
            if !record.date.is_parsed() {
                stats.unparsed_dates += 1;
            }
            stats.count(record.record_type());
            seen.insert(record.id.clone());
            loaded.push(record);
        }

        self.next_manual_id = loaded
            .iter()
            .filter_map(|r| r.id.manual_sequence())
            .max()
            .map_or(1, |max| max + 1);
        self.records = loaded;

        info!("Repository loaded: {}", stats.summary());
        stats
    }

    /// Validate and append a manual record
    pub fn add(&mut self, input: NewRecord) -> Result<CanonicalRecord> {
        let validated = validate_input(&input)?;

        let id = self.mint_id();
        let now = Utc::now();
        let metadata = RecordMetadata {
            created_at: Some(now),
            modified_at: Some(now),
            ..RecordMetadata::default()
        };
        let record = build_record(id, validated, metadata);

        debug!("Added {} record {}", record.record_type(), record.id);
        self.records.push(record.clone());
        Ok(record)
    }

    /// Merge `patch` over a stored record and re-validate
    ///
    /// The stored record is replaced only when the merged result is valid.
    /// The merged record must satisfy every `add` rule, so an imported record
    /// whose value did not parse needs a `value` in the patch before any other
    /// field can change.
    pub fn update(&mut self, id: &RecordId, patch: RecordPatch) -> Result<CanonicalRecord> {
        let index = self.position(id)?;
        let existing = &self.records[index];

        let mut draft = draft_from_record(existing);
        apply_patch(&mut draft, &patch);
        let validated = validate_input(&draft)?;

        let mut metadata = existing.metadata.clone();
        metadata.modified_at = Some(Utc::now());
        let record = build_record(existing.id.clone(), validated, metadata);

        debug!("Updated record {}", record.id);
        self.records[index] = record.clone();
        Ok(record)
    }

    /// Remove a record, returning it
    pub fn delete(&mut self, id: &RecordId) -> Result<CanonicalRecord> {
        let index = self.position(id)?;
        let removed = self.records.remove(index);
        debug!("Deleted record {}", removed.id);
        Ok(removed)
    }

    /// Remove every record
    pub fn clear(&mut self) {
        info!("Clearing {} records", self.records.len());
        self.records.clear();
    }

    /// Matching records in insertion order
    pub fn query(&self, filter: &FilterSpec) -> Vec<CanonicalRecord> {
        self.records
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect()
    }

    /// Copy of every record
    pub fn all(&self) -> Vec<CanonicalRecord> {
        self.records.clone()
    }

    pub fn get(&self, id: &RecordId) -> Option<CanonicalRecord> {
        self.records.iter().find(|r| r.id == *id).cloned()
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.records.iter().any(|r| r.id == *id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct barangays, sorted
    pub fn unique_barangays(&self) -> Vec<String> {
        self.distinct(|r| &r.location.barangay)
    }

    /// Distinct cities, sorted
    pub fn unique_cities(&self) -> Vec<String> {
        self.distinct(|r| &r.location.city)
    }

    /// Distinct categories, optionally limited to one record type, sorted
    pub fn categories(&self, record_type: Option<RecordType>) -> Vec<String> {
        self.records
            .iter()
            .filter(|r| record_type.is_none_or(|t| r.record_type() == t))
            .map(|r| r.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// JSON snapshot of the collection
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.records)?)
    }

    /// Restore a collection from a JSON snapshot
    pub fn from_json(text: &str) -> Result<Self> {
        let records: Vec<CanonicalRecord> = serde_json::from_str(text)?;
        Ok(Self::with_records(records))
    }

    fn distinct<F>(&self, key: F) -> Vec<String>
    where
        F: Fn(&CanonicalRecord) -> &String,
    {
        self.records
            .iter()
            .map(|r| key(r).clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn position(&self, id: &RecordId) -> Result<usize> {
        self.records
            .iter()
            .position(|r| r.id == *id)
            .ok_or_else(|| Error::not_found(id))
    }

    fn mint_id(&mut self) -> RecordId {
        loop {
            let id = RecordId::manual(self.next_manual_id);
            self.next_manual_id += 1;
            if !self.contains(&id) {
                return id;
            }
        }
    }
}

fn build_record(id: RecordId, validated: ValidatedRecord, metadata: RecordMetadata) -> CanonicalRecord {
    let source = validated.source.unwrap_or_else(|| match id.kind {
        DatasetKind::Manual => defaults::MANUAL_SOURCE.to_string(),
        DatasetKind::Health => defaults::HEALTH_SOURCE.to_string(),
        DatasetKind::Climate => defaults::CLIMATE_SOURCE.to_string(),
    });

    CanonicalRecord {
        id,
        location: validated.location,
        date: validated.date,
        category: validated.category,
        value: Some(validated.value),
        source,
        notes: validated.notes,
        details: validated.details,
        metadata,
    }
}

/// First `key~n` not already taken
fn next_free_id(original: &RecordId, seen: &HashSet<RecordId>) -> RecordId {
    (1..)
        .map(|n| RecordId::new(original.kind, format!("{}~{}", original.key, n)))
        .find(|candidate| !seen.contains(candidate))
        .unwrap_or_else(|| original.clone())
}
