//! Repository load statistics

use crate::app::models::RecordType;

/// Outcome of one `RecordRepository::load`
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LoadStats {
    pub records_loaded: usize,
    pub health_records: usize,
    pub climate_records: usize,
    pub intervention_records: usize,

    /// Records whose composite id repeated an earlier one and was re-keyed
    pub rekeyed_ids: usize,

    /// Records whose date is kept unparsed
    pub unparsed_dates: usize,
}

impl LoadStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn count(&mut self, record_type: RecordType) {
        self.records_loaded += 1;
        match record_type {
            RecordType::Health => self.health_records += 1,
            RecordType::Climate => self.climate_records += 1,
            RecordType::Intervention => self.intervention_records += 1,
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "{} records ({} health, {} climate, {} intervention), {} re-keyed ids, {} unparsed dates",
            self.records_loaded,
            self.health_records,
            self.climate_records,
            self.intervention_records,
            self.rekeyed_ids,
            self.unparsed_dates
        )
    }
}
