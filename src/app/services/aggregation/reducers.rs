//! Per-field reducers

use crate::app::models::ValueField;
use serde::{Deserialize, Serialize};

/// How a bucket's values collapse to one number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reducer {
    Mean,
    Sum,
    Count,
}

impl Reducer {
    /// Reduce `values`; an empty slice yields `0.0`
    pub fn reduce(&self, values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        match self {
            Reducer::Sum => values.iter().sum(),
            Reducer::Mean => values.iter().sum::<f64>() / values.len() as f64,
            Reducer::Count => values.len() as f64,
        }
    }
}

/// Accumulative fields are summed, intensity fields averaged
///
/// The primary value is summed because on health records it is a case count.
pub fn default_reducer(field: ValueField) -> Reducer {
    match field {
        ValueField::Value | ValueField::Rainfall => Reducer::Sum,
        ValueField::Temperature
        | ValueField::TemperatureMin
        | ValueField::TemperatureMax
        | ValueField::HeatIndex
        | ValueField::WindSpeed
        | ValueField::Humidity
        | ValueField::SolarRadiation
        | ValueField::UvRadiation
        | ValueField::SoilMoisture
        | ValueField::SoilTemperature => Reducer::Mean,
    }
}

/// One field and the reducer applied to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldReduction {
    pub field: ValueField,
    pub reducer: Reducer,
}

impl FieldReduction {
    pub fn new(field: ValueField, reducer: Reducer) -> Self {
        Self { field, reducer }
    }

    /// Field with its default reducer
    pub fn default_for(field: ValueField) -> Self {
        Self::new(field, default_reducer(field))
    }

    pub fn sum(field: ValueField) -> Self {
        Self::new(field, Reducer::Sum)
    }

    pub fn mean(field: ValueField) -> Self {
        Self::new(field, Reducer::Mean)
    }
}
