//! Logical fields and the column alias table
//!
//! The alias table is the contract with the external datasets: it has to
//! track whatever column names they publish. Built-in aliases come from
//! [`crate::constants::aliases`]; configuration may append more per field.

use crate::app::services::csv_parser::{FieldValue, RawRow};
use crate::constants::aliases;
use crate::{Error, Result};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// A canonical field read from source rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LogicalField {
    Id,
    City,
    Barangay,
    Date,
    Time,
    Source,
    Notes,
    Category,
    Value,
    Temperature,
    TemperatureMin,
    TemperatureMax,
    HeatIndex,
    WindSpeed,
    Humidity,
    SolarRadiation,
    UvRadiation,
    Rainfall,
    SoilMoisture,
    SoilTemperature,
    Disease,
    Cases,
    AgeGroup,
    Gender,
    Severity,
}

impl LogicalField {
    pub const ALL: [LogicalField; 25] = [
        LogicalField::Id,
        LogicalField::City,
        LogicalField::Barangay,
        LogicalField::Date,
        LogicalField::Time,
        LogicalField::Source,
        LogicalField::Notes,
        LogicalField::Category,
        LogicalField::Value,
        LogicalField::Temperature,
        LogicalField::TemperatureMin,
        LogicalField::TemperatureMax,
        LogicalField::HeatIndex,
        LogicalField::WindSpeed,
        LogicalField::Humidity,
        LogicalField::SolarRadiation,
        LogicalField::UvRadiation,
        LogicalField::Rainfall,
        LogicalField::SoilMoisture,
        LogicalField::SoilTemperature,
        LogicalField::Disease,
        LogicalField::Cases,
        LogicalField::AgeGroup,
        LogicalField::Gender,
        LogicalField::Severity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalField::Id => "id",
            LogicalField::City => "city",
            LogicalField::Barangay => "barangay",
            LogicalField::Date => "date",
            LogicalField::Time => "time",
            LogicalField::Source => "source",
            LogicalField::Notes => "notes",
            LogicalField::Category => "category",
            LogicalField::Value => "value",
            LogicalField::Temperature => "temperature",
            LogicalField::TemperatureMin => "temperature_min",
            LogicalField::TemperatureMax => "temperature_max",
            LogicalField::HeatIndex => "heat_index",
            LogicalField::WindSpeed => "wind_speed",
            LogicalField::Humidity => "humidity",
            LogicalField::SolarRadiation => "solar_radiation",
            LogicalField::UvRadiation => "uv_radiation",
            LogicalField::Rainfall => "rainfall",
            LogicalField::SoilMoisture => "soil_moisture",
            LogicalField::SoilTemperature => "soil_temperature",
            LogicalField::Disease => "disease",
            LogicalField::Cases => "cases",
            LogicalField::AgeGroup => "age_group",
            LogicalField::Gender => "gender",
            LogicalField::Severity => "severity",
        }
    }

    /// Built-in source columns in priority order
    pub fn builtin_aliases(&self) -> &'static [&'static str] {
        match self {
            LogicalField::Id => aliases::ID,
            LogicalField::City => aliases::CITY,
            LogicalField::Barangay => aliases::BARANGAY,
            LogicalField::Date => aliases::DATE,
            LogicalField::Time => aliases::TIME,
            LogicalField::Source => aliases::SOURCE,
            LogicalField::Notes => aliases::NOTES,
            LogicalField::Category => aliases::CATEGORY,
            LogicalField::Value => aliases::VALUE,
            LogicalField::Temperature => aliases::TEMPERATURE,
            LogicalField::TemperatureMin => aliases::TEMPERATURE_MIN,
            LogicalField::TemperatureMax => aliases::TEMPERATURE_MAX,
            LogicalField::HeatIndex => aliases::HEAT_INDEX,
            LogicalField::WindSpeed => aliases::WIND_SPEED,
            LogicalField::Humidity => aliases::HUMIDITY,
            LogicalField::SolarRadiation => aliases::SOLAR_RADIATION,
            LogicalField::UvRadiation => aliases::UV_RADIATION,
            LogicalField::Rainfall => aliases::RAINFALL,
            LogicalField::SoilMoisture => aliases::SOIL_MOISTURE,
            LogicalField::SoilTemperature => aliases::SOIL_TEMPERATURE,
            LogicalField::Disease => aliases::DISEASE,
            LogicalField::Cases => aliases::CASES,
            LogicalField::AgeGroup => aliases::AGE_GROUP,
            LogicalField::Gender => aliases::GENDER,
            LogicalField::Severity => aliases::SEVERITY,
        }
    }
}

impl fmt::Display for LogicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogicalField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        LogicalField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == wanted)
            .ok_or_else(|| Error::configuration(format!("Unknown logical field '{}'", s)))
    }
}

/// Alias lookup table for every logical field
#[derive(Debug, Clone)]
pub struct AliasTable {
    aliases: HashMap<LogicalField, Vec<String>>,
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AliasTable {
    /// Table holding only the built-in aliases
    pub fn builtin() -> Self {
        let aliases = LogicalField::ALL
            .iter()
            .map(|field| {
                let names = field
                    .builtin_aliases()
                    .iter()
                    .map(|s| s.to_string())
                    .collect();
                (*field, names)
            })
            .collect();
        Self { aliases }
    }

    /// Built-in aliases followed by configured extras
    ///
    /// Extras keyed by an unknown field name are skipped with a warning.
    pub fn with_extras(extras: &HashMap<String, Vec<String>>) -> Self {
        let mut table = Self::builtin();
        for (name, columns) in extras {
            match name.parse::<LogicalField>() {
                Ok(field) => {
                    for column in columns {
                        table.push(field, column.clone());
                    }
                }
                Err(e) => warn!("Ignoring extra aliases: {}", e),
            }
        }
        table
    }

    /// Append an alias at the lowest priority; duplicates are ignored
    pub fn push(&mut self, field: LogicalField, column: impl Into<String>) {
        let column = column.into();
        let names = self.aliases.entry(field).or_default();
        if !names.iter().any(|n| n.eq_ignore_ascii_case(&column)) {
            names.push(column);
        }
    }

    /// Aliases for a field in priority order
    pub fn aliases(&self, field: LogicalField) -> &[String] {
        self.aliases.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First non-empty cell under any alias of `field`
    pub fn lookup<'a>(&self, row: &'a RawRow, field: LogicalField) -> Option<&'a FieldValue> {
        self.aliases(field)
            .iter()
            .filter_map(|alias| row.get_ignore_case(alias))
            .find(|value| !value.is_empty())
    }

    /// Name of the first alias present in a header, if any
    pub fn resolve_column<'h>(&self, headers: &'h [String], field: LogicalField) -> Option<&'h str> {
        self.aliases(field).iter().find_map(|alias| {
            headers
                .iter()
                .find(|h| h.eq_ignore_ascii_case(alias))
                .map(String::as_str)
        })
    }
}
