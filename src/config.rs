//! Configuration management and validation.
//!
//! Provides configuration structures for dataset discovery, CSV parsing
//! policy, field normalization defaults and dashboard settings. Values are
//! layered: built-in defaults, then an optional TOML file, then environment
//! overrides.

use crate::app::models::DatasetKind;
use crate::app::services::csv_parser::RowLengthPolicy;
use crate::constants::{
    DEFAULT_CLIMATE_DATASET, DEFAULT_DATA_DIR, DEFAULT_HEALTH_DATASET, DEFAULT_RECENT_DAYS,
    ENV_DATA_DIR, ENV_LOG_LEVEL, defaults,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Name of the configuration file inside the user config directory
const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory inside the user config directory
const CONFIG_DIR_NAME: &str = "health-climate";

/// One dataset to fetch at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSource {
    /// Which normalizer the rows go through
    pub kind: DatasetKind,

    /// Glob pattern, relative to `data_dir` unless absolute
    pub pattern: String,

    /// A required source that fails to load aborts the whole load
    #[serde(default)]
    pub required: bool,
}

impl DatasetSource {
    pub fn new(kind: DatasetKind, pattern: impl Into<String>) -> Self {
        Self {
            kind,
            pattern: pattern.into(),
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Pattern resolved against the data directory
    pub fn resolve(&self, data_dir: &Path) -> PathBuf {
        let pattern = Path::new(&self.pattern);
        if pattern.is_absolute() {
            pattern.to_path_buf()
        } else {
            data_dir.join(pattern)
        }
    }
}

/// CSV parser settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Treatment of rows whose field count differs from the header
    pub row_length_policy: RowLengthPolicy,
}

/// Field normalizer defaults and alias extensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    pub climate_city: String,
    pub health_city: String,
    pub climate_barangay: String,
    pub health_barangay: String,
    pub climate_source: String,
    pub health_source: String,
    pub climate_category: String,
    pub health_category: String,

    /// Extra source columns per logical field, tried after the built-in aliases
    pub extra_aliases: HashMap<String, Vec<String>>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            climate_city: defaults::CLIMATE_CITY.to_string(),
            health_city: defaults::HEALTH_CITY.to_string(),
            climate_barangay: defaults::CLIMATE_BARANGAY.to_string(),
            health_barangay: defaults::HEALTH_BARANGAY.to_string(),
            climate_source: defaults::CLIMATE_SOURCE.to_string(),
            health_source: defaults::HEALTH_SOURCE.to_string(),
            climate_category: defaults::CLIMATE_CATEGORY.to_string(),
            health_category: defaults::HEALTH_CATEGORY.to_string(),
            extra_aliases: HashMap::new(),
        }
    }
}

impl NormalizerConfig {
    /// Register an extra source column for a logical field
    pub fn with_alias(mut self, field: impl Into<String>, column: impl Into<String>) -> Self {
        self.extra_aliases
            .entry(field.into())
            .or_default()
            .push(column.into());
        self
    }
}

/// Dashboard view settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Look-back window for "recent records" in days
    pub recent_days: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            recent_days: DEFAULT_RECENT_DAYS,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory the datasets are read from
    pub data_dir: PathBuf,

    /// Datasets merged into the repository at startup
    pub datasets: Vec<DatasetSource>,

    pub parser: ParserConfig,
    pub normalizer: NormalizerConfig,
    pub dashboard: DashboardConfig,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".").join(DEFAULT_DATA_DIR),
            datasets: vec![
                DatasetSource::new(DatasetKind::Climate, DEFAULT_CLIMATE_DATASET).required(),
                DatasetSource::new(DatasetKind::Health, DEFAULT_HEALTH_DATASET),
            ],
            parser: ParserConfig::default(),
            normalizer: NormalizerConfig::default(),
            dashboard: DashboardConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Default configuration file location in the user config directory
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Parse a TOML document; absent keys keep their defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML configuration file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file {}", path.display()),
                e,
            )
        })?;
        Self::from_toml_str(&text)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::configuration(format!("Failed to serialize config: {}", e)))
    }

    /// Load with layered configuration (defaults -> file -> environment)
    ///
    /// A missing file is not an error; the defaults are used instead.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) if path.exists() => {
                info!("Using config file: {}", path.display());
                Self::load_from_file(path)?
            }
            Some(path) => {
                debug!("Config file {} not found, using defaults", path.display());
                Self::default()
            }
            None => {
                info!("No config file given, using defaults and environment variables");
                Self::default()
            }
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides read through `lookup`
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|v| !v.trim().is_empty()) {
            debug!("{} overrides data_dir to {}", ENV_DATA_DIR, dir);
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|v| !v.trim().is_empty()) {
            debug!("{} overrides log level to {}", ENV_LOG_LEVEL, level);
            self.logging.level = level;
        }
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.datasets.is_empty() {
            return Err(Error::configuration("At least one dataset must be configured"));
        }

        for source in &self.datasets {
            if source.pattern.trim().is_empty() {
                return Err(Error::configuration(format!(
                    "Dataset pattern for {} data must not be blank",
                    source.kind
                )));
            }
            if source.kind == DatasetKind::Manual {
                return Err(Error::configuration(
                    "Manual records cannot be loaded from a dataset file",
                ));
            }
        }

        if self.dashboard.recent_days == 0 {
            return Err(Error::configuration("dashboard.recent_days must be at least 1"));
        }

        crate::logging::normalize_level(&self.logging.level)?;

        Ok(())
    }

    /// Set the dataset directory
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Replace the dataset list
    pub fn with_datasets(mut self, datasets: Vec<DatasetSource>) -> Self {
        self.datasets = datasets;
        self
    }

    /// Add one dataset
    pub fn with_dataset(mut self, source: DatasetSource) -> Self {
        self.datasets.push(source);
        self
    }

    /// Use the strict row-length policy
    pub fn with_strict_parsing(mut self) -> Self {
        self.parser.row_length_policy = RowLengthPolicy::Strict;
        self
    }

    /// Set the normalizer defaults
    pub fn with_normalizer(mut self, normalizer: NormalizerConfig) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Set the dashboard look-back window
    pub fn with_recent_days(mut self, days: u32) -> Self {
        self.dashboard.recent_days = days;
        self
    }

    /// Set the log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }
}
