//! Startup dataset loading
//!
//! This is the only asynchronous boundary of the core. Each configured
//! source is a glob pattern; matching files are read with `tokio::fs`, parsed,
//! normalized for the source's dataset kind and merged in configuration
//! order. A failing required source aborts the load; a failing optional
//! source is logged and contributes nothing.

use crate::app::models::{CanonicalRecord, DatasetKind};
use crate::app::services::csv_parser::{CsvParser, ParseStats};
use crate::app::services::field_normalizer::{FieldNormalizer, NormalizeStats};
use crate::app::services::record_repository::RecordRepository;
use crate::config::{Config, DatasetSource};
use crate::{Error, Result};
use futures::stream::{self, StreamExt};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

/// Sources read concurrently
const CONCURRENT_SOURCES: usize = 4;

/// Outcome of one configured source
#[derive(Debug, Clone, PartialEq)]
pub struct SourceReport {
    pub kind: DatasetKind,
    pub pattern: String,
    pub files: Vec<PathBuf>,
    pub records: usize,
    pub parse_stats: ParseStats,
    pub normalize_stats: NormalizeStats,
    /// Set when an optional source failed
    pub error: Option<String>,
}

impl SourceReport {
    fn failed(source: &DatasetSource, error: &Error) -> Self {
        Self {
            kind: source.kind,
            pattern: source.pattern.clone(),
            files: Vec::new(),
            records: 0,
            parse_stats: ParseStats::new(),
            normalize_stats: NormalizeStats::new(),
            error: Some(error.to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Records merged from every source plus per-source reports
#[derive(Debug, Clone)]
pub struct DatasetLoad {
    pub records: Vec<CanonicalRecord>,
    pub sources: Vec<SourceReport>,
}

impl DatasetLoad {
    pub fn failed_sources(&self) -> usize {
        self.sources.iter().filter(|s| !s.is_ok()).count()
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "{} records from {} sources ({} failed)",
            self.records.len(),
            self.sources.len(),
            self.failed_sources()
        )
    }
}

/// Reads, parses and normalizes the configured datasets
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    data_dir: PathBuf,
    sources: Vec<DatasetSource>,
    parser: CsvParser,
    normalizer: FieldNormalizer,
}

impl DatasetLoader {
    pub fn new(config: &Config) -> Self {
        Self {
            data_dir: config.data_dir.clone(),
            sources: config.datasets.clone(),
            parser: CsvParser::new(config.parser.row_length_policy),
            normalizer: FieldNormalizer::new(config.normalizer.clone()),
        }
    }

    pub fn sources(&self) -> &[DatasetSource] {
        &self.sources
    }

    /// Files matching a source's pattern, sorted by path
    pub fn discover(&self, source: &DatasetSource) -> Result<Vec<PathBuf>> {
        let pattern = source.resolve(&self.data_dir);
        let pattern = pattern.to_string_lossy();

        let mut files = Vec::new();
        for entry in glob::glob(&pattern)? {
            match entry {
                Ok(path) if path.is_file() => files.push(path),
                Ok(path) => debug!("Skipping non-file match {}", path.display()),
                Err(e) => warn!("Unreadable match for '{}': {}", pattern, e),
            }
        }
        files.sort();

        if files.is_empty() {
            return Err(Error::dataset_load(
                source.pattern.clone(),
                format!("no files match {}", pattern),
            ));
        }
        Ok(files)
    }

    /// Load every file of one source, in path order
    pub async fn load_source(&self, source: &DatasetSource) -> Result<(Vec<CanonicalRecord>, SourceReport)> {
        let files = self.discover(source)?;
        let mut records = Vec::new();
        let mut parse_stats = ParseStats::new();
        let mut normalize_stats = NormalizeStats::new();

        for path in &files {
            let (file_records, parsed, normalized) = self.load_file(source.kind, path).await?;
            records.extend(file_records);
            merge_parse_stats(&mut parse_stats, &parsed);
            normalize_stats.merge(&normalized);
        }

        let report = SourceReport {
            kind: source.kind,
            pattern: source.pattern.clone(),
            files,
            records: records.len(),
            parse_stats,
            normalize_stats,
            error: None,
        };
        Ok((records, report))
    }

    async fn load_file(
        &self,
        kind: DatasetKind,
        path: &Path,
    ) -> Result<(Vec<CanonicalRecord>, ParseStats, NormalizeStats)> {
        let text = fs::read_to_string(path)
            .await
            .map_err(|e| Error::io(format!("Failed to read dataset {}", path.display()), e))?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let parsed = self.parser.try_parse(&file_name, &text)?;
        debug!("Parsed {}: {}", file_name, parsed.stats.summary());

        let normalized = self.normalizer.normalize_rows(kind, &parsed.rows, &file_name);
        Ok((normalized.records, parsed.stats, normalized.stats))
    }

    /// Load every source, merging records in configuration order
    pub async fn load_all(&self) -> Result<DatasetLoad> {
        let results: Vec<(&DatasetSource, Result<(Vec<CanonicalRecord>, SourceReport)>)> =
            stream::iter(self.sources.iter())
                .map(|source| async move { (source, self.load_source(source).await) })
                .buffered(CONCURRENT_SOURCES)
                .collect()
                .await;

        let mut records = Vec::new();
        let mut sources = Vec::with_capacity(results.len());

        for (source, result) in results {
            match result {
                Ok((source_records, report)) => {
                    info!(
                        "Loaded {} {} records from '{}'",
                        report.records, source.kind, source.pattern
                    );
                    records.extend(source_records);
                    sources.push(report);
                }
                Err(e) if source.required => {
                    return Err(match e {
                        Error::DatasetLoad { .. } => e,
                        other => Error::dataset_load(source.pattern.clone(), other.to_string()),
                    });
                }
                Err(e) => {
                    warn!("Optional dataset '{}' not loaded: {}", source.pattern, e);
                    sources.push(SourceReport::failed(source, &e));
                }
            }
        }

        let load = DatasetLoad { records, sources };
        info!("Dataset load complete: {}", load.summary());
        Ok(load)
    }
}

fn merge_parse_stats(total: &mut ParseStats, other: &ParseStats) {
    total.total_lines += other.total_lines;
    total.rows_parsed += other.rows_parsed;
    total.blank_lines_skipped += other.blank_lines_skipped;
    total.short_rows += other.short_rows;
    total.long_rows += other.long_rows;
    total.numeric_fields += other.numeric_fields;
}

/// Build a loaded repository for the application entry point
pub async fn bootstrap(config: &Config) -> Result<RecordRepository> {
    config.validate()?;
    let load = DatasetLoader::new(config).load_all().await?;
    Ok(RecordRepository::with_records(load.records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{FilterSpec, RecordType};
    use tempfile::TempDir;

    const CLIMATE_CSV: &str = "uuid,City,Barangay,date,tave,tmin,tmax,heat_index,wind_speed,rh,solar_rad,uv_rad\n\
        1,Davao City,Poblacion,2024-01-05,28.4,24.1,32.6,31.0,3.2,78,210.5,7.1\n\
        2,Davao City,Talomo,2024-01-06,27.9,23.8,31.9,30.2,2.8,81,198.0,6.4\n";

    const DISEASE_CSV: &str = "Id,Date,Disease,Cases,Source\r\n\
        1,01/05/2024,Dengue Cases,12,PIDSR\r\n\
        2,01/06/2024,Respiratory Cases,7,PIDSR\r\n";

    async fn write(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).await.unwrap();
    }

    fn config_for(dir: &TempDir) -> Config {
        Config::default().with_data_dir(dir.path())
    }

    #[tokio::test]
    async fn test_bootstrap_merges_both_datasets() {
        let dir = TempDir::new().unwrap();
        write(&dir, "sampledDataset.csv", CLIMATE_CSV).await;
        write(&dir, "sampledDiseaseDataset.csv", DISEASE_CSV).await;

        let repository = bootstrap(&config_for(&dir)).await.unwrap();

        assert_eq!(repository.len(), 4);
        let climate = repository.query(&FilterSpec::new().with_type(RecordType::Climate));
        let health = repository.query(&FilterSpec::new().with_type(RecordType::Health));
        assert_eq!(climate.len(), 2);
        assert_eq!(health.len(), 2);
        // Same source ids in both datasets stay distinct
        assert_ne!(climate[0].id, health[0].id);
        assert_eq!(
            health[0].metadata.imported_from.as_deref(),
            Some("sampledDiseaseDataset.csv")
        );
    }

    #[tokio::test]
    async fn test_records_follow_configuration_order() {
        let dir = TempDir::new().unwrap();
        write(&dir, "sampledDataset.csv", CLIMATE_CSV).await;
        write(&dir, "sampledDiseaseDataset.csv", DISEASE_CSV).await;

        let load = DatasetLoader::new(&config_for(&dir)).load_all().await.unwrap();
        let kinds: Vec<DatasetKind> = load.records.iter().map(|r| r.id.kind).collect();
        assert_eq!(
            kinds,
            vec![
                DatasetKind::Climate,
                DatasetKind::Climate,
                DatasetKind::Health,
                DatasetKind::Health
            ]
        );
        assert_eq!(load.sources[0].parse_stats.rows_parsed, 2);
        assert_eq!(load.failed_sources(), 0);
    }

    #[tokio::test]
    async fn test_missing_optional_source_is_a_warning() {
        let dir = TempDir::new().unwrap();
        write(&dir, "sampledDataset.csv", CLIMATE_CSV).await;

        let load = DatasetLoader::new(&config_for(&dir)).load_all().await.unwrap();
        assert_eq!(load.records.len(), 2);
        assert_eq!(load.failed_sources(), 1);
        assert!(load.sources[1].error.is_some());
    }

    #[tokio::test]
    async fn test_missing_required_source_fails() {
        let dir = TempDir::new().unwrap();
        write(&dir, "sampledDiseaseDataset.csv", DISEASE_CSV).await;

        let err = bootstrap(&config_for(&dir)).await.unwrap_err();
        assert!(matches!(err, Error::DatasetLoad { .. }));
    }

    #[tokio::test]
    async fn test_empty_required_file_fails() {
        let dir = TempDir::new().unwrap();
        write(&dir, "sampledDataset.csv", "").await;

        let err = DatasetLoader::new(&config_for(&dir)).load_all().await.unwrap_err();
        match err {
            Error::DatasetLoad { source_name, message } => {
                assert_eq!(source_name, "sampledDataset.csv");
                assert!(message.contains("no header"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_glob_pattern_reads_files_in_path_order() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("climate")).await.unwrap();
        write(&dir, "climate/2024-02.csv", "barangay,date,temperature\nTalomo,2024-02-01,29\n").await;
        write(&dir, "climate/2024-01.csv", "barangay,date,temperature\nTalomo,2024-01-01,27\n").await;

        let config = config_for(&dir).with_datasets(vec![
            DatasetSource::new(DatasetKind::Climate, "climate/*.csv").required(),
        ]);
        let load = DatasetLoader::new(&config).load_all().await.unwrap();

        assert_eq!(load.sources[0].files.len(), 2);
        let values: Vec<Option<f64>> = load.records.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![Some(27.0), Some(29.0)]);
    }

    #[tokio::test]
    async fn test_invalid_config_is_rejected_before_loading() {
        let dir = TempDir::new().unwrap();
        let err = bootstrap(&config_for(&dir).with_datasets(vec![])).await.unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }
}
