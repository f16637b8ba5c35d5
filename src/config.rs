use std::path::Path;

use serde::Deserialize;

use crate::common::PipelineResult;
use crate::error::PipelineError;

/// Top-level configuration for a pipeline run.
///
/// Every section has defaults so the pipeline can run with no config
/// file at all.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct PipelineConfig {
    pub logging: LoggingConfig,
    pub ingestion: IngestionConfig,
    pub validation: ValidationConfig,
    pub training: TrainingConfig,
}

impl PipelineConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml(raw: &str) -> PipelineResult<Self> {
        toml::from_str(raw)
            .map_err(|e| PipelineError::pipeline_execution(format!("invalid configuration: {e}")))
    }

    /// Load configuration from a TOML file.
    ///
    /// A missing file yields the defaults; an unreadable or malformed
    /// file is an error.
    pub fn load(path: impl AsRef<Path>) -> PipelineResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|e| {
            PipelineError::pipeline_execution(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml(&raw)
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_to_file: bool,
    pub log_file_path: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_to_file: false,
            log_file_path: "logs/trainflow.log".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct IngestionConfig {
    /// Where raw data is collected from.
    pub source_uri: String,
    /// Directory the ingested artifacts land in.
    pub raw_data_dir: String,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            source_uri: String::new(),
            raw_data_dir: "artifacts/data_ingestion".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub schema_path: String,
    /// File the validation verdict is written to.
    pub status_file: String,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            schema_path: "schema.toml".to_string(),
            status_file: "artifacts/data_validation/status.txt".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    pub model_dir: String,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            model_dir: "artifacts/model_training".to_string(),
        }
    }
}
