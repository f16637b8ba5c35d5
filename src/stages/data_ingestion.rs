use crate::common::PipelineResult;
use crate::config::IngestionConfig;
use crate::stage::StageImpl;

pub const STAGE_NAME: &str = "Data Ingestion Stage";

/// Collects raw data and lands it where the rest of the pipeline can
/// reach it.
///
/// The orchestration body is not implemented yet: running the stage
/// succeeds without touching the filesystem or the configured source.
#[derive(Debug, Default)]
pub struct DataIngestionStage {
    config: IngestionConfig,
}

impl DataIngestionStage {
    pub fn new(config: IngestionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IngestionConfig {
        &self.config
    }
}

impl StageImpl for DataIngestionStage {
    fn name(&self) -> &'static str {
        STAGE_NAME
    }

    fn run(&self) -> PipelineResult<()> {
        Ok(())
    }
}
