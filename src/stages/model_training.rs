use crate::common::PipelineResult;
use crate::config::TrainingConfig;
use crate::stage::StageImpl;

pub const STAGE_NAME: &str = "Model Training Stage";

/// Trains the model on the data prepared by the earlier stages and
/// writes the resulting artifacts to the configured directory.
///
/// The training body is not implemented yet; running the stage succeeds
/// without producing artifacts.
#[derive(Debug, Default)]
pub struct ModelTrainingStage {
    config: TrainingConfig,
}

impl ModelTrainingStage {
    pub fn new(config: TrainingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }
}

impl StageImpl for ModelTrainingStage {
    fn name(&self) -> &'static str {
        STAGE_NAME
    }

    fn run(&self) -> PipelineResult<()> {
        Ok(())
    }
}
