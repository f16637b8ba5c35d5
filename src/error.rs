use thiserror::Error;

/// Failure kinds raised by the pipeline phases.
///
/// Each variant carries the descriptive message it was constructed with;
/// [`PipelineError::message`] hands it back unmodified.
#[derive(Error, Debug, Clone)]
pub enum PipelineError {
    #[error("Data validation failed: {0}")]
    DataValidation(String),

    #[error("Model training failed: {0}")]
    ModelTraining(String),

    #[error("Prediction failed: {0}")]
    Prediction(String),

    #[error("Pipeline execution failed: {0}")]
    PipelineExecution(String),
}

impl PipelineError {
    pub fn data_validation<S: Into<String>>(message: S) -> Self {
        PipelineError::DataValidation(message.into())
    }

    pub fn model_training<S: Into<String>>(message: S) -> Self {
        PipelineError::ModelTraining(message.into())
    }

    pub fn prediction<S: Into<String>>(message: S) -> Self {
        PipelineError::Prediction(message.into())
    }

    pub fn pipeline_execution<S: Into<String>>(message: S) -> Self {
        PipelineError::PipelineExecution(message.into())
    }

    /// The message supplied at construction, unmodified.
    pub fn message(&self) -> &str {
        match self {
            PipelineError::DataValidation(msg)
            | PipelineError::ModelTraining(msg)
            | PipelineError::Prediction(msg)
            | PipelineError::PipelineExecution(msg) => msg,
        }
    }
}
