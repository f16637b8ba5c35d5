use crate::error::PipelineError;

pub type PipelineResult<T> = std::result::Result<T, PipelineError>;
