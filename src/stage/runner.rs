use tracing::{Span, info_span};

use crate::common::PipelineResult;

use super::{StageImpl, StageState};

/// Uniform execution envelope around a stage.
///
/// Logs the start and completion of the stage and tracks the execution
/// state. Any failure is logged in full and handed back to the caller
/// unchanged. There is no retry and no partial recovery.
#[derive(Debug)]
pub struct StageRunner<S>
where
    S: StageImpl,
{
    stage: S,
    span: Span,
    state: StageState,
}

impl<S> StageRunner<S>
where
    S: StageImpl,
{
    pub fn new(stage: S) -> Self {
        let span = info_span!("stage", name = stage.name());
        Self {
            stage,
            span,
            state: StageState::NotStarted,
        }
    }

    /// Replace the span the runner enters while executing.
    ///
    /// The default span is tagged with the stage identifier; callers that
    /// already carry a span of their own can thread it through here.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn name(&self) -> &'static str {
        self.stage.name()
    }

    pub fn state(&self) -> StageState {
        self.state
    }

    /// Execute the stage entry point inside the logging envelope.
    pub fn run(&mut self) -> PipelineResult<()> {
        let _guard = self.span.enter();

        self.state = StageState::Running;
        tracing::info!(">>>>>> stage {} started <<<<<<", self.stage.name());

        match self.stage.run() {
            Ok(()) => {
                self.state = StageState::Completed;
                tracing::info!(">>>>>> stage {} completed <<<<<<", self.stage.name());
                Ok(())
            }
            Err(err) => {
                self.state = StageState::Failed;
                tracing::error!("stage {} failed: {}", self.stage.name(), err);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;

    #[derive(Debug)]
    struct NoOpStage;

    impl StageImpl for NoOpStage {
        fn name(&self) -> &'static str {
            "No-Op Stage"
        }

        fn run(&self) -> PipelineResult<()> {
            Ok(())
        }
    }

    #[derive(Debug)]
    struct FailingStage;

    impl StageImpl for FailingStage {
        fn name(&self) -> &'static str {
            "Data Ingestion Stage"
        }

        fn run(&self) -> PipelineResult<()> {
            Err(PipelineError::pipeline_execution("disk full"))
        }
    }

    #[test]
    fn test_noop_stage_completes() {
        let mut runner = StageRunner::new(NoOpStage);
        assert_eq!(runner.state(), StageState::NotStarted);

        let result = runner.run();

        assert!(result.is_ok());
        assert_eq!(runner.state(), StageState::Completed);
    }

    #[test]
    fn test_failure_surfaces_identical_error() {
        let mut runner = StageRunner::new(FailingStage);

        let result = runner.run();

        assert_eq!(runner.state(), StageState::Failed);
        match result {
            Err(PipelineError::PipelineExecution(msg)) => assert_eq!(msg, "disk full"),
            other => panic!("Expected PipelineExecution error, got {:?}", other),
        }
    }

    #[test]
    fn test_boxed_stage_runs_through_runner() {
        let boxed: Box<dyn StageImpl> = Box::new(NoOpStage);
        let mut runner = StageRunner::new(boxed);

        assert_eq!(runner.name(), "No-Op Stage");
        assert!(runner.run().is_ok());
        assert_eq!(runner.state(), StageState::Completed);
    }

    #[test]
    fn test_runner_reports_stage_name() {
        let runner = StageRunner::new(FailingStage);
        assert_eq!(runner.name(), "Data Ingestion Stage");
    }
}
