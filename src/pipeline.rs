use crate::common::PipelineResult;
use crate::stage::{StageImpl, StageRunner, StageState};

/// Ordered, synchronous sequence of stage runners.
///
/// Stages execute one after another on the calling thread. The first
/// failure stops the run and surfaces unchanged to the caller; stages
/// after a failed one are never invoked.
#[derive(Debug, Default)]
pub struct Pipeline {
    stages: Vec<StageRunner<Box<dyn StageImpl>>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Stage identifiers in execution order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|runner| runner.name()).collect()
    }

    /// State of every runner, in execution order.
    pub fn states(&self) -> Vec<StageState> {
        self.stages.iter().map(|runner| runner.state()).collect()
    }

    /// Run every stage in order, stopping at the first failure.
    pub fn run(&mut self) -> PipelineResult<()> {
        for runner in &mut self.stages {
            runner.run()?;
        }
        Ok(())
    }
}

/// Builder assembling a [`Pipeline`] stage by stage.
pub struct PipelineBuilder {
    stages: Vec<StageRunner<Box<dyn StageImpl>>>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage to the end of the sequence.
    pub fn stage<S>(mut self, stage: S) -> Self
    where
        S: StageImpl + 'static,
    {
        let boxed: Box<dyn StageImpl> = Box::new(stage);
        self.stages.push(StageRunner::new(boxed));
        self
    }

    pub fn build(self) -> Pipeline {
        Pipeline {
            stages: self.stages,
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
