use std::fmt::Debug;

use crate::common::PipelineResult;

/// A single pipeline phase: a human-readable identifier and one
/// entry-point operation.
///
/// The entry point takes no input beyond whatever the stage was
/// constructed with and produces no output; any error it returns is
/// propagated unchanged by the surrounding [`StageRunner`].
///
/// [`StageRunner`]: super::StageRunner
pub trait StageImpl: Send + Sync + Debug {
    /// Identifier used to tag the log envelope, e.g. "Data Ingestion Stage".
    fn name(&self) -> &'static str;

    fn run(&self) -> PipelineResult<()>;
}

impl StageImpl for Box<dyn StageImpl> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn run(&self) -> PipelineResult<()> {
        (**self).run()
    }
}
