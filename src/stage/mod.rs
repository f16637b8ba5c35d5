mod inner;
mod runner;

pub use inner::StageImpl;
pub use runner::StageRunner;

/// Execution state of a stage runner.
///
/// A run moves NotStarted -> Running -> Completed, or Running -> Failed
/// when the entry point returns an error. There is no way back out of
/// Failed; a fresh runner is a fresh run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageState {
    NotStarted,
    Running,
    Completed,
    Failed,
}
