use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use crate::common::PipelineResult;
use crate::config::LoggingConfig;
use crate::error::PipelineError;

/// Install the process-wide tracing subscriber.
///
/// Called once per process by the binaries before any stage runs; the
/// library itself never installs a subscriber. Log level is taken from
/// `RUST_LOG` when set, defaulting to `info`.
pub fn init(config: &LoggingConfig) -> PipelineResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_to_file {
        let file = std::fs::File::create(&config.log_file_path).map_err(|e| {
            PipelineError::pipeline_execution(format!(
                "cannot create log file {}: {e}",
                config.log_file_path
            ))
        })?;

        let file_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(Arc::new(file));
        let stdout_layer = tracing_subscriber::fmt::layer();

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(stdout_layer)
            .try_init()
            .map_err(|e| {
                PipelineError::pipeline_execution(format!("cannot initialize logging: {e}"))
            })?;
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init()
            .map_err(|e| {
                PipelineError::pipeline_execution(format!("cannot initialize logging: {e}"))
            })?;
    }

    Ok(())
}
