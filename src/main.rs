use trainflow::common::PipelineResult;
use trainflow::config::PipelineConfig;
use trainflow::pipeline::PipelineBuilder;
use trainflow::stages::{DataIngestionStage, DataValidationStage, ModelTrainingStage};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> PipelineResult<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "pipeline.toml".to_string());
    let config = PipelineConfig::load(&config_path)?;
    trainflow::logging::init(&config.logging)?;

    let mut pipeline = PipelineBuilder::new()
        .stage(DataIngestionStage::new(config.ingestion))
        .stage(DataValidationStage::new(config.validation))
        .stage(ModelTrainingStage::new(config.training))
        .build();

    pipeline.run()
}
