use trainflow::config::PipelineConfig;
use trainflow::pipeline::PipelineBuilder;
use trainflow::stages::{DataIngestionStage, DataValidationStage, ModelTrainingStage};

fn main() {
    let config = PipelineConfig::default();
    trainflow::logging::init(&config.logging).expect("failed to initialize logging");

    let mut pipeline = PipelineBuilder::new()
        .stage(DataIngestionStage::new(config.ingestion))
        .stage(DataValidationStage::new(config.validation))
        .stage(ModelTrainingStage::new(config.training))
        .build();

    println!("running stages: {:?}", pipeline.stage_names());

    match pipeline.run() {
        Ok(()) => println!("pipeline finished: {:?}", pipeline.states()),
        Err(e) => println!("pipeline failed: {e}"),
    }
}
