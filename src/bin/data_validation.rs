use trainflow::common::PipelineResult;
use trainflow::config::PipelineConfig;
use trainflow::stage::StageRunner;
use trainflow::stages::DataValidationStage;

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

    StageRunner::new(DataValidationStage::new(config.validation)).run()
}
