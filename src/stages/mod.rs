pub mod data_ingestion;
pub mod data_validation;
pub mod model_training;

pub use data_ingestion::DataIngestionStage;
pub use data_validation::DataValidationStage;
pub use model_training::ModelTrainingStage;
