pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use adapters::gemini::GeminiClient;
pub use config::CliConfig;
pub use domain::model::{DiagnosisResult, IdentificationResult, PlantSuggestion};
pub use domain::ports::{ConfigProvider, PlantModel};
pub use utils::error::{PlantError, Result};
