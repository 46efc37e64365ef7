pub mod diagnosis;
pub mod identification;

pub use crate::domain::model::{DiagnosisResult, IdentificationResult, PlantSuggestion};
pub use crate::domain::ports::{ConfigProvider, PlantModel};
pub use crate::utils::error::Result;
