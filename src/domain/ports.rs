use crate::domain::model::PlantSuggestion;
use crate::utils::error::Result;
use async_trait::async_trait;

/// The external model-inference collaborator. Treated as opaque, possibly slow
/// and possibly failing; handlers never let its errors cross the HTTP boundary
/// as raw failures.
#[async_trait]
pub trait PlantModel: Send + Sync {
    /// Free-text health analysis of the plant in `image` (base64 or URL).
    async fn detect_disease(&self, image: &str) -> Result<String>;

    /// Raw identification text, expected (but not guaranteed) to contain JSON.
    async fn identify_plant(&self, image: &str) -> Result<String>;

    /// Structured planting suggestions for an Indian region.
    async fn regional_suggestions(&self, region: &str) -> Result<Vec<PlantSuggestion>>;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> &str;
    fn port(&self) -> u16;
    fn api_key(&self) -> &str;
    fn model_name(&self) -> &str;
    fn api_base_url(&self) -> &str;
}
