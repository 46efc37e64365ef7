//! Application state shared across handlers.

use crate::domain::ports::PlantModel;
use std::sync::Arc;

/// The model client is the only shared state; it is passed in so tests can
/// substitute a double.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn PlantModel>,
}

impl AppState {
    pub fn new(model: Arc<dyn PlantModel>) -> Self {
        Self { model }
    }
}
