//! Axum HTTP surface for the normalizers' host handlers.

pub mod routes;
pub mod state;

use crate::domain::ports::{ConfigProvider, PlantModel};
use crate::utils::error::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/disease", post(routes::detect_disease))
        .route("/api/identify", post(routes::identify_plant))
        .route("/api/suggestions", get(routes::suggestions))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub async fn run_server<C: ConfigProvider>(config: &C, model: Arc<dyn PlantModel>) -> Result<()> {
    let state = AppState::new(model);
    let app = create_router(state);

    let listener =
        tokio::net::TcpListener::bind((config.bind_address(), config.port())).await?;
    tracing::info!("plantscan listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
