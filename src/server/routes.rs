//! Request handlers.
//!
//! The disease and identify endpoints never surface 500s: an upstream failure
//! is recovered at this boundary and returned as an error-shaped record with
//! status 200, so the UI renders a friendly message without branching on
//! status codes. Suggestions use a success/error envelope instead.

use crate::core::{diagnosis, identification};
use crate::domain::model::{DiagnosisResult, IdentificationResult};
use crate::server::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct ImageRequest {
    pub image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionsQuery {
    pub region: Option<String>,
}

fn require_image(req: ImageRequest) -> std::result::Result<String, Response> {
    match req.image {
        Some(image) if !image.trim().is_empty() => Ok(image),
        _ => Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Image is required" })),
        )
            .into_response()),
    }
}

pub async fn detect_disease(
    State(state): State<AppState>,
    Json(req): Json<ImageRequest>,
) -> Response {
    let image = match require_image(req) {
        Ok(image) => image,
        Err(rejection) => return rejection,
    };

    match state.model.detect_disease(&image).await {
        Ok(text) => {
            tracing::debug!(raw = %text, "raw disease detection response");
            Json(diagnosis::extract_disease_info(&text)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "disease detection failed");
            Json(DiagnosisResult::upstream_error()).into_response()
        }
    }
}

pub async fn identify_plant(
    State(state): State<AppState>,
    Json(req): Json<ImageRequest>,
) -> Response {
    let image = match require_image(req) {
        Ok(image) => image,
        Err(rejection) => return rejection,
    };

    match state.model.identify_plant(&image).await {
        Ok(text) => {
            tracing::debug!(raw = %text, "raw identification response");
            Json(identification::parse_identification(&text)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "plant identification failed");
            Json(IdentificationResult::upstream_error()).into_response()
        }
    }
}

pub async fn suggestions(
    State(state): State<AppState>,
    Query(query): Query<SuggestionsQuery>,
) -> Response {
    let region = match query.region {
        Some(region) if !region.trim().is_empty() => region,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Region is required" })),
            )
                .into_response()
        }
    };

    match state.model.regional_suggestions(&region).await {
        Ok(data) => Json(json!({ "success": true, "data": data })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, region = %region, "fetching plant suggestions failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": "Failed to fetch plant suggestions" })),
            )
                .into_response()
        }
    }
}
