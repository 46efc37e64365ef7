use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use plantscan::server::{create_router, state::AppState};
use plantscan::utils::error::{PlantError, Result};
use plantscan::{PlantModel, PlantSuggestion};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// Test double for the model-inference collaborator.
#[derive(Default)]
struct MockModel {
    disease_text: Option<String>,
    identify_text: Option<String>,
    suggestions: Option<Vec<PlantSuggestion>>,
    fail: bool,
}

#[async_trait]
impl PlantModel for MockModel {
    async fn detect_disease(&self, _image: &str) -> Result<String> {
        if self.fail {
            return Err(PlantError::ModelError {
                message: "upstream unavailable".to_string(),
            });
        }
        Ok(self.disease_text.clone().unwrap_or_default())
    }

    async fn identify_plant(&self, _image: &str) -> Result<String> {
        if self.fail {
            return Err(PlantError::ModelError {
                message: "upstream unavailable".to_string(),
            });
        }
        Ok(self.identify_text.clone().unwrap_or_default())
    }

    async fn regional_suggestions(&self, _region: &str) -> Result<Vec<PlantSuggestion>> {
        if self.fail {
            return Err(PlantError::ModelError {
                message: "upstream unavailable".to_string(),
            });
        }
        Ok(self.suggestions.clone().unwrap_or_default())
    }
}

fn app(model: MockModel) -> Router {
    create_router(AppState::new(Arc::new(model)))
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn disease_without_image_returns_400() {
    let response = app(MockModel::default())
        .oneshot(post_json("/api/disease", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Image is required");
}

#[tokio::test]
async fn disease_returns_extracted_record() {
    let model = MockModel {
        disease_text: Some(
            "Disease: Leaf Spot\nDescription: brown spots with halos\nTreatment:\n- remove leaves\n- apply fungicide"
                .to_string(),
        ),
        ..Default::default()
    };

    let response = app(model)
        .oneshot(post_json("/api/disease", json!({ "image": "aGVsbG8=" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["name"], "Leaf Spot");
    assert_eq!(body["confidence"], 0.7);
    assert_eq!(body["treatment"], json!(["remove leaves", "apply fungicide"]));
}

#[tokio::test]
async fn disease_upstream_failure_is_recovered_as_200() {
    let model = MockModel {
        fail: true,
        ..Default::default()
    };

    let response = app(model)
        .oneshot(post_json("/api/disease", json!({ "image": "aGVsbG8=" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["name"], "Error");
    assert_eq!(body["confidence"], 0.0);
    assert_eq!(body["treatment"], json!([]));
}

#[tokio::test]
async fn identify_parses_fenced_json() {
    let model = MockModel {
        identify_text: Some("```json\n{\"name\":\"Rose\",\"confidence\":0.9}\n```".to_string()),
        ..Default::default()
    };

    let response = app(model)
        .oneshot(post_json("/api/identify", json!({ "image": "aGVsbG8=" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["name"], "Rose");
    assert_eq!(body["confidence"], 0.9);
    assert_eq!(body["scientificName"], "Unknown");
    assert_eq!(body["careTips"], json!([]));
    assert_eq!(body["problems"], json!([]));
}

#[tokio::test]
async fn identify_prose_yields_error_record() {
    let model = MockModel {
        identify_text: Some("Looks like some kind of succulent to me.".to_string()),
        ..Default::default()
    };

    let response = app(model)
        .oneshot(post_json("/api/identify", json!({ "image": "aGVsbG8=" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["name"], "Error");
    assert!(!body["problems"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn identify_without_image_returns_400() {
    let response = app(MockModel::default())
        .oneshot(post_json("/api/identify", json!({ "image": "" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn suggestions_without_region_returns_400() {
    let response = app(MockModel::default())
        .oneshot(
            Request::builder()
                .uri("/api/suggestions")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Region is required");
}

#[tokio::test]
async fn suggestions_wrap_upstream_list_in_success_envelope() {
    let suggestion = |name: &str| PlantSuggestion {
        name: name.to_string(),
        scientific_name: format!("{} spp.", name),
        description: format!("{} grows well here", name),
    };
    let model = MockModel {
        suggestions: Some(vec![
            suggestion("Tulsi"),
            suggestion("Neem"),
            suggestion("Banana"),
        ]),
        ..Default::default()
    };

    let response = app(model)
        .oneshot(
            Request::builder()
                .uri("/api/suggestions?region=Kerala")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
    assert_eq!(body["data"][0]["name"], "Tulsi");
    assert_eq!(body["data"][0]["scientificName"], "Tulsi spp.");
}

#[tokio::test]
async fn suggestions_upstream_failure_returns_500_envelope() {
    let model = MockModel {
        fail: true,
        ..Default::default()
    };

    let response = app(model)
        .oneshot(
            Request::builder()
                .uri("/api/suggestions?region=Kerala")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Failed to fetch plant suggestions");
}
