//! Gemini `generateContent` client implementing the [`PlantModel`] port.

use crate::core::identification::strip_code_fences;
use crate::domain::model::PlantSuggestion;
use crate::domain::ports::{ConfigProvider, PlantModel};
use crate::utils::error::{PlantError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

impl Part {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    fn inline(mime_type: String, data: String) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData { mime_type, data }),
        }
    }
}

#[derive(Debug, Serialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

impl GeminiClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base_url().trim_end_matches('/').to_string(),
            api_key: config.api_key().to_string(),
            model: config.model_name().to_string(),
        }
    }

    /// Build the parts for an image-based prompt. URLs are referenced in the
    /// prompt text; anything else is treated as base64 image data, with an
    /// optional data-URL header carrying the mime type.
    fn image_parts(prompt: &str, image: &str) -> Vec<Part> {
        if image.starts_with("http://") || image.starts_with("https://") {
            return vec![Part::text(format!("{}\n\nImage URL: {}", prompt, image))];
        }

        let (mime_type, data) = match image.split_once(";base64,") {
            Some((header, data)) => (
                header.trim_start_matches("data:").to_string(),
                data.to_string(),
            ),
            None => ("image/jpeg".to_string(), image.to_string()),
        };

        vec![Part::text(prompt), Part::inline(mime_type, data)]
    }

    async fn generate(&self, parts: Vec<Part>) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        tracing::debug!(model = %self.model, "calling Gemini generateContent");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&GenerateContentRequest {
                contents: vec![Content { parts }],
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, %body, "Gemini request failed");
            return Err(PlantError::ModelError {
                message: format!("Gemini returned status {}", status),
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;

        let text = parsed
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .map(|p| p.text)
            .collect::<Vec<_>>()
            .join("");

        if text.trim().is_empty() {
            return Err(PlantError::ModelError {
                message: "model returned no candidates".to_string(),
            });
        }

        Ok(text)
    }
}

#[async_trait]
impl PlantModel for GeminiClient {
    async fn detect_disease(&self, image: &str) -> Result<String> {
        let prompt = "Analyze this plant photo for signs of disease. \
            Respond with sections labeled Disease, Description, Treatment and Prevention. \
            Use bullet points for the treatment and prevention steps. \
            If the plant looks healthy, say so explicitly.";
        self.generate(Self::image_parts(prompt, image)).await
    }

    async fn identify_plant(&self, image: &str) -> Result<String> {
        let prompt = "Identify the plant in this photo. Respond with only a JSON object \
            containing the fields: name, scientificName, description, \
            careTips (array of strings), problems (array of strings) and \
            confidence (number between 0 and 1).";
        self.generate(Self::image_parts(prompt, image)).await
    }

    async fn regional_suggestions(&self, region: &str) -> Result<Vec<PlantSuggestion>> {
        let prompt = format!(
            "List plants well suited to growing in the {} region of India. \
            Respond with only a JSON array of objects containing the fields: \
            name, scientificName, description.",
            region
        );

        let text = self.generate(vec![Part::text(prompt)]).await?;
        let cleaned = strip_code_fences(&text);
        let suggestions: Vec<PlantSuggestion> = serde_json::from_str(&cleaned)?;
        Ok(suggestions)
    }
}
