//! Recovery of an [`IdentificationResult`] from model text that should, but is
//! not guaranteed to, contain a JSON object (possibly inside a markdown fence).

use crate::domain::model::IdentificationResult;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static FENCED_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(?:json)?(.*?)```").unwrap());

/// Strip markdown code fences from model output.
///
/// Two passes: a naive prefix/suffix strip when the whole response is fenced,
/// then an anywhere-in-the-text fenced-block search. Each catches malformed
/// shapes the other misses, so both are kept.
pub fn strip_code_fences(text: &str) -> String {
    let mut cleaned = text.trim().to_string();

    if cleaned.starts_with("```") {
        if let Some(rest) = cleaned.strip_prefix("```json") {
            cleaned = rest.to_string();
        } else if let Some(rest) = cleaned.strip_prefix("```") {
            cleaned = rest.to_string();
        }
        if let Some(rest) = cleaned.strip_suffix("```") {
            cleaned = rest.to_string();
        }
    }

    if let Some(caps) = FENCED_BLOCK_RE.captures(&cleaned) {
        cleaned = caps[1].to_string();
    }

    cleaned.trim().to_string()
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn string_items(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| match v.as_str() {
                Some(s) => s.to_string(),
                None => v.to_string(),
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Map a parsed JSON value onto the result record, defaulting every missing or
/// mistyped field.
fn coerce_identification(value: &Value) -> IdentificationResult {
    IdentificationResult {
        name: non_empty_str(value.get("name")).unwrap_or_else(|| "Unknown Plant".to_string()),
        scientific_name: non_empty_str(value.get("scientificName"))
            .unwrap_or_else(|| "Unknown".to_string()),
        description: non_empty_str(value.get("description"))
            .unwrap_or_else(|| "No description available".to_string()),
        care_tips: string_items(value.get("careTips")),
        problems: string_items(value.get("problems")),
        confidence: value.get("confidence").and_then(Value::as_f64).unwrap_or(0.0),
    }
}

/// Parse the model's identification text into a result record.
///
/// Parse failure is recovered locally as [`IdentificationResult::parse_error`];
/// both the raw and the cleaned text are logged for offline debugging.
pub fn parse_identification(text: &str) -> IdentificationResult {
    let cleaned = strip_code_fences(text);
    tracing::debug!(cleaned = %cleaned, "cleaned identification text");

    match serde_json::from_str::<Value>(&cleaned) {
        Ok(value) => coerce_identification(&value),
        Err(e) => {
            tracing::error!(
                error = %e,
                raw = %text,
                cleaned = %cleaned,
                "identification response was not valid JSON"
            );
            IdentificationResult::parse_error()
        }
    }
}
