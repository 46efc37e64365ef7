use serde::{Deserialize, Serialize};

/// Diagnosis record built from the model's free-text health analysis.
///
/// Always fully populated: extraction degrades to the defaults in
/// [`DiagnosisResult::default`] rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisResult {
    pub name: String,
    pub description: String,
    pub treatment: Vec<String>,
    pub prevention: Vec<String>,
    pub confidence: f64,
}

impl Default for DiagnosisResult {
    fn default() -> Self {
        Self {
            name: "No issues detected".to_string(),
            description: "The plant appears healthy based on the visible parts.".to_string(),
            treatment: Vec::new(),
            prevention: Vec::new(),
            confidence: 0.5,
        }
    }
}

impl DiagnosisResult {
    /// Sentinel record returned when the upstream model call itself fails.
    pub fn upstream_error() -> Self {
        Self {
            name: "Error".to_string(),
            description: "Failed to analyze plant health".to_string(),
            treatment: Vec::new(),
            prevention: Vec::new(),
            confidence: 0.0,
        }
    }
}

/// Identification record recovered from the model's (ideally JSON) response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentificationResult {
    pub name: String,
    pub scientific_name: String,
    pub description: String,
    pub care_tips: Vec<String>,
    pub problems: Vec<String>,
    pub confidence: f64,
}

impl IdentificationResult {
    /// Sentinel record for responses that could not be parsed as JSON.
    pub fn parse_error() -> Self {
        Self {
            name: "Error".to_string(),
            scientific_name: "Unknown".to_string(),
            description:
                "Could not identify plant. The system encountered an error processing the image."
                    .to_string(),
            care_tips: Vec::new(),
            problems: vec!["Failed to process the identification data".to_string()],
            confidence: 0.0,
        }
    }

    /// Sentinel record returned when the upstream model call itself fails.
    pub fn upstream_error() -> Self {
        Self {
            name: "Error".to_string(),
            scientific_name: "Unknown".to_string(),
            description: "Failed to identify plant".to_string(),
            care_tips: Vec::new(),
            problems: vec!["API error occurred".to_string()],
            confidence: 0.0,
        }
    }
}

/// One region-appropriate planting suggestion, passed through verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantSuggestion {
    pub name: String,
    pub scientific_name: String,
    pub description: String,
}
