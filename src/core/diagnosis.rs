//! Best-effort extraction of a [`DiagnosisResult`] from free-text model output.
//!
//! The rules are heuristic and order-sensitive: later rules may overwrite
//! earlier ones (the healthy override runs after the name match on purpose).
//! Misses are not errors; each field falls back to its default.

use crate::domain::model::DiagnosisResult;
use once_cell::sync::Lazy;
use regex::Regex;

static NAME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)disease:?\s*([^.\n]+)",
        r"(?i)condition:?\s*([^.\n]+)",
        r"(?i)identified as:?\s*([^.\n]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static DESCRIPTION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)description:?\s*([^.\n]+(?:\.[^.\n]+)?)",
        r"(?i)symptoms:?\s*([^.\n]+(?:\.[^.\n]+)?)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static TREATMENT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)treatment:?\s*([^#]+?)(?:\n\n|\n#|$)",
        r"(?i)recommendations:?\s*([^#]+?)(?:\n\n|\n#|$)",
        r"(?i)manage:?\s*([^#]+?)(?:\n\n|\n#|$)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static PREVENTION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)prevention:?\s*([^#]+?)(?:\n\n|\n#|$)",
        r"(?i)prevent:?\s*([^#]+?)(?:\n\n|\n#|$)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static SUGGESTION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)suggestions?:?\s*([^#]+?)(?:\n\n|\n#|$)",
        r"(?i)recommendations?:?\s*([^#]+?)(?:\n\n|\n#|$)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

// Bullet (-, •, *) or numbered-list markers.
static LIST_MARKER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*[-•*]\s+|\s*\d+\.\s+").unwrap());

static SENTENCE_BOUNDARY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.\s+").unwrap());

/// First capture of the first matching pattern, trimmed, non-empty.
fn first_capture(text: &str, patterns: &[Regex]) -> Option<String> {
    patterns
        .iter()
        .filter_map(|re| re.captures(text))
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .find(|s| !s.is_empty())
}

/// Split a labeled section into its bullet/numbered items.
fn list_points(section: &str) -> Vec<String> {
    LIST_MARKER_RE
        .split(section)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Sentence-boundary fallback: keep only reasonably long fragments.
fn sentence_points(section: &str) -> Vec<String> {
    SENTENCE_BOUNDARY_RE
        .split(section)
        .map(str::trim)
        .filter(|s| s.len() > 10)
        .map(|s| format!("{}.", s.trim_end_matches('.')))
        .collect()
}

fn extract_points(text: &str, patterns: &[Regex]) -> Vec<String> {
    let Some(section) = first_capture(text, patterns) else {
        return Vec::new();
    };

    if LIST_MARKER_RE.is_match(&section) {
        list_points(&section)
    } else {
        sentence_points(&section)
    }
}

/// Extract structured disease info from the model's free-text response.
///
/// Never fails; fields the text does not yield stay at their defaults.
pub fn extract_disease_info(text: &str) -> DiagnosisResult {
    let mut info = DiagnosisResult::default();

    if text.trim().is_empty() {
        return info;
    }

    // Rule 1: explicit disease/condition label.
    if let Some(name) = first_capture(text, &NAME_PATTERNS) {
        info.name = name;
        info.confidence = 0.7;
    }

    // Rule 2: healthy override. Runs after the name match and may overwrite it.
    let lowered = text.to_lowercase();
    if lowered.contains("healthy") || lowered.contains("no disease") || lowered.contains("no issues")
    {
        info.name = "Healthy Plant".to_string();
        info.confidence = 0.8;
    }

    // Rule 3: labeled description, else the first one-to-two sentences.
    if let Some(description) = first_capture(text, &DESCRIPTION_PATTERNS) {
        info.description = description;
    } else {
        let first_sentences = SENTENCE_BOUNDARY_RE
            .split(text)
            .take(2)
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(". ");
        let first_sentences = format!("{}.", first_sentences.trim_end_matches('.'));
        if first_sentences.len() > 20 {
            info.description = first_sentences;
        }
    }

    // Rules 4 and 5: labeled treatment/prevention sections.
    info.treatment = extract_points(text, &TREATMENT_PATTERNS);
    info.prevention = extract_points(text, &PREVENTION_PATTERNS);

    // Rule 6: generic suggestions block when both lists came up empty.
    if info.treatment.is_empty() && info.prevention.is_empty() {
        if let Some(section) = first_capture(text, &SUGGESTION_PATTERNS) {
            let points = list_points(&section);
            if !points.is_empty() {
                info.treatment = points;
            }
        }
    }

    tracing::debug!(
        name = %info.name,
        confidence = info.confidence,
        treatment_points = info.treatment.len(),
        prevention_points = info.prevention.len(),
        "extracted disease info"
    );

    info
}
