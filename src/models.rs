//! Analysis result data model.
//!
//! These types form the output of the accessibility analyzer and the wire
//! format of the HTTP API. Field names serialize in camelCase to match the
//! JSON consumed by the frontend.

use serde::{Deserialize, Serialize};

/// Result of the page title check.
///
/// # Invariants
///
/// `content` is `None` iff no `<title>` element exists. `is_empty` is true
/// iff the title is absent, empty, or whitespace-only after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleReport {
    /// Whether a `<title>` element was found in the document
    pub exists: bool,
    /// Trimmed title text, or `None` when no title element exists
    pub content: Option<String>,
    /// True when the title is missing, empty, or whitespace-only
    pub is_empty: bool,
}

/// Result of the image alt-text check.
///
/// `missing_alt_images` lists the `src` of each failing image in document
/// order (`"unknown"` when the image has no `src`), so its length always
/// equals `without_alt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageReport {
    /// Total number of `<img>` elements in the document
    pub total: usize,
    /// Number of images with an absent or empty `alt` attribute
    pub without_alt: usize,
    /// Source identifiers of the failing images, in document order
    pub missing_alt_images: Vec<String>,
}

/// Result of the input/label association check.
///
/// `total` counts labelable inputs only: `hidden`, `submit`, `button`,
/// `reset`, and `image` inputs are excluded entirely, not merely marked
/// passing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputReport {
    /// Number of labelable `<input>` elements in the document
    pub total: usize,
    /// Number of labelable inputs with no label association
    pub without_label: usize,
    /// Identifiers of the unlabeled inputs (id, else name, else `<type>-input`)
    pub inputs_without_label: Vec<String>,
}

/// Aggregate result of a single accessibility scan.
///
/// Immutable once constructed. Record identity (id, timestamp, duration) is
/// owned by the persistence layer, not by the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityResult {
    /// Title check outcome
    pub title: TitleReport,
    /// Image alt-text check outcome
    pub images: ImageReport,
    /// Input/label check outcome
    pub inputs: InputReport,
    /// Normalized score, `round(passed_checks / total_checks * 100)`
    pub score: u8,
    /// Number of passing checks (0..=3)
    pub passed_checks: u8,
    /// Number of checks performed (always 3)
    pub total_checks: u8,
}

/// Phase markers for progress events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressStep {
    /// Page content is being fetched
    Fetching,
    /// Title check is about to run
    Title,
    /// Image check is about to run
    Images,
    /// Input/label check is about to run
    Inputs,
    /// Result has been persisted
    Done,
    /// Analysis finished scoring
    Complete,
}

/// One-way progress notification emitted during an analysis.
///
/// Purely observational: delivery is best-effort and loss of an event never
/// affects the final [`AccessibilityResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEvent {
    /// Which phase the analysis is in
    pub step: ProgressStep,
    /// Fixed checkpoint percentage (0..=100), not proportional to work
    pub progress: u8,
    /// Human-readable description of the phase
    pub message: String,
}

impl ProgressEvent {
    /// Creates a progress event for the given checkpoint.
    pub fn new(step: ProgressStep, progress: u8, message: impl Into<String>) -> Self {
        Self {
            step,
            progress,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_serializes_camel_case() {
        let result = AccessibilityResult {
            title: TitleReport {
                exists: true,
                content: Some("Test".into()),
                is_empty: false,
            },
            images: ImageReport {
                total: 1,
                without_alt: 1,
                missing_alt_images: vec!["logo.png".into()],
            },
            inputs: InputReport {
                total: 0,
                without_label: 0,
                inputs_without_label: vec![],
            },
            score: 67,
            passed_checks: 2,
            total_checks: 3,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["images"]["withoutAlt"], 1);
        assert_eq!(json["images"]["missingAltImages"][0], "logo.png");
        assert_eq!(json["inputs"]["inputsWithoutLabel"], serde_json::json!([]));
        assert_eq!(json["passedChecks"], 2);
        assert_eq!(json["totalChecks"], 3);
        assert_eq!(json["title"]["isEmpty"], false);
    }

    #[test]
    fn test_progress_step_serializes_lowercase() {
        let event = ProgressEvent::new(ProgressStep::Fetching, 10, "Fetching URL content...");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["step"], "fetching");
        assert_eq!(json["progress"], 10);
    }
}
