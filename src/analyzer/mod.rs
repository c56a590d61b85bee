//! Accessibility analysis of parsed HTML documents.
//!
//! This module scans a document for three accessibility defects:
//! - Missing or empty page title
//! - Images without alternative text
//! - Form inputs without an associated label
//!
//! and derives a normalized 0-100 score from the three pass/fail checks.
//!
//! All scanning is done using CSS selectors via the `scraper` crate. The
//! entry point [`analyze`] is a pure function of the document: it performs
//! no I/O, holds no state between invocations, and is total over any
//! parseable input -- absent elements are reported as data, never as errors.

mod images;
mod inputs;
mod score;
mod title;

use scraper::Html;

use crate::models::{AccessibilityResult, ProgressEvent, ProgressStep};
use crate::progress::ProgressSink;

// Re-export the individual checks for targeted use in tests and tooling.
pub use images::check_images;
pub use inputs::check_inputs;
pub use title::check_title;

/// Runs the full accessibility scan over a parsed document.
///
/// Progress checkpoints are emitted through `progress` before each check and
/// after scoring (`title`@25, `images`@50, `inputs`@75, `complete`@100).
/// Emission is best-effort: the sink may be absent, and a lost event never
/// changes the returned result.
///
/// # Arguments
///
/// * `document` - The parsed HTML document to scan
/// * `progress` - Optional sink for progress notifications
///
/// # Returns
///
/// A fully populated [`AccessibilityResult`]. This function never fails:
/// malformed or empty markup produces a result with zero counts.
pub fn analyze(document: &Html, progress: Option<&dyn ProgressSink>) -> AccessibilityResult {
    emit(progress, ProgressStep::Title, 25, "Analyzing title tag...");
    let title = title::check_title(document);

    emit(progress, ProgressStep::Images, 50, "Analyzing image tags...");
    let images = images::check_images(document);

    emit(progress, ProgressStep::Inputs, 75, "Analyzing input/label associations...");
    let inputs = inputs::check_inputs(document);

    let (score, passed_checks, total_checks) = score::calculate_score(&title, &images, &inputs);
    emit(progress, ProgressStep::Complete, 100, "Analysis complete!");

    log::debug!(
        "Analysis complete: score={} passed={}/{}",
        score,
        passed_checks,
        total_checks
    );

    AccessibilityResult {
        title,
        images,
        inputs,
        score,
        passed_checks,
        total_checks,
    }
}

fn emit(progress: Option<&dyn ProgressSink>, step: ProgressStep, percent: u8, message: &str) {
    if let Some(sink) = progress {
        sink.emit(ProgressEvent::new(step, percent, message));
    }
}

/// Parses a CSS selector that is known to be valid at compile time.
///
/// Falls back to a selector that matches nothing if parsing fails, so a bad
/// constant degrades to empty results instead of a panic.
pub(crate) fn parse_static_selector(selector_str: &str) -> scraper::Selector {
    scraper::Selector::parse(selector_str).unwrap_or_else(|e| {
        log::error!("Failed to parse selector '{}': {}", selector_str, e);
        scraper::Selector::parse("*:not(*)").expect("fallback selector is valid")
    })
}
