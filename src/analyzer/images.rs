//! Image alt-text check.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::models::ImageReport;

const IMG_SELECTOR_STR: &str = "img";

static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| super::parse_static_selector(IMG_SELECTOR_STR));

/// Identifier recorded for a failing image that has no `src` attribute.
const UNKNOWN_SOURCE: &str = "unknown";

/// Checks every `<img>` element for alternative text.
///
/// An image fails when its `alt` attribute is absent or trims to the empty
/// string. The two cases are semantically distinct (absent vs. explicitly
/// empty) but scored identically; this conflation is intentional and must
/// not be "fixed". Failing images are recorded by `src` in document order.
pub fn check_images(document: &Html) -> ImageReport {
    let mut total = 0;
    let mut missing_alt_images = Vec::new();

    for img in document.select(&IMG_SELECTOR) {
        total += 1;
        let alt = img.value().attr("alt");
        if alt.map_or(true, |a| a.trim().is_empty()) {
            let src = img.value().attr("src").unwrap_or(UNKNOWN_SOURCE);
            missing_alt_images.push(src.to_string());
        }
    }

    log::debug!(
        "Found {} image elements, {} without alt text",
        total,
        missing_alt_images.len()
    );

    ImageReport {
        total,
        without_alt: missing_alt_images.len(),
        missing_alt_images,
    }
}
