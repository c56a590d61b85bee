//! Page title check.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::models::TitleReport;

const TITLE_SELECTOR_STR: &str = "title";

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| super::parse_static_selector(TITLE_SELECTOR_STR));

/// Checks the document's `<title>` element.
///
/// Selects the first title element and reports whether it exists and whether
/// its trimmed text content is empty. `content` is `None` only when no title
/// element exists at all; a present-but-blank title yields `Some("")` with
/// `is_empty: true`.
pub fn check_title(document: &Html) -> TitleReport {
    match document.select(&TITLE_SELECTOR).next() {
        Some(element) => {
            // text() handles HTML entities and nested tags correctly
            let text: String = element.text().collect();
            let content = text.trim().to_string();
            log::debug!("Extracted title text: '{}' (length: {})", content, content.len());
            TitleReport {
                exists: true,
                is_empty: content.is_empty(),
                content: Some(content),
            }
        }
        None => {
            log::debug!("No title element found in document");
            TitleReport {
                exists: false,
                content: None,
                is_empty: true,
            }
        }
    }
}
