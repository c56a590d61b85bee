//! Input/label association check.
//!
//! The dominant check: an input counts as labeled if any one of several
//! association rules applies, tried in a fixed precedence order.

use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::models::InputReport;

const INPUT_SELECTOR_STR: &str = "input";
const LABEL_SELECTOR_STR: &str = "label";

static INPUT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| super::parse_static_selector(INPUT_SELECTOR_STR));

static LABEL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| super::parse_static_selector(LABEL_SELECTOR_STR));

/// Input types that are not labelable and never count toward the total.
const EXCLUDED_TYPES: [&str; 5] = ["hidden", "submit", "button", "reset", "image"];

/// Default type used for the synthetic identifier when `type` is absent.
const DEFAULT_TYPE: &str = "text";

/// Checks every labelable `<input>` element for an associated label.
///
/// Inputs of type `hidden`, `submit`, `button`, `reset`, or `image` are
/// excluded from the total entirely. For each remaining input, label
/// association is determined by the first matching rule:
///
/// 1. an `aria-label` or `aria-labelledby` attribute is present (the
///    `aria-labelledby` target id is deliberately not validated);
/// 2. the input has an `id` referenced by some `label[for]` in the document;
/// 3. the input is a descendant of a `<label>` element.
///
/// Unlabeled inputs are recorded by `id`, else `name`, else the synthetic
/// identifier `<type>-input` (type defaulting to `text`).
pub fn check_inputs(document: &Html) -> InputReport {
    // One pass over the labels up front; rule 2 is then a set lookup per input.
    let label_for_ids: HashSet<&str> = document
        .select(&LABEL_SELECTOR)
        .filter_map(|label| label.value().attr("for"))
        .collect();

    let mut total = 0;
    let mut inputs_without_label = Vec::new();

    for input in document.select(&INPUT_SELECTOR) {
        let input_type = input.value().attr("type");
        if input_type.map_or(false, is_excluded_type) {
            continue;
        }
        total += 1;

        if has_label(input, &label_for_ids) {
            continue;
        }

        let identifier = input
            .value()
            .attr("id")
            .or_else(|| input.value().attr("name"))
            .map(str::to_string)
            .unwrap_or_else(|| format!("{}-input", input_type.unwrap_or(DEFAULT_TYPE)));
        inputs_without_label.push(identifier);
    }

    log::debug!(
        "Found {} labelable input elements, {} without a label",
        total,
        inputs_without_label.len()
    );

    InputReport {
        total,
        without_label: inputs_without_label.len(),
        inputs_without_label,
    }
}

fn is_excluded_type(input_type: &str) -> bool {
    EXCLUDED_TYPES
        .iter()
        .any(|excluded| input_type.eq_ignore_ascii_case(excluded))
}

/// Applies the label-association rules in precedence order.
fn has_label(input: ElementRef<'_>, label_for_ids: &HashSet<&str>) -> bool {
    let element = input.value();

    if element.attr("aria-label").is_some() || element.attr("aria-labelledby").is_some() {
        return true;
    }

    if let Some(id) = element.attr("id") {
        if label_for_ids.contains(id) {
            return true;
        }
    }

    // Wrapping-label pattern: any enclosing <label> ancestor
    input
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| ancestor.value().name() == "label")
}
