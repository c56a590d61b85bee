//! Score aggregation over the three checks.

use crate::models::{ImageReport, InputReport, TitleReport};

const TOTAL_CHECKS: u8 = 3;

/// Derives `(score, passed_checks, total_checks)` from the three reports.
///
/// The checks are independent:
/// - title passes iff it exists and is non-empty;
/// - images pass iff there are none or all have alt text;
/// - inputs pass iff there are none or all are labeled.
///
/// `score` is `round(passed / 3 * 100)`, so the reachable values are
/// 0, 33, 67, and 100.
pub(crate) fn calculate_score(
    title: &TitleReport,
    images: &ImageReport,
    inputs: &InputReport,
) -> (u8, u8, u8) {
    let mut passed_checks = 0u8;

    if title.exists && !title.is_empty {
        passed_checks += 1;
    }
    if images.total == 0 || images.without_alt == 0 {
        passed_checks += 1;
    }
    if inputs.total == 0 || inputs.without_label == 0 {
        passed_checks += 1;
    }

    let score = (f64::from(passed_checks) / f64::from(TOTAL_CHECKS) * 100.0).round() as u8;

    (score, passed_checks, TOTAL_CHECKS)
}
