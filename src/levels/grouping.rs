// =============================================================================
// Proximity Grouper — bucket sorted values by closeness
// =============================================================================
//
// Partitions a value list into contiguous buckets where every consecutive
// pair of sorted values differs by strictly less than the `closest`
// threshold. Crossing the threshold closes the current bucket — even when it
// is empty — and opens a new one, so the output always contains exactly
// (number of far transitions) + 1 buckets. Downstream aggregation relies on
// that structural contract and filters the empty buckets itself.
// =============================================================================

use crate::error::{IndicatorError, Result};

/// Default grouping threshold: values closer than this land in one bucket.
pub const DEFAULT_CLOSEST: f64 = 2.0;

/// Group `values` into proximity buckets.
///
/// The input order is irrelevant; the grouper sorts a private copy (stable,
/// ascending) and never touches the caller's slice. Within a bucket each
/// distinct value appears at most once: equal values are adjacent after
/// sorting, so a last-inserted check is enough to deduplicate.
///
/// # Errors
/// `closest` must be finite and > 0; anything else would degenerate into
/// all-singleton or all-merged buckets and is rejected up front.
///
/// # Edge cases
/// - Empty or single-element input => one empty bucket.
pub fn group_by_proximity(values: &[f64], closest: f64) -> Result<Vec<Vec<f64>>> {
    if !closest.is_finite() || closest <= 0.0 {
        return Err(IndicatorError::invalid_parameter(
            "closest",
            format!("must be finite and > 0, got {closest}"),
        ));
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut buckets: Vec<Vec<f64>> = Vec::new();
    let mut current: Vec<f64> = Vec::new();

    for k in 1..sorted.len() {
        if (sorted[k] - sorted[k - 1]).abs() < closest {
            push_unless_last(&mut current, sorted[k - 1]);
            push_unless_last(&mut current, sorted[k]);
        } else {
            buckets.push(std::mem::take(&mut current));
        }
    }
    buckets.push(current);

    Ok(buckets)
}

fn push_unless_last(bucket: &mut Vec<f64>, value: f64) {
    if bucket.last() != Some(&value) {
        bucket.push(value);
    }
}
