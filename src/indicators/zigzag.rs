// =============================================================================
// Zig-zag pivot annotation
// =============================================================================
//
// Marks swing highs and lows on the close series: local maxima of the
// closes and of their negation, thinned so surviving pivots are at least
// `distance` index steps apart and stand out with a minimum prominence.
// Pivot positions get the close price written into the series' `zigzag`
// column; every other position gets NaN. The column is rewritten in place,
// so callers hand the series over for annotation.
// =============================================================================

use crate::error::{IndicatorError, Result};
use crate::levels::peaks::local_maxima;
use crate::series::CandleSeries;
use tracing::debug;

/// Default minimum index separation between pivots.
pub const DEFAULT_ZIGZAG_DISTANCE: f64 = 2.1;

/// Minimum vertical prominence a pivot must clear.
const PIVOT_PROMINENCE: f64 = 1.0;

/// Annotate `series.zigzag` with swing pivots.
///
/// # Errors
/// `distance` must be at least 1.0 (adjacent samples are already one index
/// apart, so smaller separations are meaningless).
pub fn zig_zag(series: &mut CandleSeries, distance: f64) -> Result<()> {
    if !(distance >= 1.0) {
        return Err(IndicatorError::invalid_parameter(
            "distance",
            format!("must be >= 1.0, got {distance}"),
        ));
    }

    let closes = &series.close;
    let negated: Vec<f64> = closes.iter().map(|v| -v).collect();

    let highs = pivot_indices(closes, distance);
    let lows = pivot_indices(&negated, distance);

    let mut is_pivot = vec![false; closes.len()];
    for idx in highs.iter().chain(lows.iter()) {
        is_pivot[*idx] = true;
    }

    debug!(
        rows = closes.len(),
        highs = highs.len(),
        lows = lows.len(),
        distance,
        "zig-zag annotation"
    );

    series.zigzag = closes
        .iter()
        .zip(is_pivot.iter())
        .map(|(&c, &pivot)| if pivot { c } else { f64::NAN })
        .collect();

    Ok(())
}

/// Local maxima of `data`, thinned by minimum index distance (highest peaks
/// win) and then by prominence.
fn pivot_indices(data: &[f64], distance: f64) -> Vec<usize> {
    let candidates = local_maxima(data);
    let spaced = filter_by_distance(&candidates, data, distance);
    spaced
        .into_iter()
        .filter(|&idx| prominence(data, idx) >= PIVOT_PROMINENCE)
        .collect()
}

/// Greedy distance thinning: walk candidates from highest to lowest and
/// drop any unprocessed neighbor closer than `distance` index steps.
fn filter_by_distance(indices: &[usize], data: &[f64], distance: f64) -> Vec<usize> {
    let mut priority: Vec<usize> = (0..indices.len()).collect();
    priority.sort_by(|&a, &b| data[indices[a]].total_cmp(&data[indices[b]]));

    let mut keep = vec![true; indices.len()];
    for &pos in priority.iter().rev() {
        if !keep[pos] {
            continue;
        }
        let center = indices[pos] as f64;
        let mut j = pos;
        while j > 0 {
            j -= 1;
            if center - indices[j] as f64 >= distance {
                break;
            }
            keep[j] = false;
        }
        let mut j = pos + 1;
        while j < indices.len() {
            if indices[j] as f64 - center >= distance {
                break;
            }
            keep[j] = false;
            j += 1;
        }
    }

    indices
        .iter()
        .zip(keep.iter())
        .filter(|(_, &k)| k)
        .map(|(&idx, _)| idx)
        .collect()
}

/// Topographic prominence of the peak at `peak`: height above the higher of
/// the two valley floors reached before a taller point (or the edge).
fn prominence(data: &[f64], peak: usize) -> f64 {
    let height = data[peak];

    let mut left_min = height;
    let mut i = peak;
    while i > 0 {
        i -= 1;
        if data[i] > height {
            break;
        }
        left_min = left_min.min(data[i]);
    }

    let mut right_min = height;
    let mut i = peak;
    while i + 1 < data.len() {
        i += 1;
        if data[i] > height {
            break;
        }
        right_min = right_min.min(data[i]);
    }

    height - left_min.max(right_min)
}
