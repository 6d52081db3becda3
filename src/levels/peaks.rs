// =============================================================================
// Peak Detector — local extrema with a minimum-height guard
// =============================================================================
//
// Finds local maxima in a price series; minima are found by negating the
// series first, so a single maxima scan serves both directions. Accepted
// peak values are direction-corrected (absolute value) and rounded so the
// proximity grouper downstream can match near-identical touches.
//
// The height guard rejects candidates below the series minimum. A strict
// local maximum always clears that bar, so the filter is effectively a
// no-op — it is kept because downstream consumers were tuned against the
// permissive default and exact output parity matters more than tidiness.
// =============================================================================

use super::Direction;

/// Decimal digits used to round peak values before grouping.
pub const DEFAULT_ROUND_DIGITS: u32 = 3;

/// Detect peak values in `values`.
///
/// `Direction::Up` finds local maxima, `Direction::Down` local minima (via
/// sign inversion). Returned values are the absolute direction-corrected
/// peak heights, rounded to `round_digits` decimals when `Some`.
///
/// # Edge cases
/// - Empty input or fewer than 3 points => empty vec (no interior exists).
/// - A flat plateau reports exactly one peak, at its first element.
/// - NaN values never qualify as peaks and break plateaus around them.
pub fn detect_peaks(values: &[f64], direction: Direction, round_digits: Option<u32>) -> Vec<f64> {
    let data: Vec<f64> = match direction {
        Direction::Up => values.to_vec(),
        Direction::Down => values.iter().map(|v| -v).collect(),
    };

    let floor = data.iter().copied().fold(f64::INFINITY, f64::min);

    local_maxima(&data)
        .into_iter()
        .filter(|&idx| data[idx] >= floor)
        .map(|idx| {
            let v = match round_digits {
                Some(digits) => round_to(data[idx], digits),
                None => data[idx],
            };
            v.abs()
        })
        .collect()
}

/// Indices of strict local maxima. A plateau (run of equal values higher
/// than both flanks) yields its first index. Shared with the zig-zag pivot
/// scan.
pub(crate) fn local_maxima(data: &[f64]) -> Vec<usize> {
    let mut out = Vec::new();
    if data.len() < 3 {
        return out;
    }

    let mut i = 1;
    while i + 1 < data.len() {
        if data[i] > data[i - 1] {
            let start = i;
            // Walk across a flat top; the plateau is a peak only if it
            // eventually drops off on the right.
            while i + 1 < data.len() && data[i + 1] == data[i] {
                i += 1;
            }
            if i + 1 < data.len() && data[i + 1] < data[start] {
                out.push(start);
            }
        }
        i += 1;
    }
    out
}

fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}
