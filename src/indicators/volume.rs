// =============================================================================
// Volume normalization
// =============================================================================
//
// Rescales the volume column onto the price axis so it can be drawn under
// the close series: volume is NaN-filled to zero, divided by its L2 norm,
// and scaled by the mean close.
// =============================================================================

use crate::series::CandleSeries;

/// Normalize the series' volume column against its close prices.
///
/// An all-zero volume column divides by a zero norm and yields NaN entries,
/// matching the underlying vector-norm semantics; callers that care should
/// check their volume data first.
pub fn normalize(series: &CandleSeries) -> Vec<f64> {
    let volume: Vec<f64> = series
        .volume
        .iter()
        .map(|&v| if v.is_nan() { 0.0 } else { v })
        .collect();

    let norm = volume.iter().map(|v| v * v).sum::<f64>().sqrt();
    let mean_close = series.close.iter().sum::<f64>() / series.close.len() as f64;

    volume.iter().map(|v| v / norm * mean_close).collect()
}
