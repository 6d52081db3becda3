// =============================================================================
// Relative Strength Index (RSI) — EWM smoothing
// =============================================================================
//
// RSI measures the speed and magnitude of recent price changes to evaluate
// whether an asset is overbought or oversold.
//
// Step 1 — Compute price deltas from consecutive closes (leading delta is
//          undefined, so the first output is NaN).
// Step 2 — Split into gains and losses (losses kept as magnitudes).
// Step 3 — Smooth both with an adjusted EWM at `alpha = 1 / (1 + length)`.
// Step 4 — RS  = avg_gain / avg_loss
//          RSI = 100 - 100 / (1 + RS)
//
// Thresholds:  RSI > 70 => OVERBOUGHT,  RSI < 30 => OVERSOLD.
// =============================================================================

use super::smoothing::ewm_mean;

/// Default smoothing length.
pub const DEFAULT_RSI_LENGTH: usize = 14;

/// Compute the RSI series for `values`, aligned to the input length.
///
/// # Edge cases
/// - Empty input => empty vec.
/// - The first output is always NaN (no delta exists for the first close).
/// - All-gain stretches produce 100.0 (avg loss is zero, RS is infinite);
///   stretches with no movement at all produce NaN (0/0).
pub fn rsi(values: &[f64], length: usize) -> Vec<f64> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }

    let mut gains = Vec::with_capacity(n);
    let mut losses = Vec::with_capacity(n);
    gains.push(f64::NAN);
    losses.push(f64::NAN);
    for i in 1..n {
        let delta = values[i] - values[i - 1];
        if delta.is_nan() {
            gains.push(f64::NAN);
            losses.push(f64::NAN);
        } else {
            gains.push(delta.max(0.0));
            losses.push((-delta).max(0.0));
        }
    }

    let alpha = 1.0 / (1.0 + length as f64);
    let avg_gain = ewm_mean(&gains, alpha);
    let avg_loss = ewm_mean(&losses, alpha);

    avg_gain
        .iter()
        .zip(avg_loss.iter())
        .map(|(&g, &l)| {
            let rs = g / l;
            100.0 - 100.0 / (1.0 + rs)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rsi_empty_input() {
        assert!(rsi(&[], DEFAULT_RSI_LENGTH).is_empty());
    }

    #[test]
    fn rsi_is_aligned_and_starts_nan() {
        let closes: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        let out = rsi(&closes, DEFAULT_RSI_LENGTH);
        assert_eq!(out.len(), closes.len());
        assert!(out[0].is_nan());
    }

    #[test]
    fn rsi_all_gains_is_100() {
        let closes: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        let out = rsi(&closes, DEFAULT_RSI_LENGTH);
        // Strictly rising series: no losses, RSI pegged at 100.
        assert!((out.last().unwrap() - 100.0).abs() < 1e-10);
    }

    #[test]
    fn rsi_all_losses_is_0() {
        let closes: Vec<f64> = (1..=30).rev().map(|x| x as f64).collect();
        let out = rsi(&closes, DEFAULT_RSI_LENGTH);
        assert!(out.last().unwrap().abs() < 1e-10);
    }

    #[test]
    fn rsi_flat_series_is_nan() {
        // No gains, no losses: RS = 0/0 stays undefined.
        let closes = vec![50.0; 20];
        let out = rsi(&closes, DEFAULT_RSI_LENGTH);
        assert!(out.last().unwrap().is_nan());
    }

    #[test]
    fn rsi_balanced_chop_sits_midrange() {
        // Equal-magnitude up and down moves: gains ~= losses, RSI near 50.
        let closes: Vec<f64> = (0..40)
            .map(|i| if i % 2 == 0 { 100.0 } else { 101.0 })
            .collect();
        let out = rsi(&closes, DEFAULT_RSI_LENGTH);
        let last = *out.last().unwrap();
        assert!(last > 40.0 && last < 60.0, "expected midrange RSI, got {last}");
    }
}
