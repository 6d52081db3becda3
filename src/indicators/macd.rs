// =============================================================================
// Moving Average Convergence / Divergence (MACD)
// =============================================================================
//
// MACD line = EMA(12) - EMA(26) over the close series, both computed with
// the convolution EMA from the smoothing module. Positive MACD means the
// fast average sits above the slow one (upward momentum).
// =============================================================================

use super::smoothing::exp_moving_average;
use serde::{Deserialize, Serialize};

pub const MACD_FAST_PERIOD: usize = 12;
pub const MACD_SLOW_PERIOD: usize = 26;

/// Fast EMA, slow EMA, and their difference, aligned to the input length
/// (empty when the input is too short for the slow EMA).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacdOutput {
    pub ema_fast: Vec<f64>,
    pub ema_slow: Vec<f64>,
    pub macd: Vec<f64>,
}

/// Compute MACD over `values` with the standard 12/26 periods.
pub fn macd(values: &[f64]) -> MacdOutput {
    let ema_fast = exp_moving_average(values, MACD_FAST_PERIOD);
    let ema_slow = exp_moving_average(values, MACD_SLOW_PERIOD);

    let macd = ema_fast
        .iter()
        .zip(ema_slow.iter())
        .map(|(f, s)| f - s)
        .collect();

    MacdOutput {
        ema_fast,
        ema_slow,
        macd,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macd_too_short_is_empty() {
        let values: Vec<f64> = (1..=20).map(|x| x as f64).collect();
        let out = macd(&values);
        // Slow EMA needs more than 26 points.
        assert!(out.ema_slow.is_empty());
        assert!(out.macd.is_empty());
    }

    #[test]
    fn macd_is_aligned_to_input() {
        let values: Vec<f64> = (1..=60).map(|x| x as f64).collect();
        let out = macd(&values);
        assert_eq!(out.ema_fast.len(), values.len());
        assert_eq!(out.ema_slow.len(), values.len());
        assert_eq!(out.macd.len(), values.len());
    }

    #[test]
    fn flat_series_has_zero_macd() {
        let values = vec![42.0; 60];
        let out = macd(&values);
        for &v in &out.macd {
            assert!(v.abs() < 1e-9);
        }
    }

    #[test]
    fn macd_difference_is_fast_minus_slow() {
        let values: Vec<f64> = (1..=60).map(|x| (x as f64).sin() + 10.0).collect();
        let out = macd(&values);
        for i in 0..values.len() {
            assert!((out.macd[i] - (out.ema_fast[i] - out.ema_slow[i])).abs() < 1e-12);
        }
    }
}
