// =============================================================================
// Bollinger Bands
// =============================================================================
//
// Middle band is the rolling mean, upper/lower bands sit `num_std` sample
// standard deviations away. All three series are aligned to the input with
// a NaN head while the first window fills.
// =============================================================================

use serde::{Deserialize, Serialize};

/// Default rolling window.
pub const DEFAULT_BOLLINGER_PERIOD: usize = 20;
/// Default band width in standard deviations.
pub const DEFAULT_BOLLINGER_STD: f64 = 2.0;

/// Full Bollinger Band series, one entry per input close.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BollingerBands {
    pub middle: Vec<f64>,
    pub upper: Vec<f64>,
    pub lower: Vec<f64>,
}

/// Calculate Bollinger Bands over `closes`.
///
/// Uses the sample standard deviation (n - 1 divisor); with `period == 1`
/// the deviation is undefined and the outer bands stay NaN. Degenerate
/// parameters (`period == 0` or longer than the input) produce all-NaN
/// bands of the input length.
pub fn bollinger_bands(closes: &[f64], period: usize, num_std: f64) -> BollingerBands {
    let n = closes.len();
    let mut middle = vec![f64::NAN; n];
    let mut upper = vec![f64::NAN; n];
    let mut lower = vec![f64::NAN; n];

    if period > 0 && period <= n {
        for i in (period - 1)..n {
            let window = &closes[i + 1 - period..=i];
            let mean = window.iter().sum::<f64>() / period as f64;
            middle[i] = mean;

            if period > 1 {
                let variance = window.iter().map(|x| (x - mean).powi(2)).sum::<f64>()
                    / (period - 1) as f64;
                let std_dev = variance.sqrt();
                upper[i] = mean + num_std * std_dev;
                lower[i] = mean - num_std * std_dev;
            }
        }
    }

    BollingerBands {
        middle,
        upper,
        lower,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_are_aligned_with_nan_head() {
        let closes: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        let bb = bollinger_bands(&closes, DEFAULT_BOLLINGER_PERIOD, DEFAULT_BOLLINGER_STD);
        assert_eq!(bb.middle.len(), closes.len());
        assert!(bb.middle[18].is_nan());
        assert!(bb.middle[19].is_finite());
        assert!(bb.upper[19] > bb.middle[19]);
        assert!(bb.lower[19] < bb.middle[19]);
    }

    #[test]
    fn flat_series_collapses_bands() {
        let closes = vec![100.0; 25];
        let bb = bollinger_bands(&closes, 20, 2.0);
        let i = 24;
        assert!((bb.middle[i] - 100.0).abs() < 1e-10);
        assert!((bb.upper[i] - 100.0).abs() < 1e-10);
        assert!((bb.lower[i] - 100.0).abs() < 1e-10);
    }

    #[test]
    fn known_window_values() {
        // Window [1..=5]: mean 3, sample std sqrt(2.5).
        let closes: Vec<f64> = (1..=5).map(|x| x as f64).collect();
        let bb = bollinger_bands(&closes, 5, 2.0);
        let std = 2.5_f64.sqrt();
        assert!((bb.middle[4] - 3.0).abs() < 1e-10);
        assert!((bb.upper[4] - (3.0 + 2.0 * std)).abs() < 1e-10);
        assert!((bb.lower[4] - (3.0 - 2.0 * std)).abs() < 1e-10);
    }

    #[test]
    fn insufficient_data_is_all_nan() {
        let bb = bollinger_bands(&[1.0, 2.0, 3.0], 20, 2.0);
        assert_eq!(bb.middle.len(), 3);
        assert!(bb.middle.iter().all(|v| v.is_nan()));
        assert!(bb.upper.iter().all(|v| v.is_nan()));
    }
}
