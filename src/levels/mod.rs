// =============================================================================
// Support / Resistance levels
// =============================================================================
//
// The core detection pipeline: peak detection -> proximity grouping ->
// per-bucket mean. A price level only counts when the series touched it at
// least three times; fewer touches is noise, not a level.
// =============================================================================

pub mod grouping;
pub mod peaks;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
pub use grouping::{group_by_proximity, DEFAULT_CLOSEST};
pub use peaks::{detect_peaks, DEFAULT_ROUND_DIGITS};

/// Minimum touches a bucket needs before its mean is a confirmed level.
pub const MIN_TOUCHES: usize = 3;

/// Which extrema the pipeline hunts: `Up` finds local maxima (resistances),
/// `Down` finds local minima (supports).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Up => write!(f, "Up"),
            Self::Down => write!(f, "Down"),
        }
    }
}

/// Confirmed support or resistance levels for `values`.
///
/// Runs [`detect_peaks`] (default rounding) then [`group_by_proximity`] at
/// the given `closest` threshold, and emits the arithmetic mean of every
/// bucket with at least [`MIN_TOUCHES`] members, in ascending price order
/// (peaks are sorted before bucketing).
///
/// Returns an empty vec when nothing confirms; the only error is a bad
/// `closest` parameter.
pub fn support_resistance_levels(
    values: &[f64],
    direction: Direction,
    closest: f64,
) -> Result<Vec<f64>> {
    let peaks = detect_peaks(values, direction, Some(DEFAULT_ROUND_DIGITS));
    let grouped = group_by_proximity(&peaks, closest)?;

    let mut result = Vec::new();
    for bucket in &grouped {
        if bucket.len() < MIN_TOUCHES {
            continue;
        }
        result.push(bucket.iter().sum::<f64>() / bucket.len() as f64);
    }

    debug!(
        %direction,
        closest,
        peaks = peaks.len(),
        buckets = grouped.len(),
        levels = result.len(),
        "support/resistance aggregation"
    );

    Ok(result)
}

/// Resistance levels at the default grouping threshold.
pub fn resistances(values: &[f64]) -> Result<Vec<f64>> {
    support_resistance_levels(values, Direction::Up, DEFAULT_CLOSEST)
}

/// Resistance levels at a custom grouping threshold.
pub fn resistances_at(values: &[f64], closest: f64) -> Result<Vec<f64>> {
    support_resistance_levels(values, Direction::Up, closest)
}

/// Support levels at the default grouping threshold.
pub fn supports(values: &[f64]) -> Result<Vec<f64>> {
    support_resistance_levels(values, Direction::Down, DEFAULT_CLOSEST)
}

/// Support levels at a custom grouping threshold.
pub fn supports_at(values: &[f64], closest: f64) -> Result<Vec<f64>> {
    support_resistance_levels(values, Direction::Down, closest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternating_series_confirms_one_resistance() {
        // Peaks [3,4,5,4,5,3]; grouped at closest=2 they collapse into the
        // single bucket [3,4,5]; mean 4.0, confirmed by >= 3 touches.
        let series = [1.0, 3.0, 1.0, 4.0, 1.0, 5.0, 1.0, 4.0, 1.0, 5.0, 1.0, 3.0, 1.0];
        let levels = support_resistance_levels(&series, Direction::Up, 2.0).unwrap();
        assert_eq!(levels.len(), 1);
        assert!((levels[0] - 4.0).abs() < 1e-10);
    }

    #[test]
    fn flat_series_has_no_levels() {
        let series = [100.0; 50];
        assert!(resistances(&series).unwrap().is_empty());
        assert!(supports(&series).unwrap().is_empty());
    }

    #[test]
    fn fewer_than_three_touches_is_noise() {
        // Two touches at ~5: below the confirmation threshold.
        let series = [1.0, 5.0, 1.0, 5.0, 1.0];
        assert!(resistances(&series).unwrap().is_empty());
    }

    #[test]
    fn three_touches_confirm_a_level() {
        let series = [1.0, 5.0, 1.0, 5.2, 1.0, 4.9, 1.0];
        let levels = resistances(&series).unwrap();
        assert_eq!(levels.len(), 1);
        assert!((levels[0] - (5.0 + 5.2 + 4.9) / 3.0).abs() < 1e-10);
    }

    #[test]
    fn supports_mirror_resistances() {
        let series = [9.0, 5.0, 9.0, 5.2, 9.0, 4.9, 9.0];
        let levels = supports(&series).unwrap();
        assert_eq!(levels.len(), 1);
        assert!((levels[0] - (4.9 + 5.0 + 5.2) / 3.0).abs() < 1e-10);
    }

    #[test]
    fn distinct_clusters_emit_levels_in_ascending_order() {
        let series = [
            1.0, 5.0, 1.0, 5.1, 1.0, 4.9, 1.0, // cluster near 5
            20.0, 30.0, 20.0, 30.2, 20.0, 29.8, 20.0, // cluster near 30
        ];
        let levels = resistances(&series).unwrap();
        assert_eq!(levels.len(), 2);
        assert!(levels[0] < levels[1]);
        assert!((levels[0] - 5.0).abs() < 0.2);
        assert!((levels[1] - 30.0).abs() < 0.2);
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert!(resistances(&[]).unwrap().is_empty());
    }

    #[test]
    fn bad_threshold_fails_fast() {
        let series = [1.0, 5.0, 1.0];
        assert!(support_resistance_levels(&series, Direction::Up, 0.0).is_err());
        assert!(support_resistance_levels(&series, Direction::Up, -2.0).is_err());
    }

    #[test]
    fn direction_display_is_stable() {
        assert_eq!(Direction::Up.to_string(), "Up");
        assert_eq!(Direction::Down.to_string(), "Down");
    }
}
