// =============================================================================
// Candle series — columnar price/volume container
// =============================================================================
//
// Minimal tabular structure for the indicators that need more than a bare
// close slice (volume normalization, zig-zag annotation). The index is the
// implicit time step; columns are parallel vectors of equal length.
// =============================================================================

use crate::error::{IndicatorError, Result};
use serde::{Deserialize, Serialize};

/// Columnar candle data. `zigzag` starts empty and is populated by
/// [`crate::indicators::zigzag::zig_zag`]; pivot-free positions hold NaN.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandleSeries {
    pub close: Vec<f64>,
    pub volume: Vec<f64>,
    #[serde(default)]
    pub zigzag: Vec<f64>,
}

impl CandleSeries {
    /// Build a series from parallel close/volume columns.
    ///
    /// Fails with [`IndicatorError::InvalidInput`] when the columns differ
    /// in length.
    pub fn new(close: Vec<f64>, volume: Vec<f64>) -> Result<Self> {
        if close.len() != volume.len() {
            return Err(IndicatorError::InvalidInput(format!(
                "column length mismatch: close has {} rows, volume has {}",
                close.len(),
                volume.len()
            )));
        }
        Ok(Self {
            close,
            volume,
            zigzag: Vec::new(),
        })
    }

    /// Number of rows (time steps).
    pub fn len(&self) -> usize {
        self.close.len()
    }

    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }
}
