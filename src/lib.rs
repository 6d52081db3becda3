// =============================================================================
// aurora-ta — stateless technical-analysis primitives
// =============================================================================
//
// Pure, side-effect-free indicator math for the Aurora trading engine:
// smoothing filters, moving averages, oscillators, and the support /
// resistance detection pipeline (peak detection -> proximity grouping ->
// bucket aggregation).
//
// Every function operates on fully materialized, caller-owned slices and
// returns freshly allocated output. Nothing here blocks, caches, or shares
// state, so the whole surface is safe to call concurrently on disjoint data.
// =============================================================================

pub mod error;
pub mod indicators;
pub mod levels;
pub mod series;

pub use error::{IndicatorError, Result};
pub use levels::{
    resistances, resistances_at, support_resistance_levels, supports, supports_at, Direction,
};
pub use series::CandleSeries;
