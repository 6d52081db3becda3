// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free transforms over price/volume series: smoothing
// filters, moving averages, oscillators, and chart annotations. These sit
// alongside the support/resistance core in `crate::levels` and share its
// conventions: borrowed slices in, fresh vectors out, no hidden state.
// =============================================================================

pub mod bollinger;
pub mod macd;
pub mod rsi;
pub mod smoothing;
pub mod volume;
pub mod zigzag;
