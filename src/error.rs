// =============================================================================
// Library error type
// =============================================================================
//
// Failures here are caller mistakes, not runtime conditions: a nonsensical
// tuning parameter or a malformed input table. Indicator functions never
// retry or degrade — a bad parameter fails fast, an empty result is a value.
// =============================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndicatorError {
    /// A tuning parameter would produce degenerate output (e.g. a grouping
    /// threshold <= 0 collapses every bucket to a singleton).
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// The input series itself is malformed (e.g. mismatched column lengths).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl IndicatorError {
    pub(crate) fn invalid_parameter(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IndicatorError>;
