//! Typed errors for the extractor.
//!
//! None of these escape [`crate::extract`]. `StructuralParse` comes back
//! from [`parse_structure`](crate::strategy::parse_structure); the driver
//! logs it and moves on to the next strategy. The other two variants end
//! up in [`ExtractionReport::fallback_reason`](crate::ExtractionReport)
//! so callers can see why a fallback was chosen.

use thiserror::Error;

/// Reasons an extraction attempt did not yield a structured itinerary.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A candidate span was not valid JSON
    #[error("structural parse failed: {0}")]
    StructuralParse(#[from] serde_json::Error),

    /// JSON was recovered but it is not a usable itinerary
    #[error("shape mismatch: {reason}")]
    ShapeMismatch { reason: String },

    /// No strategy produced any JSON value
    #[error("no recoverable structure in model output")]
    NoRecoverableStructure,
}

impl ExtractError {
    pub(crate) fn shape(reason: impl Into<String>) -> Self {
        Self::ShapeMismatch {
            reason: reason.into(),
        }
    }
}

/// Result type alias for extractor internals.
pub type Result<T> = std::result::Result<T, ExtractError>;
