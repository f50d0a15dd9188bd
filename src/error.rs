//! Unified error handling for place aggregation.
//!
//! The pure aggregation pipeline never fails on well-formed input; errors
//! only arise at the store boundary where required fields are enforced.

use thiserror::Error;

/// Errors produced by the submission boundary.
#[derive(Debug, Error)]
pub enum PlaceMatchError {
    /// A required field was absent or empty on insert.
    #[error("submission is missing required field '{field}'")]
    MissingField { field: &'static str },

    /// A coordinate was NaN or infinite. Such rows would quantize into a
    /// degenerate location key, so they are rejected before storage.
    #[error("submission '{place_name}' has non-finite coordinates ({x}, {y})")]
    NonFiniteCoordinate {
        place_name: String,
        x: f64,
        y: f64,
    },
}

/// Result type alias using [`PlaceMatchError`].
pub type Result<T> = std::result::Result<T, PlaceMatchError>;
