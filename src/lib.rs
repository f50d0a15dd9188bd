//! # Place Match
//!
//! Location-based deduplication and aggregation library for crowd-sourced
//! place recommendations.
//!
//! This library provides:
//! - Coordinate quantization into stable low-resolution location keys
//! - Accumulation of raw submissions into per-location groups
//! - Representative name/address selection by frequency with deterministic
//!   tie-break
//! - Collision resolution between groups that share a chosen name but occupy
//!   different locations
//! - An in-process engine wrapping a submission store for serving aggregated
//!   results
//!
//! ## Quick Start
//!
//! ```rust
//! use placematch::{aggregate_submissions, GroupConfig, Submission};
//!
//! // Rows ordered newest first, as the row store delivers them
//! let rows = vec![
//!     Submission::new("A Cafe", "Main St", 127.0, 37.0, "good coffee", 200),
//!     Submission::new("A Cafe Seoul", "Main St", 127.00004, 37.00003, "nice view", 100),
//! ];
//!
//! let entries = aggregate_submissions(&rows, &GroupConfig::default());
//!
//! // Both rows quantize to the same location, so they merge into one entry
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries["A Cafe"].reasons.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

// Unified error handling
pub mod error;
pub use error::{PlaceMatchError, Result};

// Location quantization (coordinate pair -> stable key)
pub mod quantize;
pub use quantize::{quantize_location, LocationKey};

// Submission accumulation into per-location groups
pub mod grouping;
pub use grouping::{accumulate_submissions, FrequencyTable, PlaceGroup};

// Representative name/address selection
pub mod select;
pub use select::{select_representative, Representative, UNKNOWN_PLACE};

// Canonical output construction with name-collision resolution
pub mod canonical;
pub use canonical::{aggregate_submissions, build_canonical_map, CanonicalMap};

// In-process engine wrapping a submission store
pub mod engine;
pub use engine::{EngineStats, RecommendationEngine, SubmissionStore};

// ============================================================================
// Core Types
// ============================================================================

/// Coordinate-unit threshold below which two points are treated as the same
/// physical place.
///
/// 0.0001 decimal degrees is roughly 10 meters of latitude. Longitude degrees
/// shrink with latitude; no correction is applied for that.
pub const DEFAULT_TOLERANCE: f64 = 0.0001;

/// A single raw place recommendation as submitted by a user.
///
/// `x` is longitude and `y` is latitude, following the map-provider
/// convention of the external interface. An empty `address` means the
/// submitter left it blank.
///
/// # Example
/// ```
/// use placematch::Submission;
/// let row = Submission::new("A Cafe", "Main St", 127.0, 37.0, "good coffee", 1_700_000_000);
/// assert!(row.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub place_name: String,
    pub address: String,
    /// Longitude in decimal degrees
    pub x: f64,
    /// Latitude in decimal degrees
    pub y: f64,
    pub reason: String,
    /// Unix timestamp (seconds since epoch)
    pub created_at: i64,
}

impl Submission {
    /// Create a new submission.
    pub fn new(
        place_name: &str,
        address: &str,
        x: f64,
        y: f64,
        reason: &str,
        created_at: i64,
    ) -> Self {
        Self {
            place_name: place_name.to_string(),
            address: address.to_string(),
            x,
            y,
            reason: reason.to_string(),
            created_at,
        }
    }

    /// Check that the submission carries every field the store requires.
    pub fn is_valid(&self) -> bool {
        !self.place_name.trim().is_empty()
            && !self.reason.trim().is_empty()
            && self.x.is_finite()
            && self.y.is_finite()
    }

    /// Validate the submission for insertion, naming the first problem found.
    ///
    /// Address is optional; everything else is required. Non-finite
    /// coordinates are rejected here so they can never reach the accumulator,
    /// which performs no validation of its own.
    pub fn validate(&self) -> Result<()> {
        if self.place_name.trim().is_empty() {
            return Err(PlaceMatchError::MissingField { field: "placeName" });
        }
        if self.reason.trim().is_empty() {
            return Err(PlaceMatchError::MissingField { field: "reason" });
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(PlaceMatchError::NonFiniteCoordinate {
                place_name: self.place_name.clone(),
                x: self.x,
                y: self.y,
            });
        }
        Ok(())
    }
}

/// Configuration for location grouping.
#[derive(Debug, Clone)]
pub struct GroupConfig {
    /// Quantization tolerance in coordinate units (decimal degrees).
    /// Default: [`DEFAULT_TOLERANCE`]
    pub tolerance: f64,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// The single, de-duplicated, displayable record for one physical place.
///
/// Serialized as the value half of `{ displayKey: { placeName, address, x, y,
/// reasons } }`; the display key itself is the map key and is not repeated
/// inside the value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalEntry {
    /// Key this entry occupies in the output map
    #[serde(skip)]
    pub display_key: String,
    pub place_name: String,
    pub address: String,
    /// Longitude of the first row seen for this location
    pub x: f64,
    /// Latitude of the first row seen for this location
    pub y: f64,
    /// Reasons in submission-batch order
    pub reasons: Vec<String>,
}
