//! Location quantization.
//!
//! Maps a raw coordinate pair to a stable low-resolution key so that
//! submissions placed within the tolerance of each other compare equal.
//! The quantizer is a standalone unit: the aggregation pipeline uses it to
//! bucket rows, and the deletion path reuses it to find every row stored
//! under the same key.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Quantized coordinate key used as the equality test for "same physical
/// place".
///
/// The key is `"qx,qy"` with both components snapped to the tolerance grid
/// and formatted to exactly six decimal digits, e.g. `"127.000000,37.000000"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationKey(String);

impl LocationKey {
    /// View the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Quantize a coordinate pair to a location key.
///
/// Each component is snapped to the nearest multiple of `tolerance`
/// (`round(v / tolerance) * tolerance`). The function is symmetric in its two
/// inputs; callers keep the `x` = longitude, `y` = latitude convention.
///
/// Any finite input produces a key. Non-finite coordinates must be rejected
/// upstream ([`Submission::validate`](crate::Submission::validate)); fed a
/// NaN this produces a degenerate `"NaN,..."` key rather than panicking.
///
/// # Example
/// ```
/// use placematch::quantize_location;
///
/// let a = quantize_location(127.00004, 37.00003, 0.0001);
/// let b = quantize_location(127.0, 37.0, 0.0001);
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "127.000000,37.000000");
/// ```
pub fn quantize_location(x: f64, y: f64, tolerance: f64) -> LocationKey {
    let qx = snap(x, tolerance);
    let qy = snap(y, tolerance);
    LocationKey(format!("{qx:.6},{qy:.6}"))
}

/// Snap a coordinate to the tolerance grid.
///
/// Grid midpoints round away from zero (`f64::round`), so `-0.00005` at the
/// default tolerance lands in the `-0.000100` cell.
fn snap(value: f64, tolerance: f64) -> f64 {
    let snapped = (value / tolerance).round() * tolerance;
    // Keep -0.0 out of keys: it formats as "-0.000000"
    if snapped == 0.0 {
        0.0
    } else {
        snapped
    }
}
