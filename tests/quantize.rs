//! Tests for quantize module

use placematch::{quantize_location, DEFAULT_TOLERANCE};

#[test]
fn test_key_format_six_decimals() {
    let key = quantize_location(127.0, 37.0, DEFAULT_TOLERANCE);
    assert_eq!(key.as_str(), "127.000000,37.000000");
}

#[test]
fn test_points_within_tolerance_share_key() {
    // ~4m east, ~3m north of the reference point
    let a = quantize_location(127.00004, 37.00003, DEFAULT_TOLERANCE);
    let b = quantize_location(127.0, 37.0, DEFAULT_TOLERANCE);
    assert_eq!(a, b);
}

#[test]
fn test_points_beyond_tolerance_differ() {
    let a = quantize_location(127.0, 37.0, DEFAULT_TOLERANCE);
    let b = quantize_location(127.0002, 37.0, DEFAULT_TOLERANCE);
    assert_ne!(a, b);
}

#[test]
fn test_rounding_to_nearest_grid_cell() {
    // 127.00006 is closer to 127.0001 than to 127.0
    let key = quantize_location(127.00006, 37.0, DEFAULT_TOLERANCE);
    assert_eq!(key.as_str(), "127.000100,37.000000");
}

#[test]
fn test_grid_midpoint_rounds_away_from_zero() {
    let positive = quantize_location(0.00005, 0.0, DEFAULT_TOLERANCE);
    assert_eq!(positive.as_str(), "0.000100,0.000000");

    let negative = quantize_location(-0.00005, 0.0, DEFAULT_TOLERANCE);
    assert_eq!(negative.as_str(), "-0.000100,0.000000");
}

#[test]
fn test_negative_coordinates() {
    let key = quantize_location(-0.1278, 51.5074, DEFAULT_TOLERANCE);
    assert_eq!(key.as_str(), "-0.127800,51.507400");
}

#[test]
fn test_negative_zero_normalized() {
    // Snapping -0.00004 lands on the zero cell; the key must not read "-0.000000"
    let near_zero = quantize_location(-0.00004, 0.0, DEFAULT_TOLERANCE);
    let zero = quantize_location(0.0, 0.0, DEFAULT_TOLERANCE);
    assert_eq!(near_zero, zero);
    assert_eq!(zero.as_str(), "0.000000,0.000000");
}

#[test]
fn test_symmetric_in_inputs() {
    // The quantizer treats x and y identically; only the key layout differs
    let xy = quantize_location(127.0, 37.0, DEFAULT_TOLERANCE);
    let yx = quantize_location(37.0, 127.0, DEFAULT_TOLERANCE);
    assert_eq!(xy.as_str(), "127.000000,37.000000");
    assert_eq!(yx.as_str(), "37.000000,127.000000");
}

#[test]
fn test_custom_tolerance() {
    // A coarser grid merges points the default grid separates
    let a = quantize_location(127.004, 37.0, 0.01);
    let b = quantize_location(127.0, 37.0, 0.01);
    assert_eq!(a, b);

    let a = quantize_location(127.004, 37.0, DEFAULT_TOLERANCE);
    let b = quantize_location(127.0, 37.0, DEFAULT_TOLERANCE);
    assert_ne!(a, b);
}

#[test]
fn test_deterministic() {
    for _ in 0..5 {
        assert_eq!(
            quantize_location(126.9784, 37.5665, DEFAULT_TOLERANCE),
            quantize_location(126.9784, 37.5665, DEFAULT_TOLERANCE)
        );
    }
}

#[test]
fn test_display_matches_as_str() {
    let key = quantize_location(129.0, 35.0, DEFAULT_TOLERANCE);
    assert_eq!(key.to_string(), key.as_str());
}
