//! Tests for error module

use placematch::{PlaceMatchError, Submission};

#[test]
fn test_missing_field_display() {
    let err = PlaceMatchError::MissingField { field: "reason" };
    assert!(err.to_string().contains("reason"));
    assert!(err.to_string().contains("missing required field"));
}

#[test]
fn test_non_finite_coordinate_display() {
    let err = PlaceMatchError::NonFiniteCoordinate {
        place_name: "A Cafe".to_string(),
        x: f64::NAN,
        y: 37.0,
    };
    assert!(err.to_string().contains("A Cafe"));
    assert!(err.to_string().contains("non-finite"));
}

#[test]
fn test_validate_reports_first_problem() {
    let row = Submission::new("", "", f64::NAN, 37.0, "", 1);
    // Name is checked before reason and coordinates
    assert!(matches!(
        row.validate(),
        Err(PlaceMatchError::MissingField { field: "placeName" })
    ));
}

#[test]
fn test_validate_accepts_blank_address() {
    let row = Submission::new("A Cafe", "", 127.0, 37.0, "good coffee", 1);
    assert!(row.validate().is_ok());
    assert!(row.is_valid());
}

#[test]
fn test_whitespace_only_fields_count_as_missing() {
    let row = Submission::new("   ", "", 127.0, 37.0, "r", 1);
    assert!(!row.is_valid());
    assert!(matches!(
        row.validate(),
        Err(PlaceMatchError::MissingField { field: "placeName" })
    ));
}
