use scaling_range::core::{RangeCheck, validate_range, validate_range_inputs_strict};
use scaling_range::error::ScalingError;

#[test]
fn well_formed_range_is_valid() {
    let check = validate_range("0", "10").expect("validate");
    let range = check.range().expect("valid range");
    assert_eq!(range.start(), 0.0);
    assert_eq!(range.end(), 10.0);
}

#[test]
fn reversed_range_is_valid() {
    assert!(validate_range("10", "-2.5").expect("validate").is_valid());
}

#[test]
fn empty_or_non_numeric_endpoints_are_invalid() {
    for (start, end) in [("", "10"), ("0", "  "), ("abc", "10"), ("0", "1e3"), ("-", "5")] {
        assert_eq!(
            validate_range(start, end).expect("validate"),
            RangeCheck::Invalid,
            "start={start:?} end={end:?}"
        );
    }
}

#[test]
fn degenerate_range_is_invalid() {
    assert_eq!(validate_range("0", "0").expect("validate"), RangeCheck::Invalid);
    assert_eq!(validate_range("2", "2.00").expect("validate"), RangeCheck::Invalid);
}

#[test]
fn gate_passing_garbage_fails_at_conversion() {
    let err = validate_range("1.2.3", "4").expect_err("conversion must fail");
    assert_eq!(
        err,
        ScalingError::InvalidFormat("Invalid range values provided".to_owned())
    );
}

#[test]
fn strict_validation_returns_all_six_endpoints() {
    let values =
        validate_range_inputs_strict("0", "10", "0", "100", "0", "50").expect("all valid");
    assert_eq!(values, (0.0, 10.0, 0.0, 100.0, 0.0, 50.0));
}

#[test]
fn strict_validation_names_empty_field() {
    let err = validate_range_inputs_strict("", "10", "0", "100", "0", "50")
        .expect_err("empty x1");
    assert_eq!(format!("{err}"), "Range value x1 cannot be empty");
    assert!(matches!(err, ScalingError::InvalidInput { field: "x1", .. }));
}

#[test]
fn strict_validation_names_unparseable_field() {
    let err = validate_range_inputs_strict("0", "10", "invalid", "100", "0", "50")
        .expect_err("bad y1");
    assert_eq!(format!("{err}"), "Invalid range value: y1");
    assert_eq!(err.status_code(), 400);
}

#[test]
fn strict_validation_reports_first_failure_in_order() {
    let err = validate_range_inputs_strict("0", "10", "0", "100", "x", " ")
        .expect_err("z1 and z2 both bad");
    assert!(matches!(err, ScalingError::InvalidInput { field: "z1", .. }));
}

#[test]
fn strict_validation_accepts_surrounding_whitespace() {
    let values = validate_range_inputs_strict(" 1 ", "2", "3", "4", "5", "6.5").expect("valid");
    assert_eq!(values.0, 1.0);
    assert_eq!(values.5, 6.5);
}
