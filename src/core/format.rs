use crate::error::{ScaleResult, ScalingError};

/// Renders a computed axis value as text.
///
/// `hex_mode` truncates toward zero and renders lowercase hex with a `0x`
/// prefix. Otherwise see [`format_decimal`].
pub fn format_output(value: f64, hex_mode: bool) -> ScaleResult<String> {
    if hex_mode {
        format_hex(value)
    } else {
        Ok(format_decimal(value))
    }
}

/// Canonical decimal text for a computed value.
///
/// Shortest round-trip representation; integral values keep a trailing `.0`
/// (`50.0`), very small or very large magnitudes switch to exponent form with
/// a signed, two-digit exponent (`1e+16`, `1e-05`), and non-finite values
/// render as `nan`, `inf`, `-inf`.
#[must_use]
pub fn format_decimal(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    } else if value == f64::INFINITY {
        return "inf".to_owned();
    } else if value == f64::NEG_INFINITY {
        return "-inf".to_owned();
    }

    let text = format!("{value:?}");
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// Truncates `value` to an integer and renders it as `0x…` (`-0x…` when negative).
///
/// Every finite value has an exact hex rendering; only NaN and infinities fail.
pub fn format_hex(value: f64) -> ScaleResult<String> {
    if !value.is_finite() {
        return Err(ScalingError::InvalidFormat(
            "cannot convert non-finite value to hexadecimal".to_owned(),
        ));
    }

    let truncated = value.trunc();
    let sign = if truncated < 0.0 { "-" } else { "" };
    Ok(format!("{sign}0x{}", hex_digits(truncated.abs())))
}

/// Hex digits of a non-negative integral `f64`.
fn hex_digits(magnitude: f64) -> String {
    if magnitude < 2f64.powi(64) {
        return format!("{:x}", magnitude as u64);
    }

    // magnitude = mantissa * 2^exponent with exponent >= 12 here.
    let bits = magnitude.to_bits();
    let exponent = ((bits >> 52) & 0x7ff) as u32 - 1075;
    let mantissa = (bits & ((1u64 << 52) - 1)) | (1u64 << 52);
    let head = u128::from(mantissa) << (exponent % 4);
    format!("{head:x}{}", "0".repeat((exponent / 4) as usize))
}

#[cfg(test)]
mod tests {
    use super::{format_decimal, format_hex, format_output};

    #[test]
    fn decimal_keeps_trailing_zero_for_integral_values() {
        assert_eq!(format_decimal(50.0), "50.0");
        assert_eq!(format_decimal(25.0), "25.0");
        assert_eq!(format_decimal(-3.0), "-3.0");
        assert_eq!(format_decimal(10.5), "10.5");
    }

    #[test]
    fn decimal_uses_shortest_round_trip() {
        assert_eq!(format_decimal(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_decimal(1e16), "1e+16");
        assert_eq!(format_decimal(0.00001), "1e-05");
        assert_eq!(format_decimal(1.5e-7), "1.5e-07");
        assert_eq!(format_decimal(-2.5e300), "-2.5e+300");
        assert_eq!(format_decimal(1e15), "1000000000000000.0");
        assert_eq!(format_decimal(0.0001), "0.0001");
    }

    #[test]
    fn decimal_non_finite_spelling() {
        assert_eq!(format_decimal(f64::NAN), "nan");
        assert_eq!(format_decimal(f64::INFINITY), "inf");
        assert_eq!(format_decimal(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn hex_truncates_instead_of_rounding() {
        assert_eq!(format_hex(255.0).expect("hex"), "0xff");
        assert_eq!(format_hex(10.9).expect("hex"), "0xa");
        assert_eq!(format_hex(0.99).expect("hex"), "0x0");
        assert_eq!(format_hex(-0.3).expect("hex"), "0x0");
        assert_eq!(format_hex(-16.7).expect("hex"), "-0x10");
    }

    #[test]
    fn hex_renders_values_beyond_u64_exactly() {
        assert_eq!(format_hex(2f64.powi(64)).expect("hex"), "0x10000000000000000");
        assert_eq!(format_hex(2f64.powi(65)).expect("hex"), "0x20000000000000000");
        assert_eq!(
            format_hex(-(2f64.powi(130))).expect("hex"),
            "-0x400000000000000000000000000000000"
        );
    }

    #[test]
    fn hex_rejects_non_finite() {
        let err = format_hex(f64::NAN).expect_err("nan must fail");
        assert!(format!("{err}").contains("non-finite"));
        assert!(format_hex(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn output_dispatches_on_mode() {
        assert_eq!(format_output(5.0, true).expect("hex"), "0x5");
        assert_eq!(format_output(5.0, false).expect("decimal"), "5.0");
    }
}
