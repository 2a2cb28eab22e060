use crate::core::types::AxisValue;
use crate::error::{ScaleResult, ScalingError};

/// Parses a raw axis entry.
///
/// Empty, whitespace-only and lone `-` entries are [`AxisValue::Absent`].
/// With `hex_mode` the entry is a base-16 integer with an optional sign and an
/// optional `0x`/`0X` prefix; otherwise it is a decimal real number.
pub fn parse_axis_value(raw: &str, hex_mode: bool) -> ScaleResult<AxisValue> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return Ok(AxisValue::Absent);
    }

    if hex_mode {
        return parse_hex(trimmed).map(AxisValue::Present).ok_or_else(|| {
            ScalingError::InvalidFormat("Invalid hexadecimal input!".to_owned())
        });
    }

    trimmed
        .parse::<f64>()
        .map(AxisValue::Present)
        .map_err(|_| ScalingError::InvalidFormat("Invalid decimal input!".to_owned()))
}

fn parse_hex(text: &str) -> Option<f64> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let digits = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
        .unwrap_or(unsigned);
    if digits.is_empty() {
        return None;
    }

    let magnitude = hex_magnitude(digits)?;
    if negative && magnitude != 0.0 {
        Some(-magnitude)
    } else {
        Some(magnitude)
    }
}

/// Correctly rounded `f64` for a string of hex digits.
///
/// Up to 32 significant digits convert exactly through `u128`. Longer inputs
/// keep their leading 32 digits and fold the rest into a sticky low bit, which
/// sits far below the 53-bit rounding position.
fn hex_magnitude(digits: &str) -> Option<f64> {
    if !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }

    let significant = digits.trim_start_matches('0');
    if significant.len() <= 32 {
        return Some(u128::from_str_radix(significant, 16).map_or(0.0, |v| v as f64));
    }

    let (head, tail) = significant.split_at(32);
    let mut head = u128::from_str_radix(head, 16).ok()?;
    if tail.bytes().any(|b| b != b'0') {
        head |= 1;
    }
    let shift = i32::try_from(tail.len()).ok()?.checked_mul(4)?;
    let value = head as f64 * 2f64.powi(shift);
    value.is_finite().then_some(value)
}
