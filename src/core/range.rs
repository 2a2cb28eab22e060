use tracing::{trace, warn};

use crate::core::scale::AxisRange;
use crate::error::{ScaleResult, ScalingError};

/// Outcome of checking one axis range pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeCheck {
    Valid(AxisRange),
    Invalid,
}

impl RangeCheck {
    #[must_use]
    pub fn range(self) -> Option<AxisRange> {
        match self {
            RangeCheck::Valid(range) => Some(range),
            RangeCheck::Invalid => None,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        matches!(self, RangeCheck::Valid(_))
    }
}

/// Lenient character gate applied to a raw range endpoint.
///
/// After trimming, at most one leading `-` is dropped and every `.` is
/// ignored; what remains must be ASCII digits (at least one). Strings such as
/// `"1.2.3"` pass here and are rejected later by [`validate_range`].
#[must_use]
pub fn passes_numeric_gate(raw: &str) -> bool {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('-').unwrap_or(trimmed);

    let mut digits = 0usize;
    for ch in unsigned.chars() {
        match ch {
            '0'..='9' => digits += 1,
            '.' => {}
            _ => return false,
        }
    }
    digits > 0
}

/// Checks a raw `(start, end)` pair.
///
/// Pairs failing the character gate or collapsing to a single point are
/// [`RangeCheck::Invalid`]. A pair that passes the gate but does not parse is
/// an error, not an invalid range.
pub fn validate_range(start: &str, end: &str) -> ScaleResult<RangeCheck> {
    if !passes_numeric_gate(start) || !passes_numeric_gate(end) {
        trace!(start, end, "range rejected by numeric gate");
        return Ok(RangeCheck::Invalid);
    }

    let (Ok(start_value), Ok(end_value)) =
        (start.trim().parse::<f64>(), end.trim().parse::<f64>())
    else {
        warn!(start, end, "range passed numeric gate but failed to parse");
        return Err(ScalingError::InvalidFormat(
            "Invalid range values provided".to_owned(),
        ));
    };

    match AxisRange::new(start_value, end_value) {
        Ok(range) => Ok(RangeCheck::Valid(range)),
        Err(_) => {
            trace!(start, end, "degenerate range treated as absent");
            Ok(RangeCheck::Invalid)
        }
    }
}
