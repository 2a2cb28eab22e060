use crate::error::{ScaleResult, ScalingError};

/// Field names of the six range endpoints, in positional order.
pub const RANGE_FIELDS: [&str; 6] = ["x1", "x2", "y1", "y2", "z1", "z2"];

/// All six range endpoints as numbers, in `x1, x2, y1, y2, z1, z2` order.
pub type RangeEndpoints = (f64, f64, f64, f64, f64, f64);

/// All-or-nothing range validation.
///
/// Every endpoint must be present and parse as a real number. The first
/// failing endpoint, in positional order, is reported by name.
pub fn validate_range_inputs_strict(
    x1: &str,
    x2: &str,
    y1: &str,
    y2: &str,
    z1: &str,
    z2: &str,
) -> ScaleResult<RangeEndpoints> {
    let mut parsed = [0.0f64; 6];
    for ((field, raw), slot) in RANGE_FIELDS
        .into_iter()
        .zip([x1, x2, y1, y2, z1, z2])
        .zip(parsed.iter_mut())
    {
        *slot = parse_endpoint(field, raw)?;
    }

    let [x1, x2, y1, y2, z1, z2] = parsed;
    Ok((x1, x2, y1, y2, z1, z2))
}

fn parse_endpoint(field: &'static str, raw: &str) -> ScaleResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ScalingError::InvalidInput {
            field,
            message: format!("Range value {field} cannot be empty"),
        });
    }

    trimmed.parse::<f64>().map_err(|_| ScalingError::InvalidInput {
        field,
        message: format!("Invalid range value: {field}"),
    })
}
