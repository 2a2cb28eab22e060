use tracing::{debug, trace, warn};

use crate::core::axis_value::parse_axis_value;
use crate::core::format::format_output;
use crate::core::range::{RangeCheck, validate_range};
use crate::core::types::{Axis, AxisTriple, AxisValue, ScalingOutput};
use crate::error::ScaleResult;

/// Scales the driving axis entry into the other two axes.
///
/// `inputs` holds the raw per-axis entries and `ranges` the raw
/// `(start, end)` endpoints per axis. `z_hex_out` makes the Z axis hexadecimal,
/// both when it is read as the driving axis and when it is written as a target.
///
/// Ranges are checked independently: an unusable range only blanks the
/// outputs that depend on it. The driving entry is echoed back verbatim.
pub fn scale(
    inputs: AxisTriple<&str>,
    ranges: AxisTriple<(&str, &str)>,
    driving_axis: &str,
    z_hex_out: bool,
) -> ScaleResult<ScalingOutput> {
    let checks = AxisTriple::new(
        validate_range(ranges.x.0, ranges.x.1)?,
        validate_range(ranges.y.0, ranges.y.1)?,
        validate_range(ranges.z.0, ranges.z.1)?,
    );
    let driving: Axis = driving_axis.parse()?;
    debug!(
        axis = %driving,
        z_hex_out,
        x_range = checks.x.is_valid(),
        y_range = checks.y.is_valid(),
        z_range = checks.z.is_valid(),
        "scale request"
    );

    let raw = *inputs.get(driving);
    let mut output = ScalingOutput::default();
    *output.get_mut(driving) = raw.to_owned();

    let hex_in = driving == Axis::Z && z_hex_out;
    let value = match parse_axis_value(raw, hex_in)? {
        AxisValue::Present(value) => value,
        AxisValue::Absent => {
            trace!(axis = %driving, "driving input absent");
            return Ok(output);
        }
    };

    let RangeCheck::Valid(source) = *checks.get(driving) else {
        return Ok(output);
    };

    for target in driving.others() {
        let RangeCheck::Valid(target_range) = *checks.get(target) else {
            continue;
        };
        let hex_out = target == Axis::Z && z_hex_out;
        *output.get_mut(target) = source
            .map_into(value, target_range)
            .and_then(|mapped| format_output(mapped, hex_out))
            .unwrap_or_else(|err| {
                warn!(axis = %target, error = %err, "mapped value dropped");
                String::new()
            });
    }

    Ok(output)
}
