pub mod axis_value;
pub mod format;
pub mod range;
pub mod scale;
pub mod scaling;
pub mod strict;
pub mod types;

pub use axis_value::parse_axis_value;
pub use format::{format_decimal, format_hex, format_output};
pub use range::{RangeCheck, passes_numeric_gate, validate_range};
pub use scale::{AxisRange, linear_map};
pub use scaling::scale;
pub use strict::{RANGE_FIELDS, RangeEndpoints, validate_range_inputs_strict};
pub use types::{Axis, AxisTriple, AxisValue, ScalingOutput};
