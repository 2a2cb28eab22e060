use crate::error::{ScaleResult, ScalingError};

/// Maps `value` from `[in_start, in_end]` onto `[out_start, out_end]`.
///
/// Values outside the input range extrapolate along the same line. Fails with
/// [`ScalingError::DivideByZero`] when the input range is degenerate.
pub fn linear_map(
    value: f64,
    in_start: f64,
    in_end: f64,
    out_start: f64,
    out_end: f64,
) -> ScaleResult<f64> {
    let in_span = in_end - in_start;
    if in_span == 0.0 {
        return Err(ScalingError::DivideByZero);
    }

    let slope = (out_end - out_start) / in_span;
    let intercept = out_start - slope * in_start;
    Ok(slope * value + intercept)
}

/// A usable range for one axis: both endpoints parsed, `start != end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    start: f64,
    end: f64,
}

impl AxisRange {
    pub fn new(start: f64, end: f64) -> ScaleResult<Self> {
        if start == end {
            return Err(ScalingError::DivideByZero);
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(self) -> f64 {
        self.start
    }

    #[must_use]
    pub fn end(self) -> f64 {
        self.end
    }

    /// Maps `value` expressed in this range onto `target`.
    pub fn map_into(self, value: f64, target: AxisRange) -> ScaleResult<f64> {
        linear_map(value, self.start, self.end, target.start, target.end)
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisRange, linear_map};
    use crate::error::ScalingError;

    #[test]
    fn maps_midpoint_between_ranges() {
        assert_eq!(linear_map(5.0, 0.0, 10.0, 0.0, 100.0).expect("map"), 50.0);
        assert_eq!(linear_map(2.5, 0.0, 10.0, 0.0, 100.0).expect("map"), 25.0);
    }

    #[test]
    fn reversed_output_range_inverts_direction() {
        assert_eq!(linear_map(0.0, 0.0, 10.0, 100.0, 0.0).expect("map"), 100.0);
        assert_eq!(linear_map(10.0, 0.0, 10.0, 100.0, 0.0).expect("map"), 0.0);
    }

    #[test]
    fn degenerate_input_range_is_divide_by_zero() {
        let err = linear_map(5.0, 3.0, 3.0, 0.0, 100.0).expect_err("degenerate range");
        assert_eq!(err, ScalingError::DivideByZero);
        assert_eq!(format!("{err}"), "Input range cannot be zero.");
    }

    #[test]
    fn axis_range_rejects_equal_endpoints() {
        assert!(AxisRange::new(1.0, 1.0).is_err());
        let range = AxisRange::new(0.0, 10.0).expect("valid range");
        let target = AxisRange::new(0.0, 50.0).expect("valid range");
        assert_eq!(range.map_into(5.0, target).expect("map"), 25.0);
    }
}
