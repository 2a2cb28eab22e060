use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScalingError;

/// Coordinate axis that can drive a scaling request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// The two axes that receive computed values when `self` drives, in output order.
    #[must_use]
    pub fn others(self) -> [Axis; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::X, Axis::Z],
            Axis::Z => [Axis::X, Axis::Y],
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = ScalingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            other => Err(ScalingError::InvalidAxis(other.to_owned())),
        }
    }
}

/// Parsed axis input: either a number or "nothing entered yet".
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisValue {
    Present(f64),
    Absent,
}

impl AxisValue {
    #[must_use]
    pub fn value(self) -> Option<f64> {
        match self {
            AxisValue::Present(value) => Some(value),
            AxisValue::Absent => None,
        }
    }
}

/// One value per axis.
///
/// Used for raw inputs (`AxisTriple<&str>`), raw range endpoints and the
/// string output of a scaling call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisTriple<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> AxisTriple<T> {
    #[must_use]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn get(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    pub fn get_mut(&mut self, axis: Axis) -> &mut T {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

/// The `{x, y, z}` string triple returned by a scaling call.
pub type ScalingOutput = AxisTriple<String>;
