use serde::{Deserialize, Serialize};

use crate::core::AxisTriple;

/// Wire shape of a scaling request.
///
/// Field names follow the JSON body accepted by `POST /scale`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleRequest {
    pub x_input: String,
    pub y_input: String,
    pub z_input: String,
    pub x1: String,
    pub x2: String,
    pub y1: String,
    pub y2: String,
    pub z1: String,
    pub z2: String,
    pub scale_from: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_in_hex: Option<bool>,
}

impl ScaleRequest {
    /// Request with the given axis entries and empty ranges.
    #[must_use]
    pub fn new(scale_from: &str, inputs: (&str, &str, &str)) -> Self {
        Self {
            x_input: inputs.0.to_owned(),
            y_input: inputs.1.to_owned(),
            z_input: inputs.2.to_owned(),
            x1: String::new(),
            x2: String::new(),
            y1: String::new(),
            y2: String::new(),
            z1: String::new(),
            z2: String::new(),
            scale_from: scale_from.to_owned(),
            z_in_hex: None,
        }
    }

    #[must_use]
    pub fn with_ranges(
        mut self,
        x: (&str, &str),
        y: (&str, &str),
        z: (&str, &str),
    ) -> Self {
        self.x1 = x.0.to_owned();
        self.x2 = x.1.to_owned();
        self.y1 = y.0.to_owned();
        self.y2 = y.1.to_owned();
        self.z1 = z.0.to_owned();
        self.z2 = z.1.to_owned();
        self
    }

    #[must_use]
    pub fn with_z_in_hex(mut self, z_in_hex: bool) -> Self {
        self.z_in_hex = Some(z_in_hex);
        self
    }

    #[must_use]
    pub fn inputs(&self) -> AxisTriple<&str> {
        AxisTriple::new(
            self.x_input.as_str(),
            self.y_input.as_str(),
            self.z_input.as_str(),
        )
    }

    #[must_use]
    pub fn ranges(&self) -> AxisTriple<(&str, &str)> {
        AxisTriple::new(
            (self.x1.as_str(), self.x2.as_str()),
            (self.y1.as_str(), self.y2.as_str()),
            (self.z1.as_str(), self.z2.as_str()),
        )
    }
}

/// Error body returned for non-2xx replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Transport-agnostic reply: an HTTP-like status and a JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryReply {
    pub status: u16,
    pub body: String,
}

impl BoundaryReply {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
