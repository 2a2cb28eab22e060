use serde::{Deserialize, Serialize};

use crate::error::{ScaleResult, ScalingError};

/// Public engine bootstrap configuration.
///
/// Every field has a default so hosts can persist only what they change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalingEngineConfig {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_version")]
    pub version: String,
    /// Require all six range endpoints to be present and numeric before scaling.
    #[serde(default)]
    pub strict_ranges: bool,
    /// Hex mode for the Z axis when a request does not set `z_in_hex`.
    #[serde(default)]
    pub z_in_hex_default: bool,
}

impl Default for ScalingEngineConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            version: default_version(),
            strict_ranges: false,
            z_in_hex_default: false,
        }
    }
}

impl ScalingEngineConfig {
    #[must_use]
    pub fn with_strict_ranges(mut self, strict_ranges: bool) -> Self {
        self.strict_ranges = strict_ranges;
        self
    }

    #[must_use]
    pub fn with_z_in_hex_default(mut self, z_in_hex_default: bool) -> Self {
        self.z_in_hex_default = z_in_hex_default;
        self
    }

    #[must_use]
    pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = service_name.into();
        self
    }

    pub fn from_json_str(input: &str) -> ScaleResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ScalingError::InvalidConfig(format!("failed to parse engine config json: {e}"))
        })
    }

    pub fn to_json_pretty(&self) -> ScaleResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ScalingError::Internal(format!("failed to serialize engine config: {e}"))
        })
    }

    pub(super) fn validate(self) -> ScaleResult<Self> {
        if self.service_name.trim().is_empty() {
            return Err(ScalingError::InvalidConfig(
                "service name must not be empty".to_owned(),
            ));
        }
        if self.version.trim().is_empty() {
            return Err(ScalingError::InvalidConfig(
                "version must not be empty".to_owned(),
            ));
        }
        Ok(self)
    }
}

fn default_service_name() -> String {
    "scaling-range-backend".to_owned()
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_owned()
}
