use tracing::debug;

use crate::core::{self, ScalingOutput, validate_range_inputs_strict};
use crate::error::ScaleResult;

use super::{HEALTHY_STATUS, HealthStatus, ScaleRequest, ScalingEngineConfig, ServiceInfo};

/// Request-facing entry point.
///
/// Holds only immutable configuration, so one engine can serve any number of
/// callers concurrently.
#[derive(Debug, Clone)]
pub struct ScalingEngine {
    config: ScalingEngineConfig,
}

impl ScalingEngine {
    pub fn new(config: ScalingEngineConfig) -> ScaleResult<Self> {
        let config = config.validate()?;
        debug!(
            service = %config.service_name,
            strict_ranges = config.strict_ranges,
            "scaling engine init"
        );
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &ScalingEngineConfig {
        &self.config
    }

    /// Scales `request` into its `{x, y, z}` output triple.
    pub fn scale(&self, request: &ScaleRequest) -> ScaleResult<ScalingOutput> {
        if self.config.strict_ranges {
            validate_range_inputs_strict(
                &request.x1,
                &request.x2,
                &request.y1,
                &request.y2,
                &request.z1,
                &request.z2,
            )?;
        }

        let z_hex_out = request.z_in_hex.unwrap_or(self.config.z_in_hex_default);
        core::scale(
            request.inputs(),
            request.ranges(),
            &request.scale_from,
            z_hex_out,
        )
    }

    #[must_use]
    pub fn health(&self) -> HealthStatus {
        HealthStatus {
            status: HEALTHY_STATUS.to_owned(),
            service: self.config.service_name.clone(),
        }
    }

    #[must_use]
    pub fn service_info(&self) -> ServiceInfo {
        ServiceInfo::new(&self.config.version)
    }
}
