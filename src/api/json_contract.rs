use serde::Serialize;
use tracing::warn;

use crate::error::{ScaleResult, ScalingError};

use super::{BoundaryReply, ErrorDetail, HealthStatus, ScaleRequest, ScalingEngine, ServiceInfo};

/// Status used when the body does not match the request shape.
pub const UNPROCESSABLE_STATUS: u16 = 422;

fn to_json<T: Serialize>(value: &T, what: &str) -> ScaleResult<String> {
    serde_json::to_string(value)
        .map_err(|e| ScalingError::Internal(format!("failed to serialize {what}: {e}")))
}

fn error_reply(status: u16, detail: String) -> BoundaryReply {
    let body = serde_json::json!({ "detail": detail }).to_string();
    BoundaryReply { status, body }
}

impl From<&ScalingError> for BoundaryReply {
    fn from(err: &ScalingError) -> Self {
        error_reply(err.status_code(), err.to_string())
    }
}

impl ErrorDetail {
    pub fn from_json_str(input: &str) -> ScaleResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ScalingError::Internal(format!("failed to parse error detail json: {e}"))
        })
    }
}

impl ScaleRequest {
    pub fn from_json_str(input: &str) -> ScaleResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ScalingError::InvalidFormat(format!("failed to parse scale request json: {e}"))
        })
    }
}

impl HealthStatus {
    pub fn to_json(&self) -> ScaleResult<String> {
        to_json(self, "health status")
    }
}

impl ServiceInfo {
    pub fn to_json_pretty(&self) -> ScaleResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ScalingError::Internal(format!("failed to serialize service info: {e}")))
    }
}

impl ScalingEngine {
    /// Handles one JSON-encoded scale request end to end.
    ///
    /// Success replies carry `{"x", "y", "z"}`; failures carry
    /// `{"detail": message}` with the error text unchanged.
    #[must_use]
    pub fn handle_scale_json(&self, body: &str) -> BoundaryReply {
        let request = match ScaleRequest::from_json_str(body) {
            Ok(request) => request,
            Err(err) => {
                warn!(error = %err, "rejected malformed scale request");
                return error_reply(UNPROCESSABLE_STATUS, err.to_string());
            }
        };

        match self
            .scale(&request)
            .and_then(|output| to_json(&output, "scale output"))
        {
            Ok(body) => BoundaryReply { status: 200, body },
            Err(err) => {
                warn!(status = err.status_code(), error = %err, "scale request failed");
                BoundaryReply::from(&err)
            }
        }
    }

    /// Liveness probe reply; always 200.
    #[must_use]
    pub fn handle_health(&self) -> BoundaryReply {
        match self.health().to_json() {
            Ok(body) => BoundaryReply { status: 200, body },
            Err(err) => BoundaryReply::from(&err),
        }
    }
}
