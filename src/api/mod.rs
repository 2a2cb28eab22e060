mod engine;
mod engine_config;
mod json_contract;
mod request;
mod service_info;

pub use engine::ScalingEngine;
pub use engine_config::ScalingEngineConfig;
pub use json_contract::UNPROCESSABLE_STATUS;
pub use request::{BoundaryReply, ErrorDetail, ScaleRequest};
pub use service_info::{HEALTHY_STATUS, HealthStatus, ServiceInfo};
