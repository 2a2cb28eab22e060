//! scaling-range: linear coordinate scaling across X/Y/Z axes.
//!
//! A value entered on one axis is mapped into the other two through their
//! configured ranges. The Z axis may be read and written as hexadecimal.
//! `core` holds the pure operations; `api` wraps them behind a request
//! adapter that a transport layer can expose.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{ScaleRequest, ScalingEngine, ScalingEngineConfig};
pub use error::{ScaleResult, ScalingError};
