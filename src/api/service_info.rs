use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const HEALTHY_STATUS: &str = "healthy";

/// Liveness probe payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

/// Root endpoint payload describing the service.
///
/// `endpoints` keeps insertion order so listings stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub endpoints: IndexMap<String, String>,
}

impl ServiceInfo {
    pub(super) fn new(version: &str) -> Self {
        let mut endpoints = IndexMap::new();
        endpoints.insert(
            "POST /scale".to_owned(),
            "Perform scaling calculations".to_owned(),
        );
        endpoints.insert("GET /health".to_owned(), "Health check".to_owned());

        Self {
            message: "Scaling Range Backend API".to_owned(),
            version: version.to_owned(),
            endpoints,
        }
    }
}
