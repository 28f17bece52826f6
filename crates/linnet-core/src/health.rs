use serde::{Deserialize, Serialize};

/// Path of the liveness route.
pub const HEALTH_PATH: &str = "/health";

/// Status reported by a live service.
pub const STATUS_OK: &str = "ok";

/// Payload of a successful `GET /health`.
///
/// Built fresh for every request and dropped once serialized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }

    /// The status every live service reports.
    pub fn ok() -> Self {
        Self::new(STATUS_OK)
    }
}
