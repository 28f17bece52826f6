//! Wire contract shared by the Linnet API and its clients.
//!
//! The API exposes a single liveness route. Successful responses carry a
//! [`HealthStatus`]; router-level failures carry an [`ApiErrorBody`].

pub mod error;
pub mod health;

pub use error::{ApiErrorBody, ErrorDetail};
pub use health::{HealthStatus, HEALTH_PATH, STATUS_OK};
