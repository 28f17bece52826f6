use axum::Json;
use linnet_core::HealthStatus;

pub async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}
