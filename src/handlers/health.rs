use axum::Json;
use crate::models::HealthResponse;
use tracing::debug;

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    debug!("Health check requested");
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Server is running".to_string(),
    })
}

/// Readiness check endpoint
pub async fn ready_check() -> Json<HealthResponse> {
    debug!("Readiness check requested");
    // Nothing to wait on: the service holds no connections or caches.
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Service is ready".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_ok() {
        let Json(body) = health_check().await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.message, "Server is running");
    }

    #[tokio::test]
    async fn ready_reports_ok() {
        let Json(body) = ready_check().await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.message, "Service is ready");
    }
}
