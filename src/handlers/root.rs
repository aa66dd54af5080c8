use axum::Json;
use crate::models::GreetingResponse;
use tracing::debug;

/// Greeting endpoint
pub async fn read_root() -> Json<GreetingResponse> {
    debug!("Greeting requested");
    Json(GreetingResponse::default())
}
