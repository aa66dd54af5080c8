use crate::handlers::{create_item, health_check, read_root, ready_check, redirect_items};
use axum::{routing::{any, get, post}, Router};

/// Create API routes
pub fn create_api_routes() -> Router {
    Router::new()
        .route("/", get(read_root))
        .route("/items/", post(create_item))
        .route("/items", any(redirect_items))
}

/// Create liveness and readiness routes
pub fn create_health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(ready_check))
}
