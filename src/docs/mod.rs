use utoipa::OpenApi;
use crate::models::*;

/// Greeting endpoint
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Fixed greeting", body = GreetingResponse)
    )
)]
#[allow(dead_code)]
pub async fn read_root_doc() {}

/// Create a new item
#[utoipa::path(
    post,
    path = "/items/",
    request_body = Item,
    responses(
        (status = 200, description = "Item accepted", body = CreateItemResponse),
        (status = 422, description = "Body failed validation", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn create_item_doc() {}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn health_check_doc() {}

/// Readiness check endpoint
#[utoipa::path(
    get,
    path = "/ready",
    responses(
        (status = 200, description = "Service is ready", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn ready_check_doc() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        read_root_doc,
        create_item_doc,
        health_check_doc,
        ready_check_doc,
    ),
    components(
        schemas(GreetingResponse, Item, CreateItemResponse, HealthResponse, ErrorResponse)
    ),
    tags(
        (name = "api", description = "API endpoints")
    )
)]
pub struct ApiDoc;
