use crate::{
    config::Config,
    docs::ApiDoc,
    routes::{cors_layer, create_api_routes, create_health_routes},
};
use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Compose the full application router
pub fn create_app(config: &Config) -> Router {
    Router::new()
        .merge(create_api_routes())
        .merge(create_health_routes())
        // Mount Swagger UI
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config))
}
