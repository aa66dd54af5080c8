use crate::config::Config;
use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};

/// CORS policy for browser clients served from another origin.
///
/// `*` in the configured list allows any origin. With no list configured,
/// development allows any origin and every other environment allows none.
pub fn cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let origins = config.cors_origin_list();
    if origins.iter().any(|o| o == "*") || (origins.is_empty() && config.is_development()) {
        return cors.allow_origin(Any);
    }

    if origins.is_empty() && config.is_production() {
        info!("No CORS origins configured, cross-origin requests are disabled");
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Skipping invalid CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(allowed))
}
