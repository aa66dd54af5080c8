use axum::{
    http::{StatusCode, Uri},
    response::Redirect,
    Json,
};
use crate::{extractors::ValidatedJson, models::{CreateItemResponse, Item}};
use tracing::debug;

/// Create an item and echo back its name and price.
///
/// The body is validated by [`ValidatedJson`] before this runs; any schema
/// failure has already been answered with a 422.
pub async fn create_item(
    ValidatedJson(item): ValidatedJson<Item>,
) -> (StatusCode, Json<CreateItemResponse>) {
    debug!("Creating item '{}' priced {}", item.name, item.price);

    (StatusCode::OK, Json(CreateItemResponse::from(item)))
}

/// Redirect `/items` to `/items/`, keeping the query string
pub async fn redirect_items(uri: Uri) -> Redirect {
    let target = match uri.query() {
        Some(query) => format!("/items/?{}", query),
        None => "/items/".to_string(),
    };
    debug!("Redirecting {} to {}", uri, target);
    Redirect::temporary(&target)
}
