use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating an item.
///
/// `name` and `price` are required. `description` and `tax` may be
/// omitted or `null`. Unknown fields are ignored.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Item {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub tax: Option<f64>,
}

/// Response for creating an item
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateItemResponse {
    pub item_name: String,
    pub item_price: f64,
}

impl From<Item> for CreateItemResponse {
    fn from(item: Item) -> Self {
        Self {
            item_name: item.name,
            item_price: item.price,
        }
    }
}
