use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fixed greeting returned by the root route
#[derive(Serialize, Deserialize, ToSchema)]
pub struct GreetingResponse {
    #[serde(rename = "Hello")]
    pub hello: String,
}

impl Default for GreetingResponse {
    fn default() -> Self {
        Self {
            hello: "World".to_string(),
        }
    }
}
