use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendValidator {
    #[validate(length(min = 1, message = "at least one image url is required"))]
    pub image_urls: Vec<String>,

    /// Map of ingredient substring to weight.
    #[serde(default)]
    #[schema(value_type = Object, example = json!({"chicken": 5, "spicy": 2}))]
    pub preferences: serde_json::Value,
}
