use pantry_core::domain::recipe::entities::Recipe;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateKeywordsValidator {
    #[validate(length(min = 1, message = "at least one recipe is required"))]
    pub recipes: Vec<Recipe>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecordHistoryValidator {
    /// Current preference map; missing or null starts from scratch.
    #[serde(default)]
    #[schema(value_type = Object, example = json!({"chicken": 2}))]
    pub preferences: serde_json::Value,

    pub keywords: Vec<String>,
}
