use serde::Deserialize;
use serde_json::json;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::entities::{Recipe, RecipeList},
};

/// Returns the JSON schema for recipe-list LLM responses
pub fn get_recipe_list_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "recipes": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "ingredients": {
                            "type": "array",
                            "items": { "type": "string" }
                        },
                        "instructions": { "type": "string" },
                        "source": { "type": "string" }
                    },
                    "required": ["name", "ingredients", "instructions", "source"]
                }
            }
        },
        "required": ["recipes"]
    })
}

/// Returns the JSON schema for single-label ingredient classification
pub fn get_ingredient_label_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "label": { "type": "string" }
        },
        "required": ["label"]
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct IngredientLabel {
    label: String,
}

/// Parses a generative-source payload. Anything that is not exactly a
/// `{ "recipes": [...] }` document of complete recipes is rejected.
pub fn parse_recipe_list(raw: &str) -> Result<Vec<Recipe>, CoreError> {
    serde_json::from_str::<RecipeList>(raw)
        .map(|list| list.recipes)
        .map_err(|e| CoreError::SchemaViolation(format!("invalid recipe list: {}", e)))
}

pub fn parse_ingredient_label(raw: &str) -> Result<String, CoreError> {
    serde_json::from_str::<IngredientLabel>(raw)
        .map(|l| l.label)
        .map_err(|e| CoreError::SchemaViolation(format!("invalid ingredient label: {}", e)))
}
