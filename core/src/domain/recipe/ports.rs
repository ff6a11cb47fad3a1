use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, ingredient::entities::IngredientSet,
    recipe::entities::Recipe,
};

/// Keyword search over the local recipe corpus.
#[cfg_attr(test, mockall::automock)]
pub trait LocalRecipeIndex: Send + Sync {
    fn search(
        &self,
        ingredients: &IngredientSet,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;
}

/// Recipes synthesized by a language model.
#[cfg_attr(test, mockall::automock)]
pub trait GenerativeRecipeSource: Send + Sync {
    fn generate(
        &self,
        ingredients: &IngredientSet,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;
}

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
