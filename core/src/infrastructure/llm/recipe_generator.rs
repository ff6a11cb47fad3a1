use std::sync::Arc;

use tracing::instrument;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::entities::IngredientSet,
    recipe::{
        entities::Recipe,
        ports::{GenerativeRecipeSource, LLMClient},
        prompt::render_recipe_prompt,
        schema::{get_recipe_list_schema, parse_recipe_list},
    },
};

/// Generative recipe source backed by any [`LLMClient`].
#[derive(Debug)]
pub struct LlmRecipeGenerator<L> {
    llm_client: Arc<L>,
}

impl<L> LlmRecipeGenerator<L> {
    pub fn new(llm_client: Arc<L>) -> Self {
        Self { llm_client }
    }
}

impl<L: LLMClient> GenerativeRecipeSource for LlmRecipeGenerator<L> {
    #[instrument(skip(self, ingredients), fields(ingredients = ingredients.len()))]
    async fn generate(&self, ingredients: &IngredientSet) -> Result<Vec<Recipe>, CoreError> {
        let prompt = render_recipe_prompt(ingredients);

        let raw_response = self
            .llm_client
            .generate_with_text(prompt, get_recipe_list_schema())
            .await?;

        parse_recipe_list(&raw_response).inspect_err(|e| {
            tracing::error!(error = %e, raw = %raw_response, "LLM answered with a malformed recipe list");
        })
    }
}
