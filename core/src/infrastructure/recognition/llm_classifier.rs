use std::sync::Arc;

use bytes::Bytes;
use tracing::{instrument, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::ports::IngredientRecognizer,
    recipe::{
        ports::LLMClient,
        prompt::INGREDIENT_CLASSIFIER_PROMPT,
        schema::{get_ingredient_label_schema, parse_ingredient_label},
    },
};

/// Single-label classifier: asks a vision model for the most prominent
/// ingredient of the photo.
#[derive(Debug)]
pub struct LlmIngredientClassifier<L> {
    llm_client: Arc<L>,
}

impl<L> LlmIngredientClassifier<L> {
    pub fn new(llm_client: Arc<L>) -> Self {
        Self { llm_client }
    }
}

impl<L: LLMClient> IngredientRecognizer for LlmIngredientClassifier<L> {
    #[instrument(skip(self, image), fields(bytes = image.len()))]
    async fn recognize(&self, image: Bytes) -> Result<Vec<String>, CoreError> {
        let raw = self
            .llm_client
            .generate_with_image(
                INGREDIENT_CLASSIFIER_PROMPT.to_string(),
                image.to_vec(),
                get_ingredient_label_schema(),
            )
            .await
            .map_err(|e| CoreError::RecognitionFailed(e.to_string()))?;

        let label = parse_ingredient_label(&raw).map_err(|e| {
            warn!(raw = %raw, "classifier answered with an unexpected payload");
            CoreError::RecognitionFailed(e.to_string())
        })?;

        Ok(vec![label])
    }
}
