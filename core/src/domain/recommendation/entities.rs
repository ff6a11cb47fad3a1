use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::entities::app_errors::CoreError, ingredient::entities::ImageFailure,
    recipe::entities::Recipe,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecipeSourceKind {
    LocalIndex,
    Generative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Unavailable,
    SchemaViolation,
    Timeout,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SourceFailure {
    pub source: RecipeSourceKind,
    pub kind: FailureKind,
    pub message: String,
}

impl SourceFailure {
    pub fn from_error(source: RecipeSourceKind, error: &CoreError) -> Self {
        let kind = match error {
            CoreError::SchemaViolation(_) => FailureKind::SchemaViolation,
            CoreError::Timeout { .. } => FailureKind::Timeout,
            _ => FailureKind::Unavailable,
        };

        Self {
            source,
            kind,
            message: error.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecommendationFailures {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ImageFailure>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<SourceFailure>,
}

impl RecommendationFailures {
    pub fn is_empty(&self) -> bool {
        self.images.is_empty() && self.sources.is_empty()
    }

    pub fn source_failed(&self, source: RecipeSourceKind) -> bool {
        self.sources.iter().any(|f| f.source == source)
    }
}

/// Both ranked lists, kept apart by provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecommendationResult {
    /// Recipes from the generative source.
    pub llm: Vec<Recipe>,
    /// Recipes from the local index.
    pub db: Vec<Recipe>,
    /// Ingredients the recipes were looked up with.
    pub ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "RecommendationFailures::is_empty")]
    pub failures: RecommendationFailures,
}
