use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A candidate recipe from either source. Created once per request and only
/// ever scored and reordered afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    /// Citation or link for generated recipes, empty for local ones.
    pub source: String,
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        ingredients: Vec<String>,
        instructions: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients,
            instructions: instructions.into(),
            source: source.into(),
        }
    }

    /// Builds a recipe from a local index row. The index stores ingredients as
    /// one opaque delimited string, which is kept verbatim as a single entry.
    pub fn from_index_row(title: String, ingredients: String, directions: String) -> Self {
        Self {
            name: title,
            ingredients: vec![ingredients],
            instructions: directions,
            source: String::new(),
        }
    }
}

/// Wire shape the generative source must answer with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct RecipeList {
    pub recipes: Vec<Recipe>,
}

/// One row of the searchable corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedRecipe {
    pub title: String,
    pub ingredients: String,
    pub directions: String,
    #[serde(default)]
    pub ner: String,
}
