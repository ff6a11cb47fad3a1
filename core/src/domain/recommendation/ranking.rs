use crate::domain::{recipe::entities::Recipe, recommendation::value_objects::PreferenceMap};

/// Sums the weight of every preference whose key occurs in the recipe's JSON
/// serialization. Matching is a case-insensitive substring scan over the
/// whole recipe, not just its ingredient list.
pub fn score_recipe(recipe: &Recipe, preferences: &PreferenceMap) -> f64 {
    if preferences.is_empty() {
        return 0.0;
    }

    let blob = serialize_for_scoring(recipe);
    preferences
        .iter()
        .filter(|(key, _)| blob.contains(&key.to_lowercase()))
        .map(|(_, weight)| weight)
        .sum()
}

/// Orders recipes by descending score. The sort is stable, so recipes with
/// equal scores keep the order their source returned them in.
pub fn rank_recipes(recipes: Vec<Recipe>, preferences: &PreferenceMap) -> Vec<Recipe> {
    let mut scored: Vec<(f64, Recipe)> = recipes
        .into_iter()
        .map(|recipe| (score_recipe(&recipe, preferences), recipe))
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    scored.into_iter().map(|(_, recipe)| recipe).collect()
}

fn serialize_for_scoring(recipe: &Recipe) -> String {
    match serde_json::to_string(recipe) {
        Ok(blob) => blob.to_lowercase(),
        Err(e) => {
            tracing::error!(recipe = %recipe.name, error = %e, "failed to serialize recipe for scoring");
            String::new()
        }
    }
}
