use std::collections::HashSet;

use crate::domain::recipe::entities::Recipe;

const STOPWORDS: &[&str] = &[
    "and", "or", "with", "of", "the", "a", "an", "to", "in", "for", "on", "at", "by", "from", "as",
    "but", "is", "are", "was", "were",
];

/// Lowercase words of a recipe's name, ingredients and instructions, without
/// stopwords or duplicates, in first-seen order.
pub fn generate_keywords(recipe: &Recipe) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut keywords = Vec::new();

    let texts = std::iter::once(recipe.name.as_str())
        .chain(recipe.ingredients.iter().map(String::as_str))
        .chain(std::iter::once(recipe.instructions.as_str()));

    for word in texts.flat_map(str::split_whitespace) {
        let word = word.to_lowercase();
        if STOPWORDS.contains(&word.as_str()) {
            continue;
        }
        if seen.insert(word.clone()) {
            keywords.push(word);
        }
    }

    keywords
}

/// Keywords of several recipes, deduplicated across all of them.
pub fn generate_keywords_from_recipes(recipes: &[Recipe]) -> Vec<String> {
    let mut seen = HashSet::new();
    recipes
        .iter()
        .flat_map(generate_keywords)
        .filter(|keyword| seen.insert(keyword.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_skip_stopwords_and_duplicates() {
        let recipe = Recipe::new(
            "Tomato and Egg",
            vec!["2 tomatoes".into(), "3 eggs".into()],
            "Beat the eggs with salt",
            "",
        );

        assert_eq!(
            generate_keywords(&recipe),
            vec!["tomato", "egg", "2", "tomatoes", "3", "eggs", "beat", "salt"]
        );
    }

    #[test]
    fn test_keywords_across_recipes_are_unique() {
        let a = Recipe::new("Egg fried rice", vec!["egg".into()], "", "");
        let b = Recipe::new("Egg salad", vec!["egg".into()], "", "");

        assert_eq!(
            generate_keywords_from_recipes(&[a, b]),
            vec!["egg", "fried", "rice", "salad"]
        );
    }
}
