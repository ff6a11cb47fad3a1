use crate::domain::ingredient::entities::IngredientSet;

const INGREDIENTS_PLACEHOLDER: &str = "%INGREDIENTS%";

const RECIPE_PROMPT_TEMPLATE: &str = r#"Given the following ingredients: %INGREDIENTS%, suggest real, existing recipes that can be cooked with them. Only use recipes from verified sources; do not invent new ones.
Answer with a JSON object of the form:
{
  "recipes": [
    {
      "name": "Recipe title",
      "ingredients": ["ingredient 1", "ingredient 2"],
      "instructions": "Step-by-step instructions",
      "source": "Source or link to the verified recipe"
    }
  ]
}"#;

pub const INGREDIENT_CLASSIFIER_PROMPT: &str = "Identify the single food ingredient (fruit, vegetable, meat, grain, dairy product, ...) that is most prominent in this photo. Answer with its common English name in the `label` field.";

/// Renders the generative-source prompt for a set of ingredients.
pub fn render_recipe_prompt(ingredients: &IngredientSet) -> String {
    RECIPE_PROMPT_TEMPLATE.replace(INGREDIENTS_PLACEHOLDER, &ingredients.join(", "))
}
