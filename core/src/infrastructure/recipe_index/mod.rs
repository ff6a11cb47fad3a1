pub mod sqlite_recipe_index;

pub use sqlite_recipe_index::SqliteRecipeIndex;
