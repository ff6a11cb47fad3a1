pub mod db;
pub mod health;
pub mod image;
pub mod llm;
pub mod recipe_index;
pub mod recognition;
