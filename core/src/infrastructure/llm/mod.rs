pub mod gemini_client;
pub mod recipe_generator;

pub use gemini_client::GeminiLLMClient;
pub use recipe_generator::LlmRecipeGenerator;
