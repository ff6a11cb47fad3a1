pub mod generate_keywords;
pub mod record_history;
