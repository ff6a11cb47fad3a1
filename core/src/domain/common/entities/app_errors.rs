use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid preferences: {0}")]
    InvalidPreference(String),

    #[error("Image recognition failed: {0}")]
    RecognitionFailed(String),

    #[error("None of the {0} submitted images could be recognized")]
    AllRecognitionsFailed(usize),

    #[error("Recipe source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Both recipe sources failed (local index: {local_index}; generative: {generative})")]
    AllSourcesFailed {
        local_index: String,
        generative: String,
    },

    #[error("Response does not match the expected schema: {0}")]
    SchemaViolation(String),

    #[error("Timed out after {seconds}s while {operation}")]
    Timeout { operation: String, seconds: u64 },

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal server error")]
    InternalServerError,
}
