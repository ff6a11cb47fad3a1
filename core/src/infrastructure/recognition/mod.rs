use bytes::Bytes;

use crate::{
    domain::{common::entities::app_errors::CoreError, ingredient::ports::IngredientRecognizer},
    infrastructure::llm::GeminiLLMClient,
};

pub mod http_detector;
pub mod llm_classifier;

pub use http_detector::HttpIngredientDetector;
pub use llm_classifier::LlmIngredientClassifier;

/// The recognizer selected at startup.
#[derive(Debug)]
pub enum ConfiguredRecognizer {
    Classifier(LlmIngredientClassifier<GeminiLLMClient>),
    Detector(HttpIngredientDetector),
}

impl IngredientRecognizer for ConfiguredRecognizer {
    async fn recognize(&self, image: Bytes) -> Result<Vec<String>, CoreError> {
        match self {
            ConfiguredRecognizer::Classifier(classifier) => classifier.recognize(image).await,
            ConfiguredRecognizer::Detector(detector) => detector.recognize(image).await,
        }
    }
}
