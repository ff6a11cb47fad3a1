use std::{future::Future, time::Duration};

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

use crate::domain::common::entities::app_errors::CoreError;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct PantryConfig {
    pub database: DatabaseConfig,
    pub llm: LLMConfig,
    pub recognizer: RecognizerConfig,
    pub pipeline: PipelineConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub seed_file: Option<std::path::PathBuf>,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
}

#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum RecognizerStrategy {
    /// One label per image, predicted by the vision model.
    Classifier,
    /// Every object found by a remote detection service.
    Detector,
}

#[derive(Clone, Debug)]
pub struct RecognizerConfig {
    pub strategy: RecognizerStrategy,
    pub detector_url: Option<String>,
    pub confidence_threshold: f32,
}

#[derive(Clone, Debug)]
pub struct PipelineConfig {
    pub max_images: usize,
    pub max_image_bytes: usize,
    pub index_limit: u32,
    pub image_fetch_timeout: Duration,
    pub recognition_timeout: Duration,
    pub generation_timeout: Duration,
    pub index_timeout: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_images: 10,
            max_image_bytes: 10 * 1024 * 1024,
            index_limit: 10,
            image_fetch_timeout: Duration::from_secs(10),
            recognition_timeout: Duration::from_secs(30),
            generation_timeout: Duration::from_secs(60),
            index_timeout: Duration::from_secs(5),
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

/// Runs `future` under `limit`, turning an elapsed deadline into [`CoreError::Timeout`].
pub async fn with_timeout<T, F>(limit: Duration, operation: &str, future: F) -> Result<T, CoreError>
where
    F: Future<Output = Result<T, CoreError>>,
{
    match tokio::time::timeout(limit, future).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(operation, timeout_secs = limit.as_secs(), "operation timed out");
            Err(CoreError::Timeout {
                operation: operation.to_string(),
                seconds: limit.as_secs(),
            })
        }
    }
}
