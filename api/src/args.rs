use std::{path::PathBuf, time::Duration};

use clap::{Args as ClapArgs, Parser, ValueEnum};
use pantry_core::{
    domain::common::{
        DatabaseConfig, LLMConfig, PantryConfig, PipelineConfig, RecognizerConfig,
        RecognizerStrategy,
    },
    infrastructure::llm::gemini_client::DEFAULT_GEMINI_BASE_URL,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "pantry-api", version, about = "Recipe recommendations from photos of ingredients")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub recognizer: RecognizerArgs,

    #[command(flatten)]
    pub pipeline: PipelineArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long = "tls-cert-path", env = "TLS_CERT_PATH", requires = "tls_key_path")]
    pub tls_cert_path: Option<PathBuf>,

    #[arg(long = "tls-key-path", env = "TLS_KEY_PATH", requires = "tls_cert_path")]
    pub tls_key_path: Option<PathBuf>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(long = "database-url", env = "DATABASE_URL", default_value = "sqlite://recipe.db?mode=rwc")]
    pub url: String,

    #[arg(long = "database-max-connections", env = "DATABASE_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,

    /// JSON array of `{title, ingredients, directions, ner}` loaded into the index at startup.
    #[arg(long = "recipes-seed-file", env = "RECIPES_SEED_FILE")]
    pub seed_file: Option<PathBuf>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-2.0-flash")]
    pub gemini_model: String,

    #[arg(long = "gemini-base-url", env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecognizerKind {
    /// One label per image from the vision model.
    Classifier,
    /// Every object above the confidence threshold from a detection service.
    Detector,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct RecognizerArgs {
    #[arg(long = "recognizer", env = "RECOGNIZER", value_enum, default_value_t = RecognizerKind::Classifier)]
    pub kind: RecognizerKind,

    #[arg(long = "detector-url", env = "DETECTOR_URL")]
    pub detector_url: Option<String>,

    #[arg(long = "detector-confidence-threshold", env = "DETECTOR_CONFIDENCE_THRESHOLD", default_value_t = 0.3)]
    pub confidence_threshold: f32,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct PipelineArgs {
    #[arg(long = "max-images", env = "MAX_IMAGES", default_value_t = 10)]
    pub max_images: usize,

    #[arg(long = "max-image-bytes", env = "MAX_IMAGE_BYTES", default_value_t = 10 * 1024 * 1024)]
    pub max_image_bytes: usize,

    #[arg(long = "index-limit", env = "INDEX_LIMIT", default_value_t = 10)]
    pub index_limit: u32,

    #[arg(long = "image-fetch-timeout-secs", env = "IMAGE_FETCH_TIMEOUT_SECS", default_value_t = 10)]
    pub image_fetch_timeout_secs: u64,

    #[arg(long = "recognition-timeout-secs", env = "RECOGNITION_TIMEOUT_SECS", default_value_t = 30)]
    pub recognition_timeout_secs: u64,

    #[arg(long = "generation-timeout-secs", env = "GENERATION_TIMEOUT_SECS", default_value_t = 60)]
    pub generation_timeout_secs: u64,

    #[arg(long = "index-timeout-secs", env = "INDEX_TIMEOUT_SECS", default_value_t = 5)]
    pub index_timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<RecognizerKind> for RecognizerStrategy {
    fn from(kind: RecognizerKind) -> Self {
        match kind {
            RecognizerKind::Classifier => RecognizerStrategy::Classifier,
            RecognizerKind::Detector => RecognizerStrategy::Detector,
        }
    }
}

impl From<Args> for PantryConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                url: args.database.url,
                max_connections: args.database.max_connections,
                seed_file: args.database.seed_file,
            },
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
            },
            recognizer: RecognizerConfig {
                strategy: args.recognizer.kind.into(),
                detector_url: args.recognizer.detector_url,
                confidence_threshold: args.recognizer.confidence_threshold,
            },
            pipeline: PipelineConfig {
                max_images: args.pipeline.max_images,
                max_image_bytes: args.pipeline.max_image_bytes,
                index_limit: args.pipeline.index_limit,
                image_fetch_timeout: Duration::from_secs(args.pipeline.image_fetch_timeout_secs),
                recognition_timeout: Duration::from_secs(args.pipeline.recognition_timeout_secs),
                generation_timeout: Duration::from_secs(args.pipeline.generation_timeout_secs),
                index_timeout: Duration::from_secs(args.pipeline.index_timeout_secs),
            },
        }
    }
}
