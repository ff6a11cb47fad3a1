use std::{path::Path, sync::Arc};

use tracing::{error, info};
use url::Url;

use crate::{
    domain::{
        common::{
            PantryConfig, RecognizerStrategy, entities::app_errors::CoreError, services::Service,
        },
        recipe::entities::IndexedRecipe,
    },
    infrastructure::{
        db::sqlite::{Sqlite, SqliteConfig},
        health::repositories::health_check_repository::SqliteHealthCheckRepository,
        image::ReqwestImageFetcher,
        llm::{GeminiLLMClient, LlmRecipeGenerator},
        recipe_index::SqliteRecipeIndex,
        recognition::{ConfiguredRecognizer, HttpIngredientDetector, LlmIngredientClassifier},
    },
};

pub type PantryService = Service<
    ReqwestImageFetcher,
    ConfiguredRecognizer,
    SqliteRecipeIndex,
    LlmRecipeGenerator<GeminiLLMClient>,
    SqliteHealthCheckRepository,
>;

pub async fn create_service(config: PantryConfig) -> Result<PantryService, CoreError> {
    let database = Sqlite::new(SqliteConfig {
        database_url: config.database.url.clone(),
        max_connections: config.database.max_connections,
    })
    .await?;

    let recipe_index = SqliteRecipeIndex::new(database.get_db());
    recipe_index.ensure_schema().await?;

    if let Some(seed_file) = &config.database.seed_file {
        // Seeding a populated index would duplicate every row.
        let existing = recipe_index.count().await?;
        if existing == 0 {
            let inserted = seed_recipe_index(&recipe_index, seed_file).await?;
            info!(inserted, file = %seed_file.display(), "recipe index seeded");
        } else {
            info!(existing, file = %seed_file.display(), "recipe index already populated, skipping seed");
        }
    }

    let llm_client = Arc::new(GeminiLLMClient::new(
        config.llm.gemini_api_key.clone(),
        config.llm.gemini_model.clone(),
        config.llm.gemini_base_url.clone(),
    ));

    let recognizer = match config.recognizer.strategy {
        RecognizerStrategy::Classifier => {
            ConfiguredRecognizer::Classifier(LlmIngredientClassifier::new(llm_client.clone()))
        }
        RecognizerStrategy::Detector => {
            let raw_url = config.recognizer.detector_url.as_deref().ok_or_else(|| {
                CoreError::InvalidInput(
                    "the detector recognizer requires a detector url".to_string(),
                )
            })?;
            let endpoint = Url::parse(raw_url).map_err(|e| {
                CoreError::InvalidInput(format!("invalid detector url {}: {}", raw_url, e))
            })?;
            ConfiguredRecognizer::Detector(HttpIngredientDetector::new(
                endpoint,
                config.recognizer.confidence_threshold,
            ))
        }
    };

    info!(
        strategy = ?config.recognizer.strategy,
        model = %config.llm.gemini_model,
        "recognizer configured"
    );

    Ok(Service::new(
        ReqwestImageFetcher::new(config.pipeline.max_image_bytes),
        recognizer,
        recipe_index,
        LlmRecipeGenerator::new(llm_client),
        SqliteHealthCheckRepository::new(database.get_db()),
        config.pipeline,
    ))
}

/// Loads a JSON array of `{title, ingredients, directions, ner}` rows into the index.
async fn seed_recipe_index(index: &SqliteRecipeIndex, path: &Path) -> Result<usize, CoreError> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        error!("Failed to read seed file {}: {}", path.display(), e);
        CoreError::InvalidInput(format!("cannot read seed file {}: {}", path.display(), e))
    })?;

    let recipes: Vec<IndexedRecipe> = serde_json::from_str(&content).map_err(|e| {
        error!("Failed to parse seed file {}: {}", path.display(), e);
        CoreError::InvalidInput(format!("invalid seed file {}: {}", path.display(), e))
    })?;

    index.insert_batch(&recipes).await
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::{
        common::{DatabaseConfig, LLMConfig, PipelineConfig, RecognizerConfig},
        health::ports::HealthCheckService,
        ingredient::entities::IngredientSet,
        recipe::ports::LocalRecipeIndex,
    };

    fn config(strategy: RecognizerStrategy, detector_url: Option<&str>) -> PantryConfig {
        PantryConfig {
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
                seed_file: None,
            },
            llm: LLMConfig {
                gemini_api_key: "test-key".to_string(),
                gemini_model: "gemini-2.0-flash".to_string(),
                gemini_base_url: "http://127.0.0.1:9".to_string(),
            },
            recognizer: RecognizerConfig {
                strategy,
                detector_url: detector_url.map(str::to_string),
                confidence_threshold: 0.3,
            },
            pipeline: PipelineConfig {
                generation_timeout: Duration::from_secs(1),
                ..PipelineConfig::default()
            },
        }
    }

    #[tokio::test]
    async fn test_create_service_with_classifier() {
        let service = create_service(config(RecognizerStrategy::Classifier, None))
            .await
            .unwrap();

        let status = service.readness().await.unwrap();
        assert_eq!(status.recipe_count, Some(0));
        assert!(matches!(
            service.recognizer.as_ref(),
            ConfiguredRecognizer::Classifier(_)
        ));
    }

    #[tokio::test]
    async fn test_detector_requires_url() {
        let error = create_service(config(RecognizerStrategy::Detector, None))
            .await
            .err()
            .unwrap();

        assert!(matches!(error, CoreError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_create_service_with_detector() {
        let service = create_service(config(
            RecognizerStrategy::Detector,
            Some("http://127.0.0.1:8500/detect"),
        ))
        .await
        .unwrap();

        assert!(matches!(
            service.recognizer.as_ref(),
            ConfiguredRecognizer::Detector(_)
        ));
    }

    #[tokio::test]
    async fn test_seed_file_populates_index() {
        let path = std::env::temp_dir().join(format!("pantry-seed-{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(
            &path,
            r#"[{"title":"Omelette","ingredients":"[\"egg\", \"butter\"]","directions":"Whisk and fry."}]"#,
        )
        .await
        .unwrap();

        let mut config = config(RecognizerStrategy::Classifier, None);
        config.database.seed_file = Some(path.clone());
        let service = create_service(config).await.unwrap();
        let _ = tokio::fs::remove_file(&path).await;

        let mut ingredients = IngredientSet::new();
        ingredients.insert_label("egg");
        let recipes = service.recipe_index.search(&ingredients, 10).await.unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Omelette");
    }

    #[tokio::test]
    async fn test_restart_does_not_reseed_populated_index() {
        let dir = std::env::temp_dir().join(format!("pantry-restart-{}", uuid::Uuid::new_v4()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let seed = dir.join("seed.json");
        tokio::fs::write(
            &seed,
            r#"[{"title":"Omelette","ingredients":"[\"egg\", \"butter\"]","directions":"Whisk and fry."}]"#,
        )
        .await
        .unwrap();

        let mut config = config(RecognizerStrategy::Classifier, None);
        config.database.url = format!("sqlite://{}?mode=rwc", dir.join("recipes.db").display());
        config.database.max_connections = 2;
        config.database.seed_file = Some(seed);

        drop(create_service(config.clone()).await.unwrap());
        let service = create_service(config).await.unwrap();

        let mut ingredients = IngredientSet::new();
        ingredients.insert_label("egg");
        let recipes = service.recipe_index.search(&ingredients, 10).await.unwrap();
        let _ = tokio::fs::remove_dir_all(&dir).await;

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Omelette");
    }

    #[tokio::test]
    async fn test_invalid_seed_file_is_rejected() {
        let path = std::env::temp_dir().join(format!("pantry-seed-{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, "{not json").await.unwrap();

        let mut config = config(RecognizerStrategy::Classifier, None);
        config.database.seed_file = Some(path.clone());
        let error = create_service(config).await.err().unwrap();
        let _ = tokio::fs::remove_file(&path).await;

        assert!(matches!(error, CoreError::InvalidInput(_)));
    }
}
