use futures::future::join_all;
use tracing::{info, instrument, warn};

use crate::domain::{
    common::{
        entities::app_errors::CoreError, generate_uuid_v7, services::Service, with_timeout,
    },
    health::ports::HealthCheckRepository,
    ingredient::{
        entities::IngredientSet,
        helpers::{Aggregation, aggregate_recognitions},
        ports::{ImageFetcher, IngredientRecognizer},
        value_objects::ImageSource,
    },
    recipe::{
        entities::Recipe,
        ports::{GenerativeRecipeSource, LocalRecipeIndex},
    },
    recommendation::{
        entities::{RecipeSourceKind, RecommendationFailures, RecommendationResult, SourceFailure},
        ports::RecommendationService,
        ranking::rank_recipes,
        value_objects::RecommendInput,
    },
};

impl<IF, IR, LI, GS, HC> RecommendationService for Service<IF, IR, LI, GS, HC>
where
    IF: ImageFetcher,
    IR: IngredientRecognizer,
    LI: LocalRecipeIndex,
    GS: GenerativeRecipeSource,
    HC: HealthCheckRepository,
{
    #[instrument(
        skip(self, input),
        fields(
            request_id = %generate_uuid_v7(),
            images = input.images.len(),
            preferences = input.preferences.len()
        )
    )]
    async fn recommend(&self, input: RecommendInput) -> Result<RecommendationResult, CoreError> {
        // 1. Validate input
        if input.images.is_empty() {
            return Err(CoreError::InvalidInput(
                "at least one image is required".to_string(),
            ));
        }
        if input.images.len() > self.pipeline.max_images {
            return Err(CoreError::InvalidInput(format!(
                "at most {} images can be submitted at once",
                self.pipeline.max_images
            )));
        }

        // 2. Recognize every image concurrently, then wait for all of them
        let recognitions = join_all(
            input
                .images
                .iter()
                .enumerate()
                .map(|(index, image)| self.recognize_image(index, image)),
        )
        .await;

        // 3. Union the labels
        let Aggregation {
            ingredients,
            failures: image_failures,
        } = aggregate_recognitions(recognitions)?;

        info!(
            ingredients = %ingredients.join(", "),
            failed_images = image_failures.len(),
            "ingredients recognized"
        );

        // 4. Query both sources concurrently
        let (db_result, llm_result) = self.query_sources(&ingredients).await;

        let mut failures = RecommendationFailures {
            images: image_failures,
            sources: Vec::new(),
        };

        let (db, llm) = match (db_result, llm_result) {
            (Err(db_error), Err(llm_error)) => {
                return Err(CoreError::AllSourcesFailed {
                    local_index: db_error.to_string(),
                    generative: llm_error.to_string(),
                });
            }
            (db_result, llm_result) => (
                Self::keep_or_record(RecipeSourceKind::LocalIndex, db_result, &mut failures),
                Self::keep_or_record(RecipeSourceKind::Generative, llm_result, &mut failures),
            ),
        };

        // 5. Rank each list on its own
        let result = RecommendationResult {
            llm: rank_recipes(llm, &input.preferences),
            db: rank_recipes(db, &input.preferences),
            ingredients: ingredients.to_vec(),
            failures,
        };

        info!(
            llm = result.llm.len(),
            db = result.db.len(),
            failed_sources = result.failures.sources.len(),
            "recommendation ready"
        );

        Ok(result)
    }
}

impl<IF, IR, LI, GS, HC> Service<IF, IR, LI, GS, HC>
where
    IF: ImageFetcher,
    IR: IngredientRecognizer,
    LI: LocalRecipeIndex,
    GS: GenerativeRecipeSource,
    HC: HealthCheckRepository,
{
    async fn recognize_image(
        &self,
        index: usize,
        image: &ImageSource,
    ) -> Result<Vec<String>, CoreError> {
        let data = match image {
            ImageSource::Url(url) => {
                with_timeout(
                    self.pipeline.image_fetch_timeout,
                    "fetching image",
                    self.image_fetcher.fetch(url),
                )
                .await
            }
            ImageSource::Upload(data) => Ok(data.clone()),
        };

        let labels = match data {
            Ok(data) => {
                with_timeout(
                    self.pipeline.recognition_timeout,
                    "recognizing ingredients",
                    self.recognizer.recognize(data),
                )
                .await
            }
            Err(e) => Err(e),
        };

        match &labels {
            Ok(labels) => info!(index, labels = ?labels, "image recognized"),
            Err(e) => warn!(index, image = %image.describe(), error = %e, "image skipped"),
        }

        labels
    }

    async fn query_sources(
        &self,
        ingredients: &IngredientSet,
    ) -> (Result<Vec<Recipe>, CoreError>, Result<Vec<Recipe>, CoreError>) {
        if ingredients.is_empty() {
            info!("no ingredients recognized, skipping recipe sources");
            return (Ok(Vec::new()), Ok(Vec::new()));
        }

        tokio::join!(
            with_timeout(
                self.pipeline.index_timeout,
                "searching the local recipe index",
                self.recipe_index.search(ingredients, self.pipeline.index_limit),
            ),
            with_timeout(
                self.pipeline.generation_timeout,
                "generating recipes",
                self.recipe_generator.generate(ingredients),
            ),
        )
    }

    fn keep_or_record(
        source: RecipeSourceKind,
        result: Result<Vec<Recipe>, CoreError>,
        failures: &mut RecommendationFailures,
    ) -> Vec<Recipe> {
        match result {
            Ok(recipes) => recipes,
            Err(e) => {
                warn!(source = ?source, error = %e, "recipe source failed, returning partial result");
                failures.sources.push(SourceFailure::from_error(source, &e));
                Vec::new()
            }
        }
    }
}
