use std::sync::Arc;

use crate::domain::common::PipelineConfig;

/// Application service; every port is injected as a type parameter.
pub struct Service<IF, IR, LI, GS, HC> {
    pub(crate) image_fetcher: Arc<IF>,
    pub(crate) recognizer: Arc<IR>,
    pub(crate) recipe_index: Arc<LI>,
    pub(crate) recipe_generator: Arc<GS>,
    pub(crate) health_check_repository: Arc<HC>,
    pub(crate) pipeline: PipelineConfig,
}

impl<IF, IR, LI, GS, HC> Service<IF, IR, LI, GS, HC> {
    pub fn new(
        image_fetcher: IF,
        recognizer: IR,
        recipe_index: LI,
        recipe_generator: GS,
        health_check_repository: HC,
        pipeline: PipelineConfig,
    ) -> Self {
        Self {
            image_fetcher: Arc::new(image_fetcher),
            recognizer: Arc::new(recognizer),
            recipe_index: Arc::new(recipe_index),
            recipe_generator: Arc::new(recipe_generator),
            health_check_repository: Arc::new(health_check_repository),
            pipeline,
        }
    }

    pub fn pipeline(&self) -> &PipelineConfig {
        &self.pipeline
    }
}

impl<IF, IR, LI, GS, HC> Clone for Service<IF, IR, LI, GS, HC> {
    fn clone(&self) -> Self {
        Self {
            image_fetcher: Arc::clone(&self.image_fetcher),
            recognizer: Arc::clone(&self.recognizer),
            recipe_index: Arc::clone(&self.recipe_index),
            recipe_generator: Arc::clone(&self.recipe_generator),
            health_check_repository: Arc::clone(&self.health_check_repository),
            pipeline: self.pipeline.clone(),
        }
    }
}
