use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    ingredient::ports::{ImageFetcher, IngredientRecognizer},
    recipe::ports::{GenerativeRecipeSource, LocalRecipeIndex},
};

impl<IF, IR, LI, GS, HC> HealthCheckService for Service<IF, IR, LI, GS, HC>
where
    IF: ImageFetcher,
    IR: IngredientRecognizer,
    LI: LocalRecipeIndex,
    GS: GenerativeRecipeSource,
    HC: HealthCheckRepository,
{
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
