use std::time::Instant;

use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
};

#[derive(Debug, Clone)]
pub struct SqliteHealthCheckRepository {
    pub db: DatabaseConnection,
}

impl SqliteHealthCheckRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn ping(&self) -> Result<u64, CoreError> {
        let start = Instant::now();

        self.db
            .execute(Statement::from_string(DatabaseBackend::Sqlite, "SELECT 1"))
            .await
            .map_err(|e| {
                error!("Database health check failed: {}", e);
                CoreError::DatabaseError(e.to_string())
            })?;

        Ok(start.elapsed().as_millis() as u64)
    }
}

impl HealthCheckRepository for SqliteHealthCheckRepository {
    async fn health(&self) -> Result<u64, CoreError> {
        self.ping().await
    }

    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        let duration_ms = self.ping().await?;

        let row = self
            .db
            .query_one(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT COUNT(*) AS count FROM recipes",
            ))
            .await
            .map_err(|e| {
                error!("Failed to count indexed recipes: {}", e);
                CoreError::DatabaseError(e.to_string())
            })?;

        let recipe_count = row
            .and_then(|row| row.try_get::<i64>("", "count").ok())
            .map(|count| count.max(0) as u64);

        Ok(DatabaseHealthStatus {
            status: "up".to_string(),
            duration_ms,
            recipe_count,
        })
    }
}
