use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{error, info, warn};

use crate::domain::common::entities::app_errors::CoreError;

/// An in-memory database must outlive every request, so its single
/// connection is never recycled by the pool.
const MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(365 * 24 * 60 * 60);

#[derive(Debug, Clone)]
pub struct SqliteConfig {
    pub database_url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct Sqlite {
    db: DatabaseConnection,
}

impl Sqlite {
    pub async fn new(config: SqliteConfig) -> Result<Self, CoreError> {
        if is_memory_url(&config.database_url) {
            warn!("using an in-memory recipe database, its content is lost on shutdown");
        }

        let options = connect_options(&config);

        let db = Database::connect(options).await.map_err(|e| {
            error!("Failed to connect to {}: {}", config.database_url, e);
            CoreError::DatabaseError(e.to_string())
        })?;

        info!(url = %config.database_url, "connected to recipe database");

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// In-memory databases live only as long as their connection: they get one
/// connection that is never closed for idleness or age.
fn connect_options(config: &SqliteConfig) -> ConnectOptions {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    if is_memory_url(&config.database_url) {
        options
            .max_connections(1)
            .idle_timeout(MEMORY_CONNECTION_LIFETIME)
            .max_lifetime(MEMORY_CONNECTION_LIFETIME);
    } else {
        options.max_connections(config.max_connections.max(1));
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str, max_connections: u32) -> SqliteConfig {
        SqliteConfig {
            database_url: url.to_string(),
            max_connections,
        }
    }

    #[test]
    fn test_memory_connection_is_pinned() {
        let options = connect_options(&config("sqlite::memory:", 8));

        assert_eq!(options.get_max_connections(), Some(1));
    }

    #[test]
    fn test_file_database_uses_configured_pool() {
        let options = connect_options(&config("sqlite://recipe.db?mode=rwc", 8));

        assert_eq!(options.get_max_connections(), Some(8));
    }

    #[tokio::test]
    async fn test_memory_database_keeps_data_across_queries() {
        use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

        let db = Sqlite::new(config("sqlite::memory:", 4)).await.unwrap().get_db();
        db.execute_unprepared("CREATE TABLE t (v INTEGER)").await.unwrap();
        db.execute_unprepared("INSERT INTO t VALUES (7)").await.unwrap();

        let row = db
            .query_one(Statement::from_string(DatabaseBackend::Sqlite, "SELECT v FROM t"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(row.try_get::<i64>("", "v").unwrap(), 7);
    }
}
