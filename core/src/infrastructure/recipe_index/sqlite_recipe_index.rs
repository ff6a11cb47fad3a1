use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement, TransactionTrait,
};
use tracing::{error, instrument};

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::entities::IngredientSet,
    recipe::{
        entities::{IndexedRecipe, Recipe},
        ports::LocalRecipeIndex,
    },
};

const CREATE_RECIPES_TABLE: &str =
    "CREATE VIRTUAL TABLE IF NOT EXISTS recipes USING fts5(title, ingredients, directions, NER)";

const SEARCH_RECIPES: &str = r#"
    SELECT title, ingredients, directions
    FROM recipes
    WHERE ingredients MATCH ?
    ORDER BY rank
    LIMIT ?
"#;

const INSERT_RECIPE: &str =
    "INSERT INTO recipes (title, ingredients, directions, NER) VALUES (?, ?, ?, ?)";

/// Full-text recipe index stored in an SQLite FTS5 table.
///
/// Every call borrows a pooled connection for the duration of one statement.
#[derive(Debug, Clone)]
pub struct SqliteRecipeIndex {
    pub db: DatabaseConnection,
}

impl SqliteRecipeIndex {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn ensure_schema(&self) -> Result<(), CoreError> {
        self.db
            .execute_unprepared(CREATE_RECIPES_TABLE)
            .await
            .map_err(|e| {
                error!("Failed to create recipes table: {}", e);
                CoreError::DatabaseError(e.to_string())
            })?;

        Ok(())
    }

    pub async fn count(&self) -> Result<u64, CoreError> {
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

        Ok(row
            .and_then(|row| row.try_get::<i64>("", "count").ok())
            .map_or(0, |count| count.max(0) as u64))
    }

    /// Inserts recipes in a single transaction and returns how many were written.
    pub async fn insert_batch(&self, recipes: &[IndexedRecipe]) -> Result<usize, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::DatabaseError(e.to_string())
        })?;

        for recipe in recipes {
            let stmt = Statement::from_sql_and_values(
                DatabaseBackend::Sqlite,
                INSERT_RECIPE,
                [
                    recipe.title.clone().into(),
                    recipe.ingredients.clone().into(),
                    recipe.directions.clone().into(),
                    recipe.ner.clone().into(),
                ],
            );

            txn.execute(stmt).await.map_err(|e| {
                error!("Failed to insert recipe {:?}: {}", recipe.title, e);
                CoreError::DatabaseError(e.to_string())
            })?;
        }

        txn.commit().await.map_err(|e| {
            error!("Failed to commit recipe batch: {}", e);
            CoreError::DatabaseError(e.to_string())
        })?;

        Ok(recipes.len())
    }
}

/// Builds an FTS5 match expression in which every ingredient is a quoted
/// phrase, so labels never act as query operators. Phrases separated by
/// spaces are combined with an implicit AND.
pub fn build_match_expression(ingredients: &IngredientSet) -> String {
    ingredients
        .iter()
        .map(|ingredient| format!("\"{}\"", ingredient.as_str().replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(" ")
}

impl LocalRecipeIndex for SqliteRecipeIndex {
    #[instrument(skip(self, ingredients), fields(ingredients = ingredients.len()))]
    async fn search(
        &self,
        ingredients: &IngredientSet,
        limit: u32,
    ) -> Result<Vec<Recipe>, CoreError> {
        if ingredients.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            SEARCH_RECIPES,
            [
                build_match_expression(ingredients).into(),
                i64::from(limit).into(),
            ],
        );

        let rows = self.db.query_all(stmt).await.map_err(|e| {
            error!("Recipe index query failed: {}", e);
            CoreError::SourceUnavailable(format!("local index: {}", e))
        })?;

        rows.into_iter()
            .map(|row| -> Result<Recipe, sea_orm::DbErr> {
                let title = row.try_get::<String>("", "title")?;
                let ingredients = row.try_get::<String>("", "ingredients")?;
                let directions = row.try_get::<String>("", "directions")?;
                Ok(Recipe::from_index_row(title, ingredients, directions))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                error!("Failed to read recipe row: {}", e);
                CoreError::SourceUnavailable(format!("local index: {}", e))
            })
    }
}
