use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DatabaseHealthStatus {
    pub status: String,
    pub duration_ms: u64,
    pub recipe_count: Option<u64>,
}
