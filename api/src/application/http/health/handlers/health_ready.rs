use axum::extract::State;
use pantry_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    description = "Checks the recipe index database and reports how long the round trip took.",
    responses(
        (status = 200, body = DatabaseHealthStatus),
        (status = 503, body = ApiErrorResponse)
    )
)]
pub async fn health_ready(
    State(state): State<AppState>,
) -> Result<Response<DatabaseHealthStatus>, ApiError> {
    let status = state.service.readness().await.map_err(|e| {
        tracing::warn!("Readiness check failed: {}", e);
        ApiError::ServiceUnavailable(e.to_string())
    })?;

    Ok(Response::OK(status))
}
