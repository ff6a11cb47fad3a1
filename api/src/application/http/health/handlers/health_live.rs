use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LivenessResponse {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = LivenessResponse)
    )
)]
pub async fn health_live() -> Result<Response<LivenessResponse>, ApiError> {
    Ok(Response::OK(LivenessResponse {
        status: "ok".to_string(),
    }))
}
