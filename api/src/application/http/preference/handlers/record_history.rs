use pantry_core::domain::recommendation::value_objects::PreferenceMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    preference::validators::RecordHistoryValidator,
    server::api_entities::{
        api_error::{ApiError, ApiErrorResponse, ValidateJson},
        response::Response,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecordHistoryResponse {
    pub preferences: PreferenceMap,
}

#[utoipa::path(
    post,
    path = "/history",
    tag = "preference",
    summary = "Record viewed keywords",
    description = "Adds one to the weight of every keyword, starting unseen keywords at one, and returns the updated map. Nothing is stored server-side.",
    request_body = RecordHistoryValidator,
    responses(
        (status = 200, body = RecordHistoryResponse),
        (status = 400, body = ApiErrorResponse)
    )
)]
pub async fn record_history(
    ValidateJson(payload): ValidateJson<RecordHistoryValidator>,
) -> Result<Response<RecordHistoryResponse>, ApiError> {
    let mut preferences = PreferenceMap::try_from(payload.preferences).map_err(ApiError::from)?;
    preferences.record_keywords(&payload.keywords);

    Ok(Response::OK(RecordHistoryResponse { preferences }))
}
