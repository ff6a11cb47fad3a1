use pantry_core::domain::recommendation::keywords::generate_keywords_from_recipes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    preference::validators::GenerateKeywordsValidator,
    server::api_entities::{
        api_error::{ApiError, ApiErrorResponse, ValidateJson},
        response::Response,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerateKeywordsResponse {
    pub keywords: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/keywords",
    tag = "preference",
    summary = "Extract keywords from recipes",
    description = "Collects the distinct, lowercase, non-stopword words of the given recipes, in first-seen order.",
    request_body = GenerateKeywordsValidator,
    responses(
        (status = 200, body = GenerateKeywordsResponse),
        (status = 400, body = ApiErrorResponse)
    )
)]
pub async fn generate_keywords(
    ValidateJson(payload): ValidateJson<GenerateKeywordsValidator>,
) -> Result<Response<GenerateKeywordsResponse>, ApiError> {
    Ok(Response::OK(GenerateKeywordsResponse {
        keywords: generate_keywords_from_recipes(&payload.recipes),
    }))
}
