use axum::extract::State;
use pantry_core::domain::{
    ingredient::value_objects::ImageSource,
    recommendation::{
        entities::RecommendationResult,
        ports::RecommendationService,
        value_objects::{PreferenceMap, RecommendInput},
    },
};
use url::Url;

use crate::application::http::{
    recommendation::validators::RecommendValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "recommendation",
    summary = "Recommend recipes from image urls",
    description = "Recognizes the ingredients shown in every image, looks recipes up in the local index and asks the language model for more, then ranks both lists by the given preferences.",
    request_body = RecommendValidator,
    responses(
        (status = 200, body = RecommendationResult),
        (status = 400, body = ApiErrorResponse),
        (status = 503, body = ApiErrorResponse)
    )
)]
pub async fn recommend(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RecommendValidator>,
) -> Result<Response<RecommendationResult>, ApiError> {
    let preferences = PreferenceMap::try_from(payload.preferences).map_err(ApiError::from)?;

    let images = payload
        .image_urls
        .iter()
        .map(|raw| -> Result<ImageSource, ApiError> {
            let url = Url::parse(raw)
                .map_err(|e| ApiError::BadRequest(format!("Invalid image url '{}': {}", raw, e)))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(ApiError::BadRequest(format!(
                    "Image url '{}' must use http or https",
                    raw
                )));
            }
            Ok(ImageSource::Url(url))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let result = state
        .service
        .recommend(RecommendInput {
            images,
            preferences,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}
