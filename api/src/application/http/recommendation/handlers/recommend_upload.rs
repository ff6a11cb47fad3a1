use axum::extract::{Multipart, State};
use pantry_core::domain::{
    ingredient::value_objects::ImageSource,
    recommendation::{
        entities::RecommendationResult,
        ports::RecommendationService,
        value_objects::{PreferenceMap, RecommendInput},
    },
};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[utoipa::path(
    post,
    path = "/upload",
    tag = "recommendation",
    summary = "Recommend recipes from uploaded photos",
    description = "Multipart variant of the recommendation endpoint. Send one or more `image` file fields and an optional `preferences` field holding a JSON object.",
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 200, body = RecommendationResult),
        (status = 400, body = ApiErrorResponse),
        (status = 503, body = ApiErrorResponse)
    )
)]
pub async fn recommend_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<RecommendationResult>, ApiError> {
    let max_image_bytes = state.service.pipeline().max_image_bytes;
    let mut images = Vec::new();
    let mut preferences = PreferenceMap::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "image" => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if data.is_empty() {
                    return Err(ApiError::BadRequest("Image field is empty".to_string()));
                }
                if data.len() > max_image_bytes {
                    return Err(ApiError::BadRequest(format!(
                        "Image too large. Max size is {} bytes",
                        max_image_bytes
                    )));
                }

                images.push(ImageSource::Upload(data));
            }
            "preferences" => {
                let raw = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read preferences: {}", e))
                })?;

                if !raw.trim().is_empty() {
                    let value: serde_json::Value = serde_json::from_str(&raw).map_err(|e| {
                        ApiError::InvalidPreference(format!("preferences is not valid JSON: {}", e))
                    })?;
                    preferences = PreferenceMap::try_from(value).map_err(ApiError::from)?;
                }
            }
            _ => {}
        }
    }

    if images.is_empty() {
        return Err(ApiError::BadRequest("Missing image field".to_string()));
    }

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
