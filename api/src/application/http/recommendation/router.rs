use super::handlers::recommend::{__path_recommend, recommend};
use super::handlers::recommend_upload::{__path_recommend_upload, recommend_upload};
use crate::application::http::server::app_state::AppState;

use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(recommend, recommend_upload))]
pub struct RecommendationApiDoc;

pub fn recommendation_routes(state: AppState) -> Router<AppState> {
    let pipeline = state.service.pipeline();
    // Room for every image at full size plus multipart framing.
    let upload_limit = pipeline
        .max_images
        .saturating_mul(pipeline.max_image_bytes)
        .saturating_add(1024 * 1024);

    Router::new()
        .route(
            &format!("{}/recommend", state.args.server.root_path),
            post(recommend),
        )
        .route(
            &format!("{}/recommend/upload", state.args.server.root_path),
            post(recommend_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
}
