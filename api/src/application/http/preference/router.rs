use super::handlers::generate_keywords::{__path_generate_keywords, generate_keywords};
use super::handlers::record_history::{__path_record_history, record_history};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_keywords, record_history))]
pub struct PreferenceApiDoc;

pub fn preference_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/preferences/keywords", state.args.server.root_path),
            post(generate_keywords),
        )
        .route(
            &format!("{}/preferences/history", state.args.server.root_path),
            post(record_history),
        )
}
