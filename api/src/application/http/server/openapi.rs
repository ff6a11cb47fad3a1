use crate::application::http::{
    health::router::HealthApiDoc, preference::router::PreferenceApiDoc,
    recommendation::router::RecommendationApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pantry API",
        description = "Recipe recommendations from photos of ingredients"
    ),
    nest(
        (path = "/recommend", api = RecommendationApiDoc),
        (path = "/preferences", api = PreferenceApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
