use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recommendation::{entities::RecommendationResult, value_objects::RecommendInput},
};

/// Service trait for the recognition, sourcing and ranking pipeline
#[cfg_attr(test, mockall::automock)]
pub trait RecommendationService: Send + Sync {
    fn recommend(
        &self,
        input: RecommendInput,
    ) -> impl Future<Output = Result<RecommendationResult, CoreError>> + Send;
}
