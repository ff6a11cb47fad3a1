use std::future::Future;

use bytes::Bytes;
use url::Url;

use crate::domain::common::entities::app_errors::CoreError;

/// Downloads an image referenced by URL.
#[cfg_attr(test, mockall::automock)]
pub trait ImageFetcher: Send + Sync {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<Bytes, CoreError>> + Send;
}

/// Turns one image into the raw labels of the food items it shows.
///
/// Labels may be in any case and contain hyphens; normalization happens when
/// they are folded into an [`IngredientSet`](super::IngredientSet).
#[cfg_attr(test, mockall::automock)]
pub trait IngredientRecognizer: Send + Sync {
    fn recognize(&self, image: Bytes) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;
}
