use bytes::Bytes;
use reqwest::Client;
use tracing::{error, instrument};
use url::Url;

use crate::domain::{common::entities::app_errors::CoreError, ingredient::ports::ImageFetcher};

/// Downloads images over HTTP(S), refusing bodies larger than `max_bytes`.
#[derive(Debug, Clone)]
pub struct ReqwestImageFetcher {
    client: Client,
    max_bytes: usize,
}

impl ReqwestImageFetcher {
    pub fn new(max_bytes: usize) -> Self {
        Self {
            client: Client::new(),
            max_bytes,
        }
    }

    fn ensure_within_limit(&self, url: &Url, size: usize) -> Result<(), CoreError> {
        if size > self.max_bytes {
            return Err(CoreError::RecognitionFailed(format!(
                "image at {} is {} bytes, the limit is {}",
                url, size, self.max_bytes
            )));
        }
        Ok(())
    }
}

impl ImageFetcher for ReqwestImageFetcher {
    #[instrument(skip(self), fields(url = %url))]
    async fn fetch(&self, url: &Url) -> Result<Bytes, CoreError> {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CoreError::InvalidInput(format!(
                "unsupported image url scheme: {}",
                url.scheme()
            )));
        }

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            error!("Failed to download image {}: {}", url, e);
            CoreError::RecognitionFailed(format!("could not download {}: {}", url, e))
        })?;

        if !response.status().is_success() {
            error!("Image download {} answered {}", url, response.status());
            return Err(CoreError::RecognitionFailed(format!(
                "could not download {}: HTTP {}",
                url,
                response.status()
            )));
        }

        if let Some(length) = response.content_length() {
            self.ensure_within_limit(url, length as usize)?;
        }

        let body = response.bytes().await.map_err(|e| {
            error!("Failed to read image body {}: {}", url, e);
            CoreError::RecognitionFailed(format!("could not read {}: {}", url, e))
        })?;

        self.ensure_within_limit(url, body.len())?;

        Ok(body)
    }
}
