use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pantry_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    InvalidPreference(String),

    #[error("{0}")]
    RecognitionFailed(String),

    #[error("{0}")]
    SourcesUnavailable(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    GatewayTimeout(String),

    #[error("{0}")]
    InternalServerError(String),
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub code: String,
    pub status: u16,
    pub message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::InvalidPreference(_) => StatusCode::BAD_REQUEST,
            ApiError::RecognitionFailed(_)
            | ApiError::SourcesUnavailable(_)
            | ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::GatewayTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::InvalidPreference(_) => "invalid_preference",
            ApiError::RecognitionFailed(_) => "recognition_failed",
            ApiError::SourcesUnavailable(_) => "sources_unavailable",
            ApiError::ServiceUnavailable(_) => "service_unavailable",
            ApiError::GatewayTimeout(_) => "timeout",
            ApiError::InternalServerError(_) => "internal_server_error",
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        let message = error.to_string();
        match error {
            CoreError::InvalidInput(_) => ApiError::BadRequest(message),
            CoreError::InvalidPreference(_) => ApiError::InvalidPreference(message),
            CoreError::RecognitionFailed(_) | CoreError::AllRecognitionsFailed(_) => {
                ApiError::RecognitionFailed(message)
            }
            CoreError::AllSourcesFailed { .. } => ApiError::SourcesUnavailable(message),
            CoreError::SourceUnavailable(_)
            | CoreError::SchemaViolation(_)
            | CoreError::ExternalServiceError(_)
            | CoreError::DatabaseError(_) => ApiError::ServiceUnavailable(message),
            CoreError::Timeout { .. } => ApiError::GatewayTimeout(message),
            CoreError::InternalServerError => ApiError::InternalServerError(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(code = self.code(), "{}", self);
        } else {
            tracing::debug!(code = self.code(), "{}", self);
        }

        let body = ApiErrorResponse {
            code: self.code().to_string(),
            status: status.as_u16(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON extractor that also runs the `validator` rules of the payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| ApiError::BadRequest(errors.to_string().replace('\n', ", ")))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_statuses() {
        let cases = [
            (CoreError::InvalidInput("x".into()), StatusCode::BAD_REQUEST),
            (CoreError::InvalidPreference("x".into()), StatusCode::BAD_REQUEST),
            (CoreError::AllRecognitionsFailed(2), StatusCode::SERVICE_UNAVAILABLE),
            (
                CoreError::AllSourcesFailed {
                    local_index: "a".into(),
                    generative: "b".into(),
                },
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (CoreError::DatabaseError("x".into()), StatusCode::SERVICE_UNAVAILABLE),
            (
                CoreError::Timeout {
                    operation: "x".into(),
                    seconds: 1,
                },
                StatusCode::GATEWAY_TIMEOUT,
            ),
            (CoreError::InternalServerError, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, status) in cases {
            assert_eq!(ApiError::from(error).status(), status);
        }
    }

    #[test]
    fn test_codes_are_snake_case() {
        let error = ApiError::from(CoreError::AllSourcesFailed {
            local_index: "a".into(),
            generative: "b".into(),
        });

        assert_eq!(error.code(), "sources_unavailable");
        assert_eq!(
            ApiError::from(CoreError::InvalidPreference("x".into())).code(),
            "invalid_preference"
        );
    }
}
