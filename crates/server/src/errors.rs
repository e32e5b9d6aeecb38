use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use common::types::ErrorBody;
use service::contact::{FieldError, ValidationErrors};
use service::errors::ServiceError;

pub const VALIDATION_FAILED: &str = "Validation failed";
pub const INVALID_BODY: &str = "Invalid request body";
pub const BODY_TOO_LARGE: &str = "Request body too large";
pub const SUBMIT_FAILED: &str = "Failed to submit contact form. Please try again later.";
pub const FETCH_FAILED: &str = "Failed to fetch submissions";
pub const NOT_FOUND: &str = "Endpoint not found";
pub const INTERNAL: &str = "Internal server error";

/// Errors a handler can answer with. Storage detail is logged, never sent.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("invalid request body: {0}")]
    MalformedBody(String),
    #[error("request body too large")]
    PayloadTooLarge,
    #[error("submit failed: {0}")]
    SubmitFailed(String),
    #[error("fetch failed: {0}")]
    FetchFailed(String),
    #[error("endpoint not found")]
    NotFound,
    #[error("internal server error")]
    Internal,
}

#[derive(Serialize)]
struct ValidationBody<'a> {
    error: &'static str,
    details: &'a [FieldError],
}

impl ApiError {
    pub fn from_submit(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(v) => ApiError::Validation(v),
            ServiceError::Storage(detail) => ApiError::SubmitFailed(detail),
        }
    }

    pub fn from_list(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(v) => ApiError::Validation(v),
            ServiceError::Storage(detail) => ApiError::FetchFailed(detail),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::SubmitFailed(_) | ApiError::FetchFailed(_) | ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => VALIDATION_FAILED,
            ApiError::MalformedBody(_) => INVALID_BODY,
            ApiError::PayloadTooLarge => BODY_TOO_LARGE,
            ApiError::SubmitFailed(_) => SUBMIT_FAILED,
            ApiError::FetchFailed(_) => FETCH_FAILED,
            ApiError::NotFound => NOT_FOUND,
            ApiError::Internal => INTERNAL,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Validation(errors) => {
                let body = ValidationBody { error: VALIDATION_FAILED, details: errors.errors() };
                return (status, Json(body)).into_response();
            }
            ApiError::MalformedBody(detail) => warn!(error = %detail, "malformed request body"),
            ApiError::SubmitFailed(detail) | ApiError::FetchFailed(detail) => error!(error = %detail, "store call failed"),
            ApiError::PayloadTooLarge | ApiError::NotFound | ApiError::Internal => {}
        }
        (status, Json(ErrorBody::new(self.public_message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
        let res = err.into_response();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn validation_errors_carry_details() {
        let errs = ValidationErrors::single("email", "Must be a valid email address");
        let (status, body) = body_json(ApiError::Validation(errs)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            serde_json::json!({
                "error": "Validation failed",
                "details": [{"field": "email", "message": "Must be a valid email address"}]
            })
        );
    }

    #[tokio::test]
    async fn storage_detail_is_not_leaked() {
        let (status, body) = body_json(ApiError::from_submit(ServiceError::Storage("password authentication failed".into()))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({"error": SUBMIT_FAILED}));

        let (_, body) = body_json(ApiError::from_list(ServiceError::Storage("timeout".into()))).await;
        assert_eq!(body, serde_json::json!({"error": FETCH_FAILED}));
    }

    #[test]
    fn statuses() {
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::MalformedBody("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::PayloadTooLarge.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(ApiError::Internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
