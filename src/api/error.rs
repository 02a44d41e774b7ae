//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::auth::AuthError;
use crate::pipeline::ExtractionError;
use crate::store::StoreError;

/// Cap on raw extraction text written to the log for diagnostics.
const RAW_LOG_LIMIT: usize = 2048;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Authentication required")]
    Unauthorized,
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Extraction service failed: {0}")]
    ExtractionFailed(String),
    #[error("Extraction output could not be decoded")]
    ExtractionMalformed,
    #[error("Storage failure: {0}")]
    Storage(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Authentication required".to_string(),
            ),
            ApiError::BadRequest(detail) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", detail.clone())
            }
            ApiError::ExtractionFailed(detail) => {
                tracing::error!(detail, "extraction service failure");
                (
                    StatusCode::BAD_GATEWAY,
                    "EXTRACTION_FAILED",
                    "Extraction service failed".to_string(),
                )
            }
            ApiError::ExtractionMalformed => (
                StatusCode::BAD_GATEWAY,
                "EXTRACTION_MALFORMED",
                "Extraction output could not be decoded".to_string(),
            ),
            ApiError::Storage(detail) => {
                tracing::error!(detail, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE",
                    "Storage failure".to_string(),
                )
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };
        (status, Json(body)).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        // Missing and invalid credentials are the same outcome externally
        // but are logged distinctly.
        match err {
            AuthError::MissingCredential => {
                tracing::warn!("request without credential");
                ApiError::Unauthorized
            }
            AuthError::InvalidCredential => {
                tracing::warn!("request with rejected credential");
                ApiError::Unauthorized
            }
            AuthError::Unavailable(detail) => ApiError::Internal(detail),
        }
    }
}

impl From<ExtractionError> for ApiError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::EmptyImage => ApiError::BadRequest("Image payload is empty".into()),
            ExtractionError::Malformed { reason, raw } => {
                // Keep the raw text server-side for manual follow-up.
                let raw: String = raw.chars().take(RAW_LOG_LIMIT).collect();
                tracing::error!(reason, raw, "undecodable extraction output");
                ApiError::ExtractionMalformed
            }
            other => ApiError::ExtractionFailed(other.to_string()),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn unauthorized_returns_401() {
        let response = ApiError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn missing_and_invalid_credentials_map_to_same_outcome() {
        let missing: ApiError = AuthError::MissingCredential.into();
        let invalid: ApiError = AuthError::InvalidCredential.into();
        assert_eq!(
            missing.into_response().status(),
            invalid.into_response().status()
        );
    }

    #[tokio::test]
    async fn bad_request_returns_400() {
        let response = ApiError::BadRequest("no image field in upload".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn extraction_failure_returns_502_without_detail() {
        let err: ApiError = ExtractionError::Upstream {
            status: 429,
            body: "quota".into(),
        }
        .into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "EXTRACTION_FAILED");
        // Upstream detail stays in the log, not the client body.
        assert!(!json["error"]["message"].as_str().unwrap().contains("quota"));
    }

    #[tokio::test]
    async fn malformed_extraction_does_not_echo_raw_text() {
        let err: ApiError = ExtractionError::Malformed {
            reason: "expected value".into(),
            raw: "The patient takes secret-drug".into(),
        }
        .into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "EXTRACTION_MALFORMED");
        assert!(!json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("secret-drug"));
    }

    #[tokio::test]
    async fn storage_failure_returns_500() {
        let response = ApiError::Storage("disk full".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "STORAGE");
    }

    #[tokio::test]
    async fn empty_image_maps_to_bad_request() {
        let err: ApiError = ExtractionError::EmptyImage.into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
