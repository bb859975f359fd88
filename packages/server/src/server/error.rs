//! Mapping from extraction failures to HTTP responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use docext::{DocextError, ExtractionError};
use serde::Serialize;

pub const UNSUPPORTED_TYPE_DETAIL: &str =
    "Unsupported file type. Only PDF and DOCX documents are supported.";
pub const INVALID_URL_DETAIL: &str = "Invalid file URL";
pub const INTERNAL_ERROR_DETAIL: &str = "Internal server error";

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

/// An error response: status code plus a `{"detail": ...}` body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            detail: detail.into(),
        }
    }

    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: INTERNAL_ERROR_DETAIL.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl From<DocextError> for ApiError {
    fn from(err: DocextError) -> Self {
        match &err {
            DocextError::InvalidUrl { .. } => {
                tracing::warn!(error = %err, "Rejected invalid file URL");
                ApiError::bad_request(INVALID_URL_DETAIL)
            }
            DocextError::UnsupportedType { .. } => {
                tracing::warn!(error = %err, "Rejected unsupported document type");
                ApiError::bad_request(UNSUPPORTED_TYPE_DETAIL)
            }
            DocextError::Extraction(inner @ (ExtractionError::Pdf(_) | ExtractionError::Docx(_))) => {
                tracing::warn!(
                    error = %err,
                    cause = ?std::error::Error::source(inner),
                    "Document could not be parsed"
                );
                // Display of these variants is the fixed public message
                ApiError::bad_request(inner.to_string())
            }
            // Internal detail goes to the log only
            DocextError::Extraction(ExtractionError::Staging(_))
            | DocextError::Fetch(_)
            | DocextError::Unexpected(_) => {
                tracing::error!(
                    error = %err,
                    cause = ?std::error::Error::source(&err),
                    "Error during extraction"
                );
                ApiError::internal()
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let detail = rejection.body_text();
        tracing::warn!(error = %detail, "Rejected malformed request body");
        Self {
            status: rejection.status(),
            detail,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { detail: self.detail })).into_response()
    }
}
