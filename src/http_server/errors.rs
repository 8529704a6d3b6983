//! # HTTP API Errors
//!
//! Maps every failure on the lead routes to its wire response. Internal
//! details are logged by the handlers and never returned to the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::schema::{FieldIssue, IssueCode, ValidationError};
use crate::store::StoreError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

pub const INVALID_FORM_DATA: &str = "Invalid form data";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";

/// API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Payload failed the lead schema
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Request body is not JSON
    #[error("Malformed body: {0}")]
    MalformedBody(String),

    /// Unsupported verb on a lead route
    #[error("Method not allowed")]
    MethodNotAllowed,

    // ==================
    // Server Errors (5xx)
    // ==================
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

/// Body for rejected submissions
#[derive(Debug, Serialize)]
pub struct InvalidFormResponse {
    pub success: bool,
    pub message: String,
    pub errors: Vec<FieldIssue>,
}

/// Body for 500s
#[derive(Debug, Serialize)]
pub struct FailureResponse {
    pub success: bool,
    pub message: String,
}

/// Body for 405s
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn invalid_form(errors: Vec<FieldIssue>) -> InvalidFormResponse {
    InvalidFormResponse {
        success: false,
        message: INVALID_FORM_DATA.to_string(),
        errors,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::Validation(err) => (status, Json(invalid_form(err.into_issues()))).into_response(),
            ApiError::MalformedBody(msg) => {
                let issue = FieldIssue::root(IssueCode::InvalidJson, msg);
                (status, Json(invalid_form(vec![issue]))).into_response()
            }
            ApiError::MethodNotAllowed => (
                status,
                Json(MessageResponse {
                    message: METHOD_NOT_ALLOWED.to_string(),
                }),
            )
                .into_response(),
            ApiError::Internal(_) => (
                status,
                Json(FailureResponse {
                    success: false,
                    message: INTERNAL_SERVER_ERROR.to_string(),
                }),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let validation = ValidationError::single(FieldIssue::required("name"));
        assert_eq!(ApiError::from(validation).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::MalformedBody("eof".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_propagation() {
        let err = ApiError::from(StoreError::Internal("Lock poisoned".into()));
        assert!(matches!(err, ApiError::Internal(_)));
    }
}
