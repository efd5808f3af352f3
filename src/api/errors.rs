//! # API Errors
//!
//! Rejections raised before a course record reaches the recommender.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Body is not valid JSON
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Body is JSON but does not describe a course
    #[error("Invalid course data: {0}")]
    InvalidCourse(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Unexpected fault while producing a response
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidCourse(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable error code string for logs and the CLI
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidJson(_) => "ADVISOR_INVALID_JSON",
            ApiError::InvalidCourse(_) => "ADVISOR_INVALID_COURSE",
            ApiError::Internal(_) => "ADVISOR_INTERNAL",
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match err.classify() {
            Category::Data => ApiError::InvalidCourse(err.to_string()),
            Category::Syntax | Category::Eof => ApiError::InvalidJson(err.to_string()),
            Category::Io => ApiError::Internal(err.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
