//! Error handling for the receipts API
//!
//! Structured error types that convert straight into HTTP responses with the
//! matching status code and a small JSON body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API error type with automatic HTTP status code mapping
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed request bodies (400 Bad Request)
    #[error("{message}")]
    Validation { message: String },

    /// Unknown receipt or route (404 Not Found)
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// Configuration errors (500 Internal Server Error)
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ApiError {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code string for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::Configuration { .. } => "CONFIGURATION_ERROR",
        }
    }

    /// Convert to ApiErrorResponse format for JSON serialization
    pub fn to_response(&self) -> ApiErrorResponse {
        ApiErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// JSON-serializable error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Error code, e.g. `NOT_FOUND`
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// When the error occurred
    pub timestamp: DateTime<Utc>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        (status, Json(self.to_response())).into_response()
    }
}

/// Convenience constructors for common error scenarios
impl ApiError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation { message: message.into() }
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create a configuration error without an underlying cause
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into(), source: None }
    }

    /// Create a configuration error wrapping its cause
    pub fn configuration_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Configuration { message: message.into(), source: Some(Box::new(source)) }
    }
}

/// Request bodies that fail to decode are client errors
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::validation(format!("Invalid JSON format: {err}"))
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::validation("bad").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::not_found("Receipt").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::configuration("bad port").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_message() {
        let err = ApiError::not_found("Receipt");
        assert_eq!(err.to_string(), "Receipt not found");
        assert_eq!(err.to_response().code, "NOT_FOUND");
    }

    #[test]
    fn test_serde_error_becomes_validation() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
        let err = ApiError::from(parse_err);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(err.to_string().starts_with("Invalid JSON format: "));
    }

    #[test]
    fn test_configuration_error_keeps_source() {
        let parse_err = "abc".parse::<u16>().unwrap_err();
        let err = ApiError::configuration_with_source("invalid port", parse_err);
        assert!(std::error::Error::source(&err).is_some());
    }
}
