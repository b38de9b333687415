//! Typed error handling for the JSON:API layer
//!
//! Errors are grouped by the component that raises them so that callers can
//! handle them specifically rather than dealing with a generic error type:
//!
//! - [`QueryStringError`]: invalid JSON:API query parameters
//! - [`PermissionError`]: row-level authorization rejections
//!
//! All variants map to an HTTP status code and a stable error code, and
//! convert into an axum response for the HTTP layer. Nothing is retried or
//! recovered internally; errors propagate synchronously to the caller.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The main error type for the JSON:API layer
#[derive(Debug)]
pub enum JsonApiError {
    /// Invalid JSON:API query parameters
    Query(QueryStringError),

    /// Row-level authorization rejections
    Permission(PermissionError),

    /// Storage backend errors
    Storage(anyhow::Error),
}

impl fmt::Display for JsonApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonApiError::Query(e) => write!(f, "{}", e),
            JsonApiError::Permission(e) => write!(f, "{}", e),
            JsonApiError::Storage(e) => write!(f, "Storage error: {}", e),
        }
    }
}

impl std::error::Error for JsonApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            JsonApiError::Query(e) => Some(e),
            JsonApiError::Permission(e) => Some(e),
            JsonApiError::Storage(e) => e.source(),
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl JsonApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            JsonApiError::Query(e) => e.status_code(),
            JsonApiError::Permission(e) => e.status_code(),
            JsonApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            JsonApiError::Query(e) => e.error_code(),
            JsonApiError::Permission(e) => e.error_code(),
            JsonApiError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    /// Get additional details for the error
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            JsonApiError::Permission(PermissionError::Forbidden { id }) => {
                Some(serde_json::json!({ "id": id }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

impl From<QueryStringError> for JsonApiError {
    fn from(e: QueryStringError) -> Self {
        JsonApiError::Query(e)
    }
}

impl From<PermissionError> for JsonApiError {
    fn from(e: PermissionError) -> Self {
        JsonApiError::Permission(e)
    }
}

impl From<anyhow::Error> for JsonApiError {
    fn from(e: anyhow::Error) -> Self {
        JsonApiError::Storage(e)
    }
}

// =============================================================================
// Query-string Errors
// =============================================================================

/// Errors raised while parsing JSON:API query parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryStringError {
    /// `page[size]`/`page[number]` missing one of the pair, or non-integer
    InvalidPage { detail: String },

    /// A requested `include` relation failed schema validation
    InvalidInclude { detail: String },
}

impl QueryStringError {
    /// Invalid pagination parameters
    pub fn invalid_page(detail: impl Into<String>) -> Self {
        QueryStringError::InvalidPage {
            detail: detail.into(),
        }
    }

    /// Invalid include path, carrying the schema's validation message
    pub fn invalid_include(detail: impl Into<String>) -> Self {
        QueryStringError::InvalidInclude {
            detail: detail.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            QueryStringError::InvalidPage { .. } => "INVALID_PAGE",
            QueryStringError::InvalidInclude { .. } => "INVALID_INCLUDE",
        }
    }
}

impl fmt::Display for QueryStringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryStringError::InvalidPage { detail } => write!(f, "Invalid page: {}", detail),
            QueryStringError::InvalidInclude { detail } => write!(f, "Invalid include: {}", detail),
        }
    }
}

impl std::error::Error for QueryStringError {}

// =============================================================================
// Permission Errors
// =============================================================================

/// Errors raised by the permission guards
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionError {
    /// A related-object id failed the caller-supplied permission predicate
    Forbidden { id: String },
}

impl PermissionError {
    /// Access to the instance with the given id is forbidden
    pub fn forbidden(id: impl Into<String>) -> Self {
        PermissionError::Forbidden { id: id.into() }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::FORBIDDEN
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            PermissionError::Forbidden { .. } => "FORBIDDEN",
        }
    }
}

impl fmt::Display for PermissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PermissionError::Forbidden { id } => {
                write!(f, "Access to instance with id '{}' forbidden", id)
            }
        }
    }
}

impl std::error::Error for PermissionError {}
