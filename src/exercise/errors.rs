//! # Exercise Errors
//!
//! Error types shared by the store and the HTTP routes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use super::model::MessageResponse;
use super::response::IndentedJson;

/// Result type for exercise operations
pub type ExerciseResult<T> = Result<T, ExerciseError>;

/// Exercise errors
///
/// The `Display` text is the client-facing message. Details carried by the
/// variants are only logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExerciseError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Path identifier is not a canonical uuid
    #[error("Invalid uuid")]
    InvalidId(String),

    /// Request body is not valid JSON for the operation
    #[error("Invalid body")]
    InvalidBody(String),

    /// No record matches the identifier
    #[error("Not found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store lock poisoned
    #[error("Internal error")]
    Internal(String),
}

impl ExerciseError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ExerciseError::InvalidId(_) => StatusCode::NOT_ACCEPTABLE,
            ExerciseError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ExerciseError::NotFound => StatusCode::NOT_FOUND,
            ExerciseError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Detail for logs, empty for variants without one
    pub fn detail(&self) -> &str {
        match self {
            ExerciseError::InvalidId(d)
            | ExerciseError::InvalidBody(d)
            | ExerciseError::Internal(d) => d,
            ExerciseError::NotFound => "",
        }
    }
}

impl From<&ExerciseError> for MessageResponse {
    fn from(err: &ExerciseError) -> Self {
        MessageResponse::new(err.to_string())
    }
}

impl IntoResponse for ExerciseError {
    fn into_response(self) -> Response {
        if self.status_code().is_server_error() {
            tracing::error!(error = %self, detail = self.detail(), "request failed");
        } else {
            tracing::debug!(error = %self, detail = self.detail(), "request rejected");
        }
        let status = self.status_code();
        (status, IndentedJson(MessageResponse::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ExerciseError::InvalidId("x".to_string()).status_code(),
            StatusCode::NOT_ACCEPTABLE
        );
        assert_eq!(
            ExerciseError::InvalidBody("eof".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ExerciseError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ExerciseError::Internal("poisoned".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages_hide_detail() {
        let err = ExerciseError::InvalidBody("expected value at line 1".to_string());
        assert_eq!(err.to_string(), "Invalid body");
        assert_eq!(err.detail(), "expected value at line 1");
        assert_eq!(ExerciseError::NotFound.to_string(), "Not found");
        assert_eq!(
            ExerciseError::InvalidId("abc".to_string()).to_string(),
            "Invalid uuid"
        );
    }
}
