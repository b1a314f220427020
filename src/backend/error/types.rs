/**
 * Backend Error Types
 *
 * This module defines the errors returned by forum request handlers.
 *
 * # Error Categories
 *
 * - **Validation** (400): malformed identifier, unparsable body, blank
 *   required field, missing search keyword
 * - **Not found** (404): the question or answer does not exist
 * - **Internal** (500): store failure; details are logged and the client
 *   gets a generic message
 */
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::store::StoreError;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use forum_live::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::validation("Invalid question ID");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
///
/// let err = BackendError::not_found("Answer not found");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request was malformed or failed validation
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable error message
        message: String,
    },

    /// The referenced record does not exist
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Shared model error (payload validation or decoding)
    #[error(transparent)]
    Shared(#[from] SharedError),

    /// Persistence failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl BackendError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` - 400 Bad Request
    /// - `NotFound` - 404 Not Found
    /// - `Shared` - 400 for validation and decoding failures
    /// - `Store` - 404 for a missing question, otherwise 500
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Shared(_) => StatusCode::BAD_REQUEST,
            Self::Store(StoreError::MissingQuestion(_)) => StatusCode::NOT_FOUND,
            Self::Store(StoreError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the client
    ///
    /// Internal failures return a generic message so database details do not
    /// leak into responses.
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message } | Self::NotFound { message } => message.clone(),
            Self::Shared(SharedError::ValidationError { message, .. }) => message.clone(),
            Self::Shared(SharedError::SerializationError { message }) => {
                format!("Invalid request body: {}", message)
            }
            Self::Store(StoreError::MissingQuestion(_)) => "Question not found".to_string(),
            Self::Store(StoreError::Database(_)) => "Internal server error".to_string(),
        }
    }
}
