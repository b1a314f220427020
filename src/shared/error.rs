//! Payload errors for questions and answers.
//!
//! A request body either fails to decode (`SerializationError`) or decodes into a
//! payload with a blank required field (`ValidationError`). The backend turns
//! both into a 400; nothing here knows about HTTP.
//!
//! ```rust
//! use forum_live::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "Title cannot be empty");
//! assert_eq!(error.to_string(), "title: Title cannot be empty");
//! ```
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// The body was not valid JSON for the expected payload
    #[error("malformed payload: {message}")]
    SerializationError { message: String },

    /// `field` was present but blank
    #[error("{field}: {message}")]
    ValidationError { field: String, message: String },
}

impl SharedError {
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// `message` is shown to the client as-is
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
