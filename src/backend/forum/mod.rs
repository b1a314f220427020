//! Forum Request Handlers
//!
//! This module contains the HTTP handlers behind `/api/questions`,
//! `/api/answers`, `/api/tags` and `/health`.
//!
//! # Module Structure
//!
//! ```text
//! forum/
//! ├── mod.rs        - Shared request parsing helpers
//! ├── questions.rs  - Question listing, lookup, search, creation
//! ├── answers.rs    - Answer listing, creation, likes, deletion
//! ├── tags.rs       - Popular tag summary
//! └── health.rs     - Liveness check
//! ```
//!
//! # Mutations and live updates
//!
//! Creating a question, creating an answer and liking an answer each
//! broadcast an event through the `LiveRegistry` once the store call has
//! succeeded. A failed store call returns an error and broadcasts nothing.
//! Deleting an answer is not broadcast.

use serde::de::DeserializeOwned;

use crate::backend::error::BackendError;
use crate::shared::SharedError;

/// Question handlers
pub mod questions;

/// Answer handlers
pub mod answers;

/// Tag summary handler
pub mod tags;

/// Health check handler
pub mod health;

pub use answers::{create_answer, delete_answer, like_answer, list_answers};
pub use health::health_check;
pub use questions::{
    create_question, get_question, list_questions, questions_by_tag, recent_questions,
    search_questions,
};
pub use tags::popular_tags;

/// Decode a JSON request body
///
/// Bodies are taken as raw bytes so a malformed payload becomes a 400 with
/// the decoder's message instead of axum's plain-text rejection.
pub(crate) fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, BackendError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!("[Forum] Failed to parse request body: {}", e);
        BackendError::from(SharedError::from(e))
    })
}

/// Parse a numeric path identifier, naming the entity in the error message
pub(crate) fn parse_id(raw: &str, entity: &str) -> Result<i64, BackendError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| BackendError::validation(format!("Invalid {} ID", entity)))
}
