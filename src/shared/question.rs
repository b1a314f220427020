/**
 * Question Data Structure
 *
 * This module defines the Question record returned by the REST API and the
 * NewQuestion payload accepted by `POST /api/questions`.
 *
 * Questions are created once and never updated. The `tags` field is stored
 * exactly as submitted: a free-text, comma-separated list with no
 * normalization or deduplication.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// Identifier assigned to a question at creation
pub type QuestionId = i64;

/// A question posted to the forum
///
/// # Fields
/// * `id` - Unique identifier assigned by the store
/// * `title` - Non-empty title
/// * `description` - Non-empty body text
/// * `tags` - Optional raw comma-separated tag list
/// * `created_at` - Server-assigned creation time (UTC)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub title: String,
    pub description: String,
    pub tags: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Question {
    /// Build a question from a validated payload
    pub fn from_new(id: QuestionId, new: NewQuestion, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            tags: new.tags,
            created_at,
        }
    }

    /// Case-insensitive substring match over title and description
    ///
    /// `needle` must already be lowercased.
    pub fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }

    /// Case-insensitive substring match over the raw tag string
    ///
    /// `needle` must already be lowercased. Questions without tags never match.
    pub fn tagged_with(&self, needle: &str) -> bool {
        self.tags
            .as_deref()
            .map(|tags| tags.to_lowercase().contains(needle))
            .unwrap_or(false)
    }
}

/// Request body for creating a question
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewQuestion {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Option<String>,
}

impl NewQuestion {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        tags: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tags,
        }
    }

    /// Reject blank titles and descriptions
    ///
    /// Values are kept verbatim on success; validation never trims or
    /// rewrites what the client sent.
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.title.trim().is_empty() {
            return Err(SharedError::validation("title", "Title cannot be empty"));
        }
        if self.description.trim().is_empty() {
            return Err(SharedError::validation(
                "description",
                "Description cannot be empty",
            ));
        }
        Ok(())
    }
}
