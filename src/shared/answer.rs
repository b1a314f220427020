//! Answer Data Structure
//!
//! Answers belong to exactly one question. Apart from deletion, the only
//! change an answer ever sees is its `likes` counter going up by one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::question::QuestionId;

/// Identifier assigned to an answer at creation
pub type AnswerId = i64;

/// An answer to a question
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Answer {
    pub id: AnswerId,
    pub question_id: QuestionId,
    pub answer_text: String,
    /// Starts at 0 and is only ever incremented
    pub likes: i64,
    pub created_at: DateTime<Utc>,
}

impl Answer {
    /// Build a fresh answer (zero likes) from a validated payload
    pub fn from_new(id: AnswerId, new: NewAnswer, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            question_id: new.question_id,
            answer_text: new.answer_text,
            likes: 0,
            created_at,
        }
    }
}

/// Request body for `POST /api/questions/{id}/answers`
///
/// The owning question comes from the path, so the body only carries text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewAnswerBody {
    pub answer_text: String,
}

/// An answer ready to be stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAnswer {
    pub question_id: QuestionId,
    pub answer_text: String,
}

impl NewAnswer {
    pub fn new(question_id: QuestionId, answer_text: impl Into<String>) -> Self {
        Self {
            question_id,
            answer_text: answer_text.into(),
        }
    }

    pub fn validate(&self) -> Result<(), SharedError> {
        if self.answer_text.trim().is_empty() {
            return Err(SharedError::validation(
                "answer_text",
                "Answer text cannot be empty",
            ));
        }
        Ok(())
    }
}

impl NewAnswerBody {
    /// Attach the question id taken from the request path
    pub fn for_question(self, question_id: QuestionId) -> NewAnswer {
        NewAnswer {
            question_id,
            answer_text: self.answer_text,
        }
    }
}
