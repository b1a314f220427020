/**
 * Live-Update Event System
 *
 * This module defines the events pushed to live-update subscribers. Every
 * event is a JSON object with a `type` discriminator and a `payload`:
 *
 * ```text
 * {"type":"CONNECTED","payload":{"message":"..."}}
 * {"type":"NEW_QUESTION","payload":<Question>}
 * {"type":"NEW_ANSWER","payload":{"answer":<Answer>,"questionId":1}}
 * {"type":"LIKE_ANSWER","payload":<Answer>}
 * ```
 *
 * Events carry no sequence numbers. Subscribers cannot detect gaps or
 * reordering and should treat every event as a hint to refresh.
 */
use serde::{Deserialize, Serialize};

use crate::shared::answer::Answer;
use crate::shared::question::{Question, QuestionId};

/// Greeting sent to a subscriber right after it registers
pub const CONNECTED_MESSAGE: &str = "Connected to discussion forum WebSocket server";

/// Event pushed over the live-update channel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LiveEvent {
    /// Acknowledgement sent only to the connection that just registered
    Connected { message: String },
    /// A question was created
    NewQuestion(Question),
    /// An answer was created
    NewAnswer(NewAnswerPayload),
    /// An answer's like count went up
    LikeAnswer(Answer),
}

/// Payload of a `NEW_ANSWER` event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewAnswerPayload {
    pub answer: Answer,
    #[serde(rename = "questionId")]
    pub question_id: QuestionId,
}

impl LiveEvent {
    pub fn connected() -> Self {
        Self::Connected {
            message: CONNECTED_MESSAGE.to_string(),
        }
    }

    pub fn new_question(question: Question) -> Self {
        Self::NewQuestion(question)
    }

    pub fn new_answer(answer: Answer) -> Self {
        let question_id = answer.question_id;
        Self::NewAnswer(NewAnswerPayload {
            answer,
            question_id,
        })
    }

    pub fn like_answer(answer: Answer) -> Self {
        Self::LikeAnswer(answer)
    }

    /// Wire name of this event's `type` field
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Connected { .. } => "CONNECTED",
            Self::NewQuestion(_) => "NEW_QUESTION",
            Self::NewAnswer(_) => "NEW_ANSWER",
            Self::LikeAnswer(_) => "LIKE_ANSWER",
        }
    }
}
