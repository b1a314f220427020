/**
 * Answer Handlers
 *
 * # Routes
 *
 * - `GET /api/questions/{id}/answers` - Answers to a question, newest first
 * - `POST /api/questions/{id}/answers` - Answer a question, broadcast `NEW_ANSWER`
 * - `PUT /api/answers/{id}/reaction` - Add one like, broadcast `LIKE_ANSWER`
 * - `DELETE /api/answers/{id}` - Remove an answer
 *
 * Likes are not tied to a user; every call adds one.
 */
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{parse_body, parse_id};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::backend::store::ForumStore;
use crate::shared::{Answer, LiveEvent, NewAnswerBody};

/// List answers to a question (GET /api/questions/{id}/answers)
///
/// An unknown question yields an empty list.
pub async fn list_answers(
    State(store): State<Arc<dyn ForumStore>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Vec<Answer>>, BackendError> {
    let question_id = parse_id(&raw_id, "question")?;
    let answers = store.answers_for_question(question_id).await?;
    Ok(Json(answers))
}

/// Answer a question (POST /api/questions/{id}/answers)
///
/// # Request Body
///
/// ```json
/// { "answer_text": "Wrap it in an Arc and derive Clone on the state." }
/// ```
///
/// # Response
///
/// `201 Created` with the stored answer, `404` if the question does not
/// exist (even when the body is also invalid), `400` for a bad body.
/// Subscribers receive `NEW_ANSWER` with `{ answer, questionId }`.
pub async fn create_answer(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<Answer>), BackendError> {
    let question_id = parse_id(&raw_id, "question")?;

    // The question must exist before the body is looked at
    if state.store.question_by_id(question_id).await?.is_none() {
        return Err(BackendError::not_found("Question not found"));
    }

    let new = parse_body::<NewAnswerBody>(&body)?.for_question(question_id);
    new.validate()?;

    let answer = state.store.create_answer(new).await?;
    tracing::info!("[Forum] Created answer {} on question {}", answer.id, question_id);

    state.live.broadcast(&LiveEvent::new_answer(answer.clone()));

    Ok((StatusCode::CREATED, Json(answer)))
}

/// Like an answer (PUT /api/answers/{id}/reaction)
pub async fn like_answer(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Answer>, BackendError> {
    let id = parse_id(&raw_id, "answer")?;

    let answer = state
        .store
        .like_answer(id)
        .await?
        .ok_or_else(|| BackendError::not_found("Answer not found"))?;
    tracing::info!("[Forum] Answer {} now has {} likes", answer.id, answer.likes);

    state.live.broadcast(&LiveEvent::like_answer(answer.clone()));

    Ok(Json(answer))
}

/// Delete an answer (DELETE /api/answers/{id})
pub async fn delete_answer(
    State(store): State<Arc<dyn ForumStore>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, BackendError> {
    let id = parse_id(&raw_id, "answer")?;

    if store.delete_answer(id).await? {
        tracing::info!("[Forum] Deleted answer {}", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(BackendError::not_found("Answer not found"))
    }
}
