/**
 * Question Handlers
 *
 * # Routes
 *
 * - `GET /api/questions` - Every question
 * - `POST /api/questions` - Create a question, broadcast `NEW_QUESTION`
 * - `GET /api/questions/{id}` - One question
 * - `GET /api/questions/search?keyword=` - Keyword search over title and description
 * - `GET /api/questions/tag/{tag}` - Questions whose tags contain `tag`
 * - `GET /api/questions/recent` - The newest questions
 */
use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::{parse_body, parse_id};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::backend::store::ForumStore;
use crate::shared::{LiveEvent, NewQuestion, Question};

/// Number of questions returned by `GET /api/questions/recent`
pub const RECENT_QUESTION_LIMIT: usize = 10;

/// List every question (GET /api/questions)
pub async fn list_questions(
    State(store): State<Arc<dyn ForumStore>>,
) -> Result<Json<Vec<Question>>, BackendError> {
    let questions = store.all_questions().await?;
    Ok(Json(questions))
}

/// Create a question (POST /api/questions)
///
/// # Request Body
///
/// ```json
/// {
///   "title": "How do I share state between axum handlers?",
///   "description": "...",
///   "tags": "rust,axum"
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the stored question. Every live subscriber receives a
/// `NEW_QUESTION` event carrying the same record.
pub async fn create_question(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Question>), BackendError> {
    let new: NewQuestion = parse_body(&body)?;
    new.validate()?;

    let question = state.store.create_question(new).await?;
    tracing::info!("[Forum] Created question {}: {}", question.id, question.title);

    state.live.broadcast(&LiveEvent::new_question(question.clone()));

    Ok((StatusCode::CREATED, Json(question)))
}

/// Fetch one question (GET /api/questions/{id})
pub async fn get_question(
    State(store): State<Arc<dyn ForumStore>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Question>, BackendError> {
    let id = parse_id(&raw_id, "question")?;

    store
        .question_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| BackendError::not_found("Question not found"))
}

/// Search questions by keyword (GET /api/questions/search?keyword=...)
///
/// A missing or blank keyword is rejected rather than matching everything.
/// Otherwise the keyword is matched exactly as sent, surrounding spaces
/// included.
pub async fn search_questions(
    State(store): State<Arc<dyn ForumStore>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Question>>, BackendError> {
    let keyword = params
        .get("keyword")
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| BackendError::validation("Search keyword is required"))?;

    let questions = store.search_questions(keyword).await?;
    tracing::debug!("[Forum] Search '{}' matched {} questions", keyword, questions.len());
    Ok(Json(questions))
}

/// Questions carrying a tag (GET /api/questions/tag/{tag})
pub async fn questions_by_tag(
    State(store): State<Arc<dyn ForumStore>>,
    Path(tag): Path<String>,
) -> Result<Json<Vec<Question>>, BackendError> {
    let questions = store.questions_by_tag(&tag).await?;
    Ok(Json(questions))
}

/// Newest questions first (GET /api/questions/recent)
pub async fn recent_questions(
    State(store): State<Arc<dyn ForumStore>>,
) -> Result<Json<Vec<Question>>, BackendError> {
    let questions = store.recent_questions(RECENT_QUESTION_LIMIT).await?;
    Ok(Json(questions))
}
