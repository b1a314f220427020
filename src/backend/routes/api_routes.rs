/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Questions
 * - `GET /api/questions` - List questions
 * - `POST /api/questions` - Create a question
 * - `GET /api/questions/search?keyword=` - Keyword search
 * - `GET /api/questions/recent` - Newest questions
 * - `GET /api/questions/tag/{tag}` - Questions by tag
 * - `GET /api/questions/{id}` - One question
 *
 * ## Answers
 * - `GET /api/questions/{id}/answers` - Answers to a question
 * - `POST /api/questions/{id}/answers` - Answer a question
 * - `PUT /api/answers/{id}/reaction` - Like an answer
 * - `DELETE /api/answers/{id}` - Delete an answer
 *
 * ## Tags
 * - `GET /api/tags/popular?limit=` - Most used tags
 */
use axum::{
    routing::{delete, get, put},
    Router,
};

use crate::backend::forum::{
    create_answer, create_question, delete_answer, get_question, like_answer, list_answers,
    list_questions, popular_tags, questions_by_tag, recent_questions, search_questions,
};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// Static segments (`search`, `recent`, `tag`) take priority over the
/// `{id}` capture, so `/api/questions/recent` never reaches `get_question`.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Question endpoints
        .route(
            "/api/questions",
            get(list_questions).post(create_question),
        )
        .route("/api/questions/search", get(search_questions))
        .route("/api/questions/recent", get(recent_questions))
        .route("/api/questions/tag/{tag}", get(questions_by_tag))
        .route("/api/questions/{id}", get(get_question))
        // Answer endpoints
        .route(
            "/api/questions/{id}/answers",
            get(list_answers).post(create_answer),
        )
        .route("/api/answers/{id}/reaction", put(like_answer))
        .route("/api/answers/{id}", delete(delete_answer))
        // Tag summary
        .route("/api/tags/popular", get(popular_tags))
}
