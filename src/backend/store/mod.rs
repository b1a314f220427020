//! Forum Persistence Module
//!
//! This module defines the `ForumStore` trait that request handlers talk to,
//! together with its two implementations.
//!
//! # Architecture
//!
//! ```text
//!                 ┌──────────────────────┐
//!                 │   Request handlers   │
//!                 └──────────┬───────────┘
//!                            │ Arc<dyn ForumStore>
//!              ┌─────────────┴─────────────┐
//!              ▼                           ▼
//!     ┌─────────────────┐         ┌─────────────────┐
//!     │   MemoryStore   │         │     PgStore     │
//!     │  (RwLock maps)  │         │  (sqlx PgPool)  │
//!     └─────────────────┘         └─────────────────┘
//! ```
//!
//! - **`memory`** - In-process store used when no database is configured and
//!   in tests
//! - **`postgres`** - PostgreSQL store backed by `sqlx`
//! - **`seed`** - Sample questions and answers for a fresh install
//!
//! # Matching rules
//!
//! Both implementations follow the same rules so they can be swapped freely:
//! keyword search and tag filtering are case-insensitive substring matches on
//! the raw stored text, recent questions are newest first, answers for a
//! question are newest first, and likes are incremented atomically.
//!
//! Referential checks (an answer's question must exist) belong to the
//! handlers. The stores do not repeat them, although PostgreSQL's foreign key
//! still reports a violation as `StoreError::MissingQuestion`.

use async_trait::async_trait;
use thiserror::Error;

use crate::shared::{
    Answer, AnswerId, NewAnswer, NewQuestion, Question, QuestionId, TagCount,
};

/// In-memory store
pub mod memory;

/// PostgreSQL store
pub mod postgres;

/// Sample data seeding
pub mod seed;

pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use seed::seed_sample_data;

/// Errors returned by store implementations
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database rejected or failed the query
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An answer referenced a question that does not exist
    #[error("question {0} does not exist")]
    MissingQuestion(QuestionId),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations for questions and answers
#[async_trait]
pub trait ForumStore: Send + Sync {
    /// Every question, in storage order
    async fn all_questions(&self) -> StoreResult<Vec<Question>>;

    async fn question_by_id(&self, id: QuestionId) -> StoreResult<Option<Question>>;

    /// Store a question, assigning its id and creation time
    async fn create_question(&self, new: NewQuestion) -> StoreResult<Question>;

    /// Questions whose title or description contains `keyword`, ignoring case
    async fn search_questions(&self, keyword: &str) -> StoreResult<Vec<Question>>;

    /// Questions whose raw tag string contains `tag`, ignoring case
    async fn questions_by_tag(&self, tag: &str) -> StoreResult<Vec<Question>>;

    /// Newest questions first, at most `limit` of them
    async fn recent_questions(&self, limit: usize) -> StoreResult<Vec<Question>>;

    /// The `limit` most used tags
    async fn popular_tags(&self, limit: usize) -> StoreResult<Vec<TagCount>>;

    /// Answers to one question, newest first
    async fn answers_for_question(&self, question_id: QuestionId) -> StoreResult<Vec<Answer>>;

    /// Store an answer with zero likes
    async fn create_answer(&self, new: NewAnswer) -> StoreResult<Answer>;

    /// Add one like; `None` if the answer does not exist
    async fn like_answer(&self, id: AnswerId) -> StoreResult<Option<Answer>>;

    /// Remove an answer; `false` if it did not exist
    async fn delete_answer(&self, id: AnswerId) -> StoreResult<bool>;
}
