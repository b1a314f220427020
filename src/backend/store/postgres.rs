//! PostgreSQL forum store.
//!
//! Queries are checked at runtime (`sqlx::query` + `Row::get`) so the crate
//! builds without a live database. The schema lives in `migrations/` and is
//! applied with `sqlx::migrate!()`.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use super::{ForumStore, StoreError, StoreResult};
use crate::shared::{
    popular_tags, Answer, AnswerId, NewAnswer, NewQuestion, Question, QuestionId, TagCount,
};

const MAX_CONNECTIONS: u32 = 5;

/// Forum store backed by a PostgreSQL connection pool
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Wrap an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool against `database_url`
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Apply pending migrations from `migrations/`
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!().run(&self.pool).await
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Build an `ILIKE` pattern that matches `input` literally anywhere in a value
fn contains_pattern(input: &str) -> String {
    let mut pattern = String::with_capacity(input.len() + 2);
    pattern.push('%');
    for ch in input.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn limit_param(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

fn question_from_row(row: &PgRow) -> Question {
    Question {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
        tags: row.get("tags"),
        created_at: row.get("created_at"),
    }
}

fn answer_from_row(row: &PgRow) -> Answer {
    Answer {
        id: row.get("id"),
        question_id: row.get("question_id"),
        answer_text: row.get("answer_text"),
        likes: row.get("likes"),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl ForumStore for PgStore {
    async fn all_questions(&self) -> StoreResult<Vec<Question>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, description, tags, created_at
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(question_from_row).collect())
    }

    async fn question_by_id(&self, id: QuestionId) -> StoreResult<Option<Question>> {
        let row = sqlx::query(
            r#"
            SELECT id, title, description, tags, created_at
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(question_from_row))
    }

    async fn create_question(&self, new: NewQuestion) -> StoreResult<Question> {
        let row = sqlx::query(
            r#"
            INSERT INTO questions (title, description, tags, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, description, tags, created_at
            "#,
        )
        .bind(&new.title)
        .bind(&new.description)
        .bind(&new.tags)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(question_from_row(&row))
    }

    async fn search_questions(&self, keyword: &str) -> StoreResult<Vec<Question>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, description, tags, created_at
            FROM questions
            WHERE title ILIKE $1 ESCAPE '\' OR description ILIKE $1 ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(contains_pattern(keyword))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(question_from_row).collect())
    }

    async fn questions_by_tag(&self, tag: &str) -> StoreResult<Vec<Question>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, description, tags, created_at
            FROM questions
            WHERE tags ILIKE $1 ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(contains_pattern(tag))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(question_from_row).collect())
    }

    async fn recent_questions(&self, limit: usize) -> StoreResult<Vec<Question>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, description, tags, created_at
            FROM questions
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit_param(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(question_from_row).collect())
    }

    async fn popular_tags(&self, limit: usize) -> StoreResult<Vec<TagCount>> {
        let rows = sqlx::query(
            r#"
            SELECT tags
            FROM questions
            WHERE tags IS NOT NULL
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let raw: Vec<String> = rows.iter().map(|row| row.get("tags")).collect();
        Ok(popular_tags(raw.iter().map(String::as_str), limit))
    }

    async fn answers_for_question(&self, question_id: QuestionId) -> StoreResult<Vec<Answer>> {
        let rows = sqlx::query(
            r#"
            SELECT id, question_id, answer_text, likes, created_at
            FROM answers
            WHERE question_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(question_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(answer_from_row).collect())
    }

    async fn create_answer(&self, new: NewAnswer) -> StoreResult<Answer> {
        let result = sqlx::query(
            r#"
            INSERT INTO answers (question_id, answer_text, likes, created_at)
            VALUES ($1, $2, 0, $3)
            RETURNING id, question_id, answer_text, likes, created_at
            "#,
        )
        .bind(new.question_id)
        .bind(&new.answer_text)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(row) => Ok(answer_from_row(&row)),
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
                Err(StoreError::MissingQuestion(new.question_id))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn like_answer(&self, id: AnswerId) -> StoreResult<Option<Answer>> {
        // single statement, so concurrent likes are serialized by the row lock
        let row = sqlx::query(
            r#"
            UPDATE answers
            SET likes = likes + 1
            WHERE id = $1
            RETURNING id, question_id, answer_text, likes, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(answer_from_row))
    }

    async fn delete_answer(&self, id: AnswerId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM answers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
