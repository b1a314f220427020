//! In-memory forum store.
//!
//! All records live in two `BTreeMap`s behind one `tokio::sync::RwLock`.
//! Ids start at 1 and are never reused, even after an answer is deleted.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{ForumStore, StoreResult};
use crate::shared::{
    popular_tags, Answer, AnswerId, NewAnswer, NewQuestion, Question, QuestionId, TagCount,
};

#[derive(Debug)]
struct Tables {
    questions: BTreeMap<QuestionId, Question>,
    answers: BTreeMap<AnswerId, Answer>,
    next_question_id: QuestionId,
    next_answer_id: AnswerId,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            questions: BTreeMap::new(),
            answers: BTreeMap::new(),
            next_question_id: 1,
            next_answer_id: 1,
        }
    }
}

/// Forum store kept entirely in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn newest_first(questions: &mut [Question]) {
    questions.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
}

#[async_trait]
impl ForumStore for MemoryStore {
    async fn all_questions(&self) -> StoreResult<Vec<Question>> {
        let tables = self.tables.read().await;
        Ok(tables.questions.values().cloned().collect())
    }

    async fn question_by_id(&self, id: QuestionId) -> StoreResult<Option<Question>> {
        let tables = self.tables.read().await;
        Ok(tables.questions.get(&id).cloned())
    }

    async fn create_question(&self, new: NewQuestion) -> StoreResult<Question> {
        let mut tables = self.tables.write().await;
        let id = tables.next_question_id;
        tables.next_question_id += 1;

        let question = Question::from_new(id, new, Utc::now());
        tables.questions.insert(id, question.clone());
        Ok(question)
    }

    async fn search_questions(&self, keyword: &str) -> StoreResult<Vec<Question>> {
        let needle = keyword.to_lowercase();
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|question| question.mentions(&needle))
            .cloned()
            .collect())
    }

    async fn questions_by_tag(&self, tag: &str) -> StoreResult<Vec<Question>> {
        let needle = tag.to_lowercase();
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|question| question.tagged_with(&needle))
            .cloned()
            .collect())
    }

    async fn recent_questions(&self, limit: usize) -> StoreResult<Vec<Question>> {
        let mut questions = self.all_questions().await?;
        newest_first(&mut questions);
        questions.truncate(limit);
        Ok(questions)
    }

    async fn popular_tags(&self, limit: usize) -> StoreResult<Vec<TagCount>> {
        let tables = self.tables.read().await;
        let raw = tables
            .questions
            .values()
            .filter_map(|question| question.tags.as_deref());
        Ok(popular_tags(raw, limit))
    }

    async fn answers_for_question(&self, question_id: QuestionId) -> StoreResult<Vec<Answer>> {
        let tables = self.tables.read().await;
        let mut answers: Vec<Answer> = tables
            .answers
            .values()
            .filter(|answer| answer.question_id == question_id)
            .cloned()
            .collect();
        answers.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(answers)
    }

    async fn create_answer(&self, new: NewAnswer) -> StoreResult<Answer> {
        let mut tables = self.tables.write().await;
        let id = tables.next_answer_id;
        tables.next_answer_id += 1;

        let answer = Answer::from_new(id, new, Utc::now());
        tables.answers.insert(id, answer.clone());
        Ok(answer)
    }

    async fn like_answer(&self, id: AnswerId) -> StoreResult<Option<Answer>> {
        // read-modify-write under one write guard so concurrent likes never collide
        let mut tables = self.tables.write().await;
        Ok(tables.answers.get_mut(&id).map(|answer| {
            answer.likes += 1;
            answer.clone()
        }))
    }

    async fn delete_answer(&self, id: AnswerId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        Ok(tables.answers.remove(&id).is_some())
    }
}
