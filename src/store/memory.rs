//! In-memory store implementation.
//!
//! Backs tests and `serve` without a database file. BTreeMaps keep rows in
//! id order, which the pagination contract depends on.

use std::collections::BTreeMap;
use std::sync::Mutex;

use super::errors::{StoreError, StoreResult};
use super::models::{Category, NewQuestion, Question};
use super::TriviaStore;

#[derive(Debug, Default)]
struct MemoryInner {
    categories: BTreeMap<i64, Category>,
    questions: BTreeMap<i64, Question>,
    next_category_id: i64,
    next_question_id: i64,
}

/// In-memory trivia store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, MemoryInner>> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Backend("memory store lock poisoned".to_string()))
    }
}

impl TriviaStore for MemoryStore {
    fn all_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.lock()?.categories.values().cloned().collect())
    }

    fn category_by_id(&self, id: i64) -> StoreResult<Option<Category>> {
        Ok(self.lock()?.categories.get(&id).cloned())
    }

    fn insert_category(&self, label: &str) -> StoreResult<Category> {
        let mut inner = self.lock()?;
        inner.next_category_id += 1;
        let category = Category {
            id: inner.next_category_id,
            label: label.to_string(),
        };
        inner.categories.insert(category.id, category.clone());
        Ok(category)
    }

    fn all_questions(&self) -> StoreResult<Vec<Question>> {
        Ok(self.lock()?.questions.values().cloned().collect())
    }

    fn question_by_id(&self, id: i64) -> StoreResult<Option<Question>> {
        Ok(self.lock()?.questions.get(&id).cloned())
    }

    fn questions_by_category(&self, category_id: i64) -> StoreResult<Vec<Question>> {
        Ok(self
            .lock()?
            .questions
            .values()
            .filter(|q| q.category == category_id)
            .cloned()
            .collect())
    }

    fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        let needle = term.to_lowercase();
        Ok(self
            .lock()?
            .questions
            .values()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    fn insert_question(&self, new: NewQuestion) -> StoreResult<Question> {
        let mut inner = self.lock()?;
        inner.next_question_id += 1;
        let question = Question {
            id: inner.next_question_id,
            question: new.question,
            answer: new.answer,
            category: new.category,
            difficulty: new.difficulty,
        };
        inner.questions.insert(question.id, question.clone());
        Ok(question)
    }

    fn delete_question(&self, id: i64) -> StoreResult<bool> {
        Ok(self.lock()?.questions.remove(&id).is_some())
    }
}
