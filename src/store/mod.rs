//! # Store Module
//!
//! The persistence adapter for trivia questions and categories.
//!
//! Handlers never see SQL; they hold an `Arc<dyn TriviaStore>` and branch
//! on a closed error taxonomy. Two implementations are provided:
//! [`MemoryStore`] (tests, databaseless serving) and [`SqliteStore`].

pub mod errors;
pub mod memory;
pub mod models;
pub mod sqlite;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use models::{Category, NewQuestion, Question};
pub use sqlite::SqliteStore;

/// Store adapter providing create/read/delete operations over questions
/// and categories.
///
/// Object-safe so route state can hold `Arc<dyn TriviaStore>`. All read
/// methods return rows in ascending id order; pagination depends on it.
pub trait TriviaStore: Send + Sync {
    /// All categories, ascending by id.
    fn all_categories(&self) -> StoreResult<Vec<Category>>;

    /// Look up a single category. `Ok(None)` when the id is unknown.
    fn category_by_id(&self, id: i64) -> StoreResult<Option<Category>>;

    /// Insert a category and return it with its assigned id.
    ///
    /// Used by seeding and tests; there is no HTTP endpoint for this.
    fn insert_category(&self, label: &str) -> StoreResult<Category>;

    /// All questions, ascending by id.
    fn all_questions(&self) -> StoreResult<Vec<Question>>;

    /// Look up a single question. `Ok(None)` when the id is unknown.
    fn question_by_id(&self, id: i64) -> StoreResult<Option<Question>>;

    /// All questions belonging to the given category, ascending by id.
    fn questions_by_category(&self, category_id: i64) -> StoreResult<Vec<Question>>;

    /// Case-insensitive substring match against the question text.
    ///
    /// An empty term matches every question.
    fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>>;

    /// Insert a question and return the stored row with its assigned id.
    fn insert_question(&self, new: NewQuestion) -> StoreResult<Question>;

    /// Delete a question. Returns `false` when no row had that id.
    fn delete_question(&self, id: i64) -> StoreResult<bool>;
}
