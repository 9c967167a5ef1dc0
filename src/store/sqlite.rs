//! SQLite store implementation.
//!
//! A single `rusqlite::Connection` behind a mutex; the service is
//! low-volume enough that serialized access is the whole concurrency
//! story. The schema carries no FOREIGN KEY clause: referential checks
//! belong to the create handler.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection, OptionalExtension};

use super::errors::{StoreError, StoreResult};
use super::models::{Category, NewQuestion, Question};
use super::TriviaStore;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS categories (
    id   INTEGER PRIMARY KEY AUTOINCREMENT,
    type TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS questions (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    question   TEXT NOT NULL,
    answer     TEXT NOT NULL,
    category   INTEGER NOT NULL,
    difficulty INTEGER NOT NULL
);
";

/// SQLite-backed trivia store.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (creating if needed) a database file and ensure the schema.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open a private in-memory database (used by tests).
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Backend("sqlite connection lock poisoned".to_string()))
    }

    fn query_questions(conn: &Connection, sql: &str, args: &[&dyn rusqlite::ToSql]) -> StoreResult<Vec<Question>> {
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map(args, row_to_question)?;
        let mut questions = Vec::new();
        for row in rows {
            questions.push(row?);
        }
        Ok(questions)
    }
}

fn row_to_question(row: &rusqlite::Row<'_>) -> rusqlite::Result<Question> {
    Ok(Question {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
        category: row.get(3)?,
        difficulty: row.get(4)?,
    })
}

fn row_to_category(row: &rusqlite::Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        label: row.get(1)?,
    })
}

impl TriviaStore for SqliteStore {
    fn all_categories(&self) -> StoreResult<Vec<Category>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT id, type FROM categories ORDER BY id")?;
        let rows = stmt.query_map([], row_to_category)?;
        let mut categories = Vec::new();
        for row in rows {
            categories.push(row?);
        }
        Ok(categories)
    }

    fn category_by_id(&self, id: i64) -> StoreResult<Option<Category>> {
        let conn = self.lock()?;
        let category = conn
            .query_row(
                "SELECT id, type FROM categories WHERE id = ?1",
                params![id],
                row_to_category,
            )
            .optional()?;
        Ok(category)
    }

    fn insert_category(&self, label: &str) -> StoreResult<Category> {
        let conn = self.lock()?;
        conn.execute("INSERT INTO categories (type) VALUES (?1)", params![label])?;
        Ok(Category {
            id: conn.last_insert_rowid(),
            label: label.to_string(),
        })
    }

    fn all_questions(&self) -> StoreResult<Vec<Question>> {
        let conn = self.lock()?;
        Self::query_questions(
            &conn,
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
            params![],
        )
    }

    fn question_by_id(&self, id: i64) -> StoreResult<Option<Question>> {
        let conn = self.lock()?;
        let question = conn
            .query_row(
                "SELECT id, question, answer, category, difficulty FROM questions WHERE id = ?1",
                params![id],
                row_to_question,
            )
            .optional()?;
        Ok(question)
    }

    fn questions_by_category(&self, category_id: i64) -> StoreResult<Vec<Question>> {
        let conn = self.lock()?;
        Self::query_questions(
            &conn,
            "SELECT id, question, answer, category, difficulty FROM questions \
             WHERE category = ?1 ORDER BY id",
            params![category_id],
        )
    }

    fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        // LIKE is case-insensitive for ASCII in SQLite; the term is passed
        // verbatim, so % and _ act as wildcards just as in the ilike query
        // this mirrors.
        let pattern = format!("%{}%", term);
        let conn = self.lock()?;
        Self::query_questions(
            &conn,
            "SELECT id, question, answer, category, difficulty FROM questions \
             WHERE question LIKE ?1 ORDER BY id",
            params![pattern],
        )
    }

    fn insert_question(&self, new: NewQuestion) -> StoreResult<Question> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO questions (question, answer, category, difficulty) \
             VALUES (?1, ?2, ?3, ?4)",
            params![new.question, new.answer, new.category, new.difficulty],
        )?;
        Ok(Question {
            id: conn.last_insert_rowid(),
            question: new.question,
            answer: new.answer,
            category: new.category,
            difficulty: new.difficulty,
        })
    }

    fn delete_question(&self, id: i64) -> StoreResult<bool> {
        let conn = self.lock()?;
        let deleted = conn.execute("DELETE FROM questions WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }
}
