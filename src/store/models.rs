//! Data models for the trivia store.

use serde::{Deserialize, Serialize};

/// A row from the `questions` table.
///
/// Questions are created and deleted, never updated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    /// References an existing `Category.id`; enforced by the create
    /// handler, not by a store-level constraint.
    pub category: i64,
    pub difficulty: i64,
}

/// A row from the `categories` table.
///
/// Read-only through the HTTP API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    /// Serialized as `type` to match the wire contract.
    #[serde(rename = "type")]
    pub label: String,
}

/// Insert payload for a new question (id assigned by the store).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}
