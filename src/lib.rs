//! trivia-api - A small trivia question and category API server
//!
//! HTTP/JSON CRUD service: categories, paginated/searchable questions,
//! and a quiz endpoint that picks a random unseen question.

pub mod cli;
pub mod http_server;
pub mod store;
