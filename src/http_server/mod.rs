//! # Trivia HTTP Server Module
//!
//! Axum server for the trivia API. Each endpoint area has its own route
//! file; `server.rs` merges them into one router behind a permissive CORS
//! layer and request tracing.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /categories` - List categories
//! - `GET /categories/{id}/questions` - Questions for one category
//! - `GET /questions?page=N` - Paginated question list
//! - `POST /questions` - Create a question, or search by `searchTerm`
//! - `DELETE /questions/{id}` - Delete a question
//! - `POST /quizzes` - Random unseen question for a category

pub mod category_routes;
pub mod config;
pub mod errors;
pub mod health;
pub mod pagination;
pub mod question_routes;
pub mod quiz_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::{ApiState, HttpServer};
