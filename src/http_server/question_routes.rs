//! Question HTTP Routes
//!
//! Endpoints for listing (paginated), creating, searching, and deleting
//! questions. `POST /questions` serves both search and create; the body
//! is decoded once at the boundary into an explicit variant instead of
//! checking key presence inside the handler.

use std::sync::Arc;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    extract::{Path, Query, State},
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::store::{Category, NewQuestion, Question};

use super::errors::{ApiError, ApiResult};
use super::pagination::paginate;
use super::server::{method_not_allowed, ApiState};

/// `current_category` label for the unfiltered question list
const ALL_CATEGORIES_LABEL: &str = "ALL";

/// `current_category` label for search results
const SEARCH_LABEL: &str = "Search";

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<usize>,
}

/// Body of `POST /questions`, decided once at the boundary: a payload
/// carrying `searchTerm` is a search, anything else is a create attempt.
///
/// Create fields stay optional here; the handler turns missing or falsy
/// values into a 400 rather than letting deserialization reject them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum QuestionsPostBody {
    Search(SearchBody),
    Create(CreateQuestionBody),
}

#[derive(Debug, Deserialize)]
pub struct SearchBody {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateQuestionBody {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub category: Option<i64>,
    #[serde(default)]
    pub difficulty: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: Vec<Category>,
    pub current_category: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

#[derive(Debug, Serialize)]
pub struct CreateQuestionResponse {
    pub success: bool,
    pub question: Question,
}

#[derive(Debug, Serialize)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub question_id: i64,
}

/// Responses `POST /questions` can produce, depending on payload shape.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum QuestionsPostResponse {
    Search(SearchResponse),
    Create(CreateQuestionResponse),
}

// ==================
// Question Routes
// ==================

/// Create question routes
pub fn question_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route(
            "/questions",
            get(list_questions_handler)
                .post(post_questions_handler)
                .fallback(method_not_allowed),
        )
        .route(
            "/questions/:question_id",
            delete(delete_question_handler).fallback(method_not_allowed),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// `GET /questions?page=N` - one 10-question page plus totals and the
/// category list
///
/// An empty page slice (past the end, or no questions at all) is a 404,
/// not an empty success.
async fn list_questions_handler(
    State(state): State<Arc<ApiState>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResult<Json<QuestionPageResponse>> {
    let Query(query) = query.map_err(|_| ApiError::BadRequest)?;
    let page = query.page.unwrap_or(1);

    let all_questions = state.store.all_questions()?;
    let questions = paginate(&all_questions, page);
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }

    let categories = state.store.all_categories()?;

    Ok(Json(QuestionPageResponse {
        success: true,
        questions,
        total_questions: all_questions.len(),
        categories,
        current_category: ALL_CATEGORIES_LABEL.to_string(),
    }))
}

/// `POST /questions` - search by `searchTerm`, or create a new question
async fn post_questions_handler(
    State(state): State<Arc<ApiState>>,
    body: Result<Json<QuestionsPostBody>, JsonRejection>,
) -> ApiResult<Json<QuestionsPostResponse>> {
    let Json(body) = body.map_err(|_| ApiError::BadRequest)?;
    match body {
        QuestionsPostBody::Search(search) => {
            let response = search_questions(&state, &search.search_term)?;
            Ok(Json(QuestionsPostResponse::Search(response)))
        }
        QuestionsPostBody::Create(create) => {
            let response = create_question(&state, create)?;
            Ok(Json(QuestionsPostResponse::Create(response)))
        }
    }
}

/// Case-insensitive substring search over question text.
///
/// Zero matches is a valid empty result; this path never 404s.
fn search_questions(state: &ApiState, term: &str) -> ApiResult<SearchResponse> {
    let questions = state.store.search_questions(term)?;
    Ok(SearchResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: SEARCH_LABEL.to_string(),
    })
}

/// Validate and insert a new question.
///
/// Missing or falsy fields and an unknown category are all malformed
/// requests (400), never 404.
fn create_question(state: &ApiState, body: CreateQuestionBody) -> ApiResult<CreateQuestionResponse> {
    let question = body
        .question
        .filter(|q| !q.is_empty())
        .ok_or(ApiError::BadRequest)?;
    let answer = body
        .answer
        .filter(|a| !a.is_empty())
        .ok_or(ApiError::BadRequest)?;
    let category = body
        .category
        .filter(|&c| c != 0)
        .ok_or(ApiError::BadRequest)?;
    let difficulty = body
        .difficulty
        .filter(|&d| d != 0)
        .ok_or(ApiError::BadRequest)?;

    if state.store.category_by_id(category)?.is_none() {
        return Err(ApiError::BadRequest);
    }

    let stored = state.store.insert_question(NewQuestion {
        question,
        answer,
        category,
        difficulty,
    })?;

    Ok(CreateQuestionResponse {
        success: true,
        question: stored,
    })
}

/// `DELETE /questions/:id` - remove a question and return its id
///
/// Idempotent in effect, not in response: a second delete of the same id
/// is a 404.
async fn delete_question_handler(
    State(state): State<Arc<ApiState>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<DeleteQuestionResponse>> {
    let Path(question_id) = path.map_err(|_| ApiError::NotFound)?;

    let question = state
        .store
        .question_by_id(question_id)?
        .ok_or(ApiError::NotFound)?;

    if !state.store.delete_question(question.id)? {
        return Err(ApiError::NotFound);
    }

    Ok(Json(DeleteQuestionResponse {
        success: true,
        question_id: question.id,
    }))
}
