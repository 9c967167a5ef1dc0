//! Category HTTP Routes
//!
//! Endpoints for listing categories and fetching the questions of a
//! single category. Categories are read-only through the API.

use std::sync::Arc;

use axum::{
    extract::rejection::PathRejection,
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::store::{Category, Question};

use super::errors::{ApiError, ApiResult};
use super::server::{method_not_allowed, ApiState};

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<Category>,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

// ==================
// Category Routes
// ==================

/// Create category routes
pub fn category_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route(
            "/categories",
            get(list_categories_handler).fallback(method_not_allowed),
        )
        .route(
            "/categories/:category_id/questions",
            get(questions_by_category_handler).fallback(method_not_allowed),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// `GET /categories` - all categories as `{id, type}`
async fn list_categories_handler(
    State(state): State<Arc<ApiState>>,
) -> ApiResult<Json<CategoriesResponse>> {
    let categories = state.store.all_categories()?;
    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

/// `GET /categories/:id/questions` - every question in one category
///
/// An unknown category id is a 404; a known category with zero questions
/// is a valid empty result.
async fn questions_by_category_handler(
    State(state): State<Arc<ApiState>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<CategoryQuestionsResponse>> {
    let Path(category_id) = path.map_err(|_| ApiError::NotFound)?;
    let category = state
        .store
        .category_by_id(category_id)?
        .ok_or(ApiError::NotFound)?;

    let questions = state.store.questions_by_category(category_id)?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: category.label,
    }))
}
