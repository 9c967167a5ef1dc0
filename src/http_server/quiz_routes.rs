//! Quiz HTTP Routes
//!
//! `POST /quizzes` picks a random question the player has not seen yet,
//! drawn from one category or from all of them.

use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    routing::post,
    Json, Router,
};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::store::Question;

use super::errors::{ApiError, ApiResult};
use super::server::{method_not_allowed, ApiState};

/// Sentinel category id meaning "draw from all categories".
///
/// Only the quiz endpoint honors this; everywhere else a category id of
/// zero fails validation.
const ALL_CATEGORIES: i64 = 0;

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub quiz_category: Option<QuizCategory>,
    /// Ids already shown to the player; absent and null both mean none.
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,
}

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Question,
}

// ==================
// Quiz Routes
// ==================

/// Create quiz routes
pub fn quiz_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route(
            "/quizzes",
            post(quiz_question_handler).fallback(method_not_allowed),
        )
        .with_state(state)
}

// ==================
// Handler
// ==================

/// `POST /quizzes` - one random question not in `previous_questions`
///
/// A missing category id is a 400, an unknown (nonzero) one a 404, and a
/// valid but exhausted candidate set a 422. Selection is uniform with no
/// seeding contract; calls are not reproducible.
async fn quiz_question_handler(
    State(state): State<Arc<ApiState>>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> ApiResult<Json<QuizResponse>> {
    let Json(body) = body.map_err(|_| ApiError::BadRequest)?;

    let category_id = body
        .quiz_category
        .and_then(|c| c.id)
        .ok_or(ApiError::BadRequest)?;

    let candidates = if category_id == ALL_CATEGORIES {
        state.store.all_questions()?
    } else {
        if state.store.category_by_id(category_id)?.is_none() {
            return Err(ApiError::NotFound);
        }
        state.store.questions_by_category(category_id)?
    };

    let previous = body.previous_questions.unwrap_or_default();
    let unseen: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();

    let question = unseen
        .choose(&mut rand::thread_rng())
        .cloned()
        .ok_or(ApiError::Unprocessable)?;

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
