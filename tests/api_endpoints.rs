//! API Endpoint Tests
//!
//! Drives the full router over an in-memory store, one request per test,
//! covering each endpoint's success path and its expected errors.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use trivia_api::http_server::server::build_router;
use trivia_api::store::{MemoryStore, NewQuestion, TriviaStore};

// =============================================================================
// Helper Functions
// =============================================================================

/// Store with two categories and 13 questions: 12 in Science, 1 in Art.
/// A third category, Geography, stays empty.
fn seeded_store() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    let science = store.insert_category("Science").unwrap();
    let art = store.insert_category("Art").unwrap();
    store.insert_category("Geography").unwrap();

    for i in 1i64..=12 {
        store
            .insert_question(NewQuestion {
                question: format!("Science question number {}?", i),
                answer: format!("Answer {}", i),
                category: science.id,
                difficulty: 1 + (i % 5),
            })
            .unwrap();
    }
    store
        .insert_question(NewQuestion {
            question: "Who painted the Mona Lisa?".to_string(),
            answer: "Leonardo da Vinci".to_string(),
            category: art.id,
            difficulty: 2,
        })
        .unwrap();
    store
}

fn seeded_router() -> Router {
    build_router(seeded_store())
}

async fn send(router: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(value) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn assert_error_envelope(body: &Value, status_code: u16, message: &str) {
    assert_eq!(body["success"], false);
    assert_eq!(body["status_code"], status_code);
    assert_eq!(body["message"], message);
}

// =============================================================================
// Categories
// =============================================================================

#[tokio::test]
async fn test_get_categories() {
    let (status, body) = send(seeded_router(), Method::GET, "/categories", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["categories"].as_array().unwrap().len(), 3);
    assert_eq!(body["categories"][0], json!({"id": 1, "type": "Science"}));
}

#[tokio::test]
async fn test_post_categories_is_method_not_allowed() {
    let (status, body) = send(
        seeded_router(),
        Method::POST,
        "/categories",
        Some(json!({"type": "Music"})),
    )
    .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_error_envelope(&body, 405, "Method Not Allowed");
}

// =============================================================================
// Question List & Pagination
// =============================================================================

#[tokio::test]
async fn test_get_questions_first_page() {
    let (status, body) = send(seeded_router(), Method::GET, "/questions", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["questions"].as_array().unwrap().len(), 10);
    assert_eq!(body["total_questions"], 13);
    assert_eq!(body["current_category"], "ALL");
    assert_eq!(body["categories"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_get_questions_last_page_holds_remainder() {
    let (status, body) = send(seeded_router(), Method::GET, "/questions?page=2", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"].as_array().unwrap().len(), 3);
    assert_eq!(body["total_questions"], 13);
}

#[tokio::test]
async fn test_get_questions_page_beyond_end_is_404() {
    let (status, body) = send(seeded_router(), Method::GET, "/questions?page=99", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_envelope(&body, 404, "Resource Not Found");
}

#[tokio::test]
async fn test_get_questions_empty_store_is_404() {
    let router = build_router(Arc::new(MemoryStore::new()));
    let (status, _body) = send(router, Method::GET, "/questions", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Delete Question
// =============================================================================

#[tokio::test]
async fn test_delete_question_then_delete_again() {
    let store = seeded_store();

    let (status, body) = send(
        build_router(store.clone()),
        Method::DELETE,
        "/questions/1",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["question_id"], 1);
    assert!(store.question_by_id(1).unwrap().is_none());

    let (status, body) = send(build_router(store), Method::DELETE, "/questions/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_envelope(&body, 404, "Resource Not Found");
}

#[tokio::test]
async fn test_delete_unknown_question_is_404() {
    let (status, _body) = send(seeded_router(), Method::DELETE, "/questions/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Create Question
// =============================================================================

#[tokio::test]
async fn test_create_question() {
    let store = seeded_store();
    let (status, body) = send(
        build_router(store.clone()),
        Method::POST,
        "/questions",
        Some(json!({
            "question": "What is the chemical symbol for gold?",
            "answer": "Au",
            "category": 1,
            "difficulty": 3
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["question"]["id"], 14);
    assert_eq!(body["question"]["answer"], "Au");
    assert_eq!(store.all_questions().unwrap().len(), 14);
}

#[tokio::test]
async fn test_create_question_missing_field_is_400() {
    let (status, body) = send(
        seeded_router(),
        Method::POST,
        "/questions",
        Some(json!({
            "question": "What is the chemical symbol for gold?",
            "category": 1,
            "difficulty": 3
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_envelope(&body, 400, "Bad Request");
}

#[tokio::test]
async fn test_create_question_empty_answer_is_400() {
    let (status, _body) = send(
        seeded_router(),
        Method::POST,
        "/questions",
        Some(json!({
            "question": "What is the chemical symbol for gold?",
            "answer": "",
            "category": 1,
            "difficulty": 3
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_question_zero_difficulty_is_400() {
    let (status, _body) = send(
        seeded_router(),
        Method::POST,
        "/questions",
        Some(json!({
            "question": "What is the chemical symbol for gold?",
            "answer": "Au",
            "category": 1,
            "difficulty": 0
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_question_unknown_category_is_400() {
    let (status, body) = send(
        seeded_router(),
        Method::POST,
        "/questions",
        Some(json!({
            "question": "What is the chemical symbol for gold?",
            "answer": "Au",
            "category": 999,
            "difficulty": 3
        })),
    )
    .await;

    // Unknown category is a malformed request, not a missing resource.
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_envelope(&body, 400, "Bad Request");
}

#[tokio::test]
async fn test_create_question_zero_category_is_400() {
    // The quiz sentinel 0 is not honored on the create path.
    let (status, _body) = send(
        seeded_router(),
        Method::POST,
        "/questions",
        Some(json!({
            "question": "What is the chemical symbol for gold?",
            "answer": "Au",
            "category": 0,
            "difficulty": 3
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_post_questions_malformed_json_is_400() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/questions")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = seeded_router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_search_questions() {
    let (status, body) = send(
        seeded_router(),
        Method::POST,
        "/questions",
        Some(json!({"searchTerm": "mona lisa"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["total_questions"], 1);
    assert_eq!(body["current_category"], "Search");
    assert_eq!(body["questions"][0]["answer"], "Leonardo da Vinci");
}

#[tokio::test]
async fn test_search_no_matches_is_200_with_empty_list() {
    let (status, body) = send(
        seeded_router(),
        Method::POST,
        "/questions",
        Some(json!({"searchTerm": "xylophone"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["questions"].as_array().unwrap().len(), 0);
    assert_eq!(body["total_questions"], 0);
}

#[tokio::test]
async fn test_search_empty_term_matches_everything() {
    let (status, body) = send(
        seeded_router(),
        Method::POST,
        "/questions",
        Some(json!({"searchTerm": ""})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], 13);
}

// =============================================================================
// Questions by Category
// =============================================================================

#[tokio::test]
async fn test_get_questions_by_category() {
    let (status, body) = send(
        seeded_router(),
        Method::GET,
        "/categories/2/questions",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["total_questions"], 1);
    assert_eq!(body["current_category"], "Art");
}

#[tokio::test]
async fn test_get_questions_by_empty_category_is_200() {
    let (status, body) = send(
        seeded_router(),
        Method::GET,
        "/categories/3/questions",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"].as_array().unwrap().len(), 0);
    assert_eq!(body["total_questions"], 0);
    assert_eq!(body["current_category"], "Geography");
}

#[tokio::test]
async fn test_get_questions_by_unknown_category_is_404() {
    let (status, body) = send(
        seeded_router(),
        Method::GET,
        "/categories/999/questions",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_envelope(&body, 404, "Resource Not Found");
}

// =============================================================================
// Quiz
// =============================================================================

#[tokio::test]
async fn test_quiz_question_from_category() {
    let (status, body) = send(
        seeded_router(),
        Method::POST,
        "/quizzes",
        Some(json!({"quiz_category": {"id": 2}, "previous_questions": []})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["question"]["id"], 13);
}

#[tokio::test]
async fn test_quiz_question_skips_previous_questions() {
    // Eleven of twelve science questions already seen; the last one must
    // come back.
    let seen: Vec<i64> = (1..=11).collect();
    let (status, body) = send(
        seeded_router(),
        Method::POST,
        "/quizzes",
        Some(json!({"quiz_category": {"id": 1}, "previous_questions": seen})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"]["id"], 12);
}

#[tokio::test]
async fn test_quiz_sentinel_zero_draws_from_all_categories() {
    // Every science question seen; only the art question remains.
    let seen: Vec<i64> = (1..=12).collect();
    let (status, body) = send(
        seeded_router(),
        Method::POST,
        "/quizzes",
        Some(json!({"quiz_category": {"id": 0}, "previous_questions": seen})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"]["id"], 13);
}

#[tokio::test]
async fn test_quiz_exhausted_category_is_422() {
    let seen: Vec<i64> = (1..=12).collect();
    let (status, body) = send(
        seeded_router(),
        Method::POST,
        "/quizzes",
        Some(json!({"quiz_category": {"id": 1}, "previous_questions": seen})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_error_envelope(&body, 422, "Unprocessable");
}

#[tokio::test]
async fn test_quiz_unknown_category_is_404() {
    let (status, body) = send(
        seeded_router(),
        Method::POST,
        "/quizzes",
        Some(json!({"quiz_category": {"id": 999}, "previous_questions": []})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_envelope(&body, 404, "Resource Not Found");
}

#[tokio::test]
async fn test_quiz_missing_category_is_400() {
    let (status, body) = send(
        seeded_router(),
        Method::POST,
        "/quizzes",
        Some(json!({"previous_questions": []})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_envelope(&body, 400, "Bad Request");
}

#[tokio::test]
async fn test_quiz_null_category_id_is_400() {
    let (status, _body) = send(
        seeded_router(),
        Method::POST,
        "/quizzes",
        Some(json!({"quiz_category": {"id": null}})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_quiz_single_question_scenario() {
    // Seed: one category, one question. Seen -> 422; unseen -> that question.
    let store = Arc::new(MemoryStore::new());
    let science = store.insert_category("Science").unwrap();
    let question = store
        .insert_question(NewQuestion {
            question: "What is H2O?".to_string(),
            answer: "Water".to_string(),
            category: science.id,
            difficulty: 1,
        })
        .unwrap();

    let (status, _body) = send(
        build_router(store.clone()),
        Method::POST,
        "/quizzes",
        Some(json!({"quiz_category": {"id": science.id}, "previous_questions": [question.id]})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = send(
        build_router(store),
        Method::POST,
        "/quizzes",
        Some(json!({"quiz_category": {"id": science.id}, "previous_questions": []})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"]["question"], "What is H2O?");
}

// =============================================================================
// Cross-cutting: fallbacks, CORS, health
// =============================================================================

#[tokio::test]
async fn test_unknown_path_is_404_envelope() {
    let (status, body) = send(seeded_router(), Method::GET, "/nope", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_envelope(&body, 404, "Resource Not Found");
}

#[tokio::test]
async fn test_cors_headers_present() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/categories")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = seeded_router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(seeded_router(), Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
