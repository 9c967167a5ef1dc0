//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.
//!
//! This is the unified entry point for the trivia API.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{header, Method};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::store::TriviaStore;

use super::category_routes::category_routes;
use super::config::HttpServerConfig;
use super::errors::ApiError;
use super::health::health_routes;
use super::question_routes::question_routes;
use super::quiz_routes::quiz_routes;

/// State shared by all request handlers.
///
/// The store is injected here so tests can run the router against an
/// in-memory store while the binary serves a SQLite file.
pub struct ApiState {
    pub store: Arc<dyn TriviaStore>,
}

impl ApiState {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }
}

/// HTTP server for the trivia API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self::with_config(HttpServerConfig::default(), store)
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig, store: Arc<dyn TriviaStore>) -> Self {
        let router = build_router(store);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        tracing::info!("starting trivia API server on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

/// Build the combined router with all endpoints
pub fn build_router(store: Arc<dyn TriviaStore>) -> Router {
    let state = Arc::new(ApiState::new(store));

    // Every response carries permissive CORS headers; the front-end is
    // served from a different origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .merge(health_routes())
        .merge(category_routes(state.clone()))
        .merge(question_routes(state.clone()))
        .merge(quiz_routes(state))
        .fallback(unknown_route)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Fallback for routes hit with an unsupported method
pub(super) async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Fallback for paths no route matches
async fn unknown_route() -> ApiError {
    ApiError::NotFound
}
