//! HTTP surface: router, shared state, and API error rendering.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde_json::json;
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing::Level;

use crate::market::ProductScraper;

pub mod handlers;

pub use handlers::{search, SearchParams, SearchResponse};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub scraper: ProductScraper,
}

/// Builds the application router with CORS and request tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/search", get(handlers::search))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::new().level(Level::INFO)))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Errors surfaced by the API layer.
///
/// Per-marketplace scrape failures never reach this type; they are absorbed
/// into sentinel records. Only inbound validation and unexpected orchestration
/// errors render here.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Search query is required")]
    MissingQuery,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingQuery => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Search query is required" })),
            )
                .into_response(),
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error", "message": e.to_string() })),
                )
                    .into_response()
            }
        }
    }
}
