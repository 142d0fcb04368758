//! Search endpoint: concurrent three-marketplace scrape.

use axum::extract::{Query, State};
use axum::response::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{ApiError, AppState};
use crate::market::{Marketplace, ProductRecord};

/// Query parameters for `/api/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

/// Aggregate response: one record per marketplace, always the same shape
/// regardless of per-site success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub amazon: ProductRecord,
    pub flipkart: ProductRecord,
    pub myntra: ProductRecord,
}

/// `GET /api/search?query=<text>`
///
/// The three scrapes run concurrently and are awaited jointly; none of them
/// can fail the join, so the response is assembled once all three complete.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = match params.query {
        Some(q) if !q.is_empty() => q,
        _ => return Err(ApiError::MissingQuery),
    };

    info!("Search request: {}", query);

    let amazon_url = Marketplace::Amazon.search_url(&query);
    let flipkart_url = Marketplace::Flipkart.search_url(&query);
    let myntra_url = Marketplace::Myntra.search_url(&query);

    let (amazon, flipkart, myntra) = tokio::join!(
        state.scraper.scrape(&amazon_url),
        state.scraper.scrape(&flipkart_url),
        state.scraper.scrape(&myntra_url),
    );

    Ok(Json(SearchResponse { amazon, flipkart, myntra }))
}
