//! Fetch-then-extract routine with total error absorption.

use crate::market::client::PageFetcher;
use crate::market::marketplace::Marketplace;
use crate::market::models::ProductRecord;
use crate::market::parser::Extractor;
use std::sync::Arc;
use tracing::{info, warn};

/// Scrapes one marketplace search URL into a normalized record.
///
/// Never fails outward: every fetch or parse problem is absorbed and
/// surfaced as the all-sentinel record with `link` set to the input URL.
/// The caller cannot distinguish "site blocked us" from "nothing found".
#[derive(Clone)]
pub struct ProductScraper {
    fetcher: Arc<dyn PageFetcher>,
}

impl ProductScraper {
    /// Creates a scraper over the given fetcher.
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    /// Fetches a search URL and extracts the first product.
    ///
    /// The recipe is selected once from the URL; no retries.
    pub async fn scrape(&self, search_url: &str) -> ProductRecord {
        let marketplace = Marketplace::from_url(search_url);
        info!("Scraping {}: {}", marketplace, search_url);

        let html = match self.fetcher.fetch(search_url).await {
            Ok(body) => body,
            Err(e) => {
                warn!("{} fetch failed ({}), returning sentinel record", marketplace, e);
                return ProductRecord::unavailable(search_url);
            }
        };

        Extractor::new(marketplace).extract(&html, search_url)
    }
}
