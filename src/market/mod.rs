//! Marketplace scraping: HTTP client, selector recipes, and normalization.

pub mod client;
pub mod marketplace;
pub mod models;
pub mod parser;
pub mod scrape;
pub mod selectors;

pub use client::{HttpClient, PageFetcher};
pub use marketplace::Marketplace;
pub use models::ProductRecord;
pub use parser::Extractor;
pub use scrape::ProductScraper;
