//! cartscan - Multi-marketplace first-result price aggregation API
//!
//! Fetches the search-result pages of three e-commerce marketplaces
//! concurrently, extracts the first product from each with hardcoded
//! selector-fallback recipes, and serves the normalized records as one
//! JSON response.

pub mod config;
pub mod market;
pub mod server;

pub use config::Config;
pub use market::{HttpClient, Marketplace, PageFetcher, ProductRecord, ProductScraper};
pub use server::{build_router, AppState};
