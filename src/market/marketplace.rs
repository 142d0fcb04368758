//! Supported marketplaces: domains, search URLs, and link rewriting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of marketplaces this service scrapes.
///
/// Dispatch is by URL substring and happens once per scrape; this is not an
/// extension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Marketplace {
    #[default]
    Amazon,
    Flipkart,
    Myntra,
}

impl Marketplace {
    /// Selects the extraction recipe for a search URL.
    ///
    /// Anything that is not recognizably Flipkart or Myntra is treated as the
    /// default marketplace (Amazon).
    pub fn from_url(url: &str) -> Self {
        if url.contains("flipkart.com") {
            Marketplace::Flipkart
        } else if url.contains("myntra.com") {
            Marketplace::Myntra
        } else {
            Marketplace::Amazon
        }
    }

    /// Returns the domain root used to absolutize product links.
    pub fn base_url(&self) -> &'static str {
        match self {
            Marketplace::Amazon => "https://www.amazon.in",
            Marketplace::Flipkart => "https://www.flipkart.com",
            Marketplace::Myntra => "https://www.myntra.com",
        }
    }

    /// Builds the search-results URL for a query.
    ///
    /// Myntra places the encoded query directly in the path rather than in a
    /// query-string parameter; observed behavior, reproduced as-is.
    pub fn search_url(&self, query: &str) -> String {
        let encoded = urlencoding::encode(query);
        match self {
            Marketplace::Amazon => format!("{}/s?k={}", self.base_url(), encoded),
            Marketplace::Flipkart => format!("{}/search?q={}", self.base_url(), encoded),
            Marketplace::Myntra => format!("{}/{}", self.base_url(), encoded),
        }
    }

    /// Rewrites a product-card href into an absolute URL.
    ///
    /// Already-absolute hrefs pass through. Myntra hrefs are relative without
    /// a leading slash, so they join with a separator.
    pub fn absolute_url(&self, href: &str) -> String {
        if href.starts_with("http") {
            return href.to_string();
        }
        match self {
            Marketplace::Myntra => format!("{}/{}", self.base_url(), href),
            _ => format!("{}{}", self.base_url(), href),
        }
    }

    /// Returns the JSON key this marketplace uses in the aggregate response.
    pub fn key(&self) -> &'static str {
        match self {
            Marketplace::Amazon => "amazon",
            Marketplace::Flipkart => "flipkart",
            Marketplace::Myntra => "myntra",
        }
    }

    /// Returns all supported marketplaces, in response order.
    pub fn all() -> &'static [Marketplace] {
        &[Marketplace::Amazon, Marketplace::Flipkart, Marketplace::Myntra]
    }
}

impl fmt::Display for Marketplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Marketplace {
    type Err = MarketplaceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "amazon" => Ok(Marketplace::Amazon),
            "flipkart" => Ok(Marketplace::Flipkart),
            "myntra" => Ok(Marketplace::Myntra),
            _ => Err(MarketplaceParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MarketplaceParseError(String);

impl fmt::Display for MarketplaceParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown marketplace '{}'. Valid marketplaces: amazon, flipkart, myntra",
            self.0
        )
    }
}

impl std::error::Error for MarketplaceParseError {}
