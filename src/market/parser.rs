//! HTML extraction recipes: first product card to normalized record.

use crate::market::marketplace::Marketplace;
use crate::market::models::ProductRecord;
use crate::market::selectors::{amazon, flipkart, myntra};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

/// Extracts the first product of a marketplace search-results page.
///
/// Bound to one marketplace at construction; the recipe is selected once,
/// not re-checked per field.
pub struct Extractor {
    marketplace: Marketplace,
}

impl Extractor {
    /// Creates an extractor for the given marketplace.
    pub fn new(marketplace: Marketplace) -> Self {
        Self { marketplace }
    }

    /// Runs the extraction recipe against a response body.
    ///
    /// Total: always returns a fully populated record, substituting sentinels
    /// for fields that could not be extracted. Deterministic for identical
    /// input bytes.
    pub fn extract(&self, html: &str, search_url: &str) -> ProductRecord {
        let document = Html::parse_document(html);
        let root = document.root_element();

        let record = match self.marketplace {
            Marketplace::Amazon => self.extract_amazon(root, search_url),
            Marketplace::Flipkart => self.extract_flipkart(root, search_url),
            Marketplace::Myntra => self.extract_myntra(root, search_url),
        };

        if record.is_unavailable() {
            warn!("{} extraction fell back to the sentinel record", self.marketplace);
        }

        record
    }

    fn extract_amazon(&self, root: ElementRef, search_url: &str) -> ProductRecord {
        // Cards with an empty ASIN are ad placeholders, not products
        let card = root
            .select(&amazon::CARD)
            .find(|el| el.value().attr(amazon::ASIN_ATTR).is_some_and(|a| !a.is_empty()));

        let Some(card) = card else {
            return ProductRecord::unavailable(search_url);
        };

        let title = first_text(card, &amazon::TITLE);
        let price = first_text(card, &amazon::PRICE).map(|raw| clean_price(&raw));
        let image = first_attr(card, &amazon::IMAGE, "src");
        let link = first_attr(card, &amazon::LINK, "href")
            .map(|href| self.marketplace.absolute_url(&href))
            .unwrap_or_else(|| search_url.to_string());

        ProductRecord::assemble(title, price, image, link)
    }

    fn extract_flipkart(&self, root: ElementRef, search_url: &str) -> ProductRecord {
        let card = root
            .select(&flipkart::CARD)
            .find(|el| el.select(&flipkart::CARD_MARKER).next().is_some());

        let Some(card) = card else {
            return ProductRecord::unavailable(search_url);
        };

        let title = first_text(card, &flipkart::TITLE);
        let price = first_text(card, &flipkart::PRICE).map(|raw| clean_price(&raw));
        let image = first_attr(card, &flipkart::IMAGE, "src");
        let link = first_attr(card, &flipkart::LINK, "href")
            .map(|href| self.marketplace.absolute_url(&href))
            .unwrap_or_else(|| search_url.to_string());

        ProductRecord::assemble(title, price, image, link)
    }

    fn extract_myntra(&self, root: ElementRef, search_url: &str) -> ProductRecord {
        let card = root
            .select(&myntra::CARD)
            .find(|el| el.select(&myntra::CARD_MARKER).next().is_some());

        if let Some(card) = card {
            let title = first_text(card, &myntra::TITLE);
            let price = first_text(card, &myntra::PRICE).map(|raw| clean_price(&raw));
            let image = first_attr(card, &myntra::IMAGE, "src");
            let link = first_attr(card, &myntra::LINK, "href")
                .map(|href| self.marketplace.absolute_url(&href))
                .unwrap_or_else(|| search_url.to_string());

            return ProductRecord::assemble(title, price, image, link);
        }

        // The search URL can redirect straight to a product detail page;
        // retry against single-product markup before giving up.
        debug!("no myntra result card, trying product-page recipe");

        let title = first_text(root, &myntra::pdp::TITLE);
        let price = first_text(root, &myntra::pdp::PRICE).map(|raw| clean_price(&raw));
        let image = first_attr(root, &myntra::pdp::IMAGE, "src");

        ProductRecord::assemble(title, price, image, search_url.to_string())
    }
}

/// Walks an ordered selector list and returns the first non-empty trimmed
/// text match.
fn first_text(scope: ElementRef, selectors: &[Selector]) -> Option<String> {
    for selector in selectors {
        for element in scope.select(selector) {
            let text = element.text().collect::<String>().trim().to_string();
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

/// Walks an ordered selector list and returns the first non-empty value of
/// the given attribute.
fn first_attr(scope: ElementRef, selectors: &[Selector], attr: &str) -> Option<String> {
    for selector in selectors {
        for element in scope.select(selector) {
            if let Some(value) = element.value().attr(attr) {
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }
    None
}

/// Normalizes a raw price string: strips a single leading rupee symbol,
/// removes thousands-separator commas, trims whitespace.
///
/// Empty input yields an empty string; the sentinel substitution happens at
/// record assembly, not here.
pub fn clean_price(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_symbol = trimmed.strip_prefix('₹').unwrap_or(trimmed);
    without_symbol.replace(',', "").trim().to_string()
}
