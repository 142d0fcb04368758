//! Data model for normalized per-marketplace results.

use serde::{Deserialize, Serialize};

/// Placeholder title when no title could be extracted.
pub const TITLE_UNAVAILABLE: &str = "Product Title Not Available";

/// Placeholder price when no price could be extracted.
pub const PRICE_UNAVAILABLE: &str = "Price Not Available";

/// The normalized first-result record returned per marketplace per search.
///
/// Every field is always populated: extraction failures are represented by
/// the sentinel strings above (empty string for `image`), never by an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Human-readable product name.
    pub title: String,
    /// Numeric-looking price string with currency symbol and commas stripped.
    pub price: String,
    /// Product thumbnail URL, or empty string.
    pub image: String,
    /// Absolute product page URL, or the original search URL.
    pub link: String,
}

impl ProductRecord {
    /// Builds the all-sentinel record pointing back at the search URL.
    ///
    /// Returned whenever a fetch fails or no product card matched.
    pub fn unavailable(link: impl Into<String>) -> Self {
        Self {
            title: TITLE_UNAVAILABLE.to_string(),
            price: PRICE_UNAVAILABLE.to_string(),
            image: String::new(),
            link: link.into(),
        }
    }

    /// Assembles a record from extracted fields, substituting sentinels for
    /// anything that remained unset or empty.
    pub fn assemble(
        title: Option<String>,
        price: Option<String>,
        image: Option<String>,
        link: String,
    ) -> Self {
        Self {
            title: title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| TITLE_UNAVAILABLE.to_string()),
            price: price
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| PRICE_UNAVAILABLE.to_string()),
            image: image.unwrap_or_default(),
            link,
        }
    }

    /// True if both title and price fell through to their sentinels.
    pub fn is_unavailable(&self) -> bool {
        self.title == TITLE_UNAVAILABLE && self.price == PRICE_UNAVAILABLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_record() {
        let record = ProductRecord::unavailable("https://www.amazon.in/s?k=shoes");
        assert_eq!(record.title, TITLE_UNAVAILABLE);
        assert_eq!(record.price, PRICE_UNAVAILABLE);
        assert_eq!(record.image, "");
        assert_eq!(record.link, "https://www.amazon.in/s?k=shoes");
        assert!(record.is_unavailable());
    }

    #[test]
    fn test_assemble_full() {
        let record = ProductRecord::assemble(
            Some("Running Shoes".to_string()),
            Some("2499".to_string()),
            Some("https://img.example/shoe.jpg".to_string()),
            "https://www.amazon.in/dp/B0TEST".to_string(),
        );
        assert_eq!(record.title, "Running Shoes");
        assert_eq!(record.price, "2499");
        assert_eq!(record.image, "https://img.example/shoe.jpg");
        assert!(!record.is_unavailable());
    }

    #[test]
    fn test_assemble_substitutes_sentinels() {
        let record = ProductRecord::assemble(None, None, None, "url".to_string());
        assert_eq!(record.title, TITLE_UNAVAILABLE);
        assert_eq!(record.price, PRICE_UNAVAILABLE);
        assert_eq!(record.image, "");
        assert_eq!(record.link, "url");
    }

    #[test]
    fn test_assemble_empty_strings_count_as_unset() {
        let record = ProductRecord::assemble(
            Some(String::new()),
            Some(String::new()),
            None,
            "url".to_string(),
        );
        assert_eq!(record.title, TITLE_UNAVAILABLE);
        assert_eq!(record.price, PRICE_UNAVAILABLE);
    }

    #[test]
    fn test_record_serde() {
        let record = ProductRecord::assemble(
            Some("Test".to_string()),
            Some("12345".to_string()),
            None,
            "https://www.flipkart.com/p/x".to_string(),
        );
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"title\":\"Test\""));
        assert!(json.contains("\"image\":\"\""));

        let parsed: ProductRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
