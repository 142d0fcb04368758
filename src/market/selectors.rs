//! CSS selectors for marketplace HTML parsing.
//!
//! This file contains all CSS selectors used for parsing marketplace pages.
//! Update this file when a marketplace changes its HTML structure.
//!
//! Field selectors are ordered fallback lists: later entries exist to
//! tolerate markup drift and are tried only when earlier entries produce
//! nothing. The ordering is load-bearing; do not merge entries into a single
//! comma-joined selector, which would match in document order instead.

use scraper::Selector;
use std::sync::LazyLock;

fn parse_all(sources: &[&str]) -> Vec<Selector> {
    sources.iter().map(|s| Selector::parse(s).unwrap()).collect()
}

/// Selectors for Amazon search-results pages (the default marketplace).
pub mod amazon {
    use super::*;

    /// Result card container. Cards with an empty ASIN attribute are ad
    /// placeholders and get skipped during extraction.
    pub static CARD: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".s-result-item[data-asin]").unwrap());

    /// ASIN attribute on result cards.
    pub static ASIN_ATTR: &str = "data-asin";

    /// Product title candidates.
    pub static TITLE: LazyLock<Vec<Selector>> = LazyLock::new(|| {
        parse_all(&["h2 .a-link-normal", ".a-size-medium.a-color-base.a-text-normal"])
    });

    /// Price candidates. The offscreen span carries the full price text; the
    /// whole-part span is the fallback for older markup.
    pub static PRICE: LazyLock<Vec<Selector>> =
        LazyLock::new(|| parse_all(&[".a-price .a-offscreen", ".a-price-whole"]));

    /// Product image candidates.
    pub static IMAGE: LazyLock<Vec<Selector>> = LazyLock::new(|| parse_all(&[".s-image"]));

    /// Product link candidates.
    pub static LINK: LazyLock<Vec<Selector>> = LazyLock::new(|| parse_all(&["h2 .a-link-normal"]));
}

/// Selectors for Flipkart search-results pages.
pub mod flipkart {
    use super::*;

    /// Result card container.
    pub static CARD: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("div._1AtVbE").unwrap());

    /// Sub-markers a real product card must contain. `div._1AtVbE` also
    /// matches layout rows, so cards without one of these are discarded.
    pub static CARD_MARKER: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("div._4rR01T, a.s1Q9rs, div._2B099V").unwrap());

    /// Product title candidates (grid title, list title, wide-card title).
    pub static TITLE: LazyLock<Vec<Selector>> =
        LazyLock::new(|| parse_all(&["div._4rR01T", "a.s1Q9rs", "div._2B099V"]));

    /// Price candidates (discounted, plain, strikethrough variants).
    pub static PRICE: LazyLock<Vec<Selector>> = LazyLock::new(|| {
        parse_all(&["div._30jeq3._1_WHN1", "div._30jeq3", "div._3I9_wc._27UcVY"])
    });

    /// Product image candidates.
    pub static IMAGE: LazyLock<Vec<Selector>> =
        LazyLock::new(|| parse_all(&["img._396cs4", "img._2r_T1I"]));

    /// Product link candidates.
    pub static LINK: LazyLock<Vec<Selector>> =
        LazyLock::new(|| parse_all(&["a._1fQZEK", "a.s1Q9rs"]));
}

/// Selectors for Myntra search-results pages.
pub mod myntra {
    use super::*;

    /// Result card container.
    pub static CARD: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".product-base").unwrap());

    /// Sub-markers a real product card must contain.
    pub static CARD_MARKER: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse(".product-brand, .product-product, .product-discountedPrice, .product-price")
            .unwrap()
    });

    /// Product title candidates (brand line, then product line).
    pub static TITLE: LazyLock<Vec<Selector>> =
        LazyLock::new(|| parse_all(&[".product-brand", ".product-product"]));

    /// Price candidates.
    pub static PRICE: LazyLock<Vec<Selector>> =
        LazyLock::new(|| parse_all(&[".product-discountedPrice", ".product-price"]));

    /// Product image candidates.
    pub static IMAGE: LazyLock<Vec<Selector>> =
        LazyLock::new(|| parse_all(&[".product-image img"]));

    /// Product link candidates.
    pub static LINK: LazyLock<Vec<Selector>> = LazyLock::new(|| parse_all(&["a"]));

    /// Fallback selectors for single-product detail pages.
    ///
    /// Myntra search URLs sometimes redirect straight to a product page; when
    /// no result card matches, this recipe runs against the whole document.
    pub mod pdp {
        use super::*;

        pub static TITLE: LazyLock<Vec<Selector>> =
            LazyLock::new(|| parse_all(&[".pdp-title", ".pdp-name"]));

        pub static PRICE: LazyLock<Vec<Selector>> =
            LazyLock::new(|| parse_all(&[".pdp-price strong", ".pdp-mrp strong"]));

        pub static IMAGE: LazyLock<Vec<Selector>> = LazyLock::new(|| {
            parse_all(&[".image-grid-image img", ".image-grid-imageContainer img"])
        });
    }
}
