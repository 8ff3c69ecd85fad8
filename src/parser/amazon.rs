use regex::Regex;
use scraper::Html;
use std::sync::OnceLock;

use super::extract::extract_json_ld_product;
use super::helpers::{
    collapse_whitespace, first_image, first_text, is_valid_image_url, og_image, og_price,
    og_title, parse_price,
};
use crate::model::ProductMetadata;
use crate::retailer::Retailer;

const NAME_SELECTORS: &[&str] = &[
    "#productTitle",
    "#title",
    // Luxury Stores layout
    "span#bond-title-desktop",
    "#bond-title-block",
    "h1",
];

const PRICE_SELECTORS: &[&str] = &[
    ".a-price .a-offscreen",
    ".priceToPay .a-offscreen",
    ".apexPriceToPay .a-offscreen",
    "#priceblock_ourprice",
    "#priceblock_dealprice",
    r#"[data-a-color="price"]"#,
];

const IMAGE_CANDIDATES: &[(&str, &str)] = &[
    ("#landingImage", "src"),
    ("#imgBlkFront", "src"),
    ("#main-image", "src"),
    (".a-dynamic-image", "src"),
];

/// Amazon product pages. Structured JSON-LD data wins; DOM scraping only
/// fills the fields it left empty.
pub fn parse(html: &str, _url: &str) -> ProductMetadata {
    let doc = Html::parse_document(html);
    let structured = extract_json_ld_product(&doc);

    let name = structured
        .name
        .or_else(|| first_text(&doc, NAME_SELECTORS))
        .or_else(|| title_name(&doc))
        .or_else(|| og_title(&doc));

    let price = structured.price.or_else(|| {
        first_text(&doc, PRICE_SELECTORS)
            .or_else(|| og_price(&doc))
            .and_then(|text| parse_price(&text))
    });

    let image_url = structured
        .image
        .filter(|src| is_valid_image_url(src))
        .or_else(|| first_image(&doc, IMAGE_CANDIDATES))
        .or_else(|| og_image(&doc));

    ProductMetadata::from_fields(
        Retailer::Amazon,
        name,
        price,
        image_url,
        "Unable to parse Amazon product data",
    )
}

fn title_suffix_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\s*:.*$").expect("valid title regex"))
}

/// `<title>` is "Amazon.com: Product Name : Category"; keep the product name.
fn title_name(doc: &Html) -> Option<String> {
    let title = first_text(doc, &["title"])?;
    let title = title
        .strip_prefix("Amazon.com:")
        .map(str::trim_start)
        .unwrap_or(&title);
    let name = collapse_whitespace(&title_suffix_pattern().replace(title, ""));
    (!name.is_empty()).then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://www.amazon.com/dp/B0XXX";

    #[test]
    fn json_ld_wins_over_conflicting_dom() {
        let html = r#"<html><head>
            <script type="application/ld+json">
              {"@type": "Product", "name": "Widget", "offers": {"price": "19.99"}}
            </script></head>
            <body>
              <span id="productTitle">Other Widget Deluxe</span>
              <span class="a-price"><span class="a-offscreen">$99.00</span></span>
              <img id="landingImage" src="https://m.media-amazon.com/images/I/w.jpg">
            </body></html>"#;
        let meta = parse(html, URL);
        assert!(meta.success);
        assert_eq!(meta.name.as_deref(), Some("Widget"));
        assert_eq!(meta.price, Some(19.99));
        // JSON-LD had no image, so the DOM fills it
        assert_eq!(
            meta.image_url.as_deref(),
            Some("https://m.media-amazon.com/images/I/w.jpg")
        );
        assert_eq!(meta.retailer, Retailer::Amazon);
    }

    #[test]
    fn dom_scraping_when_no_structured_data() {
        let html = r#"<html><body>
              <span id="productTitle">
                  Echo Dot   (5th Gen)
              </span>
              <div class="priceToPay"><span class="a-offscreen">$1,049.99</span></div>
              <img id="imgBlkFront" src="https://images-amazon.com/images/P/abc">
            </body></html>"#;
        let meta = parse(html, URL);
        assert_eq!(meta.name.as_deref(), Some("Echo Dot (5th Gen)"));
        assert_eq!(meta.price, Some(1049.99));
        assert_eq!(
            meta.image_url.as_deref(),
            Some("https://images-amazon.com/images/P/abc")
        );
    }

    #[test]
    fn page_title_is_cleaned() {
        let html = "<html><head><title>Amazon.com: Kindle Paperwhite : Electronics</title></head></html>";
        assert_eq!(parse(html, URL).name.as_deref(), Some("Kindle Paperwhite"));
    }

    #[test]
    fn invalid_structured_image_falls_back_to_dom() {
        let html = r#"<html><head>
            <script type="application/ld+json">
              {"@type": "Product", "image": "https://www.amazon.com/gp/page"}
            </script>
            <meta property="og:image" content="https://example.com/og.png">
            </head><body></body></html>"#;
        assert_eq!(
            parse(html, URL).image_url.as_deref(),
            Some("https://example.com/og.png")
        );
    }

    #[test]
    fn zero_price_is_absent() {
        let html = r#"<html><body><span id="productTitle">Gift Card</span>
            <span class="a-price"><span class="a-offscreen">$0.00</span></span></body></html>"#;
        let meta = parse(html, URL);
        assert_eq!(meta.price, None);
        assert!(meta.success);
    }

    #[test]
    fn empty_page_reports_amazon_parse_failure() {
        let meta = parse("<html><body><div></div></body></html>", URL);
        assert!(!meta.success);
        assert_eq!(
            meta.error.as_deref(),
            Some("Unable to parse Amazon product data")
        );
    }
}
