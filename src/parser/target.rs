use scraper::Html;

use super::helpers::{first_image, first_text, og_image, og_price, og_title, parse_price};
use crate::model::ProductMetadata;
use crate::retailer::Retailer;

const NAME_SELECTORS: &[&str] = &[r#"h1[data-test="product-title"]"#, "h1"];

const PRICE_SELECTORS: &[&str] = &[
    r#"div[data-test="product-price"]"#,
    r#"span[data-test="product-price"]"#,
    r#"[data-test="product-price"]"#,
];

const IMAGE_CANDIDATES: &[(&str, &str)] = &[
    (r#"img[data-test="product-image"]"#, "src"),
    ("picture img", "src"),
];

pub fn parse(html: &str, _url: &str) -> ProductMetadata {
    let doc = Html::parse_document(html);

    let name = first_text(&doc, NAME_SELECTORS).or_else(|| og_title(&doc));
    let price = first_text(&doc, PRICE_SELECTORS)
        .or_else(|| og_price(&doc))
        .and_then(|text| parse_price(&text));
    let image_url = first_image(&doc, IMAGE_CANDIDATES).or_else(|| og_image(&doc));

    ProductMetadata::from_fields(
        Retailer::Target,
        name,
        price,
        image_url,
        "Unable to parse Target product data",
    )
}
