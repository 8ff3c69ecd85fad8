use scraper::Html;

use super::helpers::{
    collapse_whitespace, first_attr, first_image, first_text, og_price, og_title, parse_price,
};
use crate::model::ProductMetadata;
use crate::retailer::Retailer;

const IMAGE_CANDIDATES: &[(&str, &str)] = &[
    (r#"meta[property="og:image"]"#, "content"),
    (r#"meta[property="twitter:image"]"#, "content"),
    (r#"meta[name="twitter:image"]"#, "content"),
    (r#"meta[name="image"]"#, "content"),
];

/// Open Graph / meta tag fallback for any retailer without a dedicated parser.
pub fn parse(html: &str, url: &str) -> ProductMetadata {
    let doc = Html::parse_document(html);

    let name = og_title(&doc)
        .or_else(|| {
            first_attr(&doc, &[(r#"meta[name="title"]"#, "content")])
                .map(|t| collapse_whitespace(&t))
        })
        .or_else(|| first_text(&doc, &["title"]));
    let price = og_price(&doc).and_then(|text| parse_price(&text));
    let image_url = first_image(&doc, IMAGE_CANDIDATES);

    ProductMetadata::from_fields(
        Retailer::classify(url),
        name,
        price,
        image_url,
        "No product metadata found",
    )
}
