use scraper::Html;

use super::helpers::{
    first_attr, first_image, first_text, og_image, og_price, og_title, parse_price,
};
use crate::model::ProductMetadata;
use crate::retailer::Retailer;

const NAME_SELECTORS: &[&str] = &[r#"h1[itemprop="name"]"#, "h1"];

const IMAGE_CANDIDATES: &[(&str, &str)] = &[
    (r#"img[data-testid="hero-image"]"#, "src"),
    ("img.hover-zoom-hero-image", "src"),
];

pub fn parse(html: &str, _url: &str) -> ProductMetadata {
    let doc = Html::parse_document(html);

    let name = first_text(&doc, NAME_SELECTORS).or_else(|| og_title(&doc));
    let price = price_text(&doc).and_then(|text| parse_price(&text));
    let image_url = first_image(&doc, IMAGE_CANDIDATES).or_else(|| og_image(&doc));

    ProductMetadata::from_fields(
        Retailer::Walmart,
        name,
        price,
        image_url,
        "Unable to parse Walmart product data",
    )
}

// Walmart's markup changes often, so price sources mix text and microdata.
fn price_text(doc: &Html) -> Option<String> {
    first_text(doc, &[r#"[data-testid="price-wrap"]"#])
        .or_else(|| first_attr(doc, &[(r#"[itemprop="price"]"#, "content")]))
        .or_else(|| {
            first_text(
                doc,
                &[
                    "span.price-characteristic",
                    ".price-group .price",
                    r#"[class*="price"]"#,
                ],
            )
        })
        .or_else(|| og_price(doc))
}
