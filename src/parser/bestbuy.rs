use scraper::Html;

use super::helpers::{first_image, first_text, og_image, og_price, og_title, parse_price};
use crate::model::ProductMetadata;
use crate::retailer::Retailer;

const NAME_SELECTORS: &[&str] = &["h1.heading-5", "div.sku-title h1", "h1"];

const PRICE_SELECTORS: &[&str] = &[
    "div.priceView-customer-price span",
    ".priceView-hero-price span",
];

const IMAGE_CANDIDATES: &[(&str, &str)] =
    &[("img.primary-image", "src"), (".shop-media img", "src")];

pub fn parse(html: &str, _url: &str) -> ProductMetadata {
    let doc = Html::parse_document(html);

    let name = first_text(&doc, NAME_SELECTORS).or_else(|| og_title(&doc));
    let price = first_text(&doc, PRICE_SELECTORS)
        .or_else(|| og_price(&doc))
        .and_then(|text| parse_price(&text));
    let image_url = first_image(&doc, IMAGE_CANDIDATES).or_else(|| og_image(&doc));

    ProductMetadata::from_fields(
        Retailer::BestBuy,
        name,
        price,
        image_url,
        "Unable to parse Best Buy product data",
    )
}
