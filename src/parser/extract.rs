use scraper::{Html, Selector};
use serde_json::Value;

use super::helpers::{collapse_whitespace, parse_price};

/// Fields recovered from JSON-LD `Product` blocks.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StructuredProduct {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
}

/// Collect Product data from every `application/ld+json` block.
///
/// Blocks are visited in document order; a later block only fills fields the
/// earlier ones left empty. Malformed JSON is skipped.
pub fn extract_json_ld_product(doc: &Html) -> StructuredProduct {
    let mut found = StructuredProduct::default();
    let Ok(sel) = Selector::parse(r#"script[type="application/ld+json"]"#) else {
        return found;
    };

    for el in doc.select(&sel) {
        let text: String = el.text().collect();
        let parsed = match serde_json::from_str::<Value>(&text) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Skipping malformed JSON-LD block: {}", e);
                continue;
            }
        };

        let Some(product) = find_product(&parsed) else {
            continue;
        };
        tracing::debug!("Found JSON-LD Product data");

        if found.name.is_none() {
            found.name = product
                .get("name")
                .and_then(|v| v.as_str())
                .map(collapse_whitespace)
                .filter(|s| !s.is_empty());
        }
        if found.price.is_none() {
            found.price = offer_price(product.get("offers"));
        }
        if found.image.is_none() {
            found.image = first_image(product.get("image"));
        }
    }

    found
}

fn find_product(value: &Value) -> Option<&Value> {
    if is_product(value) {
        return Some(value);
    }
    // Could be an array, or wrapped in an @graph
    if let Some(arr) = value.as_array() {
        return arr.iter().find(|item| is_product(item));
    }
    value
        .get("@graph")
        .and_then(|g| g.as_array())
        .and_then(|arr| arr.iter().find(|item| is_product(item)))
}

fn is_product(value: &Value) -> bool {
    match value.get("@type") {
        Some(Value::String(t)) => t == "Product",
        Some(Value::Array(types)) => types.iter().any(|t| t.as_str() == Some("Product")),
        _ => false,
    }
}

fn offer_price(offers: Option<&Value>) -> Option<f64> {
    let offers = offers?;
    let offer = match offers.as_array() {
        Some(arr) => arr.first()?,
        None => offers,
    };
    match offer.get("price")? {
        Value::String(s) => parse_price(s),
        Value::Number(n) => n.as_f64().filter(|p| *p > 0.0),
        _ => None,
    }
}

fn first_image(image: Option<&Value>) -> Option<String> {
    let image = image?;
    let first = match image.as_array() {
        Some(arr) => arr.first()?,
        None => image,
    };
    match first {
        Value::String(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        Value::Object(_) => first.get("url").and_then(|u| u.as_str()).map(str::to_string),
        _ => None,
    }
}
