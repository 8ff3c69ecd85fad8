use regex::Regex;
use scraper::{Html, Selector};
use std::sync::OnceLock;
use url::Url;

/// Image CDN hosts accepted even without a file extension.
const IMAGE_CDN_HOSTS: &[&str] = &[
    "images-amazon.com",
    "media-amazon.com",
    "target.scene7.com",
    "i5.walmartimages.com",
    "pisces.bbystatic.com",
];

const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".webp", ".gif"];

fn price_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("valid price regex"))
}

fn whitespace_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace regex"))
}

/// Parse the first number out of price text such as "$1,234.56".
///
/// Non-numeric text and values that are not strictly positive yield `None`.
pub fn parse_price(text: &str) -> Option<f64> {
    let cleaned: String = text.chars().filter(|c| *c != '$' && *c != ',').collect();
    let token = price_pattern().find(&cleaned)?;
    let price: f64 = token.as_str().parse().ok()?;
    (price > 0.0).then_some(price)
}

/// Accept a URL only if it looks like an image resource.
pub fn is_valid_image_url(candidate: &str) -> bool {
    let Ok(url) = Url::parse(candidate) else {
        return false;
    };
    let path = url.path().to_lowercase();
    if IMAGE_EXTENSIONS.iter().any(|ext| path.ends_with(ext)) {
        return true;
    }
    let host = url.host_str().unwrap_or_default().to_lowercase();
    IMAGE_CDN_HOSTS.iter().any(|cdn| host.contains(cdn))
}

pub fn collapse_whitespace(text: &str) -> String {
    whitespace_pattern().replace_all(text, " ").trim().to_string()
}

/// Text of the first element matching any selector, tried in order.
/// Elements with only whitespace are skipped.
pub fn first_text(doc: &Html, selectors: &[&str]) -> Option<String> {
    selectors.iter().find_map(|sel_str| {
        let sel = parse_selector(sel_str)?;
        doc.select(&sel).find_map(|el| {
            let text = collapse_whitespace(&el.text().collect::<Vec<_>>().join(" "));
            (!text.is_empty()).then_some(text)
        })
    })
}

/// Attribute value of the first element matching any `(selector, attr)` pair.
pub fn first_attr(doc: &Html, candidates: &[(&str, &str)]) -> Option<String> {
    candidates.iter().find_map(|(sel_str, attr)| {
        let sel = parse_selector(sel_str)?;
        doc.select(&sel).find_map(|el| {
            let value = el.value().attr(attr)?.trim();
            (!value.is_empty()).then(|| value.to_string())
        })
    })
}

/// First candidate image that passes [`is_valid_image_url`].
pub fn first_image(doc: &Html, candidates: &[(&str, &str)]) -> Option<String> {
    candidates.iter().find_map(|candidate| {
        let src = first_attr(doc, std::slice::from_ref(candidate))?;
        if is_valid_image_url(&src) {
            Some(src)
        } else {
            tracing::debug!("Rejected image candidate {} from {}", src, candidate.0);
            None
        }
    })
}

pub fn meta_property(doc: &Html, property: &str) -> Option<String> {
    let selector = format!(r#"meta[property="{}"]"#, property);
    first_attr(doc, &[(selector.as_str(), "content")])
}

pub fn og_title(doc: &Html) -> Option<String> {
    meta_property(doc, "og:title").map(|t| collapse_whitespace(&t))
}

pub fn og_price(doc: &Html) -> Option<String> {
    meta_property(doc, "og:price:amount")
}

pub fn og_image(doc: &Html) -> Option<String> {
    meta_property(doc, "og:image").filter(|src| is_valid_image_url(src))
}

fn parse_selector(sel_str: &str) -> Option<Selector> {
    match Selector::parse(sel_str) {
        Ok(sel) => Some(sel),
        Err(e) => {
            tracing::warn!("Invalid selector {:?}: {:?}", sel_str, e);
            None
        }
    }
}
