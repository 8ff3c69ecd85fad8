use regex::Regex;
use std::sync::OnceLock;
use url::Url;

/// Repair a user-supplied link into a canonical absolute URL.
///
/// Tries the input as-is, then with `https://` prepended. The retry only
/// happens when the input did not parse, or parsed as `host:port/...` with
/// the host mistaken for a scheme. Returns `None` otherwise, which callers
/// report as "Invalid URL".
pub fn normalize_url(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    match Url::parse(raw) {
        Ok(url) if is_web_url(&url) => return Some(url.to_string()),
        Ok(url) if !url.has_authority() && bare_host_port().is_match(raw) => {}
        Ok(url) => {
            tracing::debug!("Rejected {} link {:?}", url.scheme(), raw);
            return None;
        }
        Err(_) => {}
    }

    let prefixed = format!("https://{}", raw);
    Url::parse(&prefixed)
        .ok()
        .filter(is_web_url)
        .map(|url| url.to_string())
}

fn is_web_url(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https") && url.host_str().is_some_and(|h| !h.is_empty())
}

// `Url::parse` reads "amazon.com:443/x" as scheme "amazon.com".
fn bare_host_port() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9.-]*[A-Za-z0-9])?:[0-9]+(?:[/?#]|$)")
            .expect("valid host:port regex")
    })
}
