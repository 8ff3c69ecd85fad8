use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::{redirect, Client};
use url::Url;

use crate::config::FetchSettings;
use crate::error::{ConfigError, FetchError};
use crate::retailer::Retailer;

/// Substrings that mark an anti-bot interstitial instead of a product page.
const BOT_CHECK_MARKERS: &[&str] = &["captcha", "api-services-support@amazon.com", "Robot Check"];

/// Issues a single browser-like GET per product page. No retries.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    settings: FetchSettings,
}

impl Fetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .redirect(redirect::Policy::limited(settings.max_redirects))
            .user_agent(settings.user_agent.as_str())
            .default_headers(browser_headers())
            .build()?;
        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &FetchSettings {
        &self.settings
    }

    /// Fetch the page body for `url`.
    ///
    /// Amazon requests carry a `Referer` of the URL's own origin. A short body
    /// containing a CAPTCHA marker is reported as [`FetchError::BotDetected`].
    pub async fn fetch(&self, url: &str, retailer: Retailer) -> Result<String, FetchError> {
        tracing::info!("Fetching {} ({})", url, retailer);

        let mut request = self.client.get(url);
        if retailer == Retailer::Amazon {
            if let Some(referer) = origin_referer(url) {
                request = request.header(header::REFERER, referer);
            }
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("{} responded with HTTP {}", url, status.as_u16());
            return Err(FetchError::from_status(status));
        }

        let html = response.text().await?;
        if looks_like_bot_check(&html, self.settings.bot_check_max_len) {
            tracing::warn!("Bot detection page returned for {}", url);
            return Err(FetchError::BotDetected);
        }

        tracing::debug!("Fetched {} bytes from {}", html.len(), url);
        Ok(html)
    }
}

pub fn looks_like_bot_check(html: &str, max_len: usize) -> bool {
    html.chars().count() < max_len && BOT_CHECK_MARKERS.iter().any(|m| html.contains(m))
}

/// `https://host/` for `https://host/some/path`.
fn origin_referer(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let origin = parsed.origin();
    origin
        .is_tuple()
        .then(|| format!("{}/", origin.ascii_serialization()))
}

fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8",
        ),
    );
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static("en-US,en;q=0.9"),
    );
    headers.insert(
        header::ACCEPT_ENCODING,
        HeaderValue::from_static("gzip, deflate, br"),
    );
    headers.insert(header::DNT, HeaderValue::from_static("1"));
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(
        header::UPGRADE_INSECURE_REQUESTS,
        HeaderValue::from_static("1"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-dest"),
        HeaderValue::from_static("document"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-mode"),
        HeaderValue::from_static("navigate"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-site"),
        HeaderValue::from_static("none"),
    );
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("max-age=0"));
    headers
}
