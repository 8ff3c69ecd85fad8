use crate::config::FetchSettings;
use crate::error::{ConfigError, FetchError};
use crate::fetcher::Fetcher;
use crate::model::ProductMetadata;
use crate::normalize::normalize_url;
use crate::parser;
use crate::retailer::Retailer;

/// Entry point used by item create/refresh handlers.
///
/// Each call is independent: no shared mutable state, no cache, no retries.
/// Cloning is cheap and clones share one connection pool.
#[derive(Debug, Clone)]
pub struct MetadataService {
    fetcher: Fetcher,
}

impl MetadataService {
    pub fn new(settings: FetchSettings) -> Result<Self, ConfigError> {
        Ok(Self {
            fetcher: Fetcher::new(settings)?,
        })
    }

    pub fn from_fetcher(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    /// Fetch and parse product metadata for a user-supplied link.
    ///
    /// Never fails: every anticipated problem comes back as a
    /// `success: false` result with a populated `error`.
    pub async fn fetch_metadata(&self, raw_url: &str) -> ProductMetadata {
        let Some(url) = normalize_url(raw_url) else {
            tracing::info!("Rejected invalid product link {:?}", raw_url);
            return ProductMetadata::failure(FetchError::InvalidUrl.to_string(), Retailer::Unknown);
        };
        let retailer = Retailer::classify(&url);

        match self.fetcher.fetch(&url, retailer).await {
            Ok(html) => {
                let metadata = parser::parse_product(retailer, &html, &url);
                if metadata.success {
                    tracing::info!("Extracted {} metadata from {}", retailer, url);
                } else {
                    tracing::warn!("No product fields found at {}", url);
                }
                metadata
            }
            Err(e) => {
                tracing::warn!("Metadata fetch for {} failed: {}", url, e);
                ProductMetadata::failure(e.to_string(), retailer)
            }
        }
    }
}
