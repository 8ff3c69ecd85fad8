//! Product metadata extraction for wishlist item links.
//!
//! Given a product URL, [`MetadataService::fetch_metadata`] fetches the page
//! with browser-like headers and extracts a name, price, and image using a
//! retailer-specific parser or an Open Graph fallback.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod freshness;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod retailer;
pub mod service;

pub use config::FetchSettings;
pub use error::{ConfigError, FetchError};
pub use fetcher::Fetcher;
pub use freshness::{is_stale, should_refresh};
pub use model::{ItemSnapshot, ProductMetadata};
pub use normalize::normalize_url;
pub use retailer::Retailer;
pub use service::MetadataService;
