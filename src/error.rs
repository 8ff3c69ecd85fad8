use thiserror::Error;

/// Every anticipated way a single metadata fetch can fail.
///
/// The `Display` text of each variant is the reason string stored in
/// [`ProductMetadata::error`](crate::model::ProductMetadata::error), so callers
/// can match on it for retry/display decisions.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid URL")]
    InvalidUrl,

    #[error("Request timeout")]
    Timeout,

    #[error("Access blocked - bot detection triggered")]
    BotDetected,

    #[error("Access blocked by retailer")]
    Blocked { status: u16 },

    #[error("Product not found")]
    NotFound,

    #[error("Failed to fetch product data")]
    UnexpectedStatus { status: u16 },

    #[error("Failed to fetch product data")]
    Network(#[source] reqwest::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return FetchError::Timeout;
        }
        if let Some(status) = err.status() {
            return FetchError::from_status(status);
        }
        FetchError::Network(err)
    }
}

impl FetchError {
    /// Map a non-success HTTP status onto the failure taxonomy.
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        match status.as_u16() {
            403 | 429 => FetchError::Blocked {
                status: status.as_u16(),
            },
            404 => FetchError::NotFound,
            other => FetchError::UnexpectedStatus { status: other },
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file error: {0}")]
    Toml(#[from] toml::de::Error),
}
