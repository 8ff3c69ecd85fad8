use crate::retailer::Retailer;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Normalized result of one metadata fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductMetadata {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub retailer: Retailer,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProductMetadata {
    /// Compose a parse result. Succeeds iff any field was recovered;
    /// otherwise carries `failure_reason` as the error.
    pub fn from_fields(
        retailer: Retailer,
        name: Option<String>,
        price: Option<f64>,
        image_url: Option<String>,
        failure_reason: &str,
    ) -> Self {
        let success = name.is_some() || price.is_some() || image_url.is_some();
        Self {
            name,
            price,
            image_url,
            retailer,
            success,
            error: (!success).then(|| failure_reason.to_string()),
        }
    }

    pub fn failure(reason: impl Into<String>, retailer: Retailer) -> Self {
        Self {
            name: None,
            price: None,
            image_url: None,
            retailer,
            success: false,
            error: Some(reason.into()),
        }
    }
}

/// Item fields a caller persists after a fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemSnapshot {
    pub fetched_name: Option<String>,
    pub fetched_price: Option<f64>,
    pub image_url: Option<String>,
    pub retailer: String,
    pub last_fetched_at: DateTime<Utc>,
    pub snapshot_date: NaiveDate,
    pub fetch_error: Option<String>,
}

impl ItemSnapshot {
    pub fn from_metadata(metadata: &ProductMetadata, now: DateTime<Utc>) -> Self {
        Self {
            fetched_name: metadata.name.clone(),
            fetched_price: metadata.price,
            image_url: metadata.image_url.clone(),
            retailer: metadata.retailer.to_string(),
            last_fetched_at: now,
            snapshot_date: now.date_naive(),
            fetch_error: metadata.error.clone(),
        }
    }
}
