pub mod amazon;
pub mod bestbuy;
pub mod extract;
pub mod generic;
pub mod helpers;
pub mod target;
pub mod walmart;

use crate::model::ProductMetadata;
use crate::retailer::Retailer;

/// A pure extraction function: `(html, url) -> metadata`.
pub type Strategy = fn(&str, &str) -> ProductMetadata;

/// Pick the extraction strategy for a retailer. Retailers without a
/// dedicated parser use the Open Graph fallback.
pub fn strategy_for(retailer: Retailer) -> Strategy {
    match retailer {
        Retailer::Amazon => amazon::parse,
        Retailer::Target => target::parse,
        Retailer::Walmart => walmart::parse,
        Retailer::BestBuy => bestbuy::parse,
        Retailer::Etsy | Retailer::Ebay | Retailer::Unknown => generic::parse,
    }
}

pub fn parse_product(retailer: Retailer, html: &str, url: &str) -> ProductMetadata {
    tracing::debug!("Parsing {} page with {} strategy", url, retailer);
    strategy_for(retailer)(html, url)
}
