use serde::{Serialize, Serializer};
use std::fmt;
use url::Url;

/// Known e-commerce sites, plus a catch-all for everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Retailer {
    Amazon,
    Target,
    Walmart,
    BestBuy,
    Etsy,
    Ebay,
    Unknown,
}

/// Hostname fragments checked in order; first match wins.
const DOMAIN_FRAGMENTS: &[(&str, Retailer)] = &[
    ("amazon.", Retailer::Amazon),
    ("target.", Retailer::Target),
    ("walmart.", Retailer::Walmart),
    ("bestbuy.", Retailer::BestBuy),
    ("etsy.", Retailer::Etsy),
    ("ebay.", Retailer::Ebay),
];

impl Retailer {
    /// Classify a URL by its hostname. Unparsable input yields `Unknown`.
    pub fn classify(url: &str) -> Retailer {
        let host = match Url::parse(url) {
            Ok(parsed) => match parsed.host_str() {
                Some(host) => host.to_lowercase(),
                None => return Retailer::Unknown,
            },
            Err(_) => return Retailer::Unknown,
        };

        DOMAIN_FRAGMENTS
            .iter()
            .find(|(fragment, _)| host.contains(fragment))
            .map(|(_, retailer)| *retailer)
            .unwrap_or(Retailer::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Retailer::Amazon => "Amazon",
            Retailer::Target => "Target",
            Retailer::Walmart => "Walmart",
            Retailer::BestBuy => "Best Buy",
            Retailer::Etsy => "Etsy",
            Retailer::Ebay => "eBay",
            Retailer::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Retailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Retailer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_retailers() {
        assert_eq!(
            Retailer::classify("https://www.amazon.com/dp/B0XXX"),
            Retailer::Amazon
        );
        assert_eq!(Retailer::classify("https://m.target.com/p/x"), Retailer::Target);
        assert_eq!(
            Retailer::classify("https://www.walmart.com/ip/123"),
            Retailer::Walmart
        );
        assert_eq!(
            Retailer::classify("https://www.bestbuy.com/site/x.p"),
            Retailer::BestBuy
        );
        assert_eq!(Retailer::classify("https://www.etsy.com/listing/1"), Retailer::Etsy);
        assert_eq!(Retailer::classify("https://www.ebay.co.uk/itm/1"), Retailer::Ebay);
    }

    #[test]
    fn hostname_case_is_ignored() {
        assert_eq!(Retailer::classify("https://WWW.AMAZON.DE/dp/1"), Retailer::Amazon);
    }

    #[test]
    fn unmatched_host_is_unknown() {
        assert_eq!(Retailer::classify("https://random-shop.io/x"), Retailer::Unknown);
    }

    #[test]
    fn path_does_not_count_toward_classification() {
        assert_eq!(
            Retailer::classify("https://shop.example.com/amazon.com/item"),
            Retailer::Unknown
        );
    }

    #[test]
    fn unparsable_input_is_unknown() {
        assert_eq!(Retailer::classify("not a url"), Retailer::Unknown);
        assert_eq!(Retailer::classify(""), Retailer::Unknown);
    }

    #[test]
    fn display_names() {
        assert_eq!(Retailer::BestBuy.to_string(), "Best Buy");
        assert_eq!(Retailer::Ebay.to_string(), "eBay");
    }
}
