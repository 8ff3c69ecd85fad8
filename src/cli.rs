use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "wishlist-meta",
    version,
    about = "Fetch product previews for wishlist links"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Request timeout in seconds (default: 8)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Override the browser User-Agent sent to retailers
    #[arg(long, global = true)]
    pub user_agent: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch product metadata for one or more links
    Fetch {
        /// Product links (scheme optional, e.g. amazon.com/dp/B0XXX)
        #[arg(required = true)]
        urls: Vec<String>,

        /// Print results as JSON instead of markdown
        #[arg(long)]
        json: bool,
    },

    /// Show which retailer a link belongs to
    Retailer {
        url: String,
    },

    /// Check whether an item's metadata is due for a refresh
    Stale {
        /// The item's product link (an empty link is never refreshed)
        #[arg(long)]
        link: Option<String>,

        /// When metadata was last fetched (RFC 3339, e.g. 2024-06-01T12:00:00Z)
        #[arg(long)]
        last_fetched: Option<String>,
    },
}
