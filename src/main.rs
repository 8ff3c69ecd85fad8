mod cli;
mod output;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use cli::{Cli, Commands};
use futures::future::join_all;

use wishlist_meta::config::AppConfig;
use wishlist_meta::{is_stale, normalize_url, should_refresh, MetadataService, Retailer};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "wishlist_meta=debug"
    } else {
        "wishlist_meta=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load(cli.timeout, cli.user_agent, cli.debug)?;

    ctrlc::set_handler(|| {
        eprintln!("\nInterrupted.");
        std::process::exit(130);
    })
    .context("Failed to set Ctrl+C handler")?;

    match cli.command {
        Commands::Fetch { urls, json } => cmd_fetch(&config, urls, json).await?,
        Commands::Retailer { url } => cmd_retailer(&url),
        Commands::Stale { link, last_fetched } => {
            cmd_stale(link.as_deref(), last_fetched.as_deref())?
        }
    }

    Ok(())
}

async fn cmd_fetch(config: &AppConfig, urls: Vec<String>, json: bool) -> Result<()> {
    let service =
        MetadataService::new(config.fetch.clone()).context("Failed to set up HTTP client")?;

    // Each link is an independent fetch; run them side by side.
    let results = join_all(urls.into_iter().map(|url| {
        let service = service.clone();
        async move {
            let meta = service.fetch_metadata(&url).await;
            (url, meta)
        }
    }))
    .await;

    if json {
        let metas: Vec<_> = results.iter().map(|(_, meta)| meta).collect();
        let rendered = if metas.len() == 1 {
            serde_json::to_string_pretty(metas[0])?
        } else {
            serde_json::to_string_pretty(&metas)?
        };
        println!("{}", rendered);
    } else {
        print!("{}", output::format_results(&results));
    }

    Ok(())
}

fn cmd_retailer(url: &str) {
    let retailer = normalize_url(url)
        .map(|normalized| Retailer::classify(&normalized))
        .unwrap_or(Retailer::Unknown);
    println!("{}", retailer);
}

fn cmd_stale(link: Option<&str>, last_fetched: Option<&str>) -> Result<()> {
    let last_fetched = last_fetched
        .map(|raw| {
            DateTime::parse_from_rfc3339(raw)
                .map(|dt| dt.with_timezone(&Utc))
                .with_context(|| format!("Invalid --last-fetched timestamp: {}", raw))
        })
        .transpose()?;

    let now = Utc::now();
    let due = match link {
        Some(_) => should_refresh(link, last_fetched, now),
        None => is_stale(last_fetched, now),
    };
    println!("{}", if due { "stale" } else { "fresh" });
    Ok(())
}
