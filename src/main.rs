//! # daybrief
//!
//! A terminal dashboard combining current weather with categorized news
//! headlines pulled from redundant RSS feeds.
//!
//! ## Features
//!
//! - Current conditions and a short forecast from wttr.in, normalized
//!   into a fixed internal shape
//! - Headlines federated across every feed of a category, with keyword
//!   filtering, a global headline ceiling, and per-source failure
//!   isolation
//! - Category fallback to General when a category has no feeds in the
//!   selected region
//!
//! ## Usage
//!
//! ```sh
//! daybrief -l "London,UK" -c technology -k ai -n 5
//! ```
//!
//! ## Architecture
//!
//! The weather fetch and the news aggregation share no state and run
//! concurrently. Neither half can fail the run: a dead weather provider
//! or a category full of dead feeds degrades to a "not available" line
//! while the other half still renders.

use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod error;
mod models;
mod news;
mod render;
mod utils;
mod weather;

use cli::Cli;
use models::RegionNews;
use news::fetch::HttpFeedFetcher;
use news::registry;

#[tokio::main]
async fn main() {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();

    let args = Cli::parse();
    let category = args.effective_category();
    debug!(?args.location, ?args.region, %category, ?args.keyword, "Parsed CLI arguments");

    let client = reqwest::Client::new();
    let fetcher = HttpFeedFetcher::new(client.clone());

    // Weather and news share no state; run both halves concurrently.
    let weather_fut = weather::fetch_current(&client, &args.location, args.forecast_days);
    let news_fut = async {
        let mut groups: Vec<RegionNews> = Vec::new();
        for region in args.region.regions() {
            let (effective_category, feeds) = registry::resolve(region.feeds(), &category);
            info!(
                region = region.label(),
                category = effective_category,
                feeds = feeds.len(),
                "Aggregating region news"
            );
            let headlines =
                news::aggregate(&fetcher, feeds, args.keyword.as_deref(), args.limit).await;
            groups.push(RegionNews {
                region_label: region.label().to_string(),
                category: effective_category.to_string(),
                headlines,
            });
        }
        groups
    };

    let (weather_result, news_groups) = tokio::join!(weather_fut, news_fut);

    render::print_header();
    match weather_result {
        Ok(snapshot) => render::print_weather(&snapshot),
        Err(e) => {
            warn!(location = %args.location, error = %e, "Weather unavailable");
            render::print_weather_unavailable();
        }
    }
    for group in &news_groups {
        render::print_region_news(group);
    }

    info!(elapsed = ?start_time.elapsed(), "Dashboard complete");
}
