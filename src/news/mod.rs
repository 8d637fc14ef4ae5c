//! Multi-feed news aggregation.
//!
//! The aggregator drives [`fetch::FetchHeadlines`] once per feed in a
//! resolved category and folds the results into a single bounded
//! headline list:
//!
//! - Feeds are fetched concurrently but folded in registration order,
//!   so earlier-registered sources win when the limit is reached and
//!   output is deterministic regardless of completion order.
//! - One feed's failure is logged and skipped; it never aborts the
//!   aggregation or blocks the remaining feeds.
//! - The optional keyword is a case-insensitive substring match on the
//!   title.
//! - The headline limit is global across the whole feed set and checked
//!   after each accepted headline; once reached, nothing more is
//!   accepted and nothing already accepted is evicted.

pub mod fetch;
pub mod registry;

use futures::stream::{self, StreamExt};
use tracing::{info, warn};

use crate::models::{FeedSource, Headline};
use crate::news::fetch::FetchHeadlines;

/// Bound on in-flight feed requests within one category.
const MAX_CONCURRENT_FETCHES: usize = 4;

/// Aggregate headlines across `feeds`, in registration order, up to
/// `limit` keyword-matching entries.
///
/// An empty feed list (the resolver's double-fallback case) yields an
/// empty result, not an error.
pub async fn aggregate<F>(
    fetcher: &F,
    feeds: &[FeedSource],
    keyword: Option<&str>,
    limit: usize,
) -> Vec<Headline>
where
    F: FetchHeadlines,
{
    if feeds.is_empty() || limit == 0 {
        return Vec::new();
    }

    // buffered (not buffer_unordered) keeps results in feed order.
    let results: Vec<_> = stream::iter(feeds)
        .map(|source| fetcher.fetch(source))
        .buffered(MAX_CONCURRENT_FETCHES)
        .collect()
        .await;

    let needle = keyword.map(str::to_lowercase);
    let mut headlines: Vec<Headline> = Vec::new();
    let mut failed_feeds = 0usize;

    'feeds: for (source, result) in feeds.iter().zip(results) {
        match result {
            Ok(items) => {
                for headline in items {
                    if !matches_keyword(&headline.title, needle.as_deref()) {
                        continue;
                    }
                    headlines.push(headline);
                    if headlines.len() >= limit {
                        break 'feeds;
                    }
                }
            }
            Err(e) => {
                failed_feeds += 1;
                warn!(
                    source = %source.display_name,
                    error = %e,
                    "Feed failed; continuing with remaining feeds"
                );
            }
        }
    }

    info!(
        count = headlines.len(),
        failed_feeds,
        feeds = feeds.len(),
        "Aggregation complete"
    );
    headlines
}

fn matches_keyword(title: &str, needle: Option<&str>) -> bool {
    match needle {
        Some(needle) => title.to_lowercase().contains(needle),
        None => true,
    }
}
