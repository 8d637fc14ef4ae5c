//! Single-feed fetching and RSS parsing.
//!
//! One bounded GET per feed, parsed with quick-xml into the items'
//! title fields. Every failure is wrapped in a [`FeedError`] carrying
//! the source name, so the aggregator can report it and keep going.
//!
//! An item without a `<title>` element is skipped with a warning rather
//! than failing the feed; whole-feed failure is reserved for transport,
//! status, and XML-level errors.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::error::{FeedError, FeedFailure};
use crate::models::{FeedSource, Headline};

/// Seam between the aggregator and the network.
///
/// The aggregator only sees this trait, so tests drive it with canned
/// fetchers and the HTTP implementation stays the single side-effecting
/// step.
pub trait FetchHeadlines {
    /// Fetch one feed and return its headlines in document order.
    async fn fetch(&self, source: &FeedSource) -> Result<Vec<Headline>, FeedError>;
}

/// HTTP-backed [`FetchHeadlines`] implementation.
pub struct HttpFeedFetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpFeedFetcher {
    /// Default per-feed timeout. One attempt, no retry.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }
}

impl FetchHeadlines for HttpFeedFetcher {
    #[instrument(level = "info", skip_all, fields(source = %source.display_name))]
    async fn fetch(&self, source: &FeedSource) -> Result<Vec<Headline>, FeedError> {
        let response = self
            .client
            .get(&source.endpoint)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| FeedError::new(&source.display_name, e.into()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::new(
                &source.display_name,
                FeedFailure::Status(status),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FeedError::new(&source.display_name, e.into()))?;

        let headlines = parse_items(&body, &source.display_name)
            .map_err(|e| FeedError::new(&source.display_name, e.into()))?;
        debug!(count = headlines.len(), "Parsed feed items");
        Ok(headlines)
    }
}

#[derive(Debug, Deserialize)]
struct Rss {
    channel: RssChannel,
}

#[derive(Debug, Deserialize)]
struct RssChannel {
    #[serde(rename = "item", default)]
    items: Vec<RssItem>,
}

#[derive(Debug, Deserialize)]
struct RssItem {
    title: Option<String>,
}

/// Parse an RSS document body into headlines attributed to `source_name`.
fn parse_items(body: &str, source_name: &str) -> Result<Vec<Headline>, quick_xml::DeError> {
    let rss: Rss = quick_xml::de::from_str(body)?;

    let mut headlines = Vec::new();
    for item in rss.channel.items {
        match item.title {
            Some(title) => headlines.push(Headline {
                source_name: source_name.to_string(),
                title,
            }),
            None => warn!(source = source_name, "Skipping feed item without a title"),
        }
    }
    Ok(headlines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_items_extracts_titles_in_order() {
        let body = r#"<?xml version="1.0"?>
            <rss version="2.0">
              <channel>
                <title>Example Feed</title>
                <item><title>First story</title><link>https://example.com/1</link></item>
                <item><title>Second story</title><link>https://example.com/2</link></item>
              </channel>
            </rss>"#;

        let headlines = parse_items(body, "Example").unwrap();
        assert_eq!(headlines.len(), 2);
        assert_eq!(headlines[0].title, "First story");
        assert_eq!(headlines[1].title, "Second story");
        assert_eq!(headlines[0].source_name, "Example");
    }

    #[test]
    fn test_parse_items_skips_untitled_items() {
        let body = r#"<rss version="2.0">
              <channel>
                <item><link>https://example.com/1</link></item>
                <item><title>Only titled story</title></item>
              </channel>
            </rss>"#;

        let headlines = parse_items(body, "Example").unwrap();
        assert_eq!(headlines.len(), 1);
        assert_eq!(headlines[0].title, "Only titled story");
    }

    #[test]
    fn test_parse_items_empty_channel() {
        let body = r#"<rss version="2.0"><channel><title>Quiet</title></channel></rss>"#;
        let headlines = parse_items(body, "Example").unwrap();
        assert!(headlines.is_empty());
    }

    #[test]
    fn test_parse_items_rejects_malformed_xml() {
        assert!(parse_items("not xml at all", "Example").is_err());
        assert!(parse_items("<rss><channel><item>", "Example").is_err());
    }
}
