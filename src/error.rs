//! Error taxonomy for the aggregation pipeline.
//!
//! Two families, matching the two upstream kinds:
//! - [`UpstreamError`]: anything that prevents a usable weather
//!   snapshot. Converted to an absence value by the caller; never fatal.
//! - [`FeedError`]: one feed's failure, tagged with the source name so
//!   the aggregator can report it and move on to the next feed.
//!
//! Low-level transport and parse errors are wrapped at the smallest
//! possible boundary and never unwind past it.

use thiserror::Error;

/// Failure to produce a [`crate::models::WeatherSnapshot`] from the
/// weather provider.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Network failure or timeout talking to the provider.
    #[error("weather request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Provider answered with a non-success status.
    #[error("weather provider returned status {0}")]
    Status(reqwest::StatusCode),

    /// Payload was not the JSON document we expect.
    #[error("malformed weather payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// A field the normalizer requires was absent or empty.
    #[error("weather payload missing required field `{0}`")]
    MissingField(&'static str),

    /// A numeric field could not be read as a number.
    #[error("unparseable numeric value {0:?}")]
    Numeric(String),
}

/// One feed's failure, isolated to that feed.
#[derive(Debug, Error)]
#[error("feed {source_name}: {cause}")]
pub struct FeedError {
    /// Display name of the failing source.
    pub source_name: String,
    #[source]
    pub cause: FeedFailure,
}

impl FeedError {
    pub fn new(source_name: &str, cause: FeedFailure) -> Self {
        Self {
            source_name: source_name.to_string(),
            cause,
        }
    }
}

/// What went wrong with a single feed fetch.
#[derive(Debug, Error)]
pub enum FeedFailure {
    /// Network failure or timeout.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Feed answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),

    /// Response body was not parseable as an RSS item list.
    #[error("malformed feed: {0}")]
    Parse(#[from] quick_xml::DeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_error_carries_source_name() {
        let err = FeedError::new(
            "BBC News",
            FeedFailure::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE),
        );
        assert_eq!(err.source_name, "BBC News");
        assert!(err.to_string().contains("BBC News"));
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_upstream_missing_field_display() {
        let err = UpstreamError::MissingField("current_condition");
        assert!(err.to_string().contains("current_condition"));
    }
}
