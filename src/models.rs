//! Data models shared by the weather and news halves of the dashboard.
//!
//! Everything here is constructed once per run and handed to the
//! presentation layer as-is; nothing is mutated after construction.

use serde::{Deserialize, Serialize};

/// Canonical current-weather shape, normalized from the provider payload.
///
/// The `forecast` sequence preserves the provider's chronological order
/// and never exceeds the configured forecast day count.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WeatherSnapshot {
    /// The location string the caller asked for, passed through verbatim.
    pub location: String,
    /// Current temperature in whole degrees Celsius.
    pub temperature_c: i32,
    /// Apparent ("feels like") temperature in whole degrees Celsius.
    pub feels_like_c: i32,
    /// Relative humidity percentage.
    pub humidity_pct: i32,
    /// Descriptive condition text, e.g. "Partly cloudy".
    pub condition: String,
    /// Per-day forecast entries, provider order.
    pub forecast: Vec<ForecastDay>,
}

/// One day of forecast data.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ForecastDay {
    /// ISO date (`YYYY-MM-DD`).
    pub date: String,
    /// Daily minimum in whole degrees Celsius.
    pub min_temp_c: i32,
    /// Daily maximum in whole degrees Celsius.
    pub max_temp_c: i32,
    /// Condition text sourced from the midday hourly sample.
    pub condition: String,
    /// `floor((min + max) / 2)`, computed here rather than read upstream.
    pub avg_temp_c: i32,
}

impl ForecastDay {
    /// Build a forecast day, deriving the average from min and max.
    pub fn new(date: String, min_temp_c: i32, max_temp_c: i32, condition: String) -> Self {
        // div_euclid floors for a positive divisor.
        let avg_temp_c = (min_temp_c + max_temp_c).div_euclid(2);
        Self {
            date,
            min_temp_c,
            max_temp_c,
            condition,
            avg_temp_c,
        }
    }
}

/// One named RSS source inside the static registry.
#[derive(Debug, Clone)]
pub struct FeedSource {
    /// Human-readable name shown next to each headline.
    pub display_name: String,
    /// Feed endpoint URL.
    pub endpoint: String,
}

impl FeedSource {
    pub fn new(display_name: &str, endpoint: &str) -> Self {
        Self {
            display_name: display_name.to_string(),
            endpoint: endpoint.to_string(),
        }
    }
}

/// A single headline attributed to the feed it came from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Headline {
    pub source_name: String,
    pub title: String,
}

/// One region's aggregated headlines, tagged for labeling by the
/// presentation layer.
#[derive(Debug, Clone)]
pub struct RegionNews {
    /// Display label of the region the feeds belong to.
    pub region_label: String,
    /// Effective category after fallback resolution.
    pub category: String,
    /// At most `limit` headlines, feed-registration order.
    pub headlines: Vec<Headline>,
}
