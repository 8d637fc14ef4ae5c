//! Weather provider client and normalizer.
//!
//! Fetches the wttr.in `?format=j1` JSON document and converts it into
//! the canonical [`WeatherSnapshot`]. The network call is kept apart
//! from [`normalize`], which is a pure transformation over the decoded
//! payload so the branching logic is testable without a socket.
//!
//! wttr.in reports every number as a string (`"temp_C": "18"`), so the
//! normalizer owns the integer parsing, truncating fractional or
//! sign-prefixed text. The per-day condition text comes from the hourly
//! sample nearest midday; min/max come from the daily aggregate fields.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::error::UpstreamError;
use crate::models::{ForecastDay, WeatherSnapshot};

/// Single bounded attempt; the caller treats any failure as absence.
const WEATHER_TIMEOUT: Duration = Duration::from_secs(5);

/// Raw wttr.in `j1` payload, reduced to the fields the normalizer reads.
#[derive(Debug, Deserialize)]
pub struct WttrResponse {
    #[serde(default)]
    current_condition: Vec<CurrentCondition>,
    #[serde(default)]
    weather: Vec<DailyForecast>,
}

#[derive(Debug, Deserialize)]
struct CurrentCondition {
    #[serde(rename = "temp_C")]
    temp_c: String,
    #[serde(rename = "FeelsLikeC")]
    feels_like_c: String,
    humidity: String,
    #[serde(rename = "weatherDesc", default)]
    weather_desc: Vec<WeatherDesc>,
}

#[derive(Debug, Deserialize)]
struct WeatherDesc {
    value: String,
}

#[derive(Debug, Deserialize)]
struct DailyForecast {
    date: String,
    #[serde(rename = "maxtempC")]
    max_temp_c: String,
    #[serde(rename = "mintempC")]
    min_temp_c: String,
    #[serde(default)]
    hourly: Vec<HourlySample>,
}

#[derive(Debug, Deserialize)]
struct HourlySample {
    time: String,
    #[serde(rename = "weatherDesc", default)]
    weather_desc: Vec<WeatherDesc>,
}

/// Fetch current conditions and a bounded forecast for `location`.
///
/// One GET with a fixed short timeout, no retry. Any transport, status,
/// or shape problem surfaces as [`UpstreamError`]; the caller decides
/// what absence looks like.
#[instrument(level = "info", skip(client))]
pub async fn fetch_current(
    client: &reqwest::Client,
    location: &str,
    forecast_days: usize,
) -> Result<WeatherSnapshot, UpstreamError> {
    let url = format!(
        "https://wttr.in/{}?format=j1",
        urlencoding::encode(location)
    );
    debug!(%url, "Requesting weather");

    let response = client.get(&url).timeout(WEATHER_TIMEOUT).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(UpstreamError::Status(status));
    }

    let body = response.text().await?;
    let raw: WttrResponse = serde_json::from_str(&body)?;
    let snapshot = normalize(raw, location, forecast_days)?;
    info!(
        location,
        temperature_c = snapshot.temperature_c,
        forecast_days = snapshot.forecast.len(),
        "Normalized weather snapshot"
    );
    Ok(snapshot)
}

/// Convert a decoded provider payload into a [`WeatherSnapshot`].
///
/// Takes the first `forecast_days` entries of the daily forecast array
/// in provider order. Fails when `current_condition` is absent, a day
/// has no hourly samples, or a numeric field is unreadable.
pub fn normalize(
    raw: WttrResponse,
    location: &str,
    forecast_days: usize,
) -> Result<WeatherSnapshot, UpstreamError> {
    let current = raw
        .current_condition
        .first()
        .ok_or(UpstreamError::MissingField("current_condition"))?;

    let condition = current
        .weather_desc
        .first()
        .map(|d| d.value.clone())
        .ok_or(UpstreamError::MissingField("weatherDesc"))?;

    let mut forecast = Vec::new();
    for day in raw.weather.iter().take(forecast_days) {
        forecast.push(ForecastDay::new(
            day.date.clone(),
            parse_intish(&day.min_temp_c)?,
            parse_intish(&day.max_temp_c)?,
            midday_condition(day)?.to_string(),
        ));
    }

    Ok(WeatherSnapshot {
        location: location.to_string(),
        temperature_c: parse_intish(&current.temp_c)?,
        feels_like_c: parse_intish(&current.feels_like_c)?,
        humidity_pct: parse_intish(&current.humidity)?,
        condition,
        forecast,
    })
}

/// Pick the representative intraday sample for a day's condition text.
///
/// wttr.in emits eight samples at 300-minute offsets; `"1200"` is the
/// midday slot. Providers with a different granularity fall back to the
/// middle element.
fn midday_condition(day: &DailyForecast) -> Result<&str, UpstreamError> {
    let sample = day
        .hourly
        .iter()
        .find(|h| h.time == "1200")
        .or_else(|| day.hourly.get(day.hourly.len() / 2))
        .ok_or(UpstreamError::MissingField("hourly"))?;
    sample
        .weather_desc
        .first()
        .map(|d| d.value.as_str())
        .ok_or(UpstreamError::MissingField("weatherDesc"))
}

/// Parse a provider numeric string as an integer, truncating fractional
/// and sign-formatted text (`"+18.6"` becomes `18`).
fn parse_intish(raw: &str) -> Result<i32, UpstreamError> {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    unsigned
        .parse::<f64>()
        .map(|v| v.trunc() as i32)
        .map_err(|_| UpstreamError::Numeric(raw.to_string()))
}
