//! Terminal presentation for the dashboard.
//!
//! Pure output over the core data types: a current-weather panel, a
//! forecast table, and one headline table per region. Absence of data
//! renders a "not available" line; it is never an error at this layer.

use colored::{Color, Colorize};

use crate::models::{RegionNews, WeatherSnapshot};

/// Color and icon keyed by temperature band.
fn temperature_style(temp_c: i32) -> (Color, &'static str) {
    match temp_c {
        t if t <= 10 => (Color::Cyan, "❄"),
        t if t <= 20 => (Color::Green, "☁"),
        t if t <= 30 => (Color::Yellow, "🌤"),
        _ => (Color::Red, "🔥"),
    }
}

pub fn print_header() {
    println!();
    println!("{}", "── 🌤 Weather & 📰 News Dashboard ──".blue().bold());
    println!();
}

pub fn print_weather(snapshot: &WeatherSnapshot) {
    let (color, icon) = temperature_style(snapshot.temperature_c);

    println!("{}", "Current Weather".cyan().bold());
    println!("{}", snapshot.location.as_str().color(color).bold());
    println!(
        "{}",
        format!(
            "{icon} Temp: {}°C (feels like {}°C)",
            snapshot.temperature_c, snapshot.feels_like_c
        )
        .color(color)
    );
    println!(
        "{}",
        format!("💧 Humidity: {}%", snapshot.humidity_pct).color(color)
    );
    println!(
        "{}",
        format!("☁ Condition: {}", snapshot.condition).color(color)
    );

    if snapshot.forecast.is_empty() {
        return;
    }

    println!();
    println!(
        "{}",
        format!("{}-Day Forecast", snapshot.forecast.len())
            .magenta()
            .bold()
    );
    println!(
        "{}",
        format!("{:<12} {:>6} {:>6}  {}", "Date", "Min°C", "Max°C", "Condition").cyan()
    );
    for day in &snapshot.forecast {
        let (_, day_icon) = temperature_style(day.avg_temp_c);
        println!(
            "{:<12} {:>6} {:>6}  {} {}",
            day.date, day.min_temp_c, day.max_temp_c, day_icon, day.condition
        );
    }
}

pub fn print_weather_unavailable() {
    println!("{}", "Weather data not available".red());
}

pub fn print_region_news(news: &RegionNews) {
    println!();
    let heading = format!("Top {} News ({})", news.region_label, news.category);

    if news.headlines.is_empty() {
        println!("{}", format!("{heading} not available").red());
        return;
    }

    println!("{}", heading.yellow().bold());
    let width = news
        .headlines
        .iter()
        .map(|h| h.source_name.chars().count())
        .max()
        .unwrap_or(0);
    for headline in &news.headlines {
        // Pad before coloring; ANSI codes would throw off the width.
        let padding = width - headline.source_name.chars().count();
        let source = format!("{}{}", headline.source_name, " ".repeat(padding));
        println!("{}  {}", source.cyan(), headline.title.as_str().magenta());
    }
}
