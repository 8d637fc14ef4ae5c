//! Command-line interface for the dashboard.
//!
//! All inputs the dashboard needs arrive as flags with the defaults the
//! interactive original used: São Paulo weather, both feed registries,
//! the General category, five headlines, three forecast days.
//!
//! # Examples
//!
//! ```sh
//! # Defaults: São Paulo weather, both regions, General news
//! daybrief
//!
//! # London weather, global technology news filtered by keyword
//! daybrief -l "London,UK" -r global -c technology -k election
//! ```

use clap::{Parser, ValueEnum};

use crate::news::registry::Region;
use crate::utils::title_case;

/// Command-line arguments for the daybrief dashboard.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Location in City,CountryCode form (e.g. "London,UK")
    #[arg(short, long, default_value = "São Paulo,BR")]
    pub location: String,

    /// Which feed registries to query
    #[arg(short, long, value_enum, default_value_t = RegionChoice::Both)]
    pub region: RegionChoice,

    /// News category (General, Technology, Sports, Health)
    #[arg(short, long, default_value = "General")]
    pub category: String,

    /// Optional keyword; only headlines containing it are shown
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// Maximum number of headlines per region
    #[arg(short = 'n', long, default_value_t = 5)]
    pub limit: usize,

    /// Number of forecast days to display
    #[arg(short, long, default_value_t = 3)]
    pub forecast_days: usize,
}

impl Cli {
    /// The requested category, title-cased to match registry keys.
    pub fn effective_category(&self) -> String {
        title_case(self.category.trim())
    }
}

/// Region selection: one registry or both.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionChoice {
    Global,
    Brazil,
    Both,
}

impl RegionChoice {
    /// The registries to query, in display order.
    pub fn regions(&self) -> Vec<Region> {
        match self {
            RegionChoice::Global => vec![Region::Global],
            RegionChoice::Brazil => vec![Region::Brazil],
            RegionChoice::Both => vec![Region::Global, Region::Brazil],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["daybrief"]);
        assert_eq!(cli.location, "São Paulo,BR");
        assert_eq!(cli.region, RegionChoice::Both);
        assert_eq!(cli.category, "General");
        assert_eq!(cli.keyword, None);
        assert_eq!(cli.limit, 5);
        assert_eq!(cli.forecast_days, 3);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "daybrief", "-l", "London,UK", "-r", "global", "-c", "sports", "-k", "cup", "-n", "3",
        ]);
        assert_eq!(cli.location, "London,UK");
        assert_eq!(cli.region, RegionChoice::Global);
        assert_eq!(cli.keyword.as_deref(), Some("cup"));
        assert_eq!(cli.limit, 3);
    }

    #[test]
    fn test_effective_category_is_title_cased() {
        let cli = Cli::parse_from(["daybrief", "--category", " technology "]);
        assert_eq!(cli.effective_category(), "Technology");
    }

    #[test]
    fn test_region_choice_expansion() {
        assert_eq!(RegionChoice::Global.regions(), vec![Region::Global]);
        assert_eq!(
            RegionChoice::Both.regions(),
            vec![Region::Global, Region::Brazil]
        );
    }
}
