//! Static feed registry and category resolution.
//!
//! The registry is a read-only `region -> category -> ordered feed list`
//! table built once at process start. Feed order inside a category is
//! significant: the aggregator prefers earlier-registered sources when
//! the headline limit is reached.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::models::FeedSource;

/// Fallback category substituted when the requested one has no feeds.
pub const FALLBACK_CATEGORY: &str = "General";

/// One region's `category -> ordered feed list` table.
pub type CategoryTable = HashMap<&'static str, Vec<FeedSource>>;

/// Top-level feed grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Global,
    Brazil,
}

impl Region {
    /// Display label used to tag per-region news output.
    pub fn label(&self) -> &'static str {
        match self {
            Region::Global => "Global",
            Region::Brazil => "Brazil",
        }
    }

    /// The region's category table.
    pub fn feeds(&self) -> &'static CategoryTable {
        match self {
            Region::Global => &GLOBAL_FEEDS,
            Region::Brazil => &BRAZIL_FEEDS,
        }
    }
}

static GLOBAL_FEEDS: Lazy<CategoryTable> = Lazy::new(|| {
    HashMap::from([
        (
            "General",
            vec![
                FeedSource::new("BBC News", "http://feeds.bbci.co.uk/news/rss.xml"),
                FeedSource::new("CNN", "http://rss.cnn.com/rss/edition.rss"),
                FeedSource::new("Reuters", "http://feeds.reuters.com/reuters/topNews"),
            ],
        ),
        (
            "Technology",
            vec![
                FeedSource::new("BBC Tech", "http://feeds.bbci.co.uk/news/technology/rss.xml"),
                FeedSource::new("CNN Tech", "http://rss.cnn.com/rss/edition_technology.rss"),
            ],
        ),
        (
            "Sports",
            vec![
                FeedSource::new("BBC Sport", "http://feeds.bbci.co.uk/sport/rss.xml"),
                FeedSource::new("CNN Sports", "http://rss.cnn.com/rss/edition_sport.rss"),
            ],
        ),
        (
            "Health",
            vec![FeedSource::new(
                "BBC Health",
                "http://feeds.bbci.co.uk/news/health/rss.xml",
            )],
        ),
    ])
});

static BRAZIL_FEEDS: Lazy<CategoryTable> = Lazy::new(|| {
    HashMap::from([
        (
            "General",
            vec![
                FeedSource::new("G1", "https://g1.globo.com/dynamo/rss2.xml"),
                FeedSource::new(
                    "Folha Em Cima da Hora",
                    "https://feeds.folha.uol.com.br/emcimadahora/rss091.xml",
                ),
            ],
        ),
        (
            "Technology",
            vec![
                FeedSource::new("Olhar Digital", "https://olhardigital.com.br/feed/"),
                FeedSource::new("Tecnoblog", "https://tecnoblog.net/feed"),
            ],
        ),
        (
            "Sports",
            vec![FeedSource::new(
                "Futebol Interior",
                "https://futebolinterior.com.br/feed",
            )],
        ),
        (
            "Health",
            vec![FeedSource::new("G1 Saúde", "https://g1.globo.com/rss/g1/saude/")],
        ),
    ])
});

/// Resolve the effective category for a request.
///
/// Exact key match against the table. A requested category with no
/// registered feeds (absent key or empty list) falls back to
/// `"General"`. When `"General"` is itself empty or absent, the result
/// is the fallback name with an empty feed list; the aggregator turns
/// that into an empty result rather than an error.
pub fn resolve<'a>(table: &'a CategoryTable, requested: &str) -> (&'a str, &'a [FeedSource]) {
    if let Some((key, feeds)) = table.get_key_value(requested) {
        if !feeds.is_empty() {
            return (*key, feeds.as_slice());
        }
    }
    match table.get_key_value(FALLBACK_CATEGORY) {
        Some((key, feeds)) => (*key, feeds.as_slice()),
        None => (FALLBACK_CATEGORY, &[]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_exact_match() {
        let (category, feeds) = resolve(Region::Global.feeds(), "Technology");
        assert_eq!(category, "Technology");
        assert_eq!(feeds.len(), 2);
        assert_eq!(feeds[0].display_name, "BBC Tech");
    }

    #[test]
    fn test_resolve_falls_back_to_general() {
        let (category, feeds) = resolve(Region::Global.feeds(), "Music");
        assert_eq!(category, "General");
        assert_eq!(feeds[0].display_name, "BBC News");
    }

    #[test]
    fn test_resolve_empty_when_general_absent() {
        let table = CategoryTable::new();
        let (category, feeds) = resolve(&table, "Music");
        assert_eq!(category, "General");
        assert!(feeds.is_empty());
    }

    #[test]
    fn test_resolve_empty_requested_list_falls_back() {
        let mut table = CategoryTable::new();
        table.insert("Music", Vec::new());
        table.insert(
            "General",
            vec![FeedSource::new("BBC News", "http://feeds.bbci.co.uk/news/rss.xml")],
        );
        let (category, feeds) = resolve(&table, "Music");
        assert_eq!(category, "General");
        assert_eq!(feeds.len(), 1);
    }

    #[test]
    fn test_every_region_has_nonempty_general() {
        for region in [Region::Global, Region::Brazil] {
            let feeds = region.feeds().get("General").unwrap();
            assert!(!feeds.is_empty(), "{} General is empty", region.label());
        }
    }
}
