//! Category lookup - which skills an episode type rewards
//!
//! Episode types arrive as comma-separated tag strings such as
//! `"Acting, Comedy"` or `"design,makeover"`. Each tag maps to zero or
//! more categories; the union is what the scorer averages over.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::contestant::Category;
use crate::error::{EngineError, Result};

const DEFAULT_KEY: &str = "default";
const SPLIT_PREMIERE_TAGS: [&str; 2] = ["non elim", "nonelim"];

/// Parsed episode type: lowercase, trimmed tags in caller order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EpisodeType {
    tags: Vec<String>,
}

impl EpisodeType {
    pub fn parse(raw: &str) -> Self {
        let tags = raw
            .to_lowercase()
            .split(',')
            .map(|t| t.trim().to_string())
            .collect();
        Self { tags }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn is_finale(&self) -> bool {
        self.tags.iter().any(|t| t.contains("finale"))
    }

    /// Split premiere: nobody goes home, fixed top2/high split
    pub fn is_split_premiere(&self) -> bool {
        self.tags
            .iter()
            .any(|t| SPLIT_PREMIERE_TAGS.contains(&t.as_str()))
    }
}

/// Episode tag -> rewarded categories, with a mandatory default entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryTable {
    entries: BTreeMap<String, Vec<Category>>,
    default: Vec<Category>,
}

impl CategoryTable {
    /// Built-in table
    pub fn standard() -> Self {
        use Category::*;

        let pairs: [(&str, &[Category]); 15] = [
            ("acting", &[Acting, Comedy]),
            ("branding", &[Acting, Comedy]),
            ("commercial", &[Acting, Comedy]),
            ("comedy", &[Comedy, Acting]),
            ("design", &[Design, Runway]),
            ("dancing", &[Dance]),
            ("singing", &[Singing, Dance]),
            ("improv", &[Comedy, Acting]),
            ("roast", &[Comedy]),
            ("parody", &[Comedy, Acting]),
            ("makeover", &[Design, Runway]),
            ("musical", &[Acting, Singing, Dance, Comedy]),
            ("non elim", &Category::ALL),
            ("nonelim", &Category::ALL),
            (DEFAULT_KEY, &Category::ALL),
        ];

        let entries = pairs
            .iter()
            .map(|(tag, cats)| (tag.to_string(), cats.to_vec()))
            .collect();

        Self {
            entries,
            default: Category::ALL.to_vec(),
        }
    }

    /// Build a table from raw entries. Keys are normalized to lowercase.
    pub fn from_entries<I, K>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Vec<Category>)>,
        K: AsRef<str>,
    {
        let entries: BTreeMap<String, Vec<Category>> = entries
            .into_iter()
            .map(|(k, v)| (k.as_ref().trim().to_lowercase(), v))
            .collect();

        let default = match entries.get(DEFAULT_KEY) {
            Some(cats) if !cats.is_empty() => dedup(cats.iter().copied()),
            _ => return Err(EngineError::MissingDefaultCategories),
        };

        Ok(Self { entries, default })
    }

    /// Load from a JSON object such as `{"default": ["Acting", ...], "roast": ["Comedy"]}`
    pub fn from_json(json: &str) -> Result<Self> {
        #[derive(Deserialize)]
        #[serde(transparent)]
        struct Raw(BTreeMap<String, Vec<Category>>);

        let raw: Raw = serde_json::from_str(json)?;
        Self::from_entries(raw.0)
    }

    pub fn default_categories(&self) -> &[Category] {
        &self.default
    }

    pub fn get(&self, tag: &str) -> Option<&[Category]> {
        self.entries.get(tag).map(Vec::as_slice)
    }

    /// Deduplicated union of categories for every tag, in first-seen order.
    /// Falls back to the default set when no tag contributes anything.
    pub fn resolve(&self, episode_type: &EpisodeType) -> Vec<Category> {
        let union = dedup(
            episode_type
                .tags()
                .iter()
                .filter_map(|t| self.get(t))
                .flatten()
                .copied(),
        );

        if union.is_empty() {
            if episode_type.tags().iter().any(|t| !t.is_empty()) {
                tracing::debug!(
                    "No categories for episode tags {:?}, using default set",
                    episode_type.tags()
                );
            }
            return self.default.clone();
        }
        union
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn dedup(cats: impl Iterator<Item = Category>) -> Vec<Category> {
    let mut out: Vec<Category> = Vec::new();
    for c in cats {
        if !out.contains(&c) {
            out.push(c);
        }
    }
    out
}
