//! Contestant - skill stats, counters and per-episode history

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique contestant identifier
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContestantId(pub String);

impl ContestantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContestantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContestantId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Skill category rewarded by challenges
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Acting,
    Comedy,
    Dance,
    Design,
    Singing,
    Runway,
}

impl Category {
    /// Full category set, used when an episode type rewards nothing specific
    pub const ALL: [Category; 6] = [
        Category::Acting,
        Category::Comedy,
        Category::Dance,
        Category::Design,
        Category::Singing,
        Category::Runway,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Acting => "Acting",
            Category::Comedy => "Comedy",
            Category::Dance => "Dance",
            Category::Design => "Design",
            Category::Singing => "Singing",
            Category::Runway => "Runway",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Episode identifier as supplied by the caller, numeric or free text
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EpisodeLabel {
    Number(u32),
    Text(String),
}

impl fmt::Display for EpisodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EpisodeLabel::Number(n) => write!(f, "{}", n),
            EpisodeLabel::Text(s) => f.write_str(s),
        }
    }
}

impl From<u32> for EpisodeLabel {
    fn from(n: u32) -> Self {
        EpisodeLabel::Number(n)
    }
}

impl From<&str> for EpisodeLabel {
    fn from(s: &str) -> Self {
        EpisodeLabel::Text(s.to_string())
    }
}

/// How a contestant placed in one episode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Win,
    Top2,
    Finale,
    High,
    Low,
    Bottom,
    Safe,
}

/// Historical counters that feed reputation and lip-sync strength
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    pub wins: u32,
    pub highs: u32,
    pub lows: u32,
    pub bottoms: u32,
}

/// One scored episode, kept for audit
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub episode: EpisodeLabel,
    pub score: f64,
    pub base_stat: u32,
    pub stat_increase: f64,
    pub bias: i64,
    pub random_factor: i32,
    pub category_count: usize,
    /// Counters as they stood before this episode
    pub counters: Counters,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementRecord {
    pub episode: EpisodeLabel,
    pub placement: Placement,
}

/// A contestant and everything the competition remembers about them.
///
/// Values are never mutated in place by the engine; the `scored`,
/// `placed` and `eliminated` operations return updated copies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contestant {
    pub id: ContestantId,
    pub name: String,
    pub stats: BTreeMap<Category, f64>,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub highs: u32,
    #[serde(default)]
    pub lows: u32,
    #[serde(default)]
    pub bottoms: u32,
    #[serde(default)]
    pub top2s: u32,
    #[serde(default)]
    pub is_eliminated: bool,
    #[serde(default)]
    pub scores: Vec<ScoreRecord>,
    #[serde(default)]
    pub placements: Vec<PlacementRecord>,
}

impl Contestant {
    /// Fresh contestant with no history
    pub fn new(id: impl Into<String>, name: impl Into<String>, stats: BTreeMap<Category, f64>) -> Self {
        Self {
            id: ContestantId::new(id),
            name: name.into(),
            stats,
            wins: 0,
            highs: 0,
            lows: 0,
            bottoms: 0,
            top2s: 0,
            is_eliminated: false,
            scores: Vec::new(),
            placements: Vec::new(),
        }
    }

    /// Same stat value in every category
    pub fn with_uniform_stats(id: impl Into<String>, name: impl Into<String>, level: f64) -> Self {
        let stats = Category::ALL.iter().map(|&c| (c, level)).collect();
        Self::new(id, name, stats)
    }

    pub fn is_active(&self) -> bool {
        !self.is_eliminated
    }

    pub fn counters(&self) -> Counters {
        Counters {
            wins: self.wins,
            highs: self.highs,
            lows: self.lows,
            bottoms: self.bottoms,
        }
    }

    pub fn stat(&self, category: Category) -> Option<f64> {
        self.stats.get(&category).copied()
    }

    /// Copy with one more score record
    pub fn scored(&self, record: ScoreRecord) -> Self {
        let mut next = self.clone();
        next.scores.push(record);
        next
    }

    /// Copy with one more placement record and the matching counter bumped
    pub fn placed(&self, episode: EpisodeLabel, placement: Placement) -> Self {
        let mut next = self.clone();
        match placement {
            Placement::Win => next.wins += 1,
            Placement::Top2 => next.top2s += 1,
            Placement::High => next.highs += 1,
            Placement::Low => next.lows += 1,
            Placement::Bottom => next.bottoms += 1,
            Placement::Finale | Placement::Safe => {}
        }
        next.placements.push(PlacementRecord { episode, placement });
        next
    }

    /// Copy marked as eliminated. Elimination is terminal.
    pub fn eliminated(mut self) -> Self {
        self.is_eliminated = true;
        self
    }

    pub fn last_placement(&self) -> Option<Placement> {
        self.placements.last().map(|p| p.placement)
    }
}
