//! Episode resolution - the single entry point
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: Engine::resolve (orchestration)
//! - Level 2: resolve_finale, score_cast, resolve_placements, judge_lipsync, apply_placements
//! - Level 3: scoring and placement steps
//! - Level 4: Episode / Engine configuration

use std::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::categories::{CategoryTable, EpisodeType};
use crate::contestant::{ContestantId, EpisodeLabel};
use crate::draws::Draws;
use crate::error::Result;
use crate::finale::resolve_finale;
use crate::lipsync::{judge_lipsync, LipSyncEntry};
use crate::placement::{resolve_placements, PlacementOutcome};
use crate::record::apply_placements;
use crate::roster::Roster;
use crate::scoring::{score_contestant, ScoreCard};

// ============================================================================
// Level 4 - Configuration
// ============================================================================

/// Season format label. Carried through for future rule variants; the
/// current rules do not consult it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeasonStyle(pub String);

impl fmt::Display for SeasonStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Episode metadata supplied by the caller
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub label: EpisodeLabel,
    /// Comma-separated tags, e.g. `"acting, comedy"` or `"finale"`
    pub episode_type: String,
    /// Caller-requested non-elimination; a split premiere forces it on
    #[serde(default)]
    pub non_elimination: bool,
    #[serde(default)]
    pub season_style: SeasonStyle,
}

impl Episode {
    pub fn new(label: impl Into<EpisodeLabel>, episode_type: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            episode_type: episode_type.into(),
            non_elimination: false,
            season_style: SeasonStyle::default(),
        }
    }

    pub fn non_elimination(mut self, non_elimination: bool) -> Self {
        self.non_elimination = non_elimination;
        self
    }

    pub fn with_season_style(mut self, style: impl Into<String>) -> Self {
        self.season_style = SeasonStyle(style.into());
        self
    }

    pub fn parsed_type(&self) -> EpisodeType {
        EpisodeType::parse(&self.episode_type)
    }
}

/// What happened in a resolved episode
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Finale {
        winner: ContestantId,
    },
    Regular {
        /// Score cards in roster order
        score_cards: Vec<ScoreCard>,
        placements: PlacementOutcome,
        eliminated: Option<ContestantId>,
        /// Non-elimination came from a split-premiere tag
        forced_non_elimination: bool,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct EpisodeResolution {
    pub roster: Roster,
    pub outcome: Outcome,
}

impl EpisodeResolution {
    pub fn eliminated(&self) -> Option<&ContestantId> {
        match &self.outcome {
            Outcome::Regular { eliminated, .. } => eliminated.as_ref(),
            Outcome::Finale { .. } => None,
        }
    }

    pub fn winner(&self) -> Option<&ContestantId> {
        match &self.outcome {
            Outcome::Finale { winner } => Some(winner),
            Outcome::Regular { placements, .. } => placements.winner.as_ref(),
        }
    }
}

/// Episode resolution engine
#[derive(Clone, Debug, Default)]
pub struct Engine {
    categories: CategoryTable,
}

impl Engine {
    pub fn new(categories: CategoryTable) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &CategoryTable {
        &self.categories
    }

    // ========================================================================
    // Level 1 - Orchestration
    // ========================================================================

    /// Resolve one episode and return the new roster with an audit trail.
    ///
    /// The input roster is never modified. Finale episodes skip scoring
    /// entirely; every other episode scores all active contestants,
    /// assigns placements and, unless non-elimination is in force, sends
    /// one lip-sync contestant home.
    pub fn resolve<D: Draws + ?Sized>(
        &self,
        roster: &Roster,
        episode: &Episode,
        draws: &mut D,
    ) -> Result<EpisodeResolution> {
        let episode_type = episode.parsed_type();

        tracing::debug!(
            "Resolving episode {} ({}), style={:?}, {} active",
            episode.label,
            episode.episode_type,
            episode.season_style.0,
            roster.active_count()
        );

        if episode_type.is_finale() {
            let (roster, winner) = resolve_finale(roster, &episode.label, draws)?;
            return Ok(EpisodeResolution {
                roster,
                outcome: Outcome::Finale { winner },
            });
        }

        let split_premiere = episode_type.is_split_premiere();
        let non_elimination = episode.non_elimination || split_premiere;
        if split_premiere && !episode.non_elimination {
            tracing::debug!("Split premiere: elimination disabled");
        }

        let score_cards = self.score_cast(roster, &episode_type, draws)?;
        let placements = resolve_placements(&score_cards, split_premiere);

        let eliminated = if non_elimination {
            None
        } else {
            judge_lipsync(&lipsync_entries(&score_cards, &placements), draws)
        };

        let roster = apply_placements(
            roster,
            &episode.label,
            &score_cards,
            &placements,
            eliminated.as_ref(),
        );

        Ok(EpisodeResolution {
            roster,
            outcome: Outcome::Regular {
                score_cards,
                placements,
                eliminated,
                forced_non_elimination: split_premiere && !episode.non_elimination,
            },
        })
    }

    /// Resolve with a fresh ChaCha8 generator; `None` seeds from entropy
    pub fn resolve_seeded(
        &self,
        roster: &Roster,
        episode: &Episode,
        seed: Option<u64>,
    ) -> Result<EpisodeResolution> {
        let mut rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        };
        self.resolve(roster, episode, &mut rng)
    }

    // ========================================================================
    // Level 2 - Phases
    // ========================================================================

    /// Score every active contestant, in roster order
    fn score_cast<D: Draws + ?Sized>(
        &self,
        roster: &Roster,
        episode_type: &EpisodeType,
        draws: &mut D,
    ) -> Result<Vec<ScoreCard>> {
        let categories = self.categories.resolve(episode_type);
        roster
            .active()
            .map(|c| score_contestant(c, &categories, draws))
            .collect()
    }
}

/// Resolve an episode with the standard category table
pub fn resolve_episode<D: Draws + ?Sized>(
    roster: &Roster,
    episode: &Episode,
    draws: &mut D,
) -> Result<Roster> {
    Engine::default()
        .resolve(roster, episode, draws)
        .map(|resolution| resolution.roster)
}

// ============================================================================
// Level 3 - Steps
// ============================================================================

/// Lip-sync group with pre-episode counters, in placement order
fn lipsync_entries(cards: &[ScoreCard], placements: &PlacementOutcome) -> Vec<LipSyncEntry> {
    placements
        .lipsync
        .iter()
        .filter_map(|id| cards.iter().find(|c| &c.id == id))
        .map(|c| LipSyncEntry {
            id: c.id.clone(),
            counters: c.counters,
        })
        .collect()
}
