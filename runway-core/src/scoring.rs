//! Episode scoring - one contestant's challenge performance
//!
//! ## Architecture
//!
//! - Level 2: score_contestant (phase)
//! - Level 3: stat_increase, reputation_bias (steps)

use crate::contestant::{Category, Contestant, ContestantId, Counters, EpisodeLabel, ScoreRecord};
use crate::draws::Draws;
use crate::error::{EngineError, Result};

/// Score of one contestant plus the terms it was built from
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreCard {
    pub id: ContestantId,
    pub name: String,
    /// Ranking score: base_stat + stat_increase
    pub score: f64,
    pub base_stat: u32,
    pub stat_increase: f64,
    /// Reputation signal, reported but not part of `score`
    pub bias: i64,
    /// Noise term, reported but not part of `score`
    pub random_factor: i32,
    pub category_count: usize,
    /// Counters before this episode
    pub counters: Counters,
}

impl ScoreCard {
    /// History entry for the contestant's score log
    pub fn to_record(&self, episode: EpisodeLabel) -> ScoreRecord {
        ScoreRecord {
            episode,
            score: self.score,
            base_stat: self.base_stat,
            stat_increase: self.stat_increase,
            bias: self.bias,
            random_factor: self.random_factor,
            category_count: self.category_count,
            counters: self.counters,
        }
    }
}

/// Score an active contestant over the resolved category set (Level 2 phase)
///
/// # Arguments
/// * `contestant` - Contestant being judged
/// * `categories` - Non-empty set of rewarded categories
/// * `draws` - Randomness source
///
/// Draw order is base stat, then random factor.
pub fn score_contestant<D: Draws + ?Sized>(
    contestant: &Contestant,
    categories: &[Category],
    draws: &mut D,
) -> Result<ScoreCard> {
    let stat_increase = stat_increase(contestant, categories)?;
    let base_stat = draws.base_stat();
    let random_factor = draws.random_factor();
    let bias = reputation_bias(&contestant.counters());

    let score = f64::from(base_stat) + stat_increase;

    tracing::debug!(
        "Scored {}: {:.2} (base={}, stats={:.2}, bias={}, noise={})",
        contestant.name,
        score,
        base_stat,
        stat_increase,
        bias,
        random_factor
    );

    Ok(ScoreCard {
        id: contestant.id.clone(),
        name: contestant.name.clone(),
        score,
        base_stat,
        stat_increase,
        bias,
        random_factor,
        category_count: categories.len(),
        counters: contestant.counters(),
    })
}

// ============================================================================
// Level 3 - Steps
// ============================================================================

/// Mean of the contestant's stats across `categories`.
///
/// Returns 0.0 for an empty set; every category must be present on the
/// contestant.
pub fn stat_increase(contestant: &Contestant, categories: &[Category]) -> Result<f64> {
    if categories.is_empty() {
        return Ok(0.0);
    }

    let mut total = 0.0;
    for &category in categories {
        total += contestant
            .stat(category)
            .ok_or_else(|| EngineError::MissingStatCategory {
                contestant: contestant.id.clone(),
                category,
            })?;
    }
    Ok(total / categories.len() as f64)
}

/// wins*8 + highs*5 - bottoms*12 - lows*8
pub fn reputation_bias(counters: &Counters) -> i64 {
    i64::from(counters.wins) * 8 + i64::from(counters.highs) * 5
        - i64::from(counters.bottoms) * 12
        - i64::from(counters.lows) * 8
}
