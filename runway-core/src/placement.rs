//! Placement resolution - who wins, who is high, who lip-syncs
//!
//! ## Architecture
//!
//! - Level 2: resolve_placements (phase)
//! - Level 3: rank_by_score, standard_groups, split_premiere_groups (steps)
//! - Level 4: placement_split table

use crate::contestant::ContestantId;
use crate::scoring::ScoreCard;

/// Group sizes for one episode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacementSplit {
    /// Winner plus highs
    pub top: usize,
    /// Low (when more than two) plus lip-sync
    pub bottom: usize,
}

/// Identities chosen for each placement group
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlacementOutcome {
    pub winner: Option<ContestantId>,
    /// Runner-up, split premiere only
    pub top2: Option<ContestantId>,
    pub highs: Vec<ContestantId>,
    pub low: Option<ContestantId>,
    /// Lip-sync group, best score first
    pub lipsync: Vec<ContestantId>,
}

/// Group sizes by number of active contestants (Level 4)
pub fn placement_split(size: usize) -> PlacementSplit {
    let (top, bottom) = match size {
        4 => (2, 2),
        5 => (2, 3),
        6 => (3, 3),
        7 => (4, 3),
        _ => (3, 3),
    };
    PlacementSplit { top, bottom }
}

/// Partition scored contestants into placement groups (Level 2 phase)
///
/// # Arguments
/// * `cards` - Score cards of active contestants, in roster order
/// * `split_premiere` - Use the fixed top2/high split with no bottom group
pub fn resolve_placements(cards: &[ScoreCard], split_premiere: bool) -> PlacementOutcome {
    let ranked = rank_by_score(cards);

    let outcome = if split_premiere {
        split_premiere_groups(&ranked)
    } else {
        standard_groups(&ranked, placement_split(ranked.len()))
    };

    tracing::debug!(
        "Placements: winner={:?} top2={:?} highs={} low={:?} lipsync={}",
        outcome.winner.as_ref().map(ContestantId::as_str),
        outcome.top2.as_ref().map(ContestantId::as_str),
        outcome.highs.len(),
        outcome.low.as_ref().map(ContestantId::as_str),
        outcome.lipsync.len()
    );

    outcome
}

// ============================================================================
// Level 3 - Steps
// ============================================================================

/// Highest score first; equal scores keep roster order
fn rank_by_score(cards: &[ScoreCard]) -> Vec<&ScoreCard> {
    let mut ranked: Vec<&ScoreCard> = cards.iter().collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

fn split_premiere_groups(ranked: &[&ScoreCard]) -> PlacementOutcome {
    let n = ranked.len();
    PlacementOutcome {
        winner: ranked.first().map(|c| c.id.clone()),
        top2: ranked.get(1).map(|c| c.id.clone()),
        highs: ids(&ranked[n.min(2)..n.min(4)]),
        low: None,
        lipsync: Vec::new(),
    }
}

fn standard_groups(ranked: &[&ScoreCard], split: PlacementSplit) -> PlacementOutcome {
    let n = ranked.len();
    let top = &ranked[..split.top.min(n)];
    let bottom = &ranked[n.saturating_sub(split.bottom)..];

    let (low, lipsync) = match bottom.split_first() {
        Some((best_of_bottom, rest)) if split.bottom > 2 => {
            (Some(best_of_bottom.id.clone()), ids(rest))
        }
        _ => (None, ids(bottom)),
    };

    PlacementOutcome {
        winner: top.first().map(|c| c.id.clone()),
        top2: None,
        highs: top.get(1..).map(ids).unwrap_or_default(),
        low,
        lipsync,
    }
}

fn ids(cards: &[&ScoreCard]) -> Vec<ContestantId> {
    cards.iter().map(|c| c.id.clone()).collect()
}
