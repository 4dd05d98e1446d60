//! Record updating - folds an episode's decisions into contestant history

use rustc_hash::{FxHashMap, FxHashSet};

use crate::contestant::{Contestant, ContestantId, EpisodeLabel, Placement};
use crate::placement::PlacementOutcome;
use crate::roster::Roster;
use crate::scoring::ScoreCard;

/// Placement for one contestant. Earlier groups take precedence when
/// they overlap: win, top2, high, low, bottom, then safe.
struct PlacementLookup<'a> {
    outcome: &'a PlacementOutcome,
    highs: FxHashSet<&'a ContestantId>,
    lipsync: FxHashSet<&'a ContestantId>,
}

impl<'a> PlacementLookup<'a> {
    fn new(outcome: &'a PlacementOutcome) -> Self {
        Self {
            outcome,
            highs: outcome.highs.iter().collect(),
            lipsync: outcome.lipsync.iter().collect(),
        }
    }

    fn placement_for(&self, id: &ContestantId) -> Placement {
        if self.outcome.winner.as_ref() == Some(id) {
            Placement::Win
        } else if self.outcome.top2.as_ref() == Some(id) {
            Placement::Top2
        } else if self.highs.contains(id) {
            Placement::High
        } else if self.outcome.low.as_ref() == Some(id) {
            Placement::Low
        } else if self.lipsync.contains(id) {
            Placement::Bottom
        } else {
            Placement::Safe
        }
    }
}

/// Build the post-episode roster.
///
/// Each active contestant gets its score record (when it has a card) and
/// exactly one placement. Only a contestant placed `Bottom` can be
/// eliminated, and only when it is `eliminated`. Eliminated contestants
/// are copied through unchanged.
pub fn apply_placements(
    roster: &Roster,
    episode: &EpisodeLabel,
    cards: &[ScoreCard],
    outcome: &PlacementOutcome,
    eliminated: Option<&ContestantId>,
) -> Roster {
    let cards: FxHashMap<&ContestantId, &ScoreCard> = cards.iter().map(|c| (&c.id, c)).collect();
    let lookup = PlacementLookup::new(outcome);

    roster.map(|c| {
        if !c.is_active() {
            return c.clone();
        }

        let scored: Contestant = match cards.get(&c.id) {
            Some(card) => c.scored(card.to_record(episode.clone())),
            None => c.clone(),
        };

        let placement = lookup.placement_for(&c.id);
        let placed = scored.placed(episode.clone(), placement);

        if placement == Placement::Bottom && eliminated == Some(&c.id) {
            tracing::info!("Episode {}: {} sashays away", episode, c.name);
            placed.eliminated()
        } else {
            placed
        }
    })
}
