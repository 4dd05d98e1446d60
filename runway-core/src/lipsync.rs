//! Lip-sync judging - picks who goes home from the bottom group

use crate::contestant::{ContestantId, Counters};
use crate::draws::Draws;

/// A contestant lip-syncing, with history as it stood before the episode
#[derive(Clone, Debug, PartialEq)]
pub struct LipSyncEntry {
    pub id: ContestantId,
    pub counters: Counters,
}

/// roll + wins + 0.5*highs - 0.6*lows - 2*bottoms
pub fn lipsync_score(roll: u32, counters: &Counters) -> f64 {
    f64::from(roll) + f64::from(counters.wins) + 0.5 * f64::from(counters.highs)
        - 0.6 * f64::from(counters.lows)
        - 2.0 * f64::from(counters.bottoms)
}

/// Run the lip-sync and return the eliminated contestant.
///
/// Every entry draws one roll, in group order. The strictly lowest
/// score goes home; on a tie the earlier entry does. An empty group
/// eliminates nobody.
pub fn judge_lipsync<D: Draws + ?Sized>(group: &[LipSyncEntry], draws: &mut D) -> Option<ContestantId> {
    let mut lowest: Option<(&ContestantId, f64)> = None;

    for entry in group {
        let score = lipsync_score(draws.lipsync_roll(), &entry.counters);
        tracing::debug!("Lip-sync {}: {:.1}", entry.id, score);

        match lowest {
            Some((_, best)) if score >= best => {}
            _ => lowest = Some((&entry.id, score)),
        }
    }

    lowest.map(|(id, _)| id.clone())
}
