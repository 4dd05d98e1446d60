//! Finale resolution - crowning a winner among the top-win finalists

use crate::contestant::{ContestantId, EpisodeLabel, Placement};
use crate::draws::Draws;
use crate::error::{EngineError, Result};
use crate::roster::Roster;

/// Active contestants sharing the highest win count, in roster order
pub fn finalists(roster: &Roster) -> Vec<ContestantId> {
    let Some(max_wins) = roster.active().map(|c| c.wins).max() else {
        return Vec::new();
    };

    roster
        .active()
        .filter(|c| c.wins == max_wins)
        .map(|c| c.id.clone())
        .collect()
}

/// Crown a finale winner and return the new roster plus the winner.
///
/// The winner is drawn uniformly among [`finalists`]. The winner places
/// `Win` (wins + 1); every other active contestant places `Finale`.
/// Eliminated contestants pass through untouched and no score records
/// are added.
pub fn resolve_finale<D: Draws + ?Sized>(
    roster: &Roster,
    episode: &EpisodeLabel,
    draws: &mut D,
) -> Result<(Roster, ContestantId)> {
    let finalists = finalists(roster);
    if finalists.is_empty() {
        return Err(EngineError::NoActiveContestants);
    }

    let winner = finalists[draws.pick(finalists.len())].clone();
    tracing::info!(
        "Finale {}: {} crowned from {} finalist(s)",
        episode,
        winner,
        finalists.len()
    );

    let next = roster.map(|c| {
        if !c.is_active() {
            c.clone()
        } else if c.id == winner {
            c.placed(episode.clone(), Placement::Win)
        } else {
            c.placed(episode.clone(), Placement::Finale)
        }
    });

    Ok((next, winner))
}
