//! Runway Core - episode resolution for an elimination competition
//!
//! This crate turns a roster and an episode description into the next
//! roster:
//! - Category lookup (which skills an episode type rewards)
//! - Episode scoring from stats and a random base draw
//! - Placement groups by cast size (win, high, low, bottom, safe)
//! - Lip-sync elimination over the bottom group
//! - Finale winner selection among the top-win finalists
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: Engine::resolve (orchestration)
//! - Level 2: resolve_finale, resolve_placements, judge_lipsync, apply_placements (phases)
//! - Level 3: score_contestant, stat_increase, lipsync_score (steps)
//! - Level 4: CategoryTable, placement_split, configuration

pub mod categories;
pub mod contestant;
pub mod draws;
pub mod episode;
pub mod error;
pub mod finale;
pub mod lipsync;
pub mod placement;
pub mod record;
pub mod roster;
pub mod scoring;

// Re-exports for convenient access
pub use categories::{CategoryTable, EpisodeType};
pub use contestant::{
    Category, Contestant, ContestantId, Counters, EpisodeLabel, Placement, PlacementRecord, ScoreRecord,
};
pub use draws::Draws;
pub use episode::{resolve_episode, Engine, Episode, EpisodeResolution, Outcome, SeasonStyle};
pub use error::{EngineError, Result};
pub use finale::{finalists, resolve_finale};
pub use lipsync::{judge_lipsync, lipsync_score, LipSyncEntry};
pub use placement::{placement_split, resolve_placements, PlacementOutcome, PlacementSplit};
pub use record::apply_placements;
pub use roster::Roster;
pub use scoring::{reputation_bias, score_contestant, stat_increase, ScoreCard};
