//! Integration tests for episode resolution
//!
//! Runs whole episodes through the public API across many seeds and
//! checks the roster-level guarantees.

use std::collections::BTreeMap;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use runway_core::{
    resolve_episode, Category, Contestant, Engine, Episode, EpisodeLabel, Outcome, Placement, Roster,
};

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn stats(seed: u64) -> BTreeMap<Category, f64> {
    Category::ALL
        .iter()
        .enumerate()
        .map(|(i, &c)| (c, ((seed * 17 + i as u64 * 29) % 100) as f64))
        .collect()
}

/// `active` contestants plus `eliminated` already gone, with some history
fn season(active: usize, eliminated: usize) -> Roster {
    let mut contestants = Vec::new();
    for i in 0..active + eliminated {
        let mut c = Contestant::new(format!("q{}", i), format!("Queen {}", i), stats(i as u64));
        c.wins = (i % 3) as u32;
        c.highs = (i % 2) as u32;
        c.bottoms = (i % 4 == 0) as u32;
        if i >= active {
            c.bottoms += 1;
            c.is_eliminated = true;
            c.placements.push(runway_core::PlacementRecord {
                episode: EpisodeLabel::Number(1),
                placement: Placement::Bottom,
            });
        }
        contestants.push(c);
    }
    Roster::new(contestants).unwrap()
}

fn newly_eliminated(before: &Roster, after: &Roster) -> usize {
    before
        .iter()
        .zip(after.iter())
        .filter(|(b, a)| !b.is_eliminated && a.is_eliminated)
        .count()
}

// ============================================================================
// ROSTER INVARIANTS
// ============================================================================

#[test]
fn test_regular_episode_invariants() {
    init_logging();

    for active in 4..=12 {
        for seed in 0..25 {
            let before = season(active, 2);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let after = resolve_episode(&before, &Episode::new(4u32, "acting, comedy"), &mut rng).unwrap();

            assert_eq!(after.len(), before.len());

            for (b, a) in before.iter().zip(after.iter()) {
                assert_eq!(a.id, b.id, "roster order preserved");
                if b.is_eliminated {
                    assert_eq!(a, b, "eliminated contestants are frozen");
                } else {
                    assert_eq!(a.placements.len(), b.placements.len() + 1);
                    assert_eq!(a.scores.len(), b.scores.len() + 1);
                }
            }

            assert_eq!(newly_eliminated(&before, &after), 1, "active={} seed={}", active, seed);
        }
    }
}

#[test]
fn test_non_elimination_never_eliminates() {
    for seed in 0..50 {
        let before = season(7, 0);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let episode = Episode::new(5u32, "dancing").non_elimination(true);

        let after = resolve_episode(&before, &episode, &mut rng).unwrap();

        assert_eq!(newly_eliminated(&before, &after), 0);
        let bottoms = after
            .iter()
            .filter(|c| c.last_placement() == Some(Placement::Bottom))
            .count();
        assert_eq!(bottoms, 2);
    }
}

#[test]
fn test_split_premiere_shape() {
    for seed in 0..50 {
        let before = season(9, 0);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let after = resolve_episode(&before, &Episode::new(1u32, "nonelim"), &mut rng).unwrap();

        let count = |p: Placement| after.iter().filter(|c| c.last_placement() == Some(p)).count();
        assert_eq!(count(Placement::Win), 1);
        assert_eq!(count(Placement::Top2), 1);
        assert_eq!(count(Placement::High), 2);
        assert_eq!(count(Placement::Low), 0);
        assert_eq!(count(Placement::Bottom), 0);
        assert_eq!(count(Placement::Safe), 5);
        assert_eq!(newly_eliminated(&before, &after), 0);
    }
}

#[test]
fn test_finale_invariants() {
    for seed in 0..50 {
        let before = season(4, 3);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let after = resolve_episode(&before, &Episode::new("Finale", "finale"), &mut rng).unwrap();

        let max_wins = before.active().map(|c| c.wins).max().unwrap();
        let mut winners = 0;
        for (b, a) in before.iter().zip(after.iter()) {
            if b.is_eliminated {
                assert_eq!(a, b);
                continue;
            }
            assert_eq!(a.scores.len(), b.scores.len());
            match a.last_placement() {
                Some(Placement::Win) => {
                    winners += 1;
                    assert_eq!(b.wins, max_wins);
                    assert_eq!(a.wins, b.wins + 1);
                }
                Some(Placement::Finale) => assert_eq!(a.wins, b.wins),
                other => panic!("unexpected finale placement {:?}", other),
            }
        }
        assert_eq!(winners, 1);
    }
}

#[test]
fn test_input_roster_is_not_modified() {
    let before = season(6, 1);
    let snapshot = before.clone();
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let _ = resolve_episode(&before, &Episode::new(2u32, "roast"), &mut rng).unwrap();

    assert_eq!(before, snapshot);
}

// ============================================================================
// MULTI-EPISODE RUN
// ============================================================================

#[test]
fn test_consecutive_episodes_down_to_finale() {
    let engine = Engine::default();
    let mut roster = season(8, 0);
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let types = ["nonelim", "acting", "design", "singing, dancing", "roast", "makeover"];

    for (n, ty) in types.iter().enumerate() {
        let episode = Episode::new(n as u32 + 1, *ty);
        roster = engine.resolve(&roster, &episode, &mut rng).unwrap().roster;
    }

    // premiere sent nobody home; five eliminations since
    assert_eq!(roster.active_count(), 3);

    let res = engine
        .resolve(&roster, &Episode::new(7u32, "Finale"), &mut rng)
        .unwrap();
    assert!(matches!(res.outcome, Outcome::Finale { .. }));

    let crowned: Vec<_> = res
        .roster
        .iter()
        .filter(|c| c.last_placement() == Some(Placement::Win) && c.placements.len() == 7)
        .collect();
    assert_eq!(crowned.len(), 1);
}

#[test]
fn test_roster_json_round_trip_after_episode() {
    let before = season(5, 1);
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let after = resolve_episode(&before, &Episode::new("Week 3", "comedy"), &mut rng).unwrap();

    let json = serde_json::to_string(&after).unwrap();
    let back: Roster = serde_json::from_str(&json).unwrap();

    assert_eq!(back.len(), after.len());
    for (b, a) in back.iter().zip(after.iter()) {
        assert_eq!(b.id, a.id);
        assert_eq!(b.placements, a.placements);
        assert_eq!(b.is_eliminated, a.is_eliminated);
        assert_eq!(b.scores.len(), a.scores.len());
    }
    assert_eq!(
        back.get(&"q0".into()).and_then(|c| c.placements.last()).map(|p| &p.episode),
        Some(&EpisodeLabel::Text("Week 3".to_string()))
    );
}
