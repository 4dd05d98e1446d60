//! Roster - ordered, id-unique collection of contestants

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::contestant::{Contestant, ContestantId};
use crate::error::{EngineError, Result};

/// All contestants of a season, active or eliminated, in caller order
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Contestant>", into = "Vec<Contestant>")]
pub struct Roster {
    contestants: Vec<Contestant>,
}

impl Roster {
    /// Build a roster, rejecting duplicate ids
    pub fn new(contestants: Vec<Contestant>) -> Result<Self> {
        let mut seen = FxHashSet::default();
        for c in &contestants {
            if !seen.insert(&c.id) {
                return Err(EngineError::DuplicateContestant(c.id.clone()));
            }
        }
        Ok(Self { contestants })
    }

    pub fn len(&self) -> usize {
        self.contestants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contestants.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contestant> {
        self.contestants.iter()
    }

    pub fn as_slice(&self) -> &[Contestant] {
        &self.contestants
    }

    /// Contestants still in the competition
    pub fn active(&self) -> impl Iterator<Item = &Contestant> {
        self.contestants.iter().filter(|c| c.is_active())
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    pub fn get(&self, id: &ContestantId) -> Option<&Contestant> {
        self.contestants.iter().find(|c| &c.id == id)
    }

    /// Rebuild from a per-contestant mapping, keeping order and ids
    pub(crate) fn map<F>(&self, f: F) -> Roster
    where
        F: FnMut(&Contestant) -> Contestant,
    {
        Roster {
            contestants: self.contestants.iter().map(f).collect(),
        }
    }
}

impl TryFrom<Vec<Contestant>> for Roster {
    type Error = EngineError;

    fn try_from(contestants: Vec<Contestant>) -> Result<Self> {
        Roster::new(contestants)
    }
}

impl From<Roster> for Vec<Contestant> {
    fn from(roster: Roster) -> Self {
        roster.contestants
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Contestant;
    type IntoIter = std::slice::Iter<'a, Contestant>;

    fn into_iter(self) -> Self::IntoIter {
        self.contestants.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = Roster::new(vec![
            Contestant::with_uniform_stats("a", "Alpha", 50.0),
            Contestant::with_uniform_stats("b", "Beta", 50.0),
            Contestant::with_uniform_stats("a", "Alpha Again", 50.0),
        ])
        .unwrap_err();

        assert!(matches!(err, EngineError::DuplicateContestant(id) if id.as_str() == "a"));
    }

    #[test]
    fn test_active_skips_eliminated() {
        let roster = Roster::new(vec![
            Contestant::with_uniform_stats("a", "Alpha", 50.0),
            Contestant::with_uniform_stats("b", "Beta", 50.0).eliminated(),
            Contestant::with_uniform_stats("c", "Gamma", 50.0),
        ])
        .unwrap();

        let ids: Vec<&str> = roster.active().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(roster.active_count(), 2);
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"[
            {"id": "a", "name": "Alpha", "stats": {}},
            {"id": "a", "name": "Alpha", "stats": {}}
        ]"#;
        assert!(serde_json::from_str::<Roster>(json).is_err());
    }

    #[test]
    fn test_get_by_id() {
        let roster = Roster::new(vec![Contestant::with_uniform_stats("a", "Alpha", 50.0)]).unwrap();
        assert_eq!(roster.get(&"a".into()).map(|c| c.name.as_str()), Some("Alpha"));
        assert!(roster.get(&"zz".into()).is_none());
    }
}
