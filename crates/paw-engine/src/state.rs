//! Season state: the contestant collection and its invariants.

use serde::{Deserialize, Serialize};

use crate::contestant::Contestant;
use crate::history::History;

/// Everything a running season owns besides the RNG and the transcript.
/// Constructed at season start, mutated only by the round controller,
/// discarded once the outcome is returned.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeasonState {
    /// Round counter, starting at 1.
    pub day: u32,
    /// All contestants, in roster order, eliminated ones included.
    pub contestants: Vec<Contestant>,
    /// Structured per-round record of outcomes.
    pub history: History,
}

impl SeasonState {
    /// Indices of contestants still in the game, in roster order.
    pub fn active_indices(&self) -> Vec<usize> {
        self.contestants
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.eliminated)
            .map(|(i, _)| i)
            .collect()
    }

    /// How many contestants are still in the game.
    pub fn active_count(&self) -> usize {
        self.contestants.iter().filter(|c| !c.eliminated).count()
    }

    /// Whether the two contestants are allied. Symmetric by invariant, so
    /// one side's set is authoritative.
    pub fn are_allies(&self, a: usize, b: usize) -> bool {
        self.contestants[a]
            .allies
            .contains(self.contestants[b].name())
    }

    /// Whether the two contestants are rivals.
    pub fn are_rivals(&self, a: usize, b: usize) -> bool {
        self.contestants[a]
            .rivals
            .contains(self.contestants[b].name())
    }

    /// Form a mutual alliance, clearing any rivalry between the pair.
    /// Always mutates both sides; the sets stay symmetric and disjoint.
    pub fn befriend(&mut self, a: usize, b: usize) {
        let name_a = self.contestants[a].name().to_string();
        let name_b = self.contestants[b].name().to_string();
        self.contestants[a].allies.insert(name_b.clone());
        self.contestants[b].allies.insert(name_a.clone());
        self.contestants[a].rivals.remove(&name_b);
        self.contestants[b].rivals.remove(&name_a);
    }

    /// Make the pair mutual rivals. Clears any alliance between them so the
    /// sets stay disjoint (fights are only ever drawn from non-allied
    /// pairs, so the removal is a no-op in practice).
    pub fn embitter(&mut self, a: usize, b: usize) {
        let name_a = self.contestants[a].name().to_string();
        let name_b = self.contestants[b].name().to_string();
        self.contestants[a].rivals.insert(name_b.clone());
        self.contestants[b].rivals.insert(name_a.clone());
        self.contestants[a].allies.remove(&name_b);
        self.contestants[b].allies.remove(&name_a);
    }

    /// Look up a contestant index by name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.contestants.iter().position(|c| c.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paw_core::{AttributeSet, PetRecord};

    fn state_with(names: &[&str]) -> SeasonState {
        SeasonState {
            day: 1,
            contestants: names
                .iter()
                .map(|n| Contestant::new(PetRecord::new(*n, AttributeSet::default()), 14.0))
                .collect(),
            history: History::default(),
        }
    }

    #[test]
    fn active_indices_skip_eliminated() {
        let mut s = state_with(&["A", "B", "C"]);
        s.contestants[1].eliminated = true;
        assert_eq!(s.active_indices(), vec![0, 2]);
        assert_eq!(s.active_count(), 2);
    }

    #[test]
    fn befriend_is_symmetric() {
        let mut s = state_with(&["A", "B"]);
        s.befriend(0, 1);
        assert!(s.are_allies(0, 1));
        assert!(s.are_allies(1, 0));
        assert!(s.contestants[0].allies.contains("B"));
        assert!(s.contestants[1].allies.contains("A"));
    }

    #[test]
    fn befriend_clears_rivalry_both_ways() {
        let mut s = state_with(&["A", "B"]);
        s.embitter(0, 1);
        assert!(s.are_rivals(0, 1));
        s.befriend(0, 1);
        assert!(s.are_allies(0, 1));
        assert!(!s.are_rivals(0, 1));
        assert!(!s.are_rivals(1, 0));
    }

    #[test]
    fn embitter_clears_alliance_both_ways() {
        let mut s = state_with(&["A", "B"]);
        s.befriend(0, 1);
        s.embitter(0, 1);
        assert!(s.are_rivals(0, 1));
        assert!(!s.are_allies(0, 1));
        assert!(!s.are_allies(1, 0));
    }

    #[test]
    fn index_of_finds_by_name() {
        let s = state_with(&["A", "B", "C"]);
        assert_eq!(s.index_of("B"), Some(1));
        assert_eq!(s.index_of("Z"), None);
    }
}
