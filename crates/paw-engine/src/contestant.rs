//! Per-contestant game state.

use std::collections::BTreeSet;

use paw_core::{AttributeSet, PetRecord};
use serde::{Deserialize, Serialize};

/// One pet inside the house: the roster record plus everything the game
/// mutates. Elimination is a flag, never removal: the contestant list keeps
/// its size and order for the whole season.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contestant {
    /// The roster record this contestant was created from.
    pub record: PetRecord,
    /// Public standing; pulled toward a center by compression and
    /// regression, so unbounded only in principle.
    pub popularity: f64,
    /// Set exactly once, at eviction. Never reset.
    pub eliminated: bool,
    /// Names of pets with a positive bond. Symmetric with the other side's
    /// set; mutate only through the season-state helpers.
    pub allies: BTreeSet<String>,
    /// Names of pets with a negative bond. Symmetric, and disjoint from
    /// `allies` for any given pair.
    pub rivals: BTreeSet<String>,
    /// Consecutive Leader trial wins.
    pub leader_streak: u32,
    /// Consecutive Angel trial wins.
    pub angel_streak: u32,
}

impl Contestant {
    /// Enter a pet into the house with its opening popularity.
    pub fn new(record: PetRecord, popularity: f64) -> Self {
        Self {
            record,
            popularity,
            eliminated: false,
            allies: BTreeSet::new(),
            rivals: BTreeSet::new(),
            leader_streak: 0,
            angel_streak: 0,
        }
    }

    /// The contestant's name (the key used everywhere).
    pub fn name(&self) -> &str {
        &self.record.name
    }

    /// The read-only attribute vector.
    pub fn attributes(&self) -> &AttributeSet {
        &self.record.attributes
    }
}
