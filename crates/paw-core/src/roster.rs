//! Roster parsing and validation.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::pet::PetRecord;

/// An ordered list of pets entering the house. Input order is preserved and
/// meaningful: the engine iterates contestants in roster order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    pets: Vec<PetRecord>,
}

impl Roster {
    /// Build a roster from already-typed records. Fails on an empty list.
    pub fn new(pets: Vec<PetRecord>) -> CoreResult<Self> {
        if pets.is_empty() {
            return Err(CoreError::EmptyRoster);
        }
        Ok(Self { pets })
    }

    /// Parse a roster from JSON text (a top-level array of pet records).
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let pets: Vec<PetRecord> = serde_json::from_str(json)?;
        Self::new(pets)
    }

    /// The pets, in input order.
    pub fn pets(&self) -> &[PetRecord] {
        &self.pets
    }

    /// Number of pets in the roster.
    pub fn len(&self) -> usize {
        self.pets.len()
    }

    /// Whether the roster is empty. Construction rejects empty rosters, so
    /// this is only `true` for `Roster::default()`.
    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }
}
