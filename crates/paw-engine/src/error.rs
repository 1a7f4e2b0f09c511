//! Error types for the season engine.

use thiserror::Error;

/// Alias for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;

/// The only failures the engine surfaces are input-validation ones; every
/// in-game edge (no eligible voters, ties, empty pools) is a policy
/// decision inside the simulation, not an error.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The roster contains no pets.
    #[error("roster is empty")]
    EmptyRoster,

    /// The roster is too small to ever finish a season. With 2 or 3 pets
    /// every round's nomination pool is structurally empty, so no eviction
    /// can happen; at least 4 pets are required (a single pet wins by
    /// walkover).
    #[error("roster of {found} pets cannot finish a season; provide at least 4 (or exactly 1)")]
    RosterTooSmall {
        /// How many pets the roster had.
        found: usize,
    },
}
