//! Core types for Pawhouse: pet records, attribute vectors, and roster parsing.
//!
//! This crate holds the data shapes shared by the simulation engine and its
//! consumers. It performs no I/O; callers hand it JSON text and get typed
//! rosters back.

pub mod error;
pub mod pet;
pub mod roster;

pub use error::{CoreError, CoreResult};
pub use pet::{Age, AttributeSet, PetRecord};
pub use roster::Roster;
