//! Deterministic reality-show simulation engine for Pawhouse.
//!
//! Given a roster of pets and a seed, a season runs to completion in one
//! synchronous call and yields a narrated transcript, a structured
//! per-round history, and a single winner. The same seed and roster always
//! produce the same outcome: the engine draws from one seeded LCG in a
//! documented, fixed order (see [`engine`] and [`rng`]).
//!
//! Each season owns its state and RNG outright, so independent seasons may
//! run on separate threads with no coordination.

pub mod contestant;
pub mod engine;
pub mod error;
pub mod history;
pub mod percent;
pub mod rng;
pub mod score;
pub mod state;
pub mod transcript;
pub mod tuning;

pub use engine::{Season, SimOptions, simulate};
pub use error::{EngineError, EngineResult};
pub use history::{BlockRecord, FinaleRecord, History, Outcome, TrialWin, Vote, VoteRound};
pub use rng::{Seed, SeededRng};
pub use tuning::Tuning;
