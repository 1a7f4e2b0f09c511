//! Pure scoring models over attribute vectors.
//!
//! Everything here is a side-effect-free function of one or two
//! [`AttributeSet`]s. The stateful public score (group statistics, streak
//! fatigue, mood, noise) lives on the engine; these are the building blocks
//! the phases combine.

use paw_core::AttributeSet;

fn avg(a: u8, b: u8) -> f64 {
    f64::from(a + b) / 2.0
}

/// Popularity a pet enters the house with, before jitter: a base of 10 plus
/// charm (sociable, needy, curious) and entertainment potential (drama,
/// loud).
pub fn base_popularity(a: &AttributeSet) -> f64 {
    10.0 + 0.75 * f64::from(a.sociable)
        + 0.6 * f64::from(a.needy)
        + 0.6 * f64::from(a.curious)
        + 0.5 * f64::from(a.drama)
        + 0.2 * f64::from(a.loud)
}

/// Pairwise compatibility. Sociable and curious pairs bond; territorial
/// pairs and a wide drama gap get in the way. Symmetric.
pub fn affinity(a: &AttributeSet, b: &AttributeSet) -> f64 {
    let drama_gap = f64::from(a.drama.abs_diff(b.drama));
    1.2 * avg(a.sociable, b.sociable) + 0.8 * avg(a.curious, b.curious)
        - 0.8 * avg(a.territorial, b.territorial)
        - 0.5 * drama_gap
}

/// Pairwise friction. Stubborn, territorial, loud pairs clash; shared
/// sociability defuses. Symmetric.
pub fn conflict(a: &AttributeSet, b: &AttributeSet) -> f64 {
    1.1 * avg(a.stubborn, b.stubborn) + 1.0 * avg(a.territorial, b.territorial)
        + 0.7 * avg(a.loud, b.loud)
        - 0.9 * avg(a.sociable, b.sociable)
}

/// Raw merit in Leader/Angel trials. Energy and curiosity carry, a bit of
/// stubbornness reads as persistence, drama costs focus.
pub fn trial_performance(a: &AttributeSet) -> f64 {
    1.2 * f64::from(a.energetic) + 1.0 * f64::from(a.curious) + 0.4 * f64::from(a.stubborn)
        - 0.3 * f64::from(a.drama)
}

/// Popularity swing from a party night. Energetic and sociable pets shine;
/// loud and dramatic ones cut both ways, hence the negative offset.
pub fn party_delta(a: &AttributeSet) -> f64 {
    0.5 * f64::from(a.energetic) + 0.8 * f64::from(a.sociable) + 0.3 * f64::from(a.drama)
        + 0.7 * f64::from(a.loud)
        - 3.3
}

/// Which side of a fight the public blames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FightFault {
    /// The first pet started it.
    First,
    /// The second pet started it.
    Second,
    /// Six of one, half a dozen of the other.
    Both,
}

/// Popularity deltas `(first, second)` from a fight: both sides wear a base
/// cost, the instigator wears an extra one.
pub fn fight_deltas(fault: FightFault) -> (f64, f64) {
    let base = -1.0;
    match fault {
        FightFault::First => (base - 0.8, base),
        FightFault::Second => (base, base - 0.8),
        FightFault::Both => (base, base),
    }
}
