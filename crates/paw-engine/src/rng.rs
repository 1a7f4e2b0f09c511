//! Seeded deterministic random number generation.
//!
//! The engine's entire output is a pure function of the seed and the exact
//! sequence of draws made from [`SeededRng`]. The generator is the classic
//! Numerical Recipes 32-bit LCG; string seeds are reduced to a 32-bit state
//! with FNV-1a hashed over UTF-16 code units. The round controller documents
//! (and must preserve) its per-phase draw order: inserting, removing, or
//! reordering a single draw changes every downstream result for a seed.

use std::fmt;

use serde::{Deserialize, Serialize};

const LCG_MUL: u32 = 1_664_525;
const LCG_ADD: u32 = 1_013_904_223;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// FNV-1a, 32-bit, folded over UTF-16 code units so accented pet names hash
/// identically across platforms.
pub fn fnv1a(text: &str) -> u32 {
    let mut hash: u32 = 2_166_136_261;
    for unit in text.encode_utf16() {
        hash ^= u32::from(unit);
        hash = hash.wrapping_mul(16_777_619);
    }
    hash
}

/// A simulation seed: a number or arbitrary text.
///
/// Numbers are coerced to unsigned 32-bit by two's-complement truncation;
/// text is hashed with [`fnv1a`]. The textual form (via `Display`) also
/// feeds the per-contestant [`name_jitter`], so `Seed::Number(42)` and
/// `Seed::Text("42".into())` are *not* interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seed {
    /// A numeric seed.
    Number(i64),
    /// A textual seed.
    Text(String),
}

impl Seed {
    /// Parse user input: anything that reads as an integer is a numeric
    /// seed, everything else is text.
    pub fn parse(input: &str) -> Self {
        input
            .parse::<i64>()
            .map_or_else(|_| Self::Text(input.to_string()), Self::Number)
    }

    fn state(&self) -> u32 {
        match self {
            Self::Number(n) => *n as u32,
            Self::Text(s) => fnv1a(s),
        }
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for Seed {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Seed {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

/// The Numerical Recipes linear-congruential generator:
/// `state = 1664525 * state + 1013904223 (mod 2^32)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    /// Create a generator from a seed.
    pub fn new(seed: &Seed) -> Self {
        Self { state: seed.state() }
    }

    fn from_state(state: u32) -> Self {
        Self { state }
    }

    /// Advance the state and return a uniform draw in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(LCG_MUL).wrapping_add(LCG_ADD);
        f64::from(self.state) / TWO_POW_32
    }

    /// Pick a uniform element. `items` must be non-empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let idx = (self.next_unit() * items.len() as f64) as usize;
        &items[idx]
    }

    /// Uniform integer in `[min, max]` inclusive.
    pub fn range(&mut self, min: i32, max: i32) -> i32 {
        min + (self.next_unit() * f64::from(max - min + 1)) as i32
    }

    /// Bernoulli draw: `true` with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_unit() < p
    }

    /// In-place Fisher-Yates shuffle, walking from the back. Consumes
    /// `len - 1` draws for any slice with two or more elements.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = (self.next_unit() * (i as f64 + 1.0)) as usize;
            items.swap(i, j);
        }
    }
}

/// Pick one of `items` with probability proportional to `weight`.
///
/// Weights are evaluated first, in item order; the weight function may
/// itself draw from the RNG (trial luck does), and those draws land in a
/// fixed order. A zero weight total falls back to 1, and the final item is
/// the fallback when rounding walks off the end. `items` must be non-empty;
/// callers pre-filter candidates so that is guaranteed by construction.
pub fn weighted_pick<T: Copy>(
    rng: &mut SeededRng,
    items: &[T],
    mut weight: impl FnMut(&mut SeededRng, T) -> f64,
) -> T {
    let weights: Vec<f64> = items.iter().map(|&item| weight(rng, item)).collect();
    let total: f64 = weights.iter().sum();
    let total = if total == 0.0 { 1.0 } else { total };
    let mut x = rng.next_unit() * total;
    for (i, &item) in items.iter().enumerate() {
        x -= weights[i];
        if x <= 0.0 {
            return item;
        }
    }
    items[items.len() - 1]
}

/// Sum of three uniforms, centered and scaled: approximately normal noise
/// with a hard range of (-1.2, 1.2).
pub fn triple_jitter(rng: &mut SeededRng) -> f64 {
    (rng.next_unit() + rng.next_unit() + rng.next_unit() - 1.5) * 0.8
}

/// A small deterministic offset derived from `(seed, name)` alone,
/// independent of the main RNG's draw position. Hashes `"{seed}|{name}"`
/// into a throwaway LCG and takes one [`triple_jitter`]. Applied once per
/// contestant at initialization.
pub fn name_jitter(seed: &Seed, name: &str) -> f64 {
    let mut local = SeededRng::from_state(fnv1a(&format!("{seed}|{name}")));
    triple_jitter(&mut local)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fnv1a_reference_vectors() {
        assert_eq!(fnv1a(""), 0x811c_9dc5);
        assert_eq!(fnv1a("a"), 0xe40c_292c);
        assert_eq!(fnv1a("foobar"), 0xbf9c_f968);
    }

    #[test]
    fn seed_parse_numeric_and_text() {
        assert_eq!(Seed::parse("42"), Seed::Number(42));
        assert_eq!(Seed::parse("-7"), Seed::Number(-7));
        assert_eq!(Seed::parse("fluffy"), Seed::Text("fluffy".to_string()));
        assert_eq!(Seed::parse("4.2"), Seed::Text("4.2".to_string()));
    }

    #[test]
    fn seed_display_matches_input() {
        assert_eq!(Seed::Number(42).to_string(), "42");
        assert_eq!(Seed::Text("fluffy".into()).to_string(), "fluffy");
    }

    #[test]
    fn negative_seed_wraps_to_u32() {
        assert_eq!(Seed::Number(-1).state(), u32::MAX);
        assert_eq!(Seed::Number(i64::from(u32::MAX) + 43).state(), 42);
    }

    #[test]
    fn first_draw_from_seed_42() {
        // 1664525 * 42 + 1013904223 = 1083814273
        let mut rng = SeededRng::new(&Seed::Number(42));
        assert_eq!(rng.next_unit(), 1_083_814_273.0 / TWO_POW_32);
    }

    #[test]
    fn draws_stay_in_unit_interval() {
        let mut rng = SeededRng::new(&Seed::Number(7));
        for _ in 0..10_000 {
            let x = rng.next_unit();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SeededRng::new(&Seed::Text("fluffy".into()));
        let mut b = SeededRng::new(&Seed::Text("fluffy".into()));
        for _ in 0..100 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SeededRng::new(&Seed::Number(1));
        let mut b = SeededRng::new(&Seed::Number(2));
        let a_draws: Vec<f64> = (0..8).map(|_| a.next_unit()).collect();
        let b_draws: Vec<f64> = (0..8).map(|_| b.next_unit()).collect();
        assert_ne!(a_draws, b_draws);
    }

    #[test]
    fn pick_returns_member() {
        let items = ["a", "b", "c"];
        let mut rng = SeededRng::new(&Seed::Number(3));
        for _ in 0..50 {
            assert!(items.contains(rng.pick(&items)));
        }
    }

    #[test]
    fn range_is_inclusive_and_bounded() {
        let mut rng = SeededRng::new(&Seed::Number(9));
        let mut seen = [false; 3];
        for _ in 0..200 {
            let v = rng.range(-1, 1);
            assert!((-1..=1).contains(&v));
            seen[(v + 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "all values in [-1, 1] should appear");
    }

    #[test]
    fn chance_extremes() {
        let mut rng = SeededRng::new(&Seed::Number(11));
        for _ in 0..100 {
            assert!(rng.chance(1.0));
        }
        for _ in 0..100 {
            assert!(!rng.chance(0.0));
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = SeededRng::new(&Seed::Number(5));
        let mut items: Vec<u32> = (0..20).collect();
        rng.shuffle(&mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<u32>>());
    }

    #[test]
    fn shuffle_deterministic_per_seed() {
        let shuffle_with = |seed: i64| {
            let mut rng = SeededRng::new(&Seed::Number(seed));
            let mut items: Vec<u32> = (0..10).collect();
            rng.shuffle(&mut items);
            items
        };
        assert_eq!(shuffle_with(42), shuffle_with(42));
        assert_ne!(shuffle_with(42), shuffle_with(43));
    }

    #[test]
    fn weighted_pick_dominant_weight_wins() {
        let mut rng = SeededRng::new(&Seed::Number(1));
        let picked = weighted_pick(&mut rng, &[0_usize, 1, 2], |_, i| {
            if i == 1 { 1.0 } else { 0.0 }
        });
        assert_eq!(picked, 1);
    }

    #[test]
    fn weighted_pick_zero_total_falls_back_to_last() {
        let mut rng = SeededRng::new(&Seed::Number(1));
        let picked = weighted_pick(&mut rng, &[10_usize, 20, 30], |_, _| 0.0);
        assert_eq!(picked, 30);
    }

    #[test]
    fn weighted_pick_consumes_weight_draws_in_order() {
        // Two picks over the same items with an RNG-consuming weight must
        // stay aligned across runs.
        let run = || {
            let mut rng = SeededRng::new(&Seed::Number(77));
            let a = weighted_pick(&mut rng, &[0_usize, 1, 2], |rng, _| 0.5 + rng.next_unit());
            let b = weighted_pick(&mut rng, &[0_usize, 1, 2], |rng, _| 0.5 + rng.next_unit());
            (a, b)
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn name_jitter_is_stable_and_bounded() {
        let seed = Seed::Number(42);
        let j1 = name_jitter(&seed, "Biscuit");
        let j2 = name_jitter(&seed, "Biscuit");
        assert_eq!(j1, j2);
        assert!(j1.abs() < 1.2);
    }

    #[test]
    fn name_jitter_varies_by_name_and_seed() {
        let seed = Seed::Number(42);
        assert_ne!(name_jitter(&seed, "Biscuit"), name_jitter(&seed, "Mochi"));
        assert_ne!(
            name_jitter(&Seed::Number(1), "Biscuit"),
            name_jitter(&Seed::Number(2), "Biscuit")
        );
    }

    #[test]
    fn name_jitter_ignores_main_rng_position() {
        let seed = Seed::Number(42);
        let mut rng = SeededRng::new(&seed);
        let before = name_jitter(&seed, "Rex");
        let _ = rng.next_unit();
        let _ = rng.next_unit();
        assert_eq!(before, name_jitter(&seed, "Rex"));
    }

    #[test]
    fn seed_serde_untagged() {
        let n: Seed = serde_json::from_str("42").unwrap();
        assert_eq!(n, Seed::Number(42));
        let t: Seed = serde_json::from_str(r#""fluffy""#).unwrap();
        assert_eq!(t, Seed::Text("fluffy".to_string()));
        assert_eq!(serde_json::to_string(&n).unwrap(), "42");
    }
}
