//! Balance coefficients for the season engine.
//!
//! Every numeric knob the simulation uses lives here, grouped by the part of
//! the game it steers. Algorithm code reads named fields only, so rebalancing
//! never touches phase logic. Defaults are the values the show ships with.

/// Top-level tuning for a season.
#[derive(Debug, Clone)]
pub struct Tuning {
    /// Amplitude multiplier for the daily public mood swing.
    pub mood_swing: f64,
    /// Spread of the per-draw noise inside the public score.
    pub public_noise: f64,
    /// Daily regression-to-the-mean fraction applied to every popularity.
    pub regression: f64,
    /// Penalty per point of popularity above one standard deviation over
    /// the group mean.
    pub anti_dominance: f64,
    /// Public-opinion knobs (trait penalties, ally bonuses, fatigue).
    pub public: PublicOpinion,
    /// House-vote antipathy knobs.
    pub house: HouseVote,
    /// Trial merit/luck split and winner boosts.
    pub trials: Trials,
    /// Popularity compression toward a fixed center.
    pub soft_cap: SoftCap,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            mood_swing: 1.0,
            public_noise: 2.0,
            regression: 0.2,
            anti_dominance: 0.6,
            public: PublicOpinion::default(),
            house: HouseVote::default(),
            trials: Trials::default(),
            soft_cap: SoftCap::default(),
        }
    }
}

/// How the viewing public weighs traits, friendships, and win streaks.
#[derive(Debug, Clone)]
pub struct PublicOpinion {
    /// Penalty per point of loudness above 3.
    pub loud_penalty: f64,
    /// Penalty per point of stubbornness above 3.
    pub stubborn_penalty: f64,
    /// Bonus per point of loudness below 3.
    pub quiet_bonus: f64,
    /// Bonus per point of stubbornness below 3.
    pub easygoing_bonus: f64,
    /// How many living allies count toward the public score.
    pub allies_cap: usize,
    /// Bonus per counted living ally.
    pub ally_bonus: f64,
    /// Public fatigue per consecutive trial win beyond the first.
    pub fatigue_per_streak: f64,
    /// Daily popularity boost for the bottom quartile.
    pub underdog_boost: f64,
}

impl Default for PublicOpinion {
    fn default() -> Self {
        Self {
            loud_penalty: 1.0,
            stubborn_penalty: 0.8,
            quiet_bonus: 0.25,
            easygoing_bonus: 0.2,
            allies_cap: 2,
            ally_bonus: 0.45,
            fatigue_per_streak: 0.35,
            underdog_boost: 0.6,
        }
    }
}

/// How housemates weigh traits and strength when casting votes.
#[derive(Debug, Clone)]
pub struct HouseVote {
    /// Antipathy per point of loudness away from 3.
    pub loud: f64,
    /// Antipathy per point of territoriality away from 3.
    pub territorial: f64,
    /// Antipathy per point of stubbornness away from 3.
    pub stubborn: f64,
    /// Extra targeting of pets whose popularity runs high.
    pub target_strong: f64,
    /// Lower clamp on the trait antipathy factor.
    pub antipathy_min: f64,
    /// Upper clamp on the trait antipathy factor.
    pub antipathy_max: f64,
}

impl Default for HouseVote {
    fn default() -> Self {
        Self {
            loud: 0.22,
            territorial: 0.2,
            stubborn: 0.2,
            target_strong: 0.2,
            antipathy_min: 0.7,
            antipathy_max: 2.4,
        }
    }
}

/// Merit versus luck in trials, and the winners' popularity boosts.
#[derive(Debug, Clone)]
pub struct Trials {
    /// Weight of trial performance in the pick.
    pub merit: f64,
    /// Weight of the per-candidate luck draw in the pick.
    pub luck: f64,
    /// Flat popularity boost for the Leader.
    pub leader_boost: f64,
    /// Flat popularity boost for the Angel.
    pub angel_boost: f64,
}

impl Default for Trials {
    fn default() -> Self {
        Self {
            merit: 0.5,
            luck: 0.5,
            leader_boost: 0.7,
            angel_boost: 0.45,
        }
    }
}

/// Soft compression pulling every popularity toward a fixed center, so no
/// score runs away in either direction.
#[derive(Debug, Clone)]
pub struct SoftCap {
    /// The center popularity values are pulled toward.
    pub center: f64,
    /// Fraction of the distance to the center closed per application.
    pub strength: f64,
}

impl SoftCap {
    /// Move `popularity` toward the center by the configured fraction.
    pub fn compress(&self, popularity: f64) -> f64 {
        popularity + self.strength * (self.center - popularity)
    }
}

impl Default for SoftCap {
    fn default() -> Self {
        Self {
            center: 14.0,
            strength: 0.12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_balance() {
        let t = Tuning::default();
        assert_eq!(t.regression, 0.2);
        assert_eq!(t.anti_dominance, 0.6);
        assert_eq!(t.public.allies_cap, 2);
        assert_eq!(t.public.ally_bonus, 0.45);
        assert_eq!(t.house.antipathy_min, 0.7);
        assert_eq!(t.house.antipathy_max, 2.4);
        assert_eq!(t.trials.merit, 0.5);
        assert_eq!(t.trials.luck, 0.5);
        assert_eq!(t.soft_cap.center, 14.0);
    }

    #[test]
    fn compress_moves_toward_center_from_both_sides() {
        let cap = SoftCap::default();
        assert!(cap.compress(20.0) < 20.0);
        assert!(cap.compress(20.0) > 14.0);
        assert!(cap.compress(8.0) > 8.0);
        assert!(cap.compress(8.0) < 14.0);
        assert_eq!(cap.compress(14.0), 14.0);
    }

    #[test]
    fn compress_is_proportional_to_distance() {
        let cap = SoftCap::default();
        let near = cap.compress(15.0) - 14.0;
        let far = cap.compress(24.0) - 14.0;
        assert!(far / near > 9.9 && far / near < 10.1);
    }
}
