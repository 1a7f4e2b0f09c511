//! Structured per-round records and the final outcome shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::rng::Seed;

/// A trial win: who took the role on which day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialWin {
    /// The day of the win.
    pub day: u32,
    /// The winner's name.
    pub name: String,
}

/// One house vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    /// Who cast the vote.
    pub voter: String,
    /// Who received it.
    pub target: String,
}

/// All house votes cast on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRound {
    /// The voting day.
    pub day: u32,
    /// Votes in casting order.
    pub votes: Vec<Vote>,
}

/// An eviction block: the two nominees, how the public split, who left.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockRecord {
    /// The eviction day.
    pub day: u32,
    /// The Leader's nominee.
    pub leader_pick: String,
    /// The house's nominee.
    pub house_pick: String,
    /// Whoever the Angel shielded this round, if anyone.
    pub saved_by_angel: Option<String>,
    /// Both nominees, Leader's pick first.
    pub nominees: Vec<String>,
    /// Percent of the public voting to evict each nominee; sums to 100.0.
    pub percents: BTreeMap<String, f64>,
    /// The name of the evicted pet.
    pub evicted: String,
}

/// The four-way finale: ranking and winning shares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinaleRecord {
    /// The day the finale ran.
    pub day: u32,
    /// All four finalists, best first.
    pub ranking: Vec<String>,
    /// Percent of the public vote to *win* for each finalist; sums to 100.0.
    pub percents: BTreeMap<String, f64>,
    /// Champion.
    pub first: String,
    /// Runner-up.
    pub second: String,
    /// Third place.
    pub third: String,
    /// Fourth place.
    pub fourth: String,
}

/// Everything that happened in a season, round by round.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    /// Leader trial winners, one per day.
    pub leaders: Vec<TrialWin>,
    /// Angel trial winners, one per day.
    pub angels: Vec<TrialWin>,
    /// Eviction blocks, at most one per day.
    pub blocks: Vec<BlockRecord>,
    /// House votes, one round per day that held a vote.
    pub votes: Vec<VoteRound>,
    /// The finale, once four pets remained.
    pub finale: Option<FinaleRecord>,
}

/// The full result of a season: transcript, winner, history, and the seed
/// that produced it all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Narrated transcript lines, in order.
    pub logs: Vec<String>,
    /// The winning pet's name.
    pub winner: String,
    /// Structured per-round history.
    pub history: History,
    /// The seed actually used; feed it back in to replay the season.
    pub seed: Seed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_serde_roundtrip() {
        let mut history = History::default();
        history.leaders.push(TrialWin {
            day: 1,
            name: "Rex".into(),
        });
        history.blocks.push(BlockRecord {
            day: 1,
            leader_pick: "Mochi".into(),
            house_pick: "Biscuit".into(),
            saved_by_angel: Some("Luna".into()),
            nominees: vec!["Mochi".into(), "Biscuit".into()],
            percents: BTreeMap::from([("Mochi".into(), 55.5), ("Biscuit".into(), 44.5)]),
            evicted: "Mochi".into(),
        });
        let json = serde_json::to_string(&history).unwrap();
        let back: History = serde_json::from_str(&json).unwrap();
        assert_eq!(history, back);
    }

    #[test]
    fn outcome_serde_roundtrip() {
        let outcome = Outcome {
            logs: vec!["[Day 1] hello".into()],
            winner: "Rex".into(),
            history: History::default(),
            seed: Seed::Number(42),
        };
        let json = serde_json::to_string(&outcome).unwrap();
        let back: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, back);
    }
}
