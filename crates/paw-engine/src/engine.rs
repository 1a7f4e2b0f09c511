//! The round controller: phase orchestration and state transitions.
//!
//! One [`Season`] owns one [`SeasonState`] and one [`SeededRng`] and drives
//! the fixed daily phase sequence: preamble, party, conflict, trials,
//! nomination, eviction. The moment exactly four pets remain, the day
//! resolves as a direct public finale instead.
//!
//! # Draw-order contract
//!
//! Seed-for-seed reproducibility rests on the exact sequence of RNG draws.
//! The order below is part of this module's public contract and must not be
//! reordered, parameterized away, or "optimized": per-contestant init
//! jitter (three draws each, roster order); per day one mood draw; the
//! party shuffle, then per pet one swing draw and one viral draw, then one
//! alliance draw per adjacent pair *whose affinity clears the bar* (the
//! check short-circuits); one conflict pick draw, then (only when the
//! picked pair is hot enough) one escalation draw and one fault draw; the
//! trial shuffle, one luck draw per candidate plus one pick draw for the
//! Leader, the same over the remaining field for the Angel; one draw per
//! nomination pick and per cast house vote (plus one for the zero-vote
//! fallback); one noise draw inside every public-score evaluation; one coin
//! draw only on a full eviction tie.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::mem;

use paw_core::Roster;

use crate::contestant::Contestant;
use crate::error::{EngineError, EngineResult};
use crate::history::{BlockRecord, FinaleRecord, History, Outcome, TrialWin, Vote, VoteRound};
use crate::percent::{round_to_exact_100, share_percents};
use crate::rng::{Seed, SeededRng, name_jitter, triple_jitter, weighted_pick};
use crate::score::{self, FightFault};
use crate::state::SeasonState;
use crate::transcript::Transcript;
use crate::tuning::Tuning;

/// Options for a season run. The seed is required: the engine never invents
/// one, so every run is replayable by construction.
#[derive(Debug, Clone)]
pub struct SimOptions {
    /// The RNG seed.
    pub seed: Seed,
    /// Cap on retained day-narration lines. Terminal summary lines always
    /// append, and the cap never alters RNG consumption.
    pub max_logs: Option<usize>,
    /// Balance coefficients.
    pub tuning: Tuning,
}

impl SimOptions {
    /// Options with the given seed, no log cap, default tuning.
    pub fn new(seed: impl Into<Seed>) -> Self {
        Self {
            seed: seed.into(),
            max_logs: None,
            tuning: Tuning::default(),
        }
    }

    /// Cap the number of retained day-narration lines.
    pub fn with_max_logs(mut self, max: usize) -> Self {
        self.max_logs = Some(max);
        self
    }

    /// Replace the balance coefficients.
    pub fn with_tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = tuning;
        self
    }
}

/// Run a full season to completion and return its outcome.
pub fn simulate(roster: &Roster, options: SimOptions) -> EngineResult<Outcome> {
    Ok(Season::new(roster, options)?.run())
}

/// A season in progress. Owns the state, RNG, tuning, and transcript;
/// everything is dropped or moved into the [`Outcome`] when the run ends.
#[derive(Debug)]
pub struct Season {
    rng: SeededRng,
    tuning: Tuning,
    state: SeasonState,
    transcript: Transcript,
    mood: f64,
    seed: Seed,
}

impl Season {
    /// Set up a season: validate the roster size and give every pet its
    /// opening popularity (base formula + three main-RNG jitter draws +
    /// the seed/name jitter).
    pub fn new(roster: &Roster, options: SimOptions) -> EngineResult<Self> {
        match roster.len() {
            0 => return Err(EngineError::EmptyRoster),
            2 | 3 => {
                return Err(EngineError::RosterTooSmall {
                    found: roster.len(),
                });
            }
            _ => {}
        }

        let SimOptions {
            seed,
            max_logs,
            tuning,
        } = options;
        let mut rng = SeededRng::new(&seed);
        let contestants: Vec<Contestant> = roster
            .pets()
            .iter()
            .map(|pet| {
                let popularity = score::base_popularity(&pet.attributes)
                    + triple_jitter(&mut rng)
                    + name_jitter(&seed, &pet.name);
                Contestant::new(pet.clone(), popularity)
            })
            .collect();

        Ok(Self {
            rng,
            tuning,
            state: SeasonState {
                day: 1,
                contestants,
                history: History::default(),
            },
            transcript: Transcript::new(max_logs),
            mood: 0.0,
            seed,
        })
    }

    /// The current season state (read-only).
    pub fn state(&self) -> &SeasonState {
        &self.state
    }

    /// The seed this season runs on.
    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    /// Drive the season to its end and return the outcome.
    pub fn run(mut self) -> Outcome {
        while self.state.active_count() > 1 {
            if let Some(outcome) = self.play_day() {
                return outcome;
            }
        }

        // Walkover: the loop body never ran (single-pet roster) or emptied
        // out. Crown whoever is left standing.
        let winner = self
            .state
            .contestants
            .iter()
            .find(|c| !c.eliminated)
            .map(|c| c.name().to_string())
            .unwrap_or_default();
        self.transcript.push(format!("🏆 Winner: {winner}"));
        self.transcript.push(format!("🔑 Season seed: {}", self.seed));
        self.finish(winner)
    }

    /// One full day. Returns the outcome when the day was the finale.
    fn play_day(&mut self) -> Option<Outcome> {
        self.open_day();

        if self.state.active_count() == 4 {
            return Some(self.finale());
        }

        self.party();
        self.conflict();
        let (leader, angel) = self.trials();
        if let Some(block) = self.form_block(leader, angel) {
            self.evict(block);
        }

        self.state.day += 1;
        None
    }

    /// Daily preamble: mood draw, regression to the group mean, underdog
    /// boost for the bottom quartile, soft compression, opening line.
    fn open_day(&mut self) {
        self.mood = self.rng.next_unit() - 0.5;

        let active = self.state.active_indices();
        let mean = self.active_mean(&active);
        for &i in &active {
            let c = &mut self.state.contestants[i];
            c.popularity += self.tuning.regression * (mean - c.popularity);
        }

        let mut by_popularity = active.clone();
        by_popularity.sort_by(|&a, &b| {
            self.state.contestants[a]
                .popularity
                .total_cmp(&self.state.contestants[b].popularity)
        });
        let quartile = ((active.len() as f64 * 0.25) as usize).max(1);
        for &i in by_popularity.iter().take(quartile) {
            self.state.contestants[i].popularity += self.tuning.public.underdog_boost;
        }

        for &i in &active {
            self.compress(i);
        }

        let line = format!(
            "Another day in the most watched house in the country! Still in the game: {}.",
            self.active_names().join(", ")
        );
        self.transcript.narrate(self.state.day, line);
    }

    /// The four-way finale: no block, the public ranks the finalists
    /// directly. Always produces the winner.
    fn finale(&mut self) -> Outcome {
        let day = self.state.day;
        self.transcript.narrate(
            day,
            "Grand finale! No eviction block: the public votes to rank the final four.",
        );

        let finalists = self.state.active_indices();
        let scores: Vec<f64> = finalists.iter().map(|&i| self.public_score(i)).collect();
        let percents = share_percents(&scores);

        let mut order: Vec<usize> = (0..finalists.len()).collect();
        order.sort_by(|&x, &y| scores[y].total_cmp(&scores[x]));

        let ranked: Vec<(String, f64)> = order
            .iter()
            .map(|&k| {
                (
                    self.state.contestants[finalists[k]].name().to_string(),
                    percents[k],
                )
            })
            .collect();

        self.state.history.finale = Some(FinaleRecord {
            day,
            ranking: ranked.iter().map(|(name, _)| name.clone()).collect(),
            percents: ranked.iter().cloned().collect::<BTreeMap<String, f64>>(),
            first: ranked[0].0.clone(),
            second: ranked[1].0.clone(),
            third: ranked[2].0.clone(),
            fourth: ranked[3].0.clone(),
        });

        let shares = ranked
            .iter()
            .map(|(name, pct)| format!("{name} {pct:.1}%"))
            .collect::<Vec<_>>()
            .join(" | ");
        self.transcript.push(format!("🗳️ Vote shares to win: {shares}"));
        self.transcript.push(format!("🥇 1st: {}", ranked[0].0));
        self.transcript.push(format!("🥈 2nd: {}", ranked[1].0));
        self.transcript.push(format!("🥉 3rd: {}", ranked[2].0));
        self.transcript.push(format!("4th place: {}", ranked[3].0));
        self.transcript.push(format!("🏆 Winner: {}", ranked[0].0));
        self.transcript.push(format!("🔑 Season seed: {}", self.seed));

        let winner = ranked[0].0.clone();
        self.finish(winner)
    }

    /// Party phase: everyone swings, a lucky few go viral, adjacent pairs
    /// on the dance floor may strike up alliances.
    fn party(&mut self) {
        let mut order = self.state.active_indices();
        self.rng.shuffle(&mut order);

        let line = {
            let spotlight: Vec<&str> = order
                .iter()
                .take(6)
                .map(|&i| self.state.contestants[i].name())
                .collect();
            format!(
                "Party night! {} and co. lit up the dance floor.",
                spotlight.join(", ")
            )
        };
        self.transcript.narrate(self.state.day, line);

        for &i in &order {
            let attrs = *self.state.contestants[i].attributes();
            let swing = score::party_delta(&attrs) + f64::from(self.rng.range(-1, 1)) * 0.2;
            self.state.contestants[i].popularity += swing;
            if self.rng.chance(0.08) {
                // viral moment
                self.state.contestants[i].popularity += 1.0;
            }
            self.compress(i);
        }

        let pair_count = order.len().saturating_sub(1).min(6);
        for k in 0..pair_count {
            let (a, b) = (order[k], order[k + 1]);
            let bond = score::affinity(
                self.state.contestants[a].attributes(),
                self.state.contestants[b].attributes(),
            );
            // The alliance draw happens only when affinity clears the bar;
            // the short-circuit is part of the draw-order contract.
            if bond > 2.5 && self.rng.chance(0.6) {
                self.state.befriend(a, b);
                let line = format!(
                    "{} and {} cemented a friendship on the dance floor.",
                    self.state.contestants[a].name(),
                    self.state.contestants[b].name()
                );
                self.transcript.narrate(self.state.day, line);
                self.state.contestants[a].popularity += 0.4;
                self.state.contestants[b].popularity += 0.4;
                self.compress(a);
                self.compress(b);
            }
        }
    }

    /// Conflict phase: rank the non-allied pairs by friction, pick one of
    /// the hottest four, and maybe let it boil over.
    fn conflict(&mut self) {
        let active = self.state.active_indices();
        let mut pairs: Vec<(usize, usize, f64)> = Vec::new();
        for (x, &a) in active.iter().enumerate() {
            for &b in &active[x + 1..] {
                if self.state.are_allies(a, b) {
                    continue;
                }
                let mut heat = score::conflict(
                    self.state.contestants[a].attributes(),
                    self.state.contestants[b].attributes(),
                );
                if self.state.are_rivals(a, b) {
                    heat += 1.5;
                }
                pairs.push((a, b, heat));
            }
        }
        if pairs.is_empty() {
            // Everyone is allied with everyone: nothing to flare up.
            return;
        }

        pairs.sort_by(|p, q| q.2.total_cmp(&p.2));
        pairs.truncate(4);
        let pick = weighted_pick(&mut self.rng, &pairs, |_, (_, _, heat)| heat.max(0.1));

        if pick.2 > 2.0 && self.rng.chance(0.8) {
            let (a, b, _) = pick;
            let fault = *self
                .rng
                .pick(&[FightFault::First, FightFault::Second, FightFault::Both]);
            let (delta_a, delta_b) = score::fight_deltas(fault);
            let drama_a = f64::from(self.state.contestants[a].attributes().drama);
            let drama_b = f64::from(self.state.contestants[b].attributes().drama);
            self.state.contestants[a].popularity += delta_a + drama_a * 0.05;
            self.state.contestants[b].popularity += delta_b + drama_b * 0.05;
            self.state.embitter(a, b);

            let name_a = self.state.contestants[a].name();
            let name_b = self.state.contestants[b].name();
            let blame = match fault {
                FightFault::First => format!(" ({name_a} started it)"),
                FightFault::Second => format!(" ({name_b} started it)"),
                FightFault::Both => String::new(),
            };
            let line = format!("Fight! {name_a} and {name_b} got into a shouting match{blame}.");
            self.transcript.narrate(self.state.day, line);

            self.compress(a);
            self.compress(b);
        } else {
            self.transcript.narrate(
                self.state.day,
                "Cooler heads prevailed: the housemates talked the tension down.",
            );
        }
    }

    /// Leader and Angel trials: half merit, half per-candidate luck.
    /// Returns `(leader, angel)`; they are always distinct.
    fn trials(&mut self) -> (usize, usize) {
        let mut competitors = self.state.active_indices();
        self.rng.shuffle(&mut competitors);

        let (leader, angel) = {
            let contestants = &self.state.contestants;
            let trials = &self.tuning.trials;
            let performance = |rng: &mut SeededRng, i: usize| {
                trials.merit * score::trial_performance(contestants[i].attributes())
                    + trials.luck * (0.5 + rng.next_unit())
            };

            let leader = weighted_pick(&mut self.rng, &competitors, performance);
            let field: Vec<usize> = competitors
                .iter()
                .copied()
                .filter(|&i| i != leader)
                .collect();
            let angel = weighted_pick(&mut self.rng, &field, performance);
            (leader, angel)
        };

        for &i in &self.state.active_indices() {
            let c = &mut self.state.contestants[i];
            c.leader_streak = if i == leader { c.leader_streak + 1 } else { 0 };
            c.angel_streak = if i == angel { c.angel_streak + 1 } else { 0 };
        }

        let day = self.state.day;
        self.state.history.leaders.push(TrialWin {
            day,
            name: self.state.contestants[leader].name().to_string(),
        });
        self.state.history.angels.push(TrialWin {
            day,
            name: self.state.contestants[angel].name().to_string(),
        });

        self.state.contestants[leader].popularity += self.tuning.trials.leader_boost;
        self.state.contestants[angel].popularity += self.tuning.trials.angel_boost;
        self.compress(leader);
        self.compress(angel);

        let line = format!(
            "{} won the Leader's trial. {} claimed the Angel.",
            self.state.contestants[leader].name(),
            self.state.contestants[angel].name()
        );
        self.transcript.narrate(day, line);

        (leader, angel)
    }

    /// Block formation: the Angel shields someone, the Leader nominates,
    /// the house votes. Returns `(leader_pick, house_pick, saved)`, or
    /// `None` when the house could not produce a nominee; in that case the
    /// day ends without an eviction.
    fn form_block(&mut self, leader: usize, angel: usize) -> Option<(usize, usize, Option<usize>)> {
        let day = self.state.day;

        // The Angel shields a third pet (never the Leader, never itself).
        let targets: Vec<usize> = self
            .state
            .active_indices()
            .into_iter()
            .filter(|&i| i != angel && i != leader)
            .collect();
        let saved = if targets.is_empty() {
            None
        } else {
            let pick = {
                let contestants = &self.state.contestants;
                let angel_allies = &contestants[angel].allies;
                weighted_pick(&mut self.rng, &targets, |_, i| {
                    let bond = if angel_allies.contains(contestants[i].name()) {
                        2.5
                    } else {
                        1.0
                    };
                    bond + f64::from(contestants[i].attributes().sociable) * 0.2
                })
            };
            let line = format!(
                "{} used the Angel's power to shield {}.",
                self.state.contestants[angel].name(),
                self.state.contestants[pick].name()
            );
            self.transcript.narrate(day, line);
            Some(pick)
        };

        // The Leader nominates anyone unshielded (the Angel included).
        let eligible: Vec<usize> = self
            .state
            .active_indices()
            .into_iter()
            .filter(|&i| i != leader && Some(i) != saved)
            .collect();
        let leader_pick = {
            let contestants = &self.state.contestants;
            weighted_pick(&mut self.rng, &eligible, |_, i| {
                let grudge = if contestants[leader].rivals.contains(contestants[i].name()) {
                    3.0
                } else {
                    1.0
                };
                let distance = (2.5
                    - score::affinity(
                        contestants[leader].attributes(),
                        contestants[i].attributes(),
                    ))
                .max(0.0);
                1.0 + grudge + distance
            })
        };
        let line = format!(
            "Leader's nomination ({}): {} goes to the block.",
            self.state.contestants[leader].name(),
            self.state.contestants[leader_pick].name()
        );
        self.transcript.narrate(day, line);

        // The house votes: everyone but the Leader casts one ballot against
        // an eligible target.
        let voters: Vec<usize> = self
            .state
            .active_indices()
            .into_iter()
            .filter(|&i| i != leader)
            .collect();
        let mut votes: Vec<Vote> = Vec::new();
        let mut tally: Vec<(usize, u32)> = Vec::new();
        for &voter in &voters {
            let ballot_targets: Vec<usize> = self
                .state
                .active_indices()
                .into_iter()
                .filter(|&i| i != voter && i != leader && i != leader_pick && Some(i) != saved)
                .collect();
            if ballot_targets.is_empty() {
                continue;
            }

            let choice = {
                let contestants = &self.state.contestants;
                let house = &self.tuning.house;
                weighted_pick(&mut self.rng, &ballot_targets, |_, i| {
                    let target = &contestants[i];
                    let mut w = 1.0;
                    if contestants[voter].allies.contains(target.name()) {
                        w *= 0.2;
                    }
                    if contestants[voter].rivals.contains(target.name()) {
                        w *= 3.0;
                    }
                    let a = target.attributes();
                    let antipathy = 1.0
                        + house.loud * (f64::from(a.loud) - 3.0)
                        + house.territorial * (f64::from(a.territorial) - 3.0)
                        + house.stubborn * (f64::from(a.stubborn) - 3.0);
                    w *= antipathy.clamp(house.antipathy_min, house.antipathy_max);
                    w *= 1.0 + house.target_strong * (target.popularity - 12.0).max(0.0) / 6.0;
                    w *= 2.0
                        + (2.5
                            - score::affinity(contestants[voter].attributes(), a))
                        .max(0.0);
                    w *= 1.0 + ((target.popularity - 12.0) * 0.06).max(0.0);
                    w.max(0.05)
                })
            };

            votes.push(Vote {
                voter: self.state.contestants[voter].name().to_string(),
                target: self.state.contestants[choice].name().to_string(),
            });
            let line = format!(
                "House vote: {} voted for {}.",
                self.state.contestants[voter].name(),
                self.state.contestants[choice].name()
            );
            self.transcript.narrate(day, line);

            match tally.iter_mut().find(|(t, _)| *t == choice) {
                Some((_, count)) => *count += 1,
                None => tally.push((choice, 1)),
            }
        }
        self.state.history.votes.push(VoteRound { day, votes });

        // Most votes wins the nomination; ties go to whoever reached the
        // tally first.
        let mut best: Option<(usize, u32)> = None;
        for &(target, count) in &tally {
            if best.is_none_or(|(_, top)| count > top) {
                best = Some((target, count));
            }
        }

        let (house_pick, received) = match best {
            Some((target, count)) => (Some(target), count),
            None => {
                // Nobody could vote. Fall back to a uniform pick over
                // whoever is still nominable; an empty pool ends the day
                // without an eviction.
                let fallback: Vec<usize> = self
                    .state
                    .active_indices()
                    .into_iter()
                    .filter(|&i| i != leader_pick && i != leader && Some(i) != saved)
                    .collect();
                if fallback.is_empty() {
                    (None, 0)
                } else {
                    (Some(weighted_pick(&mut self.rng, &fallback, |_, _| 1.0)), 0)
                }
            }
        };

        match house_pick {
            None => {
                self.transcript.narrate(
                    day,
                    "Not enough eligible housemates for a house nomination today.",
                );
                None
            }
            Some(pick) => {
                let line = format!(
                    "House nomination: {} completes the block with {} vote(s).",
                    self.state.contestants[pick].name(),
                    received
                );
                self.transcript.narrate(day, line);
                Some((leader_pick, pick, saved))
            }
        }
    }

    /// Eviction: inverse public-score shares decide who leaves; exact ties
    /// fall to the less popular nominee, then to a coin draw.
    fn evict(&mut self, (leader_pick, house_pick, saved): (usize, usize, Option<usize>)) {
        let day = self.state.day;
        let score_first = self.public_score(leader_pick);
        let score_second = self.public_score(house_pick);
        let total = score_first + score_second;

        // Shares to *evict*: the stronger nominee gets the smaller share.
        let evict_first = score_second / total * 100.0;
        let evict_second = score_first / total * 100.0;
        let shown = round_to_exact_100(&[evict_first, evict_second]);

        let out = eviction_choice(
            evict_first,
            evict_second,
            self.state.contestants[leader_pick].popularity,
            self.state.contestants[house_pick].popularity,
            &mut self.rng,
        );
        let (evicted, survivor) = if out == 0 {
            (leader_pick, house_pick)
        } else {
            (house_pick, leader_pick)
        };

        self.state.contestants[evicted].eliminated = true;
        self.state.contestants[evicted].popularity -= 1.0;
        self.state.contestants[survivor].popularity += 0.8;
        self.compress(evicted);
        self.compress(survivor);

        let name_first = self.state.contestants[leader_pick].name().to_string();
        let name_second = self.state.contestants[house_pick].name().to_string();
        let line = format!(
            "Eviction block: {name_first} vs {name_second}. Public vote to evict: \
             {name_first} {:.1}% | {name_second} {:.1}%.",
            shown[0], shown[1]
        );
        self.transcript.narrate(day, line);
        let line = format!(
            "The public has decided: {} leaves the house with {:.1}%.",
            self.state.contestants[evicted].name(),
            shown[out]
        );
        self.transcript.narrate(day, line);

        self.state.history.blocks.push(BlockRecord {
            day,
            leader_pick: name_first.clone(),
            house_pick: name_second.clone(),
            saved_by_angel: saved.map(|i| self.state.contestants[i].name().to_string()),
            nominees: vec![name_first.clone(), name_second.clone()],
            percents: BTreeMap::from([(name_first, shown[0]), (name_second, shown[1])]),
            evicted: self.state.contestants[evicted].name().to_string(),
        });
    }

    /// The public's support for one contestant right now. Consumes exactly
    /// one RNG draw (the noise term).
    fn public_score(&mut self, idx: usize) -> f64 {
        let t = &self.tuning;
        let state = &self.state;
        let active = state.active_indices();
        let n = active.len().max(1) as f64;
        let mean = active
            .iter()
            .map(|&i| state.contestants[i].popularity)
            .sum::<f64>()
            / n;
        let variance = active
            .iter()
            .map(|&i| {
                let d = state.contestants[i].popularity - mean;
                d * d
            })
            .sum::<f64>()
            / n;
        let deviation = variance.sqrt();

        let c = &state.contestants[idx];
        let living = |names: &std::collections::BTreeSet<String>| {
            names
                .iter()
                .filter(|name| {
                    state
                        .index_of(name.as_str())
                        .is_none_or(|i| !state.contestants[i].eliminated)
                })
                .count()
        };
        let allies_alive = living(&c.allies);
        let rivals_alive = living(&c.rivals);

        let counted_allies = allies_alive.min(t.public.allies_cap) as f64;
        let mut score = c.popularity + counted_allies * t.public.ally_bonus
            - (rivals_alive as f64 * 0.3).min(2.0);

        let loud = f64::from(c.attributes().loud);
        let stubborn = f64::from(c.attributes().stubborn);
        score -= t.public.loud_penalty * (loud - 3.0).max(0.0)
            + t.public.stubborn_penalty * (stubborn - 3.0).max(0.0);
        score += t.public.quiet_bonus * (3.0 - loud).max(0.0)
            + t.public.easygoing_bonus * (3.0 - stubborn).max(0.0);

        // Anti-dominance: runaway favorites bleed support.
        score -= t.anti_dominance * (c.popularity - (mean + deviation)).max(0.0);

        // Streak fatigue: the public tires of serial trial winners.
        score -= t.public.fatigue_per_streak * f64::from(c.leader_streak.saturating_sub(1));
        score -= t.public.fatigue_per_streak * 0.6 * f64::from(c.angel_streak.saturating_sub(1));

        score += self.mood * t.mood_swing * 0.6;
        score += (self.rng.next_unit() - 0.5) * t.public_noise;
        score.max(0.1)
    }

    fn active_mean(&self, active: &[usize]) -> f64 {
        let sum: f64 = active
            .iter()
            .map(|&i| self.state.contestants[i].popularity)
            .sum();
        sum / active.len().max(1) as f64
    }

    fn active_names(&self) -> Vec<String> {
        self.state
            .active_indices()
            .into_iter()
            .map(|i| self.state.contestants[i].name().to_string())
            .collect()
    }

    fn compress(&mut self, i: usize) {
        let c = &mut self.state.contestants[i];
        c.popularity = self.tuning.soft_cap.compress(c.popularity);
    }

    fn finish(&mut self, winner: String) -> Outcome {
        Outcome {
            logs: mem::take(&mut self.transcript).into_lines(),
            winner,
            history: mem::take(&mut self.state.history),
            seed: self.seed.clone(),
        }
    }
}

/// Which nominee leaves: the strictly higher evict-share, then the lower
/// popularity, then one coin draw. Returns 0 for the first nominee, 1 for
/// the second.
fn eviction_choice(
    evict_first: f64,
    evict_second: f64,
    popularity_first: f64,
    popularity_second: f64,
    rng: &mut SeededRng,
) -> usize {
    match evict_first.total_cmp(&evict_second) {
        Ordering::Greater => 0,
        Ordering::Less => 1,
        Ordering::Equal => {
            if popularity_first != popularity_second {
                usize::from(popularity_first >= popularity_second)
            } else if rng.next_unit() < 0.5 {
                0
            } else {
                1
            }
        }
    }
}
