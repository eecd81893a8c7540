// THEORY:
// The `strategy` module is the opponent's brain. Given a difficulty level and
// the player's recorded history, it selects the computer's next move. Each
// difficulty maps to one named strategy: Easy plays uniformly at random, Medium
// adapts to the player's recent habits, Hard actively predicts and counters.
//
// Key architectural principles:
// 1.  **Closed Dispatch**: Difficulty is a three-variant enum dispatched through
//     a single selection function. No trait objects, no subclassing — the set of
//     strategies is fixed and every variant is testable in isolation.
// 2.  **One Random Source**: All randomness in the entire engine flows through
//     the `SmallRng` owned here. Nothing else in the crate consumes randomness,
//     so every win/lose outcome is traceable to this source, and tests seed it
//     for exact, reproducible bias measurements.
// 3.  **Bias, Not Certainty**: The adaptive strategies counter their prediction
//     with a fixed probability (0.6 / 0.8) and otherwise fall back to uniform
//     play. A perfectly deterministic opponent would be trivially exploitable
//     the other way.

use crate::core_modules::gesture::Gesture;
use crate::core_modules::session::PlayerHistory;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::fmt;

/// How many of the player's latest moves the adaptive strategy inspects.
const ADAPTIVE_RECENT_WINDOW: usize = 3;
/// The adaptive strategy needs at least this much history to see a habit.
const ADAPTIVE_MIN_HISTORY: usize = 2;
/// Probability that Medium counters the player's most frequent recent move.
const ADAPTIVE_COUNTER_BIAS: f64 = 0.6;
/// Probability that Hard counters its prediction of the player's next move.
const PREDICTIVE_COUNTER_BIAS: f64 = 0.8;

/// Opponent difficulty: each level names one move-selection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Parses a difficulty name, case-insensitively (the control surface
    /// forwards path segments of arbitrary capitalization). Unknown names are
    /// rejected, not defaulted.
    pub fn parse(name: &str) -> Option<Difficulty> {
        if name.eq_ignore_ascii_case("easy") {
            Some(Difficulty::Easy)
        } else if name.eq_ignore_ascii_case("medium") {
            Some(Difficulty::Medium)
        } else if name.eq_ignore_ascii_case("hard") {
            Some(Difficulty::Hard)
        } else {
            None
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// Selects the computer's moves. Owns the process's only random source.
pub struct OpponentEngine {
    rng: SmallRng,
}

impl OpponentEngine {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// A deterministic engine for tests: the same seed replays the same
    /// sequence of choices.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// The single dispatch point for all three strategies.
    pub fn select(&mut self, difficulty: Difficulty, history: &PlayerHistory) -> Gesture {
        let choice = match difficulty {
            Difficulty::Easy => self.uniform(),
            Difficulty::Medium => self.adaptive(history),
            Difficulty::Hard => self.predictive_counter(history),
        };
        log::trace!("{:?} strategy chose {:?}", difficulty, choice);
        choice
    }

    fn uniform(&mut self) -> Gesture {
        Gesture::CANONICAL[self.rng.random_range(0..Gesture::CANONICAL.len())]
    }

    /// Medium: find the player's most frequent move among the last three and
    /// counter it 60% of the time.
    fn adaptive(&mut self, history: &PlayerHistory) -> Gesture {
        if history.len() < ADAPTIVE_MIN_HISTORY {
            return self.uniform();
        }
        let habit = most_frequent(history.recent(ADAPTIVE_RECENT_WINDOW));
        match habit {
            Some(habit) if self.rng.random::<f64>() < ADAPTIVE_COUNTER_BIAS => habit.beats(),
            _ => self.uniform(),
        }
    }

    /// Hard: predict the player's next move and counter it 80% of the time.
    fn predictive_counter(&mut self, history: &PlayerHistory) -> Gesture {
        match predict_next(history) {
            Some(prediction) if self.rng.random::<f64>() < PREDICTIVE_COUNTER_BIAS => {
                prediction.beats()
            }
            Some(_) => self.uniform(),
            None => self.uniform(),
        }
    }
}

impl Default for OpponentEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Predicts the player's next move: an immediate repeat pattern wins, otherwise
/// the single most frequent move across the whole session (read from the
/// history's running tally). No history, no prediction.
fn predict_next(history: &PlayerHistory) -> Option<Gesture> {
    match history.moves() {
        [] => None,
        [.., a, b] if a == b => Some(*b),
        _ => {
            let mut best = (Gesture::CANONICAL[0], 0usize);
            for gesture in Gesture::CANONICAL {
                let count = history.frequency(gesture);
                if count > best.1 {
                    best = (gesture, count);
                }
            }
            Some(best.0)
        }
    }
}

/// The most frequent gesture in a slice. Ties break by the fixed canonical
/// priority (Rock > Paper > Scissors), never by map-iteration order.
fn most_frequent(moves: &[Gesture]) -> Option<Gesture> {
    if moves.is_empty() {
        return None;
    }
    let mut best = (Gesture::CANONICAL[0], 0usize);
    for gesture in Gesture::CANONICAL {
        let count = moves.iter().filter(|&&m| m == gesture).count();
        if count > best.1 {
            best = (gesture, count);
        }
    }
    Some(best.0)
}
