// THEORY:
// The `session` module is the game's bookkeeper. It owns every piece of
// long-lived match state — scores, round records, the player's move history —
// and the arbiter rule that turns two choices into a round outcome. All
// mutation flows through `play_round` and `reset`; nothing else in the engine
// writes these fields.
//
// Key architectural principles:
// 1.  **Single Mutation Path**: A round is recorded exactly once, atomically:
//     history append, score update, record push, completion check. There is no
//     ad hoc field poking from outside this module.
// 2.  **History Before Strategy**: The player's choice is appended to
//     `PlayerHistory` inside `play_round`, so by the time the opponent engine
//     is consulted for the *next* round it always sees up-to-date history.
// 3.  **Terminal State**: Once the final round is recorded the session freezes.
//     Further `play_round` calls are no-ops; only an explicit `reset` thaws it.
// 4.  **Absence Loses**: A missing player choice (no gesture recognized at
//     lock-in) still produces a record, but loses to any defined computer
//     choice and draws only against another absence.

use crate::core_modules::gesture::{GameWinner, Gesture, RoundOutcome};
use crate::core_modules::strategy::Difficulty;
use serde::Serialize;

/// A session is always exactly three rounds.
pub const MAX_ROUNDS: usize = 3;

/// The player's confirmed choices for the current session, append-only, plus a
/// per-gesture frequency tally. Owned by the session; read by the strategies.
#[derive(Debug, Clone, Default)]
pub struct PlayerHistory {
    moves: Vec<Gesture>,
    tally: [usize; 3],
}

impl PlayerHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, gesture: Gesture) {
        self.moves.push(gesture);
        self.tally[Self::slot(gesture)] += 1;
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Every recorded move, oldest first.
    pub fn moves(&self) -> &[Gesture] {
        &self.moves
    }

    /// The last `n` moves (or all of them, if fewer exist).
    pub fn recent(&self, n: usize) -> &[Gesture] {
        &self.moves[self.moves.len().saturating_sub(n)..]
    }

    /// How often the player has thrown `gesture` this session.
    pub fn frequency(&self, gesture: Gesture) -> usize {
        self.tally[Self::slot(gesture)]
    }

    pub fn clear(&mut self) {
        self.moves.clear();
        self.tally = [0; 3];
    }

    fn slot(gesture: Gesture) -> usize {
        match gesture {
            Gesture::Rock => 0,
            Gesture::Paper => 1,
            Gesture::Scissors => 2,
        }
    }
}

/// The immutable record of one completed round, including the running score
/// directly after it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundRecord {
    /// 1-based round number.
    pub round: usize,
    pub user_choice: Option<Gesture>,
    pub computer_choice: Option<Gesture>,
    pub outcome: RoundOutcome,
    pub player_score: u32,
    pub computer_score: u32,
}

/// A read-only snapshot of the session for outward-facing collaborators. Any
/// JSON/HTTP representation must reflect exactly these fields.
#[derive(Debug, Clone, Serialize)]
pub struct GameStatus {
    pub level: Difficulty,
    pub round_count: usize,
    pub max_rounds: usize,
    pub player_score: u32,
    pub computer_score: u32,
    pub completed: bool,
    pub winner: Option<GameWinner>,
    pub round_history: Vec<RoundRecord>,
}

/// One best-of-three match: difficulty, scores, per-round records, and the
/// player history the adaptive strategies feed on.
pub struct GameSession {
    level: Difficulty,
    round_count: usize,
    player_score: u32,
    computer_score: u32,
    round_history: Vec<RoundRecord>,
    completed: bool,
    player_history: PlayerHistory,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            level: Difficulty::Easy,
            round_count: 0,
            player_score: 0,
            computer_score: 0,
            round_history: Vec::with_capacity(MAX_ROUNDS),
            completed: false,
            player_history: PlayerHistory::new(),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.level
    }

    pub fn player_history(&self) -> &PlayerHistory {
        &self.player_history
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Changes the difficulty by name. Unknown names are rejected and leave the
    /// current level untouched — never fatal.
    pub fn set_difficulty(&mut self, level: &str) -> bool {
        match Difficulty::parse(level) {
            Some(parsed) => {
                self.level = parsed;
                log::debug!("difficulty set to {:?}", parsed);
                true
            }
            None => {
                log::debug!("rejected unknown difficulty {:?}", level);
                false
            }
        }
    }

    /// Records one round: appends the player's choice to history, applies the
    /// arbiter rule, updates scores, and freezes the session after the final
    /// round. A no-op returning `None` once the session is complete.
    pub fn play_round(
        &mut self,
        user_choice: Option<Gesture>,
        computer_choice: Option<Gesture>,
    ) -> Option<RoundRecord> {
        if self.completed {
            log::debug!("round ignored, session already complete");
            return None;
        }

        if let Some(user) = user_choice {
            self.player_history.record(user);
        }

        let outcome = round_outcome(user_choice, computer_choice);
        match outcome {
            RoundOutcome::Player => self.player_score += 1,
            RoundOutcome::Computer => self.computer_score += 1,
            RoundOutcome::Draw => {}
        }

        self.round_count += 1;
        let record = RoundRecord {
            round: self.round_count,
            user_choice,
            computer_choice,
            outcome,
            player_score: self.player_score,
            computer_score: self.computer_score,
        };
        self.round_history.push(record.clone());

        if self.round_count >= MAX_ROUNDS {
            self.completed = true;
            log::info!(
                "session complete {}-{}, {:?}",
                self.player_score,
                self.computer_score,
                self.winner()
            );
        }
        Some(record)
    }

    /// The overall verdict: only meaningful once the session is complete.
    pub fn winner(&self) -> Option<GameWinner> {
        if !self.completed {
            return None;
        }
        Some(if self.player_score > self.computer_score {
            GameWinner::Player
        } else if self.computer_score > self.player_score {
            GameWinner::Computer
        } else {
            GameWinner::Tie
        })
    }

    pub fn status(&self) -> GameStatus {
        GameStatus {
            level: self.level,
            round_count: self.round_count,
            max_rounds: MAX_ROUNDS,
            player_score: self.player_score,
            computer_score: self.computer_score,
            completed: self.completed,
            winner: self.winner(),
            round_history: self.round_history.clone(),
        }
    }

    /// Returns the session to its initial empty state. The chosen difficulty
    /// survives the reset; everything else is cleared.
    pub fn reset(&mut self) {
        self.round_count = 0;
        self.player_score = 0;
        self.computer_score = 0;
        self.round_history.clear();
        self.completed = false;
        self.player_history.clear();
        log::debug!("session reset");
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// The fixed arbiter rule. Equal (or doubly absent) choices draw; an absent
/// choice loses to any defined one; otherwise the cycle decides.
pub fn round_outcome(
    user_choice: Option<Gesture>,
    computer_choice: Option<Gesture>,
) -> RoundOutcome {
    match (user_choice, computer_choice) {
        (None, None) => RoundOutcome::Draw,
        (None, Some(_)) => RoundOutcome::Computer,
        (Some(_), None) => RoundOutcome::Player,
        (Some(user), Some(computer)) => {
            if user == computer {
                RoundOutcome::Draw
            } else if computer.beats() == user {
                RoundOutcome::Player
            } else {
                RoundOutcome::Computer
            }
        }
    }
}
