// THEORY:
// The `gesture` module defines the closed vocabulary the whole engine speaks:
// the three playable moves, the fixed cycle that decides which move beats which,
// and the verdict enums a finished round or match is summarized by. Everything
// here is a "dumb" value type — the decision logic that produces these values
// lives in the classifier, arbiter, and strategy modules.
//
// Key architectural principles:
// 1.  **Closed Set**: The move space is a three-variant enum, so every match over
//     it is exhaustive and the compiler enforces that no strategy or arbiter rule
//     forgets a case.
// 2.  **Canonical Order**: `Gesture::CANONICAL` fixes Rock > Paper > Scissors as
//     the deterministic tie-break priority used by every frequency/score vote in
//     the engine. Relying on map-iteration order is explicitly avoided.
// 3.  **One Cycle, One Place**: `beats()` is the only encoding of the
//     Rock-Paper-Scissors relation; the arbiter and both adaptive strategies
//     derive from it rather than restating the table.

use serde::Serialize;
use std::fmt;

/// One playable move, as recognized from the player's hand or chosen by the
/// opponent engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gesture {
    Rock,
    Paper,
    Scissors,
}

impl Gesture {
    /// Fixed priority order for deterministic tie-breaking in frequency and
    /// confidence votes: earlier entries win ties.
    pub const CANONICAL: [Gesture; 3] = [Gesture::Rock, Gesture::Paper, Gesture::Scissors];

    /// The move that defeats `self` under the fixed cycle:
    /// Rock→Paper, Paper→Scissors, Scissors→Rock.
    pub fn beats(self) -> Gesture {
        match self {
            Gesture::Rock => Gesture::Paper,
            Gesture::Paper => Gesture::Scissors,
            Gesture::Scissors => Gesture::Rock,
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gesture::Rock => write!(f, "Rock"),
            Gesture::Paper => write!(f, "Paper"),
            Gesture::Scissors => write!(f, "Scissors"),
        }
    }
}

/// The outcome of a single round, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundOutcome {
    Player,
    Computer,
    Draw,
}

impl fmt::Display for RoundOutcome {
    /// The per-round banner shown by rendering collaborators.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundOutcome::Player => write!(f, "You Win!"),
            RoundOutcome::Computer => write!(f, "Computer Wins!"),
            RoundOutcome::Draw => write!(f, "Draw"),
        }
    }
}

/// The overall verdict of a completed session. Only meaningful once all rounds
/// have been played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameWinner {
    Player,
    Computer,
    Tie,
}

impl fmt::Display for GameWinner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameWinner::Player => write!(f, "Player Wins the Game!"),
            GameWinner::Computer => write!(f, "Computer Wins the Game!"),
            GameWinner::Tie => write!(f, "Game is a Tie!"),
        }
    }
}
