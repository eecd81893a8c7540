// THEORY:
// The `confidence` module turns the classifier's three raw votes into the single
// scored result the rest of the engine consumes. The primary method is the
// trigger; the secondary methods never override it, they only strengthen it.
// This mirrors the layered trigger-then-enrich pattern used throughout the
// codebase: one cheap signal decides *whether* something happened, richer
// signals decide *how much* to trust it.
//
// Key architectural principles:
// 1.  **Agreement as Evidence**: Confidence starts at a fixed base the moment
//     the primary method commits to a gesture, and each independently agreeing
//     heuristic adds a bonus. Disagreement costs nothing — the secondaries are
//     corroboration, not votes.
// 2.  **Floors as Noise Gates**: A result below the global floor — or below the
//     stricter per-gesture floor — is not a weak result, it is no result. The
//     frame degrades to "no gesture" so a single noisy spike can never reach
//     the stability tracker.
// 3.  **Asymmetric Skepticism**: Paper demands more certainty than Rock. An
//     accidental open hand mid-transition is the most common misread, so its
//     floor is the highest.

use crate::core_modules::classifier::classifier::MethodVotes;
use crate::core_modules::gesture::Gesture;
use serde::Serialize;

/// Confidence granted as soon as the primary method yields a gesture.
const BASE_CONFIDENCE: f64 = 0.8;
/// Added once per secondary method that reaches the same conclusion.
const AGREEMENT_BONUS: f64 = 0.1;
/// Below this, any classification is discarded outright.
const GLOBAL_CONFIDENCE_FLOOR: f64 = 0.6;

/// One frame's scored classification: the primary gesture (if any survived the
/// floors) and how much the three methods collectively trust it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub gesture: Option<Gesture>,
    pub confidence: f64,
}

impl ClassificationResult {
    /// The "no gesture this frame" value: propagated for empty frames, unknown
    /// hand shapes, and results that failed a confidence floor.
    pub fn none() -> Self {
        Self {
            gesture: None,
            confidence: 0.0,
        }
    }
}

/// Per-gesture minimum confidence, checked on top of the global floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureFloors {
    pub rock: f64,
    pub paper: f64,
    pub scissors: f64,
}

impl GestureFloors {
    fn floor(&self, gesture: Gesture) -> f64 {
        match gesture {
            Gesture::Rock => self.rock,
            Gesture::Paper => self.paper,
            Gesture::Scissors => self.scissors,
        }
    }
}

impl Default for GestureFloors {
    fn default() -> Self {
        Self {
            rock: 0.75,
            paper: 0.85,
            scissors: 0.80,
        }
    }
}

/// Scores one frame's votes with the default floors.
pub fn score(votes: &MethodVotes) -> ClassificationResult {
    score_with(votes, &GestureFloors::default())
}

/// Scores one frame's votes against explicit per-gesture floors.
pub fn score_with(votes: &MethodVotes, floors: &GestureFloors) -> ClassificationResult {
    let Some(gesture) = votes.primary else {
        return ClassificationResult::none();
    };

    let mut confidence = BASE_CONFIDENCE;
    if votes.distance == Some(gesture) {
        confidence += AGREEMENT_BONUS;
    }
    if votes.angle == Some(gesture) {
        confidence += AGREEMENT_BONUS;
    }
    let confidence = confidence.min(1.0);

    if confidence < GLOBAL_CONFIDENCE_FLOOR || confidence < floors.floor(gesture) {
        return ClassificationResult::none();
    }
    ClassificationResult {
        gesture: Some(gesture),
        confidence,
    }
}
