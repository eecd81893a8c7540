// THEORY:
// The `stability` module adds the concept of "memory" to the recognition layer.
// Per-frame classification is visibly jittery: a hand mid-transition flickers
// between shapes, and a single bad frame can read as anything. This module takes
// the stateless per-frame `ClassificationResult` stream and associates it with
// a persistent, debounced decision the game logic can safely sample.
//
// Key architectural principles:
// 1.  **Bounded History**: A sliding window of recent (gesture, confidence)
//     pairs, oldest evicted first. Only frames confident enough to matter are
//     admitted; ambiguous frames leave no trace.
// 2.  **Confidence-Weighted Voting**: Each distinct gesture in the window is
//     scored by the sum of its confidences. Two strong corroborating frames
//     outweigh three weak ones.
// 3.  **Hysteresis**: The winning gesture is promoted only when its score clears
//     an absolute bar AND it occupies both of the two most recent entries. A
//     single dissenting frame can never flip the output.
// 4.  **Sticky Output**: Once a gesture has been promoted, the tracker never
//     reports "nothing" again on its own — a vanished hand or a noisy stretch
//     keeps the previous stable value. Only an explicit `reset` clears it.

use crate::core_modules::confidence::ClassificationResult;
use crate::core_modules::gesture::Gesture;
use std::collections::VecDeque;

/// Default smoothing window (frames of admitted history).
pub const DEFAULT_SMOOTHING_WINDOW: usize = 4;
/// Classifications at or below this confidence are not admitted to history.
const HISTORY_CONFIDENCE_GATE: f64 = 0.5;
/// The vote score a gesture must reach to be promoted: exactly two
/// corroborating high-confidence (0.9) frames.
const PROMOTION_SCORE_BAR: f64 = 1.8;

/// Debounces the per-frame classification stream into a single stable gesture.
/// One instance per detector; not shareable across concurrent callers.
pub struct StabilityTracker {
    /// Recent admitted classifications, newest at the back.
    history: VecDeque<(Gesture, f64)>,
    /// Maximum admitted history length.
    window: usize,
    /// The current debounced decision. Outlives the evidence that produced it.
    last_stable: Option<Gesture>,
    /// Consecutive promotions of the current stable gesture.
    stability_count: u32,
}

impl StabilityTracker {
    pub fn new() -> Self {
        Self::with_window(DEFAULT_SMOOTHING_WINDOW)
    }

    /// A window below 2 cannot satisfy the recency check, so it is clamped.
    pub fn with_window(window: usize) -> Self {
        Self {
            history: VecDeque::with_capacity(window.max(2)),
            window: window.max(2),
            last_stable: None,
            stability_count: 0,
        }
    }

    /// Feeds one frame's classification and returns the (possibly unchanged)
    /// stable gesture. "No gesture" frames simply leave the history alone.
    pub fn observe(&mut self, result: &ClassificationResult) -> Option<Gesture> {
        if let Some(gesture) = result.gesture {
            if result.confidence > HISTORY_CONFIDENCE_GATE {
                self.history.push_back((gesture, result.confidence));
                if self.history.len() > self.window {
                    self.history.pop_front();
                }
            }
        }

        // Not enough evidence to decide anything yet.
        if self.history.len() < 2 {
            return self.last_stable;
        }

        let (candidate, score) = self.leading_candidate();
        if score >= PROMOTION_SCORE_BAR && self.dominates_recent(candidate) {
            self.promote(candidate);
        }
        self.last_stable
    }

    pub fn stable_gesture(&self) -> Option<Gesture> {
        self.last_stable
    }

    pub fn stability_count(&self) -> u32 {
        self.stability_count
    }

    /// Explicitly forgets everything — the only path back to "no gesture".
    pub fn reset(&mut self) {
        self.history.clear();
        self.last_stable = None;
        self.stability_count = 0;
    }

    /// Confidence-weighted vote over the window. Ties break by the fixed
    /// canonical priority, never by map-iteration order.
    fn leading_candidate(&self) -> (Gesture, f64) {
        let mut best = (Gesture::CANONICAL[0], f64::MIN);
        for gesture in Gesture::CANONICAL {
            let score: f64 = self
                .history
                .iter()
                .filter(|(g, _)| *g == gesture)
                .map(|(_, confidence)| confidence)
                .sum();
            if score > best.1 {
                best = (gesture, score);
            }
        }
        best
    }

    /// Anti-flicker check: the candidate must occupy both of the two most
    /// recent history entries.
    fn dominates_recent(&self, candidate: Gesture) -> bool {
        self.history
            .iter()
            .rev()
            .take(2)
            .filter(|(g, _)| *g == candidate)
            .count()
            == 2
    }

    fn promote(&mut self, candidate: Gesture) {
        if self.last_stable == Some(candidate) {
            self.stability_count += 1;
        } else {
            log::debug!("stable gesture {:?} -> {:?}", self.last_stable, candidate);
            self.stability_count = 1;
        }
        self.last_stable = Some(candidate);
    }
}

impl Default for StabilityTracker {
    fn default() -> Self {
        Self::new()
    }
}
