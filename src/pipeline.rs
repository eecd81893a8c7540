// THEORY:
// The `pipeline` module is the top-level API of the recognition engine. It
// encapsulates the full classification stack — finger-state extraction,
// multi-method classification, confidence scoring, temporal stabilization —
// into a single, easy-to-use interface: one landmark frame in, one report out.
//
// The pipeline is synchronous and single-threaded by contract. It is invoked
// once per incoming frame and must finish before the next frame is accepted;
// one instance is never shared across concurrent callers without external
// serialization (the arena service provides exactly that).

use crate::core_modules::classifier::classifier;
use crate::core_modules::confidence;
use crate::core_modules::stability::{DEFAULT_SMOOTHING_WINDOW, StabilityTracker};
use serde::Serialize;

// Re-export key data structures for the public API.
pub use crate::core_modules::confidence::{ClassificationResult, GestureFloors};
pub use crate::core_modules::gesture::Gesture;
pub use crate::core_modules::landmark::landmark::{Landmark, LandmarkFrame};

/// Configuration for the GesturePipeline, allowing for tunable behavior.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// How many admitted frames the stability tracker remembers.
    pub smoothing_window: usize,
    /// Per-gesture confidence floors applied by the scorer.
    pub floors: GestureFloors,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            smoothing_window: DEFAULT_SMOOTHING_WINDOW,
            floors: GestureFloors::default(),
        }
    }
}

/// The primary output of the recognition pipeline for a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameReport {
    /// This frame's raw scored classification (may be "no gesture").
    pub classification: ClassificationResult,
    /// The debounced decision, sticky across noisy or empty frames.
    pub stable_gesture: Option<Gesture>,
    /// How many consecutive promotions the stable gesture has survived.
    pub stability_count: u32,
}

/// The main, top-level struct for the recognition engine.
pub struct GesturePipeline {
    tracker: StabilityTracker,
    floors: GestureFloors,
}

impl GesturePipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            tracker: StabilityTracker::with_window(config.smoothing_window),
            floors: config.floors,
        }
    }

    /// Processes one landmark frame through the full stack.
    pub fn observe_frame(&mut self, frame: &LandmarkFrame) -> FrameReport {
        // Stage 1: Finger-State Extraction & Multi-Method Classification
        let votes = classifier::classify(frame);

        // Stage 2: Confidence Scoring
        let classification = confidence::score_with(&votes, &self.floors);

        // Stage 3: Temporal Stabilization
        let stable_gesture = self.tracker.observe(&classification);

        FrameReport {
            classification,
            stable_gesture,
            stability_count: self.tracker.stability_count(),
        }
    }

    /// Processes an explicit "no hand this tick" signal. A frequent, normal
    /// condition — the tracker keeps its previous stable value.
    pub fn observe_absence(&mut self) -> FrameReport {
        let classification = ClassificationResult::none();
        let stable_gesture = self.tracker.observe(&classification);
        FrameReport {
            classification,
            stable_gesture,
            stability_count: self.tracker.stability_count(),
        }
    }

    /// The current debounced gesture, without feeding a frame.
    pub fn stable_gesture(&self) -> Option<Gesture> {
        self.tracker.stable_gesture()
    }

    /// Clears all temporal state. Distinct from hand absence, which clears
    /// nothing.
    pub fn reset(&mut self) {
        self.tracker.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::hands;

    #[test]
    fn repeated_palms_stabilize_to_paper() {
        let mut pipeline = GesturePipeline::new(PipelineConfig::default());
        let palm = hands::open_palm();
        let first = pipeline.observe_frame(&palm);
        assert_eq!(first.classification.gesture, Some(Gesture::Paper));
        assert_eq!(first.stable_gesture, None);

        let second = pipeline.observe_frame(&palm);
        assert_eq!(second.stable_gesture, Some(Gesture::Paper));
        assert_eq!(second.stability_count, 1);
    }

    #[test]
    fn absence_keeps_the_last_stable_gesture() {
        let mut pipeline = GesturePipeline::new(PipelineConfig::default());
        let fist = hands::fist();
        pipeline.observe_frame(&fist);
        pipeline.observe_frame(&fist);
        assert_eq!(pipeline.stable_gesture(), Some(Gesture::Rock));

        for _ in 0..4 {
            let report = pipeline.observe_absence();
            assert_eq!(report.classification.gesture, None);
            assert_eq!(report.stable_gesture, Some(Gesture::Rock));
        }
    }

    #[test]
    fn an_unknown_shape_classifies_as_nothing() {
        let mut pipeline = GesturePipeline::new(PipelineConfig::default());
        let report = pipeline.observe_frame(&hands::three_fingers());
        assert_eq!(report.classification.gesture, None);
        assert_eq!(report.classification.confidence, 0.0);
    }

    #[test]
    fn reset_clears_the_stable_gesture() {
        let mut pipeline = GesturePipeline::new(PipelineConfig::default());
        let scissors = hands::scissors();
        pipeline.observe_frame(&scissors);
        pipeline.observe_frame(&scissors);
        assert_eq!(pipeline.stable_gesture(), Some(Gesture::Scissors));
        pipeline.reset();
        assert_eq!(pipeline.stable_gesture(), None);
    }
}
