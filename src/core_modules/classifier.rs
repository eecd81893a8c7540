// THEORY:
// The `classifier` module is the decision engine of the recognition layer. It
// maps a single frame's finger/landmark state to a gesture guess using three
// independent heuristics, each looking at the hand through a different lens:
//
// 1.  **Finger Counting**: The primary method. Counts extended fingers from the
//     `FingerStateVector` and maps the count (plus the exact index+middle shape)
//     to a gesture. Cheap, robust, and the decision the rest of the engine
//     actually follows.
// 2.  **Distance Pattern**: Measures how far the fingertips reach from the wrist
//     and how widely adjacent extended tips are splayed. An open reaching hand
//     with wide splay reads as Paper; a reaching hand with a tight index/middle
//     pair reads as Scissors; a hand whose tips stay near the wrist reads Rock.
// 3.  **Joint Angles**: Measures the bend at each non-thumb middle joint. Nearly
//     straight fingers read as extended, sharply bent ones as curled.
//
// The distance and angle methods never outvote the primary — they exist purely
// as corroboration inputs for the confidence scorer. All three are total, pure
// functions over a single frame: no history, no state, no randomness.

use crate::core_modules::finger_state::{self, FingerStateVector};
use crate::core_modules::gesture::Gesture;
use crate::core_modules::landmark::landmark::*;

pub mod classifier {
    use super::*;

    /// Mean fingertip reach above which the hand counts as "open".
    const OPEN_REACH_THRESHOLD: f64 = 0.30;
    /// Mean fingertip reach below which the hand counts as a closed fist.
    const CURLED_REACH_THRESHOLD: f64 = 0.22;
    /// Per-tip reach for a single fingertip to count as extended in the
    /// distance heuristic (which deliberately ignores the finger-state vector).
    const TIP_EXTENDED_REACH: f64 = 0.32;
    /// Mean adjacent-tip splay above which extended fingers count as spread out.
    const WIDE_SPREAD_THRESHOLD: f64 = 0.10;
    /// Maximum index-to-middle tip gap for the scissors shape.
    const SCISSOR_PAIR_GAP: f64 = 0.10;
    /// A middle-joint bend angle above this is a straight finger.
    const STRAIGHT_ANGLE_DEG: f64 = 160.0;
    /// A middle-joint bend angle below this is a sharply bent finger.
    const BENT_ANGLE_DEG: f64 = 120.0;

    /// The three independent guesses for one frame. `primary` is the decision;
    /// the other two only feed the confidence scorer.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct MethodVotes {
        pub primary: Option<Gesture>,
        pub distance: Option<Gesture>,
        pub angle: Option<Gesture>,
    }

    /// Runs all three heuristics on one frame.
    pub fn classify(frame: &LandmarkFrame) -> MethodVotes {
        let fingers = finger_state::extract(frame);
        MethodVotes {
            primary: classify_by_count(&fingers),
            distance: classify_by_distance(frame),
            angle: classify_by_angle(frame),
        }
    }

    /// Finger-counting method: the primary decision.
    pub fn classify_by_count(fingers: &FingerStateVector) -> Option<Gesture> {
        let total = fingers.extended_count();
        if total >= 4 {
            Some(Gesture::Paper)
        } else if total == 2 && fingers.is_scissor_pair() {
            Some(Gesture::Scissors)
        } else if total <= 2 {
            Some(Gesture::Rock)
        } else {
            // Three extended fingers matches no gesture shape.
            None
        }
    }

    /// Distance method: fingertip reach from the wrist plus adjacent-tip splay.
    pub fn classify_by_distance(frame: &LandmarkFrame) -> Option<Gesture> {
        let wrist = frame.wrist();
        let tips: Vec<Landmark> = FINGERTIPS.iter().map(|&i| frame.point(i)).collect();

        // --- 1. Reach ---
        let reaches: Vec<f64> = tips.iter().map(|tip| tip.distance_to(&wrist)).collect();
        let mean_reach = reaches.iter().sum::<f64>() / reaches.len() as f64;
        if mean_reach < CURLED_REACH_THRESHOLD {
            return Some(Gesture::Rock);
        }
        if mean_reach < OPEN_REACH_THRESHOLD {
            return None;
        }

        // --- 2. Splay among reaching tips ---
        // Only tips that actually reach are compared; a curled ring finger
        // sitting between two extended ones would otherwise dominate the mean.
        let extended: Vec<usize> = (0..tips.len())
            .filter(|&i| reaches[i] > TIP_EXTENDED_REACH)
            .collect();
        let spread = mean_adjacent_gap(&tips, &extended);
        if spread > WIDE_SPREAD_THRESHOLD {
            return Some(Gesture::Paper);
        }

        // --- 3. Tight index/middle pair ---
        // Tip slots 1 and 2 are index and middle in canonical order.
        let pair_reaching = extended.contains(&1) && extended.contains(&2);
        if pair_reaching && tips[1].distance_to(&tips[2]) < SCISSOR_PAIR_GAP {
            return Some(Gesture::Scissors);
        }
        None
    }

    /// Angle method: bend at each non-thumb middle joint.
    pub fn classify_by_angle(frame: &LandmarkFrame) -> Option<Gesture> {
        let angles = [
            bend_angle(frame, INDEX_MCP, INDEX_PIP, INDEX_TIP),
            bend_angle(frame, MIDDLE_MCP, MIDDLE_PIP, MIDDLE_TIP),
            bend_angle(frame, RING_MCP, RING_PIP, RING_TIP),
            bend_angle(frame, PINKY_MCP, PINKY_PIP, PINKY_TIP),
        ];
        let straight = angles.iter().filter(|&&a| a > STRAIGHT_ANGLE_DEG).count();
        let bent = angles.iter().filter(|&&a| a < BENT_ANGLE_DEG).count();

        if straight >= 3 {
            Some(Gesture::Paper)
        } else if straight == 2 && angles[0] > STRAIGHT_ANGLE_DEG && angles[1] > STRAIGHT_ANGLE_DEG
        {
            Some(Gesture::Scissors)
        } else if bent >= 3 {
            Some(Gesture::Rock)
        } else {
            None
        }
    }

    /// Mean distance between consecutive extended tips, in canonical order.
    /// Fewer than two extended tips means there is no splay to measure.
    fn mean_adjacent_gap(tips: &[Landmark], extended: &[usize]) -> f64 {
        if extended.len() < 2 {
            return 0.0;
        }
        let gaps: Vec<f64> = extended
            .windows(2)
            .map(|pair| tips[pair[0]].distance_to(&tips[pair[1]]))
            .collect();
        gaps.iter().sum::<f64>() / gaps.len() as f64
    }

    /// Interior angle at the middle joint, in degrees: 180° is a perfectly
    /// straight finger, small values a sharply curled one.
    fn bend_angle(frame: &LandmarkFrame, mcp: usize, pip: usize, tip: usize) -> f64 {
        let base = frame.point(mcp);
        let joint = frame.point(pip);
        let tip = frame.point(tip);
        let to_base = (base.x - joint.x, base.y - joint.y);
        let to_tip = (tip.x - joint.x, tip.y - joint.y);
        let mag = |v: (f64, f64)| (v.0 * v.0 + v.1 * v.1).sqrt();
        let (len_base, len_tip) = (mag(to_base), mag(to_tip));
        if len_base < 1e-9 || len_tip < 1e-9 {
            // Overlapping joints only happen on a fully collapsed finger.
            return 0.0;
        }
        let cos = ((to_base.0 * to_tip.0 + to_base.1 * to_tip.1) / (len_base * len_tip))
            .clamp(-1.0, 1.0);
        cos.acos().to_degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::classifier::*;
    use crate::core_modules::finger_state::FingerStateVector;
    use crate::core_modules::gesture::Gesture;
    use crate::core_modules::hands;

    fn vector(states: [bool; 5]) -> FingerStateVector {
        FingerStateVector {
            thumb: states[0],
            index: states[1],
            middle: states[2],
            ring: states[3],
            pinky: states[4],
        }
    }

    #[test]
    fn count_method_maps_the_canonical_shapes() {
        assert_eq!(
            classify_by_count(&vector([false; 5])),
            Some(Gesture::Rock)
        );
        assert_eq!(classify_by_count(&vector([true; 5])), Some(Gesture::Paper));
        assert_eq!(
            classify_by_count(&vector([false, true, true, false, false])),
            Some(Gesture::Scissors)
        );
    }

    #[test]
    fn count_method_treats_odd_pairs_as_rock_and_three_as_nothing() {
        // Two extended fingers that are not the scissors pair still read Rock.
        assert_eq!(
            classify_by_count(&vector([true, false, false, false, true])),
            Some(Gesture::Rock)
        );
        assert_eq!(
            classify_by_count(&vector([false, true, true, true, false])),
            None
        );
    }

    #[test]
    fn all_methods_agree_on_an_open_palm() {
        let votes = classify(&hands::open_palm());
        assert_eq!(votes.primary, Some(Gesture::Paper));
        assert_eq!(votes.distance, Some(Gesture::Paper));
        assert_eq!(votes.angle, Some(Gesture::Paper));
    }

    #[test]
    fn all_methods_agree_on_a_fist() {
        let votes = classify(&hands::fist());
        assert_eq!(votes.primary, Some(Gesture::Rock));
        assert_eq!(votes.distance, Some(Gesture::Rock));
        assert_eq!(votes.angle, Some(Gesture::Rock));
    }

    #[test]
    fn all_methods_agree_on_scissors() {
        let votes = classify(&hands::scissors());
        assert_eq!(votes.primary, Some(Gesture::Scissors));
        assert_eq!(votes.distance, Some(Gesture::Scissors));
        assert_eq!(votes.angle, Some(Gesture::Scissors));
    }

    #[test]
    fn three_fingers_yield_no_primary_gesture() {
        let votes = classify(&hands::three_fingers());
        assert_eq!(votes.primary, None);
    }
}
