// THEORY:
// The `finger_state` module is the first analytical layer of the gesture system.
// It reduces a full 21-point hand observation to the five facts the classifier
// actually reasons about: which fingers are extended. Like the comparative
// analysis layers elsewhere in this codebase, it owns no state — it relates
// landmarks within a single frame and nothing more.
//
// Key architectural principles:
// 1.  **Orientation Awareness**: "Extended" means something different for a hand
//     held upright versus one pointing across the frame. The extractor first
//     decides the hand's dominant axis from the wrist-to-middle-fingertip
//     displacement, then applies the rule set for that axis.
// 2.  **Thumb as a Special Case**: The thumb articulates sideways rather than
//     lengthwise, so it gets its own displacement/distance rule in each
//     orientation instead of the tip-above-joint rule the other fingers share.
// 3.  **Canonical Output**: The result is always the same 5-slot vector in
//     thumb-to-pinky order, so downstream heuristics can index it blindly.

use crate::core_modules::landmark::landmark::*;

/// A hand must displace this many times further along one axis than the other
/// for that axis to count as its dominant orientation.
const ORIENTATION_RATIO: f64 = 1.2;
/// Minimum sideways thumb-tip displacement from the thumb base (vertical hands).
const THUMB_SPREAD_THRESHOLD: f64 = 0.06;
/// Minimum thumb-tip-to-base distance (horizontal hands, where pure x
/// displacement is unreliable).
const THUMB_REACH_THRESHOLD: f64 = 0.08;
/// A fingertip must sit at least this far above its middle joint to count as
/// extended on a vertical hand.
const TIP_RISE_MARGIN: f64 = 0.015;
/// On a horizontal hand, the tip-to-base distance must exceed the
/// middle-joint-to-base distance by this factor.
const HORIZONTAL_EXTENSION_RATIO: f64 = 1.4;

/// The dominant axis of the observed hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOrientation {
    Vertical,
    Horizontal,
}

/// Which of the five fingers are extended, in canonical thumb-to-pinky order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FingerStateVector {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerStateVector {
    pub fn as_array(&self) -> [bool; 5] {
        [self.thumb, self.index, self.middle, self.ring, self.pinky]
    }

    /// Total number of extended fingers.
    pub fn extended_count(&self) -> usize {
        self.as_array().iter().filter(|&&f| f).count()
    }

    /// The exact scissors shape: index and middle up, ring and pinky down.
    pub fn is_scissor_pair(&self) -> bool {
        self.index && self.middle && !self.ring && !self.pinky
    }
}

/// Decides the hand's dominant axis by comparing the vertical and horizontal
/// displacement between the middle fingertip and the wrist.
pub fn orientation(frame: &LandmarkFrame) -> HandOrientation {
    let wrist = frame.wrist();
    let middle_tip = frame.point(MIDDLE_TIP);
    let dx = (middle_tip.x - wrist.x).abs();
    let dy = (middle_tip.y - wrist.y).abs();
    if dy > dx * ORIENTATION_RATIO {
        HandOrientation::Vertical
    } else {
        HandOrientation::Horizontal
    }
}

/// Derives the finger state vector for one frame. Pure and total: every valid
/// frame maps to exactly one vector, recomputed from scratch each tick.
pub fn extract(frame: &LandmarkFrame) -> FingerStateVector {
    let orientation = orientation(frame);
    FingerStateVector {
        thumb: thumb_extended(frame, orientation),
        index: finger_extended(frame, INDEX_MCP, INDEX_PIP, INDEX_TIP, orientation),
        middle: finger_extended(frame, MIDDLE_MCP, MIDDLE_PIP, MIDDLE_TIP, orientation),
        ring: finger_extended(frame, RING_MCP, RING_PIP, RING_TIP, orientation),
        pinky: finger_extended(frame, PINKY_MCP, PINKY_PIP, PINKY_TIP, orientation),
    }
}

fn thumb_extended(frame: &LandmarkFrame, orientation: HandOrientation) -> bool {
    let tip = frame.point(THUMB_TIP);
    let base = frame.point(THUMB_MCP);
    match orientation {
        // Upright hand: an extended thumb splays sideways from its base joint.
        HandOrientation::Vertical => (tip.x - base.x).abs() > THUMB_SPREAD_THRESHOLD,
        // Sideways hand: x displacement is ambiguous, fall back to raw reach.
        HandOrientation::Horizontal => tip.distance_to(&base) > THUMB_REACH_THRESHOLD,
    }
}

fn finger_extended(
    frame: &LandmarkFrame,
    mcp: usize,
    pip: usize,
    tip: usize,
    orientation: HandOrientation,
) -> bool {
    let base = frame.point(mcp);
    let middle_joint = frame.point(pip);
    let tip = frame.point(tip);
    match orientation {
        // Image y grows downward, so "above" is a smaller y.
        HandOrientation::Vertical => tip.y < middle_joint.y - TIP_RISE_MARGIN,
        HandOrientation::Horizontal => {
            tip.distance_to(&base) > middle_joint.distance_to(&base) * HORIZONTAL_EXTENSION_RATIO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::hands;

    #[test]
    fn open_palm_extends_all_five() {
        let state = extract(&hands::open_palm());
        assert_eq!(state.as_array(), [true; 5]);
        assert_eq!(state.extended_count(), 5);
    }

    #[test]
    fn fist_extends_none() {
        let state = extract(&hands::fist());
        assert_eq!(state.extended_count(), 0);
    }

    #[test]
    fn scissors_is_exactly_index_and_middle() {
        let state = extract(&hands::scissors());
        assert!(state.is_scissor_pair());
        assert_eq!(state.extended_count(), 2);
        assert!(!state.thumb);
    }

    #[test]
    fn sideways_hand_is_horizontal_and_open() {
        let frame = hands::horizontal_palm();
        assert_eq!(orientation(&frame), HandOrientation::Horizontal);
        assert_eq!(extract(&frame).extended_count(), 5);
    }

    #[test]
    fn upright_hand_is_vertical() {
        assert_eq!(orientation(&hands::open_palm()), HandOrientation::Vertical);
    }

    #[test]
    fn orientation_flips_the_thumb_rule() {
        // A thumb tip 0.07 from its base: splayed enough for the vertical rule
        // (0.06) but short of the horizontal reach threshold (0.08).
        let mut points = hands::horizontal_palm_points();
        points[2] = (0.28, 0.42, 0.0); // thumb mcp
        points[4] = (0.35, 0.42, 0.0); // thumb tip, 0.07 away
        let horizontal = hands::frame(&points);
        assert_eq!(orientation(&horizontal), HandOrientation::Horizontal);
        assert!(!extract(&horizontal).thumb);

        let mut points = hands::open_palm_points();
        points[2] = (0.42, 0.65, 0.0); // thumb mcp
        points[4] = (0.49, 0.60, 0.0); // thumb tip, |dx| = 0.07
        let vertical = hands::frame(&points);
        assert_eq!(orientation(&vertical), HandOrientation::Vertical);
        assert!(extract(&vertical).thumb);
    }
}
