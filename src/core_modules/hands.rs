// Synthetic hand fixtures shared by the unit tests. Coordinates are normalized
// image coordinates (y grows downward) for a hand filling most of the frame,
// matching what the upstream tracker emits.

use crate::core_modules::landmark::landmark::LandmarkFrame;

pub fn frame(points: &[(f64, f64, f64)]) -> LandmarkFrame {
    LandmarkFrame::from_points(points).expect("fixture points must form a valid frame")
}

/// Vertical hand, all five fingers extended and splayed.
pub fn open_palm_points() -> Vec<(f64, f64, f64)> {
    vec![
        (0.50, 0.90, 0.0), // wrist
        (0.46, 0.78, 0.0), // thumb cmc
        (0.42, 0.65, 0.0), // thumb mcp
        (0.36, 0.60, 0.0), // thumb ip
        (0.30, 0.55, 0.0), // thumb tip
        (0.42, 0.60, 0.0), // index mcp
        (0.42, 0.45, 0.0), // index pip
        (0.42, 0.375, 0.0),
        (0.42, 0.30, 0.0), // index tip
        (0.50, 0.60, 0.0), // middle mcp
        (0.50, 0.45, 0.0), // middle pip
        (0.50, 0.37, 0.0),
        (0.50, 0.30, 0.0), // middle tip
        (0.58, 0.60, 0.0), // ring mcp
        (0.58, 0.45, 0.0), // ring pip
        (0.58, 0.375, 0.0),
        (0.58, 0.30, 0.0), // ring tip
        (0.66, 0.62, 0.0), // pinky mcp
        (0.66, 0.50, 0.0), // pinky pip
        (0.66, 0.41, 0.0),
        (0.66, 0.33, 0.0), // pinky tip
    ]
}

/// Vertical hand, every finger curled into the palm.
pub fn fist_points() -> Vec<(f64, f64, f64)> {
    vec![
        (0.50, 0.90, 0.0), // wrist
        (0.46, 0.80, 0.0),
        (0.42, 0.70, 0.0), // thumb mcp
        (0.43, 0.68, 0.0),
        (0.46, 0.72, 0.0), // thumb tip, tucked across the palm
        (0.42, 0.60, 0.0), // index mcp
        (0.44, 0.52, 0.0), // index pip
        (0.45, 0.60, 0.0),
        (0.45, 0.70, 0.0), // index tip, curled below its pip
        (0.50, 0.60, 0.0),
        (0.50, 0.52, 0.0),
        (0.50, 0.60, 0.0),
        (0.50, 0.70, 0.0),
        (0.58, 0.60, 0.0),
        (0.56, 0.52, 0.0),
        (0.55, 0.60, 0.0),
        (0.55, 0.70, 0.0),
        (0.66, 0.62, 0.0),
        (0.63, 0.55, 0.0),
        (0.62, 0.62, 0.0),
        (0.62, 0.72, 0.0),
    ]
}

/// Vertical hand, index and middle extended, the rest curled.
pub fn scissors_points() -> Vec<(f64, f64, f64)> {
    vec![
        (0.50, 0.90, 0.0), // wrist
        (0.46, 0.80, 0.0),
        (0.42, 0.70, 0.0), // thumb mcp
        (0.44, 0.68, 0.0),
        (0.46, 0.72, 0.0), // thumb tip
        (0.42, 0.60, 0.0), // index mcp
        (0.42, 0.45, 0.0), // index pip
        (0.44, 0.375, 0.0),
        (0.45, 0.30, 0.0), // index tip
        (0.50, 0.60, 0.0), // middle mcp
        (0.50, 0.45, 0.0), // middle pip
        (0.52, 0.38, 0.0),
        (0.53, 0.32, 0.0), // middle tip
        (0.58, 0.60, 0.0), // ring mcp
        (0.58, 0.50, 0.0), // ring pip
        (0.58, 0.60, 0.0),
        (0.58, 0.70, 0.0), // ring tip, curled
        (0.66, 0.62, 0.0), // pinky mcp
        (0.64, 0.55, 0.0), // pinky pip
        (0.63, 0.62, 0.0),
        (0.63, 0.72, 0.0), // pinky tip, curled
    ]
}

/// Vertical hand with index, middle and ring extended: maps to no gesture.
pub fn three_finger_points() -> Vec<(f64, f64, f64)> {
    vec![
        (0.50, 0.90, 0.0),
        (0.46, 0.80, 0.0),
        (0.42, 0.70, 0.0),
        (0.44, 0.68, 0.0),
        (0.46, 0.72, 0.0), // thumb curled
        (0.42, 0.60, 0.0),
        (0.42, 0.45, 0.0),
        (0.42, 0.375, 0.0),
        (0.42, 0.30, 0.0), // index extended
        (0.50, 0.60, 0.0),
        (0.50, 0.45, 0.0),
        (0.50, 0.37, 0.0),
        (0.50, 0.30, 0.0), // middle extended
        (0.58, 0.60, 0.0),
        (0.58, 0.45, 0.0),
        (0.58, 0.375, 0.0),
        (0.58, 0.30, 0.0), // ring extended
        (0.66, 0.62, 0.0),
        (0.64, 0.55, 0.0),
        (0.63, 0.62, 0.0),
        (0.63, 0.72, 0.0), // pinky curled
    ]
}

/// Hand pointing across the frame: horizontal orientation, all fingers extended.
pub fn horizontal_palm_points() -> Vec<(f64, f64, f64)> {
    vec![
        (0.15, 0.50, 0.0), // wrist
        (0.22, 0.46, 0.0),
        (0.28, 0.42, 0.0), // thumb mcp
        (0.33, 0.39, 0.0),
        (0.38, 0.36, 0.0), // thumb tip
        (0.35, 0.44, 0.0), // index mcp
        (0.50, 0.44, 0.0), // index pip
        (0.60, 0.44, 0.0),
        (0.70, 0.44, 0.0), // index tip
        (0.35, 0.50, 0.0),
        (0.50, 0.50, 0.0),
        (0.62, 0.50, 0.0),
        (0.75, 0.50, 0.0), // middle tip
        (0.35, 0.56, 0.0),
        (0.50, 0.56, 0.0),
        (0.61, 0.56, 0.0),
        (0.72, 0.56, 0.0),
        (0.35, 0.62, 0.0),
        (0.47, 0.62, 0.0),
        (0.56, 0.62, 0.0),
        (0.65, 0.62, 0.0), // pinky tip
    ]
}

pub fn open_palm() -> LandmarkFrame {
    frame(&open_palm_points())
}

pub fn fist() -> LandmarkFrame {
    frame(&fist_points())
}

pub fn scissors() -> LandmarkFrame {
    frame(&scissors_points())
}

pub fn three_fingers() -> LandmarkFrame {
    frame(&three_finger_points())
}

pub fn horizontal_palm() -> LandmarkFrame {
    frame(&horizontal_palm_points())
}
