// This file is an example of how to use the `gesture_arena` library.
// The main library entry point is `src/lib.rs`.
//
// It spawns the arena service, holds a synthetic "open palm" in front of the
// engine, and plays one countdown round against the Hard opponent. In a real
// application the landmark frames would come from a hand-tracking capture
// loop instead of a fixture.

use gesture_arena::arena::{ArenaService, MatchPhase};
use gesture_arena::pipeline::{LandmarkFrame, PipelineConfig};
use std::time::Duration;

/// A synthetic upright open palm, in normalized image coordinates.
fn open_palm() -> Option<LandmarkFrame> {
    LandmarkFrame::from_points(&[
        (0.50, 0.90, 0.0), // wrist
        (0.46, 0.78, 0.0),
        (0.42, 0.65, 0.0),
        (0.36, 0.60, 0.0),
        (0.30, 0.55, 0.0), // thumb tip
        (0.42, 0.60, 0.0),
        (0.42, 0.45, 0.0),
        (0.42, 0.375, 0.0),
        (0.42, 0.30, 0.0), // index tip
        (0.50, 0.60, 0.0),
        (0.50, 0.45, 0.0),
        (0.50, 0.37, 0.0),
        (0.50, 0.30, 0.0), // middle tip
        (0.58, 0.60, 0.0),
        (0.58, 0.45, 0.0),
        (0.58, 0.375, 0.0),
        (0.58, 0.30, 0.0), // ring tip
        (0.66, 0.62, 0.0),
        (0.66, 0.50, 0.0),
        (0.66, 0.41, 0.0),
        (0.66, 0.33, 0.0), // pinky tip
    ])
}

#[tokio::main]
async fn main() -> Result<(), &'static str> {
    env_logger::init();
    println!("Gesture Arena - Example Runner");

    let handle = ArenaService::spawn(PipelineConfig::default());
    let palm = open_palm().ok_or("fixture frame failed validation")?;

    handle.set_difficulty("hard").await?;
    handle.start_round().await?;

    let mut shown = i32::MAX;
    loop {
        let report = handle.tick(Some(palm.clone())).await?;
        if report.phase == MatchPhase::Countdown && report.countdown < shown {
            shown = report.countdown;
            println!("Get Ready! Starting in {}", report.countdown);
        }
        if let Some(record) = report.locked_round {
            println!("You: {:?}  Computer: {:?}", record.user_choice, record.computer_choice);
            println!("{}", record.outcome);
            break;
        }
        tokio::time::sleep(Duration::from_millis(200)).await;
    }

    let status = handle.status().await?;
    let json = serde_json::to_string_pretty(&status).map_err(|_| "status failed to serialize")?;
    println!("{json}");
    Ok(())
}
