// THEORY:
// This file is the main entry point for the `gesture_arena` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the public
// API that will be exposed to external consumers (like a capture/transport
// orchestrator).
//
// The primary goal is to export the `GesturePipeline` and the arena layer
// (`MatchController`, `ArenaService`) as the clean, high-level interface for
// the entire engine. The internal analytical modules (`core_modules`) are
// encapsulated behind them: collaborators feed landmark frames in and get
// classification reports, round records, and session status out — no pixels,
// no cameras, no wire formats.

pub mod arena;
pub mod core_modules;
pub mod pipeline;
