//! STARSTRIKE headless runner.
//!
//! Wires the simulation engine to a game-loop thread, feeds it input from
//! the autopilot or from commands, and collects a run report.

pub mod autopilot;
pub mod game_loop;
pub mod state;

pub use starstrike_core as core;
