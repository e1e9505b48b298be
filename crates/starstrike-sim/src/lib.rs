//! Simulation engine for STARSTRIKE.
//!
//! Owns the hecs ECS world through the entity manager, runs the mission
//! stages, combat, and per-entity systems at a variable tick, and produces
//! `SimSnapshot`s plus scene and gameplay events for the frontend.

pub mod aim;
pub mod combat;
pub mod engine;
pub mod entities;
pub mod mission;
pub mod player;
pub mod systems;

pub use starstrike_core as core;
pub use engine::SimulationEngine;
