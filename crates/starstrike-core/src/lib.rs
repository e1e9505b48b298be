//! Core types and definitions for the STARSTRIKE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, run state, camera, events, configuration, and constants.
//! It has no dependency on a renderer or any runtime framework.

pub mod camera;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
