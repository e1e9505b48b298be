//! Enemy AI for STARSTRIKE.
//!
//! Implements the reactive and scripted behavior strategies, the shared
//! enemy gunnery rule, and the injectable random source that keeps them
//! reproducible.

pub mod fire;
pub mod reactive;
pub mod rng;
pub mod scripted;
pub mod strategy;
pub mod tuning;

pub use starstrike_core as core;
pub use strategy::{AiStrategy, StrategyContext};

#[cfg(test)]
mod tests;
