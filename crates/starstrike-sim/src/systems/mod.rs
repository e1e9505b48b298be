//! Per-entity systems run by the entity manager each tick.
//!
//! Systems are pure functions over `&mut World` and a spawn-ordered roster.
//! They do not own state; all state lives in components.

pub mod beams;
pub mod cleanup;
pub mod enemy_ai;
pub mod projectiles;
