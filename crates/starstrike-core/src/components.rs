//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::types::Rgb;

/// Enemy fighter state. Pose and AI strategy live in sibling components.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Enemy {
    /// Set when the enemy has been shot down; it is removed on the next pass.
    pub exploded: bool,
    /// Seconds until this enemy may fire again.
    pub fire_cooldown: f32,
}

/// Enemy projectile ("fireball").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub position: Vec3,
    /// Position at the start of the current tick. Required for swept collision.
    pub previous_position: Vec3,
    pub velocity: Vec3,
    pub exploded: bool,
    /// Seconds since the projectile exploded.
    pub explosion_timer: f32,
}

/// Player beam weapon. Lives entirely in screen space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamWeapon {
    /// Muzzle position in NDC.
    pub origin: Vec2,
    /// Aim point in NDC.
    pub target: Vec2,
    /// Travel progress in [0, 1].
    pub progress: f32,
    /// Seconds of travel accumulated so far.
    pub elapsed_secs: f32,
    pub color: Rgb,
}
