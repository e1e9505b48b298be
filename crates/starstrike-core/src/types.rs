//! Fundamental geometric and simulation types.

use glam::{Mat3, Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::EPSILON_SQ;

/// World-space position and orientation of a body.
///
/// Bodies look down their local -Z axis; local +Y is up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
        }
    }
}

impl Pose {
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Unit forward direction (local -Z in world space).
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Unit up direction (local +Y in world space).
    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// Unit right direction (local +X in world space).
    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    /// Transform a point from this body's local frame into world space.
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        self.position + self.orientation * local
    }

    /// Range to another point (3D distance).
    pub fn range_to(&self, point: Vec3) -> f32 {
        self.position.distance(point)
    }
}

/// Normalized player input for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerInput {
    /// Aim vector in [-1, 1]², screen-space (x right, y up).
    pub aim: Vec2,
    /// Whether the fire button is held.
    pub firing: bool,
}

impl PlayerInput {
    pub fn new(aim: Vec2, firing: bool) -> Self {
        Self {
            aim: aim.clamp(Vec2::splat(-1.0), Vec2::splat(1.0)),
            firing,
        }
    }
}

/// 24-bit display color (0xRRGGBB).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u32);

impl Rgb {
    pub const GREEN: Rgb = Rgb(0x00_ff_00);
    pub const YELLOW: Rgb = Rgb(0xff_ff_00);
    pub const RED: Rgb = Rgb(0xff_00_00);
    pub const BLUE: Rgb = Rgb(0x00_80_ff);
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt as f64;
    }
}

/// Normalize `v`, or return `fallback` if `v` is (nearly) zero or not finite.
pub fn normalize_or(v: Vec3, fallback: Vec3) -> Vec3 {
    if v.length_squared() <= EPSILON_SQ || !v.is_finite() {
        return fallback;
    }
    v.normalize()
}

/// Rotation that makes a body look along `direction` with the given `up` hint.
///
/// Returns `None` when `direction` is degenerate. If `up` is parallel to
/// `direction` an arbitrary perpendicular up is chosen.
pub fn look_rotation(direction: Vec3, up: Vec3) -> Option<Quat> {
    if direction.length_squared() <= EPSILON_SQ || !direction.is_finite() {
        return None;
    }
    // Bodies look down -Z, so the local Z axis points away from the target.
    let z_axis = -direction.normalize();
    let mut x_axis = up.cross(z_axis);
    if x_axis.length_squared() <= EPSILON_SQ {
        x_axis = z_axis.any_orthonormal_vector().cross(z_axis);
    }
    let x_axis = x_axis.normalize();
    let y_axis = z_axis.cross(x_axis);
    Some(Quat::from_mat3(&Mat3::from_cols(x_axis, y_axis, z_axis)).normalize())
}
