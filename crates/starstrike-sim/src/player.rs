//! Player ship flight model.

use glam::{Quat, Vec2, Vec3};

use starstrike_core::config::PlayerConfig;
use starstrike_core::enums::FlightMode;
use starstrike_core::types::Pose;

#[derive(Debug, Clone)]
pub struct Player {
    pose: Pose,
    mode: FlightMode,
    config: PlayerConfig,
    /// Set while the run is over; the ship stops advancing.
    frozen: bool,
}

impl Player {
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            pose: Pose::default(),
            mode: FlightMode::default(),
            config: config.clone(),
            frozen: false,
        }
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn mode(&self) -> FlightMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: FlightMode) {
        self.mode = mode;
    }

    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.pose.position = position;
    }

    pub fn set_orientation(&mut self, orientation: Quat) {
        self.pose.orientation = orientation.normalize();
    }

    /// World-space velocity along the nose; zero once frozen.
    pub fn velocity(&self) -> Vec3 {
        if self.frozen {
            return Vec3::ZERO;
        }
        self.pose.forward() * self.config.speed
    }

    /// Apply one tick of steering and forward motion.
    ///
    /// Free mode yaws and pitches by `aim`; strafe mode slides along the
    /// local X/Y axes instead.
    pub fn update(&mut self, dt: f32, aim: Vec2, frozen: bool) {
        self.frozen = frozen;
        match self.mode {
            FlightMode::Free => {
                let yaw = -aim.x * self.config.turn_rate * dt;
                let pitch = aim.y * self.config.turn_rate * dt;
                self.pose.orientation = (self.pose.orientation
                    * Quat::from_rotation_y(yaw)
                    * Quat::from_rotation_x(pitch))
                .normalize();
            }
            FlightMode::Strafe => {
                let slide = self.pose.right() * aim.x + self.pose.up() * aim.y;
                self.pose.position += slide * self.config.strafe_speed * dt;
            }
        }
        if !frozen {
            self.pose.position += self.velocity() * dt;
        }
    }
}
