//! Surface approach: the player is steered toward a large landmark.

use glam::{Quat, Vec3};

use starstrike_core::config::MissionConfig;
use starstrike_core::events::{SceneEvent, Scenery, Visual};
use starstrike_core::types::look_rotation;

use super::{MissionContext, StageStatus};

#[derive(Debug, Clone)]
pub struct ApproachStage {
    center: Vec3,
    radius: f32,
    /// Accumulated landmark spin about its Y axis (radians).
    spin: f32,
    steer_rate: f32,
    spin_rate: f32,
    arrival_distance: f32,
}

impl ApproachStage {
    /// Clear the sky and place the landmark ahead of, and off to the side
    /// of, the player's heading.
    pub fn enter(config: &MissionConfig, ctx: &mut MissionContext) -> Self {
        ctx.entities.set_spawning_enabled(false);
        ctx.entities.clear();

        let local = Vec3::new(
            config.landmark_lateral_offset,
            config.landmark_vertical_offset,
            -config.landmark_distance,
        );
        let center = ctx.player.pose().to_world(local);
        ctx.entities.emit_scene_event(SceneEvent::SceneryAdded {
            scenery: Scenery::Landmark,
            visual: Visual::Landmark {
                center,
                radius: config.landmark_radius,
            },
        });
        log::debug!("landmark placed at {}", center);

        Self {
            center,
            radius: config.landmark_radius,
            spin: 0.0,
            steer_rate: config.steer_rate,
            spin_rate: config.spin_rate,
            arrival_distance: config.arrival_distance,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn spin(&self) -> f32 {
        self.spin
    }

    pub fn orientation(&self) -> Quat {
        Quat::from_rotation_y(self.spin)
    }

    pub fn update(&mut self, ctx: &mut MissionContext) -> StageStatus {
        let pose = *ctx.player.pose();
        if let Some(target) = look_rotation(self.center - pose.position, pose.up()) {
            let blend = (self.steer_rate * ctx.dt).clamp(0.0, 1.0);
            ctx.player.set_orientation(pose.orientation.slerp(target, blend));
        }
        self.spin += self.spin_rate * ctx.dt;

        let distance = ctx.player.pose().position.distance(self.center);
        if distance <= self.arrival_distance + self.radius {
            StageStatus::Complete
        } else {
            StageStatus::Continue
        }
    }

    pub fn cleanup(&mut self, ctx: &mut MissionContext) {
        ctx.entities.emit_scene_event(SceneEvent::SceneryRemoved {
            scenery: Scenery::Landmark,
        });
    }
}
