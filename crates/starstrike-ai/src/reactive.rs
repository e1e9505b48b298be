//! Reactive ("dumb") strategy: rides a fixed lead ahead of the player.

use glam::Vec3;

use starstrike_core::config::ReactiveConfig;
use starstrike_core::types::Pose;

use crate::fire::decide_fire;
use crate::rng::RandomSource;
use crate::strategy::StrategyContext;

#[derive(Debug, Clone, Default)]
pub struct ReactiveStrategy {
    elapsed: f32,
}

impl ReactiveStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Pose at the current time: lead ahead, swaying sideways, facing with the player.
    pub fn pose_for(&self, player: &Pose, config: &ReactiveConfig) -> Pose {
        let sway = (self.elapsed * config.sway_frequency).sin() * config.sway_amplitude;
        let local = Vec3::new(sway, 0.0, -config.lead_distance);
        Pose::new(player.to_world(local), player.orientation)
    }

    pub fn update(
        &mut self,
        ctx: &StrategyContext,
        pose: &mut Pose,
        fire_cooldown: &mut f32,
        rng: &mut dyn RandomSource,
    ) -> Option<Vec3> {
        self.elapsed += ctx.dt.max(0.0);
        *pose = self.pose_for(&ctx.player, &ctx.tuning.reactive);
        decide_fire(ctx, pose.position, fire_cooldown, rng)
    }
}
