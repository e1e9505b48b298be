//! Scripted ("smart") strategy: approach, shadow the player, then escape.
//!
//! Motion is computed as an offset in the player's local frame and projected
//! into world space every tick, so the enemy keeps formation however the
//! player turns. Orientation follows the enemy's actual world displacement.

use std::f32::consts::TAU;

use glam::Vec3;

use starstrike_core::config::ScriptedConfig;
use starstrike_core::enums::{EscapeMode, ScriptedPhase};
use starstrike_core::types::{look_rotation, normalize_or, Pose, Rgb};

use crate::fire::decide_fire;
use crate::rng::RandomSource;
use crate::strategy::StrategyContext;

/// Chosen escape trajectory, in the player's local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeTrajectory {
    pub mode: EscapeMode,
    /// Unit direction.
    pub direction: Vec3,
}

#[derive(Debug, Clone)]
pub struct ScriptedStrategy {
    phase: ScriptedPhase,
    /// Position relative to the player, player-local frame (-Z ahead).
    offset: Vec3,
    /// Total time alive; drives the wobble and arc swing.
    elapsed: f32,
    phase_elapsed: f32,
    intensity: f32,
    escape_start_intensity: f32,
    escape: Option<EscapeTrajectory>,
    /// Per-instance phase offset of the arc swing.
    arc_phase: f32,
}

impl ScriptedStrategy {
    /// New strategy at a randomized spawn offset far ahead of the player.
    pub fn new(config: &ScriptedConfig, rng: &mut dyn RandomSource) -> Self {
        let offset = Vec3::new(
            rng.signed(config.spawn_spread),
            rng.signed(config.spawn_spread * 0.5),
            -config.spawn_distance,
        );
        Self {
            phase: ScriptedPhase::Approach,
            offset,
            elapsed: 0.0,
            phase_elapsed: 0.0,
            intensity: 0.0,
            escape_start_intensity: 0.0,
            escape: None,
            arc_phase: rng.range(0.0, TAU),
        }
    }

    pub fn phase(&self) -> ScriptedPhase {
        self.phase
    }

    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn escape(&self) -> Option<EscapeTrajectory> {
        self.escape
    }

    pub fn debug_color(&self) -> Rgb {
        match self.phase {
            ScriptedPhase::Approach => Rgb::YELLOW,
            ScriptedPhase::Shadow => Rgb::RED,
            ScriptedPhase::Escape => Rgb::BLUE,
        }
    }

    pub fn update(
        &mut self,
        ctx: &StrategyContext,
        pose: &mut Pose,
        fire_cooldown: &mut f32,
        rng: &mut dyn RandomSource,
    ) -> Option<Vec3> {
        let config = &ctx.tuning.scripted;
        let dt = ctx.dt.max(0.0);
        self.elapsed += dt;
        self.phase_elapsed += dt;

        match self.phase {
            ScriptedPhase::Approach => self.advance_approach(config, dt),
            ScriptedPhase::Shadow => self.advance_shadow(config, rng),
            ScriptedPhase::Escape => self.advance_escape(config, dt),
        }

        let local = self.offset + self.wobble(config) + self.arc_swing(config);
        let target_position = ctx.player.to_world(local);

        // Face along the real displacement; a stationary frame keeps the player's facing.
        let displacement = target_position - pose.position;
        let target_orientation =
            look_rotation(displacement, ctx.player.up()).unwrap_or(ctx.player.orientation);
        let blend = (config.turn_rate * dt).clamp(0.0, 1.0);
        pose.orientation = pose.orientation.slerp(target_orientation, blend).normalize();
        pose.position = target_position;

        if self.phase == ScriptedPhase::Escape {
            return None;
        }
        decide_fire(ctx, pose.position, fire_cooldown, rng)
    }

    fn advance_approach(&mut self, config: &ScriptedConfig, dt: f32) {
        let target_z = -config.shadow_distance;
        let remaining = (target_z - self.offset.z).abs();

        // Closing speed fades out across the braking zone.
        let speed_factor = (remaining / config.braking_zone.max(f32::EPSILON)).clamp(0.0, 1.0);
        let step = (config.approach_speed * speed_factor * dt).min(remaining);
        self.offset.z += step * (target_z - self.offset.z).signum();

        let remaining = (target_z - self.offset.z).abs();
        let ramp = (remaining / config.intensity_ramp.max(f32::EPSILON)).clamp(0.0, 1.0);
        self.intensity = config.max_intensity * (1.0 - ramp);

        if remaining < config.snap_threshold {
            self.offset.z = target_z;
            self.intensity = config.max_intensity;
            self.enter(ScriptedPhase::Shadow);
        }
    }

    fn advance_shadow(&mut self, config: &ScriptedConfig, rng: &mut dyn RandomSource) {
        self.offset.z = -config.shadow_distance;
        self.intensity = config.max_intensity;
        if self.phase_elapsed >= config.shadow_duration {
            self.begin_escape(rng);
        }
    }

    fn begin_escape(&mut self, rng: &mut dyn RandomSource) {
        let trajectory = if rng.chance(0.5) {
            let direction = Vec3::new(rng.signed(0.3), rng.signed(0.2), -rng.range(0.8, 1.0));
            EscapeTrajectory {
                mode: EscapeMode::Far,
                direction: normalize_or(direction, Vec3::NEG_Z),
            }
        } else {
            let side = if rng.chance(0.5) { 1.0 } else { -1.0 };
            let direction = Vec3::new(
                side * rng.range(0.7, 1.0),
                rng.signed(0.5),
                -rng.range(0.0, 0.3),
            );
            EscapeTrajectory {
                mode: EscapeMode::Quick,
                direction: normalize_or(direction, Vec3::X * side),
            }
        };
        self.escape = Some(trajectory);
        self.escape_start_intensity = self.intensity;
        self.enter(ScriptedPhase::Escape);
    }

    fn advance_escape(&mut self, config: &ScriptedConfig, dt: f32) {
        let t = self.phase_elapsed;
        let ease = (t / config.escape_accel_duration.max(f32::EPSILON)).min(1.0);
        let speed_factor = ease * ease;
        if let Some(escape) = self.escape {
            self.offset += escape.direction * config.escape_speed * speed_factor * dt;
        }
        let fade = 1.0 - t / config.intensity_fade_duration.max(f32::EPSILON);
        self.intensity = self.escape_start_intensity * fade.max(0.0);
    }

    fn enter(&mut self, phase: ScriptedPhase) {
        self.phase = phase;
        self.phase_elapsed = 0.0;
    }

    /// Constant-amplitude lateral jitter.
    fn wobble(&self, config: &ScriptedConfig) -> Vec3 {
        let angle = self.elapsed * config.wobble_frequency;
        Vec3::new(
            angle.sin() * config.wobble_amplitude,
            (angle * 0.7).cos() * config.wobble_amplitude * 0.5,
            0.0,
        )
    }

    /// Figure-eight swing, strongest near the player along the travel axis.
    fn arc_swing(&self, config: &ScriptedConfig) -> Vec3 {
        let normalized = self.offset.z / config.arc_falloff.max(f32::EPSILON);
        let envelope = self.intensity * (-(normalized * normalized)).exp();
        let angle = self.elapsed * config.arc_frequency + self.arc_phase;
        Vec3::new(angle.sin(), (2.0 * angle).sin() * 0.5, 0.0) * config.arc_amplitude * envelope
    }
}
