//! Per-enemy behavior, dispatched over a closed set of variants.

use glam::Vec3;

use starstrike_core::enums::AiKind;
use starstrike_core::types::{Pose, Rgb};

use crate::reactive::ReactiveStrategy;
use crate::rng::RandomSource;
use crate::scripted::ScriptedStrategy;
use crate::tuning::AiTuning;

/// Input to a strategy for a single tick.
pub struct StrategyContext<'a> {
    /// Elapsed tick time (seconds).
    pub dt: f32,
    /// Player pose for this tick, after flight and any mission clamp.
    pub player: Pose,
    pub tuning: &'a AiTuning,
}

/// AI state carried by one enemy.
#[derive(Debug, Clone)]
pub enum AiStrategy {
    Reactive(ReactiveStrategy),
    Scripted(ScriptedStrategy),
}

impl AiStrategy {
    /// Build a fresh strategy of the requested kind.
    pub fn new(kind: AiKind, tuning: &AiTuning, rng: &mut dyn RandomSource) -> Self {
        match kind {
            AiKind::Reactive => AiStrategy::Reactive(ReactiveStrategy::new()),
            AiKind::Scripted => AiStrategy::Scripted(ScriptedStrategy::new(&tuning.scripted, rng)),
        }
    }

    pub fn kind(&self) -> AiKind {
        match self {
            AiStrategy::Reactive(_) => AiKind::Reactive,
            AiStrategy::Scripted(_) => AiKind::Scripted,
        }
    }

    /// Where an enemy with this strategy should appear, relative to the player.
    pub fn spawn_pose(&self, player: &Pose, tuning: &AiTuning) -> Pose {
        match self {
            AiStrategy::Reactive(s) => s.pose_for(player, &tuning.reactive),
            AiStrategy::Scripted(s) => Pose::new(player.to_world(s.offset()), player.orientation),
        }
    }

    /// Advance one tick: move `pose` and return a unit fire direction if the
    /// enemy shoots this tick.
    pub fn update(
        &mut self,
        ctx: &StrategyContext,
        pose: &mut Pose,
        fire_cooldown: &mut f32,
        rng: &mut dyn RandomSource,
    ) -> Option<Vec3> {
        match self {
            AiStrategy::Reactive(s) => s.update(ctx, pose, fire_cooldown, rng),
            AiStrategy::Scripted(s) => s.update(ctx, pose, fire_cooldown, rng),
        }
    }

    /// Tint for debug rendering of the AI state.
    pub fn debug_color(&self) -> Option<Rgb> {
        match self {
            AiStrategy::Reactive(_) => Some(Rgb::GREEN),
            AiStrategy::Scripted(s) => Some(s.debug_color()),
        }
    }
}
