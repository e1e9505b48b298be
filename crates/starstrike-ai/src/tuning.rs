//! Tuning parameters shared by every AI strategy instance.
//!
//! Strategies keep only per-instance state; the tuning lives here once and is
//! borrowed through [`StrategyContext`](crate::strategy::StrategyContext).

use starstrike_core::config::{EnemyFireConfig, ReactiveConfig, ScriptedConfig, SimConfig};

/// Consolidated AI parameters.
#[derive(Debug, Clone, Default)]
pub struct AiTuning {
    pub reactive: ReactiveConfig,
    pub scripted: ScriptedConfig,
    pub fire: EnemyFireConfig,
}

impl AiTuning {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            reactive: config.reactive.clone(),
            scripted: config.scripted.clone(),
            fire: config.enemy_fire.clone(),
        }
    }
}
