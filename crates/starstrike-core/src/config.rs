//! Simulation configuration.
//!
//! Every section defaults to the tuning constants in [`crate::constants`] and
//! can be overridden field-by-field from JSON.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::camera::CameraConfig;
use crate::constants::*;
use crate::error::ConfigError;
use crate::types::Rgb;

/// Top-level configuration for a simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and inputs = same simulation.
    pub seed: u64,
    /// First wave (1-based) whose spawns use the scripted AI.
    pub smart_ai_from_wave: u32,
    pub player: PlayerConfig,
    pub camera: CameraConfig,
    pub reactive: ReactiveConfig,
    pub scripted: ScriptedConfig,
    pub enemy_fire: EnemyFireConfig,
    pub entities: EntityConfig,
    pub combat: CombatConfig,
    pub mission: MissionConfig,
    pub trench: TrenchConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            smart_ai_from_wave: 2,
            player: PlayerConfig::default(),
            camera: CameraConfig::default(),
            reactive: ReactiveConfig::default(),
            scripted: ScriptedConfig::default(),
            enemy_fire: EnemyFireConfig::default(),
            entities: EntityConfig::default(),
            combat: CombatConfig::default(),
            mission: MissionConfig::default(),
            trench: TrenchConfig::default(),
        }
    }
}

/// Player ship handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub speed: f32,
    pub turn_rate: f32,
    pub strafe_speed: f32,
    pub shields: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: PLAYER_SPEED,
            turn_rate: PLAYER_TURN_RATE,
            strafe_speed: PLAYER_STRAFE_SPEED,
            shields: PLAYER_SHIELDS,
        }
    }
}

/// Reactive AI tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactiveConfig {
    pub lead_distance: f32,
    pub sway_frequency: f32,
    pub sway_amplitude: f32,
}

impl Default for ReactiveConfig {
    fn default() -> Self {
        Self {
            lead_distance: REACTIVE_LEAD_DISTANCE,
            sway_frequency: REACTIVE_SWAY_FREQUENCY,
            sway_amplitude: REACTIVE_SWAY_AMPLITUDE,
        }
    }
}

/// Scripted AI tuning. Distances are positive and measured ahead of the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptedConfig {
    pub spawn_distance: f32,
    pub spawn_spread: f32,
    pub shadow_distance: f32,
    pub approach_speed: f32,
    pub braking_zone: f32,
    pub snap_threshold: f32,
    pub intensity_ramp: f32,
    pub max_intensity: f32,
    pub shadow_duration: f32,
    pub escape_speed: f32,
    pub escape_accel_duration: f32,
    pub intensity_fade_duration: f32,
    pub wobble_amplitude: f32,
    pub wobble_frequency: f32,
    pub arc_amplitude: f32,
    pub arc_frequency: f32,
    pub arc_falloff: f32,
    pub turn_rate: f32,
}

impl Default for ScriptedConfig {
    fn default() -> Self {
        Self {
            spawn_distance: SCRIPTED_SPAWN_DISTANCE,
            spawn_spread: SCRIPTED_SPAWN_SPREAD,
            shadow_distance: SCRIPTED_SHADOW_DISTANCE,
            approach_speed: SCRIPTED_APPROACH_SPEED,
            braking_zone: SCRIPTED_BRAKING_ZONE,
            snap_threshold: SCRIPTED_SNAP_THRESHOLD,
            intensity_ramp: SCRIPTED_INTENSITY_RAMP,
            max_intensity: SCRIPTED_MAX_INTENSITY,
            shadow_duration: SCRIPTED_SHADOW_DURATION,
            escape_speed: SCRIPTED_ESCAPE_SPEED,
            escape_accel_duration: SCRIPTED_ESCAPE_ACCEL_DURATION,
            intensity_fade_duration: SCRIPTED_INTENSITY_FADE_DURATION,
            wobble_amplitude: SCRIPTED_WOBBLE_AMPLITUDE,
            wobble_frequency: SCRIPTED_WOBBLE_FREQUENCY,
            arc_amplitude: SCRIPTED_ARC_AMPLITUDE,
            arc_frequency: SCRIPTED_ARC_FREQUENCY,
            arc_falloff: SCRIPTED_ARC_FALLOFF,
            turn_rate: SCRIPTED_TURN_RATE,
        }
    }
}

/// Enemy gunnery shared by both AI variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyFireConfig {
    pub interval: f32,
    pub jitter: f32,
    pub range: f32,
    pub projectile_speed: f32,
}

impl Default for EnemyFireConfig {
    fn default() -> Self {
        Self {
            interval: ENEMY_FIRE_INTERVAL,
            jitter: ENEMY_FIRE_JITTER,
            range: ENEMY_FIRE_RANGE,
            projectile_speed: PROJECTILE_SPEED,
        }
    }
}

/// Entity lifecycle limits and projectile collision parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityConfig {
    pub enemy_cleanup_distance: f32,
    pub projectile_expiration_distance: f32,
    pub projectile_explosion_duration: f32,
    pub projectile_hit_distance: f32,
    pub projectile_screen_tolerance: f32,
    pub projectile_body_radius: f32,
    pub projectile_damage: u32,
    pub spawn_interval: f32,
}

impl Default for EntityConfig {
    fn default() -> Self {
        Self {
            enemy_cleanup_distance: ENEMY_CLEANUP_DISTANCE,
            projectile_expiration_distance: PROJECTILE_EXPIRATION_DISTANCE,
            projectile_explosion_duration: PROJECTILE_EXPLOSION_DURATION,
            projectile_hit_distance: PROJECTILE_HIT_DISTANCE,
            projectile_screen_tolerance: PROJECTILE_SCREEN_TOLERANCE,
            projectile_body_radius: PROJECTILE_BODY_RADIUS,
            projectile_damage: PROJECTILE_DAMAGE,
            spawn_interval: ENEMY_SPAWN_INTERVAL,
        }
    }
}

/// Player weapons and scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    pub cooldown: f32,
    /// Beam origins in NDC, one per cannon.
    pub muzzles: Vec<Vec2>,
    pub primary_color: Rgb,
    pub secondary_color: Rgb,
    pub beam_target_depth: f32,
    pub beam_speed: f32,
    pub aim_tolerance: f32,
    pub beam_projectile_radius: f32,
    pub score_enemy: u64,
    pub score_projectile: u64,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            cooldown: LASER_COOLDOWN,
            muzzles: vec![Vec2::new(-0.9, -0.9), Vec2::new(0.9, -0.9)],
            primary_color: Rgb(LASER_COLOR_PRIMARY),
            secondary_color: Rgb(LASER_COLOR_SECONDARY),
            beam_target_depth: LASER_TARGET_DEPTH,
            beam_speed: LASER_SPEED,
            aim_tolerance: AIM_TOLERANCE,
            beam_projectile_radius: LASER_PROJECTILE_RADIUS,
            score_enemy: SCORE_ENEMY,
            score_projectile: SCORE_PROJECTILE,
        }
    }
}

/// Mission phase thresholds and the surface-approach landmark.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionConfig {
    pub kill_threshold: u32,
    pub landmark_radius: f32,
    pub landmark_distance: f32,
    pub landmark_lateral_offset: f32,
    pub landmark_vertical_offset: f32,
    pub arrival_distance: f32,
    pub steer_rate: f32,
    pub spin_rate: f32,
    pub trench_bonus: u64,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            kill_threshold: DOGFIGHT_KILL_THRESHOLD,
            landmark_radius: LANDMARK_RADIUS,
            landmark_distance: LANDMARK_DISTANCE,
            landmark_lateral_offset: LANDMARK_LATERAL_OFFSET,
            landmark_vertical_offset: LANDMARK_VERTICAL_OFFSET,
            arrival_distance: LANDMARK_ARRIVAL_DISTANCE,
            steer_rate: LANDMARK_STEER_RATE,
            spin_rate: LANDMARK_SPIN_RATE,
            trench_bonus: TRENCH_BONUS,
        }
    }
}

/// Trench corridor geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrenchConfig {
    pub half_width: f32,
    pub half_height: f32,
    pub length: f32,
    pub obstacle_spacing: f32,
    pub obstacle_offset: f32,
    pub depth_tolerance: f32,
    pub height_tolerance: f32,
    pub obstacle_damage: u32,
    pub port_inset: f32,
    pub port_half_extent: f32,
}

impl Default for TrenchConfig {
    fn default() -> Self {
        Self {
            half_width: TRENCH_HALF_WIDTH,
            half_height: TRENCH_HALF_HEIGHT,
            length: TRENCH_LENGTH,
            obstacle_spacing: TRENCH_OBSTACLE_SPACING,
            obstacle_offset: TRENCH_OBSTACLE_OFFSET,
            depth_tolerance: TRENCH_DEPTH_TOLERANCE,
            height_tolerance: TRENCH_HEIGHT_TOLERANCE,
            obstacle_damage: TRENCH_OBSTACLE_DAMAGE,
            port_inset: TRENCH_PORT_INSET,
            port_half_extent: TRENCH_PORT_HALF_EXTENT,
        }
    }
}

impl TrenchConfig {
    /// Obstacles placed at every `obstacle_spacing` strictly before the port.
    pub fn obstacle_count(&self) -> usize {
        let ratio = (self.length - self.port_inset) / self.obstacle_spacing;
        // Float-to-int casts saturate; NaN maps to 0.
        (ratio.ceil() - 1.0).max(0.0) as usize
    }
}

impl SimConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Reject values that would make the simulation degenerate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("camera.fov_y", self.camera.fov_y)?;
        positive("camera.aspect", self.camera.aspect)?;
        positive("camera.near", self.camera.near)?;
        if self.camera.far <= self.camera.near {
            return Err(ConfigError::invalid(
                "camera.far",
                "must be greater than camera.near",
            ));
        }

        positive("scripted.braking_zone", self.scripted.braking_zone)?;
        positive("scripted.snap_threshold", self.scripted.snap_threshold)?;
        positive("scripted.intensity_ramp", self.scripted.intensity_ramp)?;
        positive("scripted.escape_accel_duration", self.scripted.escape_accel_duration)?;
        positive(
            "scripted.intensity_fade_duration",
            self.scripted.intensity_fade_duration,
        )?;
        positive("scripted.arc_falloff", self.scripted.arc_falloff)?;
        if self.scripted.spawn_distance <= self.scripted.shadow_distance {
            return Err(ConfigError::invalid(
                "scripted.spawn_distance",
                "must be greater than scripted.shadow_distance",
            ));
        }

        positive("enemy_fire.interval", self.enemy_fire.interval)?;
        non_negative("enemy_fire.jitter", self.enemy_fire.jitter)?;

        positive("entities.spawn_interval", self.entities.spawn_interval)?;
        positive("entities.projectile_hit_distance", self.entities.projectile_hit_distance)?;
        positive(
            "entities.projectile_screen_tolerance",
            self.entities.projectile_screen_tolerance,
        )?;

        non_negative("combat.cooldown", self.combat.cooldown)?;
        if self.combat.muzzles.len() < 2 {
            return Err(ConfigError::invalid(
                "combat.muzzles",
                format!("need at least 2 muzzles, got {}", self.combat.muzzles.len()),
            ));
        }
        positive("combat.beam_target_depth", self.combat.beam_target_depth)?;
        positive("combat.beam_speed", self.combat.beam_speed)?;
        positive("combat.aim_tolerance", self.combat.aim_tolerance)?;

        if self.mission.kill_threshold == 0 {
            return Err(ConfigError::invalid("mission.kill_threshold", "must be at least 1"));
        }
        positive("mission.landmark_radius", self.mission.landmark_radius)?;

        positive("trench.half_width", self.trench.half_width)?;
        positive("trench.half_height", self.trench.half_height)?;
        positive("trench.length", self.trench.length)?;
        positive("trench.obstacle_spacing", self.trench.obstacle_spacing)?;
        if self.trench.port_inset >= self.trench.length {
            return Err(ConfigError::invalid(
                "trench.port_inset",
                "must be shorter than trench.length",
            ));
        }
        if self.trench.obstacle_count() > TRENCH_MAX_OBSTACLES {
            return Err(ConfigError::invalid(
                "trench.obstacle_spacing",
                format!("corridor would hold more than {TRENCH_MAX_OBSTACLES} obstacles"),
            ));
        }

        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be > 0, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be >= 0, got {value}")))
    }
}
