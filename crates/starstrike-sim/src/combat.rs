//! Combat coordinator: player fire input, beam volleys, and hit scoring.

use glam::{Vec2, Vec3};

use starstrike_core::camera::Camera;
use starstrike_core::config::CombatConfig;
use starstrike_core::events::SimEvent;
use starstrike_core::state::RunState;
use starstrike_core::types::PlayerInput;

use crate::aim::aim_check;
use crate::entities::EntityManager;

/// What the combat pass did this tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombatReport {
    /// Beams spawned by this tick's volley; zero when no volley fired.
    pub beams_fired: u32,
    pub enemies_destroyed: Vec<Vec3>,
    pub projectiles_destroyed: Vec<Vec3>,
    /// The volley hit the exposed exhaust port.
    pub port_hit: bool,
}

pub struct CombatCoordinator {
    config: CombatConfig,
    cooldown: f32,
    /// Volleys fired so far; picks each muzzle's color.
    volleys: u64,
}

impl CombatCoordinator {
    pub fn new(config: &CombatConfig) -> Self {
        Self {
            config: config.clone(),
            cooldown: 0.0,
            volleys: 0,
        }
    }

    pub fn cooldown(&self) -> f32 {
        self.cooldown
    }

    pub fn reset(&mut self) {
        self.cooldown = 0.0;
        self.volleys = 0;
    }

    /// Run one combat tick.
    ///
    /// With `armed` false (run over) fire input is ignored, but beams already
    /// in flight still intercept projectiles. `port` is the exhaust port's
    /// world position while it is exposed.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        dt: f32,
        input: &PlayerInput,
        armed: bool,
        camera: &dyn Camera,
        port: Option<Vec3>,
        entities: &mut EntityManager,
        run: &mut RunState,
    ) -> CombatReport {
        let mut report = CombatReport::default();
        self.cooldown = (self.cooldown - dt).max(0.0);

        if armed && input.firing && self.cooldown <= 0.0 {
            report.beams_fired = self.fire_volley(input.aim, entities);
            self.cooldown = self.config.cooldown;

            for enemy in entities.enemies() {
                if enemy.exploded {
                    continue;
                }
                if !aim_check(camera, enemy.pose.position, input.aim, self.config.aim_tolerance) {
                    continue;
                }
                if let Some(position) = entities.explode_enemy(enemy.entity) {
                    run.award(self.config.score_enemy);
                    run.record_kill();
                    report.enemies_destroyed.push(position);
                    log::debug!("enemy {:?} destroyed at {}", enemy.entity, position);
                }
            }

            if let Some(port) = port {
                if aim_check(camera, port, input.aim, self.config.aim_tolerance) {
                    log::debug!("volley hit the exhaust port");
                    report.port_hit = true;
                }
            }
        }

        self.intercept_projectiles(camera, entities, run, &mut report);
        report
    }

    /// One beam per muzzle. Each muzzle alternates between the two colors
    /// from one volley to the next.
    fn fire_volley(&mut self, aim: Vec2, entities: &mut EntityManager) -> u32 {
        let mut fired = 0;
        for (index, &muzzle) in self.config.muzzles.iter().enumerate() {
            let color = if (self.volleys + index as u64) % 2 == 0 {
                self.config.primary_color
            } else {
                self.config.secondary_color
            };
            entities.spawn_beam_weapon(muzzle, aim, color);
            fired += 1;
        }
        self.volleys += 1;
        log::debug!("volley {} fired {} beams toward {}", self.volleys, fired, aim);
        fired
    }

    /// A live projectile under the drawn part of a beam (muzzle to head) is
    /// shot down. The beam keeps travelling.
    fn intercept_projectiles(
        &self,
        camera: &dyn Camera,
        entities: &mut EntityManager,
        run: &mut RunState,
        report: &mut CombatReport,
    ) {
        let beams = entities.beams();
        if beams.is_empty() {
            return;
        }
        for (entity, projectile) in entities.projectiles() {
            if projectile.exploded {
                continue;
            }
            let Some(ndc) = camera.project(projectile.position) else {
                continue;
            };
            let on_screen = ndc.truncate();
            let touched = beams.iter().any(|(_, beam)| {
                let head = beam.origin.lerp(beam.target, beam.progress);
                distance_to_segment(on_screen, beam.origin, head)
                    < self.config.beam_projectile_radius
            });
            if !touched {
                continue;
            }
            if let Some(position) = entities.explode_projectile(entity) {
                run.award(self.config.score_projectile);
                report.projectiles_destroyed.push(position);
                log::debug!("projectile {:?} shot down", entity);
            }
        }
    }
}

fn distance_to_segment(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let length_sq = ab.length_squared();
    if length_sq <= f32::EPSILON {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / length_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}

/// Apply damage to the player and emit the matching events.
pub fn apply_player_damage(run: &mut RunState, events: &mut Vec<SimEvent>, damage: u32) {
    if run.is_game_over() {
        return;
    }
    let ended = run.damage(damage);
    events.push(SimEvent::PlayerHit { damage });
    log::debug!("player hit for {}, shields {}", damage, run.shields());
    if ended {
        log::info!("shields down, game over with score {}", run.score());
        events.push(SimEvent::GameOver { score: run.score() });
    }
}
