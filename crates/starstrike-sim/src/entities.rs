//! Entity lifecycle manager: enemies, projectiles, and beam weapons.
//!
//! Every entity lives in a private hecs `World`. Each population also keeps
//! a spawn-ordered roster of handles so the per-tick passes visit entities
//! in a deterministic order. Removal is mark-then-compact: systems push
//! handles into a despawn buffer, then the cleanup system despawns them,
//! emits the scene removals, and compacts the roster.

use glam::{Vec2, Vec3};
use hecs::{Entity, World};

use starstrike_ai::rng::RandomSource;
use starstrike_ai::tuning::AiTuning;
use starstrike_ai::{AiStrategy, StrategyContext};
use starstrike_core::camera::Camera;
use starstrike_core::components::{BeamWeapon, Enemy, Projectile};
use starstrike_core::config::{EntityConfig, SimConfig};
use starstrike_core::enums::{AiKind, SceneLayer};
use starstrike_core::events::{SceneEvent, Visual};
use starstrike_core::types::{Pose, Rgb};

use crate::systems;
use crate::systems::cleanup::node_id;
use crate::systems::enemy_ai::FiredShot;

/// Read-only copy of one enemy's visible state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyView {
    pub entity: Entity,
    pub pose: Pose,
    pub exploded: bool,
    pub kind: AiKind,
    pub debug_color: Option<Rgb>,
}

/// What happened during one [`EntityManager::update`].
#[derive(Debug, Clone, Default)]
pub struct EntityReport {
    /// Enemy shots spawned this tick.
    pub shots: Vec<FiredShot>,
    pub player_hits: u32,
    pub enemy_spawned: Option<Entity>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Population {
    Enemies,
    Projectiles,
    Beams,
}

impl Population {
    fn layer(self) -> SceneLayer {
        match self {
            Population::Enemies | Population::Projectiles => SceneLayer::World,
            Population::Beams => SceneLayer::Overlay,
        }
    }
}

pub struct EntityManager {
    world: World,
    enemies: Vec<Entity>,
    projectiles: Vec<Entity>,
    beams: Vec<Entity>,
    despawn_buffer: Vec<Entity>,
    scene_events: Vec<SceneEvent>,
    spawn_timer: f32,
    spawning_enabled: bool,
    config: EntityConfig,
    tuning: AiTuning,
    beam_target_depth: f32,
    beam_speed: f32,
}

impl EntityManager {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            world: World::new(),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            beams: Vec::new(),
            despawn_buffer: Vec::new(),
            scene_events: Vec::new(),
            spawn_timer: 0.0,
            spawning_enabled: true,
            config: config.entities.clone(),
            tuning: AiTuning::from_config(config),
            beam_target_depth: config.combat.beam_target_depth,
            beam_speed: config.combat.beam_speed,
        }
    }

    // ---- Spawning ----

    /// Spawn one enemy at its strategy's entry pose relative to the player.
    pub fn spawn_enemy(&mut self, smart: bool, player: &Pose, rng: &mut dyn RandomSource) -> Entity {
        let kind = if smart { AiKind::Scripted } else { AiKind::Reactive };
        let strategy = AiStrategy::new(kind, &self.tuning, rng);
        let pose = strategy.spawn_pose(player, &self.tuning);
        let enemy = Enemy {
            exploded: false,
            fire_cooldown: self.tuning.fire.interval,
        };
        let entity = self.world.spawn((enemy, pose, strategy));
        self.enemies.push(entity);
        self.scene_events.push(SceneEvent::Added {
            layer: SceneLayer::World,
            node: node_id(entity),
            visual: Visual::Enemy { kind },
        });
        log::debug!("spawned {:?} enemy {:?} at {}", kind, entity, pose.position);
        entity
    }

    pub fn spawn_projectile(&mut self, position: Vec3, velocity: Vec3) -> Entity {
        let entity = self.world.spawn((Projectile {
            position,
            previous_position: position,
            velocity,
            exploded: false,
            explosion_timer: 0.0,
        },));
        self.projectiles.push(entity);
        self.scene_events.push(SceneEvent::Added {
            layer: SceneLayer::World,
            node: node_id(entity),
            visual: Visual::Projectile,
        });
        entity
    }

    pub fn spawn_beam_weapon(&mut self, origin: Vec2, target: Vec2, color: Rgb) -> Entity {
        let entity = self.world.spawn((BeamWeapon {
            origin,
            target,
            progress: 0.0,
            elapsed_secs: 0.0,
            color,
        },));
        self.beams.push(entity);
        self.scene_events.push(SceneEvent::Added {
            layer: SceneLayer::Overlay,
            node: node_id(entity),
            visual: Visual::Beam { color },
        });
        entity
    }

    // ---- Tick ----

    /// Advance every population by one tick.
    ///
    /// Order: enemies, projectiles, beams, then the spawn timer. Enemy shots
    /// are inserted after the projectile pass, and a freshly spawned enemy
    /// first moves on the next tick.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        dt: f32,
        player: &Pose,
        player_velocity: Vec3,
        smart_ai: bool,
        camera: &dyn Camera,
        rng: &mut dyn RandomSource,
        on_player_hit: Option<&mut dyn FnMut(u32)>,
    ) -> EntityReport {
        let mut report = EntityReport::default();

        // (a) Enemies
        let ctx = StrategyContext {
            dt,
            player: *player,
            tuning: &self.tuning,
        };
        systems::enemy_ai::run(
            &mut self.world,
            &self.enemies,
            &ctx,
            player_velocity,
            self.config.enemy_cleanup_distance,
            rng,
            &mut report.shots,
            &mut self.despawn_buffer,
        );
        systems::cleanup::run(
            &mut self.world,
            &mut self.enemies,
            &mut self.despawn_buffer,
            SceneLayer::World,
            &mut self.scene_events,
        );

        // (b) Projectiles
        let mut ignore_hit = |_: u32| {};
        let on_player_hit: &mut dyn FnMut(u32) = match on_player_hit {
            Some(callback) => callback,
            None => &mut ignore_hit,
        };
        report.player_hits = systems::projectiles::run(
            &mut self.world,
            &self.projectiles,
            dt,
            player,
            camera,
            &self.config,
            on_player_hit,
            &mut self.despawn_buffer,
        );
        systems::cleanup::run(
            &mut self.world,
            &mut self.projectiles,
            &mut self.despawn_buffer,
            SceneLayer::World,
            &mut self.scene_events,
        );
        for shot in &report.shots {
            self.spawn_projectile(shot.position, shot.velocity);
        }

        // (c) Beams
        systems::beams::run(
            &mut self.world,
            &self.beams,
            dt,
            self.beam_target_depth,
            self.beam_speed,
            &mut self.despawn_buffer,
        );
        systems::cleanup::run(
            &mut self.world,
            &mut self.beams,
            &mut self.despawn_buffer,
            SceneLayer::Overlay,
            &mut self.scene_events,
        );

        // (d) Spawn timer
        if self.spawning_enabled {
            self.spawn_timer += dt;
            if self.spawn_timer >= self.config.spawn_interval {
                self.spawn_timer = 0.0;
                report.enemy_spawned = Some(self.spawn_enemy(smart_ai, player, rng));
            }
        }

        report
    }

    // ---- Control ----

    pub fn set_spawning_enabled(&mut self, enabled: bool) {
        if enabled != self.spawning_enabled {
            log::debug!("enemy spawning {}", if enabled { "enabled" } else { "disabled" });
        }
        self.spawning_enabled = enabled;
        self.spawn_timer = 0.0;
    }

    pub fn spawning_enabled(&self) -> bool {
        self.spawning_enabled
    }

    /// Remove every entity and announce each removal.
    pub fn clear(&mut self) {
        for population in [Population::Enemies, Population::Projectiles, Population::Beams] {
            let roster = self.roster_mut(population);
            let mut doomed = std::mem::take(roster);
            self.despawn_buffer.append(&mut doomed);
            self.compact(population);
        }
        self.spawn_timer = 0.0;
    }

    /// Queue a scene mutation that does not belong to an entity (phase scenery).
    pub fn emit_scene_event(&mut self, event: SceneEvent) {
        self.scene_events.push(event);
    }

    pub fn drain_scene_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.scene_events)
    }

    // ---- Combat hooks ----

    /// Mark an enemy as shot down. Returns its position if it was still live.
    pub fn explode_enemy(&mut self, entity: Entity) -> Option<Vec3> {
        let (enemy, pose) = self.world.query_one_mut::<(&mut Enemy, &Pose)>(entity).ok()?;
        if enemy.exploded {
            return None;
        }
        enemy.exploded = true;
        Some(pose.position)
    }

    /// Detonate a projectile. Returns its position if it was still live.
    pub fn explode_projectile(&mut self, entity: Entity) -> Option<Vec3> {
        let projectile = self.world.query_one_mut::<&mut Projectile>(entity).ok()?;
        if projectile.exploded {
            return None;
        }
        projectile.exploded = true;
        projectile.explosion_timer = 0.0;
        Some(projectile.position)
    }

    // ---- Removal ----

    pub fn remove_enemy(&mut self, entity: Entity) -> bool {
        self.remove(Population::Enemies, entity)
    }

    pub fn remove_projectile(&mut self, entity: Entity) -> bool {
        self.remove(Population::Projectiles, entity)
    }

    pub fn remove_beam(&mut self, entity: Entity) -> bool {
        self.remove(Population::Beams, entity)
    }

    pub fn remove_enemy_at(&mut self, index: usize) -> Option<Entity> {
        self.remove_at(Population::Enemies, index)
    }

    pub fn remove_projectile_at(&mut self, index: usize) -> Option<Entity> {
        self.remove_at(Population::Projectiles, index)
    }

    pub fn remove_beam_at(&mut self, index: usize) -> Option<Entity> {
        self.remove_at(Population::Beams, index)
    }

    fn remove(&mut self, population: Population, entity: Entity) -> bool {
        if !self.roster(population).contains(&entity) {
            return false;
        }
        self.despawn_buffer.push(entity);
        self.compact(population);
        true
    }

    fn remove_at(&mut self, population: Population, index: usize) -> Option<Entity> {
        let entity = *self.roster(population).get(index)?;
        self.remove(population, entity).then_some(entity)
    }

    fn compact(&mut self, population: Population) {
        let roster = match population {
            Population::Enemies => &mut self.enemies,
            Population::Projectiles => &mut self.projectiles,
            Population::Beams => &mut self.beams,
        };
        systems::cleanup::run(
            &mut self.world,
            roster,
            &mut self.despawn_buffer,
            population.layer(),
            &mut self.scene_events,
        );
    }

    fn roster(&self, population: Population) -> &[Entity] {
        match population {
            Population::Enemies => &self.enemies,
            Population::Projectiles => &self.projectiles,
            Population::Beams => &self.beams,
        }
    }

    fn roster_mut(&mut self, population: Population) -> &mut Vec<Entity> {
        match population {
            Population::Enemies => &mut self.enemies,
            Population::Projectiles => &mut self.projectiles,
            Population::Beams => &mut self.beams,
        }
    }

    // ---- Queries ----

    /// Enemy handles in spawn order.
    pub fn enemy_handles(&self) -> &[Entity] {
        &self.enemies
    }

    pub fn projectile_handles(&self) -> &[Entity] {
        &self.projectiles
    }

    pub fn beam_handles(&self) -> &[Entity] {
        &self.beams
    }

    pub fn enemy_count(&self) -> usize {
        self.enemies.len()
    }

    pub fn projectile_count(&self) -> usize {
        self.projectiles.len()
    }

    pub fn beam_count(&self) -> usize {
        self.beams.len()
    }

    pub fn enemy(&self, entity: Entity) -> Option<EnemyView> {
        let enemy = self.world.get::<&Enemy>(entity).ok()?;
        let pose = self.world.get::<&Pose>(entity).ok()?;
        let strategy = self.world.get::<&AiStrategy>(entity).ok()?;
        Some(EnemyView {
            entity,
            pose: *pose,
            exploded: enemy.exploded,
            kind: strategy.kind(),
            debug_color: strategy.debug_color(),
        })
    }

    /// All enemies in spawn order.
    pub fn enemies(&self) -> Vec<EnemyView> {
        self.enemies.iter().filter_map(|&e| self.enemy(e)).collect()
    }

    pub fn projectile(&self, entity: Entity) -> Option<Projectile> {
        self.world.get::<&Projectile>(entity).ok().map(|p| (*p).clone())
    }

    /// All projectiles in spawn order.
    pub fn projectiles(&self) -> Vec<(Entity, Projectile)> {
        self.projectiles
            .iter()
            .filter_map(|&e| self.projectile(e).map(|p| (e, p)))
            .collect()
    }

    pub fn beam(&self, entity: Entity) -> Option<BeamWeapon> {
        self.world.get::<&BeamWeapon>(entity).ok().map(|b| (*b).clone())
    }

    /// All beams in spawn order.
    pub fn beams(&self) -> Vec<(Entity, BeamWeapon)> {
        self.beams
            .iter()
            .filter_map(|&e| self.beam(e).map(|b| (e, b)))
            .collect()
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }
}
