#[cfg(test)]
mod tests {
    use glam::{Quat, Vec2, Vec3};

    use crate::config::SimConfig;
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::ConfigError;
    use crate::events::{NodeId, SceneEvent, SimEvent, Visual};
    use crate::state::RunState;
    use crate::types::{look_rotation, normalize_or, PlayerInput, Pose};

    // ---- Config ----

    #[test]
    fn test_default_config_is_valid() {
        SimConfig::default().validate().unwrap();
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = SimConfig::from_json(r#"{ "seed": 7, "combat": { "cooldown": 0.3 } }"#)
            .unwrap();
        assert_eq!(config.seed, 7);
        assert!((config.combat.cooldown - 0.3).abs() < 1e-6);
        assert_eq!(config.combat.muzzles.len(), 2);
        assert_eq!(config.mission.kill_threshold, DOGFIGHT_KILL_THRESHOLD);
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = SimConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back = SimConfig::from_json(&json).unwrap();
        assert_eq!(json, serde_json::to_string(&back).unwrap());
    }

    #[test]
    fn test_single_muzzle_rejected() {
        let mut config = SimConfig::default();
        config.combat.muzzles = vec![Vec2::ZERO];
        match config.validate() {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "combat.muzzles"),
            other => panic!("expected invalid muzzles, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_braking_zone_rejected() {
        let mut config = SimConfig::default();
        config.scripted.braking_zone = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "scripted.braking_zone",
                ..
            })
        ));
    }

    #[test]
    fn test_overcrowded_trench_rejected() {
        let mut config = SimConfig::default();
        config.trench.obstacle_spacing = 1.0e-6;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "trench.obstacle_spacing",
                ..
            })
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            SimConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            SimConfig::load("/nonexistent/starstrike.json"),
            Err(ConfigError::Io(_))
        ));
    }

    // ---- Run state ----

    #[test]
    fn test_damage_clamps_and_ends_run_once() {
        let mut run = RunState::new(2);
        assert!(!run.damage(1));
        assert!(run.damage(5), "hit that empties shields ends the run");
        assert_eq!(run.shields(), 0);
        assert!(run.is_game_over());
        assert!(!run.damage(1), "further hits do not re-trigger game over");
    }

    #[test]
    fn test_wave_completion_resets_wave_kills_only() {
        let mut run = RunState::new(3);
        run.record_kill();
        run.record_kill();
        run.award(250);
        run.complete_wave();
        assert_eq!(run.wave(), 2);
        assert_eq!(run.kills(), 0);
        assert_eq!(run.total_kills(), 2);
        assert_eq!(run.score(), 250);
    }

    #[test]
    fn test_reset_restores_initial_run() {
        let mut run = RunState::new(4);
        run.damage(4);
        run.award(10);
        run.set_phase(MissionPhase::Trench);
        run.reset();
        assert_eq!(run.shields(), 4);
        assert_eq!(run.score(), 0);
        assert_eq!(run.phase(), MissionPhase::Dogfight);
        assert!(!run.is_game_over());
    }

    // ---- Enums ----

    #[test]
    fn test_mission_phase_cycle() {
        let mut phase = MissionPhase::Dogfight;
        let mut visited = Vec::new();
        for _ in 0..4 {
            visited.push(phase);
            phase = phase.next();
        }
        assert_eq!(
            visited,
            vec![
                MissionPhase::Dogfight,
                MissionPhase::SurfaceApproach,
                MissionPhase::Trench,
                MissionPhase::Dogfight,
            ]
        );
    }

    // ---- Math helpers ----

    #[test]
    fn test_normalize_or_falls_back_on_zero() {
        assert_eq!(normalize_or(Vec3::ZERO, Vec3::NEG_Z), Vec3::NEG_Z);
        assert_eq!(
            normalize_or(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::Y),
            Vec3::Y
        );
        let n = normalize_or(Vec3::new(3.0, 0.0, 4.0), Vec3::Y);
        assert!((n.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_look_rotation_faces_direction() {
        let dir = Vec3::new(1.0, 0.0, -1.0);
        let rot = look_rotation(dir, Vec3::Y).unwrap();
        let forward = Pose::new(Vec3::ZERO, rot).forward();
        assert!((forward - dir.normalize()).length() < 1e-5);
    }

    #[test]
    fn test_look_rotation_handles_parallel_up() {
        let rot = look_rotation(Vec3::Y, Vec3::Y).unwrap();
        let forward = Pose::new(Vec3::ZERO, rot).forward();
        assert!((forward - Vec3::Y).length() < 1e-5);
        assert!(rot.is_finite());
    }

    #[test]
    fn test_look_rotation_rejects_zero() {
        assert!(look_rotation(Vec3::ZERO, Vec3::Y).is_none());
    }

    #[test]
    fn test_identity_pose_looks_down_neg_z() {
        let pose = Pose::new(Vec3::ONE, Quat::IDENTITY);
        assert_eq!(pose.forward(), Vec3::NEG_Z);
        assert_eq!(pose.to_world(Vec3::new(0.0, 0.0, -2.0)), Vec3::new(1.0, 1.0, -1.0));
    }

    #[test]
    fn test_player_input_clamps_aim() {
        let input = PlayerInput::new(Vec2::new(3.0, -2.0), true);
        assert_eq!(input.aim, Vec2::new(1.0, -1.0));
    }

    // ---- Events ----

    #[test]
    fn test_scene_event_serde() {
        let events = vec![
            SceneEvent::Added {
                layer: SceneLayer::World,
                node: NodeId(9),
                visual: Visual::Enemy {
                    kind: AiKind::Scripted,
                },
            },
            SceneEvent::Removed {
                layer: SceneLayer::Overlay,
                node: NodeId(3),
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: SceneEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    #[test]
    fn test_sim_event_tagged() {
        let json = serde_json::to_string(&SimEvent::PlayerHit { damage: 1 }).unwrap();
        assert!(json.contains(r#""type":"PlayerHit""#));
    }
}
