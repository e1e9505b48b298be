#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};

    use starstrike_core::enums::{AiKind, EscapeMode, ScriptedPhase};
    use starstrike_core::types::{Pose, Rgb};

    use crate::rng::SequenceRandom;
    use crate::scripted::ScriptedStrategy;
    use crate::strategy::{AiStrategy, StrategyContext};
    use crate::tuning::AiTuning;

    const DT: f32 = 1.0 / 60.0;

    fn context(tuning: &AiTuning, player: Pose) -> StrategyContext<'_> {
        StrategyContext {
            dt: DT,
            player,
            tuning,
        }
    }

    /// Step a scripted strategy with a stationary player until it leaves `phase`.
    fn run_until_not(
        strategy: &mut ScriptedStrategy,
        phase: ScriptedPhase,
        tuning: &AiTuning,
        rng: &mut SequenceRandom,
        pose: &mut Pose,
    ) -> usize {
        let ctx = context(tuning, Pose::default());
        let mut cooldown = 100.0;
        for tick in 0..10_000 {
            if strategy.phase() != phase {
                return tick;
            }
            strategy.update(&ctx, pose, &mut cooldown, rng);
        }
        panic!("strategy never left {phase:?}");
    }

    // ---- Reactive ----

    #[test]
    fn test_reactive_holds_lead_and_copies_facing() {
        let tuning = AiTuning::default();
        let mut rng = SequenceRandom::new([0.5]);
        let mut strategy = AiStrategy::new(AiKind::Reactive, &tuning, &mut rng);
        let player = Pose::new(
            Vec3::new(10.0, 5.0, -100.0),
            Quat::from_rotation_y(0.4),
        );
        let mut pose = Pose::default();
        let mut cooldown = 100.0;

        for _ in 0..90 {
            strategy.update(&context(&tuning, player), &mut pose, &mut cooldown, &mut rng);
        }

        assert_eq!(pose.orientation, player.orientation);
        // Longitudinal offset is fixed; only the lateral sway varies.
        let local = player.orientation.inverse() * (pose.position - player.position);
        assert!((local.z + tuning.reactive.lead_distance).abs() < 1e-3);
        assert!(local.y.abs() < 1e-3);
        assert!(local.x.abs() <= tuning.reactive.sway_amplitude + 1e-3);
    }

    #[test]
    fn test_reactive_sways() {
        let tuning = AiTuning::default();
        let mut rng = SequenceRandom::new([0.5]);
        let mut strategy = AiStrategy::new(AiKind::Reactive, &tuning, &mut rng);
        let mut pose = Pose::default();
        let mut cooldown = 100.0;
        let mut xs = Vec::new();
        for _ in 0..240 {
            strategy.update(
                &context(&tuning, Pose::default()),
                &mut pose,
                &mut cooldown,
                &mut rng,
            );
            xs.push(pose.position.x);
        }
        let min = xs.iter().cloned().fold(f32::MAX, f32::min);
        let max = xs.iter().cloned().fold(f32::MIN, f32::max);
        assert!(min < -1.0 && max > 1.0, "reactive enemy should sway both ways");
    }

    // ---- Scripted: approach ----

    #[test]
    fn test_scripted_approach_decelerates_and_snaps() {
        let tuning = AiTuning::default();
        let mut rng = SequenceRandom::new([0.5]);
        let mut strategy = ScriptedStrategy::new(&tuning.scripted, &mut rng);
        let ctx = context(&tuning, Pose::default());
        let mut pose = Pose::default();
        let mut cooldown = 100.0;

        let mut previous_z = strategy.offset().z;
        let mut previous_step = f32::MAX;
        let mut inside_zone_steps = 0;
        while strategy.phase() == ScriptedPhase::Approach {
            strategy.update(&ctx, &mut pose, &mut cooldown, &mut rng);
            let step = strategy.offset().z - previous_z;
            assert!(step >= 0.0, "approach must only close in");
            let remaining = (-tuning.scripted.shadow_distance - previous_z).abs();
            if remaining < tuning.scripted.braking_zone && strategy.phase() == ScriptedPhase::Approach {
                assert!(step <= previous_step + 1e-5, "closing speed must not grow in the braking zone");
                inside_zone_steps += 1;
            }
            previous_step = step;
            previous_z = strategy.offset().z;
        }

        assert!(inside_zone_steps > 10, "deceleration should be gradual");
        assert_eq!(strategy.phase(), ScriptedPhase::Shadow);
        assert_eq!(strategy.offset().z, -tuning.scripted.shadow_distance);
        assert_eq!(strategy.intensity(), tuning.scripted.max_intensity);
    }

    #[test]
    fn test_scripted_intensity_ramps_during_approach() {
        let tuning = AiTuning::default();
        let mut rng = SequenceRandom::new([0.5]);
        let mut strategy = ScriptedStrategy::new(&tuning.scripted, &mut rng);
        let ctx = context(&tuning, Pose::default());
        let mut pose = Pose::default();
        let mut cooldown = 100.0;

        strategy.update(&ctx, &mut pose, &mut cooldown, &mut rng);
        assert_eq!(strategy.intensity(), 0.0, "far away: no arc swing");

        let mut last = 0.0;
        while strategy.phase() == ScriptedPhase::Approach {
            strategy.update(&ctx, &mut pose, &mut cooldown, &mut rng);
            assert!(strategy.intensity() >= last);
            last = strategy.intensity();
        }
    }

    // ---- Scripted: shadow and escape ----

    #[test]
    fn test_scripted_shadow_holds_then_escapes_far() {
        let tuning = AiTuning::default();
        // 0.25 < 0.5 → chance(0.5) succeeds → far escape.
        let mut rng = SequenceRandom::new([0.25]);
        let mut strategy = ScriptedStrategy::new(&tuning.scripted, &mut rng);
        let mut pose = Pose::default();

        run_until_not(&mut strategy, ScriptedPhase::Approach, &tuning, &mut rng, &mut pose);
        let shadow_ticks =
            run_until_not(&mut strategy, ScriptedPhase::Shadow, &tuning, &mut rng, &mut pose);

        let expected = (tuning.scripted.shadow_duration / DT).ceil() as usize;
        assert!(
            shadow_ticks.abs_diff(expected) <= 1,
            "shadowed {shadow_ticks} ticks, expected ~{expected}"
        );
        assert_eq!(strategy.phase(), ScriptedPhase::Escape);
        let escape = strategy.escape().unwrap();
        assert_eq!(escape.mode, EscapeMode::Far);
        assert!((escape.direction.length() - 1.0).abs() < 1e-5);
        assert!(escape.direction.z < -0.8, "far escape recedes along -Z");
    }

    #[test]
    fn test_scripted_escape_quick_is_lateral() {
        let tuning = AiTuning::default();
        // 0.75 ≥ 0.5 → quick escape.
        let mut rng = SequenceRandom::new([0.75]);
        let mut strategy = ScriptedStrategy::new(&tuning.scripted, &mut rng);
        let mut pose = Pose::default();

        run_until_not(&mut strategy, ScriptedPhase::Approach, &tuning, &mut rng, &mut pose);
        run_until_not(&mut strategy, ScriptedPhase::Shadow, &tuning, &mut rng, &mut pose);

        let escape = strategy.escape().unwrap();
        assert_eq!(escape.mode, EscapeMode::Quick);
        assert!(escape.direction.x.abs() > escape.direction.z.abs());
        assert!((escape.direction.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_scripted_escape_eases_in_and_fades() {
        let tuning = AiTuning::default();
        let mut rng = SequenceRandom::new([0.25]);
        let mut strategy = ScriptedStrategy::new(&tuning.scripted, &mut rng);
        let ctx = context(&tuning, Pose::default());
        let mut pose = Pose::default();
        let mut cooldown = 0.0;

        run_until_not(&mut strategy, ScriptedPhase::Approach, &tuning, &mut rng, &mut pose);
        run_until_not(&mut strategy, ScriptedPhase::Shadow, &tuning, &mut rng, &mut pose);

        let mut previous = strategy.offset();
        let mut first_step = None;
        let mut last_step = 0.0;
        let ticks = ((tuning.scripted.intensity_fade_duration
            .max(tuning.scripted.escape_accel_duration))
            / DT) as usize
            + 2;
        for _ in 0..ticks {
            let fired = strategy.update(&ctx, &mut pose, &mut cooldown, &mut rng);
            assert!(fired.is_none(), "escaping enemies hold fire");
            let step = strategy.offset().distance(previous);
            first_step.get_or_insert(step);
            last_step = step;
            previous = strategy.offset();
        }

        let full_speed_step = tuning.scripted.escape_speed * DT;
        assert!(first_step.unwrap() < full_speed_step * 0.01, "quadratic ease-in starts slow");
        assert!((last_step - full_speed_step).abs() < 1e-3, "reaches full escape speed");
        assert_eq!(strategy.intensity(), 0.0);
    }

    // ---- Orientation ----

    #[test]
    fn test_scripted_orientation_is_smoothed() {
        let tuning = AiTuning::default();
        let mut rng = SequenceRandom::new([0.9]);
        let mut strategy = ScriptedStrategy::new(&tuning.scripted, &mut rng);
        let ctx = context(&tuning, Pose::default());
        let mut pose = Pose::new(Vec3::ZERO, Quat::IDENTITY);
        let mut cooldown = 100.0;

        // First frame jumps from the origin to the spawn offset; the facing
        // must only move part of the way toward that direction.
        strategy.update(&ctx, &mut pose, &mut cooldown, &mut rng);
        let angle = pose.orientation.angle_between(Quat::IDENTITY);
        assert!(angle > 0.0);
        assert!(angle < 0.5);
        assert!(pose.orientation.is_normalized());
    }

    #[test]
    fn test_zero_dt_stays_finite() {
        let tuning = AiTuning::default();
        let mut rng = SequenceRandom::new([0.3]);
        let mut strategy = AiStrategy::new(AiKind::Scripted, &tuning, &mut rng);
        let player = Pose::default();
        let mut pose = strategy.spawn_pose(&player, &tuning);
        let mut cooldown = 1.0;
        let ctx = StrategyContext {
            dt: 0.0,
            player,
            tuning: &tuning,
        };
        for _ in 0..10 {
            strategy.update(&ctx, &mut pose, &mut cooldown, &mut rng);
        }
        assert!(pose.position.is_finite());
        assert!(pose.orientation.is_finite());
    }

    // ---- Determinism ----

    #[test]
    fn test_scripted_replay_is_bit_identical() {
        let tuning = AiTuning::default();
        let script = [0.13, 0.72, 0.41, 0.98, 0.05, 0.66];

        let run = || {
            let mut rng = SequenceRandom::new(script);
            let mut strategy = AiStrategy::new(AiKind::Scripted, &tuning, &mut rng);
            let mut player = Pose::default();
            let mut pose = strategy.spawn_pose(&player, &tuning);
            let mut cooldown = 0.5;
            let mut trace = Vec::new();
            for tick in 0..900 {
                // Player flies forward and slowly banks so the local frame moves.
                player.orientation = Quat::from_rotation_y(tick as f32 * 0.002);
                player.position += player.forward() * 30.0 * DT;
                let ctx = StrategyContext {
                    dt: DT,
                    player,
                    tuning: &tuning,
                };
                let shot = strategy.update(&ctx, &mut pose, &mut cooldown, &mut rng);
                trace.push((pose, shot));
            }
            trace
        };

        let a = run();
        let b = run();
        assert_eq!(a.len(), b.len());
        for (i, ((pose_a, shot_a), (pose_b, shot_b))) in a.iter().zip(b.iter()).enumerate() {
            assert_eq!(pose_a.position.to_array(), pose_b.position.to_array(), "tick {i}");
            assert_eq!(pose_a.orientation.to_array(), pose_b.orientation.to_array(), "tick {i}");
            assert_eq!(shot_a, shot_b, "tick {i}");
        }
    }

    // ---- Gunnery ----

    #[test]
    fn test_enemy_fires_at_player_and_rearms() {
        let tuning = AiTuning::default();
        let mut rng = SequenceRandom::new([0.5]);
        let mut strategy = AiStrategy::new(AiKind::Reactive, &tuning, &mut rng);
        let mut pose = Pose::default();
        let mut cooldown = 0.0;

        let shot = strategy
            .update(&context(&tuning, Pose::default()), &mut pose, &mut cooldown, &mut rng)
            .expect("expired cooldown, player in range");
        assert!((shot.length() - 1.0).abs() < 1e-5);
        // Reactive enemy sits ahead (-Z), so it shoots back toward +Z.
        assert!(shot.z > 0.9);
        let expected = tuning.fire.interval + 0.5 * tuning.fire.jitter;
        assert!((cooldown - expected).abs() < 1e-5);

        let second =
            strategy.update(&context(&tuning, Pose::default()), &mut pose, &mut cooldown, &mut rng);
        assert!(second.is_none(), "one shot per cooldown");
    }

    #[test]
    fn test_enemy_out_of_range_holds_fire() {
        let tuning = AiTuning::default();
        let mut rng = SequenceRandom::new([0.5]);
        let mut strategy = ScriptedStrategy::new(&tuning.scripted, &mut rng);
        let ctx = context(&tuning, Pose::default());
        let mut pose = Pose::default();
        let mut cooldown = 0.0;
        // Spawned beyond fire range.
        assert!(tuning.scripted.spawn_distance > tuning.fire.range);
        assert!(strategy.update(&ctx, &mut pose, &mut cooldown, &mut rng).is_none());
        assert_eq!(cooldown, 0.0);
    }

    // ---- Debug colors ----

    #[test]
    fn test_debug_colors() {
        let tuning = AiTuning::default();
        let mut rng = SequenceRandom::new([0.5]);
        let reactive = AiStrategy::new(AiKind::Reactive, &tuning, &mut rng);
        let scripted = AiStrategy::new(AiKind::Scripted, &tuning, &mut rng);
        assert_eq!(reactive.debug_color(), Some(Rgb::GREEN));
        assert_eq!(scripted.debug_color(), Some(Rgb::YELLOW));
        assert_eq!(scripted.kind(), AiKind::Scripted);
    }
}
