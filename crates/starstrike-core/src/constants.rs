//! Simulation constants and tuning defaults.
//!
//! World units are arbitrary "scene units"; the player looks down -Z.

/// Upper bound on a single tick's elapsed time (seconds).
pub const MAX_TICK_SECS: f32 = 0.1;

/// Squared length below which a vector is treated as zero.
pub const EPSILON_SQ: f32 = 1e-8;

// --- Player ---

/// Player cruise speed (units/s).
pub const PLAYER_SPEED: f32 = 30.0;

/// Yaw/pitch rate at full aim deflection (rad/s).
pub const PLAYER_TURN_RATE: f32 = 1.2;

/// Lateral speed in strafe mode at full aim deflection (units/s).
pub const PLAYER_STRAFE_SPEED: f32 = 20.0;

/// Starting shield count.
pub const PLAYER_SHIELDS: u32 = 5;

// --- Camera ---

/// Vertical field of view (radians).
pub const CAMERA_FOV_Y: f32 = 75.0 * std::f32::consts::PI / 180.0;

/// Viewport aspect ratio (width / height).
pub const CAMERA_ASPECT: f32 = 16.0 / 9.0;

pub const CAMERA_NEAR: f32 = 0.1;

pub const CAMERA_FAR: f32 = 5000.0;

// --- Reactive AI ---

/// Distance ahead of the player a reactive enemy holds (units).
pub const REACTIVE_LEAD_DISTANCE: f32 = 40.0;

/// Lateral oscillation frequency (rad/s).
pub const REACTIVE_SWAY_FREQUENCY: f32 = 1.5;

/// Lateral oscillation amplitude (units).
pub const REACTIVE_SWAY_AMPLITUDE: f32 = 8.0;

// --- Scripted AI ---

/// Initial distance ahead of the player a scripted enemy spawns at (units).
pub const SCRIPTED_SPAWN_DISTANCE: f32 = 300.0;

/// Maximum lateral spread of a scripted spawn (units).
pub const SCRIPTED_SPAWN_SPREAD: f32 = 40.0;

/// Station-keeping distance ahead of the player (units).
pub const SCRIPTED_SHADOW_DISTANCE: f32 = 35.0;

/// Closing speed outside the braking zone (units/s).
pub const SCRIPTED_APPROACH_SPEED: f32 = 90.0;

/// Distance band over which closing speed falls to zero (units).
pub const SCRIPTED_BRAKING_ZONE: f32 = 60.0;

/// Remaining distance below which the approach snaps to the shadow distance.
pub const SCRIPTED_SNAP_THRESHOLD: f32 = 0.5;

/// Distance over which intensity ramps up during the approach (units).
pub const SCRIPTED_INTENSITY_RAMP: f32 = 120.0;

/// Peak intensity of the arc swing.
pub const SCRIPTED_MAX_INTENSITY: f32 = 1.0;

/// Time spent shadowing before escaping (s).
pub const SCRIPTED_SHADOW_DURATION: f32 = 4.0;

/// Escape cruise speed once fully accelerated (units/s).
pub const SCRIPTED_ESCAPE_SPEED: f32 = 120.0;

/// Time to reach full escape speed (s).
pub const SCRIPTED_ESCAPE_ACCEL_DURATION: f32 = 1.5;

/// Time for intensity to fade to zero after escape starts (s).
pub const SCRIPTED_INTENSITY_FADE_DURATION: f32 = 1.0;

/// Small constant lateral wobble amplitude (units).
pub const SCRIPTED_WOBBLE_AMPLITUDE: f32 = 1.5;

/// Wobble frequency (rad/s).
pub const SCRIPTED_WOBBLE_FREQUENCY: f32 = 2.3;

/// Arc swing amplitude at full intensity (units).
pub const SCRIPTED_ARC_AMPLITUDE: f32 = 12.0;

/// Arc swing frequency (rad/s).
pub const SCRIPTED_ARC_FREQUENCY: f32 = 0.9;

/// Longitudinal falloff of the arc swing (units).
pub const SCRIPTED_ARC_FALLOFF: f32 = 80.0;

/// Orientation slerp rate (1/s).
pub const SCRIPTED_TURN_RATE: f32 = 6.0;

// --- Enemy fire ---

/// Base interval between enemy shots (s).
pub const ENEMY_FIRE_INTERVAL: f32 = 2.5;

/// Random extra delay added to each fire interval (s).
pub const ENEMY_FIRE_JITTER: f32 = 1.5;

/// Enemies beyond this distance from the player hold fire (units).
pub const ENEMY_FIRE_RANGE: f32 = 250.0;

/// Projectile speed relative to the firing enemy (units/s).
pub const PROJECTILE_SPEED: f32 = 60.0;

// --- Entity lifecycle ---

/// Enemies beyond this distance from the player are removed (units).
pub const ENEMY_CLEANUP_DISTANCE: f32 = 600.0;

/// Projectiles beyond this distance from the player are removed (units).
pub const PROJECTILE_EXPIRATION_DISTANCE: f32 = 400.0;

/// Time an exploded projectile lingers before removal (s).
pub const PROJECTILE_EXPLOSION_DURATION: f32 = 0.5;

/// Camera-forward distance at which a projectile counts as hitting the cockpit.
pub const PROJECTILE_HIT_DISTANCE: f32 = 2.0;

/// Half-size of the on-screen NDC box a crossing projectile must lie in.
pub const PROJECTILE_SCREEN_TOLERANCE: f32 = 0.6;

/// Fallback body-contact radius around the player (units).
pub const PROJECTILE_BODY_RADIUS: f32 = 1.5;

/// Damage dealt by one projectile hit (shield units).
pub const PROJECTILE_DAMAGE: u32 = 1;

/// Seconds between enemy spawns while spawning is enabled.
pub const ENEMY_SPAWN_INTERVAL: f32 = 3.0;

// --- Combat ---

/// Seconds between player volleys.
pub const LASER_COOLDOWN: f32 = 0.15;

/// Virtual beam depth; beam lifetime is depth / speed (units).
pub const LASER_TARGET_DEPTH: f32 = 100.0;

/// Beam travel speed (units/s).
pub const LASER_SPEED: f32 = 400.0;

/// NDC distance within which the aim counts as on target.
pub const AIM_TOLERANCE: f32 = 0.08;

/// NDC distance within which a beam tip hits a projectile.
pub const LASER_PROJECTILE_RADIUS: f32 = 0.06;

/// Score for destroying an enemy.
pub const SCORE_ENEMY: u64 = 100;

/// Score for shooting down a projectile.
pub const SCORE_PROJECTILE: u64 = 10;

/// Primary laser color (0xRRGGBB).
pub const LASER_COLOR_PRIMARY: u32 = 0xff_20_20;

/// Alternate laser color (0xRRGGBB).
pub const LASER_COLOR_SECONDARY: u32 = 0xff_a0_20;

// --- Mission ---

/// Kills needed in a dogfight before the surface approach begins.
pub const DOGFIGHT_KILL_THRESHOLD: u32 = 10;

/// Landmark sphere radius (units).
pub const LANDMARK_RADIUS: f32 = 400.0;

/// Landmark distance ahead of the player at approach start (units).
pub const LANDMARK_DISTANCE: f32 = 1500.0;

/// Landmark lateral offset from the player's heading (units).
pub const LANDMARK_LATERAL_OFFSET: f32 = 300.0;

/// Landmark vertical offset from the player's heading (units).
pub const LANDMARK_VERTICAL_OFFSET: f32 = -200.0;

/// Extra distance beyond the landmark surface that triggers the trench (units).
pub const LANDMARK_ARRIVAL_DISTANCE: f32 = 50.0;

/// Player steering rate toward the landmark (1/s).
pub const LANDMARK_STEER_RATE: f32 = 0.8;

/// Landmark spin rate (rad/s).
pub const LANDMARK_SPIN_RATE: f32 = 0.05;

/// Bonus awarded for completing the trench run.
pub const TRENCH_BONUS: u64 = 5000;

// --- Trench ---

/// Trench half-width (units).
pub const TRENCH_HALF_WIDTH: f32 = 10.0;

/// Trench half-height (units).
pub const TRENCH_HALF_HEIGHT: f32 = 8.0;

/// Trench length along -Z (units).
pub const TRENCH_LENGTH: f32 = 1200.0;

/// Spacing between obstacles along -Z (units).
pub const TRENCH_OBSTACLE_SPACING: f32 = 80.0;

/// Vertical offset of an obstacle's center from the trench axis (units).
pub const TRENCH_OBSTACLE_OFFSET: f32 = 4.0;

/// Depth tolerance of an obstacle hit (units).
pub const TRENCH_DEPTH_TOLERANCE: f32 = 1.5;

/// Height tolerance of an obstacle hit (units).
pub const TRENCH_HEIGHT_TOLERANCE: f32 = 4.0;

/// Damage dealt by an obstacle hit (shield units).
pub const TRENCH_OBSTACLE_DAMAGE: u32 = 1;

/// Distance of the exhaust port before the trench end (units).
pub const TRENCH_PORT_INSET: f32 = 40.0;

/// Half-extents of the exhaust port bounding box (units).
pub const TRENCH_PORT_HALF_EXTENT: f32 = 3.0;

/// Upper bound on obstacles in one corridor.
pub const TRENCH_MAX_OBSTACLES: usize = 4096;
