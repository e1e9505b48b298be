//! Trench corridor geometry: obstacles, the exhaust port, and the far end.
//!
//! The corridor runs from the origin along -Z. Obstacles sit every
//! `obstacle_spacing` units, alternating low and high, up to the port.

use glam::Vec3;

use starstrike_core::config::TrenchConfig;
use starstrike_core::constants::TRENCH_MAX_OBSTACLES;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub z: f32,
    /// Vertical center of the obstacle (below or above the corridor axis).
    pub y: f32,
}

/// Contact with one obstacle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleHit {
    /// Index along the corridor, 0 nearest the entrance.
    pub index: usize,
    pub obstacle: Obstacle,
}

#[derive(Debug, Clone)]
pub struct TrenchField {
    obstacles: Vec<Obstacle>,
    half_width: f32,
    half_height: f32,
    length: f32,
    depth_tolerance: f32,
    height_tolerance: f32,
    port_z: f32,
    port_half_extent: f32,
}

impl TrenchField {
    pub fn new(config: &TrenchConfig) -> Self {
        let port_z = -(config.length - config.port_inset);
        let count = config.obstacle_count().min(TRENCH_MAX_OBSTACLES);
        let obstacles = (0..count)
            .map(|index| Obstacle {
                z: -((index + 1) as f32) * config.obstacle_spacing,
                y: if index % 2 == 0 {
                    -config.obstacle_offset
                } else {
                    config.obstacle_offset
                },
            })
            .collect();
        Self {
            obstacles,
            half_width: config.half_width,
            half_height: config.half_height,
            length: config.length,
            depth_tolerance: config.depth_tolerance,
            height_tolerance: config.height_tolerance,
            port_z,
            port_half_extent: config.port_half_extent,
        }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn port_position(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, self.port_z)
    }

    /// Hard-clamp a position into the corridor cross-section.
    pub fn clamp(&self, position: Vec3) -> Vec3 {
        Vec3::new(
            position.x.clamp(-self.half_width, self.half_width),
            position.y.clamp(-self.half_height, self.half_height),
            position.z,
        )
    }

    pub fn collide(&self, position: Vec3) -> Option<ObstacleHit> {
        self.obstacles
            .iter()
            .enumerate()
            .find(|(_, o)| {
                (position.z - o.z).abs() <= self.depth_tolerance
                    && (position.y - o.y).abs() <= self.height_tolerance
            })
            .map(|(index, &obstacle)| ObstacleHit { index, obstacle })
    }

    pub fn in_port(&self, position: Vec3) -> bool {
        let e = self.port_half_extent;
        (position.z - self.port_z).abs() <= e && position.x.abs() <= e && position.y.abs() <= e
    }

    pub fn past_end(&self, position: Vec3) -> bool {
        position.z < -self.length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obstacles_alternate_and_stop_before_port() {
        let field = TrenchField::new(&TrenchConfig::default());
        let config = TrenchConfig::default();
        let obstacles = field.obstacles();
        assert!(!obstacles.is_empty());
        assert_eq!(obstacles[0].z, -config.obstacle_spacing);
        assert!(obstacles[0].y < 0.0);
        assert!(obstacles[1].y > 0.0);
        let port_z = field.port_position().z;
        assert!(obstacles.iter().all(|o| o.z > port_z));
    }

    #[test]
    fn test_default_corridor_obstacle_count() {
        let config = TrenchConfig::default();
        let field = TrenchField::new(&config);
        // 1160 units before the port at 80-unit spacing.
        assert_eq!(field.obstacles().len(), 14);
        assert_eq!(config.obstacle_count(), 14);
    }

    #[test]
    fn test_tiny_spacing_is_bounded() {
        let config = TrenchConfig {
            obstacle_spacing: 1.0e-6,
            ..TrenchConfig::default()
        };
        let field = TrenchField::new(&config);
        assert_eq!(field.obstacles().len(), TRENCH_MAX_OBSTACLES);
    }

    #[test]
    fn test_collide_respects_tolerances() {
        let field = TrenchField::new(&TrenchConfig::default());
        let first = field.obstacles()[0];
        let hit = field.collide(Vec3::new(0.0, first.y, first.z)).unwrap();
        assert_eq!(hit.index, 0);
        assert!(field.collide(Vec3::new(0.0, first.y, first.z - 3.0)).is_none());
        // Dodging to the far side of the corridor clears a low obstacle.
        assert!(field.collide(Vec3::new(0.0, 7.0, first.z)).is_none());
    }

    #[test]
    fn test_port_and_end() {
        let field = TrenchField::new(&TrenchConfig::default());
        let port = field.port_position();
        assert!(field.in_port(port));
        assert!(!field.in_port(port + Vec3::new(5.0, 0.0, 0.0)));
        assert!(!field.past_end(port));
        assert!(field.past_end(Vec3::new(0.0, 0.0, -TrenchConfig::default().length - 1.0)));
    }

    #[test]
    fn test_clamp_bounds() {
        let field = TrenchField::new(&TrenchConfig::default());
        let clamped = field.clamp(Vec3::new(100.0, -100.0, -5.0));
        let config = TrenchConfig::default();
        assert_eq!(clamped, Vec3::new(config.half_width, -config.half_height, -5.0));
    }
}
