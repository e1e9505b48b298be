//! Screen-space aim test shared by the beam weapons and the exhaust port.

use glam::{Vec2, Vec3};

use starstrike_core::camera::Camera;

/// True if `target` is in front of the camera and projects within
/// `tolerance` (NDC units) of the `aim` point.
pub fn aim_check(camera: &dyn Camera, target: Vec3, aim: Vec2, tolerance: f32) -> bool {
    let Some(direction) = (target - camera.position()).try_normalize() else {
        return false;
    };
    if direction.dot(camera.forward()) <= 0.0 {
        return false;
    }
    match camera.project(target) {
        Some(ndc) => ndc.truncate().distance(aim) < tolerance,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starstrike_core::camera::{CameraConfig, PerspectiveCamera};
    use starstrike_core::types::Pose;

    fn camera() -> PerspectiveCamera {
        PerspectiveCamera::new(Pose::default(), &CameraConfig::default())
    }

    #[test]
    fn test_centered_target_hits() {
        assert!(aim_check(&camera(), Vec3::new(0.0, 0.0, -50.0), Vec2::ZERO, 0.08));
    }

    #[test]
    fn test_target_behind_never_hits() {
        // Directly behind would otherwise mirror onto the screen center.
        assert!(!aim_check(&camera(), Vec3::new(0.0, 0.0, 50.0), Vec2::ZERO, 10.0));
        assert!(!aim_check(&camera(), Vec3::ZERO, Vec2::ZERO, 10.0));
    }

    #[test]
    fn test_aim_offset_matters() {
        let cam = camera();
        let target = Vec3::new(10.0, 0.0, -50.0);
        let ndc = cam.project(target).unwrap().truncate();
        assert!(!aim_check(&cam, target, Vec2::ZERO, 0.08));
        assert!(aim_check(&cam, target, ndc, 0.08));
        assert!(aim_check(&cam, target, ndc + Vec2::new(0.05, 0.0), 0.08));
        assert!(!aim_check(&cam, target, ndc + Vec2::new(0.1, 0.0), 0.08));
    }
}
