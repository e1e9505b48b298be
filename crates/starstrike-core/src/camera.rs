//! Camera abstraction used for aim checks and screen-space collision.

use glam::{Mat4, Vec3, Vec4Swizzles};
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::Pose;

/// Anything that can place world points on screen.
pub trait Camera {
    /// World-space eye position.
    fn position(&self) -> Vec3;

    /// Unit world-space view direction.
    fn forward(&self) -> Vec3;

    /// Project a world point to normalized device coordinates.
    ///
    /// Returns `None` when the point is at or behind the eye plane, where the
    /// perspective divide is meaningless.
    fn project(&self, point: Vec3) -> Option<Vec3>;
}

/// Lens parameters for a perspective camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view (radians).
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y: CAMERA_FOV_Y,
            aspect: CAMERA_ASPECT,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }
}

/// Right-handed perspective camera mounted at a pose.
#[derive(Debug, Clone, Copy)]
pub struct PerspectiveCamera {
    pose: Pose,
    view_projection: Mat4,
}

impl PerspectiveCamera {
    pub fn new(pose: Pose, lens: &CameraConfig) -> Self {
        let projection = Mat4::perspective_rh(lens.fov_y, lens.aspect, lens.near, lens.far);
        let view = Mat4::from_rotation_translation(pose.orientation, pose.position).inverse();
        Self {
            pose,
            view_projection: projection * view,
        }
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }
}

impl Camera for PerspectiveCamera {
    fn position(&self) -> Vec3 {
        self.pose.position
    }

    fn forward(&self) -> Vec3 {
        self.pose.forward()
    }

    fn project(&self, point: Vec3) -> Option<Vec3> {
        let clip = self.view_projection * point.extend(1.0);
        if clip.w <= EPSILON_SQ || !clip.is_finite() {
            return None;
        }
        Some(clip.xyz() / clip.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;

    #[test]
    fn test_point_ahead_projects_to_center() {
        let cam = PerspectiveCamera::new(Pose::default(), &CameraConfig::default());
        let ndc = cam.project(Vec3::new(0.0, 0.0, -10.0)).unwrap();
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    }

    #[test]
    fn test_point_behind_has_no_projection() {
        let cam = PerspectiveCamera::new(Pose::default(), &CameraConfig::default());
        assert!(cam.project(Vec3::new(0.0, 0.0, 10.0)).is_none());
        assert!(cam.project(Vec3::ZERO).is_none());
    }

    #[test]
    fn test_right_of_view_is_positive_x() {
        let cam = PerspectiveCamera::new(Pose::default(), &CameraConfig::default());
        let ndc = cam.project(Vec3::new(2.0, 1.0, -10.0)).unwrap();
        assert!(ndc.x > 0.0);
        assert!(ndc.y > 0.0);
    }

    #[test]
    fn test_rotated_camera_follows_pose() {
        // Yaw 90° left: forward becomes -X.
        let pose = Pose::new(
            Vec3::new(5.0, 0.0, 0.0),
            Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
        );
        let cam = PerspectiveCamera::new(pose, &CameraConfig::default());
        assert!((cam.forward() - Vec3::NEG_X).length() < 1e-5);
        let ndc = cam.project(Vec3::new(-5.0, 0.0, 0.0)).unwrap();
        assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
    }
}
