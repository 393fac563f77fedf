//! Orbit camera and the camera-facing test.
//!
//! Facing determination lives here as a single pure function so every
//! consumer derives visibility the same way.

use glam::{DMat3, DMat4, DVec3};
use serde::{Deserialize, Serialize};

/// Dot-product tolerance for the facing test. A face whose transformed
/// normal is edge-on counts as facing; its pair partner is negated by the
/// box, so exactly one of each pair stays visible.
pub const FACING_EPSILON: f64 = 1e-9;

/// View direction in camera space: the camera looks along +Z.
const VIEW_FORWARD: DVec3 = DVec3::new(0.0, 0.0, 1.0);

/// Orbit camera around the box center: yaw about the vertical axis, then
/// pitch about the horizontal axis, viewer pulled back along -Z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Rotation around the box's vertical axis, radians.
    pub yaw: f64,
    /// Rotation around the box's horizontal axis, radians.
    pub pitch: f64,
    /// Perspective focal length in box units.
    pub focal_length: f64,
    /// Distance from the viewer to the box center, box units.
    pub distance: f64,
}

impl Default for Camera {
    fn default() -> Self {
        // Isometric-ish authoring default: slight turn and tilt.
        Self {
            yaw: (-30.0f64).to_radians(),
            pitch: (20.0f64).to_radians(),
            focal_length: 2.5,
            distance: 4.0,
        }
    }
}

impl Camera {
    #[must_use]
    pub fn new(yaw: f64, pitch: f64) -> Self {
        Self {
            yaw,
            pitch,
            ..Self::default()
        }
    }

    /// Rotation applied to scene directions when entering camera space.
    /// Positive pitch raises the viewpoint above the box.
    #[must_use]
    pub fn rotation(&self) -> DMat3 {
        DMat3::from_rotation_x(-self.pitch) * DMat3::from_rotation_y(self.yaw)
    }

    /// Scene-to-camera transform for a box centered at `center`.
    #[must_use]
    pub fn scene_transform(&self, center: DVec3) -> DMat4 {
        DMat4::from_translation(DVec3::new(0.0, 0.0, self.distance))
            * DMat4::from_mat3(self.rotation())
            * DMat4::from_translation(-center)
    }
}

/// True when a face with the given outward normal points toward the camera.
///
/// The normal is rotated into camera space and compared against the view
/// direction: a face faces the camera iff its transformed normal is not
/// aligned with the forward vector in the same-direction sense.
#[must_use]
pub fn is_facing(outward_normal: DVec3, camera: &Camera) -> bool {
    let camera_normal = camera.rotation() * outward_normal;
    camera_normal.dot(VIEW_FORWARD) <= FACING_EPSILON
}

#[cfg(test)]
mod tests {
    use super::{Camera, is_facing};
    use glam::DVec3;

    #[test]
    fn head_on_camera_sees_the_front_normal() {
        let camera = Camera::new(0.0, 0.0);
        assert!(is_facing(DVec3::new(0.0, 0.0, -1.0), &camera));
        assert!(!is_facing(DVec3::new(0.0, 0.0, 1.0), &camera));
    }

    #[test]
    fn quarter_turn_swaps_left_and_right() {
        let camera = Camera::new(std::f64::consts::FRAC_PI_2, 0.0);
        let left = DVec3::new(-1.0, 0.0, 0.0);
        let right = DVec3::new(1.0, 0.0, 0.0);
        assert_ne!(is_facing(left, &camera), is_facing(right, &camera));
    }

    #[test]
    fn downward_pitch_reveals_the_top_face() {
        let camera = Camera::new(0.0, (35.0f64).to_radians());
        assert!(is_facing(DVec3::new(0.0, 1.0, 0.0), &camera));
        assert!(!is_facing(DVec3::new(0.0, -1.0, 0.0), &camera));
    }
}
