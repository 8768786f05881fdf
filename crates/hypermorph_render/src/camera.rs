//! Fixed perspective camera
//!
//! The tesseract spins in place; the camera never moves. Its defaults frame
//! a half-extent 0.5 cube from slightly above and to the side.

use hypermorph_math::{mat4, Mat4, Vec3};

/// Stationary perspective camera
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedCamera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for FixedCamera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.5, 1.5, 2.5),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl FixedCamera {
    /// World to view transform
    pub fn view_matrix(&self) -> Mat4 {
        mat4::look_at(self.eye, self.target, self.up)
    }

    /// View to clip transform for the given aspect ratio
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        mat4::perspective(self.fov_y.to_radians(), aspect, self.near, self.far)
    }

    /// Combined world to clip transform
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        mat4::mul(self.projection_matrix(aspect), self.view_matrix())
    }
}
