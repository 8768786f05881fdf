//! Whole-model rotation driven by rotation progress

use hypermorph_math::{ease_circular_in_out, mat4, Mat4};

/// Rotation of the model about the X and Y axes, in degrees
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ModelRotation {
    /// Rotation about X (circular-eased, so it lurches and settles)
    pub x_degrees: f64,
    /// Rotation about Y (linear in progress)
    pub y_degrees: f64,
}

impl ModelRotation {
    /// Derive the rotation for a rotation progress in `[0, 1)`
    pub fn from_progress(rotation: f64) -> Self {
        Self {
            x_degrees: 360.0 * ease_circular_in_out(rotation),
            y_degrees: 360.0 * rotation,
        }
    }

    /// Model matrix: rotate about Y first, then about X
    pub fn to_matrix(self) -> Mat4 {
        mat4::mul(
            mat4::rotation_x(self.x_degrees.to_radians() as f32),
            mat4::rotation_y(self.y_degrees.to_radians() as f32),
        )
    }
}
