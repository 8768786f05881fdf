//! 4x4 Matrix utilities
//!
//! Matrices are column-major (`m[column][row]`), matching WGSL's `mat4x4<f32>`
//! so they can be written into uniform buffers without transposing.

use crate::Vec3;

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Create a rotation matrix in the plane spanned by axes `p1` and `p2`
///
/// Rotates `p1` towards `p2` by `angle` radians.
///
/// # Arguments
/// * `angle` - Rotation angle in radians
/// * `p1`, `p2` - Indices of the axes forming the rotation plane (0=X, 1=Y, 2=Z)
///
/// # Example
/// ```
/// use hypermorph_math::mat4::plane_rotation;
/// // Rotation about the X axis (YZ plane)
/// let m = plane_rotation(0.5, 1, 2);
/// ```
pub fn plane_rotation(angle: f32, p1: usize, p2: usize) -> Mat4 {
    let cs = angle.cos();
    let sn = angle.sin();

    let mut m = IDENTITY;

    m[p1][p1] = cs;
    m[p2][p2] = cs;
    m[p1][p2] = sn;
    m[p2][p1] = -sn;

    m
}

/// Right-handed rotation about the X axis
pub fn rotation_x(angle: f32) -> Mat4 {
    plane_rotation(angle, 1, 2)
}

/// Right-handed rotation about the Y axis
pub fn rotation_y(angle: f32) -> Mat4 {
    plane_rotation(angle, 2, 0)
}

/// Multiply two 4x4 matrices: result = a * b
///
/// In column-major convention, this applies b first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Transform a point (w = 1) by a 4x4 matrix, with perspective divide
pub fn transform_point(m: Mat4, p: Vec3) -> Vec3 {
    let x = m[0][0] * p.x + m[1][0] * p.y + m[2][0] * p.z + m[3][0];
    let y = m[0][1] * p.x + m[1][1] * p.y + m[2][1] * p.z + m[3][1];
    let z = m[0][2] * p.x + m[1][2] * p.y + m[2][2] * p.z + m[3][2];
    let w = m[0][3] * p.x + m[1][3] * p.y + m[2][3] * p.z + m[3][3];

    if w != 0.0 && w != 1.0 {
        Vec3::new(x / w, y / w, z / w)
    } else {
        Vec3::new(x, y, z)
    }
}

/// Right-handed perspective projection with clip-space depth in `[0, 1]`
///
/// # Arguments
/// * `fov_y` - Vertical field of view in radians
/// * `aspect` - Width / height
/// * `near`, `far` - Clipping plane distances (positive)
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y / 2.0).tan();
    let nf = 1.0 / (near - far);

    [
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, far * nf, -1.0],
        [0.0, 0.0, far * near * nf, 0.0],
    ]
}

/// Right-handed look-at view matrix
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let f = (target - eye).normalized();
    let s = f.cross(up).normalized();
    let u = s.cross(f);

    [
        [s.x, u.x, -f.x, 0.0],
        [s.y, u.y, -f.y, 0.0],
        [s.z, u.z, -f.z, 0.0],
        [-s.dot(eye), -u.dot(eye), f.dot(eye), 1.0],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 0.0001;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        a.max_abs_diff(b) < EPSILON
    }

    fn mat_approx_eq(a: Mat4, b: Mat4) -> bool {
        for i in 0..4 {
            for j in 0..4 {
                if (a[i][j] - b[i][j]).abs() >= EPSILON {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn test_identity() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert!(vec_approx_eq(transform_point(IDENTITY, v), v));
    }

    #[test]
    fn test_rotation_x_quarter_turn() {
        let m = rotation_x(FRAC_PI_2);
        // Y goes to Z, Z goes to -Y, X unchanged
        assert!(vec_approx_eq(transform_point(m, Vec3::Y), Vec3::Z));
        assert!(vec_approx_eq(transform_point(m, Vec3::Z), -Vec3::Y));
        assert!(vec_approx_eq(transform_point(m, Vec3::X), Vec3::X));
    }

    #[test]
    fn test_rotation_y_quarter_turn() {
        let m = rotation_y(FRAC_PI_2);
        // Z goes to X, X goes to -Z, Y unchanged
        assert!(vec_approx_eq(transform_point(m, Vec3::Z), Vec3::X));
        assert!(vec_approx_eq(transform_point(m, Vec3::X), -Vec3::Z));
        assert!(vec_approx_eq(transform_point(m, Vec3::Y), Vec3::Y));
    }

    #[test]
    fn test_mul_applies_right_operand_first() {
        // Rx * Ry: rotate about Y first, then about X
        let m = mul(rotation_x(FRAC_PI_2), rotation_y(FRAC_PI_2));
        // Z -(Ry)-> X -(Rx)-> X
        assert!(vec_approx_eq(transform_point(m, Vec3::Z), Vec3::X));
        // X -(Ry)-> -Z -(Rx)-> Y
        assert!(vec_approx_eq(transform_point(m, Vec3::X), Vec3::Y));
    }

    #[test]
    fn test_mul_identity() {
        let a = rotation_x(0.5);
        assert!(mat_approx_eq(mul(IDENTITY, a), a));
        assert!(mat_approx_eq(mul(a, IDENTITY), a));
    }

    #[test]
    fn test_full_turn_is_identity() {
        let m = rotation_y(std::f32::consts::TAU);
        assert!(mat_approx_eq(m, IDENTITY));
    }

    #[test]
    fn test_perspective_depth_range() {
        let proj = perspective(45f32.to_radians(), 1.0, 0.1, 100.0);
        let near = transform_point(proj, Vec3::new(0.0, 0.0, -0.1));
        let far = transform_point(proj, Vec3::new(0.0, 0.0, -100.0));
        assert!(near.z.abs() < EPSILON, "near plane maps to {}", near.z);
        assert!((far.z - 1.0).abs() < EPSILON, "far plane maps to {}", far.z);
    }

    #[test]
    fn test_look_at_moves_eye_to_origin() {
        let eye = Vec3::new(0.5, 1.5, 2.5);
        let view = look_at(eye, Vec3::ZERO, Vec3::Y);
        assert!(vec_approx_eq(transform_point(view, eye), Vec3::ZERO));

        // The target lies straight down -Z in view space
        let target = transform_point(view, Vec3::ZERO);
        assert!(target.x.abs() < EPSILON);
        assert!(target.y.abs() < EPSILON);
        assert!((target.z + eye.length()).abs() < EPSILON);
    }
}
