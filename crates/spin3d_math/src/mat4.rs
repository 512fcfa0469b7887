//! 4x4 Matrix utilities for 3D transforms
//!
//! Matrices are column-major (`m[column][row]`), matching the GPU-side
//! layout, so they can be uploaded to uniform buffers without conversion.

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

/// Create a rotation matrix about an arbitrary axis.
///
/// Rodrigues rotation in column-major form. The axis does not need to be
/// normalized, but it must be non-zero.
///
/// # Arguments
/// * `axis` - Rotation axis (non-zero)
/// * `angle` - Rotation angle in radians
///
/// # Example
/// ```
/// use spin3d_math::{Vec3, mat4};
/// // Quarter turn about the Z axis
/// let m = mat4::from_axis_angle(Vec3::Z, std::f32::consts::FRAC_PI_2);
/// ```
pub fn from_axis_angle(axis: Vec3, angle: f32) -> Mat4 {
    let n = axis.normalized();
    let (x, y, z) = (n.x, n.y, n.z);
    let c = angle.cos();
    let s = angle.sin();
    let t = 1.0 - c;

    [
        [t * x * x + c, t * x * y + s * z, t * x * z - s * y, 0.0],
        [t * x * y - s * z, t * y * y + c, t * y * z + s * x, 0.0],
        [t * x * z + s * y, t * y * z - s * x, t * z * z + c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Create a translation matrix
pub fn from_translation(offset: Vec3) -> Mat4 {
    let mut m = IDENTITY;
    m[3][0] = offset.x;
    m[3][1] = offset.y;
    m[3][2] = offset.z;
    m
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

/// Transform a point by a 4x4 matrix (column-major, w = 1)
pub fn transform_point(m: Mat4, p: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * p.x + m[1][0] * p.y + m[2][0] * p.z + m[3][0],
        m[0][1] * p.x + m[1][1] * p.y + m[2][1] * p.z + m[3][1],
        m[0][2] * p.x + m[1][2] * p.y + m[2][2] * p.z + m[3][2],
    )
}

/// Transform a direction by a 4x4 matrix (column-major, w = 0)
///
/// Rotates and scales, but ignores translation.
pub fn transform_direction(m: Mat4, d: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * d.x + m[1][0] * d.y + m[2][0] * d.z,
        m[0][1] * d.x + m[1][1] * d.y + m[2][1] * d.z,
        m[0][2] * d.x + m[1][2] * d.y + m[2][2] * d.z,
    )
}

/// Get a column of a matrix as an array
pub fn get_column(m: Mat4, col: usize) -> [f32; 4] {
    m[col]
}

/// Transpose a matrix
pub fn transpose(m: Mat4) -> Mat4 {
    [
        [m[0][0], m[1][0], m[2][0], m[3][0]],
        [m[0][1], m[1][1], m[2][1], m[3][1]],
        [m[0][2], m[1][2], m[2][2], m[3][2]],
        [m[0][3], m[1][3], m[2][3], m[3][3]],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    fn mat_approx_eq(a: Mat4, b: Mat4) -> bool {
        for i in 0..4 {
            for j in 0..4 {
                if !approx_eq(a[i][j], b[i][j]) {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn test_identity() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(vec_approx_eq(transform_point(IDENTITY, p), p));
    }

    #[test]
    fn test_axis_angle_z() {
        // 90° about Z: X goes to Y, Y goes to -X
        let m = from_axis_angle(Vec3::Z, FRAC_PI_2);

        let result = transform_point(m, Vec3::X);
        assert!(vec_approx_eq(result, Vec3::Y), "X should become Y, got {:?}", result);

        let result = transform_point(m, Vec3::Y);
        assert!(vec_approx_eq(result, -Vec3::X), "Y should become -X, got {:?}", result);

        // Z is on the axis and stays put
        let result = transform_point(m, Vec3::Z);
        assert!(vec_approx_eq(result, Vec3::Z), "Z should be unchanged, got {:?}", result);
    }

    #[test]
    fn test_axis_angle_preserves_axis() {
        let axis = Vec3::new(2.0, 1.0, 0.0);
        let m = from_axis_angle(axis, 1.3);
        let result = transform_point(m, axis);
        assert!(vec_approx_eq(result, axis), "Axis should be fixed, got {:?}", result);
    }

    #[test]
    fn test_axis_angle_unnormalized_axis() {
        // Scaling the axis must not change the rotation
        let a = from_axis_angle(Vec3::new(0.0, 0.0, 1.0), 0.7);
        let b = from_axis_angle(Vec3::new(0.0, 0.0, 10.0), 0.7);
        assert!(mat_approx_eq(a, b));
    }

    #[test]
    fn test_axis_angle_full_turn() {
        let m = from_axis_angle(Vec3::new(1.0, 1.0, 1.0), 2.0 * PI);
        assert!(mat_approx_eq(m, IDENTITY));
    }

    #[test]
    fn test_from_translation() {
        let m = from_translation(Vec3::new(2.0, -1.0, 0.0));

        let p = transform_point(m, Vec3::ZERO);
        assert!(vec_approx_eq(p, Vec3::new(2.0, -1.0, 0.0)));

        // Directions ignore translation
        let d = transform_direction(m, Vec3::X);
        assert!(vec_approx_eq(d, Vec3::X));
    }

    #[test]
    fn test_mul_identity() {
        let a = from_axis_angle(Vec3::Y, 0.5);
        assert!(mat_approx_eq(mul(IDENTITY, a), a));
        assert!(mat_approx_eq(mul(a, IDENTITY), a));
    }

    #[test]
    fn test_mul_composition() {
        // Two 45° rotations should equal one 90° rotation
        let r45 = from_axis_angle(Vec3::Z, FRAC_PI_4);
        let r90 = from_axis_angle(Vec3::Z, FRAC_PI_2);

        let composed = mul(r45, r45);

        let v = Vec3::X;
        assert!(vec_approx_eq(
            transform_point(composed, v),
            transform_point(r90, v)
        ));
    }

    #[test]
    fn test_mul_applies_b_first() {
        // translate * rotate: rotate first, then translate
        let t = from_translation(Vec3::new(5.0, 0.0, 0.0));
        let r = from_axis_angle(Vec3::Z, FRAC_PI_2);
        let m = mul(t, r);

        // X rotates to Y, then translates to (5, 1, 0)
        let result = transform_point(m, Vec3::X);
        assert!(vec_approx_eq(result, Vec3::new(5.0, 1.0, 0.0)), "got {:?}", result);
    }

    #[test]
    fn test_transpose_involution() {
        let m = from_axis_angle(Vec3::new(1.0, 2.0, 3.0), 0.9);
        assert!(mat_approx_eq(transpose(transpose(m)), m));
    }

    #[test]
    fn test_get_column() {
        let m = from_translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(get_column(m, 3), [1.0, 2.0, 3.0, 1.0]);
    }
}
