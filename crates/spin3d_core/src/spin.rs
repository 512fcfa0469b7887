//! Spin configuration (axis, period, translation)
//!
//! A `Spin` describes a steady rotation about a fixed axis combined with a
//! fixed translation. It is a pure function of elapsed time: the same input
//! always yields the same transform.

use spin3d_math::{mat4, Mat4, Vec3};
use std::f32::consts::PI;

/// A steady rotation about a fixed axis, offset by a fixed translation
///
/// The world transform at elapsed time `t` is
/// `translation × rotation(axis, angle(t))`, with the rotation applied first.
/// `angle(t)` grows linearly: one full turn per `period_secs`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spin {
    axis: Vec3,
    period_secs: f32,
    translation: Vec3,
}

impl Spin {
    /// Create a spin about `axis` completing one turn every `period_secs`.
    ///
    /// The period must be finite and positive, and the axis non-zero;
    /// anything else is a configuration error.
    pub fn new(axis: Vec3, period_secs: f32) -> Result<Self, SpinError> {
        if !period_secs.is_finite() || period_secs <= 0.0 {
            return Err(SpinError::InvalidPeriod(period_secs));
        }
        if axis.length_squared() == 0.0 {
            return Err(SpinError::ZeroAxis);
        }

        Ok(Self {
            axis,
            period_secs,
            translation: Vec3::ZERO,
        })
    }

    /// Set the fixed translation applied after the rotation
    pub fn with_translation(mut self, translation: Vec3) -> Self {
        self.translation = translation;
        self
    }

    /// The rotation axis
    #[inline]
    pub fn axis(&self) -> Vec3 {
        self.axis
    }

    /// Seconds per full rotation
    #[inline]
    pub fn period_secs(&self) -> f32 {
        self.period_secs
    }

    /// The fixed translation
    #[inline]
    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Rotation angle in radians at elapsed time `t` (seconds).
    ///
    /// Grows linearly and is not reduced mod 2π; the trigonometry in the
    /// rotation matrix takes care of periodicity.
    #[inline]
    pub fn angle_at(&self, elapsed_secs: f32) -> f32 {
        elapsed_secs / self.period_secs * 2.0 * PI
    }

    /// World transform at elapsed time `t`: `translation × rotation`
    pub fn transform_at(&self, elapsed_secs: f32) -> Mat4 {
        let rotation = mat4::from_axis_angle(self.axis, self.angle_at(elapsed_secs));
        let translation = mat4::from_translation(self.translation);
        mat4::mul(translation, rotation)
    }
}

/// Spin configuration error
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinError {
    /// Period was zero, negative, or not finite
    InvalidPeriod(f32),
    /// Rotation axis had zero length
    ZeroAxis,
}

impl std::fmt::Display for SpinError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpinError::InvalidPeriod(p) => {
                write!(f, "spin period must be finite and positive, got {}", p)
            }
            SpinError::ZeroAxis => write!(f, "spin axis must be non-zero"),
        }
    }
}

impl std::error::Error for SpinError {}

#[cfg(test)]
mod tests {
    use super::*;
    use spin3d_math::mat4::transform_point;

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
    fn test_invalid_period_rejected() {
        assert_eq!(
            Spin::new(Vec3::Y, 0.0),
            Err(SpinError::InvalidPeriod(0.0))
        );
        assert_eq!(
            Spin::new(Vec3::Y, -2.0),
            Err(SpinError::InvalidPeriod(-2.0))
        );
        assert!(matches!(
            Spin::new(Vec3::Y, f32::NAN),
            Err(SpinError::InvalidPeriod(_))
        ));
        assert!(matches!(
            Spin::new(Vec3::Y, f32::INFINITY),
            Err(SpinError::InvalidPeriod(_))
        ));
    }

    #[test]
    fn test_zero_axis_rejected() {
        assert_eq!(Spin::new(Vec3::ZERO, 8.0), Err(SpinError::ZeroAxis));
    }

    #[test]
    fn test_angle_linear_rate() {
        let spin = Spin::new(Vec3::Y, 4.0).unwrap();

        // For all t1 < t2, angle(t2) - angle(t1) is proportional to t2 - t1
        let rate = (spin.angle_at(3.0) - spin.angle_at(1.0)) / 2.0;
        for (t1, t2) in [(0.0, 0.5), (2.0, 6.5), (10.0, 17.25)] {
            let observed = (spin.angle_at(t2) - spin.angle_at(t1)) / (t2 - t1);
            assert!(approx_eq(observed, rate), "rate at ({}, {}) was {}", t1, t2, observed);
        }
    }

    #[test]
    fn test_angle_periodicity() {
        let spin = Spin::new(Vec3::new(1.0, 2.0, 3.0), 8.0).unwrap();

        // angle(t + period) == angle(t) (mod 2π); compare through sin/cos
        // since the raw angle keeps growing
        for t in [0.0f32, 1.7, 5.0, 23.0] {
            let a = spin.angle_at(t);
            let b = spin.angle_at(t + spin.period_secs());
            assert!(approx_eq(a.sin(), b.sin()));
            assert!(approx_eq(a.cos(), b.cos()));
        }
    }

    #[test]
    fn test_transform_at_zero_is_pure_translation() {
        let spin = Spin::new(Vec3::new(2.0, 1.0, 0.0), 8.0)
            .unwrap()
            .with_translation(Vec3::new(2.0, -1.0, 0.0));

        assert!(mat_approx_eq(
            spin.transform_at(0.0),
            mat4::from_translation(Vec3::new(2.0, -1.0, 0.0))
        ));
    }

    #[test]
    fn test_half_period_is_half_turn() {
        // period = 8s, axis = (2,1,0), translation = (2,-1,0);
        // at t = 4s the angle is π and the transform equals
        // translate(2,-1,0) × rotate(π, axis)
        let axis = Vec3::new(2.0, 1.0, 0.0);
        let spin = Spin::new(axis, 8.0)
            .unwrap()
            .with_translation(Vec3::new(2.0, -1.0, 0.0));

        assert!(approx_eq(spin.angle_at(4.0), std::f32::consts::PI));

        let expected = mat4::mul(
            mat4::from_translation(Vec3::new(2.0, -1.0, 0.0)),
            mat4::from_axis_angle(axis, std::f32::consts::PI),
        );
        assert!(mat_approx_eq(spin.transform_at(4.0), expected));
    }

    #[test]
    fn test_full_period_returns_to_start() {
        let spin = Spin::new(Vec3::new(0.0, 1.0, 1.0), 2.5).unwrap();

        let p = Vec3::new(1.0, 0.5, -0.25);
        let start = transform_point(spin.transform_at(0.0), p);
        let after = transform_point(spin.transform_at(2.5), p);
        assert!(vec_approx_eq(start, after), "expected {:?}, got {:?}", start, after);
    }

    #[test]
    fn test_rotation_applied_before_translation() {
        // A quarter turn about Z takes X to Y; the translation lands on top
        let spin = Spin::new(Vec3::Z, 4.0)
            .unwrap()
            .with_translation(Vec3::new(10.0, 0.0, 0.0));

        let result = transform_point(spin.transform_at(1.0), Vec3::X);
        assert!(vec_approx_eq(result, Vec3::new(10.0, 1.0, 0.0)), "got {:?}", result);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", SpinError::InvalidPeriod(0.0)),
            "spin period must be finite and positive, got 0"
        );
        assert_eq!(format!("{}", SpinError::ZeroAxis), "spin axis must be non-zero");
    }
}
