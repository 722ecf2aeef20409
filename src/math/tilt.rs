//! Orientation to tilt-angle decomposition.
//!
//! Orientations arrive in the camera's left-handed, Y-up convention. They
//! are flipped to right-handed and decomposed as an intrinsic X-Y-Z Euler
//! sequence `R = Rx(alpha) * Ry(beta) * Rz(theta)`. The first two angles
//! form the tilt pair; the third is only used to pick the canonical branch.
//!
//! All angles are in degrees. Arithmetic runs in `f64` so the gimbal test
//! and `asin` near ±1 do not lose precision to `f32` rounding.

use glam::{DQuat, Quat};

/// Band around `|delta| == 0.5` treated as gimbal lock.
pub const GIMBAL_TOLERANCE: f64 = 1e-6;

/// Full intrinsic X-Y-Z Euler decomposition, degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerXyz {
    /// Rotation about X (first axis).
    pub alpha: f32,
    /// Rotation about Y (middle axis).
    pub beta: f32,
    /// Rotation about Z (third axis). Zero under gimbal lock.
    pub theta: f32,
}

/// Pair of orthogonal tilt angles, each in `(-360, 360)` degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltAngles {
    /// Tilt about the X axis.
    pub alpha: f32,
    /// Tilt about the Y axis.
    pub beta: f32,
}

/// Decompose a unit orientation into its `(alpha, beta)` tilt pair.
///
/// Non-unit or NaN input yields unspecified (but non-panicking) output.
#[must_use]
pub fn tilt_angles(orientation: Quat) -> TiltAngles {
    let euler = EulerXyz::from_quat(orientation);
    TiltAngles {
        alpha: euler.alpha,
        beta: euler.beta,
    }
}

impl EulerXyz {
    /// Decompose a left-handed orientation, canonicalized so that
    /// `theta` lies in `[-90, 90]` and every angle in `(-360, 360)`.
    #[must_use]
    pub fn from_quat(orientation: Quat) -> Self {
        let q = to_right_handed(orientation.as_dquat());
        let delta = middle_axis_half_sine(q);

        let (alpha, beta, theta) = if is_gimbal_locked(delta) {
            gimbal_branch(q, delta)
        } else {
            canonical_branch(regular_branch(q, delta))
        };

        Self {
            alpha: wrap_degrees(alpha) as f32,
            beta: wrap_degrees(beta) as f32,
            theta: wrap_degrees(theta) as f32,
        }
    }

    /// Recompose the left-handed orientation these angles describe.
    #[must_use]
    pub fn to_quat(self) -> Quat {
        let q = DQuat::from_rotation_x(f64::from(self.alpha).to_radians())
            * DQuat::from_rotation_y(f64::from(self.beta).to_radians())
            * DQuat::from_rotation_z(f64::from(self.theta).to_radians());
        to_right_handed(q).normalize().as_quat()
    }
}

/// Mirror the handedness of a quaternion by negating x and y.
///
/// The flip is its own inverse, so it converts both ways.
fn to_right_handed(q: DQuat) -> DQuat {
    DQuat::from_xyzw(-q.x, -q.y, q.z, q.w)
}

/// `w*y + x*z`, half the sine of the middle (Y) angle.
fn middle_axis_half_sine(q: DQuat) -> f64 {
    q.w * q.y + q.x * q.z
}

pub(crate) fn is_gimbal_locked(delta: f64) -> bool {
    (delta.abs() - 0.5).abs() <= GIMBAL_TOLERANCE
}

/// First and third axes are parallel: fold everything into alpha.
pub(crate) fn gimbal_branch(q: DQuat, delta: f64) -> (f64, f64, f64) {
    let alpha = 2.0 * q.x.atan2(q.w).to_degrees();
    let beta = 90.0 * delta.signum();
    (alpha, beta, 0.0)
}

pub(crate) fn regular_branch(q: DQuat, delta: f64) -> (f64, f64, f64) {
    let (x, y, z, w) = (q.x, q.y, q.z, q.w);

    let alpha = (2.0 * (w * x - z * y))
        .atan2(1.0 - 2.0 * (y * y + x * x))
        .to_degrees();
    // Rounding can push 2*delta a hair past ±1.
    let beta = (2.0 * delta).clamp(-1.0, 1.0).asin().to_degrees();
    let theta = (2.0 * (w * z - x * y))
        .atan2(1.0 - 2.0 * (y * y + z * z))
        .to_degrees();

    (alpha, beta, theta)
}

/// Pick the solution with `theta` in `[-90, 90]`.
///
/// `(a, b, t)` and `(a - 180, 180 - b, t ∓ 180)` describe the same rotation.
fn canonical_branch((alpha, beta, theta): (f64, f64, f64)) -> (f64, f64, f64) {
    if theta.abs() <= 90.0 {
        return (alpha, beta, theta);
    }
    (alpha - 180.0, 180.0 - beta, theta - 180.0 * theta.signum())
}

/// Sign-preserving modulo into `(-360, 360)`.
fn wrap_degrees(angle: f64) -> f64 {
    angle % 360.0
}
