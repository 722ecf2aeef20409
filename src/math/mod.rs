//! Orientation math.

/// Quaternion to tilt-angle decomposition.
pub mod tilt;

pub use tilt::{tilt_angles, EulerXyz, TiltAngles};
