//! Camera system for interactive 3D viewing.
//!
//! Provides a smoothed orbit/pan/zoom controller. Commands retarget a
//! [`MotionState`]; a once-per-frame [`CameraController::update`] eases the
//! camera toward those targets and orbits it rigidly around a movable pivot.

/// Pan, rotate, zoom and framing commands.
mod commands;
/// Orbital camera controller owning the motion state.
pub mod controller;
/// Host camera object and projection types.
pub mod core;
/// Current/target pairs and the motion mode.
pub mod motion;
/// Per-frame smoothing step.
mod smoothing;

pub use controller::{CameraController, DEFAULT_PIVOT_DISTANCE};
pub use self::core::{Camera, Pose, Projection};
pub use motion::{Motion, MotionMode, MotionState};
