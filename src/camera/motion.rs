//! Motion state tracked between input commands and scheduler ticks.

use glam::{Quat, Vec2, Vec3};

use super::core::{Camera, Projection};

/// Tolerance for componentwise vector and scalar settling.
pub const SETTLE_EPSILON: f32 = 1e-4;

/// Orientations count as settled once `|dot| >= 1 - QUAT_SETTLE_EPSILON`.
pub const QUAT_SETTLE_EPSILON: f32 = 1e-6;

/// A value and the value it is heading towards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion<T> {
    /// Value the camera currently shows.
    pub current: T,
    /// Value the scheduler is converging on.
    pub target: T,
}

impl<T: Copy> Motion<T> {
    /// A settled motion resting at `value`.
    pub fn at(value: T) -> Self {
        Self {
            current: value,
            target: value,
        }
    }

    /// Drop any pending target by collapsing it onto `current`.
    pub fn reset_target(&mut self) {
        self.target = self.current;
    }

    /// Overwrite both ends with `value`.
    pub fn snap(&mut self, value: T) {
        *self = Self::at(value);
    }
}

impl Motion<Vec3> {
    /// Whether every component of `current` is within tolerance of `target`.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.current.abs_diff_eq(self.target, SETTLE_EPSILON)
    }
}

impl Motion<f32> {
    /// Whether `current` is within tolerance of `target`.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        (self.current - self.target).abs() <= SETTLE_EPSILON
    }
}

impl Motion<Quat> {
    /// Whether the two orientations agree. Antipodal quaternions are equal.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.current.dot(self.target).abs() >= 1.0 - QUAT_SETTLE_EPSILON
    }
}

/// Which kind of interpolation is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionMode {
    /// Nothing to do; every `current` equals its `target`.
    #[default]
    Idle,
    /// Position and pivot glide linearly (pan, dolly, framing, zoom).
    Translating,
    /// Orientation slerps and position orbits the pivot rigidly.
    Orbiting,
}

/// Everything the controller owns about the camera's motion.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionState {
    /// Eye position.
    pub position: Motion<Vec3>,
    /// Point orbits are performed around.
    pub pivot: Motion<Vec3>,
    /// Orbit orientation.
    pub orientation: Motion<Quat>,
    /// Orthographic half-height. Unused in perspective.
    pub zoom: Motion<f32>,
    /// Active interpolation kind.
    pub mode: MotionMode,
    /// Whether the zoom component has converged.
    pub zoom_settled: bool,
    /// Accumulated orbit yaw (x) and pitch (y) in degrees.
    pub heading: Vec2,
}

impl MotionState {
    /// Seed a settled state from the camera's current pose.
    ///
    /// The pivot starts `pivot_distance` ahead of the camera.
    #[must_use]
    pub fn from_camera(camera: &Camera, pivot_distance: f32) -> Self {
        let zoom = match camera.projection {
            Projection::Orthographic { half_height } => half_height,
            Projection::Perspective { .. } => 0.0,
        };
        Self {
            position: Motion::at(camera.position),
            pivot: Motion::at(camera.position + camera.forward() * pivot_distance),
            orientation: Motion::at(camera.orientation),
            zoom: Motion::at(zoom),
            mode: MotionMode::Idle,
            zoom_settled: true,
            heading: Vec2::ZERO,
        }
    }

    /// Whether any interpolation is in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.mode != MotionMode::Idle
    }

    /// Whether the active motion is an orbit.
    #[must_use]
    pub fn is_orbiting(&self) -> bool {
        self.mode == MotionMode::Orbiting
    }

    /// Collapse every target onto its current value.
    pub fn reset_targets(&mut self) {
        self.position.reset_target();
        self.pivot.reset_target();
        self.orientation.reset_target();
        self.zoom.reset_target();
    }

    /// Settle in place: drop residual targets, wrap heading, go idle.
    pub fn halt(&mut self) {
        self.reset_targets();
        self.heading.x %= 360.0;
        self.heading.y %= 360.0;
        self.zoom_settled = true;
        self.mode = MotionMode::Idle;
    }
}
