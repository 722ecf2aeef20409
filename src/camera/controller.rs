use glam::{Vec2, Vec3};

use super::core::{Camera, Pose};
use super::motion::{Motion, MotionMode, MotionState};
use crate::command::CameraCommand;
use crate::math::tilt::{tilt_angles, TiltAngles};
use crate::options::CameraOptions;

/// Pivot distance used when none is given.
pub const DEFAULT_PIVOT_DISTANCE: f32 = 10.0;

/// Smoothed orbit/pan/zoom controller.
///
/// Commands ([`pan`](Self::pan), [`rotate`](Self::rotate),
/// [`zoom`](Self::zoom), ...) only move targets. [`update`](Self::update)
/// runs once per frame, after that frame's input, and is the only place the
/// camera pose changes.
#[derive(Debug, Clone)]
pub struct CameraController {
    /// The camera being driven. Hosts read its pose after each update.
    pub camera: Camera,
    pub(super) state: MotionState,
    pub(super) options: CameraOptions,
}

impl CameraController {
    /// Take over `camera` with the pivot [`DEFAULT_PIVOT_DISTANCE`] ahead.
    #[must_use]
    pub fn new(camera: Camera, options: CameraOptions) -> Self {
        let state = MotionState::from_camera(&camera, DEFAULT_PIVOT_DISTANCE);
        Self {
            camera,
            state,
            options,
        }
    }

    /// Orbit around `pivot` instead of the default point.
    #[must_use]
    pub fn with_pivot(mut self, pivot: Vec3) -> Self {
        self.state.pivot = Motion::at(pivot);
        self
    }

    /// Current tunables.
    #[must_use]
    pub fn options(&self) -> &CameraOptions {
        &self.options
    }

    /// Swap tunables. In-flight motion continues under the new values.
    pub fn set_options(&mut self, options: CameraOptions) {
        self.options = options;
    }

    /// Read-only view of the motion state.
    #[must_use]
    pub fn state(&self) -> &MotionState {
        &self.state
    }

    /// Active interpolation kind.
    #[must_use]
    pub fn mode(&self) -> MotionMode {
        self.state.mode
    }

    /// Whether any interpolation is in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Whether the active motion is an orbit.
    #[must_use]
    pub fn is_orbiting(&self) -> bool {
        self.state.is_orbiting()
    }

    /// Point orbits are currently performed around.
    #[must_use]
    pub fn pivot(&self) -> Vec3 {
        self.state.pivot.current
    }

    /// Camera pose as of the last update.
    #[must_use]
    pub fn pose(&self) -> Pose {
        self.camera.pose()
    }

    /// Accumulated orbit yaw (x) and pitch (y) in degrees.
    #[must_use]
    pub fn heading(&self) -> Vec2 {
        self.state.heading
    }

    /// Tilt angles of the camera's current orientation.
    #[must_use]
    pub fn tilt(&self) -> TiltAngles {
        tilt_angles(self.camera.orientation)
    }

    /// Re-seed motion state after the host moved the camera directly.
    ///
    /// Cancels any motion. The pivot keeps its distance from the eye.
    pub fn sync_from_camera(&mut self) {
        let distance = self.state.pivot.current.distance(self.state.position.current);
        let heading = self.state.heading;
        self.state = MotionState::from_camera(&self.camera, distance);
        self.state.heading = heading;
        log::debug!("camera motion re-seeded from host pose");
    }

    /// Dispatch a command.
    pub fn execute(&mut self, command: CameraCommand) {
        match command {
            CameraCommand::Pan { delta } => self.pan(delta),
            CameraCommand::Rotate { delta } => self.rotate(delta),
            CameraCommand::Zoom { value } => self.zoom(value),
            CameraCommand::Frame { points } => self.frame(&points),
            CameraCommand::Stop => self.stop(),
            CameraCommand::Select { cursor } => {
                log::debug!("select at {cursor} left to the host");
            }
        }
    }

    /// Drop every pending target and go idle where the camera stands.
    pub fn stop(&mut self) {
        if self.state.is_active() {
            log::debug!("camera motion stopped ({:?})", self.state.mode);
        }
        self.state.halt();
    }

    /// Switching to a different motion kind discards the old kind's
    /// targets so it cannot resume later.
    pub(super) fn cancel_other_motion(&mut self, next: MotionMode) {
        let mode = self.state.mode;
        if mode == MotionMode::Idle || mode == next {
            return;
        }
        log::debug!("{mode:?} cancelled by {next:?}");
        self.state.position.reset_target();
        self.state.pivot.reset_target();
        self.state.orientation.reset_target();
    }
}
