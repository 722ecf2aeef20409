//! Commands that retarget the motion state. None of them touch the camera
//! pose directly; the next [`update`](CameraController::update) does.

use glam::{Quat, Vec2, Vec3};

use super::controller::CameraController;
use super::core::Projection;
use super::motion::MotionMode;

/// Extra room around framed points in perspective.
const FRAME_PADDING: f32 = 1.5;

/// Orthographic half-height per unit of framed radius.
const FRAME_ORTHO_PADDING: f32 = 1.2;

impl CameraController {
    /// Drag the scene by a y-up input delta.
    ///
    /// The eye and the pivot move together, so the orbit radius is kept for
    /// the next rotation. Cancels any orbit in flight.
    pub fn pan(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.cancel_other_motion(MotionMode::Translating);

        let displacement = self.pan_displacement(delta);
        self.state.position.target += displacement;
        self.state.pivot.target += displacement;
        self.state.orientation.reset_target();
        self.arm(MotionMode::Translating);
    }

    /// World displacement for a drag: a full-viewport drag spans the
    /// visible extent at the pivot, opposite to the device motion.
    fn pan_displacement(&self, delta: Vec2) -> Vec3 {
        let distance = self.state.pivot.current.distance(self.state.position.current);
        let half_height = self.camera.visible_half_height(distance);
        let half_res = self.camera.half_resolution();

        let scale = Vec2::new(
            half_height * self.camera.aspect() / half_res.x,
            half_height / half_res.y,
        );
        let drag = scale * -delta;
        self.camera.right() * drag.x + self.camera.up() * drag.y
    }

    /// Orbit the pivot by a y-up input delta.
    ///
    /// Horizontal drag yaws about world up, vertical drag pitches about the
    /// camera's right axis; dragging up tilts the view up. Successive calls
    /// before the orbit settles accumulate on the target.
    pub fn rotate(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        if self.state.mode != MotionMode::Orbiting {
            self.cancel_other_motion(MotionMode::Orbiting);
            // A translation may have moved the camera a frame ago.
            self.state.position.snap(self.camera.position);
            self.state.orientation.snap(self.camera.orientation);
        }

        let yaw_deg = delta.x * self.options.rotate_horizontal_speed;
        let pitch_deg = -delta.y * self.options.rotate_vertical_speed;
        let yaw = Quat::from_rotation_y(yaw_deg.to_radians());
        let pitch = Quat::from_rotation_x(pitch_deg.to_radians());

        let orientation = &mut self.state.orientation;
        orientation.target = (yaw * orientation.target * pitch).normalize();
        self.state.pivot.reset_target();
        self.state.heading += Vec2::new(yaw_deg, pitch_deg);
        self.arm(MotionMode::Orbiting);
    }

    /// Zoom by a signed scroll magnitude (positive = out).
    ///
    /// Orthographic: scale the half-height by `1 + value * zoom_speed`,
    /// clamped. Perspective: dolly along the view axis by
    /// `value * zoom_speed` world units. An orbit in flight keeps orbiting.
    pub fn zoom(&mut self, value: f32) {
        if value == 0.0 {
            return;
        }
        let step = value * self.options.zoom_speed;

        match self.camera.projection {
            Projection::Orthographic { .. } => {
                let current = self.state.zoom.current;
                self.state.zoom.target =
                    self.options.clamp_zoom(current + step * current);
                self.state.zoom_settled = false;
            }
            Projection::Perspective { .. } => {
                self.state.position.target -= self.camera.forward() * step;
                self.state.zoom_settled = true;
            }
        }

        if self.state.mode == MotionMode::Idle {
            self.arm(MotionMode::Translating);
        }
    }

    /// Glide so `points` are in view, centred on their centroid. The view
    /// direction is kept. Does nothing for an empty slice.
    pub fn frame(&mut self, points: &[Vec3]) {
        if points.is_empty() {
            return;
        }
        let centroid = points.iter().copied().sum::<Vec3>() / points.len() as f32;
        let radius = points
            .iter()
            .map(|p| p.distance(centroid))
            .fold(0.0f32, f32::max);

        self.cancel_other_motion(MotionMode::Translating);
        self.state.orientation.reset_target();

        let mut distance = self.state.pivot.current.distance(self.state.position.current);
        if radius > f32::EPSILON {
            match self.camera.projection {
                Projection::Perspective { fovy } => {
                    let fit = radius / (fovy.to_radians() * 0.5).tan();
                    distance = fit * FRAME_PADDING;
                }
                Projection::Orthographic { .. } => {
                    self.state.zoom.target =
                        self.options.clamp_zoom(radius * FRAME_ORTHO_PADDING);
                    self.state.zoom_settled = false;
                }
            }
        }

        self.state.pivot.target = centroid;
        self.state.position.target = centroid - self.camera.forward() * distance;
        self.arm(MotionMode::Translating);
    }

    fn arm(&mut self, mode: MotionMode) {
        if self.state.mode != mode {
            log::debug!("camera motion armed: {mode:?}");
        }
        self.state.mode = mode;
    }
}
