//! Per-frame smoothing step.

use super::controller::CameraController;
use super::core::Projection;
use super::motion::MotionMode;

impl CameraController {
    /// Advance in-flight motion by `dt` seconds and write the resulting
    /// pose back to [`camera`](Self::camera).
    ///
    /// Call once per frame after that frame's commands. Does nothing while
    /// idle. Settles to idle once every tracked value is within tolerance of
    /// its target.
    pub fn update(&mut self, dt: f32) {
        let rate = self.options.smoothing_factor(dt);
        match self.state.mode {
            MotionMode::Idle => return,
            MotionMode::Orbiting => self.orbit_step(rate),
            MotionMode::Translating => self.translate_step(rate),
        }
        self.zoom_step(rate);
        self.apply_to_camera();

        log::trace!(
            "camera tick: mode={:?} position={} rate={rate}",
            self.state.mode,
            self.state.position.current
        );

        if self.is_settled() {
            log::debug!("camera motion settled ({:?})", self.state.mode);
            self.state.halt();
        }
    }

    /// Slerp the orientation and carry the eye rigidly around the pivot by
    /// the same incremental rotation.
    fn orbit_step(&mut self, rate: f32) {
        let state = &mut self.state;
        let previous = state.orientation.current;
        state.orientation.current = previous
            .slerp(state.orientation.target, rate)
            .normalize();

        let step = state.orientation.current * previous.inverse();
        let arm = state.position.current - state.pivot.current;
        state.position.current = state.pivot.current + step * arm;
    }

    fn translate_step(&mut self, rate: f32) {
        let state = &mut self.state;
        state.position.current = state.position.current.lerp(state.position.target, rate);
        state.pivot.current = state.pivot.current.lerp(state.pivot.target, rate);
    }

    fn zoom_step(&mut self, rate: f32) {
        if !self.camera.projection.is_orthographic() {
            self.state.zoom_settled = true;
            return;
        }
        let zoom = &mut self.state.zoom;
        zoom.current += (zoom.target - zoom.current) * rate;
        self.state.zoom_settled = zoom.is_settled();
    }

    fn is_settled(&self) -> bool {
        let state = &self.state;
        let pose_settled = match state.mode {
            MotionMode::Idle => true,
            MotionMode::Orbiting => state.orientation.is_settled(),
            MotionMode::Translating => {
                state.position.is_settled() && state.pivot.is_settled()
            }
        };
        pose_settled && state.zoom_settled
    }

    fn apply_to_camera(&mut self) {
        let state = &self.state;
        self.camera.position = state.position.current;
        if state.mode == MotionMode::Orbiting {
            self.camera.orientation = state.orientation.current;
        }
        if let Projection::Orthographic { half_height } = &mut self.camera.projection {
            *half_height = state.zoom.current;
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::{UVec2, Vec2, Vec3};

    use crate::camera::core::Camera;
    use crate::camera::motion::MotionMode;
    use crate::camera::{CameraController, Projection};
    use crate::options::{CameraOptions, InterpolationPolicy};

    const DT: f32 = 1.0 / 60.0;

    fn settle(controller: &mut CameraController) -> usize {
        let mut ticks = 0;
        while controller.is_active() {
            controller.update(DT);
            ticks += 1;
            assert!(ticks < 10_000, "motion never settled");
        }
        ticks
    }

    #[test]
    fn idle_update_is_a_no_op() {
        let mut controller = CameraController::new(Camera::default(), CameraOptions::default());
        let before = controller.camera.clone();
        controller.update(DT);
        assert_eq!(controller.camera, before);
    }

    #[test]
    fn rotate_converges_on_requested_orientation() {
        let mut controller = CameraController::new(Camera::default(), CameraOptions::default());
        controller.rotate(Vec2::new(120.0, -40.0));
        let requested = controller.state().orientation.target;

        let _ = settle(&mut controller);

        let state = controller.state();
        assert!(!controller.is_active());
        assert!(state.orientation.current.dot(requested).abs() > 1.0 - 1e-5);
        assert_eq!(controller.camera.orientation, state.orientation.current);
    }

    #[test]
    fn orbit_keeps_radius_around_pivot() {
        let pivot = Vec3::new(3.0, 1.0, 2.0);
        let mut controller = CameraController::new(Camera::default(), CameraOptions::default())
            .with_pivot(pivot);
        let radius = controller.camera.position.distance(pivot);

        controller.rotate(Vec2::new(200.0, 60.0));
        while controller.is_active() {
            controller.update(DT);
            let now = controller.camera.position.distance(pivot);
            assert!((now - radius).abs() < 1e-3);
        }
        assert_eq!(controller.pivot(), pivot);
    }

    #[test]
    fn orbit_keeps_looking_at_pivot() {
        let mut controller = CameraController::new(Camera::default(), CameraOptions::default());
        controller.rotate(Vec2::new(-90.0, 30.0));
        let _ = settle(&mut controller);

        let to_pivot = (controller.pivot() - controller.camera.position).normalize();
        assert!(to_pivot.abs_diff_eq(controller.camera.forward(), 1e-3));
    }

    #[test]
    fn pan_glides_then_settles_on_target() {
        let camera = Camera {
            projection: Projection::Orthographic { half_height: 5.0 },
            viewport: UVec2::new(200, 200),
            ..Camera::default()
        };
        let mut controller = CameraController::new(camera, CameraOptions::default());
        let start = controller.camera.position;
        controller.pan(Vec2::new(10.0, 0.0));
        let target = controller.state().position.target;

        controller.update(DT);
        let first = controller.camera.position;
        assert!(first.distance(start) > 0.0);
        assert!(first.distance(target) < start.distance(target));

        let _ = settle(&mut controller);
        assert!(controller.camera.position.abs_diff_eq(target, 1e-3));
    }

    #[test]
    fn idle_state_has_no_residual_drift() {
        let mut controller = CameraController::new(Camera::default(), CameraOptions::default());
        controller.pan(Vec2::new(30.0, -12.0));
        controller.zoom(-1.0);
        let _ = settle(&mut controller);

        let state = controller.state();
        assert_eq!(state.mode, MotionMode::Idle);
        assert_eq!(state.position.current, state.position.target);
        assert_eq!(state.pivot.current, state.pivot.target);
        assert_eq!(state.orientation.current, state.orientation.target);
        assert_eq!(state.zoom.current, state.zoom.target);
    }

    #[test]
    fn orthographic_zoom_reaches_camera() {
        let camera = Camera {
            projection: Projection::Orthographic { half_height: 10.0 },
            ..Camera::default()
        };
        let mut controller = CameraController::new(camera, CameraOptions::default());
        controller.zoom(1.0);
        let _ = settle(&mut controller);

        assert!(matches!(
            controller.camera.projection,
            Projection::Orthographic { half_height } if (half_height - 11.0).abs() < 1e-3
        ));
    }

    #[test]
    fn zoom_during_orbit_waits_for_both() {
        let camera = Camera {
            projection: Projection::Orthographic { half_height: 10.0 },
            ..Camera::default()
        };
        let options = CameraOptions {
            smoothing_speed: 5.0,
            ..CameraOptions::default()
        };
        let mut controller = CameraController::new(camera, options);
        controller.rotate(Vec2::new(4.0, 0.0));
        controller.zoom(5.0);

        let _ = settle(&mut controller);
        assert!((controller.state().zoom.current - 15.0).abs() < 1e-3);
    }

    #[test]
    fn heading_wraps_after_many_orbits() {
        let mut controller = CameraController::new(Camera::default(), CameraOptions::default());
        // 4 * 400 * 0.25 = 400 degrees of yaw.
        for _ in 0..4 {
            controller.rotate(Vec2::new(400.0, 0.0));
        }
        assert_eq!(controller.heading().x, 400.0);
        let _ = settle(&mut controller);
        assert!((controller.heading().x - 40.0).abs() < 1e-3);
    }

    #[test]
    fn clamped_policy_never_overshoots() {
        let options = CameraOptions {
            smoothing_speed: 600.0,
            interpolation: InterpolationPolicy::Clamped,
            ..CameraOptions::default()
        };
        let mut controller = CameraController::new(Camera::default(), options);
        controller.pan(Vec2::new(50.0, 0.0));
        let target = controller.state().position.target;

        controller.update(DT);
        assert!(controller.camera.position.abs_diff_eq(target, 1e-5));
        assert!(!controller.is_active());
    }

    #[test]
    fn unclamped_policy_overshoots_on_long_frames() {
        let options = CameraOptions {
            smoothing_speed: 90.0,
            ..CameraOptions::default()
        };
        let mut controller = CameraController::new(Camera::default(), options);
        let start = controller.camera.position;
        controller.pan(Vec2::new(50.0, 0.0));
        let target = controller.state().position.target;

        controller.update(DT);
        let travelled = controller.camera.position.distance(start);
        assert!(travelled > target.distance(start));
    }

    #[test]
    fn orientation_stays_unit_length() {
        let mut controller = CameraController::new(Camera::default(), CameraOptions::default());
        for i in 0..50 {
            controller.rotate(Vec2::new(7.0, if i % 2 == 0 { 3.0 } else { -3.0 }));
            controller.update(DT);
            let length = controller.state().orientation.current.length();
            assert!((length - 1.0).abs() < 1e-5);
        }
        let _ = settle(&mut controller);
        assert!(controller.heading().y.abs() < 1e-3);
    }
}
