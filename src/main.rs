//! Interactive harness: opens a window, drives the camera from mouse input
//! and logs the pose each time motion settles. Nothing is rendered.
//!
//! Usage: `orbitcam [options.toml]`, with `RUST_LOG=debug` for motion
//! events. `orbitcam --schema <out.json>` writes the options schema and
//! exits.

use std::path::Path;

use orbitcam::camera::{Camera, CameraController};
use orbitcam::input::{InputEvent, InputProcessor};
use orbitcam::options::Options;
use orbitcam::util::frame_timing::FrameTiming;
use orbitcam::OrbitCamError;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

struct ViewerApp {
    window: Option<Window>,
    controller: CameraController,
    input: InputProcessor,
    timing: FrameTiming,
}

impl ViewerApp {
    fn new(options: Options) -> Self {
        Self {
            window: None,
            controller: CameraController::new(Camera::default(), options.camera),
            input: InputProcessor::with_options(options.input),
            timing: FrameTiming::default(),
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    /// One frame: tick the scheduler and report when motion comes to rest.
    fn redraw(&mut self) {
        let dt = self.timing.tick();
        let was_active = self.controller.is_active();
        self.controller.update(dt);

        if self.controller.is_active() {
            self.request_redraw();
        } else if was_active {
            let pose = self.controller.pose();
            let tilt = self.controller.tilt();
            log::info!(
                "camera at {} looking {} (alpha {:.1}°, beta {:.1}°), pivot {}, {:.0} fps",
                pose.position,
                self.controller.camera.forward(),
                tilt.alpha,
                tilt.beta,
                self.controller.pivot(),
                self.timing.fps()
            );
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attrs = Window::default_attributes().with_title("orbitcam");
        match event_loop.create_window(attrs) {
            Ok(window) => {
                let size = window.inner_size();
                self.controller.camera.resize(size.width, size.height);
                self.window = Some(window);
            }
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                return;
            }
            WindowEvent::Resized(size) => {
                self.controller.camera.resize(size.width, size.height);
                return;
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
                return;
            }
            _ => {}
        }

        let command = InputEvent::from_window_event(&event)
            .and_then(|input| self.input.handle_event(input));
        if let Some(command) = command {
            // Idle frames are not ticked; do not count them into the first
            // step of new motion.
            if !self.controller.is_active() {
                self.timing.reset();
            }
            self.controller.execute(command);
            self.request_redraw();
        }
    }
}

fn load_options() -> Result<Options, OrbitCamError> {
    match std::env::args().nth(1) {
        Some(path) => {
            let options = Options::load(Path::new(&path))?;
            log::info!("Loaded options from '{path}'");
            Ok(options)
        }
        None => Ok(Options::default()),
    }
}

fn run() -> Result<(), OrbitCamError> {
    let mut args = std::env::args().skip(1);
    if args.next().as_deref() == Some("--schema") {
        let path = args.next().unwrap_or_else(|| "options.schema.json".to_owned());
        Options::save_schema(Path::new(&path))?;
        log::info!("Wrote options schema to '{path}'");
        return Ok(());
    }

    let options = load_options()?;
    let mut app = ViewerApp::new(options);

    let event_loop =
        EventLoop::new().map_err(|e| OrbitCamError::Viewer(e.to_string()))?;
    event_loop.set_control_flow(ControlFlow::Wait);
    event_loop
        .run_app(&mut app)
        .map_err(|e| OrbitCamError::Viewer(e.to_string()))
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
