// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Smoothed orbit/pan/zoom camera control for real-time 3D viewers.
//!
//! Pointer drags and scrolls become eased camera motion around a movable
//! pivot. Input only retargets; a once-per-frame tick moves the camera.
//!
//! # Key entry points
//!
//! - [`camera::CameraController`] - owns the camera and its motion state
//! - [`input::InputProcessor`] - turns raw pointer events into
//!   [`CameraCommand`]s
//! - [`math::tilt_angles`] - orientation to `(alpha, beta)` tilt pair
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Frame order
//!
//! All input events for a frame are turned into commands and executed
//! before the frame's single [`camera::CameraController::update`], so a
//! frame never sees half-applied input. Everything runs on one thread.
//!
//! ```
//! use glam::Vec2;
//! use orbitcam::camera::{Camera, CameraController};
//! use orbitcam::input::{InputEvent, InputProcessor, MouseButton};
//! use orbitcam::options::Options;
//!
//! let options = Options::default();
//! let mut input = InputProcessor::with_options(options.input);
//! let mut controller = CameraController::new(Camera::default(), options.camera);
//!
//! let drag = InputEvent::Drag {
//!     button: MouseButton::Right,
//!     delta: Vec2::new(20.0, 0.0),
//! };
//! if let Some(cmd) = input.handle_event(drag) {
//!     controller.execute(cmd);
//! }
//! controller.update(1.0 / 60.0);
//! assert!(controller.is_orbiting());
//! ```

pub mod camera;
pub mod command;
pub mod error;
pub mod input;
pub mod math;
pub mod options;
pub mod util;

pub use command::CameraCommand;
pub use error::OrbitCamError;
