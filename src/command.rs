//! The controller's complete interactive vocabulary.
//!
//! Every camera operation, whether produced by the mouse gesture
//! interpreter or issued programmatically, is represented as a
//! `CameraCommand`. Consumers pass them to
//! [`CameraController::execute`](crate::camera::CameraController::execute).

use glam::{Vec2, Vec3};

/// A single camera operation.
///
/// # Example
///
/// ```ignore
/// controller.execute(CameraCommand::Zoom { value: -1.0 });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum CameraCommand {
    /// Drag the scene by a y-up input delta.
    Pan {
        /// Drag delta in input units.
        delta: Vec2,
    },
    /// Orbit the pivot by a y-up input delta.
    Rotate {
        /// Drag delta in input units.
        delta: Vec2,
    },
    /// Zoom by a signed scroll magnitude (positive = out).
    Zoom {
        /// Scroll magnitude.
        value: f32,
    },
    /// Click without drag. Picking is the host's business; the controller
    /// ignores it.
    Select {
        /// Cursor position at release, physical pixels.
        cursor: Vec2,
    },
    /// Glide to frame a set of world points around their centroid.
    Frame {
        /// Points to keep in view.
        points: Vec<Vec3>,
    },
    /// Cancel any in-flight motion where it stands.
    Stop,
}
