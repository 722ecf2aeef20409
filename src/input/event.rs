use glam::Vec2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`CameraCommand`](crate::CameraCommand) values.
///
/// Drag deltas use a y-up convention: positive `x` means the device moved
/// right, positive `y` means it moved up.
///
/// # Example
///
/// ```ignore
/// if let Some(cmd) = input_processor.handle_event(InputEvent::Drag {
///     button: MouseButton::Right,
///     delta: Vec2::new(12.0, 0.0),
/// }) {
///     controller.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Button went down.
    Press {
        /// Which button changed.
        button: MouseButton,
    },
    /// Button went up.
    Release {
        /// Which button changed.
        button: MouseButton,
    },
    /// Relative pointer motion with a button held.
    Drag {
        /// Held button (`None` for a hover move).
        button: MouseButton,
        /// Motion in input units, y up.
        delta: Vec2,
    },
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels, y down.
        y: f32,
    },
    /// Scroll wheel.
    Scroll {
        /// Signed scroll magnitude (positive = zoom out).
        value: f32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Middle mouse button (wheel click).
    Middle,
    /// Secondary (right) mouse button.
    Right,
    /// No button / unbound.
    #[default]
    None,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::None,
        }
    }
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Pixels of touchpad scroll per wheel notch.
    const PIXELS_PER_LINE: f32 = 100.0;

    /// Translate a winit window event, if it is one the camera cares about.
    #[must_use]
    pub fn from_window_event(event: &winit::event::WindowEvent) -> Option<Self> {
        use winit::event::{ElementState, MouseScrollDelta, WindowEvent};

        match event {
            WindowEvent::MouseInput { state, button, .. } => {
                let button = MouseButton::from(*button);
                Some(match state {
                    ElementState::Pressed => Self::Press { button },
                    ElementState::Released => Self::Release { button },
                })
            }
            WindowEvent::CursorMoved { position, .. } => {
                Some(Self::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                })
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let notches = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => {
                        pos.y as f32 / Self::PIXELS_PER_LINE
                    }
                };
                // Wheel away from the user zooms in.
                Some(Self::Scroll { value: -notches })
            }
            _ => None,
        }
    }
}
