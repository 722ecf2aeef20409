//! Converts raw platform events into camera commands.
//!
//! The `InputProcessor` owns all transient input state (held button,
//! cursor tracking, drag length) and the button bindings. It is the only
//! thing that sits between raw window events and
//! [`CameraController::execute`](crate::camera::CameraController::execute).

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use super::mouse::DragState;
use crate::command::CameraCommand;
use crate::options::InputOptions;

/// Converts raw window events into [`CameraCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     controller.execute(cmd);
/// }
/// // Once per frame, after all events:
/// controller.update(dt);
/// ```
#[derive(Debug, Default)]
pub struct InputProcessor {
    /// Held button and drag accounting.
    state: DragState,
    /// Button bindings and click threshold.
    options: InputOptions,
}

impl InputProcessor {
    /// Create a new processor with default bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom bindings.
    #[must_use]
    pub fn with_options(options: InputOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Current bindings.
    #[must_use]
    pub fn options(&self) -> &InputOptions {
        &self.options
    }

    /// Replace the bindings. Transient drag state is kept.
    pub fn set_options(&mut self, options: InputOptions) {
        self.options = options;
    }

    /// Button currently held, `MouseButton::None` if none.
    #[must_use]
    pub fn held_button(&self) -> MouseButton {
        self.state.held
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<CameraCommand> {
        match event {
            InputEvent::Press { button } => {
                self.state.press(button);
                None
            }
            InputEvent::Release { button } => self.handle_release(button),
            InputEvent::Drag { button, delta } => self.handle_drag(button, delta),
            InputEvent::CursorMoved { x, y } => {
                let delta = self.state.move_cursor(Vec2::new(x, y));
                self.handle_drag(self.state.held, delta)
            }
            InputEvent::Scroll { value } => {
                let value = if self.options.invert_scroll {
                    -value
                } else {
                    value
                };
                Some(CameraCommand::Zoom { value })
            }
        }
    }

    /// Route a drag to the gesture bound to `button`.
    fn handle_drag(
        &mut self,
        button: MouseButton,
        delta: Vec2,
    ) -> Option<CameraCommand> {
        if button == MouseButton::None || delta == Vec2::ZERO {
            return None;
        }
        self.state.drag(delta);

        if button == self.options.pan_button {
            Some(CameraCommand::Pan { delta })
        } else if button == self.options.rotate_button {
            Some(CameraCommand::Rotate { delta })
        } else {
            None
        }
    }

    /// A release of the select button that barely moved is a click.
    fn handle_release(&mut self, button: MouseButton) -> Option<CameraCommand> {
        let travelled = self.state.release(button)?;
        if button != self.options.select_button
            || travelled >= self.options.click_drag_threshold
        {
            return None;
        }
        Some(CameraCommand::Select {
            cursor: self.state.cursor.unwrap_or_default(),
        })
    }
}
