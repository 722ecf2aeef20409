use glam::Vec2;

use super::event::MouseButton;

/// Tracks the held button, cursor position and how far the current press
/// has travelled.
#[derive(Debug, Default)]
pub(crate) struct DragState {
    /// Button currently held, `MouseButton::None` when released.
    pub(crate) held: MouseButton,
    /// Last absolute cursor position, if one has been reported.
    pub(crate) cursor: Option<Vec2>,
    /// Total drag length since the last press.
    pub(crate) travelled: f32,
}

impl DragState {
    /// Record a button press and restart drag accounting.
    pub(crate) fn press(&mut self, button: MouseButton) {
        self.held = button;
        self.travelled = 0.0;
    }

    /// Record a release. Returns the drag length of the finished press when
    /// `button` was the one held.
    pub(crate) fn release(&mut self, button: MouseButton) -> Option<f32> {
        if button != self.held {
            return None;
        }
        self.held = MouseButton::None;
        Some(std::mem::take(&mut self.travelled))
    }

    /// Accumulate relative motion.
    pub(crate) fn drag(&mut self, delta: Vec2) {
        self.travelled += delta.length();
    }

    /// Move the cursor to an absolute y-down position and return the y-up
    /// delta from the previous one (zero for the first report).
    pub(crate) fn move_cursor(&mut self, position: Vec2) -> Vec2 {
        let delta = self
            .cursor
            .map_or(Vec2::ZERO, |last| position - last);
        self.cursor = Some(position);
        Vec2::new(delta.x, -delta.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_cursor_report_has_no_delta() {
        let mut state = DragState::default();
        assert_eq!(state.move_cursor(Vec2::new(50.0, 50.0)), Vec2::ZERO);
    }

    #[test]
    fn cursor_delta_is_y_up() {
        let mut state = DragState::default();
        let _ = state.move_cursor(Vec2::new(50.0, 50.0));
        let delta = state.move_cursor(Vec2::new(53.0, 40.0));
        assert_eq!(delta, Vec2::new(3.0, 10.0));
    }

    #[test]
    fn release_reports_travel_for_held_button_only() {
        let mut state = DragState::default();
        state.press(MouseButton::Left);
        state.drag(Vec2::new(3.0, 4.0));

        assert_eq!(state.release(MouseButton::Right), None);
        assert_eq!(state.release(MouseButton::Left), Some(5.0));
        assert_eq!(state.held, MouseButton::None);
        assert_eq!(state.travelled, 0.0);
    }
}
