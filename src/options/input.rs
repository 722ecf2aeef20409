use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::MouseButton;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// Gesture bindings and click detection.
pub struct InputOptions {
    /// Cumulative drag (pixels) below which a release still counts as a
    /// click.
    #[schemars(title = "Click Threshold", range(min = 0.0, max = 20.0), extend("step" = 1.0))]
    pub click_drag_threshold: f32,
    /// Button whose drag pans.
    #[schemars(skip)]
    pub pan_button: MouseButton,
    /// Button whose drag orbits.
    #[schemars(skip)]
    pub rotate_button: MouseButton,
    /// Button whose click selects.
    #[schemars(skip)]
    pub select_button: MouseButton,
    /// Flip the scroll direction.
    #[schemars(title = "Invert Scroll")]
    pub invert_scroll: bool,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            click_drag_threshold: 4.0,
            pan_button: MouseButton::Middle,
            rotate_button: MouseButton::Right,
            select_button: MouseButton::Left,
            invert_scroll: false,
        }
    }
}
