use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrbitCamError;

/// How the per-tick smoothing factor is applied.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationPolicy {
    /// Use `dt * smoothing_speed` as-is. Long frames can overshoot.
    #[default]
    Unclamped,
    /// Clamp the factor to `[0, 1]` so a step never passes its target.
    Clamped,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera motion tunables.
pub struct CameraOptions {
    /// Interpolation rate multiplier (per second).
    #[schemars(title = "Smoothing Speed", range(min = 1.0, max = 30.0), extend("step" = 0.5))]
    pub smoothing_speed: f32,
    /// Scroll-to-zoom scale.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub zoom_speed: f32,
    /// Smallest orthographic half-height.
    #[schemars(skip)]
    pub zoom_clamp_min: f32,
    /// Largest orthographic half-height.
    #[schemars(skip)]
    pub zoom_clamp_max: f32,
    /// Yaw degrees per input unit of horizontal drag.
    #[schemars(title = "Horizontal Rotate Speed", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub rotate_horizontal_speed: f32,
    /// Pitch degrees per input unit of vertical drag.
    #[schemars(title = "Vertical Rotate Speed", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub rotate_vertical_speed: f32,
    /// Whether the smoothing factor may exceed one.
    #[schemars(skip)]
    pub interpolation: InterpolationPolicy,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            smoothing_speed: 10.0,
            zoom_speed: 0.1,
            zoom_clamp_min: 0.01,
            zoom_clamp_max: 1000.0,
            rotate_horizontal_speed: 0.25,
            rotate_vertical_speed: 0.25,
            interpolation: InterpolationPolicy::Unclamped,
        }
    }
}

impl CameraOptions {
    /// Interpolation weight for a tick of `dt` seconds.
    #[must_use]
    pub fn smoothing_factor(&self, dt: f32) -> f32 {
        let rate = dt * self.smoothing_speed;
        match self.interpolation {
            InterpolationPolicy::Unclamped => rate,
            InterpolationPolicy::Clamped => rate.clamp(0.0, 1.0),
        }
    }

    /// Clamp an orthographic half-height into the configured bounds.
    ///
    /// Never panics. With inverted bounds `zoom_clamp_max` wins.
    #[must_use]
    pub fn clamp_zoom(&self, half_height: f32) -> f32 {
        half_height.max(self.zoom_clamp_min).min(self.zoom_clamp_max)
    }

    /// Check that the zoom bounds are finite and ordered.
    ///
    /// # Errors
    ///
    /// [`OrbitCamError::OptionsParse`] naming the offending range.
    pub fn validate(&self) -> Result<(), OrbitCamError> {
        let (min, max) = (self.zoom_clamp_min, self.zoom_clamp_max);
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(OrbitCamError::OptionsParse(format!(
                "invalid zoom clamp range {min}..{max}"
            )));
        }
        Ok(())
    }
}
