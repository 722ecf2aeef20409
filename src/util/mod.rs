//! Shared utilities around the camera core.
//!
//! Helpers for frame timing and unit conversion.

/// Per-tick delta time and smoothed FPS.
pub mod frame_timing;
/// Length conversion and range remapping.
pub mod units;
