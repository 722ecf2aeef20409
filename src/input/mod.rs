//! Input handling: event types, drag tracking, and the input processor
//! that converts raw window events into camera commands.

/// Platform-agnostic input events.
pub mod event;
/// Held-button and drag-length tracking.
pub(crate) mod mouse;
/// Converts raw events into camera commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::InputProcessor;
