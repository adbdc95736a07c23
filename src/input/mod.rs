//! Input handling: event types, pointer state, and the input processor
//! that converts raw window events into navigation commands.

/// Platform-agnostic input events.
pub mod event;
/// Pointer position and held-button tracking.
pub(crate) mod mouse;
/// Converts raw events into navigation commands.
pub mod processor;

#[cfg(feature = "winit")]
pub use event::pressed_key_name;
pub use event::{InputEvent, MouseButton};
pub use processor::{InputProcessor, KeyBindings, KeyCommandTag};
