//! The trackball's complete interactive vocabulary.
//!
//! Every navigation operation, whether triggered by a mouse gesture, a key
//! press, or a programmatic call, is represented as a `NavCommand`.
//! Consumers build commands (usually through
//! [`InputProcessor`](crate::input::InputProcessor)) and pass them to
//! [`Trackball::execute`](crate::camera::trackball::Trackball::execute).

use glam::Vec2;

/// One navigation action. Positions are in screen units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavCommand {
    /// Start a rotation drag.
    BeginRotation {
        /// Pointer position.
        pos: Vec2,
    },
    /// Continue a rotation drag.
    UpdateRotation {
        /// Pointer position.
        pos: Vec2,
    },
    /// Finish a rotation drag.
    EndRotation,
    /// Start a translation drag.
    BeginTranslation {
        /// Pointer position.
        pos: Vec2,
    },
    /// Continue a translation drag.
    UpdateTranslation {
        /// Pointer position.
        pos: Vec2,
    },
    /// Finish a translation drag.
    EndTranslation,
    /// Multiply the zoom factor.
    ZoomIn {
        /// Multiplier.
        factor: f32,
    },
    /// Divide the zoom factor.
    ZoomOut {
        /// Divisor.
        factor: f32,
    },
    /// Replace the zoom factor.
    SetZoom {
        /// New zoom factor.
        value: f32,
    },
    /// The drawable area changed size.
    Resize {
        /// New width in screen units.
        width: f32,
        /// New height in screen units.
        height: f32,
    },
    /// Return to the default pose.
    Reset,
}
