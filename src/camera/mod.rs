//! Camera controllers for 3D scene navigation.
//!
//! Provides a trackball controller (rotate, pan, zoom by pointer drags) and
//! a first-person fly camera, both driving any [`CameraBase`]
//! implementation.

/// Core camera trait, plain camera, viewport, and projection helpers.
pub mod core;
/// First-person fly camera.
pub mod fly;
/// Gesture state and rotation/pan accumulators.
pub mod gesture;
/// GPU-facing trackball indicator data.
pub mod indicator;
/// Sphere/hyperboloid surface projection.
pub mod surface;
/// Trackball controller.
pub mod trackball;

pub use self::core::{
    create_orthographic_matrix, create_perspective_matrix, Camera, CameraBase,
    Viewport,
};
pub use fly::FlyCamera;
pub use gesture::{RotationGesture, TrackballState, TranslationGesture};
pub use indicator::IndicatorUniform;
pub use trackball::Trackball;
