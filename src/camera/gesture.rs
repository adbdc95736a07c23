//! Gesture state and the incremental accumulators behind the trackball.
//!
//! Each gesture class keeps only the last processed sample, so every new
//! pointer position is compared against the previous one rather than the
//! point where the drag started.

use glam::{Quat, Vec2, Vec3};

/// Rotation gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RotationGesture {
    /// No rotation drag in progress.
    #[default]
    Idle,
    /// Dragging; holds the last surface point processed.
    Rotating {
        /// Un-normalized surface point of the previous sample.
        last: Vec3,
    },
}

/// Translation gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TranslationGesture {
    /// No translation drag in progress.
    #[default]
    Idle,
    /// Dragging; holds the last normalized position processed.
    Translating {
        /// Normalized screen position of the previous sample.
        last: Vec2,
    },
}

/// Everything the trackball accumulates from user input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackballState {
    /// Gesture-driven orientation, always unit length.
    pub orientation: Quat,
    /// Pan offset in the rotated camera frame.
    pub translation: Vec3,
    /// Uniform scale applied last.
    pub zoom: f32,
    /// Rotation drag state.
    pub rotation: RotationGesture,
    /// Translation drag state.
    pub panning: TranslationGesture,
}

impl Default for TrackballState {
    fn default() -> Self {
        Self {
            orientation: Quat::IDENTITY,
            translation: Vec3::ZERO,
            zoom: 1.0,
            rotation: RotationGesture::Idle,
            panning: TranslationGesture::Idle,
        }
    }
}

/// Incremental rotation carrying `from` onto `to` about the origin.
///
/// Zero-length inputs and collinear pairs yield the identity rotation; a
/// dot product pushed past 1 by rounding is treated as no rotation.
#[must_use]
pub fn rotation_between(from: Vec3, to: Vec3) -> Quat {
    let from = normalize_or_keep(from);
    let to = normalize_or_keep(to);

    let mut axis = from.cross(to);
    if axis.length() != 0.0 {
        axis = axis.normalize();
    }

    let dot = from.dot(to);
    let angle = if dot <= 1.0 { dot.max(-1.0).acos() } else { 0.0 };

    if axis == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    Quat::from_axis_angle(axis, angle)
}

/// Compose `delta` in front of `orientation` and renormalize.
///
/// A composition that collapses to a zero or non-finite quaternion leaves
/// the orientation untouched.
#[must_use]
pub fn compose_rotation(delta: Quat, orientation: Quat) -> Quat {
    renormalize(delta * orientation).unwrap_or(orientation)
}

/// Pan offset for a normalized screen delta, expressed in the camera frame
/// that `orientation` rotates into view.
#[must_use]
pub fn pan_offset(delta: Vec2, orientation: Quat) -> Vec3 {
    orientation.inverse() * delta.extend(0.0)
}

/// Unit-length copy of `q`, or `None` when it cannot be normalized.
pub(crate) fn renormalize(q: Quat) -> Option<Quat> {
    let len = q.length();
    if len > 0.0 && len.is_finite() {
        Some(q / len)
    } else {
        None
    }
}

fn normalize_or_keep(v: Vec3) -> Vec3 {
    if v.length() > 0.0 {
        v.normalize()
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn rotation_between_axes() {
        let q = rotation_between(Vec3::Z, Vec3::X);
        let (axis, angle) = q.to_axis_angle();
        assert!((axis - Vec3::Y).length() < 1e-5);
        assert!((angle - FRAC_PI_2).abs() < 1e-5);
        assert!(((q * Vec3::Z) - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn rotation_ignores_magnitude() {
        let a = rotation_between(Vec3::new(0.0, 0.0, 0.8), Vec3::new(2.0, 0.0, 0.0));
        let b = rotation_between(Vec3::Z, Vec3::X);
        assert!(a.abs_diff_eq(b, 1e-6));
    }

    #[test]
    fn collinear_and_zero_inputs_are_identity() {
        assert_eq!(rotation_between(Vec3::Z, Vec3::Z * 3.0), Quat::IDENTITY);
        assert_eq!(rotation_between(Vec3::ZERO, Vec3::X), Quat::IDENTITY);
        assert_eq!(rotation_between(Vec3::ZERO, Vec3::ZERO), Quat::IDENTITY);
    }

    #[test]
    fn compose_keeps_unit_norm() {
        let mut q = Quat::IDENTITY;
        for i in 0..500 {
            let t = i as f32 * 0.01;
            let delta = rotation_between(
                Vec3::new(t.sin(), 0.3, 0.8),
                Vec3::new(t.cos(), -0.2, 0.7),
            );
            q = compose_rotation(delta, q);
        }
        assert!((q.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn compose_rejects_degenerate_result() {
        let q = Quat::from_rotation_x(0.3);
        let zero = Quat::from_xyzw(0.0, 0.0, 0.0, 0.0);
        assert_eq!(compose_rotation(zero, q), q);
        let nan = Quat::from_xyzw(f32::NAN, 0.0, 0.0, 1.0);
        assert_eq!(compose_rotation(nan, q), q);
    }

    #[test]
    fn pan_follows_screen_under_rotation() {
        let orientation = Quat::from_rotation_y(FRAC_PI_2);
        let offset = pan_offset(Vec2::new(0.5, 0.0), orientation);
        // Rotating the accumulated offset back into view gives the screen delta.
        assert!(((orientation * offset) - Vec3::new(0.5, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn default_state_is_idle() {
        let state = TrackballState::default();
        assert_eq!(state.rotation, RotationGesture::Idle);
        assert_eq!(state.panning, TranslationGesture::Idle);
        assert_eq!(state.zoom, 1.0);
        assert_eq!(state.orientation, Quat::IDENTITY);
    }
}
