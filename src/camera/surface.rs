//! Sphere/hyperboloid surface used to lift 2D pointer positions into 3D.
//!
//! Inside `x² + y² ≤ r²/2` the point sits on the sphere of radius `r`;
//! outside it sits on the hyperbolic sheet `z = r² / (2·|p|)`. The two
//! surfaces meet with matching height on the boundary circle, so the
//! mapping is continuous over the whole plane.

use glam::{Vec2, Vec3};

/// Default trackball radius in normalized screen units.
pub const DEFAULT_RADIUS: f32 = 0.8;

/// Lift a normalized screen position onto the trackball surface.
///
/// The result is not normalized.
#[must_use]
pub fn surface_point(pos: Vec2, radius: f32) -> Vec3 {
    let r2 = radius * radius;
    let d2 = pos.length_squared();
    let z = if d2 <= r2 / 2.0 {
        (r2 - d2).sqrt()
    } else {
        r2 / (2.0 * d2.sqrt())
    };
    pos.extend(z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_hits_sphere_apex() {
        let p = surface_point(Vec2::ZERO, DEFAULT_RADIUS);
        assert_eq!(p, Vec3::new(0.0, 0.0, 0.8));
    }

    #[test]
    fn inside_point_lies_on_sphere() {
        let p = surface_point(Vec2::new(0.3, -0.2), DEFAULT_RADIUS);
        assert!((p.length() - DEFAULT_RADIUS).abs() < 1e-6);
    }

    #[test]
    fn far_point_lies_on_hyperbola() {
        let p = surface_point(Vec2::new(3.0, 4.0), DEFAULT_RADIUS);
        assert!((p.z - 0.64 / 10.0).abs() < 1e-6);
        assert!(p.z > 0.0);
    }

    #[test]
    fn continuous_across_boundary() {
        let r = DEFAULT_RADIUS;
        let boundary = (r * r / 2.0).sqrt();
        let dir = Vec2::new(0.6, 0.8);
        let eps = 1e-4;
        let inside = surface_point(dir * (boundary - eps), r);
        let outside = surface_point(dir * (boundary + eps), r);
        assert!(inside.length_squared() <= r * r + 1e-6);
        assert!((inside.z - outside.z).abs() < 1e-3);

        // Both branches agree exactly at the boundary: z = r/√2.
        let expected = r / 2f32.sqrt();
        assert!((surface_point(dir * boundary, r).z - expected).abs() < 1e-5);
    }

    #[test]
    fn keeps_input_xy() {
        let pos = Vec2::new(-0.9, 0.7);
        assert_eq!(surface_point(pos, DEFAULT_RADIUS).truncate(), pos);
    }
}
