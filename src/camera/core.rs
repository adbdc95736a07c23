use glam::{Mat4, Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Screen-space rectangle `(x0, y0)`–`(x1, y1)`, origin top-left, Y down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Left edge.
    pub x0: f32,
    /// Top edge.
    pub y0: f32,
    /// Right edge.
    pub x1: f32,
    /// Bottom edge.
    pub y1: f32,
}

impl Viewport {
    /// Create a viewport from its corner coordinates.
    #[must_use]
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Viewport anchored at the origin with the given pixel size.
    #[must_use]
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Horizontal extent.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    /// Vertical extent.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    /// Width over height, or 1.0 when the height is zero.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        let height = self.height();
        if height == 0.0 {
            1.0
        } else {
            self.width() / height
        }
    }

    /// Whether either extent is zero or non-finite.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let (w, h) = (self.width(), self.height());
        w == 0.0 || h == 0.0 || !w.is_finite() || !h.is_finite()
    }

    /// Map a screen position into `[-1, 1]²` with Y pointing up.
    ///
    /// `x' = x / (w/2) - 1`, `y' = 1 - y / (h/2)`. A degenerate viewport
    /// maps every position to the center.
    #[must_use]
    pub fn normalize(&self, pos: Vec2) -> Vec2 {
        if self.is_degenerate() {
            return Vec2::ZERO;
        }
        Vec2::new(
            pos.x / (self.width() / 2.0) - 1.0,
            1.0 - pos.y / (self.height() / 2.0),
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_size(1.0, 1.0)
    }
}

/// The matrix-composition capability the camera controllers drive.
///
/// Every operator post-multiplies the maintained view matrix, so the last
/// operator applied is the first one a transformed point sees.
pub trait CameraBase {
    /// Current view matrix.
    fn view_matrix(&self) -> Mat4;

    /// Replace the view matrix wholesale.
    fn set_view_matrix(&mut self, view: Mat4);

    /// Current projection matrix.
    fn projection_matrix(&self) -> Mat4;

    /// Replace the projection matrix.
    fn set_projection_matrix(&mut self, projection: Mat4);

    /// Current viewport.
    fn viewport(&self) -> Viewport;

    /// Replace the viewport.
    fn set_viewport(&mut self, viewport: Viewport);

    /// Reset the view matrix to identity.
    fn reset_view_matrix(&mut self) {
        self.set_view_matrix(Mat4::IDENTITY);
    }

    /// Compose a rotation into the view matrix.
    fn rotate(&mut self, rotation: Quat) {
        self.set_view_matrix(self.view_matrix() * Mat4::from_quat(rotation));
    }

    /// Compose a translation into the view matrix.
    fn translate(&mut self, translation: Vec3) {
        self.set_view_matrix(
            self.view_matrix() * Mat4::from_translation(translation),
        );
    }

    /// Compose a uniform scale into the view matrix.
    fn scale(&mut self, factor: f32) {
        self.set_view_matrix(
            self.view_matrix() * Mat4::from_scale(Vec3::splat(factor)),
        );
    }
}

/// Build a right-handed perspective matrix with `[0, 1]` depth.
///
/// `fovy` is the vertical field of view in degrees.
#[must_use]
pub fn create_perspective_matrix(
    fovy: f32,
    aspect: f32,
    near: f32,
    far: f32,
) -> Mat4 {
    Mat4::perspective_rh(fovy.to_radians(), aspect, near, far)
}

/// Build a right-handed orthographic matrix with `[0, 1]` depth.
#[must_use]
pub fn create_orthographic_matrix(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> Mat4 {
    Mat4::orthographic_rh(left, right, bottom, top, near, far)
}

/// Plain matrix holder implementing [`CameraBase`].
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    view: Mat4,
    projection: Mat4,
    viewport: Viewport,
}

impl Camera {
    /// Identity view and projection over the given viewport.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            viewport,
        }
    }

    /// Projection × view.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl CameraBase for Camera {
    fn view_matrix(&self) -> Mat4 {
        self.view
    }

    fn set_view_matrix(&mut self, view: Mat4) {
        self.view = view;
    }

    fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    fn set_projection_matrix(&mut self, projection: Mat4) {
        self.projection = projection;
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_maps_corners_and_center() {
        let vp = Viewport::from_size(800.0, 600.0);
        assert_eq!(vp.normalize(Vec2::new(400.0, 300.0)), Vec2::ZERO);
        assert_eq!(vp.normalize(Vec2::new(0.0, 0.0)), Vec2::new(-1.0, 1.0));
        assert_eq!(
            vp.normalize(Vec2::new(800.0, 600.0)),
            Vec2::new(1.0, -1.0)
        );
    }

    #[test]
    fn degenerate_viewport_maps_to_center() {
        let vp = Viewport::from_size(0.0, 600.0);
        assert!(vp.is_degenerate());
        assert_eq!(vp.normalize(Vec2::new(10.0, 10.0)), Vec2::ZERO);
        assert_eq!(vp.aspect_ratio(), 0.0);
    }

    #[test]
    fn operators_post_multiply() {
        let mut camera = Camera::default();
        camera.translate(Vec3::new(0.0, 0.0, -4.0));
        camera.scale(2.0);
        // Scale is applied to the point first, then the translation.
        let p = camera.view_matrix().transform_point3(Vec3::X);
        assert!((p - Vec3::new(2.0, 0.0, -4.0)).length() < 1e-6);

        camera.reset_view_matrix();
        assert_eq!(camera.view_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn rotate_composes_quaternion() {
        let mut camera = Camera::default();
        camera.rotate(Quat::from_rotation_z(std::f32::consts::FRAC_PI_2));
        let p = camera.view_matrix().transform_point3(Vec3::X);
        assert!((p - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn projection_factories_match_glam() {
        let persp = create_perspective_matrix(45.0, 1.5, 0.1, 100.0);
        assert_eq!(
            persp,
            Mat4::perspective_rh(45f32.to_radians(), 1.5, 0.1, 100.0)
        );
        let ortho = create_orthographic_matrix(-1.0, 1.0, -1.0, 1.0, 0.1, 10.0);
        assert_eq!(
            ortho,
            Mat4::orthographic_rh(-1.0, 1.0, -1.0, 1.0, 0.1, 10.0)
        );
    }
}
