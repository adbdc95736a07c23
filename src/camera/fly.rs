//! First-person fly camera.
//!
//! Yaw and pitch are accumulated from normalized pointer deltas (a full
//! viewport sweep turns by 2π) and kept in `[0, 2π)`. Movement steps are
//! taken along the yaw-rotated axes, so pitching does not change the
//! walking plane.

use std::f32::consts::{PI, TAU};

use glam::{Affine3A, Mat3, Mat4, Quat, Vec2, Vec3};

use super::core::{Camera, CameraBase, Viewport};
use crate::options::FlyOptions;

/// Default pull-back of the fly camera.
pub const FLY_DEFAULT_TRANSLATION: Vec3 = Vec3::new(0.0, 0.0, -2.0);

/// Default distance covered by one movement step.
pub const FLY_DEFAULT_SPEED: f32 = 0.05;

/// Fly camera driving a [`CameraBase`].
#[derive(Debug, Clone)]
pub struct FlyCamera<C: CameraBase = Camera> {
    camera: C,
    speed: f32,
    start_mouse_pos: Vec2,
    rotation_matrix: Mat3,
    default_rotation: Mat3,
    translation: Vec3,
    default_translation: Vec3,
    /// Rotation about the (yawed) X axis.
    pitch: f32,
    /// Rotation about the world Y axis.
    yaw: f32,
}

impl FlyCamera<Camera> {
    /// Fly camera over a plain [`Camera`] with the given viewport.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self::with_camera(Camera::new(viewport))
    }

    /// Fly camera configured from options.
    #[must_use]
    pub fn from_options(options: &FlyOptions, viewport: Viewport) -> Self {
        let mut fly = Self::new(viewport);
        fly.set_speed(options.speed);
        fly.default_translation = Vec3::from(options.default_translation);
        fly.update_view_matrix();
        fly
    }
}

impl Default for FlyCamera<Camera> {
    fn default() -> Self {
        Self::with_camera(Camera::default())
    }
}

impl<C: CameraBase> FlyCamera<C> {
    /// Wrap an existing camera. The camera's view matrix is overwritten.
    pub fn with_camera(camera: C) -> Self {
        let mut fly = Self {
            camera,
            speed: FLY_DEFAULT_SPEED,
            start_mouse_pos: Vec2::ZERO,
            rotation_matrix: Mat3::IDENTITY,
            default_rotation: Mat3::IDENTITY,
            translation: Vec3::ZERO,
            default_translation: FLY_DEFAULT_TRANSLATION,
            pitch: 0.0,
            yaw: 0.0,
        };
        fly.update_view_matrix();
        fly
    }

    /// The underlying camera.
    pub fn camera(&self) -> &C {
        &self.camera
    }

    /// Current view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.camera.view_matrix()
    }

    /// Movement step length.
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Replace the movement step length.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// Accumulated (yaw, pitch) in radians, each in `[0, 2π)`.
    #[must_use]
    pub fn angles(&self) -> (f32, f32) {
        (self.yaw, self.pitch)
    }

    /// Accumulated movement offset.
    #[must_use]
    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Starting pose's translation.
    #[must_use]
    pub fn default_translation(&self) -> Vec3 {
        self.default_translation
    }

    /// Return to the starting pose. The starting pose itself is kept.
    pub fn reset(&mut self) {
        log::debug!("fly camera reset");
        self.start_mouse_pos = Vec2::ZERO;
        self.translation = Vec3::ZERO;
        self.rotation_matrix = Mat3::IDENTITY;
        self.pitch = 0.0;
        self.yaw = 0.0;
        self.update_view_matrix();
    }

    /// Use an affine transform as the starting pose.
    pub fn set_default_view(&mut self, view: Affine3A) {
        let (_, rotation, translation) = view.to_scale_rotation_translation();
        self.default_rotation = Mat3::from_quat(rotation);
        self.default_translation = translation;
        log::debug!(
            "fly camera default view: rotation {rotation}, translation {translation}"
        );
        self.update_view_matrix();
    }

    /// Record the pointer position a look drag starts from.
    pub fn start_rotation(&mut self, pos: Vec2) {
        self.start_mouse_pos = self.camera.viewport().normalize(pos);
    }

    /// Turn by the pointer delta since the previous sample.
    pub fn rotate(&mut self, pos: Vec2) {
        let current = self.camera.viewport().normalize(pos);
        let delta = current - self.start_mouse_pos;
        self.start_mouse_pos = current;

        self.pitch = wrap_angle(self.pitch - delta.y * PI);
        self.yaw = wrap_angle(self.yaw - delta.x * PI);
        self.update_view_matrix();
    }

    /// Step left.
    pub fn stride_left(&mut self) {
        self.step(Vec3::X);
    }

    /// Step right.
    pub fn stride_right(&mut self) {
        self.step(Vec3::NEG_X);
    }

    /// Step forward.
    pub fn move_forward(&mut self) {
        self.step(Vec3::Z);
    }

    /// Step back.
    pub fn move_back(&mut self) {
        self.step(Vec3::NEG_Z);
    }

    /// Step up along world Y.
    pub fn move_up(&mut self) {
        self.translation -= Vec3::Y * self.speed;
        self.update_view_matrix();
    }

    /// Step down along world Y.
    pub fn move_down(&mut self) {
        self.translation += Vec3::Y * self.speed;
        self.update_view_matrix();
    }

    fn step(&mut self, local: Vec3) {
        let dir = Quat::from_rotation_y(self.yaw) * local;
        self.translation += dir * self.speed;
        self.update_view_matrix();
    }

    /// Rebuild the view matrix from the default pose, the look angles, and
    /// the movement offset.
    pub fn update_view_matrix(&mut self) {
        let yaw = Quat::from_rotation_y(self.yaw);
        let rot_x = (yaw * Vec3::X).normalize();
        let pitch = Quat::from_axis_angle(rot_x, self.pitch);
        let rot_z = (pitch * (yaw * Vec3::Z)).normalize();
        let rot_y = (pitch * Vec3::Y).normalize();
        // Rows are the rotated axes.
        self.rotation_matrix = Mat3::from_cols(rot_x, rot_y, rot_z).transpose();

        self.camera.reset_view_matrix();
        self.camera.rotate(Quat::from_mat3(&self.default_rotation));
        self.camera.rotate(Quat::from_mat3(&self.rotation_matrix));
        self.camera.translate(self.default_translation);
        self.camera.translate(self.translation);
    }
}

fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}
