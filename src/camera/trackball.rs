//! Trackball camera controller.
//!
//! Pointer drags are lifted onto a sphere/hyperboloid surface of radius
//! [`DEFAULT_RADIUS`] centered in the viewport; the rotation that carries one
//! surface sample onto the next is composed into a running quaternion. Pans
//! are accumulated in the camera's rotated frame so they follow the screen
//! axes whatever the current orientation.
//!
//! The view matrix is rebuilt after every mutation as
//! `R(default) · T(default) · R(q) · T(t) · S(zoom)`.

use glam::{Mat3, Mat4, Quat, Vec2, Vec3};

use super::core::{
    create_orthographic_matrix, create_perspective_matrix, Camera, CameraBase,
    Viewport,
};
use super::gesture::{
    compose_rotation, pan_offset, renormalize, rotation_between,
    RotationGesture, TrackballState, TranslationGesture,
};
use super::indicator::IndicatorUniform;
use super::surface::{surface_point, DEFAULT_RADIUS};
use crate::command::NavCommand;
use crate::options::TrackballOptions;

/// Default pull-back that keeps the scene origin in front of the camera.
pub const DEFAULT_TRANSLATION: Vec3 = Vec3::new(0.0, 0.0, -4.0);

/// Trackball controller driving a [`CameraBase`].
#[derive(Debug, Clone)]
pub struct Trackball<C: CameraBase = Camera> {
    camera: C,
    state: TrackballState,
    default_rotation: Quat,
    default_translation: Vec3,
    radius: f32,
    /// Projection used when drawing the trackball indicator.
    indicator_projection: Mat4,
    render_indicator: bool,
}

impl Trackball<Camera> {
    /// Trackball over a plain [`Camera`] with the given viewport.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self::with_camera(Camera::new(viewport))
    }

    /// Trackball configured from options.
    ///
    /// The scene projection is a perspective matrix built from the options'
    /// field of view and clip planes and the viewport's aspect ratio.
    #[must_use]
    pub fn from_options(options: &TrackballOptions, viewport: Viewport) -> Self {
        let mut trackball = Self::new(viewport);
        trackball.radius = options.radius;
        trackball.default_translation = Vec3::from(options.default_translation);
        trackball.render_indicator = options.show_indicator;
        trackball.camera.set_projection_matrix(create_perspective_matrix(
            options.fovy,
            viewport.aspect_ratio(),
            options.znear,
            options.zfar,
        ));
        trackball.update_view_matrix();
        trackball
    }
}

impl Default for Trackball<Camera> {
    fn default() -> Self {
        Self::with_camera(Camera::default())
    }
}

impl<C: CameraBase> Trackball<C> {
    /// Wrap an existing camera. The camera's view matrix is overwritten.
    pub fn with_camera(camera: C) -> Self {
        let mut trackball = Self {
            camera,
            state: TrackballState::default(),
            default_rotation: Quat::IDENTITY,
            default_translation: DEFAULT_TRANSLATION,
            radius: DEFAULT_RADIUS,
            indicator_projection: Mat4::IDENTITY,
            render_indicator: true,
        };
        trackball.update_view_matrix();
        trackball
    }

    // -- Accessors --------------------------------------------------------

    /// The underlying camera.
    pub fn camera(&self) -> &C {
        &self.camera
    }

    /// Mutable access to the underlying camera.
    ///
    /// Changes to its view matrix are overwritten by the next trackball
    /// update.
    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    /// Accumulated state (orientation, pan, zoom, gestures).
    #[must_use]
    pub fn state(&self) -> &TrackballState {
        &self.state
    }

    /// Composed view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.camera.view_matrix()
    }

    /// Scene projection matrix of the underlying camera.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.camera.projection_matrix()
    }

    /// Whether a rotation drag is in progress.
    #[must_use]
    pub fn is_rotating(&self) -> bool {
        matches!(self.state.rotation, RotationGesture::Rotating { .. })
    }

    /// Whether a translation drag is in progress.
    #[must_use]
    pub fn is_translating(&self) -> bool {
        matches!(self.state.panning, TranslationGesture::Translating { .. })
    }

    /// Current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.state.zoom
    }

    /// Gesture-driven orientation, without the default rotation.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        self.state.orientation
    }

    /// Gesture orientation composed with the default rotation.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        self.state.orientation * self.default_rotation
    }

    /// Accumulated pan offset.
    #[must_use]
    pub fn translation(&self) -> Vec3 {
        self.state.translation
    }

    /// Pull-back applied before the gesture transforms.
    #[must_use]
    pub fn default_translation(&self) -> Vec3 {
        self.default_translation
    }

    /// Replace the pull-back vector.
    pub fn set_default_translation(&mut self, translation: Vec3) {
        log::debug!("trackball default translation set to {translation}");
        self.default_translation = translation;
        self.update_view_matrix();
    }

    /// Baseline rotation applied before everything else.
    #[must_use]
    pub fn default_rotation(&self) -> Quat {
        self.default_rotation
    }

    /// Replace the baseline rotation. Degenerate quaternions are ignored.
    pub fn set_default_rotation(&mut self, rotation: Quat) {
        match renormalize(rotation) {
            Some(rotation) => {
                self.default_rotation = rotation;
                self.update_view_matrix();
            }
            None => log::warn!("ignoring degenerate default rotation"),
        }
    }

    /// Replace the baseline rotation from a rotation matrix.
    pub fn set_default_rotation_matrix(&mut self, rotation: Mat3) {
        self.set_default_rotation(Quat::from_mat3(&rotation));
    }

    /// Trackball surface radius in normalized screen units.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Replace the surface radius. Non-positive values are ignored.
    pub fn set_radius(&mut self, radius: f32) {
        if radius > 0.0 && radius.is_finite() {
            self.radius = radius;
        } else {
            log::warn!("ignoring invalid trackball radius {radius}");
        }
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.camera.viewport()
    }

    /// Replace the viewport used to normalize pointer positions.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport.is_degenerate() {
            log::warn!("degenerate viewport {viewport:?}; positions map to center");
        }
        self.camera.set_viewport(viewport);
    }

    /// Map a screen position into the trackball's `[-1, 1]²` frame.
    #[must_use]
    pub fn normalize_position(&self, pos: Vec2) -> Vec2 {
        self.camera.viewport().normalize(pos)
    }

    // -- Lifecycle --------------------------------------------------------

    /// Return orientation, pan, zoom, and gestures to their defaults.
    ///
    /// Configuration (viewport, default pose, radius, projections) is kept.
    pub fn reset(&mut self) {
        log::debug!("trackball reset");
        self.state = TrackballState::default();
        self.camera.reset_view_matrix();
        self.update_view_matrix();
    }

    /// Apply one navigation command.
    pub fn execute(&mut self, command: NavCommand) {
        match command {
            NavCommand::BeginRotation { pos } => self.begin_rotation(pos),
            NavCommand::UpdateRotation { pos } => self.update_rotation(pos),
            NavCommand::EndRotation => self.end_rotation(),
            NavCommand::BeginTranslation { pos } => self.begin_translation(pos),
            NavCommand::UpdateTranslation { pos } => {
                self.update_translation(pos);
            }
            NavCommand::EndTranslation => self.end_translation(),
            NavCommand::ZoomIn { factor } => self.increase_zoom(factor),
            NavCommand::ZoomOut { factor } => self.decrease_zoom(factor),
            NavCommand::SetZoom { value } => self.set_zoom(value),
            NavCommand::Resize { width, height } => {
                self.set_viewport(Viewport::from_size(width, height));
            }
            NavCommand::Reset => self.reset(),
        }
    }

    // -- Rotation ---------------------------------------------------------

    /// Start a rotation drag at a screen position. No-op while rotating.
    pub fn begin_rotation(&mut self, pos: Vec2) {
        if self.is_rotating() {
            return;
        }
        let last = surface_point(self.normalize_position(pos), self.radius);
        log::debug!("rotation begin at {last}");
        self.state.rotation = RotationGesture::Rotating { last };
    }

    /// Continue a rotation drag. No-op while idle or if the pointer has not
    /// moved since the previous sample.
    pub fn update_rotation(&mut self, pos: Vec2) {
        let RotationGesture::Rotating { last } = self.state.rotation else {
            return;
        };
        let normalized = self.normalize_position(pos);
        if normalized == last.truncate() {
            return;
        }
        let current = surface_point(normalized, self.radius);
        let delta = rotation_between(last, current);
        log::trace!("rotation increment {delta}");
        self.state.orientation =
            compose_rotation(delta, self.state.orientation);
        self.state.rotation = RotationGesture::Rotating { last: current };
        self.update_view_matrix();
    }

    /// Finish a rotation drag. Idempotent.
    pub fn end_rotation(&mut self) {
        if self.is_rotating() {
            log::debug!("rotation end");
        }
        self.state.rotation = RotationGesture::Idle;
    }

    /// Begin a rotation drag if idle, otherwise continue it.
    pub fn rotate_camera(&mut self, pos: Vec2) {
        if self.is_rotating() {
            self.update_rotation(pos);
        } else {
            self.begin_rotation(pos);
        }
    }

    // -- Translation ------------------------------------------------------

    /// Start a translation drag at a screen position. No-op while
    /// translating.
    pub fn begin_translation(&mut self, pos: Vec2) {
        if self.is_translating() {
            return;
        }
        let last = self.normalize_position(pos);
        log::debug!("translation begin at {last}");
        self.state.panning = TranslationGesture::Translating { last };
    }

    /// Continue a translation drag. No-op while idle or if the pointer has
    /// not moved since the previous sample.
    pub fn update_translation(&mut self, pos: Vec2) {
        let TranslationGesture::Translating { last } = self.state.panning else {
            return;
        };
        let current = self.normalize_position(pos);
        if current == last {
            return;
        }
        let offset = pan_offset(current - last, self.state.orientation);
        log::trace!("translation increment {offset}");
        self.state.translation += offset;
        self.state.panning = TranslationGesture::Translating { last: current };
        self.update_view_matrix();
    }

    /// Finish a translation drag. Idempotent.
    pub fn end_translation(&mut self) {
        if self.is_translating() {
            log::debug!("translation end");
        }
        self.state.panning = TranslationGesture::Idle;
    }

    /// Begin a translation drag if idle, otherwise continue it.
    pub fn translate_camera(&mut self, pos: Vec2) {
        if self.is_translating() {
            self.update_translation(pos);
        } else {
            self.begin_translation(pos);
        }
    }

    // -- Zoom -------------------------------------------------------------

    /// Multiply the zoom factor.
    pub fn increase_zoom(&mut self, factor: f32) {
        self.apply_zoom(self.state.zoom * factor);
    }

    /// Divide the zoom factor.
    pub fn decrease_zoom(&mut self, factor: f32) {
        self.apply_zoom(self.state.zoom / factor);
    }

    /// Replace the zoom factor.
    pub fn set_zoom(&mut self, value: f32) {
        self.apply_zoom(value);
    }

    fn apply_zoom(&mut self, zoom: f32) {
        if zoom == 0.0 || !zoom.is_finite() {
            log::warn!("ignoring degenerate zoom {zoom}");
            return;
        }
        self.state.zoom = zoom;
        self.update_view_matrix();
    }

    // -- Direct manipulation ----------------------------------------------

    /// Add an offset to the accumulated pan, bypassing gestures.
    pub fn translate_view_matrix(&mut self, translation: Vec3) {
        self.state.translation += translation;
        self.update_view_matrix();
    }

    /// Compose a rotation after the accumulated orientation, bypassing
    /// gestures.
    pub fn rotate_view_matrix(&mut self, rotation: Quat) {
        self.state.orientation = renormalize(self.state.orientation * rotation)
            .unwrap_or(self.state.orientation);
        self.update_view_matrix();
    }

    // -- View matrix ------------------------------------------------------

    /// Rebuild the view matrix from the default pose and accumulators.
    pub fn update_view_matrix(&mut self) {
        self.camera.reset_view_matrix();
        self.camera.rotate(self.default_rotation);
        self.camera.translate(self.default_translation);
        self.camera.rotate(self.state.orientation);
        self.camera.translate(self.state.translation);
        self.camera.scale(self.state.zoom);
    }

    // -- Indicator --------------------------------------------------------

    /// Replace the projection used to draw the trackball indicator.
    pub fn set_trackball_projection_matrix(&mut self, projection: Mat4) {
        self.indicator_projection = projection;
    }

    /// Set a perspective indicator projection and return it.
    pub fn set_trackball_perspective_matrix(
        &mut self,
        fovy: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Mat4 {
        let projection = create_perspective_matrix(fovy, aspect, near, far);
        self.set_trackball_projection_matrix(projection);
        projection
    }

    /// Set an orthographic indicator projection and return it.
    pub fn set_trackball_orthographic_matrix(
        &mut self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Mat4 {
        let projection =
            create_orthographic_matrix(left, right, bottom, top, near, far);
        self.set_trackball_projection_matrix(projection);
        projection
    }

    /// Projection used to draw the trackball indicator.
    #[must_use]
    pub fn trackball_projection_matrix(&self) -> Mat4 {
        self.indicator_projection
    }

    /// Toggle drawing of the trackball indicator.
    pub fn set_render_flag(&mut self, flag: bool) {
        self.render_indicator = flag;
    }

    /// Whether the trackball indicator should be drawn.
    #[must_use]
    pub fn render_flag(&self) -> bool {
        self.render_indicator
    }

    /// GPU uniform for the indicator, or `None` when drawing is disabled.
    ///
    /// The indicator sits at the default pull-back distance, follows the
    /// full rotation, and is scaled to the trackball radius.
    #[must_use]
    pub fn indicator_uniform(&self) -> Option<IndicatorUniform> {
        if !self.render_indicator {
            return None;
        }
        let model = Mat4::from_translation(self.default_translation)
            * Mat4::from_quat(self.rotation())
            * Mat4::from_scale(Vec3::splat(self.radius));
        Some(IndicatorUniform::new(
            self.indicator_projection * model,
            self.radius,
            self.state.zoom,
            self.is_rotating(),
        ))
    }
}
