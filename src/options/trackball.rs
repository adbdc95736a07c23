use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::surface::DEFAULT_RADIUS;

/// Default zoom multiplier per unit of scroll.
pub const DEFAULT_ZOOM_STEP: f32 = 1.1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Trackball", inline)]
#[serde(default)]
/// Trackball surface, default pose, and scene projection parameters.
pub struct TrackballOptions {
    /// Surface radius in normalized screen units.
    #[schemars(title = "Radius", range(min = 0.1, max = 1.0), extend("step" = 0.05))]
    pub radius: f32,
    /// Pull-back applied before gesture transforms.
    #[schemars(skip)]
    pub default_translation: [f32; 3],
    /// Zoom multiplier per unit of scroll.
    #[schemars(title = "Zoom Step", range(min = 1.01, max = 2.0), extend("step" = 0.01))]
    pub zoom_step: f32,
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Whether the trackball indicator is drawn.
    #[schemars(title = "Show Trackball")]
    pub show_indicator: bool,
}

impl Default for TrackballOptions {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            default_translation: [0.0, 0.0, -4.0],
            zoom_step: DEFAULT_ZOOM_STEP,
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
            show_indicator: true,
        }
    }
}
