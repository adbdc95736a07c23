use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Fly Camera", inline)]
#[serde(default)]
/// First-person camera movement parameters.
pub struct FlyOptions {
    /// Distance covered by one movement step.
    #[schemars(title = "Speed", range(min = 0.005, max = 1.0), extend("step" = 0.005))]
    pub speed: f32,
    /// Starting pull-back.
    #[schemars(skip)]
    pub default_translation: [f32; 3],
}

impl Default for FlyOptions {
    fn default() -> Self {
        Self {
            speed: 0.05,
            default_translation: [0.0, 0.0, -2.0],
        }
    }
}
