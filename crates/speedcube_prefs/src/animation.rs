use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationPreferences {
    /// Angular speed of a twist animation, in degrees per second.
    pub twist_speed: f32,
    /// Easing applied to twist progress when drawing.
    pub interpolation: InterpolateFn,
}
impl Default for AnimationPreferences {
    fn default() -> Self {
        Self {
            twist_speed: 300.0,
            interpolation: InterpolateFn::default(),
        }
    }
}

/// Function that maps a float from the range 0.0 to 1.0 to another float
/// from 0.0 to 1.0.
#[derive(
    Serialize,
    Deserialize,
    EnumIter,
    Display,
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InterpolateFn {
    /// No easing.
    Linear,
    /// Cosine from 0.0 to PI.
    #[default]
    Cosine,
}
impl InterpolateFn {
    pub fn interpolate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            InterpolateFn::Linear => t,
            InterpolateFn::Cosine => (1.0 - (t * PI).cos()) / 2.0,
        }
    }
}
