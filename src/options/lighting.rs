use serde::{Deserialize, Serialize};

use crate::scene;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Lighting parameters for the lit-solid shader.
pub struct LightingOptions {
    /// First (key) light color.
    pub light1_color: [f32; 4],
    /// Second (fill) light color.
    pub light2_color: [f32; 4],
    /// Ambient term.
    pub ambient: f32,
    /// Specular strength.
    pub specular_strength: f32,
    /// Specular shininess exponent.
    pub shininess: f32,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            light1_color: scene::LIGHT1_COLOR,
            light2_color: scene::LIGHT2_COLOR,
            ambient: 0.15,
            specular_strength: 0.5,
            shininess: 32.0,
        }
    }
}
