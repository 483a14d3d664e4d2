use serde::{Deserialize, Serialize};

use crate::scene;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Scene color overrides.
pub struct SceneOptions {
    /// Window clear color.
    pub background: [f32; 4],
    /// Pyramid tint (modulates the brick texture).
    pub pyramid_color: [f32; 4],
    /// Prism tint.
    pub prism_color: [f32; 4],
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            background: scene::BACKGROUND_COLOR.to_array(),
            pyramid_color: scene::PYRAMID_COLOR,
            prism_color: scene::PRISM_COLOR,
        }
    }
}
