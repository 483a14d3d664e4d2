//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (window, camera control, lighting, scene colors)
//! are consolidated here. Options serialize to/from TOML; every sub-struct
//! uses `#[serde(default)]` so partial preset files work.

mod camera;
mod lighting;
mod scene;
mod window;

use std::path::Path;

pub use camera::CameraOptions;
pub use lighting::LightingOptions;
pub use scene::SceneOptions;
use serde::{Deserialize, Serialize};
pub use window::WindowOptions;

use crate::error::FacetaError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[lighting]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Window size, title, and cursor capture.
    pub window: WindowOptions,
    /// Camera movement and projection parameters.
    pub camera: CameraOptions,
    /// Lighting parameters.
    pub lighting: LightingOptions,
    /// Scene colors.
    pub scene: SceneOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`FacetaError::Io`] if the file cannot be read and
    /// [`FacetaError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, FacetaError> {
        let content = std::fs::read_to_string(path).map_err(FacetaError::Io)?;
        toml::from_str(&content)
            .map_err(|e| FacetaError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`FacetaError::OptionsParse`] on serialization failure and
    /// [`FacetaError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), FacetaError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FacetaError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FacetaError::Io)?;
        }
        std::fs::write(path, content).map_err(FacetaError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
movement_speed = 5.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.movement_speed, 5.0);
        // Everything else should be default
        assert_eq!(opts.camera.mouse_sensitivity, 0.1);
        assert_eq!(opts.window.width, 1000);
        assert_eq!(opts.lighting.light1_color, [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let opts: Options = toml::from_str("").unwrap();
        assert_eq!(opts, Options::default());
    }
}
