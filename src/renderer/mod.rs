//! Rendering subsystems: the lit-solid pass and the lamp-cube pass.

/// Instanced unlit cubes marking the point-light positions.
pub mod lamp;
/// Lit, texture-modulated solids (pyramid and prism).
pub mod solid;
