//! First-person fly camera: state and view math, GPU uniform bridge, and
//! window-event input handling.

/// Owns the camera plus its GPU uniform buffer and projection parameters.
pub mod controller;
/// Core fly-camera struct, basis recomputation, and GPU uniform types.
pub mod core;
/// Window-event-based camera input handler.
pub mod input;
