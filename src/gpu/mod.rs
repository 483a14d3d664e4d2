//! GPU plumbing: the wgpu device/surface owner and texture helpers.

/// Core wgpu resources: device, queue, surface, configuration.
pub mod render_context;
/// Depth target and pixel-texture helpers.
pub mod texture;
