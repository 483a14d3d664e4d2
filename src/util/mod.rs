//! Small shared utilities.

/// Frame timing with smoothed FPS calculation.
pub mod frame_timing;
