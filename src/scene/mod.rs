//! Static scene description: object placement, colors, and the mesh tables.
//!
//! Everything here is immutable for the process lifetime; the camera is the
//! only mutable state in the program.

/// Vertex/index tables for the pyramid, prism, and lamp cube.
pub mod geometry;

use glam::{Mat4, Vec3, Vec4};

/// Initial camera position.
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// Window clear color.
pub const BACKGROUND_COLOR: Vec4 = Vec4::new(0.24, 0.28, 0.29, 1.0);

/// Pyramid placement and color.
pub const PYRAMID_POS: Vec3 = Vec3::new(1.0, -1.0, -0.1);
/// Sand-colored pyramid tint, modulated by the brick texture.
pub const PYRAMID_COLOR: [f32; 4] = [0.98, 0.84, 0.65, 1.0];
/// Uniform pyramid scale.
pub const PYRAMID_SCALE: f32 = 2.0;

/// Prism placement and color.
pub const PRISM_POS: Vec3 = Vec3::new(-0.5, 0.1, 1.0);
/// Purple prism tint.
pub const PRISM_COLOR: [f32; 4] = [0.28, 0.09, 0.47, 1.0];
/// Static prism tilt about the Z axis, degrees.
pub const PRISM_TILT_Z_DEG: f32 = -10.0;
/// Static prism tilt about the Y axis, degrees.
pub const PRISM_TILT_Y_DEG: f32 = 5.0;

/// First (white) point light.
pub const LIGHT1_POS: Vec3 = Vec3::new(-0.1, 1.0, 0.3);
/// First light color.
pub const LIGHT1_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Second (red) point light.
pub const LIGHT2_POS: Vec3 = Vec3::new(1.0, 1.2, -0.1);
/// Second light color.
pub const LIGHT2_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 0.1];
/// Uniform scale applied to the lamp marker cubes.
pub const LAMP_SCALE: f32 = 0.5;

/// Model matrix for the pyramid: translate, then uniform scale.
#[must_use]
pub fn pyramid_model() -> Mat4 {
    Mat4::from_translation(PYRAMID_POS)
        * Mat4::from_scale(Vec3::splat(PYRAMID_SCALE))
}

/// Model matrix for the prism: translate, tilt about Z, then about Y.
///
/// Tilt angles are stored in degrees and converted exactly once here.
#[must_use]
pub fn prism_model() -> Mat4 {
    Mat4::from_translation(PRISM_POS) * prism_rotation()
}

/// The prism's rotation-only transform, used to correct normals.
#[must_use]
pub fn prism_rotation() -> Mat4 {
    Mat4::from_rotation_z(PRISM_TILT_Z_DEG.to_radians())
        * Mat4::from_rotation_y(PRISM_TILT_Y_DEG.to_radians())
}

/// Model matrix for one lamp cube.
#[must_use]
pub fn lamp_model(light_pos: Vec3) -> Mat4 {
    Mat4::from_translation(light_pos) * Mat4::from_scale(Vec3::splat(LAMP_SCALE))
}

/// Procedural brick pattern for the pyramid, RGBA8.
///
/// Running-bond courses with mortar lines and a deterministic per-brick
/// brightness variation.
#[must_use]
pub fn brick_texture_pixels() -> (u32, u32, Vec<u8>) {
    const SIZE: u32 = 64;
    const COURSE: u32 = 16;
    const BRICK: u32 = 32;
    const MORTAR: u32 = 2;

    let mut pixels = Vec::with_capacity((SIZE * SIZE * 4) as usize);
    for y in 0..SIZE {
        let course = y / COURSE;
        // Offset every other course by half a brick (running bond)
        let shift = if course % 2 == 0 { 0 } else { BRICK / 2 };
        for x in 0..SIZE {
            let sx = (x + shift) % SIZE;
            let in_mortar = y % COURSE < MORTAR || sx % BRICK < MORTAR;
            let (r, g, b) = if in_mortar {
                (196, 188, 176)
            } else {
                // Deterministic per-brick tone variation
                let brick_id = course * 7 + (sx / BRICK) * 13;
                let tone = (brick_id * 37) % 48;
                (142 + tone as u8, 58 + (tone / 2) as u8, 48)
            };
            pixels.extend_from_slice(&[r, g, b, 255]);
        }
    }
    (SIZE, SIZE, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_matrices_place_objects_at_layout_positions() {
        let p = pyramid_model();
        assert_eq!(p.w_axis.truncate(), PYRAMID_POS);
        // Uniform ×2 scale on the basis vectors
        assert_eq!(p.x_axis.truncate().length(), PYRAMID_SCALE);

        let lamp = lamp_model(LIGHT1_POS);
        assert_eq!(lamp.w_axis.truncate(), LIGHT1_POS);
        assert_eq!(lamp.x_axis.truncate().length(), LAMP_SCALE);
    }

    #[test]
    fn prism_rotation_preserves_lengths() {
        let r = prism_rotation();
        let v = glam::Vec3::new(0.35, 0.8, -0.3);
        let rotated = r.transform_vector3(v);
        assert!((rotated.length() - v.length()).abs() < 1e-5);
        // Rotation-only: translation column is zero
        assert_eq!(r.w_axis.truncate(), glam::Vec3::ZERO);
    }

    #[test]
    fn brick_texture_dimensions_match_pixel_count() {
        let (w, h, pixels) = brick_texture_pixels();
        assert_eq!(pixels.len(), (w * h * 4) as usize);
        // Alpha is opaque everywhere
        assert!(pixels.chunks_exact(4).all(|px| px[3] == 255));
    }
}
