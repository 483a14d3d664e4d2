//! Vertex and index tables for the three meshes in the scene.
//!
//! The tables are authored per-face: vertices shared by faces with
//! different normals are duplicated so each face keeps its own flat
//! normal. Face normals are normalized in the shader, not here.

/// Vertex for the lit solids: position, texture coordinates, normal.
///
/// The prism is untextured; its texture coordinates are zero and the
/// renderer binds a 1×1 white texel for it.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SolidVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Texture coordinates (V flipped from image space).
    pub tex_coords: [f32; 2],
    /// Face normal, not necessarily unit length.
    pub normal: [f32; 3],
}

/// Vertex for the unlit lamp cubes: position only.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LampVertex {
    /// Object-space position.
    pub position: [f32; 3],
}

const fn sv(
    position: [f32; 3],
    tex_coords: [f32; 2],
    normal: [f32; 3],
) -> SolidVertex {
    SolidVertex {
        position,
        tex_coords,
        normal,
    }
}

/// Square-based pyramid, apex at (0, 0.8, 0).
pub const PYRAMID_VERTICES: [SolidVertex; 16] = [
    // Base
    sv([-0.5, 0.0, 0.5], [0.0, 1.0], [0.0, -1.0, 0.0]),
    sv([-0.5, 0.0, -0.5], [0.0, 0.0], [0.0, -1.0, 0.0]),
    sv([0.5, 0.0, -0.5], [1.0, 0.0], [0.0, -1.0, 0.0]),
    sv([0.5, 0.0, 0.5], [1.0, 1.0], [0.0, -1.0, 0.0]),
    // Left face
    sv([-0.5, 0.0, 0.5], [0.0, 1.0], [-0.8, 0.5, 0.0]),
    sv([-0.5, 0.0, -0.5], [1.0, 1.0], [-0.8, 0.5, 0.0]),
    sv([0.0, 0.8, 0.0], [0.5, 0.0], [-0.8, 0.5, 0.0]),
    // Back face
    sv([-0.5, 0.0, -0.5], [1.0, 1.0], [0.0, 0.5, -0.8]),
    sv([0.5, 0.0, -0.5], [0.0, 1.0], [0.0, 0.5, -0.8]),
    sv([0.0, 0.8, 0.0], [0.5, 0.0], [0.0, 0.5, -0.8]),
    // Right face
    sv([0.5, 0.0, -0.5], [0.0, 1.0], [0.8, 0.5, 0.0]),
    sv([0.5, 0.0, 0.5], [1.0, 1.0], [0.8, 0.5, 0.0]),
    sv([0.0, 0.8, 0.0], [0.5, 0.0], [0.8, 0.5, 0.0]),
    // Front face
    sv([0.5, 0.0, 0.5], [1.0, 1.0], [0.0, 0.5, 0.8]),
    sv([-0.5, 0.0, 0.5], [0.0, 1.0], [0.0, 0.5, 0.8]),
    sv([0.0, 0.8, 0.0], [0.5, 0.0], [0.0, 0.5, 0.8]),
];

/// Pyramid triangle indices.
pub const PYRAMID_INDICES: [u32; 18] = [
    0, 1, 2, // base
    0, 2, 3, // base
    4, 6, 5, // left
    7, 9, 8, // back
    10, 12, 11, // right
    13, 15, 14, // front
];

const NO_UV: [f32; 2] = [0.0, 0.0];

/// Hexagonal prism, height 0.8, untextured.
pub const PRISM_VERTICES: [SolidVertex; 36] = [
    // Bottom hexagon
    sv([0.35, 0.0, 0.0], NO_UV, [0.0, -1.0, 0.0]),
    sv([0.15, 0.0, -0.3], NO_UV, [0.0, -1.0, 0.0]),
    sv([-0.15, 0.0, -0.3], NO_UV, [0.0, -1.0, 0.0]),
    sv([-0.35, 0.0, 0.0], NO_UV, [0.0, -1.0, 0.0]),
    sv([-0.15, 0.0, 0.3], NO_UV, [0.0, -1.0, 0.0]),
    sv([0.15, 0.0, 0.3], NO_UV, [0.0, -1.0, 0.0]),
    // Top hexagon
    sv([0.35, 0.8, 0.0], NO_UV, [0.0, 1.0, 0.0]),
    sv([0.15, 0.8, -0.3], NO_UV, [0.0, 1.0, 0.0]),
    sv([-0.15, 0.8, -0.3], NO_UV, [0.0, 1.0, 0.0]),
    sv([-0.35, 0.8, 0.0], NO_UV, [0.0, 1.0, 0.0]),
    sv([-0.15, 0.8, 0.3], NO_UV, [0.0, 1.0, 0.0]),
    sv([0.15, 0.8, 0.3], NO_UV, [0.0, 1.0, 0.0]),
    // Side 1 (+Z)
    sv([-0.15, 0.0, 0.3], NO_UV, [0.0, 0.0, 1.0]),
    sv([-0.15, 0.8, 0.3], NO_UV, [0.0, 0.0, 1.0]),
    sv([0.15, 0.8, 0.3], NO_UV, [0.0, 0.0, 1.0]),
    sv([0.15, 0.0, 0.3], NO_UV, [0.0, 0.0, 1.0]),
    // Side 2
    sv([0.15, 0.0, 0.3], NO_UV, [0.3, 0.0, 0.2]),
    sv([0.15, 0.8, 0.3], NO_UV, [0.3, 0.0, 0.2]),
    sv([0.35, 0.8, 0.0], NO_UV, [0.3, 0.0, 0.2]),
    sv([0.35, 0.0, 0.0], NO_UV, [0.3, 0.0, 0.2]),
    // Side 3
    sv([0.35, 0.0, 0.0], NO_UV, [0.3, 0.0, -0.2]),
    sv([0.35, 0.8, 0.0], NO_UV, [0.3, 0.0, -0.2]),
    sv([0.15, 0.8, -0.3], NO_UV, [0.3, 0.0, -0.2]),
    sv([0.15, 0.0, -0.3], NO_UV, [0.3, 0.0, -0.2]),
    // Side 4 (−Z)
    sv([0.15, 0.0, -0.3], NO_UV, [0.0, 0.0, -1.0]),
    sv([0.15, 0.8, -0.3], NO_UV, [0.0, 0.0, -1.0]),
    sv([-0.15, 0.8, -0.3], NO_UV, [0.0, 0.0, -1.0]),
    sv([-0.15, 0.0, -0.3], NO_UV, [0.0, 0.0, -1.0]),
    // Side 5
    sv([-0.15, 0.0, -0.3], NO_UV, [-0.3, 0.0, -0.2]),
    sv([-0.15, 0.8, -0.3], NO_UV, [-0.3, 0.0, -0.2]),
    sv([-0.35, 0.8, 0.0], NO_UV, [-0.3, 0.0, -0.2]),
    sv([-0.35, 0.0, 0.0], NO_UV, [-0.3, 0.0, -0.2]),
    // Side 6
    sv([-0.35, 0.0, 0.0], NO_UV, [-0.3, 0.0, 0.2]),
    sv([-0.35, 0.8, 0.0], NO_UV, [-0.3, 0.0, 0.2]),
    sv([-0.15, 0.8, 0.3], NO_UV, [-0.3, 0.0, 0.2]),
    sv([-0.15, 0.0, 0.3], NO_UV, [-0.3, 0.0, 0.2]),
];

/// Prism triangle indices: two hexagon caps (four triangles each) plus
/// six quad sides (two triangles each).
pub const PRISM_INDICES: [u32; 60] = [
    // Bottom cap
    0, 3, 1, 1, 3, 2, 3, 0, 4, 4, 0, 5,
    // Top cap
    6, 7, 9, 9, 7, 8, 9, 10, 6, 6, 10, 11,
    // Sides
    12, 15, 14, 12, 14, 13, //
    16, 19, 18, 16, 18, 17, //
    20, 23, 22, 20, 22, 21, //
    24, 27, 26, 24, 26, 25, //
    28, 31, 30, 28, 30, 29, //
    32, 35, 34, 32, 34, 33,
];

/// Cube with side 0.2 centered at the origin, drawn at each light position.
pub const LAMP_VERTICES: [LampVertex; 8] = [
    LampVertex {
        position: [-0.1, -0.1, -0.1],
    },
    LampVertex {
        position: [-0.1, -0.1, 0.1],
    },
    LampVertex {
        position: [0.1, -0.1, 0.1],
    },
    LampVertex {
        position: [0.1, -0.1, -0.1],
    },
    LampVertex {
        position: [-0.1, 0.1, -0.1],
    },
    LampVertex {
        position: [-0.1, 0.1, 0.1],
    },
    LampVertex {
        position: [0.1, 0.1, 0.1],
    },
    LampVertex {
        position: [0.1, 0.1, -0.1],
    },
];

/// Lamp cube triangle indices (12 triangles).
pub const LAMP_INDICES: [u32; 36] = [
    1, 0, 2, 2, 0, 3, // bottom
    1, 2, 5, 5, 2, 6, // front
    2, 3, 6, 6, 3, 7, // right
    3, 0, 7, 7, 0, 4, // back
    5, 6, 4, 4, 6, 7, // top
    0, 1, 5, 5, 0, 4, // left
];

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn assert_indices_in_bounds(indices: &[u32], vertex_count: usize) {
        assert!(indices
            .iter()
            .all(|&i| (i as usize) < vertex_count));
    }

    #[test]
    fn index_tables_are_in_bounds() {
        assert_indices_in_bounds(&PYRAMID_INDICES, PYRAMID_VERTICES.len());
        assert_indices_in_bounds(&PRISM_INDICES, PRISM_VERTICES.len());
        assert_indices_in_bounds(&LAMP_INDICES, LAMP_VERTICES.len());
    }

    #[test]
    fn triangle_counts_match_face_structure() {
        // Pyramid: 2 base + 4 side triangles
        assert_eq!(PYRAMID_INDICES.len(), 18);
        // Prism: 4 + 4 cap triangles, 6 quads
        assert_eq!(PRISM_INDICES.len(), 60);
        // Cube: 6 quads
        assert_eq!(LAMP_INDICES.len(), 36);
    }

    #[test]
    fn face_normals_are_perpendicular_to_their_triangles() {
        for mesh in [
            (&PYRAMID_VERTICES[..], &PYRAMID_INDICES[..]),
            (&PRISM_VERTICES[..], &PRISM_INDICES[..]),
        ] {
            let (vertices, indices) = mesh;
            for tri in indices.chunks_exact(3) {
                let a = Vec3::from(vertices[tri[0] as usize].position);
                let b = Vec3::from(vertices[tri[1] as usize].position);
                let c = Vec3::from(vertices[tri[2] as usize].position);
                let n = Vec3::from(vertices[tri[0] as usize].normal)
                    .normalize();
                assert!(n.dot(b - a).abs() < 1e-5);
                assert!(n.dot(c - a).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn pyramid_apex_and_base_heights() {
        let max_y = PYRAMID_VERTICES
            .iter()
            .map(|v| v.position[1])
            .fold(f32::MIN, f32::max);
        let min_y = PYRAMID_VERTICES
            .iter()
            .map(|v| v.position[1])
            .fold(f32::MAX, f32::min);
        assert_eq!(max_y, 0.8);
        assert_eq!(min_y, 0.0);
    }

    #[test]
    fn lamp_cube_is_centered_with_side_point_two() {
        for v in &LAMP_VERTICES {
            for c in v.position {
                assert_eq!(c.abs(), 0.1);
            }
        }
    }
}
