//! Cube geometry
//!
//! A cube has 24 vertices (4 per face, so each face can carry its own flat
//! color) and 12 triangles. Faces are ordered top, left, right, front,
//! back, bottom.

use super::Mesh;
use crate::pipeline::Vertex;

/// Default per-face colors (top, left, right, front, back, bottom)
pub const CUBE_FACE_COLORS: [[f32; 3]; 6] = [
    [0.5, 0.5, 0.5],
    [0.75, 0.25, 0.5],
    [0.25, 0.25, 0.75],
    [1.0, 0.0, 0.15],
    [0.0, 1.0, 0.15],
    [0.5, 0.5, 1.0],
];

impl Mesh {
    /// Create a cube centered at the origin with the given edge length.
    ///
    /// Each face is flat-colored from `face_colors`, in the order top,
    /// left, right, front, back, bottom.
    pub fn cube(side: f32, face_colors: [[f32; 3]; 6]) -> Self {
        let h = side * 0.5;

        // 4 corners per face; the per-face positions follow the classic
        // box layout so the index table below closes the surface with
        // counter-clockwise front faces
        let face_positions: [[[f32; 3]; 4]; 6] = [
            // Top
            [[-h, h, -h], [-h, h, h], [h, h, h], [h, h, -h]],
            // Left
            [[-h, h, h], [-h, -h, h], [-h, -h, -h], [-h, h, -h]],
            // Right
            [[h, h, h], [h, -h, h], [h, -h, -h], [h, h, -h]],
            // Front
            [[h, h, h], [h, -h, h], [-h, -h, h], [-h, h, h]],
            // Back
            [[h, h, -h], [h, -h, -h], [-h, -h, -h], [-h, h, -h]],
            // Bottom
            [[-h, -h, -h], [-h, -h, h], [h, -h, h], [h, -h, -h]],
        ];

        let mut vertices = Vec::with_capacity(24);
        for (face, positions) in face_positions.iter().enumerate() {
            for &position in positions {
                vertices.push(Vertex::new(position, face_colors[face]));
            }
        }

        let indices = vec![
            // Top
            0, 1, 2, 0, 2, 3,
            // Left
            5, 4, 6, 6, 4, 7,
            // Right
            8, 9, 10, 8, 10, 11,
            // Front
            13, 12, 14, 15, 14, 12,
            // Back
            16, 17, 18, 16, 18, 19,
            // Bottom
            21, 20, 22, 22, 20, 23,
        ];

        Self { vertices, indices }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_counts() {
        let cube = Mesh::cube(2.0, CUBE_FACE_COLORS);
        assert_eq!(cube.vertex_count(), 24);
        assert_eq!(cube.index_count(), 36);
        assert_eq!(cube.triangle_count(), 12);
    }

    #[test]
    fn test_cube_extent_scales_with_side() {
        let cube = Mesh::cube(3.0, CUBE_FACE_COLORS);
        for v in &cube.vertices {
            for c in v.position {
                assert!((c.abs() - 1.5).abs() < 0.0001);
            }
        }
    }

    #[test]
    fn test_cube_face_colors_applied() {
        let cube = Mesh::cube(2.0, CUBE_FACE_COLORS);
        for (i, v) in cube.vertices.iter().enumerate() {
            assert_eq!(v.color, CUBE_FACE_COLORS[i / 4]);
        }
    }

    #[test]
    fn test_cube_corners_unique_per_face() {
        let cube = Mesh::cube(2.0, CUBE_FACE_COLORS);
        for face in 0..6 {
            let corners = &cube.vertices[face * 4..face * 4 + 4];
            for (i, a) in corners.iter().enumerate() {
                for b in corners.iter().skip(i + 1) {
                    assert_ne!(a.position, b.position);
                }
            }
        }
    }
}
