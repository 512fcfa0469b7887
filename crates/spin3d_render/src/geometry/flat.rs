//! Flat 2D demo shapes (triangle, square, hexagon)
//!
//! All shapes lie in the z = 0 plane and are wound counter-clockwise so
//! they survive back-face culling.

use super::Mesh;
use crate::pipeline::Vertex;

/// Default triangle corner colors (red, green, blue)
pub const TRIANGLE_COLORS: [[f32; 3]; 3] = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
];

/// Flip every color channel between 0 and 1
///
/// Zero channels become one and everything else becomes zero, so repeated
/// application toggles between a palette and its complement.
pub fn flip_channels(colors: [[f32; 3]; 3]) -> [[f32; 3]; 3] {
    colors.map(|c| c.map(|ch| if ch == 0.0 { 1.0 } else { 0.0 }))
}

impl Mesh {
    /// A single triangle with one color per corner
    pub fn triangle(colors: [[f32; 3]; 3]) -> Self {
        let vertices = vec![
            Vertex::new([0.0, 0.5, 0.0], colors[0]),
            Vertex::new([-0.5, -0.5, 0.0], colors[1]),
            Vertex::new([0.5, -0.5, 0.0], colors[2]),
        ];
        let indices = vec![0, 1, 2];
        Self { vertices, indices }
    }

    /// A unit-corner square split into two triangles
    pub fn square() -> Self {
        let vertices = vec![
            Vertex::new([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
            Vertex::new([0.5, 0.0, 0.0], [0.0, 1.0, 0.0]),
            Vertex::new([0.5, 0.5, 0.0], [0.0, 0.0, 1.0]),
            Vertex::new([0.0, 0.5, 0.0], [0.0, 1.0, 0.0]),
        ];
        let indices = vec![0, 1, 2, 0, 2, 3];
        Self { vertices, indices }
    }

    /// A regular hexagon drawn as a triangle fan from the first vertex
    pub fn hexagon() -> Self {
        let vertices = vec![
            Vertex::new([0.0, 0.5, 0.0], [1.0, 0.0, 0.0]),
            Vertex::new([-0.5, 0.25, 0.0], [1.0, 1.0, 0.0]),
            Vertex::new([-0.5, -0.25, 0.0], [1.0, 0.0, 1.0]),
            Vertex::new([0.0, -0.5, 0.0], [0.0, 1.0, 1.0]),
            Vertex::new([0.5, -0.25, 0.0], [0.0, 0.0, 1.0]),
            Vertex::new([0.5, 0.25, 0.0], [0.0, 1.0, 0.0]),
        ];
        let indices = vec![0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5];
        Self { vertices, indices }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Twice the signed area of a z = 0 triangle; positive means
    // counter-clockwise winding
    fn signed_area(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> f32 {
        (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0])
    }

    fn assert_ccw(mesh: &Mesh) {
        for tri in mesh.indices.chunks(3) {
            let area = signed_area(
                mesh.vertices[tri[0] as usize].position,
                mesh.vertices[tri[1] as usize].position,
                mesh.vertices[tri[2] as usize].position,
            );
            assert!(area > 0.0, "triangle {:?} wound clockwise", tri);
        }
    }

    #[test]
    fn test_triangle() {
        let mesh = Mesh::triangle(TRIANGLE_COLORS);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_ccw(&mesh);
    }

    #[test]
    fn test_square() {
        let mesh = Mesh::square();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert_ccw(&mesh);
    }

    #[test]
    fn test_hexagon_fan() {
        let mesh = Mesh::hexagon();
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 4);
        assert_ccw(&mesh);

        // Every fan triangle starts at the hub
        for tri in mesh.indices.chunks(3) {
            assert_eq!(tri[0], 0);
        }
    }

    #[test]
    fn test_flip_channels_toggles() {
        let flipped = flip_channels(TRIANGLE_COLORS);
        assert_eq!(flipped[0], [0.0, 1.0, 1.0]);
        assert_eq!(flipped[1], [1.0, 0.0, 1.0]);
        assert_eq!(flipped[2], [1.0, 1.0, 0.0]);

        // Flipping twice restores a pure 0/1 palette
        assert_eq!(flip_channels(flipped), TRIANGLE_COLORS);
    }
}
