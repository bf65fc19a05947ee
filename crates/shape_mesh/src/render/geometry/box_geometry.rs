//! Box geometry

use crate::foundation::math::Vec3;
use crate::render::primitives::{Mesh, Vertex};

/// Axis-aligned box centered on the origin
#[derive(Debug, Clone, PartialEq)]
pub struct BoxGeometry {
    /// Full size along X
    pub width: f32,
    /// Full size along Y
    pub height: f32,
    /// Full size along Z
    pub depth: f32,
}

/// Face normal and the two in-plane axes, ordered so `u × v = normal`
const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
    ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
];

impl BoxGeometry {
    /// Creates a box from its full extents
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self { width, height, depth }
    }

    /// Full extents as a vector
    pub fn size(&self) -> Vec3 {
        Vec3::new(self.width, self.height, self.depth)
    }

    /// Tessellates into 4 vertices and 2 triangles per face
    pub fn to_mesh(&self) -> Mesh {
        let half = self.size() * 0.5;
        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);

        for (normal, u, v) in FACES {
            let (normal, u, v) = (Vec3::from(normal), Vec3::from(u), Vec3::from(v));
            let center = normal.component_mul(&half);
            let su = u.abs().dot(&half);
            let sv = v.abs().dot(&half);

            let base = vertices.len() as u32;
            for (du, dv, uv) in [(-1.0, -1.0, [0.0, 0.0]), (1.0, -1.0, [1.0, 0.0]), (1.0, 1.0, [1.0, 1.0]), (-1.0, 1.0, [0.0, 1.0])] {
                let position = center + u * (du * su) + v * (dv * sv);
                vertices.push(Vertex::new(position.into(), normal.into(), uv));
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
        }

        Mesh::new(vertices, indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_box_structure() {
        let mesh = BoxGeometry::new(2.0, 4.0, 6.0).to_mesh();
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
        assert!(mesh.indices_in_bounds());
    }

    #[test]
    fn test_box_extents() {
        let (min, max) = BoxGeometry::new(2.0, 4.0, 6.0).to_mesh().bounds().unwrap();
        assert_relative_eq!(min, Vec3::new(-1.0, -2.0, -3.0), epsilon = 1e-6);
        assert_relative_eq!(max, Vec3::new(1.0, 2.0, 3.0), epsilon = 1e-6);
    }

    #[test]
    fn test_box_winding_matches_normals() {
        let mesh = BoxGeometry::new(1.0, 1.0, 1.0).to_mesh();
        for triangle in mesh.indices.chunks_exact(3) {
            let [a, b, c] = [triangle[0], triangle[1], triangle[2]].map(|i| mesh.vertices[i as usize]);
            let face = (b.position_vec() - a.position_vec()).cross(&(c.position_vec() - a.position_vec()));
            assert!(face.dot(&a.normal_vec()) > 0.0);
        }
    }
}
