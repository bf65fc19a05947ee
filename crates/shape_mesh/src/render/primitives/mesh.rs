//! Vertex and index buffers
//!
//! [`Mesh`] is the backend-agnostic buffer pair every geometry tessellates
//! into. It knows nothing about materials or transforms; those live on
//! [`RenderableMesh`](crate::scene::RenderableMesh).

use bytemuck::{Pod, Zeroable};

use crate::foundation::math::{Point3, Transform, Vec3};

/// 3D vertex data structure for rendering
///
/// `#[repr(C)]` with only `f32` fields, so a vertex slice can be uploaded as
/// raw bytes (see [`Mesh::vertex_bytes`]).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position in 3D space
    pub position: [f32; 3],

    /// Normal vector
    pub normal: [f32; 3],

    /// Texture coordinates
    pub tex_coord: [f32; 2],
}

impl Vertex {
    /// Create a new vertex
    pub fn new(position: [f32; 3], normal: [f32; 3], tex_coord: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            tex_coord,
        }
    }

    /// Position as a vector
    pub fn position_vec(&self) -> Vec3 {
        Vec3::from(self.position)
    }

    /// Normal as a vector
    pub fn normal_vec(&self) -> Vec3 {
        Vec3::from(self.normal)
    }
}

/// Triangle mesh buffers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex data
    pub vertices: Vec<Vertex>,

    /// Index data for triangles, three per triangle
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a new mesh
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether the mesh has no triangles
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Raw vertex bytes, ready for a GPU upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Whether every index refers to an existing vertex
    pub fn indices_in_bounds(&self) -> bool {
        let count = self.vertices.len();
        self.indices.iter().all(|&index| (index as usize) < count)
    }

    /// Append a flat-shaded triangle with its own three vertices
    ///
    /// Degenerate triangles get a zero normal.
    pub fn push_flat_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        let normal = (b - a).cross(&(c - a)).try_normalize(f32::EPSILON).unwrap_or_else(Vec3::zeros);
        let base = self.vertices.len() as u32;
        for (corner, uv) in [(a, [0.0, 0.0]), (b, [1.0, 0.0]), (c, [0.0, 1.0])] {
            self.vertices.push(Vertex::new(corner.into(), normal.into(), uv));
        }
        self.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    /// Append another mesh after placing it with `transform`
    ///
    /// Positions get the full transform; normals only the rotation.
    pub fn append_transformed(&mut self, other: &Mesh, transform: &Transform) {
        let base = self.vertices.len() as u32;
        self.vertices.extend(other.vertices.iter().map(|vertex| {
            let position = transform.transform_point(&Point3::from(vertex.position_vec()));
            let normal = transform.rotate_vector(&vertex.normal_vec());
            Vertex::new(position.coords.into(), normal.into(), vertex.tex_coord)
        }));
        self.indices.extend(other.indices.iter().map(|&index| index + base));
    }

    /// Scale every position per axis and carry the normals along
    ///
    /// Normals go through the cofactor of the scale (the inverse transpose
    /// up to a positive factor), so seams and poles keep their own normals.
    /// A zero axis is allowed and flattens normals onto it. A mirroring scale
    /// (negative determinant) also flips the winding.
    pub fn scale(&mut self, scale: &Vec3) {
        let determinant = scale.x * scale.y * scale.z;
        let cofactor = Vec3::new(scale.y * scale.z, scale.x * scale.z, scale.x * scale.y);
        let normal_scale = if determinant < 0.0 { -cofactor } else { cofactor };

        for vertex in &mut self.vertices {
            vertex.position = vertex.position_vec().component_mul(scale).into();
            vertex.normal = vertex
                .normal_vec()
                .component_mul(&normal_scale)
                .try_normalize(f32::EPSILON)
                .unwrap_or_else(Vec3::zeros)
                .into();
        }
        if determinant < 0.0 {
            for triangle in self.indices.chunks_exact_mut(3) {
                triangle.swap(1, 2);
            }
        }
    }

    /// Replace every normal by the normalized sum of the adjacent face normals
    ///
    /// Face normals are area-weighted. Vertices shared between faces therefore
    /// end up smooth; meshes built from [`push_flat_triangle`](Self::push_flat_triangle)
    /// stay flat because no vertex is shared.
    pub fn recompute_smooth_normals(&mut self) {
        let mut accumulated = vec![Vec3::zeros(); self.vertices.len()];
        for triangle in self.indices.chunks_exact(3) {
            let [a, b, c] = [triangle[0], triangle[1], triangle[2]].map(|i| i as usize);
            let (Some(pa), Some(pb), Some(pc)) = (self.vertices.get(a), self.vertices.get(b), self.vertices.get(c)) else {
                continue;
            };
            let face = (pb.position_vec() - pa.position_vec()).cross(&(pc.position_vec() - pa.position_vec()));
            accumulated[a] += face;
            accumulated[b] += face;
            accumulated[c] += face;
        }
        for (vertex, normal) in self.vertices.iter_mut().zip(accumulated) {
            vertex.normal = normal.try_normalize(f32::EPSILON).unwrap_or_else(Vec3::zeros).into();
        }
    }

    /// Axis-aligned bounds as `(min, max)`, `None` when there are no vertices
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = self.vertices.first()?.position_vec();
        Some(self.vertices.iter().fold((first, first), |(min, max), vertex| {
            let p = vertex.position_vec();
            (min.inf(&p), max.sup(&p))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    use crate::foundation::math::Quat;

    fn unit_triangle() -> Mesh {
        let mut mesh = Mesh::default();
        mesh.push_flat_triangle(Vec3::zeros(), Vec3::x(), Vec3::y());
        mesh
    }

    #[test]
    fn test_flat_triangle_normal() {
        let mesh = unit_triangle();
        assert_eq!(mesh.vertices.len(), 3);
        assert_eq!(mesh.indices, vec![0, 1, 2]);
        for vertex in &mesh.vertices {
            assert_relative_eq!(vertex.normal_vec(), Vec3::z(), epsilon = 1e-6);
        }
    }

    #[test]
    fn test_vertex_bytes_length() {
        let mesh = unit_triangle();
        assert_eq!(mesh.vertex_bytes().len(), 3 * std::mem::size_of::<Vertex>());
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
    }

    #[test]
    fn test_append_transformed_offsets_indices_and_positions() {
        let mut mesh = unit_triangle();
        let transform = Transform::from_position(Vec3::new(0.0, 0.0, 5.0));
        mesh.append_transformed(&unit_triangle(), &transform);

        assert_eq!(mesh.indices, vec![0, 1, 2, 3, 4, 5]);
        assert_relative_eq!(mesh.vertices[3].position_vec(), Vec3::new(0.0, 0.0, 5.0), epsilon = 1e-6);
        assert!(mesh.indices_in_bounds());
    }

    #[test]
    fn test_append_transformed_rotates_normals() {
        let mut mesh = Mesh::default();
        let rotation = Quat::from_axis_angle(&Vec3::x_axis(), std::f32::consts::FRAC_PI_2);
        mesh.append_transformed(&unit_triangle(), &Transform::from_position_rotation(Vec3::zeros(), rotation));
        assert_relative_eq!(mesh.vertices[0].normal_vec(), -Vec3::y(), epsilon = 1e-6);
    }

    #[test]
    fn test_scale_and_bounds() {
        let mut mesh = unit_triangle();
        mesh.scale(&Vec3::new(2.0, 3.0, 1.0));
        let (min, max) = mesh.bounds().unwrap();
        assert_relative_eq!(min, Vec3::zeros(), epsilon = 1e-6);
        assert_relative_eq!(max, Vec3::new(2.0, 3.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(mesh.vertices[0].normal_vec(), Vec3::z(), epsilon = 1e-6);
    }

    #[test]
    fn test_scaled_sphere_normals_follow_ellipsoid() {
        use crate::render::SphereGeometry;

        let scale = Vec3::new(2.0, 1.0, 0.5);
        let mut mesh = SphereGeometry::new(1.0, 16, 8).to_mesh();
        mesh.scale(&scale);
        for vertex in &mesh.vertices {
            let unit_position = vertex.position_vec().component_div(&scale);
            let expected = unit_position.component_div(&scale).normalize();
            assert_relative_eq!(vertex.normal_vec(), expected, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_mirrored_scale_flips_normal_and_winding() {
        let mut mesh = unit_triangle();
        mesh.scale(&Vec3::new(1.0, 1.0, -1.0));
        assert_eq!(mesh.indices, vec![0, 2, 1]);
        assert_relative_eq!(mesh.vertices[0].normal_vec(), -Vec3::z(), epsilon = 1e-6);
    }

    #[test]
    fn test_empty_mesh_has_no_bounds() {
        assert!(Mesh::default().bounds().is_none());
        assert!(Mesh::default().is_empty());
    }
}
