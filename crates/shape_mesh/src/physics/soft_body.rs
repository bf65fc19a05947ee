//! Soft bodies and their deformable vertex state

use thiserror::Error;

use crate::foundation::math::{Quat, Vec3};
use super::body::{Body, BodyId, BodyType};
use super::shape::{Shape, ShapeSubType};

/// One simulated vertex of a soft body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoftBodyVertex {
    /// Position relative to the body position
    pub position: Vec3,
    /// Linear velocity
    pub velocity: Vec3,
    /// Inverse mass; zero pins the vertex in place
    pub inv_mass: f32,
}

impl SoftBodyVertex {
    /// Creates a resting vertex with unit mass
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::zeros(),
            inv_mass: 1.0,
        }
    }

    /// Builder pattern: set inverse mass
    pub fn with_inv_mass(mut self, inv_mass: f32) -> Self {
        self.inv_mass = inv_mass;
        self
    }
}

/// Cloth dimensions whose vertex count overflows the `u32` index range
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Cloth of {columns} x {rows} vertices exceeds the u32 index range")]
pub struct ClothSizeError {
    /// Requested vertices along X
    pub columns: u32,
    /// Requested vertices along Z
    pub rows: u32,
}

/// Current vertices and fixed face topology of a soft body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SoftBodyState {
    /// Simulated vertices
    pub vertices: Vec<SoftBodyVertex>,
    /// Triangles as counter-clockwise vertex index triples
    pub faces: Vec<[u32; 3]>,
}

impl SoftBodyState {
    /// Creates state from vertices and faces
    pub fn new(vertices: Vec<SoftBodyVertex>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Rectangular cloth in the local XZ plane, centered on the origin
    ///
    /// `columns` and `rows` count vertices along X and Z; both must be at least 2
    /// for any face to exist. With `pin_top_edge` the first row gets infinite mass.
    /// Fails when `columns * rows` does not fit a `u32` vertex index.
    pub fn cloth(columns: u32, rows: u32, spacing: f32, pin_top_edge: bool) -> Result<Self, ClothSizeError> {
        let vertex_count = columns.checked_mul(rows).ok_or(ClothSizeError { columns, rows })?;
        let offset_x = (columns.saturating_sub(1)) as f32 * spacing * 0.5;
        let offset_z = (rows.saturating_sub(1)) as f32 * spacing * 0.5;

        let mut vertices = Vec::with_capacity(vertex_count as usize);
        for z in 0..rows {
            for x in 0..columns {
                let position = Vec3::new(x as f32 * spacing - offset_x, 0.0, z as f32 * spacing - offset_z);
                let inv_mass = if pin_top_edge && z == 0 { 0.0 } else { 1.0 };
                vertices.push(SoftBodyVertex::new(position).with_inv_mass(inv_mass));
            }
        }

        let mut faces = Vec::new();
        for z in 0..rows.saturating_sub(1) {
            for x in 0..columns.saturating_sub(1) {
                let a = z * columns + x;
                let b = a + 1;
                let c = a + columns;
                let d = c + 1;
                // Wound so the face normal points along +Y
                faces.push([a, c, b]);
                faces.push([b, c, d]);
            }
        }

        Ok(Self { vertices, faces })
    }
}

/// Shape reported by soft bodies; it holds no geometry of its own
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SoftBodyShape;

crate::physics::shape::typed_shape!(SoftBodyShape, ShapeSubType::SoftBody);

/// Deformable body
#[derive(Debug, Clone)]
pub struct SoftBody {
    id: BodyId,
    shape: SoftBodyShape,
    state: SoftBodyState,
    position: Vec3,
    rotation: Quat,
}

impl SoftBody {
    /// Creates a soft body at the origin
    pub fn new(id: BodyId, state: SoftBodyState) -> Self {
        Self {
            id,
            shape: SoftBodyShape,
            state,
            position: Vec3::zeros(),
            rotation: Quat::identity(),
        }
    }

    /// Builder pattern: set position
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Builder pattern: set rotation
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Move the body
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Mutable access to the vertex state
    pub fn state_mut(&mut self) -> &mut SoftBodyState {
        &mut self.state
    }
}

impl Body for SoftBody {
    fn id(&self) -> BodyId {
        self.id
    }

    fn shape(&self) -> &dyn Shape {
        &self.shape
    }

    fn body_type(&self) -> BodyType {
        BodyType::SoftBody
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn soft_body_state(&self) -> Option<&SoftBodyState> {
        Some(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cloth_topology() {
        let cloth = SoftBodyState::cloth(4, 3, 0.5, false).unwrap();
        assert_eq!(cloth.vertices.len(), 12);
        assert_eq!(cloth.faces.len(), 3 * 2 * 2);
        for face in &cloth.faces {
            assert!(face.iter().all(|&i| (i as usize) < cloth.vertices.len()));
        }
    }

    #[test]
    fn test_cloth_face_normals_point_up() {
        let cloth = SoftBodyState::cloth(2, 2, 1.0, false).unwrap();
        for face in &cloth.faces {
            let [a, b, c] = face.map(|i| cloth.vertices[i as usize].position);
            let normal = (b - a).cross(&(c - a));
            assert!(normal.y > 0.0);
        }
    }

    #[test]
    fn test_cloth_pins_first_row() {
        let cloth = SoftBodyState::cloth(3, 2, 1.0, true).unwrap();
        assert!(cloth.vertices[..3].iter().all(|v| v.inv_mass == 0.0));
        assert!(cloth.vertices[3..].iter().all(|v| v.inv_mass == 1.0));
    }

    #[test]
    fn test_oversized_cloth_is_rejected() {
        assert_eq!(
            SoftBodyState::cloth(70_000, 70_000, 0.1, false).unwrap_err(),
            ClothSizeError { columns: 70_000, rows: 70_000 }
        );
    }

    #[test]
    fn test_soft_body_reports_soft_shape() {
        let body = SoftBody::new(BodyId(9), SoftBodyState::cloth(2, 2, 1.0, false).unwrap());
        assert_eq!(body.body_type(), BodyType::SoftBody);
        assert_eq!(body.shape().sub_type(), ShapeSubType::SoftBody);
        assert!(body.soft_body_state().is_some());
    }
}
