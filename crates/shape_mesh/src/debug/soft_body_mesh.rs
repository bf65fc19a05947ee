//! Meshes for soft bodies
//!
//! A soft body's surface is its current vertex positions joined by its face
//! list. Vertices are shared between faces, so normals come out smooth.

use log::trace;

use crate::physics::{Body, PhysicsTypes, SoftBodyState};
use crate::render::{Geometry, Mesh, PhongMaterial, Vertex};
use crate::scene::RenderableMesh;

use super::body_mesh::SoftBodyMeshBuilder;
use super::{check_face, MeshBuildError};

/// Default [`SoftBodyMeshBuilder`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SoftBodyMeshFactory;

/// Buffers for the current state of a soft body, in body-local space
pub fn soft_body_buffers(state: &SoftBodyState) -> Result<Mesh, MeshBuildError> {
    let vertex_count = state.vertices.len();
    let mut indices = Vec::with_capacity(state.faces.len() * 3);
    for (face, triangle) in state.faces.iter().enumerate() {
        check_face(face, triangle, vertex_count)?;
        indices.extend_from_slice(triangle);
    }

    let vertices = state
        .vertices
        .iter()
        .map(|vertex| Vertex::new(vertex.position.into(), [0.0; 3], [0.0; 2]))
        .collect();

    let mut mesh = Mesh::new(vertices, indices);
    mesh.recompute_smooth_normals();
    Ok(mesh)
}

impl SoftBodyMeshBuilder for SoftBodyMeshFactory {
    fn build_soft_body_mesh(
        &self,
        body: &dyn Body,
        material: PhongMaterial,
        types: &PhysicsTypes,
    ) -> Result<RenderableMesh, MeshBuildError> {
        let state = types.soft_body_state(body)?;
        let mesh = soft_body_buffers(state)?;
        trace!(
            "Soft body {} meshed with {} vertices, {} faces",
            body.id(),
            mesh.vertices.len(),
            mesh.triangle_count()
        );
        Ok(RenderableMesh::new(Geometry::from(mesh), material))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use approx::assert_relative_eq;

    use crate::foundation::math::{Transform, Vec3};
    use crate::physics::{BodyId, RigidBody, ShapeCastError, SoftBody, SoftBodyVertex, SphereShape};

    #[test]
    fn test_cloth_buffers_share_vertices() {
        let state = SoftBodyState::cloth(4, 4, 0.25, false).unwrap();
        let mesh = soft_body_buffers(&state).unwrap();
        assert_eq!(mesh.vertices.len(), 16);
        assert_eq!(mesh.triangle_count(), 18);
        for vertex in &mesh.vertices {
            assert_relative_eq!(vertex.normal_vec(), Vec3::y(), epsilon = 1e-6);
        }
    }

    #[test]
    fn test_buffers_follow_vertex_state() {
        let mut body = SoftBody::new(BodyId(5), SoftBodyState::cloth(2, 2, 1.0, false).unwrap());
        let before = soft_body_buffers(body.soft_body_state().unwrap()).unwrap();

        body.state_mut().vertices[0].position.y = -1.0;
        let after = soft_body_buffers(body.soft_body_state().unwrap()).unwrap();

        assert_eq!(before.vertices[0].position[1], 0.0);
        assert_eq!(after.vertices[0].position[1], -1.0);
    }

    #[test]
    fn test_invalid_face_is_rejected() {
        let state = SoftBodyState::new(vec![SoftBodyVertex::new(Vec3::zeros())], vec![[0, 0, 3]]);
        assert_eq!(
            soft_body_buffers(&state).unwrap_err(),
            MeshBuildError::InvalidFace { face: 0, index: 3, vertex_count: 1 }
        );
    }

    #[test]
    fn test_mesh_keeps_material_and_identity_transform() {
        let body = SoftBody::new(BodyId(6), SoftBodyState::cloth(3, 3, 1.0, false).unwrap())
            .with_position(Vec3::new(0.0, 10.0, 0.0));
        let material = PhongMaterial::default().with_name("cloth");

        let mesh = SoftBodyMeshFactory
            .build_soft_body_mesh(&body, material.clone(), &PhysicsTypes::new())
            .unwrap();
        assert_eq!(mesh.material, material);
        assert_eq!(mesh.transform, Transform::identity());
    }

    #[test]
    fn test_rigid_body_is_not_a_soft_body() {
        let body = RigidBody::new(BodyId(8), Arc::new(SphereShape::new(1.0)));
        let err = SoftBodyMeshFactory
            .build_soft_body_mesh(&body, PhongMaterial::default(), &PhysicsTypes::new())
            .unwrap_err();
        assert_eq!(err, MeshBuildError::ShapeCast(ShapeCastError::NotSoftBody(BodyId(8))));
    }
}
