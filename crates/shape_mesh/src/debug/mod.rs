//! Physics debug visualization
//!
//! Turns simulated bodies into renderable meshes that match their collision
//! shapes. The entry point is [`build_mesh_for_body`]; [`BodyMeshBuilder`]
//! exposes the same dispatch with replaceable collaborators for shapes that
//! have no primitive geometry.
//!
//! # Module Organization
//!
//! - [`body_mesh`] - shape sub-type dispatch and pose copy
//! - [`shape_geometry`] - triangulation of hulls, meshes, compounds and scaled shapes
//! - [`soft_body_mesh`] - meshes from deformable vertex state

pub mod body_mesh;
pub mod shape_geometry;
pub mod soft_body_mesh;

use thiserror::Error;

use crate::physics::ShapeCastError;

pub use body_mesh::{
    build_mesh_for_body,
    BodyMeshBuilder,
    ShapeGeometryBuilder,
    SoftBodyMeshBuilder,
};
pub use shape_geometry::ConvexShapeGeometry;
pub use soft_body_mesh::SoftBodyMeshFactory;

/// Errors raised while building a mesh for a body
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshBuildError {
    /// The shape or body could not be narrowed to the type its tag promised
    #[error("shape cast failed: {0}")]
    ShapeCast(#[from] ShapeCastError),

    /// A face refers to a vertex that does not exist
    #[error("face {face} refers to vertex {index}, but only {vertex_count} vertices exist")]
    InvalidFace {
        /// Position of the face in its list
        face: usize,
        /// The offending vertex index
        index: u32,
        /// Number of vertices available
        vertex_count: usize,
    },

    /// A polygon face has fewer than three corners
    #[error("face {face} has {corners} corners, at least 3 are required")]
    DegenerateFace {
        /// Position of the face in its list
        face: usize,
        /// Number of corners the face has
        corners: usize,
    },
}

/// Checks that every index of `face` is below `vertex_count`
pub(crate) fn check_face(face: usize, indices: &[u32], vertex_count: usize) -> Result<(), MeshBuildError> {
    match indices.iter().find(|&&index| index as usize >= vertex_count) {
        Some(&index) => Err(MeshBuildError::InvalidFace { face, index, vertex_count }),
        None => Ok(()),
    }
}
