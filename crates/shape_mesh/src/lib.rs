//! # Shape Mesh
//!
//! Builds renderable meshes from physics bodies so a simulation can be drawn.
//!
//! ## Features
//!
//! - **Primitive shapes**: boxes, spheres, capsules and cylinders map onto
//!   parametric geometries with fixed tessellation
//! - **Everything else**: convex hulls, triangle meshes, compounds and scaled
//!   shapes are triangulated into buffer geometry
//! - **Soft bodies**: drawn from their current vertex state
//! - **Snapshots**: each mesh copies the body's pose at build time
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use shape_mesh::prelude::*;
//!
//! fn main() -> Result<(), MeshBuildError> {
//!     let body = RigidBody::new(BodyId(1), Arc::new(BoxShape::new(Vec3::new(1.0, 2.0, 3.0))))
//!         .with_position(Vec3::new(0.0, 5.0, 0.0));
//!
//!     let mesh = build_mesh_for_body(&body, Color::from_hex(0xff8800), &PhysicsTypes::new())?;
//!     assert_eq!(mesh.position(), Vec3::new(0.0, 5.0, 0.0));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::cast_precision_loss, clippy::cast_possible_truncation)]

pub mod foundation;
pub mod config;
pub mod physics;
pub mod render;
pub mod scene;
pub mod debug;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        foundation::math::{Vec3, Quat, Transform, quat_from_xyzw, quat_to_xyzw},
        physics::{
            Body, BodyId, BodyType, PhysicsTypes, Shape, ShapeSubType,
            RigidBody, SoftBody, SoftBodyState,
            BoxShape, SphereShape, CapsuleShape, CylinderShape,
            ConvexHullShape, MeshShape, StaticCompoundShape, ScaledShape,
        },
        render::{Color, Geometry, Mesh, PhongMaterial},
        scene::RenderableMesh,
        debug::{build_mesh_for_body, BodyMeshBuilder, MeshBuildError},
    };
}
