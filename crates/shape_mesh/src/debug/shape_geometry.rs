//! Geometry for shapes without a primitive mapping
//!
//! Walks the shape's raw geometry and emits flat-shaded triangles. Composite
//! shapes recurse into their children, so primitives nested in a compound or
//! scaled shape are tessellated with the same fixed parameters the top-level
//! dispatch uses.

use log::{trace, warn};

use crate::physics::{
    ConvexHullShape,
    MeshShape,
    PhysicsTypes,
    ScaledShape,
    Shape,
    ShapeSubType,
    StaticCompoundShape,
};
use crate::render::{Geometry, Mesh};

use super::body_mesh::{box_geometry, capsule_geometry, cylinder_geometry, sphere_geometry, ShapeGeometryBuilder};
use super::{check_face, MeshBuildError};

/// Default [`ShapeGeometryBuilder`]: triangulates convex hulls, meshes,
/// compounds and scaled shapes into buffer geometry
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvexShapeGeometry;

impl ConvexShapeGeometry {
    /// Triangle buffers for `shape` in its local space
    pub fn build_mesh(&self, shape: &dyn Shape, types: &PhysicsTypes) -> Result<Mesh, MeshBuildError> {
        let mesh = match types.sub_type(shape) {
            ShapeSubType::Box => box_geometry(types.cast(shape)?).to_mesh(),
            ShapeSubType::Sphere => sphere_geometry(types.cast(shape)?).to_mesh(),
            ShapeSubType::Capsule => capsule_geometry(types.cast(shape)?).to_mesh(),
            ShapeSubType::Cylinder => cylinder_geometry(types.cast(shape)?).to_mesh(),
            ShapeSubType::ConvexHull => hull_mesh(types.cast(shape)?)?,
            ShapeSubType::Mesh => triangle_mesh(types.cast(shape)?)?,
            ShapeSubType::StaticCompound => self.compound_mesh(types.cast(shape)?, types)?,
            ShapeSubType::Scaled => self.scaled_mesh(types.cast(shape)?, types)?,
            ShapeSubType::SoftBody => {
                warn!("Soft body shape on a rigid body has no geometry; drawing nothing");
                Mesh::default()
            }
        };
        trace!("{} shape triangulated into {} triangles", shape.sub_type(), mesh.triangle_count());
        Ok(mesh)
    }

    fn compound_mesh(&self, compound: &StaticCompoundShape, types: &PhysicsTypes) -> Result<Mesh, MeshBuildError> {
        let mut mesh = Mesh::default();
        for child in compound.children() {
            let child_mesh = self.build_mesh(child.shape.as_ref(), types)?;
            mesh.append_transformed(&child_mesh, &child.transform);
        }
        Ok(mesh)
    }

    fn scaled_mesh(&self, scaled: &ScaledShape, types: &PhysicsTypes) -> Result<Mesh, MeshBuildError> {
        let mut mesh = self.build_mesh(scaled.inner(), types)?;
        mesh.scale(&scaled.scale());
        Ok(mesh)
    }
}

impl ShapeGeometryBuilder for ConvexShapeGeometry {
    fn build_geometry_for_shape(&self, shape: &dyn Shape, types: &PhysicsTypes) -> Result<Geometry, MeshBuildError> {
        Ok(Geometry::from(self.build_mesh(shape, types)?))
    }
}

/// Fan-triangulates every hull face
fn hull_mesh(hull: &ConvexHullShape) -> Result<Mesh, MeshBuildError> {
    let points = hull.points();
    let mut mesh = Mesh::default();
    for (face, polygon) in hull.faces().iter().enumerate() {
        if polygon.len() < 3 {
            return Err(MeshBuildError::DegenerateFace { face, corners: polygon.len() });
        }
        check_face(face, polygon, points.len())?;

        let first = points[polygon[0] as usize];
        for pair in polygon[1..].windows(2) {
            mesh.push_flat_triangle(first, points[pair[0] as usize], points[pair[1] as usize]);
        }
    }
    Ok(mesh)
}

fn triangle_mesh(shape: &MeshShape) -> Result<Mesh, MeshBuildError> {
    let vertices = shape.vertices();
    let mut mesh = Mesh::default();
    for (face, triangle) in shape.triangles().iter().enumerate() {
        check_face(face, triangle, vertices.len())?;
        let [a, b, c] = triangle.map(|index| vertices[index as usize]);
        mesh.push_flat_triangle(a, b, c);
    }
    Ok(mesh)
}
