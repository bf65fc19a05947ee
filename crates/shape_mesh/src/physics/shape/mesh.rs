//! Polyhedral collision shapes
//!
//! Both shapes keep their raw geometry in body-local space. Indices are not
//! validated at construction; consumers check them when they walk the faces.

use crate::foundation::math::Vec3;
use super::ShapeSubType;

/// Convex hull described by its points and polygonal faces
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexHullShape {
    points: Vec<Vec3>,
    faces: Vec<Vec<u32>>,
}

impl ConvexHullShape {
    /// Creates a hull from points and faces
    ///
    /// Each face lists point indices counter-clockwise when seen from outside.
    pub fn new(points: Vec<Vec3>, faces: Vec<Vec<u32>>) -> Self {
        Self { points, faces }
    }

    /// Hull points in local space
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Hull faces as polygons of point indices
    pub fn faces(&self) -> &[Vec<u32>] {
        &self.faces
    }
}

typed_shape!(ConvexHullShape, ShapeSubType::ConvexHull);

/// Triangle mesh shape
#[derive(Debug, Clone, PartialEq)]
pub struct MeshShape {
    vertices: Vec<Vec3>,
    triangles: Vec<[u32; 3]>,
}

impl MeshShape {
    /// Creates a mesh from vertices and counter-clockwise triangles
    pub fn new(vertices: Vec<Vec3>, triangles: Vec<[u32; 3]>) -> Self {
        Self { vertices, triangles }
    }

    /// Mesh vertices in local space
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Triangles as vertex index triples
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }
}

typed_shape!(MeshShape, ShapeSubType::Mesh);
