//! Renderable geometry
//!
//! Parametric geometries keep the parameters they were built from, which is
//! what the mesh builders and their tests reason about. Vertex buffers are
//! only generated on [`Geometry::to_mesh`].

pub mod box_geometry;
pub mod sphere;
pub mod capsule;
pub mod cylinder;

use std::fmt;

pub use box_geometry::BoxGeometry;
pub use sphere::SphereGeometry;
pub use capsule::CapsuleGeometry;
pub use cylinder::CylinderGeometry;

use crate::render::primitives::Mesh;

/// Geometry built directly from vertex and index buffers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BufferGeometry {
    /// The buffers
    pub mesh: Mesh,
}

impl BufferGeometry {
    /// Wraps existing buffers
    pub fn new(mesh: Mesh) -> Self {
        Self { mesh }
    }
}

/// Any geometry a renderable mesh can carry
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Axis-aligned box
    Box(BoxGeometry),
    /// UV sphere
    Sphere(SphereGeometry),
    /// Capsule along Y
    Capsule(CapsuleGeometry),
    /// Cylinder along Y
    Cylinder(CylinderGeometry),
    /// Explicit buffers
    Buffer(BufferGeometry),
}

impl Geometry {
    /// Short name of the geometry kind
    pub fn kind(&self) -> GeometryKind {
        match self {
            Self::Box(_) => GeometryKind::Box,
            Self::Sphere(_) => GeometryKind::Sphere,
            Self::Capsule(_) => GeometryKind::Capsule,
            Self::Cylinder(_) => GeometryKind::Cylinder,
            Self::Buffer(_) => GeometryKind::Buffer,
        }
    }

    /// Vertex and index buffers for this geometry
    pub fn to_mesh(&self) -> Mesh {
        match self {
            Self::Box(geometry) => geometry.to_mesh(),
            Self::Sphere(geometry) => geometry.to_mesh(),
            Self::Capsule(geometry) => geometry.to_mesh(),
            Self::Cylinder(geometry) => geometry.to_mesh(),
            Self::Buffer(geometry) => geometry.mesh.clone(),
        }
    }
}

impl From<BoxGeometry> for Geometry {
    fn from(geometry: BoxGeometry) -> Self {
        Self::Box(geometry)
    }
}

impl From<SphereGeometry> for Geometry {
    fn from(geometry: SphereGeometry) -> Self {
        Self::Sphere(geometry)
    }
}

impl From<CapsuleGeometry> for Geometry {
    fn from(geometry: CapsuleGeometry) -> Self {
        Self::Capsule(geometry)
    }
}

impl From<CylinderGeometry> for Geometry {
    fn from(geometry: CylinderGeometry) -> Self {
        Self::Cylinder(geometry)
    }
}

impl From<Mesh> for Geometry {
    fn from(mesh: Mesh) -> Self {
        Self::Buffer(BufferGeometry::new(mesh))
    }
}

/// Discriminant of [`Geometry`], handy for logging and assertions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    /// [`Geometry::Box`]
    Box,
    /// [`Geometry::Sphere`]
    Sphere,
    /// [`Geometry::Capsule`]
    Capsule,
    /// [`Geometry::Cylinder`]
    Cylinder,
    /// [`Geometry::Buffer`]
    Buffer,
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Box => "box",
            Self::Sphere => "sphere",
            Self::Capsule => "capsule",
            Self::Cylinder => "cylinder",
            Self::Buffer => "buffer",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_geometry_returns_stored_mesh() {
        let mesh = BoxGeometry::new(1.0, 1.0, 1.0).to_mesh();
        let geometry = Geometry::from(mesh.clone());
        assert_eq!(geometry.kind(), GeometryKind::Buffer);
        assert_eq!(geometry.to_mesh(), mesh);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Geometry::from(SphereGeometry::new(1.0, 8, 8)).kind().to_string(), "sphere");
    }
}
