//! Collision shape abstractions
//!
//! Every shape reports a [`ShapeSubType`] tag. Code that needs the concrete
//! shape asks [`PhysicsTypes`](super::PhysicsTypes) for a checked cast; the tag
//! and the concrete type are expected to agree.
//!
//! # Module Organization
//!
//! - [`primitives`] - box, sphere, capsule and cylinder
//! - [`mesh`] - convex hulls and triangle meshes
//! - [`compound`] - shapes built from other shapes (compound, scaled)

/// Implements [`Shape`] for a [`TypedShape`] whose tag never changes.
macro_rules! typed_shape {
    ($ty:ty, $sub_type:expr) => {
        impl $crate::physics::shape::TypedShape for $ty {
            const SUB_TYPE: $crate::physics::shape::ShapeSubType = $sub_type;
        }

        impl $crate::physics::shape::Shape for $ty {
            fn sub_type(&self) -> $crate::physics::shape::ShapeSubType {
                $sub_type
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }
    };
}

pub(crate) use typed_shape;

pub mod primitives;
pub mod mesh;
pub mod compound;

use std::any::Any;
use std::fmt;

pub use primitives::{BoxShape, SphereShape, CapsuleShape, CylinderShape};
pub use mesh::{ConvexHullShape, MeshShape};
pub use compound::{StaticCompoundShape, CompoundChild, ScaledShape};

/// Geometric kind of a collision shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeSubType {
    /// Axis-aligned box described by its half extents
    Box,
    /// Sphere described by its radius
    Sphere,
    /// Capsule along the Y axis
    Capsule,
    /// Cylinder along the Y axis
    Cylinder,
    /// Convex hull of a point cloud
    ConvexHull,
    /// Triangle mesh
    Mesh,
    /// Fixed set of child shapes with local transforms
    StaticCompound,
    /// Another shape with a non-uniform scale applied
    Scaled,
    /// Shape of a soft body; its geometry lives in the body's vertex state
    SoftBody,
}

impl ShapeSubType {
    /// Whether this is one of the four primitive kinds
    pub fn is_primitive(self) -> bool {
        matches!(self, Self::Box | Self::Sphere | Self::Capsule | Self::Cylinder)
    }
}

impl fmt::Display for ShapeSubType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Box => "box",
            Self::Sphere => "sphere",
            Self::Capsule => "capsule",
            Self::Cylinder => "cylinder",
            Self::ConvexHull => "convex hull",
            Self::Mesh => "mesh",
            Self::StaticCompound => "static compound",
            Self::Scaled => "scaled",
            Self::SoftBody => "soft body",
        };
        f.write_str(name)
    }
}

/// A collision volume in body-local space
pub trait Shape: fmt::Debug + Send + Sync + 'static {
    /// The geometric kind of this shape
    fn sub_type(&self) -> ShapeSubType;

    /// Access to the concrete type for checked downcasts
    fn as_any(&self) -> &dyn Any;
}

/// A concrete shape type bound to exactly one sub-type tag
pub trait TypedShape: Shape + Sized {
    /// The tag every instance of this type reports
    const SUB_TYPE: ShapeSubType;
}
