//! Physics module: bodies, collision shapes, and the shape type registry
//!
//! Shapes live in body-local space. A body carries its world pose and a
//! shared handle to its shape; soft bodies additionally carry deformable
//! vertex state.

pub mod shape;
pub mod body;
pub mod soft_body;
pub mod registry;

pub use shape::{
    Shape,
    ShapeSubType,
    TypedShape,
    BoxShape,
    SphereShape,
    CapsuleShape,
    CylinderShape,
    ConvexHullShape,
    MeshShape,
    StaticCompoundShape,
    CompoundChild,
    ScaledShape,
};
pub use body::{Body, BodyId, BodyType, RigidBody};
pub use soft_body::{ClothSizeError, SoftBody, SoftBodyShape, SoftBodyState, SoftBodyVertex};
pub use registry::{PhysicsTypes, ShapeCastError};
