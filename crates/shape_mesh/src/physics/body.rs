//! Physics bodies
//!
//! A body pairs a world-space pose with a collision shape. Callers only ever
//! see bodies through the [`Body`] trait so that rigid and soft bodies can be
//! handled uniformly.

use std::fmt;
use std::sync::Arc;

use crate::foundation::math::{Quat, Vec3};
use super::shape::Shape;
use super::soft_body::SoftBodyState;

/// Identifier of a body within its simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Classification of a body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyType {
    /// Body with a fixed shape
    RigidBody,
    /// Body whose shape deforms with its vertex state
    SoftBody,
}

/// A simulated body
pub trait Body {
    /// Identifier of this body
    fn id(&self) -> BodyId;

    /// Collision shape in body-local space
    fn shape(&self) -> &dyn Shape;

    /// Rigid or soft
    fn body_type(&self) -> BodyType;

    /// World-space position
    fn position(&self) -> Vec3;

    /// World-space rotation
    fn rotation(&self) -> Quat;

    /// Deformable vertex state; only soft bodies have one
    fn soft_body_state(&self) -> Option<&SoftBodyState> {
        None
    }
}

/// Rigid body with a shared shape
#[derive(Debug, Clone)]
pub struct RigidBody {
    id: BodyId,
    shape: Arc<dyn Shape>,
    position: Vec3,
    rotation: Quat,
}

impl RigidBody {
    /// Creates a body at the origin with identity rotation
    pub fn new(id: BodyId, shape: Arc<dyn Shape>) -> Self {
        Self {
            id,
            shape,
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

    /// Rotate the body
    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }
}

impl Body for RigidBody {
    fn id(&self) -> BodyId {
        self.id
    }

    fn shape(&self) -> &dyn Shape {
        self.shape.as_ref()
    }

    fn body_type(&self) -> BodyType {
        BodyType::RigidBody
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn rotation(&self) -> Quat {
        self.rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{ShapeSubType, SphereShape};

    #[test]
    fn test_rigid_body_defaults() {
        let body = RigidBody::new(BodyId(3), Arc::new(SphereShape::new(1.0)));
        assert_eq!(body.id(), BodyId(3));
        assert_eq!(body.body_type(), BodyType::RigidBody);
        assert_eq!(body.shape().sub_type(), ShapeSubType::Sphere);
        assert_eq!(body.position(), Vec3::zeros());
        assert_eq!(body.rotation(), Quat::identity());
        assert!(body.soft_body_state().is_none());
    }

    #[test]
    fn test_pose_setters() {
        let mut body = RigidBody::new(BodyId(1), Arc::new(SphereShape::new(1.0)));
        body.set_position(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(body.position(), Vec3::new(1.0, 2.0, 3.0));
    }
}
