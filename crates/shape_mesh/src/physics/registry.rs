//! Shape type registry
//!
//! Narrowing a `&dyn Shape` to a concrete shape always goes through
//! [`PhysicsTypes`], which checks the reported sub-type tag before touching the
//! concrete type. A tag that disagrees with the requested type is an error,
//! never a silent `None`.

use thiserror::Error;

use super::body::{Body, BodyId, BodyType};
use super::shape::{Shape, ShapeSubType, TypedShape};
use super::soft_body::SoftBodyState;

/// Failure to narrow a shape or body to the requested type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeCastError {
    /// The shape reports a different sub-type than the requested type
    #[error("cannot cast {actual} shape to {expected} shape")]
    SubTypeMismatch {
        /// Sub-type of the requested type
        expected: ShapeSubType,
        /// Sub-type the shape reports
        actual: ShapeSubType,
    },

    /// The tag agrees but the concrete type does not
    #[error("shape reports sub-type {sub_type} but is a different concrete type")]
    ConcreteTypeMismatch {
        /// The agreed sub-type
        sub_type: ShapeSubType,
    },

    /// The body has no soft-body state
    #[error("body {0} is not a soft body")]
    NotSoftBody(BodyId),
}

/// Registry of shape sub-types and checked casts between shape types
#[derive(Debug, Clone, Copy, Default)]
pub struct PhysicsTypes {
    _private: (),
}

impl PhysicsTypes {
    /// Creates the registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Sub-type tag of a shape
    pub fn sub_type(&self, shape: &dyn Shape) -> ShapeSubType {
        shape.sub_type()
    }

    /// Narrows `shape` to the concrete type `T`
    pub fn cast<'a, T: TypedShape>(&self, shape: &'a dyn Shape) -> Result<&'a T, ShapeCastError> {
        let actual = shape.sub_type();
        if actual != T::SUB_TYPE {
            return Err(ShapeCastError::SubTypeMismatch {
                expected: T::SUB_TYPE,
                actual,
            });
        }

        shape
            .as_any()
            .downcast_ref::<T>()
            .ok_or(ShapeCastError::ConcreteTypeMismatch { sub_type: actual })
    }

    /// Deformable vertex state of a soft body
    pub fn soft_body_state<'a>(&self, body: &'a dyn Body) -> Result<&'a SoftBodyState, ShapeCastError> {
        if body.body_type() != BodyType::SoftBody {
            return Err(ShapeCastError::NotSoftBody(body.id()));
        }
        body.soft_body_state()
            .ok_or_else(|| ShapeCastError::NotSoftBody(body.id()))
    }
}
