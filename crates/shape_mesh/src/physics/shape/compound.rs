//! Shapes composed from other shapes

use std::sync::Arc;

use crate::foundation::math::{Transform, Vec3};
use super::{Shape, ShapeSubType};

/// A child of a [`StaticCompoundShape`]
#[derive(Debug, Clone)]
pub struct CompoundChild {
    /// Placement of the child relative to the compound origin
    pub transform: Transform,
    /// The child shape
    pub shape: Arc<dyn Shape>,
}

impl CompoundChild {
    /// Creates a child placed with the given local transform
    pub fn new(transform: Transform, shape: Arc<dyn Shape>) -> Self {
        Self { transform, shape }
    }
}

/// Fixed collection of shapes, each with its own local transform
#[derive(Debug, Clone, Default)]
pub struct StaticCompoundShape {
    children: Vec<CompoundChild>,
}

impl StaticCompoundShape {
    /// Creates a compound from its children
    pub fn new(children: Vec<CompoundChild>) -> Self {
        Self { children }
    }

    /// Builder pattern: append a child
    pub fn with_child(mut self, transform: Transform, shape: Arc<dyn Shape>) -> Self {
        self.children.push(CompoundChild::new(transform, shape));
        self
    }

    /// The compound's children
    pub fn children(&self) -> &[CompoundChild] {
        &self.children
    }
}

typed_shape!(StaticCompoundShape, ShapeSubType::StaticCompound);

/// Another shape with a per-axis scale applied
#[derive(Debug, Clone)]
pub struct ScaledShape {
    inner: Arc<dyn Shape>,
    scale: Vec3,
}

impl ScaledShape {
    /// Wraps `inner` with the given scale
    pub fn new(inner: Arc<dyn Shape>, scale: Vec3) -> Self {
        Self { inner, scale }
    }

    /// The shape being scaled
    pub fn inner(&self) -> &dyn Shape {
        self.inner.as_ref()
    }

    /// Scale factor per axis
    pub fn scale(&self) -> Vec3 {
        self.scale
    }
}

typed_shape!(ScaledShape, ShapeSubType::Scaled);
