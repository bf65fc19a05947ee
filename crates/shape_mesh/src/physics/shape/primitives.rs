//! Primitive collision shapes
//!
//! Round shapes are aligned with the local Y axis and centered on the origin.

use crate::foundation::math::Vec3;
use super::ShapeSubType;

/// Box collision shape
#[derive(Debug, Clone, PartialEq)]
pub struct BoxShape {
    half_extent: Vec3,
}

impl BoxShape {
    /// Creates a box from its half extents
    pub fn new(half_extent: Vec3) -> Self {
        Self { half_extent }
    }

    /// Half the size of the box along each axis
    pub fn half_extent(&self) -> Vec3 {
        self.half_extent
    }
}

typed_shape!(BoxShape, ShapeSubType::Box);

/// Sphere collision shape
#[derive(Debug, Clone, PartialEq)]
pub struct SphereShape {
    radius: f32,
}

impl SphereShape {
    /// Creates a sphere with the given radius
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    /// Radius of the sphere
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

typed_shape!(SphereShape, ShapeSubType::Sphere);

/// Capsule collision shape: a Y-aligned cylinder capped by two hemispheres
#[derive(Debug, Clone, PartialEq)]
pub struct CapsuleShape {
    half_height_of_cylinder: f32,
    radius: f32,
}

impl CapsuleShape {
    /// Creates a capsule from the half height of its cylinder part and its radius
    pub fn new(half_height_of_cylinder: f32, radius: f32) -> Self {
        Self { half_height_of_cylinder, radius }
    }

    /// Radius of the cylinder part and the caps
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Half the height of the cylinder part, caps excluded
    pub fn half_height_of_cylinder(&self) -> f32 {
        self.half_height_of_cylinder
    }
}

typed_shape!(CapsuleShape, ShapeSubType::Capsule);

/// Cylinder collision shape aligned with the Y axis
#[derive(Debug, Clone, PartialEq)]
pub struct CylinderShape {
    half_height: f32,
    radius: f32,
}

impl CylinderShape {
    /// Creates a cylinder from its half height and radius
    pub fn new(half_height: f32, radius: f32) -> Self {
        Self { half_height, radius }
    }

    /// Radius of both end discs
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Half the height of the cylinder
    pub fn half_height(&self) -> f32 {
        self.half_height
    }
}

typed_shape!(CylinderShape, ShapeSubType::Cylinder);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::Shape;

    #[test]
    fn test_primitive_tags() {
        assert_eq!(BoxShape::new(Vec3::new(1.0, 1.0, 1.0)).sub_type(), ShapeSubType::Box);
        assert_eq!(SphereShape::new(1.0).sub_type(), ShapeSubType::Sphere);
        assert_eq!(CapsuleShape::new(1.0, 0.5).sub_type(), ShapeSubType::Capsule);
        assert_eq!(CylinderShape::new(1.0, 0.5).sub_type(), ShapeSubType::Cylinder);
    }

    #[test]
    fn test_capsule_argument_order() {
        let capsule = CapsuleShape::new(2.0, 0.5);
        assert_eq!(capsule.half_height_of_cylinder(), 2.0);
        assert_eq!(capsule.radius(), 0.5);
    }
}
