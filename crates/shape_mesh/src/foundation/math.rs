//! Math utilities and types
//!
//! Provides the fundamental math types shared by the physics and render sides.

pub use nalgebra::{
    Vector3, Vector4,
    Matrix3, Matrix4,
    Quaternion,
    Unit,
};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
///
/// Physics bodies hand out rotations in this form. Values are carried through
/// unchanged, so a quaternion built with [`Unit::new_unchecked`] keeps its
/// exact components even when it is not normalized.
pub type Quat = Unit<Quaternion<f32>>;

/// Build a rotation from raw `x, y, z, w` components without normalizing.
pub fn quat_from_xyzw(x: f32, y: f32, z: f32, w: f32) -> Quat {
    Quat::new_unchecked(Quaternion::new(w, x, y, z))
}

/// Build a unit rotation from `x, y, z, w` components, normalizing them.
///
/// `None` when the components have (near) zero length.
pub fn quat_normalized_from_xyzw(x: f32, y: f32, z: f32, w: f32) -> Option<Quat> {
    Quat::try_new(Quaternion::new(w, x, y, z), f32::EPSILON)
}

/// Raw `[x, y, z, w]` components of a rotation, scalar last.
pub fn quat_to_xyzw(rotation: &Quat) -> [f32; 4] {
    let q = rotation.quaternion();
    [q.i, q.j, q.k, q.w]
}

/// Transform representing position, rotation, and scale
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            ..Default::default()
        }
    }

    /// Convert to a transformation matrix (TRS order)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Apply this transform to a point
    pub fn transform_point(&self, point: &Point3) -> Point3 {
        self.to_matrix().transform_point(point)
    }

    /// Rotate a direction vector; translation and scale are ignored
    pub fn rotate_vector(&self, vector: &Vec3) -> Vec3 {
        self.rotation.transform_vector(vector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_raw_quaternion_components_survive() {
        let q = quat_from_xyzw(0.5, 0.25, 2.0, 3.0);
        assert_eq!(quat_to_xyzw(&q), [0.5, 0.25, 2.0, 3.0]);
    }

    #[test]
    fn test_normalized_quaternion_has_unit_length() {
        let q = quat_normalized_from_xyzw(0.0, 0.0, 0.0, 2.0).unwrap();
        assert_eq!(quat_to_xyzw(&q), [0.0, 0.0, 0.0, 1.0]);
        assert!(quat_normalized_from_xyzw(0.0, 0.0, 0.0, 0.0).is_none());
    }

    #[test]
    fn test_transform_point_applies_translation_after_rotation() {
        let rotation = Quat::from_axis_angle(&Vec3::y_axis(), std::f32::consts::FRAC_PI_2);
        let transform = Transform::from_position_rotation(Vec3::new(1.0, 0.0, 0.0), rotation);

        let moved = transform.transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(moved, Point3::new(1.0, 0.0, -1.0), epsilon = EPSILON);
    }

    #[test]
    fn test_rotate_vector_ignores_translation() {
        let transform = Transform::from_position(Vec3::new(5.0, 5.0, 5.0));
        assert_relative_eq!(transform.rotate_vector(&Vec3::x()), Vec3::x(), epsilon = EPSILON);
    }
}
