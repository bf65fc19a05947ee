//! Renderable mesh: geometry, material, and placement

use crate::foundation::math::{Mat4, Quat, Transform, Vec3};
use crate::render::{Geometry, Mesh, PhongMaterial};

/// A geometry drawn with a material at a world-space transform
///
/// Owns everything it references. Nothing ties it back to the body it was
/// built from; rebuilding is the only way to follow a moving body.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderableMesh {
    /// Shape of the object in local space
    pub geometry: Geometry,

    /// Surface appearance
    pub material: PhongMaterial,

    /// Placement in world space
    pub transform: Transform,
}

impl RenderableMesh {
    /// Create a mesh at the origin
    pub fn new(geometry: Geometry, material: PhongMaterial) -> Self {
        Self {
            geometry,
            material,
            transform: Transform::identity(),
        }
    }

    /// World-space position
    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    /// World-space rotation
    pub fn rotation(&self) -> Quat {
        self.transform.rotation
    }

    /// Set the world-space position
    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.transform.position = Vec3::new(x, y, z);
    }

    /// Set the world-space rotation from raw quaternion components
    ///
    /// The components are stored as given, without normalization.
    pub fn set_quaternion(&mut self, x: f32, y: f32, z: f32, w: f32) {
        self.transform.rotation = crate::foundation::math::quat_from_xyzw(x, y, z, w);
    }

    /// Model matrix (TRS order)
    pub fn model_matrix(&self) -> Mat4 {
        self.transform.to_matrix()
    }

    /// Geometry buffers moved into world space
    pub fn world_mesh(&self) -> Mesh {
        let mut world = Mesh::default();
        world.append_transformed(&self.geometry.to_mesh(), &self.transform);
        world
    }
}
