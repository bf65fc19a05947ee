//! Body to mesh dispatch
//!
//! The four primitive shape kinds map straight onto parametric geometries
//! with fixed tessellation. Every other kind is handed to a collaborator:
//! soft bodies to a [`SoftBodyMeshBuilder`], everything else to a
//! [`ShapeGeometryBuilder`]. The soft-body check only runs for non-primitive
//! shapes, so a soft body reporting a primitive shape is drawn as that
//! primitive.
//!
//! The resulting mesh always receives the body's pose as it is at call time.

use log::debug;

use crate::foundation::math::quat_to_xyzw;
use crate::physics::{
    Body,
    BodyType,
    BoxShape,
    CapsuleShape,
    CylinderShape,
    PhysicsTypes,
    Shape,
    ShapeSubType,
    SphereShape,
};
use crate::render::{
    BoxGeometry,
    CapsuleGeometry,
    Color,
    CylinderGeometry,
    Geometry,
    PhongMaterial,
    SphereGeometry,
};
use crate::scene::RenderableMesh;

use super::shape_geometry::ConvexShapeGeometry;
use super::soft_body_mesh::SoftBodyMeshFactory;
use super::MeshBuildError;

/// Sphere segments around the Y axis
pub const SPHERE_WIDTH_SEGMENTS: u32 = 32;
/// Sphere segments from pole to pole
pub const SPHERE_HEIGHT_SEGMENTS: u32 = 32;
/// Capsule segments around the Y axis
pub const CAPSULE_RADIAL_SEGMENTS: u32 = 20;
/// Capsule segments along each cap
pub const CAPSULE_CAP_SEGMENTS: u32 = 10;
/// Cylinder segments around the Y axis
pub const CYLINDER_RADIAL_SEGMENTS: u32 = 20;
/// Cylinder segments along the Y axis
pub const CYLINDER_HEIGHT_SEGMENTS: u32 = 1;

/// Builds geometry for shapes without a primitive mapping
pub trait ShapeGeometryBuilder {
    /// Geometry approximating `shape` in its local space
    fn build_geometry_for_shape(&self, shape: &dyn Shape, types: &PhysicsTypes) -> Result<Geometry, MeshBuildError>;
}

/// Builds a complete mesh from a soft body's vertex state
pub trait SoftBodyMeshBuilder {
    /// Mesh for `body` drawn with `material`; the pose is applied by the caller
    fn build_soft_body_mesh(
        &self,
        body: &dyn Body,
        material: PhongMaterial,
        types: &PhysicsTypes,
    ) -> Result<RenderableMesh, MeshBuildError>;
}

impl<T: ShapeGeometryBuilder + ?Sized> ShapeGeometryBuilder for &T {
    fn build_geometry_for_shape(&self, shape: &dyn Shape, types: &PhysicsTypes) -> Result<Geometry, MeshBuildError> {
        (**self).build_geometry_for_shape(shape, types)
    }
}

impl<T: SoftBodyMeshBuilder + ?Sized> SoftBodyMeshBuilder for &T {
    fn build_soft_body_mesh(
        &self,
        body: &dyn Body,
        material: PhongMaterial,
        types: &PhysicsTypes,
    ) -> Result<RenderableMesh, MeshBuildError> {
        (**self).build_soft_body_mesh(body, material, types)
    }
}

/// Geometry for a box shape: full extents are twice the half extents
pub fn box_geometry(shape: &BoxShape) -> Geometry {
    let size = shape.half_extent() * 2.0;
    BoxGeometry::new(size.x, size.y, size.z).into()
}

/// Geometry for a sphere shape
pub fn sphere_geometry(shape: &SphereShape) -> Geometry {
    SphereGeometry::new(shape.radius(), SPHERE_WIDTH_SEGMENTS, SPHERE_HEIGHT_SEGMENTS).into()
}

/// Geometry for a capsule shape: the cylinder part is twice its half height
pub fn capsule_geometry(shape: &CapsuleShape) -> Geometry {
    CapsuleGeometry::new(
        shape.radius(),
        shape.half_height_of_cylinder() * 2.0,
        CAPSULE_CAP_SEGMENTS,
        CAPSULE_RADIAL_SEGMENTS,
    )
    .into()
}

/// Geometry for a cylinder shape with equal top and bottom radius
pub fn cylinder_geometry(shape: &CylinderShape) -> Geometry {
    let radius = shape.radius();
    CylinderGeometry::new(
        radius,
        radius,
        shape.half_height() * 2.0,
        CYLINDER_RADIAL_SEGMENTS,
        CYLINDER_HEIGHT_SEGMENTS,
    )
    .into()
}

/// Stateless body to mesh builder
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyMeshBuilder<G = ConvexShapeGeometry, S = SoftBodyMeshFactory> {
    shape_geometry: G,
    soft_body_mesh: S,
}

impl BodyMeshBuilder {
    /// Builder with the default collaborators
    pub fn new() -> Self {
        Self::default()
    }
}

impl<G: ShapeGeometryBuilder, S: SoftBodyMeshBuilder> BodyMeshBuilder<G, S> {
    /// Builder with custom collaborators
    pub fn with_collaborators(shape_geometry: G, soft_body_mesh: S) -> Self {
        Self { shape_geometry, soft_body_mesh }
    }

    /// Builds a mesh matching `body`'s shape, colored with `color`, placed at
    /// the body's current position and rotation
    ///
    /// Exactly one geometry branch runs. Cast and collaborator failures are
    /// returned as-is; no partial mesh is ever produced.
    pub fn build_mesh_for_body(
        &self,
        body: &dyn Body,
        color: Color,
        types: &PhysicsTypes,
    ) -> Result<RenderableMesh, MeshBuildError> {
        let material = PhongMaterial::new(color);
        let shape = body.shape();
        let sub_type = types.sub_type(shape);
        debug!("Building mesh for body {} ({} shape, {:?})", body.id(), sub_type, body.body_type());

        let mut mesh = match sub_type {
            ShapeSubType::Box => RenderableMesh::new(box_geometry(types.cast(shape)?), material),
            ShapeSubType::Sphere => RenderableMesh::new(sphere_geometry(types.cast(shape)?), material),
            ShapeSubType::Capsule => RenderableMesh::new(capsule_geometry(types.cast(shape)?), material),
            ShapeSubType::Cylinder => RenderableMesh::new(cylinder_geometry(types.cast(shape)?), material),
            _ if body.body_type() == BodyType::SoftBody => {
                self.soft_body_mesh.build_soft_body_mesh(body, material, types)?
            }
            _ => RenderableMesh::new(self.shape_geometry.build_geometry_for_shape(shape, types)?, material),
        };

        let position = body.position();
        mesh.set_position(position.x, position.y, position.z);
        let [x, y, z, w] = quat_to_xyzw(&body.rotation());
        mesh.set_quaternion(x, y, z, w);

        Ok(mesh)
    }
}

/// Builds a mesh for `body` with the default collaborators
///
/// See [`BodyMeshBuilder::build_mesh_for_body`].
pub fn build_mesh_for_body(body: &dyn Body, color: Color, types: &PhysicsTypes) -> Result<RenderableMesh, MeshBuildError> {
    BodyMeshBuilder::new().build_mesh_for_body(body, color, types)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;
    use std::cell::Cell;
    use std::sync::Arc;

    use approx::assert_relative_eq;

    use crate::foundation::math::{quat_from_xyzw, Quat, Vec3};
    use crate::physics::{
        BodyId,
        ConvexHullShape,
        RigidBody,
        ShapeCastError,
        SoftBody,
        SoftBodyState,
    };
    use crate::render::{GeometryKind, Mesh};

    const RED: u32 = 0xff0000;

    #[derive(Default)]
    struct CountingShapeGeometry {
        calls: Cell<usize>,
    }

    impl ShapeGeometryBuilder for CountingShapeGeometry {
        fn build_geometry_for_shape(&self, _shape: &dyn Shape, _types: &PhysicsTypes) -> Result<Geometry, MeshBuildError> {
            self.calls.set(self.calls.get() + 1);
            Ok(Geometry::from(Mesh::default()))
        }
    }

    #[derive(Default)]
    struct CountingSoftBodyMesh {
        calls: Cell<usize>,
    }

    impl SoftBodyMeshBuilder for CountingSoftBodyMesh {
        fn build_soft_body_mesh(
            &self,
            _body: &dyn Body,
            material: PhongMaterial,
            _types: &PhysicsTypes,
        ) -> Result<RenderableMesh, MeshBuildError> {
            self.calls.set(self.calls.get() + 1);
            Ok(RenderableMesh::new(Geometry::from(Mesh::default()), material))
        }
    }

    /// A soft body whose shape claims to be a primitive
    struct SoftBodyWithShape<S: Shape> {
        shape: S,
        state: SoftBodyState,
    }

    impl<S: Shape> Body for SoftBodyWithShape<S> {
        fn id(&self) -> BodyId {
            BodyId(77)
        }

        fn shape(&self) -> &dyn Shape {
            &self.shape
        }

        fn body_type(&self) -> BodyType {
            BodyType::SoftBody
        }

        fn position(&self) -> Vec3 {
            Vec3::new(1.0, 1.0, 1.0)
        }

        fn rotation(&self) -> Quat {
            Quat::identity()
        }

        fn soft_body_state(&self) -> Option<&SoftBodyState> {
            Some(&self.state)
        }
    }

    /// Shape whose tag promises a box but which is something else
    #[derive(Debug)]
    struct MislabeledBox;

    impl Shape for MislabeledBox {
        fn sub_type(&self) -> ShapeSubType {
            ShapeSubType::Box
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn rigid(shape: impl Shape) -> RigidBody {
        RigidBody::new(BodyId(1), Arc::new(shape))
    }

    fn hull() -> ConvexHullShape {
        ConvexHullShape::new(
            vec![Vec3::zeros(), Vec3::x(), Vec3::y(), Vec3::z()],
            vec![vec![0, 2, 1], vec![0, 1, 3], vec![0, 3, 2], vec![1, 2, 3]],
        )
    }

    fn build(body: &dyn Body) -> RenderableMesh {
        build_mesh_for_body(body, Color::from_hex(RED), &PhysicsTypes::new()).unwrap()
    }

    #[test]
    fn test_box_full_extents_are_twice_half_extents() {
        let mesh = build(&rigid(BoxShape::new(Vec3::new(1.0, 2.0, 3.0))));
        match mesh.geometry {
            Geometry::Box(geometry) => assert_eq!(geometry.size(), Vec3::new(2.0, 4.0, 6.0)),
            other => panic!("expected box geometry, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_sphere_radius_and_tessellation() {
        let mesh = build(&rigid(SphereShape::new(0.75)));
        assert_eq!(mesh.geometry, Geometry::Sphere(SphereGeometry::new(0.75, 32, 32)));
    }

    #[test]
    fn test_capsule_length_is_twice_half_height() {
        let mesh = build(&rigid(CapsuleShape::new(1.5, 0.4)));
        match mesh.geometry {
            Geometry::Capsule(geometry) => {
                assert_eq!(geometry.radius, 0.4);
                assert_eq!(geometry.length, 3.0);
                assert_eq!(geometry.radial_segments, 20);
                assert_eq!(geometry.cap_segments, 10);
            }
            other => panic!("expected capsule geometry, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_cylinder_has_equal_radii() {
        let mesh = build(&rigid(CylinderShape::new(2.0, 0.5)));
        assert_eq!(mesh.geometry, Geometry::Cylinder(CylinderGeometry::new(0.5, 0.5, 4.0, 20, 1)));
    }

    #[test]
    fn test_material_uses_given_color() {
        let mesh = build(&rigid(SphereShape::new(1.0)));
        assert_eq!(mesh.material.color.to_hex(), RED);
        assert_eq!(mesh.material, PhongMaterial::new(Color::from_hex(RED)));
    }

    #[test]
    fn test_pose_is_copied_verbatim() {
        // Deliberately not a unit quaternion; it must not be normalized
        let rotation = quat_from_xyzw(0.1, -0.2, 0.3, 2.0);
        let body = rigid(BoxShape::new(Vec3::new(1.0, 1.0, 1.0)))
            .with_position(Vec3::new(-4.0, 5.5, 1e-3))
            .with_rotation(rotation);

        let mesh = build(&body);
        assert_eq!(mesh.position(), Vec3::new(-4.0, 5.5, 1e-3));
        assert_eq!(quat_to_xyzw(&mesh.rotation()), [0.1, -0.2, 0.3, 2.0]);
    }

    #[test]
    fn test_other_shape_on_rigid_body_uses_shape_geometry_builder() {
        let shapes = CountingShapeGeometry::default();
        let soft = CountingSoftBodyMesh::default();
        let builder = BodyMeshBuilder::with_collaborators(&shapes, &soft);

        let mesh = builder
            .build_mesh_for_body(&rigid(hull()), Color::WHITE, &PhysicsTypes::new())
            .unwrap();
        assert_eq!(shapes.calls.get(), 1);
        assert_eq!(soft.calls.get(), 0);
        assert_eq!(mesh.geometry.kind(), GeometryKind::Buffer);
    }

    #[test]
    fn test_other_shape_on_soft_body_uses_soft_body_builder() {
        let shapes = CountingShapeGeometry::default();
        let soft = CountingSoftBodyMesh::default();
        let builder = BodyMeshBuilder::with_collaborators(&shapes, &soft);
        let body = SoftBody::new(BodyId(4), SoftBodyState::cloth(3, 3, 0.1, false).unwrap())
            .with_position(Vec3::new(0.0, 3.0, 0.0));

        let mesh = builder.build_mesh_for_body(&body, Color::WHITE, &PhysicsTypes::new()).unwrap();
        assert_eq!(shapes.calls.get(), 0);
        assert_eq!(soft.calls.get(), 1);
        assert_eq!(mesh.position(), Vec3::new(0.0, 3.0, 0.0));
    }

    #[test]
    fn test_soft_body_with_primitive_shape_renders_primitive() {
        let shapes = CountingShapeGeometry::default();
        let soft = CountingSoftBodyMesh::default();
        let builder = BodyMeshBuilder::with_collaborators(&shapes, &soft);
        let body = SoftBodyWithShape {
            shape: SphereShape::new(2.0),
            state: SoftBodyState::cloth(2, 2, 1.0, false).unwrap(),
        };

        let mesh = builder.build_mesh_for_body(&body, Color::WHITE, &PhysicsTypes::new()).unwrap();
        assert_eq!(soft.calls.get(), 0);
        assert_eq!(shapes.calls.get(), 0);
        assert_eq!(mesh.geometry.kind(), GeometryKind::Sphere);
    }

    #[test]
    fn test_meshes_are_snapshots() {
        let mut body = rigid(CapsuleShape::new(1.0, 0.5));
        let first = build(&body);

        body.set_position(Vec3::new(0.0, -9.81, 0.0));
        body.set_rotation(Quat::from_axis_angle(&Vec3::z_axis(), 0.5));
        let second = build(&body);

        assert_eq!(first.position(), Vec3::zeros());
        assert_eq!(first.rotation(), Quat::identity());
        assert_eq!(second.position(), Vec3::new(0.0, -9.81, 0.0));
        assert_relative_eq!(second.rotation().angle(), 0.5, epsilon = 1e-6);
        assert_eq!(first.geometry, second.geometry);
    }

    #[test]
    fn test_mislabeled_shape_fails_loudly() {
        let err = build_mesh_for_body(&rigid(MislabeledBox), Color::WHITE, &PhysicsTypes::new()).unwrap_err();
        assert_eq!(
            err,
            MeshBuildError::ShapeCast(ShapeCastError::ConcreteTypeMismatch { sub_type: ShapeSubType::Box })
        );
    }

    #[test]
    fn test_default_builders_end_to_end() {
        let hull_mesh = build(&rigid(hull()));
        assert_eq!(hull_mesh.geometry.to_mesh().triangle_count(), 4);

        let cloth = SoftBody::new(BodyId(2), SoftBodyState::cloth(3, 2, 0.5, true).unwrap());
        let cloth_mesh = build(&cloth);
        assert_eq!(cloth_mesh.geometry.to_mesh().vertices.len(), 6);
    }
}
