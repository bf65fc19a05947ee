//! Scene file format
//!
//! A scene is a list of bodies, each with a shape, a pose, an optional
//! velocity and an optional color. Shapes are tagged by `type`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shape_mesh::config::Config;
use shape_mesh::foundation::math::{quat_from_xyzw, quat_normalized_from_xyzw, Transform, Vec3};
use shape_mesh::physics::{
    BoxShape,
    CapsuleShape,
    ConvexHullShape,
    CylinderShape,
    MeshShape,
    ScaledShape,
    Shape,
    SphereShape,
    StaticCompoundShape,
};
use shape_mesh::render::Color;
use thiserror::Error;

/// Shape descriptions that cannot become a collision shape
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeConfigError {
    #[error("Cloth can only be the top-level shape of a body")]
    NestedCloth,

    #[error("Compound child rotation {0:?} has zero length")]
    ZeroRotation([f32; 4]),
}

/// Top-level scene file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Default log filter, overridden by `RUST_LOG`
    pub log_level: String,
    /// Bodies in the scene
    pub bodies: Vec<BodyConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            bodies: Vec::new(),
        }
    }
}

impl Config for SceneConfig {}

fn identity_rotation() -> [f32; 4] {
    [0.0, 0.0, 0.0, 1.0]
}

/// One body of the scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyConfig {
    /// Name used in logs and exported files
    pub name: String,
    /// Collision shape; `cloth` makes this a soft body
    pub shape: ShapeConfig,
    /// World position
    #[serde(default)]
    pub position: [f32; 3],
    /// World rotation as `[x, y, z, w]`, used as given
    #[serde(default = "identity_rotation")]
    pub rotation: [f32; 4],
    /// Velocity applied on every kinematic step
    #[serde(default)]
    pub linear_velocity: [f32; 3],
    /// Display color as `0xRRGGBB`; a random one is picked when absent
    #[serde(default)]
    pub color: Option<Color>,
}

/// Child entry of a compound shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundChildConfig {
    /// Offset from the compound origin
    #[serde(default)]
    pub position: [f32; 3],
    /// Rotation relative to the compound as `[x, y, z, w]`
    #[serde(default = "identity_rotation")]
    pub rotation: [f32; 4],
    /// The child shape
    pub shape: ShapeConfig,
}

/// Shape description
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeConfig {
    /// Box from half extents
    Box {
        /// Half size along each axis
        half_extent: [f32; 3],
    },
    /// Sphere
    Sphere {
        /// Radius
        radius: f32,
    },
    /// Capsule along Y
    Capsule {
        /// Radius
        radius: f32,
        /// Half height of the cylinder part
        half_height: f32,
    },
    /// Cylinder along Y
    Cylinder {
        /// Radius
        radius: f32,
        /// Half height
        half_height: f32,
    },
    /// Convex hull from points and polygon faces
    ConvexHull {
        /// Hull points
        points: Vec<[f32; 3]>,
        /// Counter-clockwise polygons of point indices
        faces: Vec<Vec<u32>>,
    },
    /// Triangle mesh
    Mesh {
        /// Mesh vertices
        vertices: Vec<[f32; 3]>,
        /// Counter-clockwise triangles
        triangles: Vec<[u32; 3]>,
    },
    /// Static compound
    Compound {
        /// Children with local placement
        children: Vec<CompoundChildConfig>,
    },
    /// Scaled shape
    Scaled {
        /// Per-axis scale
        scale: [f32; 3],
        /// Shape being scaled
        shape: Box<ShapeConfig>,
    },
    /// Soft cloth grid in the local XZ plane
    Cloth {
        /// Vertices along X
        columns: u32,
        /// Vertices along Z
        rows: u32,
        /// Distance between neighbouring vertices
        spacing: f32,
        /// Pin the first row in place
        #[serde(default)]
        pin_top_edge: bool,
    },
}

impl ShapeConfig {
    /// Builds the rigid collision shape; `None` for a top-level cloth
    ///
    /// Compound child rotations are normalized. A cloth nested in a compound
    /// or scaled shape is an error.
    pub fn to_rigid_shape(&self) -> Result<Option<Arc<dyn Shape>>, ShapeConfigError> {
        let shape: Arc<dyn Shape> = match self {
            Self::Box { half_extent } => Arc::new(BoxShape::new(Vec3::from(*half_extent))),
            Self::Sphere { radius } => Arc::new(SphereShape::new(*radius)),
            Self::Capsule { radius, half_height } => Arc::new(CapsuleShape::new(*half_height, *radius)),
            Self::Cylinder { radius, half_height } => Arc::new(CylinderShape::new(*half_height, *radius)),
            Self::ConvexHull { points, faces } => Arc::new(ConvexHullShape::new(
                points.iter().copied().map(Vec3::from).collect(),
                faces.clone(),
            )),
            Self::Mesh { vertices, triangles } => Arc::new(MeshShape::new(
                vertices.iter().copied().map(Vec3::from).collect(),
                triangles.clone(),
            )),
            Self::Compound { children } => {
                let mut compound = StaticCompoundShape::default();
                for child in children {
                    let [x, y, z, w] = child.rotation;
                    let rotation = quat_normalized_from_xyzw(x, y, z, w)
                        .ok_or(ShapeConfigError::ZeroRotation(child.rotation))?;
                    let transform = Transform::from_position_rotation(Vec3::from(child.position), rotation);
                    compound = compound.with_child(transform, child.shape.nested_shape()?);
                }
                Arc::new(compound)
            }
            Self::Scaled { scale, shape } => Arc::new(ScaledShape::new(shape.nested_shape()?, Vec3::from(*scale))),
            Self::Cloth { .. } => return Ok(None),
        };
        Ok(Some(shape))
    }

    fn nested_shape(&self) -> Result<Arc<dyn Shape>, ShapeConfigError> {
        self.to_rigid_shape()?.ok_or(ShapeConfigError::NestedCloth)
    }
}

/// Rotation from `[x, y, z, w]`, without normalizing
pub fn quat_from_array(rotation: [f32; 4]) -> shape_mesh::foundation::math::Quat {
    let [x, y, z, w] = rotation;
    quat_from_xyzw(x, y, z, w)
}
