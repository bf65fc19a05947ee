//! Bodies loaded from a scene file
//!
//! The scene owns the bodies and moves them kinematically; it has no
//! collision response. Meshes are snapshots, so they are rebuilt after every
//! step that should be drawn.

use rand::Rng;
use shape_mesh::foundation::math::Vec3;
use shape_mesh::physics::{Body, BodyId, ClothSizeError, PhysicsTypes, RigidBody, SoftBody, SoftBodyState};
use shape_mesh::prelude::{build_mesh_for_body, MeshBuildError, RenderableMesh};
use shape_mesh::render::Color;
use thiserror::Error;

use crate::scene_config::{quat_from_array, SceneConfig, ShapeConfig, ShapeConfigError};

/// A body of the scene file that cannot be instantiated
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Body '{body}': {source}")]
    Shape {
        body: String,
        source: ShapeConfigError,
    },

    #[error("Body '{body}': {source}")]
    Cloth {
        body: String,
        source: ClothSizeError,
    },
}

/// Rigid or soft body held by the scene
#[derive(Debug)]
pub enum SceneBody {
    /// Rigid body
    Rigid(RigidBody),
    /// Soft body
    Soft(SoftBody),
}

impl SceneBody {
    /// The body behind the trait the mesh builder consumes
    pub fn as_body(&self) -> &dyn Body {
        match self {
            Self::Rigid(body) => body,
            Self::Soft(body) => body,
        }
    }

    fn translate(&mut self, offset: Vec3) {
        match self {
            Self::Rigid(body) => body.set_position(body.position() + offset),
            Self::Soft(body) => body.set_position(body.position() + offset),
        }
    }
}

/// One named body with its display color
#[derive(Debug)]
pub struct SceneEntry {
    pub name: String,
    pub body: SceneBody,
    /// Constant velocity used by [`Scene::step`]
    pub velocity: Vec3,
    pub color: Color,
}

/// Every body of a loaded scene
#[derive(Debug, Default)]
pub struct Scene {
    entries: Vec<SceneEntry>,
}

impl Scene {
    /// Creates the bodies described by `config`
    ///
    /// Bodies get sequential ids starting at 1. Bodies without a color get a
    /// random one. The first body that cannot be built aborts loading.
    pub fn from_config(config: &SceneConfig) -> Result<Self, SceneError> {
        let mut rng = rand::thread_rng();
        let mut entries = Vec::with_capacity(config.bodies.len());

        for (index, body) in config.bodies.iter().enumerate() {
            let id = BodyId(index as u32 + 1);
            let position = Vec3::from(body.position);
            let rotation = quat_from_array(body.rotation);

            let rigid_shape = body.shape.to_rigid_shape().map_err(|source| SceneError::Shape {
                body: body.name.clone(),
                source,
            })?;
            let scene_body = match (rigid_shape, &body.shape) {
                (Some(shape), _) => SceneBody::Rigid(
                    RigidBody::new(id, shape).with_position(position).with_rotation(rotation),
                ),
                (None, ShapeConfig::Cloth { columns, rows, spacing, pin_top_edge }) => {
                    let state = SoftBodyState::cloth(*columns, *rows, *spacing, *pin_top_edge).map_err(|source| {
                        SceneError::Cloth {
                            body: body.name.clone(),
                            source,
                        }
                    })?;
                    SceneBody::Soft(SoftBody::new(id, state).with_position(position).with_rotation(rotation))
                }
                (None, _) => {
                    return Err(SceneError::Shape {
                        body: body.name.clone(),
                        source: ShapeConfigError::NestedCloth,
                    })
                }
            };

            let color = body.color.unwrap_or_else(|| {
                let color = Color::from_hex(rng.gen_range(0..=0x00ff_ffff));
                log::debug!("Body '{}' has no color, picked #{:06x}", body.name, color.to_hex());
                color
            });

            entries.push(SceneEntry {
                name: body.name.clone(),
                body: scene_body,
                velocity: Vec3::from(body.linear_velocity),
                color,
            });
        }

        Ok(Self { entries })
    }

    /// Bodies in file order
    pub fn entries(&self) -> &[SceneEntry] {
        &self.entries
    }

    /// Advances every body along its velocity
    pub fn step(&mut self, dt: f32) {
        for entry in &mut self.entries {
            entry.body.translate(entry.velocity * dt);
        }
    }

    /// Builds a mesh snapshot for every body
    pub fn build_meshes(&self, types: &PhysicsTypes) -> Result<Vec<(&str, RenderableMesh)>, MeshBuildError> {
        self.entries
            .iter()
            .map(|entry| {
                let mesh = build_mesh_for_body(entry.body.as_body(), entry.color, types)?;
                Ok((entry.name.as_str(), mesh))
            })
            .collect()
    }
}
