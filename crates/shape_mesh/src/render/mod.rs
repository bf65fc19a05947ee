//! Rendering-side data model
//!
//! Geometry descriptors, the buffers they tessellate into, and materials.
//! Nothing here talks to a GPU; a backend consumes [`Mesh`] buffers and
//! [`PhongMaterial`] parameters.

pub mod primitives;
pub mod geometry;
pub mod material;

pub use primitives::{Mesh, Vertex};
pub use geometry::{
    Geometry,
    GeometryKind,
    BoxGeometry,
    SphereGeometry,
    CapsuleGeometry,
    CylinderGeometry,
    BufferGeometry,
};
pub use material::{Color, PhongMaterial};
