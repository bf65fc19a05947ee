//! Core primitive types for rendering
//!
//! This module contains the fundamental buffer types every geometry
//! tessellates into.

pub mod mesh;

// Re-export commonly used types
pub use mesh::{Mesh, Vertex};
