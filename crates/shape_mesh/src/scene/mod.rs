//! Scene objects handed to a renderer

pub mod renderable_object;

pub use renderable_object::RenderableMesh;
