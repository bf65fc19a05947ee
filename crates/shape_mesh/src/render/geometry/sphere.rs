//! UV sphere geometry

use std::f32::consts::{PI, TAU};

use crate::foundation::math::Vec3;
use crate::render::primitives::{Mesh, Vertex};

/// UV sphere centered on the origin, poles on the Y axis
#[derive(Debug, Clone, PartialEq)]
pub struct SphereGeometry {
    /// Sphere radius
    pub radius: f32,
    /// Segments around the Y axis (at least 3)
    pub width_segments: u32,
    /// Segments from pole to pole (at least 2)
    pub height_segments: u32,
}

impl SphereGeometry {
    /// Creates a sphere; segment counts are raised to their minimum
    pub fn new(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        Self {
            radius,
            width_segments: width_segments.max(3),
            height_segments: height_segments.max(2),
        }
    }

    /// Tessellates into a `(width + 1) × (height + 1)` vertex grid
    ///
    /// The seam column is duplicated for texture coordinates. Rows touching a
    /// pole emit a single triangle per segment.
    pub fn to_mesh(&self) -> Mesh {
        let (ws, hs) = (self.width_segments, self.height_segments);
        let mut vertices = Vec::with_capacity(((ws + 1) * (hs + 1)) as usize);
        let mut indices = Vec::new();

        for iy in 0..=hs {
            let v = iy as f32 / hs as f32;
            let theta = v * PI;
            // Nudge pole texture coordinates to the middle of their segment
            let u_offset = if iy == 0 {
                0.5 / ws as f32
            } else if iy == hs {
                -0.5 / ws as f32
            } else {
                0.0
            };

            for ix in 0..=ws {
                let u = ix as f32 / ws as f32;
                let phi = u * TAU;
                let direction = Vec3::new(-phi.cos() * theta.sin(), theta.cos(), phi.sin() * theta.sin());
                vertices.push(Vertex::new(
                    (direction * self.radius).into(),
                    direction.into(),
                    [u + u_offset, 1.0 - v],
                ));
            }
        }

        let row = ws + 1;
        for iy in 0..hs {
            for ix in 0..ws {
                let a = iy * row + ix + 1;
                let b = iy * row + ix;
                let c = (iy + 1) * row + ix;
                let d = (iy + 1) * row + ix + 1;

                if iy != 0 {
                    indices.extend_from_slice(&[a, b, d]);
                }
                if iy != hs - 1 {
                    indices.extend_from_slice(&[b, c, d]);
                }
            }
        }

        log::trace!("Sphere r={} tessellated into {} vertices", self.radius, vertices.len());
        Mesh::new(vertices, indices)
    }
}
