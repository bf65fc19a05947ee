//! Capsule geometry
//!
//! The capsule is a lathe: a half-circle profile split at the equator and
//! stretched by `length`, revolved around the Y axis.

use std::f32::consts::{FRAC_PI_2, TAU};

use crate::foundation::math::Vec3;
use crate::render::primitives::{Mesh, Vertex};

/// Capsule along the Y axis, centered on the origin
#[derive(Debug, Clone, PartialEq)]
pub struct CapsuleGeometry {
    /// Radius of the cylinder part and the caps
    pub radius: f32,
    /// Length of the cylinder part; the total extent is `length + 2 * radius`
    pub length: f32,
    /// Segments along each hemispherical cap (at least 1)
    pub cap_segments: u32,
    /// Segments around the Y axis (at least 3)
    pub radial_segments: u32,
}

/// A point of the revolved profile: distance from the axis, height, and the
/// profile normal as `(radial, y)`
struct ProfilePoint {
    radial: f32,
    y: f32,
    normal: (f32, f32),
}

impl CapsuleGeometry {
    /// Creates a capsule; segment counts are raised to their minimum
    pub fn new(radius: f32, length: f32, cap_segments: u32, radial_segments: u32) -> Self {
        Self {
            radius,
            length,
            cap_segments: cap_segments.max(1),
            radial_segments: radial_segments.max(3),
        }
    }

    /// Profile from the bottom pole to the top pole, `2 * (cap_segments + 1)` points
    fn profile(&self) -> Vec<ProfilePoint> {
        let half_length = self.length * 0.5;
        let caps = self.cap_segments;
        let mut points = Vec::with_capacity(2 * (caps as usize + 1));

        for (start, center) in [(-FRAC_PI_2, -half_length), (0.0, half_length)] {
            for k in 0..=caps {
                let angle = start + FRAC_PI_2 * (k as f32 / caps as f32);
                let (sin, cos) = angle.sin_cos();
                points.push(ProfilePoint {
                    radial: self.radius * cos,
                    y: center + self.radius * sin,
                    normal: (cos, sin),
                });
            }
        }
        points
    }

    /// Tessellates into `(radial_segments + 1)` profile columns
    ///
    /// Quads touching a pole collapse to one triangle.
    pub fn to_mesh(&self) -> Mesh {
        let profile = self.profile();
        let rs = self.radial_segments;
        let count = profile.len() as u32;
        let mut vertices = Vec::with_capacity(((rs + 1) * count) as usize);
        let mut indices = Vec::new();

        for i in 0..=rs {
            let u = i as f32 / rs as f32;
            let (sin, cos) = (u * TAU).sin_cos();
            for (j, point) in profile.iter().enumerate() {
                let position = Vec3::new(point.radial * sin, point.y, point.radial * cos);
                let normal = Vec3::new(point.normal.0 * sin, point.normal.1, point.normal.0 * cos);
                let v = j as f32 / (count - 1) as f32;
                vertices.push(Vertex::new(position.into(), normal.into(), [u, v]));
            }
        }

        for i in 0..rs {
            for j in 0..count - 1 {
                let a = i * count + j;
                let b = a + count;
                let c = b + 1;
                let d = a + 1;
                if j != 0 {
                    indices.extend_from_slice(&[a, b, d]);
                }
                if j != count - 2 {
                    indices.extend_from_slice(&[c, d, b]);
                }
            }
        }

        log::trace!("Capsule r={} l={} tessellated into {} vertices", self.radius, self.length, vertices.len());
        Mesh::new(vertices, indices)
    }
}
