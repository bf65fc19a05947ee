//! Cylinder geometry

use std::f32::consts::TAU;

use crate::foundation::math::Vec3;
use crate::render::primitives::{Mesh, Vertex};

/// Capped cylinder (or truncated cone) along the Y axis, centered on the origin
#[derive(Debug, Clone, PartialEq)]
pub struct CylinderGeometry {
    /// Radius of the top disc
    pub radius_top: f32,
    /// Radius of the bottom disc
    pub radius_bottom: f32,
    /// Distance between the discs
    pub height: f32,
    /// Segments around the Y axis (at least 3)
    pub radial_segments: u32,
    /// Segments along the Y axis (at least 1)
    pub height_segments: u32,
}

impl CylinderGeometry {
    /// Creates a cylinder; segment counts are raised to their minimum
    pub fn new(radius_top: f32, radius_bottom: f32, height: f32, radial_segments: u32, height_segments: u32) -> Self {
        Self {
            radius_top,
            radius_bottom,
            height,
            radial_segments: radial_segments.max(3),
            height_segments: height_segments.max(1),
        }
    }

    /// Tessellates the side wall plus one fan per disc with a non-zero radius
    pub fn to_mesh(&self) -> Mesh {
        let mut mesh = Mesh::default();
        self.push_torso(&mut mesh);
        if self.radius_top > 0.0 {
            self.push_cap(&mut mesh, true);
        }
        if self.radius_bottom > 0.0 {
            self.push_cap(&mut mesh, false);
        }
        log::trace!(
            "Cylinder h={} tessellated into {} vertices, {} triangles",
            self.height,
            mesh.vertices.len(),
            mesh.triangle_count()
        );
        mesh
    }

    fn push_torso(&self, mesh: &mut Mesh) {
        let (rs, hs) = (self.radial_segments, self.height_segments);
        let half_height = self.height * 0.5;
        let slope = if self.height == 0.0 { 0.0 } else { (self.radius_bottom - self.radius_top) / self.height };
        let base = mesh.vertices.len() as u32;

        for y in 0..=hs {
            let v = y as f32 / hs as f32;
            let radius = v * (self.radius_bottom - self.radius_top) + self.radius_top;
            for x in 0..=rs {
                let u = x as f32 / rs as f32;
                let (sin, cos) = (u * TAU).sin_cos();
                let position = Vec3::new(radius * sin, -v * self.height + half_height, radius * cos);
                let normal = Vec3::new(sin, slope, cos).normalize();
                mesh.vertices.push(Vertex::new(position.into(), normal.into(), [u, 1.0 - v]));
            }
        }

        let row = rs + 1;
        for x in 0..rs {
            for y in 0..hs {
                let a = base + y * row + x;
                let b = base + (y + 1) * row + x;
                let c = base + (y + 1) * row + x + 1;
                let d = base + y * row + x + 1;
                mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }
    }

    fn push_cap(&self, mesh: &mut Mesh, top: bool) {
        let rs = self.radial_segments;
        let (radius, sign) = if top { (self.radius_top, 1.0) } else { (self.radius_bottom, -1.0) };
        let y = self.height * 0.5 * sign;
        let normal = [0.0, sign, 0.0];

        // One center vertex per segment keeps the texture seam clean
        let center_start = mesh.vertices.len() as u32;
        for _ in 0..rs {
            mesh.vertices.push(Vertex::new([0.0, y, 0.0], normal, [0.5, 0.5]));
        }

        let ring_start = mesh.vertices.len() as u32;
        for x in 0..=rs {
            let u = x as f32 / rs as f32;
            let (sin, cos) = (u * TAU).sin_cos();
            mesh.vertices.push(Vertex::new(
                [radius * sin, y, radius * cos],
                normal,
                [cos * 0.5 + 0.5, sin * 0.5 * sign + 0.5],
            ));
        }

        for x in 0..rs {
            let center = center_start + x;
            let ring = ring_start + x;
            if top {
                mesh.indices.extend_from_slice(&[ring, ring + 1, center]);
            } else {
                mesh.indices.extend_from_slice(&[ring + 1, ring, center]);
            }
        }
    }
}
