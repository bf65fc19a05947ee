//! Wavefront OBJ export of built meshes

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use shape_mesh::prelude::RenderableMesh;

/// Writes every mesh as a named OBJ object in world space
///
/// Indices are offset so all objects share one vertex list, as OBJ requires.
pub fn write_obj<'a, W: Write>(
    out: &mut W,
    meshes: impl IntoIterator<Item = (&'a str, &'a RenderableMesh)>,
) -> io::Result<()> {
    let mut offset = 1u32;
    for (name, renderable) in meshes {
        let mesh = renderable.world_mesh();
        writeln!(out, "o {name}")?;
        for vertex in &mesh.vertices {
            let [x, y, z] = vertex.position;
            writeln!(out, "v {x} {y} {z}")?;
        }
        for vertex in &mesh.vertices {
            let [x, y, z] = vertex.normal;
            writeln!(out, "vn {x} {y} {z}")?;
        }
        for triangle in mesh.indices.chunks_exact(3) {
            let [a, b, c] = [triangle[0], triangle[1], triangle[2]].map(|index| index + offset);
            writeln!(out, "f {a}//{a} {b}//{b} {c}//{c}")?;
        }
        offset += mesh.vertices.len() as u32;
    }
    Ok(())
}

/// Writes the meshes to an OBJ file at `path`
pub fn export_obj<'a>(
    path: impl AsRef<Path>,
    meshes: impl IntoIterator<Item = (&'a str, &'a RenderableMesh)>,
) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_obj(&mut out, meshes)?;
    out.flush()
}
