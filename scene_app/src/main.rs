//! Scene mesh demo
//!
//! Loads a scene file, builds a render mesh for every body, optionally moves
//! the bodies for a few kinematic steps and rebuilds, then optionally writes
//! the final meshes to an OBJ file.

mod obj_export;
mod scene;
mod scene_config;

use std::env;
use std::path::PathBuf;

use shape_mesh::config::{Config, ConfigError};
use shape_mesh::foundation::logging;
use shape_mesh::foundation::math::quat_to_xyzw;
use shape_mesh::physics::PhysicsTypes;
use shape_mesh::prelude::{MeshBuildError, RenderableMesh};
use thiserror::Error;

use crate::scene::{Scene, SceneError};
use crate::scene_config::SceneConfig;

const USAGE: &str = "Usage: scene_app [SCENE_FILE] [--steps N] [--dt SECONDS] [--export OBJ_PATH]";
const DEFAULT_SCENE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/scenes/demo.toml");

/// Errors that end the demo
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Scene config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    #[error("Mesh build error: {0}")]
    Mesh(#[from] MeshBuildError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}\n{}", USAGE)]
    Usage(String),
}

#[derive(Debug, Clone, PartialEq)]
struct Args {
    scene: PathBuf,
    steps: u32,
    dt: f32,
    export: Option<PathBuf>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            scene: PathBuf::from(DEFAULT_SCENE),
            steps: 0,
            dt: 1.0 / 60.0,
            export: None,
        }
    }
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args, AppError> {
    let mut parsed = Args::default();
    let mut scene_given = false;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next().ok_or_else(|| AppError::Usage(format!("{flag} needs a value")))
        };
        match arg.as_str() {
            "--steps" => {
                let raw = value("--steps")?;
                parsed.steps = raw.parse().map_err(|_| AppError::Usage(format!("invalid step count '{raw}'")))?;
            }
            "--dt" => {
                let raw = value("--dt")?;
                parsed.dt = raw.parse().map_err(|_| AppError::Usage(format!("invalid time step '{raw}'")))?;
            }
            "--export" => parsed.export = Some(PathBuf::from(value("--export")?)),
            flag if flag.starts_with("--") => return Err(AppError::Usage(format!("unknown option '{flag}'"))),
            path if !scene_given => {
                parsed.scene = PathBuf::from(path);
                scene_given = true;
            }
            extra => return Err(AppError::Usage(format!("unexpected argument '{extra}'"))),
        }
    }
    Ok(parsed)
}

fn log_meshes(meshes: &[(&str, RenderableMesh)]) {
    for (name, mesh) in meshes {
        let buffers = mesh.geometry.to_mesh();
        let [x, y, z, w] = quat_to_xyzw(&mesh.rotation());
        let position = mesh.position();
        log::info!(
            "{name}: {} geometry, {} vertices, {} indices, color #{:06x}, position ({:.3}, {:.3}, {:.3}), rotation ({x:.3}, {y:.3}, {z:.3}, {w:.3})",
            mesh.geometry.kind(),
            buffers.vertices.len(),
            buffers.indices.len(),
            mesh.material.color.to_hex(),
            position.x,
            position.y,
            position.z,
        );
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let config = SceneConfig::load_from_file(&args.scene)?;
    logging::init_with_default(&config.log_level);
    log::info!("Loaded scene {} with {} bodies", args.scene.display(), config.bodies.len());

    let types = PhysicsTypes::new();
    let mut scene = Scene::from_config(&config)?;
    log_meshes(&scene.build_meshes(&types)?);

    if args.steps > 0 {
        for _ in 0..args.steps {
            scene.step(args.dt);
        }
        log::info!("Stepped {} times with dt {}s; rebuilding meshes", args.steps, args.dt);
        log_meshes(&scene.build_meshes(&types)?);
    }

    if let Some(path) = &args.export {
        let meshes = scene.build_meshes(&types)?;
        obj_export::export_obj(path, meshes.iter().map(|(name, mesh)| (*name, mesh)))?;
        log::info!("Exported {} meshes to {}", meshes.len(), path.display());
    }

    Ok(())
}

fn main() {
    let result = parse_args(env::args().skip(1)).and_then(run);
    if let Err(e) = result {
        log::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
