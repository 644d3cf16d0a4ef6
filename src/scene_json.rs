use crate::core::{Material, Point, Texture};
use crate::error::SceneError;
use crate::lights::PointLight;
use crate::primitives::Object3D;
use crate::render::{RenderOptions, Scene};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct SceneDescription {
    #[serde(rename = "Eye")]
    eye: Point,
    // Entries are kept raw so a malformed one only drops itself
    #[serde(rename = "Lights", default)]
    lights: Vec<Value>,
    #[serde(rename = "Objects", default)]
    objects: Vec<Value>,
    #[serde(flatten)]
    settings: Map<String, Value>,
}

/// Reads a scene file. Assets are resolved relative to its directory.
pub fn load_scene(path: &Path) -> Result<Scene, SceneError> {
    let file = File::open(path).map_err(|source| SceneError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_reader(BufReader::new(file))?;

    scene_from_json(value, path.parent().unwrap_or_else(|| Path::new("")))
}

pub fn scene_from_json(value: Value, asset_base: &Path) -> Result<Scene, SceneError> {
    let description: SceneDescription = serde_json::from_value(value)?;

    let options = render_options(description.settings)?;

    let mut scene = Scene::new(description.eye, options);
    let mut rng = StdRng::seed_from_u64(scene.options.mesh_seed);

    for (index, light) in description.lights.into_iter().enumerate() {
        match serde_json::from_value::<PointLight>(light) {
            Ok(light) => scene.add_light(light),
            Err(error) => warn!("Skipping light {}: {}", index, error),
        }
    }

    for (index, object) in description.objects.into_iter().enumerate() {
        let object: Object3D = match serde_json::from_value(object) {
            Ok(object) => object,
            Err(error) => {
                warn!("Skipping object {}: {}", index, error);
                continue;
            }
        };

        match object {
            Object3D::Mesh(mesh) => {
                let vertices = mesh.load_vertices(asset_base)?;
                let before = scene.num_objects();
                for triangle in mesh.triangles(vertices, &mut rng) {
                    scene.add_object(triangle);
                }
                debug!(
                    "Expanded {} into {} triangles",
                    mesh.file(),
                    scene.num_objects() - before
                );
            }
            object => {
                if let Some(primitive) = object.into_primitive() {
                    load_texture(&mut scene, primitive.material(), asset_base)?;
                    scene.add_object(primitive);
                }
            }
        }
    }

    info!("Parsed {} objects.", scene.num_objects());
    Ok(scene)
}

/// Settings that fail to parse on their own are dropped and left at their
/// defaults.
fn render_options(settings: Map<String, Value>) -> Result<RenderOptions, SceneError> {
    let settings: Map<String, Value> = settings
        .into_iter()
        .filter(|(key, value)| {
            let mut single = Map::new();
            single.insert(key.clone(), value.clone());
            match serde_json::from_value::<RenderOptions>(Value::Object(single)) {
                Ok(_) => true,
                Err(error) => {
                    warn!("Ignoring setting {}: {}", key, error);
                    false
                }
            }
        })
        .collect();

    Ok(serde_json::from_value(Value::Object(settings))?)
}

fn load_texture(
    scene: &mut Scene,
    material: &Material,
    asset_base: &Path,
) -> Result<(), SceneError> {
    if let Some(name) = &material.texture {
        if !scene.has_texture(name) {
            let path = asset_base.join(name);
            let texture =
                Texture::load(&path).map_err(|source| SceneError::Texture { path, source })?;
            debug!("Loaded texture {} ({:?})", name, texture);
            scene.add_texture(name, texture);
        }
    }

    Ok(())
}
