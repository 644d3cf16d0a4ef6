use super::Triangle;
use crate::core::{Color, Material, Point};
use crate::error::SceneError;
use itertools::Itertools;
use nalgebra::Vector3;
use rand::Rng;
use serde::Deserialize;
use std::path::Path;
use tobj::{load_obj, LoadOptions};

fn default_scale() -> f64 {
    1.0
}

fn no_offset() -> Vector3<f64> {
    Vector3::zeros()
}

/// An OBJ file placed in the scene. Never rendered directly: it is expanded
/// into independent triangles when the scene is loaded.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Mesh {
    #[serde(rename = "filepath")]
    file: String,
    #[serde(default = "default_scale")]
    scale: f64,
    #[serde(default = "no_offset")]
    offset: Vector3<f64>,
}

impl Mesh {
    pub fn new(file: &str, scale: f64, offset: Vector3<f64>) -> Self {
        Self {
            file: file.to_string(),
            scale,
            offset,
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    /// Loads the OBJ file as a flat vertex list, three vertices per face.
    pub fn load_vertices(&self, asset_base: &Path) -> Result<Vec<Point>, SceneError> {
        let path = asset_base.join(&self.file);
        let options = LoadOptions {
            triangulate: true,
            single_index: true,
            ..LoadOptions::default()
        };
        let (models, _) = load_obj(&path, &options).map_err(|source| SceneError::Mesh {
            path: path.clone(),
            source,
        })?;

        let mut vertices = Vec::new();
        for model in &models {
            let mesh = &model.mesh;

            let positions: Vec<Point> = mesh
                .positions
                .chunks_exact(3)
                .map(|position| {
                    Point::new(
                        f64::from(position[0]),
                        f64::from(position[1]),
                        f64::from(position[2]),
                    )
                })
                .collect();

            vertices.extend(
                mesh.indices
                    .iter()
                    .filter_map(|&index| positions.get(index as usize).copied()),
            );
        }

        Ok(vertices)
    }

    fn place(&self, vertex: Point) -> Point {
        Point::from(vertex.coords * self.scale + self.offset)
    }

    /// Groups `vertices` three at a time into triangles, each with its own
    /// random material. A trailing incomplete group is dropped.
    pub fn triangles<'a, R: Rng>(
        &'a self,
        vertices: Vec<Point>,
        rng: &'a mut R,
    ) -> impl Iterator<Item = Triangle> + 'a {
        vertices
            .into_iter()
            .map(move |vertex| self.place(vertex))
            .tuples()
            .map(move |(a, b, c)| Triangle::new([a, b, c], random_material(&mut *rng)))
    }
}

pub fn random_material<R: Rng>(rng: &mut R) -> Material {
    let mut channel = || f64::from(rng.gen_range(0..255_u32)) / 1000.0;
    let color = Color::new(channel(), channel(), channel());

    Material::new(color, 0.5, 0.6, 0.9, 64.0)
}
