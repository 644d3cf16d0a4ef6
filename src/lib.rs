#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::too_many_lines,
    clippy::wildcard_imports
)]

mod core;
mod error;
mod lights;
mod primitives;
mod ray_intersection;
mod render;
mod scene_json;
mod utils;

pub use crate::core::{Color, Image, Material, Point, Texture, DEFAULT_SHININESS, EPSILON};
pub use crate::error::SceneError;
pub use crate::lights::PointLight;
pub use crate::primitives::{Cone, Cylinder, Mesh, Object3D, Primitive, Sphere, Triangle};
pub use crate::ray_intersection::{Hit, Intersectable, Ray};
pub use crate::render::{build_progress_bar, Camera, RenderOptions, Scene};
pub use crate::scene_json::{load_scene, scene_from_json};
