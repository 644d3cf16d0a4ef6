mod image;
mod material;
mod texture;

use nalgebra::{Point3, Vector3};

pub use self::image::Image;
pub use material::Material;
pub use texture::Texture;

pub type Color = Vector3<f64>;
pub type Point = Point3<f64>;

/// Lower bound for accepted ray parameters and denominators.
pub const EPSILON: f64 = 1e-6;
/// Weight applied to every mirror bounce.
pub const DEFAULT_SHININESS: f64 = 0.2;
