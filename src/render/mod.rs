mod scene;

use crate::core::Point;
use crate::ray_intersection::Ray;
use indicatif::{ProgressBar, ProgressStyle};
use nalgebra::{Matrix4, Vector3};
use serde::Deserialize;

pub use scene::Scene;

/// Pinhole look-at camera placed at the scene's eye.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Camera {
    pub target: Point,
    pub up: Vector3<f64>,
    pub fov: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            target: Point::origin(),
            up: Vector3::y(),
            fov: 60.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    #[serde(rename = "Width")]
    pub width: u32,
    #[serde(rename = "Height")]
    pub height: u32,
    #[serde(rename = "Shadows")]
    pub shadows: bool,
    #[serde(rename = "SuperSamplingFactor")]
    pub ss_factor: u32,
    #[serde(rename = "MaxRecursionDepth")]
    pub recursion_depth: u32,
    #[serde(rename = "MeshSeed")]
    pub mesh_seed: u64,
    #[serde(rename = "Camera")]
    pub camera: Option<Camera>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            shadows: false,
            ss_factor: 1,
            recursion_depth: 0,
            mesh_seed: 0,
            camera: None,
        }
    }
}

/// Maps sub-pixel sample positions to primary rays.
#[derive(Debug)]
enum Projection {
    /// Pixel `(x, y)` covers `[x, x + 1] × [h - 1 - y, h - y]` on the plane `z = 0`.
    PixelPlane { eye: Point, height: u32 },
    Pinhole {
        eye: Point,
        fov: f64,
        width: f64,
        height: f64,
        camera_to_world: Matrix4<f64>,
    },
}

impl Projection {
    fn new(eye: Point, camera: Option<&Camera>, width: u32, height: u32) -> Self {
        match camera {
            None => Projection::PixelPlane { eye, height },
            Some(camera) => Projection::Pinhole {
                eye,
                fov: (camera.fov.to_radians() / 2.0).tan(),
                width: f64::from(width),
                height: f64::from(height),
                camera_to_world: Matrix4::look_at_rh(&eye, &camera.target, &camera.up)
                    .transpose(),
            },
        }
    }

    /// `dx` and `dy` are offsets inside the pixel, in `[0, 1)`.
    fn primary_ray(&self, x: u32, y: u32, dx: f64, dy: f64) -> Ray {
        match self {
            Projection::PixelPlane { eye, height } => {
                let target = Point::new(
                    f64::from(x) + dx,
                    f64::from(*height) - 1.0 - f64::from(y) + dy,
                    0.0,
                );
                Ray::new(*eye, target - *eye)
            }
            Projection::Pinhole {
                eye,
                fov,
                width,
                height,
                camera_to_world,
            } => {
                let aspect = width / height;
                let px = (2.0 * (f64::from(x) + dx) / width - 1.0) * aspect * fov;
                let py = (1.0 - 2.0 * (f64::from(y) + 1.0 - dy) / height) * fov;

                let direction = Vector3::new(px, py, -1.0);
                let direction = (camera_to_world * direction.to_homogeneous()).xyz();
                Ray::new(*eye, direction)
            }
        }
    }
}

/// Progress bar ticking once per rendered row.
pub fn build_progress_bar(height: u32) -> ProgressBar {
    let progress = ProgressBar::new(height.into());
    progress.set_style(ProgressStyle::default_bar().template(
        "[{elapsed_precise} elapsed] [{eta_precise} left] {bar:40} {pos}/{len} rows",
    ));

    progress
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn it_defaults_render_options() {
        let options: RenderOptions = serde_json::from_value(json!({})).unwrap();

        assert_eq!(options, RenderOptions::default());
        assert_eq!((options.width, options.height), (400, 400));
    }

    #[test]
    fn it_deserializes_render_options() {
        let options: RenderOptions = serde_json::from_value(json!({
            "Width": 200,
            "Height": 100,
            "Shadows": true,
            "SuperSamplingFactor": 3,
            "MaxRecursionDepth": 2,
            "MeshSeed": 42,
            "Camera": { "target": [0, 0, -5], "fov": 45 }
        }))
        .unwrap();

        assert_eq!(options.width, 200);
        assert!(options.shadows);
        assert_eq!(options.ss_factor, 3);
        assert_eq!(options.recursion_depth, 2);
        assert_eq!(options.mesh_seed, 42);

        let camera = options.camera.unwrap();
        assert_eq!(camera.target, Point::new(0.0, 0.0, -5.0));
        assert_eq!(camera.up, Vector3::y());
    }

    #[test]
    fn it_projects_pixels_onto_the_pixel_plane() {
        let projection = Projection::new(Point::new(2.0, 1.0, 10.0), None, 4, 3);
        let ray = projection.primary_ray(0, 0, 0.5, 0.5);

        let expected = (Point::new(0.5, 2.5, 0.0) - Point::new(2.0, 1.0, 10.0)).normalize();
        assert!((ray.direction - expected).norm() < 1e-12);
    }

    #[test]
    fn it_points_the_camera_at_its_target() {
        let camera = Camera {
            target: Point::new(3.0, 0.0, 0.0),
            ..Camera::default()
        };
        let projection = Projection::new(Point::origin(), Some(&camera), 5, 5);
        let ray = projection.primary_ray(2, 2, 0.5, 0.5);

        assert!((ray.direction - Vector3::x()).norm() < 1e-9);
    }
}
